// TUI module - Terminal User Interface
//
// Owns the terminal (alternate screen, raw mode, mouse capture) and runs
// the event loop: keyboard/mouse input, timer ticks that drive the
// reveal/swap transitions, and resize events that retypeset the quote.
// Input, keyboard and mouse alike, is only subscribed between setup and
// teardown here, so nothing outlives the display.

pub mod app;
pub mod input;
pub mod typography;
pub mod ui;

use crate::config::Config;
use crate::logging::LogBuffer;
use crate::quotes::QuoteLibrary;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

/// Run the TUI
///
/// Sets up the terminal, runs the event loop until the user quits, and
/// restores the terminal - including on the error path, so a failure
/// inside the loop doesn't leave the shell in raw mode.
pub async fn run_tui(config: Config, library: QuoteLibrary, log_buffer: LogBuffer) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let cols = terminal.size().map(|s| s.width).unwrap_or(80);
    let mut app = App::new(library, &config, log_buffer, cols);

    let result = run_event_loop(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Two event sources feed the app:
/// 1. Terminal input (keys, mouse clicks, resize)
/// 2. Timer ticks, which advance the transition state machine and keep
///    the fade animation moving
///
/// tokio::select! waits on both at once; whichever fires first wins.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    // Tick fast enough that a 400ms transition deadline is never late by
    // a visible amount
    let mut tick_interval = tokio::time::interval(Duration::from_millis(50));

    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard, mouse or resize input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, key_event),
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                        Ok(Event::Resize(cols, _rows)) => app.resize(cols),
                        _ => {}
                    }
                }
            } => {}

            // Periodic tick: check transition deadlines
            _ = tick_interval.tick() => {
                app.tick(Instant::now());
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input.
///
/// The three designated advance keys are consumed here; everything else
/// is app chrome (quit, theme, overlays) or ignored.
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    match key_event.kind {
        KeyEventKind::Press => {
            let key = key_event.code;
            match key {
                // Advance to the next quote
                KeyCode::Right | KeyCode::Char(' ') | KeyCode::Enter => {
                    if app.handle_key_press(key) {
                        app.advance(Instant::now());
                    }
                }
                // Quit
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                    if app.handle_key_press(key) {
                        app.should_quit = true;
                    }
                }
                // Cycle color theme
                KeyCode::Char('t') | KeyCode::Char('T') => {
                    if app.handle_key_press(key) {
                        app.next_theme();
                    }
                }
                // Toggle char/word-count readout
                KeyCode::Char('d') | KeyCode::Char('D') => {
                    if app.handle_key_press(key) {
                        app.toggle_debug();
                    }
                }
                // Toggle log overlay
                KeyCode::Char('l') | KeyCode::Char('L') => {
                    if app.handle_key_press(key) {
                        app.toggle_logs();
                    }
                }
                // All other keys are ignored
                _ => {}
            }
        }
        KeyEventKind::Release => {
            app.handle_key_release(key_event.code);
        }
        _ => {}
    }
}

/// Handle mouse input: a press anywhere on the surface advances
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    if let MouseEventKind::Down(_) = mouse_event.kind {
        app.advance(Instant::now());
    }
}
