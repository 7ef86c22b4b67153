// TUI application state
//
// Owns the quote collection, the recency history, and the transition
// state machine. Timed transitions are not fire-and-forget callbacks:
// the current phase carries its own deadline and the event loop's ticks
// ask the app to check it. At most one deadline exists at a time, a
// trigger while one is pending is ignored, and quitting drops the phase
// with everything else - nothing can fire against a torn-down terminal.

use super::input::InputHandler;
use super::typography::{self, SizingPolicy, TypeSetting, CELL_PX};
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::quotes::{selector, History, Quote, QuoteLibrary};
use crate::theme::{Theme, ThemeKind};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{Duration, Instant};

/// Delay between mount and the first reveal
pub const REVEAL_DELAY: Duration = Duration::from_millis(500);

/// Hidden window between a trigger and the swapped-in next quote
pub const SWAP_DELAY: Duration = Duration::from_millis(400);

/// How long a freshly revealed quote renders dimmed (fade-in stand-in)
pub const FADE_IN: Duration = Duration::from_millis(250);

/// Where the display is in its reveal/swap cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No quotes available - placeholder shown indefinitely
    Loading,
    /// Initial quote chosen but not yet revealed
    RevealWait { deadline: Instant },
    /// Quote on screen, accepting advance triggers
    Visible { revealed_at: Instant },
    /// Hidden window after a trigger, before the next quote appears
    Swap { deadline: Instant },
}

/// What the renderer should do with the quote block right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fade {
    Hidden,
    Dimmed,
    Full,
}

/// Main application state for the TUI
pub struct App {
    /// The immutable collection supplied at startup
    library: QuoteLibrary,

    /// Recency buffer of shown quote ids
    history: History,

    /// Index of the quote currently held by the display (set in all
    /// phases except Loading)
    current: Option<usize>,

    /// Transition state machine
    pub phase: Phase,

    /// Typesetting for the current quote at the current width
    pub typesetting: Option<TypeSetting>,

    /// Terminal width in columns (tracked across resize events)
    viewport_cols: u16,

    sizing: SizingPolicy,
    rng: StdRng,

    /// Current color theme
    pub theme: Theme,
    theme_kind: ThemeKind,
    use_theme_background: bool,

    /// Show the char/word-count readout
    pub show_debug: bool,

    /// Show the log overlay
    pub show_logs: bool,

    /// Log buffer for the overlay
    pub log_buffer: LogBuffer,

    /// Whether the app should quit
    pub should_quit: bool,

    input_handler: InputHandler,
}

impl App {
    pub fn new(library: QuoteLibrary, config: &Config, log_buffer: LogBuffer, viewport_cols: u16) -> Self {
        Self::with_rng(
            library,
            config,
            log_buffer,
            viewport_cols,
            StdRng::from_os_rng(),
            Instant::now(),
        )
    }

    /// Construct with an explicit RNG and mount time (tests seed both)
    pub fn with_rng(
        library: QuoteLibrary,
        config: &Config,
        log_buffer: LogBuffer,
        viewport_cols: u16,
        mut rng: StdRng,
        now: Instant,
    ) -> Self {
        let theme_kind = ThemeKind::from_name(&config.theme);
        let mut history = History::new();

        // Mount: pick the initial quote and schedule its reveal. An empty
        // collection parks the display in the placeholder state instead.
        let (current, phase) = match selector::pick(library.quotes(), &history, &mut rng) {
            Some(idx) => {
                history.record(&library.quotes()[idx].id);
                (
                    Some(idx),
                    Phase::RevealWait {
                        deadline: now + REVEAL_DELAY,
                    },
                )
            }
            None => (None, Phase::Loading),
        };

        let mut app = Self {
            library,
            history,
            current,
            phase,
            typesetting: None,
            viewport_cols,
            sizing: config.sizing,
            rng,
            theme: theme_kind.resolve(config.use_theme_background),
            theme_kind,
            use_theme_background: config.use_theme_background,
            show_debug: config.show_debug,
            show_logs: false,
            log_buffer,
            should_quit: false,
            input_handler: InputHandler::new(),
        };
        app.retypeset();
        app
    }

    /// The quote the display currently holds
    pub fn current_quote(&self) -> Option<&Quote> {
        self.current.and_then(|idx| self.library.get(idx))
    }

    pub fn library(&self) -> &QuoteLibrary {
        &self.library
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Advance the state machine clock. Called on every event-loop tick;
    /// a no-op unless the current phase's deadline has passed.
    pub fn tick(&mut self, now: Instant) {
        if self.should_quit {
            return;
        }

        match self.phase {
            Phase::RevealWait { deadline } if now >= deadline => {
                self.phase = Phase::Visible { revealed_at: now };
            }
            Phase::Swap { deadline } if now >= deadline => {
                self.swap_quote();
                self.phase = Phase::Visible { revealed_at: now };
            }
            _ => {}
        }
    }

    /// Trigger event: advance to the next quote.
    ///
    /// Only honored while a quote is visible. Triggers during the reveal
    /// delay or a pending swap are dropped - at most one transition
    /// deadline exists at a time.
    pub fn advance(&mut self, now: Instant) {
        match self.phase {
            Phase::Visible { .. } => {
                self.phase = Phase::Swap {
                    deadline: now + SWAP_DELAY,
                };
            }
            _ => {
                tracing::trace!("Advance ignored in phase {:?}", self.phase);
            }
        }
    }

    /// Pick the next quote, update history, recompute typesetting
    fn swap_quote(&mut self) {
        let Some(idx) = selector::pick(self.library.quotes(), &self.history, &mut self.rng) else {
            return;
        };
        let quote = &self.library.quotes()[idx];
        self.history.record(&quote.id);
        tracing::debug!("Showing quote {} ({})", quote.id, quote.theme.as_str());
        self.current = Some(idx);
        self.retypeset();
    }

    /// Viewport resize: retypeset the current quote at the new width
    pub fn resize(&mut self, cols: u16) {
        self.viewport_cols = cols;
        self.retypeset();
    }

    pub fn viewport_cols(&self) -> u16 {
        self.viewport_cols
    }

    /// Re-run the typography engine for the current quote
    fn retypeset(&mut self) {
        self.typesetting = self.current_quote().map(|quote| {
            typography::compute(
                self.sizing,
                &quote.text,
                self.viewport_cols.saturating_mul(CELL_PX),
            )
        });
    }

    /// How the quote block should render at `now`
    pub fn fade(&self, now: Instant) -> Fade {
        match self.phase {
            Phase::Visible { revealed_at } => {
                if now.duration_since(revealed_at) < FADE_IN {
                    Fade::Dimmed
                } else {
                    Fade::Full
                }
            }
            _ => Fade::Hidden,
        }
    }

    /// Cycle to the next color theme
    pub fn next_theme(&mut self) {
        self.theme_kind = self.theme_kind.next();
        self.theme = self.theme_kind.resolve(self.use_theme_background);
        tracing::info!("Theme: {}", self.theme.name);
    }

    /// Toggle the char/word-count readout
    pub fn toggle_debug(&mut self) {
        self.show_debug = !self.show_debug;
    }

    /// Toggle the log overlay
    pub fn toggle_logs(&mut self) {
        self.show_logs = !self.show_logs;
    }

    /// Handle a key press - returns true if the action should fire
    pub fn handle_key_press(&mut self, key: crossterm::event::KeyCode) -> bool {
        self.input_handler.handle_key_press(key)
    }

    /// Handle a key release
    pub fn handle_key_release(&mut self, key: crossterm::event::KeyCode) {
        self.input_handler.handle_key_release(key);
    }
}
