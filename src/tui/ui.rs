// Rendering for the quote display
//
// One full-bleed surface: a counter in the top-left corner, the quote
// block centered (theme label, wrapped text, attribution, optional
// location), and the advance hint in the bottom-right. The quote block
// honors the app's fade state; the typesetting decides wrap width and
// inter-line spacing. Optional overlays: debug readout and log tail.

use super::app::{App, Fade};
use crate::logging::LogLevel;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};
use std::time::Instant;
use unicode_width::UnicodeWidthStr;

/// Fixed attribution label under every quote
const ATTRIBUTION: &str = "— I AM THAT";

/// Static affordance hint, bottom-right
const HINT: &str = "click anywhere for next wisdom";

/// Render the whole display
pub fn draw(f: &mut Frame, app: &App) {
    let now = Instant::now();
    let area = f.area();
    if area.width == 0 || area.height == 0 {
        return;
    }

    // Paint the theme background first (unless transparent)
    if let Some(bg) = app.theme.background {
        f.render_widget(Block::default().style(Style::default().bg(bg)), area);
    }

    if app.library().is_empty() {
        draw_placeholder(f, area, app);
    } else {
        draw_counter(f, area, app);
        draw_quote(f, area, app, now);
        draw_hint(f, area, app);
        if app.show_debug {
            draw_debug(f, area, app);
        }
    }

    if app.show_logs {
        draw_logs(f, area, app);
    }
}

/// Empty-collection state, shown indefinitely
fn draw_placeholder(f: &mut Frame, area: Rect, app: &App) {
    let style = Style::default()
        .fg(app.theme.muted)
        .add_modifier(Modifier::ITALIC);
    let y = area.y + area.height / 2;
    let rect = Rect::new(area.x, y.min(area.bottom().saturating_sub(1)), area.width, 1);
    f.render_widget(
        Paragraph::new("Loading wisdom...")
            .style(style)
            .alignment(Alignment::Center),
        rect,
    );
}

/// "N insights available", top-left
fn draw_counter(f: &mut Frame, area: Rect, app: &App) {
    if area.height < 3 {
        return;
    }
    let text = format!("{} insights available", app.library().len());
    let rect = Rect::new(area.x + 2, area.y + 1, area.width.saturating_sub(4), 1);
    f.render_widget(
        Paragraph::new(text).style(Style::default().fg(app.theme.muted)),
        rect,
    );
}

/// The centered quote block
fn draw_quote(f: &mut Frame, area: Rect, app: &App, now: Instant) {
    let (Some(quote), Some(ts)) = (app.current_quote(), app.typesetting) else {
        return;
    };

    let fade = app.fade(now);
    if fade == Fade::Hidden {
        return;
    }
    let dim = if fade == Fade::Dimmed {
        Modifier::DIM
    } else {
        Modifier::empty()
    };

    let wrap_cols = ts.wrap_cols(area.width);
    let gap = ts.line_gap();

    let mut lines: Vec<Line> = Vec::new();

    // Theme indicator, lowercase italic, above the text
    lines.push(Line::from(Span::styled(
        quote.theme.as_str(),
        Style::default()
            .fg(app.theme.accent)
            .add_modifier(Modifier::ITALIC | dim),
    )));
    lines.push(Line::default());

    // Quote text, wrapped to the typeset measure
    let text_style = Style::default().fg(app.theme.text).add_modifier(dim);
    let quoted = format!("\u{201c}{}\u{201d}", quote.text);
    for (i, wrapped) in wrap_words(&quoted, wrap_cols).into_iter().enumerate() {
        if i > 0 {
            for _ in 0..gap {
                lines.push(Line::default());
            }
        }
        lines.push(Line::from(Span::styled(wrapped, text_style)));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        ATTRIBUTION,
        Style::default()
            .fg(app.theme.attribution)
            .add_modifier(dim),
    )));

    if let Some(page) = quote.page {
        lines.push(Line::from(Span::styled(
            format!("location: {page}"),
            Style::default().fg(app.theme.muted).add_modifier(dim),
        )));
    }

    // Center the block vertically; clip from the top if the terminal is
    // shorter than the block. While fading in, the block sits one row
    // low, giving the reveal a small slide-up.
    let height = (lines.len() as u16).min(area.height);
    let slide = u16::from(fade == Fade::Dimmed);
    let top = (area.y + area.height.saturating_sub(height) / 2 + slide)
        .min(area.bottom().saturating_sub(height));
    let rect = Rect::new(area.x, top, area.width, height);

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), rect);
}

/// Advance affordance hint, bottom-right
fn draw_hint(f: &mut Frame, area: Rect, app: &App) {
    if area.height < 4 {
        return;
    }
    let width = HINT.width() as u16;
    if area.width < width + 4 {
        return;
    }
    let rect = Rect::new(
        area.right() - width - 2,
        area.bottom() - 2,
        width,
        1,
    );
    f.render_widget(
        Paragraph::new(HINT).style(Style::default().fg(app.theme.muted)),
        rect,
    );
}

/// Char/word-count readout, bottom-left
fn draw_debug(f: &mut Frame, area: Rect, app: &App) {
    let Some(ts) = app.typesetting else {
        return;
    };
    if area.height < 4 {
        return;
    }
    let mut text = format!(
        "chars {} · words {} · tier {} · band {} ({}co) · size {:.2} · lh {:.2} · history {}/{}",
        ts.chars,
        ts.words,
        ts.tier.as_str(),
        ts.band.as_str(),
        app.viewport_cols(),
        ts.font_size,
        ts.line_height,
        app.history().len(),
        crate::quotes::history::HISTORY_CAP,
    );
    if let Some(quote) = app.current_quote() {
        if let Some(difficulty) = quote.difficulty {
            text.push_str(&format!(" · {}", difficulty.as_str()));
        }
        if !quote.tags.is_empty() {
            text.push_str(&format!(" · #{}", quote.tags.join(" #")));
        }
    }
    let rect = Rect::new(
        area.x + 2,
        area.bottom() - 2,
        (text.width() as u16).min(area.width.saturating_sub(4)),
        1,
    );
    f.render_widget(
        Paragraph::new(text).style(Style::default().fg(app.theme.debug)),
        rect,
    );
}

/// Tail of the tracing buffer, above the hint row
fn draw_logs(f: &mut Frame, area: Rect, app: &App) {
    if area.height < 10 {
        return;
    }
    let entries = app.log_buffer.tail(6);
    if entries.is_empty() {
        return;
    }

    let lines: Vec<Line> = entries
        .iter()
        .map(|entry| {
            let color = match entry.level {
                LogLevel::Error | LogLevel::Warn => app.theme.warn,
                _ => app.theme.debug,
            };
            Line::from(Span::styled(
                format!(
                    "{} {:5} {}",
                    entry.timestamp.format("%H:%M:%S"),
                    entry.level.as_str(),
                    entry.message
                ),
                Style::default().fg(color),
            ))
        })
        .collect();

    let height = lines.len() as u16;
    let rect = Rect::new(
        area.x + 2,
        area.bottom() - 2 - height,
        area.width.saturating_sub(4),
        height,
    );
    f.render_widget(Paragraph::new(lines), rect);
}

/// Greedy word wrap to a display-cell budget.
///
/// A word wider than the budget gets a line of its own rather than being
/// split mid-word.
fn wrap_words(text: &str, width: u16) -> Vec<String> {
    let budget = usize::from(width.max(1));
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = 0usize;

    for word in text.split_whitespace() {
        let word_width = word.width();
        if line_width == 0 {
            line.push_str(word);
            line_width = word_width;
        } else if line_width + 1 + word_width <= budget {
            line.push(' ');
            line.push_str(word);
            line_width += 1 + word_width;
        } else {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
            line_width = word_width;
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::logging::LogBuffer;
    use crate::quotes::QuoteLibrary;
    use crate::tui::app::REVEAL_DELAY;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Instant;

    fn render(app: &App) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                if let Some(cell) = buffer.cell((x, y)) {
                    out.push_str(cell.symbol());
                }
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_wrap_respects_budget() {
        let lines = wrap_words("one two three four five six seven", 9);
        assert!(lines.iter().all(|l| l.width() <= 9), "{lines:?}");
        assert_eq!(lines.join(" "), "one two three four five six seven");
    }

    #[test]
    fn test_wrap_oversized_word_gets_own_line() {
        let lines = wrap_words("short incomprehensibilities end", 10);
        assert!(lines.contains(&"incomprehensibilities".to_string()));
    }

    #[test]
    fn test_placeholder_when_library_empty() {
        let app = App::new(
            QuoteLibrary::default(),
            &Config::default(),
            LogBuffer::new(),
            100,
        );
        let screen = render(&app);
        assert!(screen.contains("Loading wisdom..."));
        assert!(!screen.contains("insights available"));
    }

    #[test]
    fn test_visible_quote_renders_all_elements() {
        let library = QuoteLibrary::parse(
            "[[quotes]]\nid = \"a\"\ntext = \"Stillness speaks\"\ntheme = \"presence\"\npage = 42\n",
        )
        .unwrap();
        let now = Instant::now();
        let mut app = App::with_rng(
            library,
            &Config::default(),
            LogBuffer::new(),
            100,
            StdRng::seed_from_u64(1),
            now,
        );
        app.tick(now + REVEAL_DELAY);

        let screen = render(&app);
        assert!(screen.contains("1 insights available"));
        assert!(screen.contains("presence"));
        assert!(screen.contains("Stillness speaks"));
        assert!(screen.contains("I AM THAT"));
        assert!(screen.contains("location: 42"));
        assert!(screen.contains(HINT));
    }

    #[test]
    fn test_quote_hidden_before_reveal() {
        let library = QuoteLibrary::parse(
            "[[quotes]]\nid = \"a\"\ntext = \"Stillness speaks\"\ntheme = \"presence\"\n",
        )
        .unwrap();
        let app = App::with_rng(
            library,
            &Config::default(),
            LogBuffer::new(),
            100,
            StdRng::seed_from_u64(1),
            Instant::now(),
        );

        // Still inside the reveal delay: chrome renders, content doesn't
        let screen = render(&app);
        assert!(screen.contains("insights available"));
        assert!(!screen.contains("Stillness speaks"));
    }
}
