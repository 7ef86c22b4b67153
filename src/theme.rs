// Color themes for the display
//
// A resolved Theme carries every color the renderer needs, so render code
// never mixes palette decisions with layout. A few palettes are built in;
// the config picks the starting one and `t` cycles at runtime.

use ratatui::style::Color;

/// All colors used by the renderer, fully resolved
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,

    /// Surface background. `None` keeps the terminal's own background
    /// (config: use_theme_background = false).
    pub background: Option<Color>,

    /// Quote text
    pub text: Color,
    /// Theme indicator above the quote
    pub accent: Color,
    /// Counter, hint, location annotation
    pub muted: Color,
    /// Attribution line
    pub attribution: Color,
    /// Debug readout and log overlay
    pub debug: Color,
    /// Log overlay warnings/errors
    pub warn: Color,
}

/// Built-in palettes, in cycling order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    /// Warm off-white, dark ink - reads like a printed page
    #[default]
    Paper,
    /// Dark background, soft white text
    Ink,
    Gruvbox,
    Nord,
}

impl ThemeKind {
    pub fn next(self) -> Self {
        match self {
            ThemeKind::Paper => ThemeKind::Ink,
            ThemeKind::Ink => ThemeKind::Gruvbox,
            ThemeKind::Gruvbox => ThemeKind::Nord,
            ThemeKind::Nord => ThemeKind::Paper,
        }
    }

    /// Match a configured theme name, forgiving about case and separators
    pub fn from_name(name: &str) -> Self {
        let normalized = name.to_lowercase().replace([' ', '-', '_'], "");
        match normalized.as_str() {
            "ink" | "dark" => ThemeKind::Ink,
            "gruvbox" | "gruvboxdark" => ThemeKind::Gruvbox,
            "nord" => ThemeKind::Nord,
            _ => ThemeKind::Paper,
        }
    }

    pub fn resolve(self, use_theme_background: bool) -> Theme {
        let mut theme = match self {
            ThemeKind::Paper => Theme {
                name: "Paper",
                background: Some(Color::Rgb(0xfa, 0xfa, 0xfa)),
                text: Color::Rgb(0x2c, 0x2c, 0x2c),
                accent: Color::Rgb(0xaa, 0xaa, 0xaa),
                muted: Color::Rgb(0x99, 0x99, 0x99),
                attribution: Color::Rgb(0x66, 0x66, 0x66),
                debug: Color::Rgb(0x88, 0x77, 0x55),
                warn: Color::Rgb(0xb0, 0x60, 0x30),
            },
            ThemeKind::Ink => Theme {
                name: "Ink",
                background: Some(Color::Rgb(0x16, 0x16, 0x1d)),
                text: Color::Rgb(0xdc, 0xd7, 0xba),
                accent: Color::Rgb(0x7e, 0x9c, 0xd8),
                muted: Color::Rgb(0x54, 0x54, 0x6d),
                attribution: Color::Rgb(0x93, 0x8a, 0xa9),
                debug: Color::Rgb(0x6a, 0x92, 0x89),
                warn: Color::Rgb(0xc3, 0x78, 0x3f),
            },
            ThemeKind::Gruvbox => Theme {
                name: "Gruvbox",
                background: Some(Color::Rgb(0x28, 0x28, 0x28)),
                text: Color::Rgb(0xeb, 0xdb, 0xb2),
                accent: Color::Rgb(0xd7, 0x99, 0x21),
                muted: Color::Rgb(0x92, 0x83, 0x74),
                attribution: Color::Rgb(0xa8, 0x99, 0x84),
                debug: Color::Rgb(0x8e, 0xc0, 0x7c),
                warn: Color::Rgb(0xfe, 0x80, 0x19),
            },
            ThemeKind::Nord => Theme {
                name: "Nord",
                background: Some(Color::Rgb(0x2e, 0x34, 0x40)),
                text: Color::Rgb(0xec, 0xef, 0xf4),
                accent: Color::Rgb(0x88, 0xc0, 0xd0),
                muted: Color::Rgb(0x4c, 0x56, 0x6a),
                attribution: Color::Rgb(0xd8, 0xde, 0xe9),
                debug: Color::Rgb(0xa3, 0xbe, 0x8c),
                warn: Color::Rgb(0xd0, 0x87, 0x70),
            },
        };

        if !use_theme_background {
            theme.background = None;
        }

        theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_visits_every_palette() {
        let mut kind = ThemeKind::default();
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(kind);
            kind = kind.next();
        }
        assert_eq!(kind, ThemeKind::default(), "cycle should wrap");
        seen.sort_by_key(|k| format!("{k:?}"));
        seen.dedup();
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_name_matching_is_forgiving() {
        assert_eq!(ThemeKind::from_name("Gruvbox Dark"), ThemeKind::Gruvbox);
        assert_eq!(ThemeKind::from_name("NORD"), ThemeKind::Nord);
        assert_eq!(ThemeKind::from_name("unknown"), ThemeKind::Paper);
    }

    #[test]
    fn test_transparent_background_option() {
        let theme = ThemeKind::Ink.resolve(false);
        assert!(theme.background.is_none());
    }
}
