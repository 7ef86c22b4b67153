// Typesetting engine for quote display
//
// Computes a font size and line height (in rem-like units) from the quote
// text and the viewport width, then maps them onto what a terminal can
// actually vary: wrap width in columns and inter-line spacing. The size
// model keeps pixel-based breakpoints with a nominal 8px per cell, so an
// 80-column terminal reads as a narrow viewport and a 130-column one as
// wide, and tests can feed pixel widths directly.

/// Nominal pixels per terminal cell (for viewport band classification)
pub const CELL_PX: u16 = 8;

/// Content column budget - the display never typesets wider than this
/// many pixels regardless of viewport (the classic 800px measure)
const MAX_MEASURE_PX: f32 = 800.0;

/// Smallest font size the engine will produce
const MIN_FONT_SIZE: f32 = 1.2;

/// Smallest line height the engine will produce
const MIN_LINE_HEIGHT: f32 = 1.3;

/// Viewport width classification.
///
/// Single source of truth for the width thresholds - no magic numbers in
/// render code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportBand {
    /// < 768px (~96 cols): phone-ish, split pane
    Narrow,
    /// 768-1023px: half screen
    Medium,
    /// >= 1024px (128+ cols): full terminal
    Wide,
}

impl ViewportBand {
    pub fn from_px(width_px: u16) -> Self {
        match width_px {
            0..=767 => ViewportBand::Narrow,
            768..=1023 => ViewportBand::Medium,
            _ => ViewportBand::Wide,
        }
    }

    /// Base (font_size, line_height) for this band before tier adjustment
    fn base(self) -> (f32, f32) {
        match self {
            ViewportBand::Narrow => (1.6, 1.5),
            ViewportBand::Medium => (2.0, 1.55),
            ViewportBand::Wide => (2.5, 1.6),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ViewportBand::Narrow => "narrow",
            ViewportBand::Medium => "medium",
            ViewportBand::Wide => "wide",
        }
    }
}

/// Text length classification. Whichever signal (words or characters)
/// crosses the higher threshold wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LengthTier {
    Short,
    Medium,
    MediumLong,
    Long,
    VeryLong,
}

impl LengthTier {
    pub fn classify(words: usize, chars: usize) -> Self {
        if words > 100 || chars > 600 {
            LengthTier::VeryLong
        } else if words > 60 || chars > 400 {
            LengthTier::Long
        } else if words > 40 || chars > 250 {
            LengthTier::MediumLong
        } else if words > 25 || chars > 150 {
            LengthTier::Medium
        } else {
            LengthTier::Short
        }
    }

    /// Multiplicative (font_size, line_height) adjustment for this tier
    fn multipliers(self) -> (f32, f32) {
        match self {
            LengthTier::VeryLong => (0.60, 1.10),
            LengthTier::Long => (0.75, 1.05),
            LengthTier::MediumLong => (0.85, 1.00),
            LengthTier::Medium => (0.95, 0.98),
            LengthTier::Short => (1.00, 1.00),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LengthTier::Short => "short",
            LengthTier::Medium => "medium",
            LengthTier::MediumLong => "medium-long",
            LengthTier::Long => "long",
            LengthTier::VeryLong => "very-long",
        }
    }
}

/// Which sizing model to run. The fluid policy is the simpler legacy
/// behavior: width-driven only, clamped, blind to text length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizingPolicy {
    #[default]
    Adaptive,
    Fluid,
}

impl SizingPolicy {
    /// Parse policy string from config
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "fluid" => Self::Fluid,
            _ => Self::Adaptive, // Default to adaptive for unknown values
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Adaptive => "adaptive",
            Self::Fluid => "fluid",
        }
    }
}

/// Resolved typesetting for one quote at one viewport width
#[derive(Debug, Clone, Copy)]
pub struct TypeSetting {
    /// Font size in rem-like units (1.0 = 16 nominal px)
    pub font_size: f32,
    /// Unitless line height multiplier
    pub line_height: f32,
    pub band: ViewportBand,
    pub tier: LengthTier,
    /// Word count of the measured text (debug readout)
    pub words: usize,
    /// Character count of the measured text (debug readout)
    pub chars: usize,
}

/// Compute the typesetting for `text` at `viewport_px` under `policy`.
///
/// Re-run whenever the displayed quote changes or the terminal resizes.
pub fn compute(policy: SizingPolicy, text: &str, viewport_px: u16) -> TypeSetting {
    let words = text.split_whitespace().count();
    let chars = text.chars().count();
    let band = ViewportBand::from_px(viewport_px);
    let tier = LengthTier::classify(words, chars);

    let (font_size, line_height) = match policy {
        SizingPolicy::Fluid => {
            // clamp(1.8rem, 4vw, 3.2rem), 1rem = 16px
            let vw = 0.04 * f32::from(viewport_px) / 16.0;
            (vw.clamp(1.8, 3.2), 1.6)
        }
        SizingPolicy::Adaptive => {
            let (base_size, base_height) = band.base();
            let (size_mul, height_mul) = tier.multipliers();
            (
                (base_size * size_mul).max(MIN_FONT_SIZE),
                (base_height * height_mul).max(MIN_LINE_HEIGHT),
            )
        }
    };

    TypeSetting {
        font_size,
        line_height,
        band,
        tier,
        words,
        chars,
    }
}

impl TypeSetting {
    /// Wrap width in columns for a terminal `viewport_cols` wide.
    ///
    /// A glyph is roughly half an em, so at font size F each character
    /// occupies about F * 8 nominal px; dividing the measure budget by
    /// that makes larger type wrap narrower, which is the whole visual
    /// point of the sizing model in a fixed-cell medium.
    pub fn wrap_cols(&self, viewport_cols: u16) -> u16 {
        let viewport_px = f32::from(viewport_cols) * f32::from(CELL_PX);
        let measure_px = viewport_px.min(MAX_MEASURE_PX);
        let cols = (measure_px / (self.font_size * f32::from(CELL_PX))) as u16;
        cols.clamp(16, viewport_cols.saturating_sub(4).max(16))
    }

    /// Blank rows between wrapped lines - the terminal stand-in for
    /// line height. Only the loosest settings earn a full blank row.
    pub fn line_gap(&self) -> u16 {
        if self.line_height >= 1.7 {
            1
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a text with exactly `words` words of `word_len` characters
    fn text_of(words: usize, word_len: usize) -> String {
        vec!["x".repeat(word_len); words].join(" ")
    }

    #[test]
    fn test_band_thresholds() {
        assert_eq!(ViewportBand::from_px(320), ViewportBand::Narrow);
        assert_eq!(ViewportBand::from_px(767), ViewportBand::Narrow);
        assert_eq!(ViewportBand::from_px(768), ViewportBand::Medium);
        assert_eq!(ViewportBand::from_px(1023), ViewportBand::Medium);
        assert_eq!(ViewportBand::from_px(1024), ViewportBand::Wide);
        assert_eq!(ViewportBand::from_px(2560), ViewportBand::Wide);
    }

    #[test]
    fn test_tier_thresholds_either_signal() {
        // Word-count signal
        assert_eq!(LengthTier::classify(101, 0), LengthTier::VeryLong);
        assert_eq!(LengthTier::classify(61, 0), LengthTier::Long);
        assert_eq!(LengthTier::classify(41, 0), LengthTier::MediumLong);
        assert_eq!(LengthTier::classify(26, 0), LengthTier::Medium);
        assert_eq!(LengthTier::classify(25, 0), LengthTier::Short);
        // Character-count signal alone can push the tier up
        assert_eq!(LengthTier::classify(10, 601), LengthTier::VeryLong);
        assert_eq!(LengthTier::classify(10, 401), LengthTier::Long);
        assert_eq!(LengthTier::classify(10, 251), LengthTier::MediumLong);
        assert_eq!(LengthTier::classify(10, 151), LengthTier::Medium);
        assert_eq!(LengthTier::classify(10, 150), LengthTier::Short);
    }

    #[test]
    fn test_very_long_on_wide_viewport() {
        // 650 chars at 1200px: very-long tier, 2.5 * 0.60 = 1.5,
        // line height 1.6 * 1.10 = 1.76
        let text = text_of(50, 12); // 50 words * 13 chars incl. separators = 649 chars
        assert_eq!(text.chars().count(), 649);
        let text = format!("{text}xx"); // 651 chars, > 600
        let ts = compute(SizingPolicy::Adaptive, &text, 1200);
        assert_eq!(ts.tier, LengthTier::VeryLong);
        assert_eq!(ts.band, ViewportBand::Wide);
        assert!((ts.font_size - 1.5).abs() < 1e-4);
        assert!((ts.line_height - 1.76).abs() < 1e-4);
    }

    #[test]
    fn test_floors_apply() {
        // Narrow band at very-long tier would be 1.6 * 0.60 = 0.96,
        // which the floor lifts to 1.2
        let text = text_of(120, 5);
        let ts = compute(SizingPolicy::Adaptive, &text, 400);
        assert!((ts.font_size - MIN_FONT_SIZE).abs() < 1e-6);
        assert!(ts.line_height >= MIN_LINE_HEIGHT);
    }

    #[test]
    fn test_floors_hold_everywhere() {
        for px in [100u16, 500, 768, 1024, 3000] {
            for words in [1usize, 30, 50, 80, 200] {
                let ts = compute(SizingPolicy::Adaptive, &text_of(words, 6), px);
                assert!(ts.font_size >= MIN_FONT_SIZE);
                assert!(ts.line_height >= MIN_LINE_HEIGHT);
            }
        }
    }

    #[test]
    fn test_size_monotone_in_text_length() {
        // Holding width fixed, longer text never gets larger type
        for px in [500u16, 900, 1400] {
            let lengths = [10usize, 30, 45, 70, 120];
            let sizes: Vec<f32> = lengths
                .iter()
                .map(|&w| compute(SizingPolicy::Adaptive, &text_of(w, 4), px).font_size)
                .collect();
            for pair in sizes.windows(2) {
                assert!(
                    pair[1] <= pair[0] + 1e-6,
                    "font size grew with text length at {px}px: {sizes:?}"
                );
            }
        }
    }

    #[test]
    fn test_fluid_policy_ignores_text_length() {
        let short = compute(SizingPolicy::Fluid, "brief", 1200);
        let long = compute(SizingPolicy::Fluid, &text_of(150, 6), 1200);
        assert_eq!(short.font_size, long.font_size);
        assert_eq!(short.line_height, long.line_height);
    }

    #[test]
    fn test_fluid_clamp_bounds() {
        // 4vw at 600px = 1.5rem, clamped up to 1.8
        assert!((compute(SizingPolicy::Fluid, "x", 600).font_size - 1.8).abs() < 1e-6);
        // 4vw at 1200px = 3.0rem, inside the clamp
        assert!((compute(SizingPolicy::Fluid, "x", 1200).font_size - 3.0).abs() < 1e-4);
        // 4vw at 2000px = 5.0rem, clamped down to 3.2
        assert!((compute(SizingPolicy::Fluid, "x", 2000).font_size - 3.2).abs() < 1e-6);
    }

    #[test]
    fn test_wrap_cols_narrower_for_larger_type() {
        let big = compute(SizingPolicy::Adaptive, "short text", 1200);
        let small = compute(SizingPolicy::Adaptive, &text_of(120, 6), 1200);
        assert!(big.font_size > small.font_size);
        assert!(big.wrap_cols(150) < small.wrap_cols(150));
    }

    #[test]
    fn test_wrap_cols_fits_viewport() {
        for cols in [20u16, 40, 80, 120, 200] {
            let ts = compute(SizingPolicy::Adaptive, "a quote", cols * CELL_PX);
            assert!(ts.wrap_cols(cols) <= cols.max(16));
        }
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!(SizingPolicy::from_str("fluid"), SizingPolicy::Fluid);
        assert_eq!(SizingPolicy::from_str("Adaptive"), SizingPolicy::Adaptive);
        assert_eq!(SizingPolicy::from_str("bogus"), SizingPolicy::Adaptive);
    }
}
