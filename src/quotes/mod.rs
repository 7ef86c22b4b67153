// Quote content model and loading
//
// A quote is one displayable unit of text with a theme and optional
// metadata. The collection is loaded once at startup from a TOML file and
// is immutable for the lifetime of the program. Records that don't match
// the schema (unknown theme, unknown difficulty, duplicate id) are
// rejected here, at the loading boundary - the UI never sees them.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

pub mod bundled;
pub mod history;
pub mod selector;

pub use history::History;

/// Closed set of theme labels a quote can carry.
///
/// This is the schema: anything outside this set fails deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuoteTheme {
    Reality,
    SelfInquiry,
    Awareness,
    Consciousness,
    Wisdom,
    Acceptance,
    Unity,
    Being,
    Identity,
    Liberation,
    Presence,
    Truth,
}

impl QuoteTheme {
    /// Display label, matching the on-file spelling (lowercase, hyphenated)
    pub fn as_str(&self) -> &'static str {
        match self {
            QuoteTheme::Reality => "reality",
            QuoteTheme::SelfInquiry => "self-inquiry",
            QuoteTheme::Awareness => "awareness",
            QuoteTheme::Consciousness => "consciousness",
            QuoteTheme::Wisdom => "wisdom",
            QuoteTheme::Acceptance => "acceptance",
            QuoteTheme::Unity => "unity",
            QuoteTheme::Being => "being",
            QuoteTheme::Identity => "identity",
            QuoteTheme::Liberation => "liberation",
            QuoteTheme::Presence => "presence",
            QuoteTheme::Truth => "truth",
        }
    }
}

/// Reading difficulty label (optional on each quote)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

/// A single quote record as it appears in quotes.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Quote {
    /// Unique identifier (uniqueness enforced at load)
    pub id: String,

    /// The display text
    pub text: String,

    /// Theme label from the closed set
    pub theme: QuoteTheme,

    /// Source location (book page), shown as "location: N" when present
    pub page: Option<u32>,

    /// Optional difficulty label
    pub difficulty: Option<Difficulty>,

    /// Optional free-text tags
    #[serde(default)]
    pub tags: Vec<String>,
}

/// On-disk file shape: an array of tables under `[[quotes]]`
#[derive(Debug, Deserialize)]
struct QuoteFile {
    #[serde(default)]
    quotes: Vec<Quote>,
}

/// The immutable quote collection the UI cycles through.
///
/// Loaded once before the TUI mounts. An empty library is valid - the UI
/// shows a placeholder state instead of failing.
#[derive(Debug, Clone, Default)]
pub struct QuoteLibrary {
    quotes: Vec<Quote>,
}

impl QuoteLibrary {
    /// Default quote file path: ~/.config/sattva/quotes.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("sattva").join("quotes.toml"))
    }

    /// Load and validate a quote file.
    ///
    /// A missing file yields an empty library (placeholder state), but a
    /// file that exists and fails the schema is a hard error - silently
    /// showing a partial collection would hide the user's mistake.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!("Quote file not found: {}", path.display());
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Cannot read {}", path.display()));
            }
        };

        Self::parse(&contents).with_context(|| format!("Invalid quote file {}", path.display()))
    }

    /// Parse and validate quote file contents
    pub fn parse(contents: &str) -> Result<Self> {
        let file: QuoteFile = toml::from_str(contents).context("Failed to parse quotes")?;

        let mut seen = HashSet::new();
        for quote in &file.quotes {
            if quote.id.trim().is_empty() {
                bail!("Quote with empty id (text: {:?})", truncate_for_error(&quote.text));
            }
            if !seen.insert(quote.id.as_str()) {
                bail!("Duplicate quote id: {:?}", quote.id);
            }
            if quote.text.trim().is_empty() {
                bail!("Quote {:?} has empty text", quote.id);
            }
        }

        Ok(Self { quotes: file.quotes })
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Quote> {
        self.quotes.get(index)
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }
}

/// Shorten quote text for error messages
fn truncate_for_error(text: &str) -> String {
    let mut s: String = text.chars().take(40).collect();
    if s.len() < text.len() {
        s.push('…');
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[[quotes]]
id = "truth-001"
text = "What is real never changes."
theme = "truth"
page = 12
difficulty = "beginner"
tags = ["impermanence"]

[[quotes]]
id = "inquiry-001"
text = "Ask who is asking."
theme = "self-inquiry"
"#;

    #[test]
    fn test_parse_sample_collection() {
        let library = QuoteLibrary::parse(SAMPLE).unwrap();
        assert_eq!(library.len(), 2);

        let first = library.get(0).unwrap();
        assert_eq!(first.theme, QuoteTheme::Truth);
        assert_eq!(first.page, Some(12));
        assert_eq!(first.difficulty, Some(Difficulty::Beginner));
        assert_eq!(first.tags, vec!["impermanence"]);

        // Optional fields may be absent entirely
        let second = library.get(1).unwrap();
        assert_eq!(second.theme, QuoteTheme::SelfInquiry);
        assert_eq!(second.page, None);
        assert_eq!(second.difficulty, None);
        assert!(second.tags.is_empty());
    }

    #[test]
    fn test_empty_file_is_valid() {
        let library = QuoteLibrary::parse("").unwrap();
        assert!(library.is_empty());
    }

    #[test]
    fn test_unknown_theme_rejected() {
        let bad = r#"
[[quotes]]
id = "x"
text = "text"
theme = "productivity"
"#;
        assert!(QuoteLibrary::parse(bad).is_err());
    }

    #[test]
    fn test_unknown_difficulty_rejected() {
        let bad = r#"
[[quotes]]
id = "x"
text = "text"
theme = "truth"
difficulty = "expert"
"#;
        assert!(QuoteLibrary::parse(bad).is_err());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let bad = r#"
[[quotes]]
id = "x"
text = "text"
theme = "truth"
author = "someone"
"#;
        assert!(QuoteLibrary::parse(bad).is_err());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let bad = r#"
[[quotes]]
id = "same"
text = "one"
theme = "truth"

[[quotes]]
id = "same"
text = "two"
theme = "being"
"#;
        let err = QuoteLibrary::parse(bad).unwrap_err();
        assert!(format!("{err:#}").contains("Duplicate"));
    }

    #[test]
    fn test_theme_labels_round_trip_spelling() {
        // The display label must match the on-file spelling
        assert_eq!(QuoteTheme::SelfInquiry.as_str(), "self-inquiry");
        assert_eq!(QuoteTheme::Being.as_str(), "being");
    }
}
