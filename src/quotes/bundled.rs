// Bundled quote collection (compiled into binary)
//
// A starter collection in the spirit of Nisargadatta Maharaj's "I Am That",
// extracted to ~/.config/sattva/quotes.toml on first run so users can edit
// it or replace it with their own excerpts.

use super::QuoteLibrary;

/// Default collection shipped with the binary
pub const DEFAULT_QUOTES: &str = r#"# sattva quote collection
#
# Each [[quotes]] entry needs: id (unique), text, theme.
# Optional: page (number), difficulty (beginner|intermediate|advanced), tags.
#
# Valid themes: reality, self-inquiry, awareness, consciousness, wisdom,
# acceptance, unity, being, identity, liberation, presence, truth

[[quotes]]
id = "being-001"
text = "Before the first word and after the last, you are."
theme = "being"
difficulty = "beginner"
tags = ["silence"]

[[quotes]]
id = "inquiry-001"
text = "Trace every thought back to the one who thinks it, and stay there."
theme = "self-inquiry"
page = 14
difficulty = "beginner"
tags = ["attention"]

[[quotes]]
id = "reality-001"
text = "Whatever can be lost was never truly yours; whatever remains when all is lost, you are."
theme = "reality"
page = 37
difficulty = "intermediate"

[[quotes]]
id = "awareness-001"
text = "The light by which you see the world is the same light by which you see yourself. Do not mistake what appears in the light for the light."
theme = "awareness"
page = 52
difficulty = "intermediate"
tags = ["seeing", "witness"]

[[quotes]]
id = "identity-001"
text = "You have taken yourself to be a person among persons. Look again."
theme = "identity"
difficulty = "beginner"

[[quotes]]
id = "acceptance-001"
text = "What you resist, you keep. What you allow to be as it is, passes through you and is gone."
theme = "acceptance"
page = 88
tags = ["letting-go"]

[[quotes]]
id = "presence-001"
text = "This moment is not a doorway to a better one. It is the only room there is."
theme = "presence"
difficulty = "beginner"
tags = ["now"]

[[quotes]]
id = "wisdom-001"
text = "To know what you are not is wisdom. To rest as what remains is love."
theme = "wisdom"
page = 102
difficulty = "intermediate"

[[quotes]]
id = "unity-001"
text = "The wave need not search for the ocean."
theme = "unity"
difficulty = "beginner"
tags = ["metaphor"]

[[quotes]]
id = "consciousness-001"
text = "Consciousness is not in you. You are in consciousness, as a cloud is in the sky, and like the sky you are untouched by the weather that appears in you. The cloud gathers, darkens, empties itself and is gone; the sky neither resists its coming nor mourns its going. Find in yourself that which observes the gathering and the going and is neither, and you will have found the thread that cannot be cut."
theme = "consciousness"
page = 161
difficulty = "advanced"
tags = ["witness", "sky"]

[[quotes]]
id = "liberation-001"
text = "Freedom is not getting what you want. It is the end of the one who wants."
theme = "liberation"
page = 143
difficulty = "advanced"

[[quotes]]
id = "truth-001"
text = "Truth does not argue. It waits."
theme = "truth"
difficulty = "beginner"

[[quotes]]
id = "inquiry-002"
text = "The question 'who am I' has no answer in words. The asking itself, held steadily, burns away the one who would answer."
theme = "self-inquiry"
page = 29
difficulty = "intermediate"
tags = ["practice"]

[[quotes]]
id = "presence-002"
text = "You are never not here. You are only sometimes elsewhere in imagination, and imagination too happens here."
theme = "presence"
page = 71
difficulty = "intermediate"
"#;

/// Write the bundled collection to the config directory on first run.
/// Never overwrites an existing file.
pub fn ensure_quotes_extracted() {
    let Some(path) = QuoteLibrary::default_path() else {
        return;
    };

    if path.exists() {
        return;
    }

    if let Some(parent) = path.parent() {
        if std::fs::create_dir_all(parent).is_err() {
            return; // Extraction is best-effort; the app still runs (empty state)
        }
    }

    let _ = std::fs::write(&path, DEFAULT_QUOTES);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_collection_parses() {
        let library = QuoteLibrary::parse(DEFAULT_QUOTES).unwrap();
        assert!(!library.is_empty());
    }

    #[test]
    fn test_bundled_collection_has_enough_for_exclusion() {
        // The selector excludes the last 3 shown ids; the shipped
        // collection must be comfortably larger than the window
        let library = QuoteLibrary::parse(DEFAULT_QUOTES).unwrap();
        assert!(library.len() > 5, "bundled collection too small: {}", library.len());
    }
}
