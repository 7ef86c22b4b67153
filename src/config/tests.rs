//! Configuration tests
//!
//! The generated template is the documentation users edit, so the main
//! guard here is that it parses back through FileConfig. When you add a
//! config field, these tests fail until to_toml() knows about it.

use super::*;
use crate::tui::typography::SizingPolicy;

#[test]
fn test_config_template_round_trips() {
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );

    let file = parsed.unwrap();
    assert_eq!(file.theme.as_deref(), Some("paper"));
    assert_eq!(file.sizing.as_deref(), Some("adaptive"));
    assert_eq!(file.use_theme_background, Some(true));
    assert!(file.logging.is_some());
}

#[test]
fn test_non_default_values_survive_round_trip() {
    let mut config = Config::default();
    config.theme = "nord".to_string();
    config.sizing = SizingPolicy::Fluid;
    config.logging.file_enabled = true;
    config.logging.file_rotation = LogRotation::Hourly;

    let file: FileConfig = toml::from_str(&config.to_toml()).unwrap();
    assert_eq!(file.theme.as_deref(), Some("nord"));
    assert_eq!(file.sizing.as_deref(), Some("fluid"));

    let logging = file.logging.unwrap();
    assert_eq!(logging.file_enabled, Some(true));
    assert_eq!(logging.file_rotation.as_deref(), Some("hourly"));
}

#[test]
fn test_file_values_override_defaults() {
    let file: FileConfig = toml::from_str(
        r#"
theme = "gruvbox"
sizing = "fluid"
use_theme_background = false
quotes_path = "/tmp/custom.toml"

[logging]
level = "debug"
"#,
    )
    .unwrap();

    let config = Config::resolve(file);
    // Env vars may override theme/sizing in a dev shell; only assert on
    // fields no test environment sets
    assert!(!config.use_theme_background);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(
        config.quotes_path.as_deref(),
        Some(std::path::Path::new("/tmp/custom.toml"))
    );
}

#[test]
fn test_empty_file_yields_defaults() {
    let config = Config::resolve(FileConfig::default());
    assert_eq!(config.logging.level, "info");
    assert!(!config.logging.file_enabled);
    assert_eq!(config.logging.file_rotation, LogRotation::Daily);
}

#[test]
fn test_rotation_parsing() {
    assert_eq!(LogRotation::from_str("hourly"), LogRotation::Hourly);
    assert_eq!(LogRotation::from_str("NEVER"), LogRotation::Never);
    assert_eq!(LogRotation::from_str("weekly"), LogRotation::Daily);
}
