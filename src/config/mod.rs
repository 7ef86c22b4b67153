//! Configuration for the quote display
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/sattva/config.toml)
//! 3. Built-in defaults (lowest priority)

use crate::tui::typography::SizingPolicy;
use serde::Deserialize;
use std::path::PathBuf;

#[cfg(test)]
mod tests;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ─────────────────────────────────────────────────────────────────────────────
// Log Rotation
// ─────────────────────────────────────────────────────────────────────────────

/// Log file rotation strategy
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LogRotation {
    /// Rotate log files hourly
    Hourly,
    /// Rotate log files daily (default)
    #[default]
    Daily,
    /// Never rotate - single log file
    Never,
}

impl LogRotation {
    /// Parse rotation string from config
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "hourly" => Self::Hourly,
            "daily" => Self::Daily,
            "never" => Self::Never,
            _ => Self::Daily, // Default to daily for unknown values
        }
    }

    /// Convert to string for TOML serialization
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Never => "never",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Logging Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    pub level: String,
    /// Enable file logging (in addition to the TUI buffer)
    pub file_enabled: bool,
    /// Directory for log files
    pub file_dir: PathBuf,
    /// Log file rotation strategy
    pub file_rotation: LogRotation,
    /// Prefix for log file names (e.g., "sattva" -> "sattva.2024-01-15.log")
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false, // Opt-in feature
            file_dir: PathBuf::from("./logs"),
            file_rotation: LogRotation::Daily,
            file_prefix: "sattva".to_string(),
        }
    }
}

/// Logging settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileLogging {
    pub level: Option<String>,
    pub file_enabled: Option<bool>,
    pub file_dir: Option<String>,
    pub file_rotation: Option<String>,
    pub file_prefix: Option<String>,
}

impl LoggingConfig {
    /// Create from file config with defaults
    fn from_file(file: Option<FileLogging>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            level: file.level.unwrap_or(defaults.level),
            file_enabled: file.file_enabled.unwrap_or(defaults.file_enabled),
            file_dir: file
                .file_dir
                .map(PathBuf::from)
                .unwrap_or(defaults.file_dir),
            file_rotation: file
                .file_rotation
                .map(|s| LogRotation::from_str(&s))
                .unwrap_or(defaults.file_rotation),
            file_prefix: file.file_prefix.unwrap_or(defaults.file_prefix),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Theme name: "paper", "ink", "gruvbox", "nord"
    pub theme: String,

    /// Use theme's background color (true) or terminal's default (false)
    pub use_theme_background: bool,

    /// Typesetting policy: "adaptive" (length-aware) or "fluid" (width only)
    pub sizing: SizingPolicy,

    /// Show the char/word-count debug readout on startup
    pub show_debug: bool,

    /// Override path to the quote collection (default: ~/.config/sattva/quotes.toml)
    pub quotes_path: Option<PathBuf>,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "paper".to_string(),
            use_theme_background: true,
            sizing: SizingPolicy::Adaptive,
            show_debug: false,
            quotes_path: None,
            logging: LoggingConfig::default(),
        }
    }
}

/// Config file structure (subset of Config that makes sense to persist)
#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub theme: Option<String>,
    pub use_theme_background: Option<bool>,
    pub sizing: Option<String>,
    pub show_debug: Option<bool>,
    pub quotes_path: Option<String>,
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/sattva/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("sattva").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Silently fail - config is optional
            }
        }

        // Use Config::default().to_toml() as single source of truth
        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load file config if it exists.
    ///
    /// A config file that exists but cannot be parsed is fatal - failing
    /// fast with a clear error beats silently falling back to defaults
    /// while the user debugs the wrong thing.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("\nCONFIG ERROR - Failed to parse {}\n", path.display());
                    eprintln!("  {}\n", e);
                    eprintln!("  To reset, delete the file and restart sattva.\n");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("\nCONFIG ERROR - Cannot read {}: {}\n", path.display(), e);
                std::process::exit(1);
            }
        }
    }

    /// Load configuration: env > file > defaults
    pub fn from_env() -> Self {
        Self::resolve(Self::load_file_config())
    }

    /// Merge a file config with environment overrides and defaults
    pub fn resolve(file: FileConfig) -> Self {
        let defaults = Self::default();

        // Theme: env > file > default
        let theme = std::env::var("SATTVA_THEME")
            .ok()
            .or(file.theme)
            .unwrap_or(defaults.theme);

        // Use theme background: file > default (true = use theme's bg color)
        let use_theme_background = file
            .use_theme_background
            .unwrap_or(defaults.use_theme_background);

        // Sizing policy: env > file > default
        let sizing = std::env::var("SATTVA_SIZING")
            .ok()
            .or(file.sizing)
            .map(|s| SizingPolicy::from_str(&s))
            .unwrap_or(defaults.sizing);

        // Debug readout: env only (runtime flag)
        let show_debug = std::env::var("SATTVA_DEBUG")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(file.show_debug.unwrap_or(defaults.show_debug));

        // Quote file override: env > file > none (library default path)
        let quotes_path = std::env::var("SATTVA_QUOTES")
            .ok()
            .or(file.quotes_path)
            .map(PathBuf::from);

        Self {
            theme,
            use_theme_background,
            sizing,
            show_debug,
            quotes_path,
            logging: LoggingConfig::from_file(file.logging),
        }
    }

    /// The quote file to load: override > default location
    pub fn resolved_quotes_path(&self) -> Option<PathBuf> {
        self.quotes_path
            .clone()
            .or_else(crate::quotes::QuoteLibrary::default_path)
    }

    /// Serialize to the config file template.
    ///
    /// Single source of truth for the file format - the generated file
    /// must parse back through FileConfig (guarded by tests).
    pub fn to_toml(&self) -> String {
        format!(
            r#"# sattva configuration
# Precedence: environment variables > this file > built-in defaults

# Color theme: "paper", "ink", "gruvbox", "nord"  (env: SATTVA_THEME)
theme = "{theme}"

# Paint the theme's background color (false keeps the terminal's own)
use_theme_background = {use_theme_background}

# Typesetting policy  (env: SATTVA_SIZING)
#   "adaptive" - type scales with quote length and terminal width
#   "fluid"    - width-driven only, clamped; blind to quote length
sizing = "{sizing}"

# Show the character/word-count readout on startup (toggle with 'd')
show_debug = {show_debug}

# Override the quote collection location  (env: SATTVA_QUOTES)
# quotes_path = "/path/to/quotes.toml"

[logging]
# Log level: trace, debug, info, warn, error  (env: RUST_LOG overrides)
level = "{level}"
# Also write JSON logs to rotating files
file_enabled = {file_enabled}
file_dir = "{file_dir}"
# Rotation: "hourly", "daily", "never"
file_rotation = "{file_rotation}"
file_prefix = "{file_prefix}"
"#,
            theme = self.theme,
            use_theme_background = self.use_theme_background,
            sizing = self.sizing.as_str(),
            show_debug = self.show_debug,
            level = self.logging.level,
            file_enabled = self.logging.file_enabled,
            file_dir = self.logging.file_dir.display(),
            file_rotation = self.logging.file_rotation.as_str(),
            file_prefix = self.logging.file_prefix,
        )
    }
}
