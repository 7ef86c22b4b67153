// Startup module - banner and load status
//
// Prints a short boot report before the TUI takes over the screen, and
// mirrors the same lines into the tracing buffer so they show up in the
// log overlay.

use crate::config::{Config, VERSION};
use crate::quotes::QuoteLibrary;

/// ANSI color codes for terminal output
mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
}

/// Print the startup banner and load status.
/// This runs before the TUI takes over the screen.
pub fn print_startup(config: &Config, library: &QuoteLibrary) {
    use colors::*;

    println!();
    println!("  {BOLD}{CYAN}sattva{RESET} {DIM}v{VERSION}{RESET}");
    println!("  {DIM}quote of the moment{RESET}");
    println!();

    // Config file status
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("  {DIM}Config:{RESET} {GREEN}✓{RESET} {}", path.display());
        } else {
            println!("  {DIM}Config:{RESET} {DIM}(using defaults){RESET}");
        }
    }

    // Quote collection status
    match config.resolved_quotes_path() {
        Some(path) if !library.is_empty() => {
            println!(
                "  {DIM}Quotes:{RESET} {GREEN}✓{RESET} {} ({} quotes)",
                path.display(),
                library.len()
            );
        }
        Some(path) => {
            println!(
                "  {DIM}Quotes:{RESET} {YELLOW}empty{RESET} {}",
                path.display()
            );
        }
        None => {
            println!("  {DIM}Quotes:{RESET} {YELLOW}no collection found{RESET}");
        }
    }

    println!(
        "  {DIM}Theme:{RESET}  {} {DIM}· sizing {}{RESET}",
        config.theme,
        config.sizing.as_str()
    );
    println!();
}

/// Mirror the boot report into the log buffer for the `l` overlay
pub fn log_startup(config: &Config, library: &QuoteLibrary) {
    tracing::info!("sattva v{} starting", VERSION);
    tracing::info!(
        "{} quotes loaded, theme {}, sizing {}",
        library.len(),
        config.theme,
        config.sizing.as_str()
    );
    if library.is_empty() {
        tracing::warn!("Quote collection is empty - showing placeholder");
    }
    tracing::info!("Keys: space/enter/right advance, t theme, d debug, l logs, q quit");
}
