// sattva - quote of the moment for your terminal
//
// Shows one contemplative quote at a time, full screen. Click anywhere or
// press right-arrow / space / enter for the next one; selection is random
// but avoids recent repeats, and the typesetting adapts to quote length
// and terminal width.
//
// Architecture:
// - quotes: content schema, loading, recency history, random selector
// - tui: event loop, transition state machine, typography engine, renderer
// - config / cli / logging / theme / startup: the surrounding plumbing

mod cli;
mod config;
mod logging;
mod quotes;
mod startup;
mod theme;
mod tui;

use anyhow::Result;
use config::{Config, LogRotation};
use logging::{LogBuffer, TuiLogLayer};
use quotes::QuoteLibrary;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Handle CLI subcommands first (config/quotes management)
    // If a command was handled, exit early
    if cli::handle_cli() {
        return Ok(());
    }

    // Seed the config template and bundled quote collection on first run
    // (helps users discover the files they can edit)
    Config::ensure_config_exists();
    quotes::bundled::ensure_quotes_extracted();

    let config = Config::from_env();

    // Initialize tracing. Logs go to an in-memory buffer (the TUI owns
    // the screen; stray stdout lines would garble it) and optionally to
    // rotating JSON files.
    //
    // Filter precedence: RUST_LOG env var > config file > default "info"
    let log_buffer = LogBuffer::new();
    let default_filter = format!("sattva={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    // The guard must be kept alive for the duration of the program to
    // ensure buffered file writes flush
    let _file_guard: Option<tracing_appender::non_blocking::WorkerGuard> = if config
        .logging
        .file_enabled
    {
        match std::fs::create_dir_all(&config.logging.file_dir) {
            Ok(()) => {
                let file_appender = match config.logging.file_rotation {
                    LogRotation::Hourly => tracing_appender::rolling::hourly(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                    LogRotation::Daily => tracing_appender::rolling::daily(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                    LogRotation::Never => tracing_appender::rolling::never(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                };

                // Writes happen on a background thread; JSON format for
                // structured parsing later
                let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
                tracing_subscriber::registry()
                    .with(filter)
                    .with(TuiLogLayer::new(log_buffer.clone()))
                    .with(
                        tracing_subscriber::fmt::layer()
                            .json()
                            .with_writer(non_blocking)
                            .with_ansi(false),
                    )
                    .init();
                Some(guard)
            }
            Err(e) => {
                eprintln!(
                    "Warning: Could not create log directory {:?}: {}",
                    config.logging.file_dir, e
                );
                tracing_subscriber::registry()
                    .with(filter)
                    .with(TuiLogLayer::new(log_buffer.clone()))
                    .init();
                None
            }
        }
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(TuiLogLayer::new(log_buffer.clone()))
            .init();
        None
    };

    // Load the quote collection once - it is immutable for the life of
    // the display. A missing file is an empty library (placeholder
    // state), a malformed one is a startup error.
    let library = match config.resolved_quotes_path() {
        Some(path) => QuoteLibrary::load(&path)?,
        None => QuoteLibrary::default(),
    };

    startup::print_startup(&config, &library);
    startup::log_startup(&config, &library);

    tui::run_tui(config, library, log_buffer).await
}
