// CLI module - command-line argument parsing and handlers
//
// Provides subcommands for managing the two files sattva owns:
// - config --show/--reset/--edit/--path: the configuration file
// - quotes --validate/--count/--path: the quote collection

use crate::config::{Config, VERSION};
use crate::quotes::QuoteLibrary;
use clap::{Parser, Subcommand};
use std::process::Command;

/// sattva - quote of the moment for your terminal
#[derive(Parser)]
#[command(name = "sattva")]
#[command(version = VERSION)]
#[command(about = "Quote of the moment for your terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Open config file in $EDITOR
        #[arg(long)]
        edit: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },

    /// Inspect the quote collection
    Quotes {
        /// Validate the quote file against the schema
        #[arg(long)]
        validate: bool,

        /// Print the number of quotes in the collection
        #[arg(long)]
        count: bool,

        /// Show quote file path
        #[arg(long)]
        path: bool,
    },
}

/// Handle CLI commands. Returns true if a command was handled (exit after).
pub fn handle_cli() -> bool {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Config {
            show,
            reset,
            edit,
            path,
        }) => {
            if path {
                handle_config_path();
            } else if show {
                handle_config_show();
            } else if reset {
                handle_config_reset();
            } else if edit {
                handle_config_edit();
            } else {
                println!("Usage: sattva config [--show|--reset|--edit|--path]");
            }
            true
        }
        Some(Commands::Quotes {
            validate,
            count,
            path,
        }) => {
            if path {
                handle_quotes_path();
            } else if validate || count {
                handle_quotes_check(count);
            } else {
                println!("Usage: sattva quotes [--validate|--count|--path]");
            }
            true
        }
        None => false, // No subcommand, run the display
    }
}

fn handle_config_path() {
    match Config::config_path() {
        Some(path) => println!("{}", path.display()),
        None => {
            eprintln!("Error: Could not determine config path");
            std::process::exit(1);
        }
    }
}

fn handle_config_show() {
    let config = Config::from_env();
    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());
}

fn handle_config_reset() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error: Could not create {}: {}", parent.display(), e);
            std::process::exit(1);
        }
    }

    match std::fs::write(&path, Config::default().to_toml()) {
        Ok(()) => println!("Config reset: {}", path.display()),
        Err(e) => {
            eprintln!("Error: Could not write {}: {}", path.display(), e);
            std::process::exit(1);
        }
    }
}

fn handle_config_edit() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    // Make sure there is something to edit
    Config::ensure_config_exists();

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
    match Command::new(&editor).arg(&path).status() {
        Ok(status) if status.success() => {}
        Ok(status) => {
            eprintln!("Editor exited with {status}");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: Could not launch {editor}: {e}");
            std::process::exit(1);
        }
    }
}

fn handle_quotes_path() {
    let config = Config::from_env();
    match config.resolved_quotes_path() {
        Some(path) => println!("{}", path.display()),
        None => {
            eprintln!("Error: Could not determine quote file path");
            std::process::exit(1);
        }
    }
}

/// Validate the quote file; with `count` also print the total
fn handle_quotes_check(count: bool) {
    let config = Config::from_env();
    let Some(path) = config.resolved_quotes_path() else {
        eprintln!("Error: Could not determine quote file path");
        std::process::exit(1);
    };

    match QuoteLibrary::load(&path) {
        Ok(library) => {
            if count {
                println!("{}", library.len());
            } else {
                println!("OK: {} ({} quotes)", path.display(), library.len());
            }
        }
        Err(e) => {
            eprintln!("Invalid: {e:#}");
            std::process::exit(1);
        }
    }
}
