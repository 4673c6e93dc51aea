//! Keymap Diagram - ASCII layer diagrams for QMK keymaps
//!
//! Reads a `keymap.c`, prints a diagram for every `[NAME] = LAYOUT(...)`
//! table and, with `--update`, writes the diagrams back into the comment
//! above each table.

use clap::Parser;
use keymap_diagram::cli::{ExitCode, ShowArgs, UpdateArgs};
use keymap_diagram::constants::APP_BINARY_NAME;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Keymap Diagram - regenerate ASCII layer comments in QMK keymaps
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the keymap source (keymap.c)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Update the keymap file with generated comments
    #[arg(long)]
    update: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so diagrams and JSON on stdout stay clean
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let Some(file) = cli.file else {
        print_usage();
        std::process::exit(ExitCode::Failure.code());
    };

    let result = if cli.update {
        UpdateArgs {
            file,
            json: cli.json,
        }
        .execute()
    } else {
        ShowArgs {
            file,
            json: cli.json,
        }
        .execute()
    };

    match result {
        Ok(()) => std::process::exit(ExitCode::Success.code()),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code().code());
        }
    }
}

fn print_usage() {
    eprintln!("Usage: {} <keymap.c> [--update]", APP_BINARY_NAME);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --update    Update the keymap file with generated comments");
    eprintln!("  --json      Output as JSON");
    eprintln!();
    eprintln!("Examples:");
    eprintln!(
        "  {} keyboards/lily58/rev1/keymaps/default/keymap.c",
        APP_BINARY_NAME
    );
    eprintln!(
        "  {} keyboards/lily58/rev1/keymaps/default/keymap.c --update",
        APP_BINARY_NAME
    );
}
