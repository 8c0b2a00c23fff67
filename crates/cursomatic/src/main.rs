//! cursomatic CLI - course content tooling.
//!
//! Provides commands for:
//! - `convert`: Convert a Markdown file to AsciiDoc
//! - `translate`: Translate a Markdown file from English to Spanish

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ConvertArgs, TranslateArgs};
use output::Output;

/// cursomatic - course content tooling.
#[derive(Parser)]
#[command(name = "cursomatic", version, about)]
struct Cli {
    /// Enable verbose (INFO level) logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a Markdown file to AsciiDoc format.
    Convert(ConvertArgs),
    /// Translate a Markdown file from English to Spanish.
    Translate(TranslateArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Convert(args) => args.execute(),
        Commands::Translate(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
