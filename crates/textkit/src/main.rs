//! textkit CLI - Text utilities.
//!
//! Provides commands for:
//! - `markdown`: Render Markdown to HTML
//! - `readability`: Report text statistics and readability indices
//! - `regex`: Match a pattern against text, optionally replacing matches
//! - `json format|minify|validate`: Reformat or check JSON

mod commands;
mod error;
mod input;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use textkit_config::{CliSettings, Config};
use tracing_subscriber::EnvFilter;

use commands::{JsonCommand, MarkdownArgs, ReadabilityArgs, RegexArgs};
use error::CliError;
use output::Output;

/// textkit - Text utilities.
#[derive(Parser)]
#[command(name = "textkit", version, about)]
struct Cli {
    /// Path to configuration file (default: auto-discover textkit.toml).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Maximum input size in bytes (overrides config).
    #[arg(long, global = true)]
    max_input_bytes: Option<u64>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render Markdown to HTML.
    Markdown(MarkdownArgs),
    /// Report readability statistics.
    Readability(ReadabilityArgs),
    /// Match a regular expression against text.
    Regex(RegexArgs),
    /// JSON formatting commands.
    #[command(subcommand)]
    Json(JsonCommand),
}

impl Cli {
    fn execute(self) -> Result<(), CliError> {
        let mut settings = CliSettings {
            max_input_bytes: self.max_input_bytes,
            ..CliSettings::default()
        };
        match &self.command {
            Commands::Readability(args) => settings.words_per_minute = args.wpm,
            Commands::Json(cmd) => settings.indent = cmd.indent(),
            Commands::Markdown(_) | Commands::Regex(_) => {}
        }

        let config = Config::load(self.config.as_deref(), Some(&settings))?;
        if let Some(path) = &config.config_path {
            tracing::info!(path = %path.display(), "Loaded configuration");
        }

        match self.command {
            Commands::Markdown(args) => args.execute(&config),
            Commands::Readability(args) => args.execute(&config),
            Commands::Regex(args) => args.execute(&config),
            Commands::Json(cmd) => cmd.execute(&config),
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = cli.execute() {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
