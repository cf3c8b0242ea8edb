//! `textkit json` subcommand group.

use clap::{Args, Subcommand};
use textkit_config::Config;
use textkit_json::{Indent, JsonError};

use crate::error::CliError;
use crate::input::InputArgs;
use crate::output::Output;

/// JSON commands.
#[derive(Subcommand)]
pub(crate) enum JsonCommand {
    /// Pretty-print JSON.
    Format(FormatArgs),
    /// Remove all insignificant whitespace.
    Minify(InputArgs),
    /// Check that the input is valid JSON.
    Validate(InputArgs),
}

/// Arguments for `json format`.
#[derive(Args)]
pub(crate) struct FormatArgs {
    /// Indentation: 2, 4 or tab (overrides config).
    #[arg(short, long)]
    indent: Option<Indent>,

    #[command(flatten)]
    input: InputArgs,
}

impl JsonCommand {
    /// Indentation override given on the command line, if any.
    pub(crate) fn indent(&self) -> Option<Indent> {
        match self {
            Self::Format(args) => args.indent,
            Self::Minify(_) | Self::Validate(_) => None,
        }
    }

    /// Execute the json subcommand.
    pub(crate) fn execute(self, config: &Config) -> Result<(), CliError> {
        let output = Output::new();
        let limit = config.limits.max_input_bytes;

        match self {
            Self::Format(args) => {
                let input = args.input.read(limit)?;
                output.result(&textkit_json::format(&input, config.json.indent)?);
            }
            Self::Minify(args) => {
                let input = args.read(limit)?;
                output.result(&textkit_json::minify(&input)?);
            }
            Self::Validate(args) => {
                let input = args.read(limit)?;
                textkit_json::validate(&input).map_err(located)?;
                output.success("Valid JSON");
            }
        }
        Ok(())
    }
}

/// Prefix parse errors with their position.
fn located(err: JsonError) -> CliError {
    match &err {
        JsonError::Parse { line, column, .. } => {
            CliError::Validation(format!("Invalid JSON at {line}:{column}: {err}"))
        }
        JsonError::Serialize(_) => err.into(),
    }
}
