//! `textkit markdown` command implementation.

use clap::Args;
use textkit_config::Config;
use textkit_markdown::Pipeline;

use crate::error::CliError;
use crate::input::InputArgs;
use crate::output::Output;

/// Arguments for the markdown command.
#[derive(Args)]
pub(crate) struct MarkdownArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Stop after the named rewrite stage and print the intermediate text.
    #[arg(long, value_name = "NAME")]
    until: Option<String>,
}

impl MarkdownArgs {
    pub(crate) fn execute(self, config: &Config) -> Result<(), CliError> {
        let markdown = self.input.read(config.limits.max_input_bytes)?;
        let html = render(&markdown, self.until.as_deref())?;
        Output::new().result(&html);
        Ok(())
    }
}

fn render(markdown: &str, until: Option<&str>) -> Result<String, CliError> {
    let pipeline = Pipeline::standard();
    let Some(stage) = until else {
        return Ok(pipeline.run(markdown));
    };
    pipeline.run_until(stage, markdown).ok_or_else(|| {
        let known: Vec<_> = pipeline.stage_names().collect();
        CliError::Validation(format!(
            "Unknown stage '{stage}' (stages: {})",
            known.join(", ")
        ))
    })
}
