//! `textkit regex` command implementation.

use std::fmt::Write;

use clap::Args;
use textkit_config::Config;
use textkit_regex::{MatchOptions, MatchOutcome};

use crate::error::CliError;
use crate::input::InputArgs;
use crate::output::Output;

/// Arguments for the regex command.
#[derive(Args)]
pub(crate) struct RegexArgs {
    /// Regular expression.
    #[arg(short, long)]
    pub pattern: String,

    /// Flag letters: g, i, m, s, x, u (default from config).
    #[arg(short, long)]
    pub flags: Option<String>,

    /// Replacement template; prints the replaced text instead of the matches.
    #[arg(short, long)]
    pub replacement: Option<String>,

    /// Print the full result as JSON.
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    pub input: InputArgs,
}

impl RegexArgs {
    pub(crate) fn execute(self, config: &Config) -> Result<(), CliError> {
        let output = Output::new();
        let subject = self.input.read(config.limits.max_input_bytes)?;

        let flags = self.flags.as_deref().unwrap_or(&config.regex.default_flags);
        let options = MatchOptions {
            max_matches: config.regex.max_matches,
        };
        let outcome = textkit_regex::match_pattern_with(
            &self.pattern,
            flags,
            &subject,
            self.replacement.as_deref(),
            &options,
        );

        if self.json {
            output.result(&serde_json::to_string_pretty(&outcome)?);
        }
        if let Some(message) = outcome.error {
            return Err(CliError::Pattern(message));
        }
        if self.json {
            return Ok(());
        }

        if outcome.truncated {
            output.note(&format!("Stopped after {} matches", outcome.matches.len()));
        }
        match &outcome.replaced {
            Some(replaced) => {
                output.result(replaced);
                output.note(&format!("{} replaced", count(outcome.matches.len())));
            }
            None => output.result(&describe(&outcome, &subject, |text| output.mark(text))),
        }
        Ok(())
    }
}

fn count(n: usize) -> String {
    if n == 1 {
        "1 match".to_owned()
    } else {
        format!("{n} matches")
    }
}

/// Highlighted subject followed by one entry per match.
fn describe(outcome: &MatchOutcome, subject: &str, mark: impl Fn(&str) -> String) -> String {
    let mut out = String::new();

    for span in textkit_regex::highlight(subject, &outcome.matches) {
        if span.highlighted {
            out.push_str(&mark(span.text));
        } else {
            out.push_str(span.text);
        }
    }
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }

    writeln!(out, "\n{}", count(outcome.matches.len())).unwrap();
    for (i, m) in outcome.matches.iter().enumerate() {
        writeln!(out, "[{}] {}..{} {:?}", i + 1, m.start, m.end, m.text).unwrap();
        for (index, group) in m.groups.iter().enumerate() {
            let label = match outcome.group_names.get(index) {
                Some(Some(name)) => format!("${} <{name}>", index + 1),
                _ => format!("${}", index + 1),
            };
            match group {
                Some(text) => writeln!(out, "    {label} = {text:?}").unwrap(),
                None => writeln!(out, "    {label} = (unmatched)").unwrap(),
            }
        }
    }

    out.truncate(out.trim_end().len());
    out
}
