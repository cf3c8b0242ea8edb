//! `textkit readability` command implementation.

use std::fmt::Write;

use clap::Args;
use textkit_config::Config;
use textkit_readability::{ReadabilityOptions, Statistics};

use crate::error::CliError;
use crate::input::InputArgs;
use crate::output::Output;

/// Arguments for the readability command.
#[derive(Args)]
pub(crate) struct ReadabilityArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Print the full result as JSON.
    #[arg(long)]
    json: bool,

    /// Reading speed in words per minute (overrides config).
    #[arg(long)]
    pub wpm: Option<u32>,
}

impl ReadabilityArgs {
    pub(crate) fn execute(self, config: &Config) -> Result<(), CliError> {
        let output = Output::new();
        let text = self.input.read(config.limits.max_input_bytes)?;

        let options = ReadabilityOptions {
            words_per_minute: config.readability.words_per_minute,
        };
        let stats = textkit_readability::analyze_with(&text, &options);

        if self.json {
            output.result(&serde_json::to_string_pretty(&stats)?);
            return Ok(());
        }

        match stats {
            Some(stats) => output.result(&report(&stats)),
            None => output.note("No text to analyze"),
        }
        Ok(())
    }
}

/// Plain-text report for a terminal.
fn report(stats: &Statistics) -> String {
    let counts = &stats.text;
    let scores = &stats.scores;
    let mut out = String::new();

    let rows: [(&str, String); 14] = [
        ("Words", counts.word_count.to_string()),
        ("Sentences", counts.sentence_count.to_string()),
        ("Syllables", counts.syllable_count.to_string()),
        ("Complex words", counts.complex_word_count.to_string()),
        ("Characters", counts.character_count.to_string()),
        ("Letters", counts.letter_count.to_string()),
        ("Words per sentence", format!("{:.1}", stats.avg_words_per_sentence)),
        ("Syllables per word", format!("{:.2}", stats.avg_syllables_per_word)),
        ("Flesch Reading Ease", format!("{:.1}", scores.flesch_reading_ease)),
        ("Flesch-Kincaid Grade", format!("{:.1}", scores.flesch_kincaid_grade)),
        ("Gunning Fog", format!("{:.1}", scores.gunning_fog)),
        ("Coleman-Liau", format!("{:.1}", scores.coleman_liau)),
        ("Reading level", stats.reading_level.to_string()),
        ("Reading time", format!("{:.1} min", stats.reading_time_minutes)),
    ];

    for (label, value) in rows {
        writeln!(out, "{label:<22}{value}").unwrap();
    }
    out.truncate(out.trim_end().len());
    out
}
