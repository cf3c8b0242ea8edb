//! Text statistics and readability indices.
//!
//! [`analyze`] collects word, sentence, syllable and letter counts for a text
//! and derives four standard indices from them:
//!
//! - Flesch Reading Ease
//! - Flesch-Kincaid Grade Level
//! - Gunning Fog
//! - Coleman-Liau
//!
//! Syllables are counted with a dictionary-free English heuristic and
//! sentence detection is a naive split on terminal punctuation, so all numbers
//! are approximations.
//!
//! # Example
//!
//! ```
//! let stats = textkit_readability::analyze("The cat sat. The dog ran fast.").unwrap();
//! assert_eq!(stats.text.word_count, 8);
//! assert_eq!(stats.text.sentence_count, 2);
//! assert!(stats.scores.flesch_reading_ease > 80.0);
//! ```

mod scores;
mod stats;
mod syllables;

pub use scores::{ReadingLevel, Scores};
pub use stats::{COMPLEX_WORD_SYLLABLES, TextStatistics};
pub use syllables::count_syllables;

/// Default reading speed used for the reading time estimate.
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 200;

/// Options for [`analyze_with`].
#[derive(Clone, Copy, Debug)]
pub struct ReadabilityOptions {
    /// Reading speed for the reading time estimate.
    pub words_per_minute: u32,
}

impl Default for ReadabilityOptions {
    fn default() -> Self {
        Self {
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
        }
    }
}

/// Full analysis result.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Statistics {
    /// Raw counts.
    pub text: TextStatistics,
    /// Words per sentence.
    pub avg_words_per_sentence: f64,
    /// Syllables per word.
    pub avg_syllables_per_word: f64,
    /// Readability indices.
    pub scores: Scores,
    /// Flesch Reading Ease band.
    pub reading_level: ReadingLevel,
    /// Estimated reading time.
    pub reading_time_minutes: f64,
}

/// Analyze `text` with default options.
///
/// Returns `None` for empty or whitespace-only input.
#[must_use]
pub fn analyze(text: &str) -> Option<Statistics> {
    analyze_with(text, &ReadabilityOptions::default())
}

/// Analyze `text` with explicit options.
///
/// Returns `None` for empty or whitespace-only input.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn analyze_with(text: &str, options: &ReadabilityOptions) -> Option<Statistics> {
    let counts = TextStatistics::collect(text)?;
    let scores = Scores::from_statistics(&counts);

    let words = counts.word_count.max(1) as f64;
    let stats = Statistics {
        text: counts,
        avg_words_per_sentence: words / counts.sentence_count.max(1) as f64,
        avg_syllables_per_word: counts.syllable_count as f64 / words,
        reading_level: ReadingLevel::from_flesch(scores.flesch_reading_ease),
        scores,
        reading_time_minutes: counts.word_count as f64
            / f64::from(options.words_per_minute.max(1)),
    };

    tracing::debug!(
        words = counts.word_count,
        sentences = counts.sentence_count,
        flesch = stats.scores.flesch_reading_ease,
        "Analyzed text"
    );

    Some(stats)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_analyze_empty_is_none() {
        assert!(analyze("").is_none());
        assert!(analyze("   \n").is_none());
    }

    #[test]
    fn test_analyze_easy_text() {
        let stats = analyze("The cat sat. The dog ran fast.").unwrap();
        assert_eq!(stats.text.word_count, 8);
        assert_eq!(stats.text.sentence_count, 2);
        assert!(stats.scores.flesch_reading_ease > 80.0);
        assert_eq!(stats.reading_level, ReadingLevel::VeryEasy);
        assert!((stats.avg_words_per_sentence - 4.0).abs() < f64::EPSILON);
        assert!((stats.avg_syllables_per_word - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_analyze_harder_text_scores_lower() {
        let easy = analyze("The cat sat on the mat.").unwrap();
        let hard = analyze(
            "Comprehensive institutional documentation necessitates considerable organizational deliberation.",
        )
        .unwrap();
        assert!(hard.scores.flesch_reading_ease < easy.scores.flesch_reading_ease);
        assert!(hard.scores.gunning_fog > easy.scores.gunning_fog);
        assert!(hard.text.complex_word_count > 0);
    }

    #[test]
    fn test_reading_time_uses_options() {
        let text = "word ".repeat(400);
        let stats = analyze_with(
            &text,
            &ReadabilityOptions {
                words_per_minute: 100,
            },
        )
        .unwrap();
        assert!((stats.reading_time_minutes - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_reading_time_zero_wpm_is_guarded() {
        let stats = analyze_with("one two", &ReadabilityOptions { words_per_minute: 0 }).unwrap();
        assert!(stats.reading_time_minutes.is_finite());
    }
}
