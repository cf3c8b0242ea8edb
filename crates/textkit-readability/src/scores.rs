//! Readability formulas.
//!
//! Coefficients and clamping follow the published definitions exactly; scores
//! are only comparable with other tools if these stay untouched.

use std::fmt;

use crate::stats::TextStatistics;

/// The four readability indices.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Scores {
    /// Flesch Reading Ease, clamped to `[0, 100]`. Higher is easier.
    pub flesch_reading_ease: f64,
    /// Flesch-Kincaid grade level, at least 0.
    pub flesch_kincaid_grade: f64,
    /// Gunning Fog index, at least 0.
    pub gunning_fog: f64,
    /// Coleman-Liau index, at least 0.
    pub coleman_liau: f64,
}

impl Scores {
    /// Compute all indices from collected statistics.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_statistics(stats: &TextStatistics) -> Self {
        let words = stats.word_count.max(1) as f64;
        let sentences = stats.sentence_count.max(1) as f64;
        let words_per_sentence = words / sentences;
        let syllables_per_word = stats.syllable_count as f64 / words;

        let letters_per_100_words = stats.letter_count as f64 / words * 100.0;
        let sentences_per_100_words = sentences / words * 100.0;

        Self {
            flesch_reading_ease: (206.835
                - 1.015 * words_per_sentence
                - 84.6 * syllables_per_word)
                .clamp(0.0, 100.0),
            flesch_kincaid_grade: (0.39 * words_per_sentence + 11.8 * syllables_per_word - 15.59)
                .max(0.0),
            gunning_fog: (0.4
                * (words_per_sentence + 100.0 * stats.complex_word_count as f64 / words))
                .max(0.0),
            coleman_liau: (0.0588 * letters_per_100_words
                - 0.296 * sentences_per_100_words
                - 15.8)
                .max(0.0),
        }
    }
}

/// Conventional Flesch Reading Ease bands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ReadingLevel {
    VeryEasy,
    Easy,
    FairlyEasy,
    Standard,
    FairlyDifficult,
    Difficult,
    VeryDifficult,
}

impl ReadingLevel {
    /// Band for a Flesch Reading Ease score.
    #[must_use]
    pub fn from_flesch(score: f64) -> Self {
        match score {
            s if s >= 90.0 => Self::VeryEasy,
            s if s >= 80.0 => Self::Easy,
            s if s >= 70.0 => Self::FairlyEasy,
            s if s >= 60.0 => Self::Standard,
            s if s >= 50.0 => Self::FairlyDifficult,
            s if s >= 30.0 => Self::Difficult,
            _ => Self::VeryDifficult,
        }
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::VeryEasy => "Very easy",
            Self::Easy => "Easy",
            Self::FairlyEasy => "Fairly easy",
            Self::Standard => "Standard",
            Self::FairlyDifficult => "Fairly difficult",
            Self::Difficult => "Difficult",
            Self::VeryDifficult => "Very difficult",
        }
    }
}

impl fmt::Display for ReadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
