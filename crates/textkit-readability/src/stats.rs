//! Corpus statistics.

use std::sync::LazyLock;

use regex::Regex;

use crate::syllables::count_syllables;

/// Word boundaries: runs of characters that are neither word characters nor apostrophes.
static WORD_SPLIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w']+").unwrap());

/// Sentence boundaries: runs of terminal punctuation.
static SENTENCE_SPLIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]+").unwrap());

/// Minimum syllable count for a word to be "complex".
pub const COMPLEX_WORD_SYLLABLES: usize = 3;

/// Counts every readability index is computed from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TextStatistics {
    /// Number of word fragments.
    pub word_count: usize,
    /// Number of sentences, at least 1.
    pub sentence_count: usize,
    /// Sum of per-word syllable counts.
    pub syllable_count: usize,
    /// Words with three or more syllables.
    pub complex_word_count: usize,
    /// Characters in the trimmed text.
    pub character_count: usize,
    /// Alphabetic characters in the trimmed text.
    pub letter_count: usize,
}

impl TextStatistics {
    /// Collect statistics for `text`.
    ///
    /// Returns `None` when `text` is empty or whitespace only.
    ///
    /// Words are the fragments between non-word runs, so text that ends in
    /// punctuation contributes one trailing empty fragment. A leading
    /// punctuation run contributes nothing. Sentences are the
    /// non-blank fragments between `.`, `!` and `?` runs; abbreviations such as
    /// "Dr." are counted as sentence ends.
    #[must_use]
    pub fn collect(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let mut stats = Self {
            word_count: 0,
            sentence_count: SENTENCE_SPLIT
                .split(text)
                .filter(|fragment| !fragment.trim().is_empty())
                .count()
                .max(1),
            syllable_count: 0,
            complex_word_count: 0,
            character_count: text.chars().count(),
            letter_count: text.chars().filter(|c| c.is_alphabetic()).count(),
        };

        let mut words = WORD_SPLIT.split(text).peekable();
        words.next_if_eq(&"");

        for word in words {
            let syllables = count_syllables(word);
            stats.word_count += 1;
            stats.syllable_count += syllables;
            if syllables >= COMPLEX_WORD_SYLLABLES {
                stats.complex_word_count += 1;
            }
        }

        Some(stats)
    }
}
