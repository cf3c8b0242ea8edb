//! Heuristic English syllable counting.
//!
//! No dictionary: vowel clusters are counted after stripping common silent
//! endings. Counts are approximate by construction.

use std::sync::LazyLock;

use regex::Regex;

/// Trailing `es`/`e` not preceded by a vowel or `l`, and any trailing `ed`.
static SILENT_ENDING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:[^laeiouy]es|ed|[^laeiouy]e)$").unwrap());

static LEADING_Y: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^y").unwrap());

static VOWEL_GROUP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[aeiouy]{1,2}").unwrap());

/// Count syllables in a single word.
///
/// Non-letters are dropped and the word is lowercased. Words of three letters
/// or fewer count as one syllable, and every word counts as at least one.
///
/// ```
/// use textkit_readability::count_syllables;
///
/// assert_eq!(count_syllables("cat"), 1);
/// assert_eq!(count_syllables("table"), 2);
/// assert_eq!(count_syllables("elephant"), 3);
/// ```
#[must_use]
pub fn count_syllables(word: &str) -> usize {
    let word: String = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect();

    if word.chars().count() <= 3 {
        return 1;
    }

    let word = SILENT_ENDING.replace(&word, "");
    let word = LEADING_Y.replace(&word, "");

    VOWEL_GROUP.find_iter(&word).count().max(1)
}
