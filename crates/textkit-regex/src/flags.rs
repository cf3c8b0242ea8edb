//! Match flags.

use std::str::FromStr;

use regex::{Regex, RegexBuilder};

/// Flag parsing error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlagError {
    /// Character is not a supported flag.
    #[error("Invalid flag '{0}' (supported: g, i, m, s, x, u)")]
    Unknown(char),
    /// Flag given more than once.
    #[error("Duplicate flag '{0}'")]
    Duplicate(char),
}

/// Parsed flag string such as `"gi"`.
///
/// `u` is accepted for compatibility; Unicode matching is always on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Flags {
    /// `g`: find every non-overlapping match instead of the first.
    pub global: bool,
    /// `i`: case-insensitive matching.
    pub case_insensitive: bool,
    /// `m`: `^` and `$` match at line boundaries.
    pub multi_line: bool,
    /// `s`: `.` matches `\n`.
    pub dot_matches_new_line: bool,
    /// `x`: whitespace and `#` comments in the pattern are ignored.
    pub ignore_whitespace: bool,
}

impl FromStr for Flags {
    type Err = FlagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut flags = Self::default();
        let mut seen = String::with_capacity(s.len());

        for ch in s.chars() {
            if seen.contains(ch) {
                return Err(FlagError::Duplicate(ch));
            }
            seen.push(ch);

            match ch {
                'g' => flags.global = true,
                'i' => flags.case_insensitive = true,
                'm' => flags.multi_line = true,
                's' => flags.dot_matches_new_line = true,
                'x' => flags.ignore_whitespace = true,
                'u' => {}
                other => return Err(FlagError::Unknown(other)),
            }
        }

        Ok(flags)
    }
}

impl Flags {
    /// Compile `pattern` with these flags.
    pub fn compile(&self, pattern: &str) -> Result<Regex, regex::Error> {
        RegexBuilder::new(pattern)
            .case_insensitive(self.case_insensitive)
            .multi_line(self.multi_line)
            .dot_matches_new_line(self.dot_matches_new_line)
            .ignore_whitespace(self.ignore_whitespace)
            .build()
    }
}
