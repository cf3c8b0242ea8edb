//! Regex matching for user-supplied patterns.
//!
//! [`match_pattern`] compiles a pattern and flag string at call time, collects
//! matches with their capture groups, and optionally builds a replaced copy
//! of the subject. Compilation problems never escape as errors: they are
//! reported in [`MatchOutcome::error`] with an empty match list.
//!
//! Offsets are byte offsets into the subject.
//!
//! # Example
//!
//! ```
//! use textkit_regex::match_pattern;
//!
//! let outcome = match_pattern("a(b)c", "", "xxabcxx", None);
//! assert!(outcome.error.is_none());
//! assert_eq!(outcome.matches.len(), 1);
//! assert_eq!(outcome.matches[0].text, "abc");
//! assert_eq!(outcome.matches[0].start, 2);
//! assert_eq!(outcome.matches[0].groups, vec![Some("b".to_owned())]);
//! ```

mod flags;
mod highlight;
mod template;

pub use flags::{FlagError, Flags};
pub use highlight::{Span, highlight, highlight_html};

use template::Template;

/// Default cap on the number of matches collected in one call.
pub const DEFAULT_MAX_MATCHES: usize = 10_000;

/// Options for [`match_pattern_with`].
#[derive(Debug, Clone, Copy)]
pub struct MatchOptions {
    /// Stop collecting after this many matches.
    pub max_matches: usize,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            max_matches: DEFAULT_MAX_MATCHES,
        }
    }
}

/// One match of the pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Match {
    /// Matched text.
    pub text: String,
    /// Byte offset of the match start.
    pub start: usize,
    /// Byte offset one past the match end.
    pub end: usize,
    /// Capture groups in declaration order; `None` if a group did not participate.
    pub groups: Vec<Option<String>>,
}

/// Result of [`match_pattern`].
///
/// Check [`error`](Self::error) before trusting `matches` or `replaced`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MatchOutcome {
    /// Matches in ascending, non-overlapping order.
    pub matches: Vec<Match>,
    /// Pattern or flag error message.
    pub error: Option<String>,
    /// Subject with matches replaced, if a replacement template was given.
    pub replaced: Option<String>,
    /// Capture group names in declaration order.
    pub group_names: Vec<Option<String>>,
    /// Whether matching stopped at the match cap.
    pub truncated: bool,
}

impl MatchOutcome {
    fn failed(message: String) -> Self {
        Self {
            error: Some(message),
            ..Self::default()
        }
    }
}

/// Match `pattern` against `subject` with default options.
///
/// Without the `g` flag at most one match is produced. With it, matching
/// resumes at the end of each match; an empty match advances the scan by one
/// character so the loop always terminates.
#[must_use]
pub fn match_pattern(
    pattern: &str,
    flags: &str,
    subject: &str,
    replacement: Option<&str>,
) -> MatchOutcome {
    match_pattern_with(pattern, flags, subject, replacement, &MatchOptions::default())
}

/// Match `pattern` against `subject` with explicit options.
#[must_use]
pub fn match_pattern_with(
    pattern: &str,
    flags: &str,
    subject: &str,
    replacement: Option<&str>,
    options: &MatchOptions,
) -> MatchOutcome {
    let flags: Flags = match flags.parse() {
        Ok(flags) => flags,
        Err(e) => return MatchOutcome::failed(e.to_string()),
    };
    let regex = match flags.compile(pattern) {
        Ok(regex) => regex,
        Err(e) => return MatchOutcome::failed(e.to_string()),
    };

    let template = replacement.map(|r| Template::parse(r, &regex));
    let mut replaced = template.as_ref().map(|_| String::with_capacity(subject.len()));

    let mut outcome = MatchOutcome {
        group_names: regex
            .capture_names()
            .skip(1)
            .map(|name| name.map(str::to_owned))
            .collect(),
        ..MatchOutcome::default()
    };

    let mut cursor = 0;
    let mut copied = 0;
    while cursor <= subject.len() {
        if outcome.matches.len() >= options.max_matches {
            outcome.truncated = true;
            break;
        }
        let Some(caps) = regex.captures_at(subject, cursor) else {
            break;
        };
        let Some(whole) = caps.get(0) else {
            break;
        };

        if let (Some(out), Some(template)) = (replaced.as_mut(), template.as_ref()) {
            out.push_str(&subject[copied..whole.start()]);
            template.expand_into(&caps, subject, out);
            copied = whole.end();
        }

        outcome.matches.push(Match {
            text: whole.as_str().to_owned(),
            start: whole.start(),
            end: whole.end(),
            groups: caps
                .iter()
                .skip(1)
                .map(|group| group.map(|g| g.as_str().to_owned()))
                .collect(),
        });

        if !flags.global {
            break;
        }

        cursor = if whole.is_empty() {
            // Step over one character, not one byte, so the next search starts on a boundary.
            whole.end() + subject[whole.end()..].chars().next().map_or(1, char::len_utf8)
        } else {
            whole.end()
        };
    }

    if let Some(mut out) = replaced {
        out.push_str(&subject[copied..]);
        outcome.replaced = Some(out);
    }

    tracing::debug!(
        pattern,
        matches = outcome.matches.len(),
        truncated = outcome.truncated,
        "Matched pattern"
    );

    outcome
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_single_match_with_group() {
        let outcome = match_pattern("a(b)c", "", "xxabcxx", None);
        assert_eq!(
            outcome,
            MatchOutcome {
                matches: vec![Match {
                    text: "abc".to_owned(),
                    start: 2,
                    end: 5,
                    groups: vec![Some("b".to_owned())],
                }],
                error: None,
                replaced: None,
                group_names: vec![None],
                truncated: false,
            }
        );
    }

    #[test]
    fn test_non_global_stops_after_first() {
        let outcome = match_pattern("a", "", "aaa", None);
        assert_eq!(outcome.matches.len(), 1);
    }

    #[test]
    fn test_global_finds_all() {
        let outcome = match_pattern(r"\d+", "g", "a1 b22 c333", None);
        let texts: Vec<_> = outcome.matches.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["1", "22", "333"]);
    }

    #[test]
    fn test_global_empty_matches_terminate() {
        let outcome = match_pattern("x*", "g", "aaa", None);
        assert_eq!(outcome.matches.len(), 4);
        let starts: Vec<_> = outcome.matches.iter().map(|m| m.start).collect();
        assert_eq!(starts, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_global_empty_match_after_nonempty() {
        let outcome = match_pattern("a*", "g", "baa", None);
        let spans: Vec<_> = outcome.matches.iter().map(|m| (m.start, m.end)).collect();
        assert_eq!(spans, vec![(0, 0), (1, 3), (3, 3)]);
    }

    #[test]
    fn test_global_empty_matches_step_over_multibyte() {
        let outcome = match_pattern("", "g", "é€", None);
        let starts: Vec<_> = outcome.matches.iter().map(|m| m.start).collect();
        assert_eq!(starts, vec![0, 2, 5]);
    }

    #[test]
    fn test_unparticipating_group_is_none() {
        let outcome = match_pattern("(a)|(b)", "", "b", None);
        assert_eq!(outcome.matches[0].groups, vec![None, Some("b".to_owned())]);
    }

    #[test]
    fn test_named_groups_reported() {
        let outcome = match_pattern(r"(?P<word>\w+) (\d)", "", "abc 1", None);
        assert_eq!(outcome.group_names, vec![Some("word".to_owned()), None]);
    }

    #[test]
    fn test_invalid_pattern() {
        let outcome = match_pattern("(unclosed", "g", "text", Some("x"));
        assert!(outcome.error.is_some());
        assert!(outcome.matches.is_empty());
        assert_eq!(outcome.replaced, None);
    }

    #[test]
    fn test_invalid_flags() {
        let outcome = match_pattern("a", "gz", "a", None);
        assert_eq!(
            outcome.error.as_deref(),
            Some("Invalid flag 'z' (supported: g, i, m, s, x, u)")
        );
        assert!(outcome.matches.is_empty());
    }

    #[test]
    fn test_case_insensitive_flag() {
        let outcome = match_pattern("abc", "gi", "ABC abc", None);
        assert_eq!(outcome.matches.len(), 2);
    }

    #[test]
    fn test_replace_first_only() {
        let outcome = match_pattern("o", "", "foo", Some("0"));
        assert_eq!(outcome.replaced.as_deref(), Some("f0o"));
    }

    #[test]
    fn test_replace_global_with_groups() {
        let outcome = match_pattern(r"(\w+)@(\w+)", "g", "a@b c@d", Some("$2@$1"));
        assert_eq!(outcome.replaced.as_deref(), Some("b@a d@c"));
    }

    #[test]
    fn test_replace_empty_matches() {
        let outcome = match_pattern("x*", "g", "ab", Some("-"));
        assert_eq!(outcome.replaced.as_deref(), Some("-a-b-"));
    }

    #[test]
    fn test_replace_without_matches_returns_subject() {
        let outcome = match_pattern("z", "g", "abc", Some("y"));
        assert_eq!(outcome.replaced.as_deref(), Some("abc"));
    }

    #[test]
    fn test_max_matches_truncates() {
        let outcome = match_pattern_with(
            "a",
            "g",
            "aaaa",
            Some("b"),
            &MatchOptions { max_matches: 2 },
        );
        assert_eq!(outcome.matches.len(), 2);
        assert!(outcome.truncated);
        assert_eq!(outcome.replaced.as_deref(), Some("bbaa"));
    }

    #[test]
    fn test_anchor_respects_haystack_start() {
        let outcome = match_pattern("^a", "g", "aaa", None);
        assert_eq!(outcome.matches.len(), 1);
    }
}
