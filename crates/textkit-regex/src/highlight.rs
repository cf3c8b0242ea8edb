//! Highlight span reconstruction.

use std::fmt::Write;

use crate::Match;

/// A slice of the subject, highlighted if it was matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Span<'a> {
    /// Subject text covered by this span.
    pub text: &'a str,
    /// Whether the text was part of a match.
    pub highlighted: bool,
}

/// Partition `subject` into alternating plain and highlighted spans.
///
/// `matches` must be in ascending, non-overlapping order, as produced by
/// [`match_pattern`](crate::match_pattern). Concatenating the span texts
/// always reproduces `subject`. Empty matches produce no span, and a match
/// that would go backwards or fall outside `subject` is skipped.
#[must_use]
pub fn highlight<'a>(subject: &'a str, matches: &[Match]) -> Vec<Span<'a>> {
    let mut spans = Vec::with_capacity(matches.len() * 2 + 1);
    let mut cursor = 0;

    for m in matches {
        if m.start < cursor || subject.get(m.start..m.end).is_none() {
            continue;
        }
        if m.start > cursor {
            spans.push(Span {
                text: &subject[cursor..m.start],
                highlighted: false,
            });
        }
        if m.end > m.start {
            spans.push(Span {
                text: &subject[m.start..m.end],
                highlighted: true,
            });
        }
        cursor = m.end;
    }

    if cursor < subject.len() {
        spans.push(Span {
            text: &subject[cursor..],
            highlighted: false,
        });
    }

    spans
}

/// Render the highlighted subject as HTML, wrapping matches in `<mark>`.
#[must_use]
pub fn highlight_html(subject: &str, matches: &[Match]) -> String {
    let mut html = String::with_capacity(subject.len() + matches.len() * 13);
    for span in highlight(subject, matches) {
        if span.highlighted {
            write!(html, "<mark>{}</mark>", escape(span.text)).unwrap();
        } else {
            html.push_str(&escape(span.text));
        }
    }
    html
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::match_pattern;

    fn spans_for<'a>(pattern: &str, flags: &str, subject: &'a str) -> Vec<Span<'a>> {
        let outcome = match_pattern(pattern, flags, subject, None);
        highlight(subject, &outcome.matches)
    }

    #[test]
    fn test_highlight_no_matches() {
        assert_eq!(
            spans_for("z", "g", "abc"),
            vec![Span {
                text: "abc",
                highlighted: false
            }]
        );
    }

    #[test]
    fn test_highlight_alternates() {
        let spans = spans_for("b", "g", "abcb");
        let parts: Vec<_> = spans.iter().map(|s| (s.text, s.highlighted)).collect();
        assert_eq!(
            parts,
            vec![("a", false), ("b", true), ("c", false), ("b", true)]
        );
    }

    #[test]
    fn test_highlight_adjacent_matches() {
        let spans = spans_for("a", "g", "aa");
        assert_eq!(spans.len(), 2);
        assert!(spans.iter().all(|s| s.highlighted));
    }

    #[test]
    fn test_highlight_empty_matches_cover_subject() {
        let spans = spans_for("x*", "g", "aaa");
        let joined: String = spans.iter().map(|s| s.text).collect();
        assert_eq!(joined, "aaa");
        assert!(spans.iter().all(|s| !s.highlighted));
    }

    #[test]
    fn test_highlight_empty_subject() {
        assert!(spans_for("a", "g", "").is_empty());
    }

    #[test]
    fn test_highlight_skips_out_of_order_matches() {
        let matches = vec![
            Match {
                text: "c".to_owned(),
                start: 2,
                end: 3,
                groups: Vec::new(),
            },
            Match {
                text: "a".to_owned(),
                start: 0,
                end: 1,
                groups: Vec::new(),
            },
        ];
        let joined: String = highlight("abc", &matches).iter().map(|s| s.text).collect();
        assert_eq!(joined, "abc");
    }

    #[test]
    fn test_highlight_html_escapes() {
        let outcome = match_pattern("<b>", "", "a<b>c", None);
        assert_eq!(
            highlight_html("a<b>c", &outcome.matches),
            "a<mark>&lt;b&gt;</mark>c"
        );
    }
}
