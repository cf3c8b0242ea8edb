//! Protected fragments that later rewrite stages must not see.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Delimits protection tokens. Stripped from input before rendering.
pub(crate) const SENTINEL: char = '\u{1A}';

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\x1A(\d+)\x1A").unwrap());

/// Store for finished HTML fragments, addressed by opaque tokens.
#[derive(Debug, Default)]
pub(crate) struct Protected {
    fragments: Vec<String>,
}

impl Protected {
    /// Store `html` and return the token that stands in for it.
    pub(crate) fn stash(&mut self, html: String) -> String {
        let index = self.fragments.len();
        self.fragments.push(html);
        format!("{SENTINEL}{index}{SENTINEL}")
    }

    pub(crate) fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Replace every token in `text` with its stored fragment.
    pub(crate) fn restore(&self, text: &str) -> String {
        if self.fragments.is_empty() {
            return text.to_owned();
        }
        TOKEN_RE
            .replace_all(text, |caps: &Captures<'_>| {
                caps[1]
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| self.fragments.get(index))
                    .map_or_else(|| caps[0].to_owned(), Clone::clone)
            })
            .into_owned()
    }
}

/// Escape `&`, `<`, `>` and `"` for use in HTML text or attribute values.
///
/// ```
/// use textkit_markdown::escape_html;
///
/// assert_eq!(escape_html("a < b && \"c\""), "a &lt; b &amp;&amp; &quot;c&quot;");
/// ```
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stash_and_restore() {
        let mut protected = Protected::default();
        let first = protected.stash("<b>one</b>".to_owned());
        let second = protected.stash("<i>two</i>".to_owned());
        let text = format!("{second} and {first}");
        assert_eq!(protected.restore(&text), "<i>two</i> and <b>one</b>");
    }

    #[test]
    fn test_restore_unknown_token_left_alone() {
        let mut protected = Protected::default();
        protected.stash("x".to_owned());
        let text = "\u{1A}7\u{1A}";
        assert_eq!(protected.restore(text), text);
    }

    #[test]
    fn test_restore_without_fragments() {
        let protected = Protected::default();
        assert_eq!(protected.restore("plain"), "plain");
    }

    #[test]
    fn test_escape_html_plain() {
        assert_eq!(escape_html("hello"), "hello");
    }

    #[test]
    fn test_escape_html_markup() {
        assert_eq!(escape_html("<a href=\"x\">"), "&lt;a href=&quot;x&quot;&gt;");
    }
}
