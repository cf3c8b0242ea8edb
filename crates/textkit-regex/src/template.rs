//! Replacement templates.
//!
//! Accepted references:
//!
//! | Syntax | Inserts |
//! |---|---|
//! | `$$` | a literal `$` |
//! | `$&`, `${0}` | the whole match |
//! | `` $` `` | text before the match |
//! | `$'` | text after the match |
//! | `$1`..`$99`, `${1}` | numbered group |
//! | `$<name>`, `${name}` | named group |
//!
//! Two-digit references are used only if that group exists, otherwise the
//! second digit is literal. References to missing groups stay literal, and
//! groups that did not participate insert nothing.

use regex::{Captures, Regex};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Part {
    Literal(String),
    Group(usize),
    Named(String),
    Before,
    After,
}

/// A parsed replacement template, bound to one compiled pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Template {
    parts: Vec<Part>,
}

impl Template {
    /// Parse `template` against the groups `regex` defines.
    pub(crate) fn parse(template: &str, regex: &Regex) -> Self {
        let group_count = regex.captures_len();
        let has_name = |name: &str| regex.capture_names().flatten().any(|n| n == name);

        let mut parts = Vec::new();
        let mut literal = String::new();
        let mut rest = template;

        while let Some(dollar) = rest.find('$') {
            literal.push_str(&rest[..dollar]);
            let after = &rest[dollar + 1..];

            let (part, consumed) = match after.chars().next() {
                Some('$') => (Some(Part::Literal("$".to_owned())), 1),
                Some('&') => (Some(Part::Group(0)), 1),
                Some('`') => (Some(Part::Before), 1),
                Some('\'') => (Some(Part::After), 1),
                Some('<') => match after.find('>') {
                    Some(close) if has_name(&after[1..close]) => {
                        (Some(Part::Named(after[1..close].to_owned())), close + 1)
                    }
                    _ => (None, 0),
                },
                Some('{') => match after.find('}') {
                    Some(close) => braced(&after[1..close], group_count, &has_name)
                        .map_or((None, 0), |part| (Some(part), close + 1)),
                    None => (None, 0),
                },
                Some(c) if c.is_ascii_digit() => numbered(after, group_count),
                _ => (None, 0),
            };

            match part {
                Some(Part::Literal(text)) => literal.push_str(&text),
                Some(part) => {
                    if !literal.is_empty() {
                        parts.push(Part::Literal(std::mem::take(&mut literal)));
                    }
                    parts.push(part);
                }
                None => literal.push('$'),
            }
            rest = &after[consumed..];
        }

        literal.push_str(rest);
        if !literal.is_empty() {
            parts.push(Part::Literal(literal));
        }

        Self { parts }
    }

    /// Append the expansion for one match to `out`.
    pub(crate) fn expand_into(&self, caps: &Captures<'_>, subject: &str, out: &mut String) {
        let Some(whole) = caps.get(0) else {
            return;
        };
        for part in &self.parts {
            match part {
                Part::Literal(text) => out.push_str(text),
                Part::Group(index) => {
                    if let Some(group) = caps.get(*index) {
                        out.push_str(group.as_str());
                    }
                }
                Part::Named(name) => {
                    if let Some(group) = caps.name(name) {
                        out.push_str(group.as_str());
                    }
                }
                Part::Before => out.push_str(&subject[..whole.start()]),
                Part::After => out.push_str(&subject[whole.end()..]),
            }
        }
    }
}

/// `${...}` contents: a group number or a group name.
fn braced(inner: &str, group_count: usize, has_name: impl Fn(&str) -> bool) -> Option<Part> {
    if let Ok(index) = inner.parse::<usize>() {
        return (index < group_count).then_some(Part::Group(index));
    }
    has_name(inner).then(|| Part::Named(inner.to_owned()))
}

/// `$N` or `$NN` where `after` starts with a digit. Returns the part and bytes consumed.
fn numbered(after: &str, group_count: usize) -> (Option<Part>, usize) {
    let digits: Vec<usize> = after
        .chars()
        .take(2)
        .map_while(|c| c.to_digit(10))
        .map(|d| d as usize)
        .collect();

    if let [first, second] = digits[..] {
        let index = first * 10 + second;
        if index >= 1 && index < group_count {
            return (Some(Part::Group(index)), 2);
        }
    }

    match digits.first() {
        Some(&index) if index >= 1 && index < group_count => (Some(Part::Group(index)), 1),
        _ => (None, 0),
    }
}
