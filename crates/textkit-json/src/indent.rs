//! Indentation choices for pretty-printing.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Unsupported indentation value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid indent '{0}' (expected 2, 4 or tab)")]
pub struct IndentError(String);

/// Pretty-print indentation.
///
/// Parses from `"2"`, `"4"` or `"tab"`; in configuration files the numbers
/// may also be given as integers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "IndentRepr")]
pub enum Indent {
    /// Two spaces.
    #[default]
    Two,
    /// Four spaces.
    Four,
    /// One tab character.
    Tab,
}

impl Indent {
    /// Bytes written per nesting level.
    #[must_use]
    pub fn as_bytes(self) -> &'static [u8] {
        match self {
            Self::Two => b"  ",
            Self::Four => b"    ",
            Self::Tab => b"\t",
        }
    }
}

impl FromStr for Indent {
    type Err = IndentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "2" => Ok(Self::Two),
            "4" => Ok(Self::Four),
            "tab" => Ok(Self::Tab),
            _ => Err(IndentError(s.to_owned())),
        }
    }
}

impl fmt::Display for Indent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Two => "2",
            Self::Four => "4",
            Self::Tab => "tab",
        })
    }
}

/// Raw configuration value: `2`, `4`, `"2"`, `"4"` or `"tab"`.
#[derive(Deserialize)]
#[serde(untagged)]
enum IndentRepr {
    Width(u64),
    Name(String),
}

impl TryFrom<IndentRepr> for Indent {
    type Error = IndentError;

    fn try_from(repr: IndentRepr) -> Result<Self, Self::Error> {
        match repr {
            IndentRepr::Width(width) => width.to_string().parse(),
            IndentRepr::Name(name) => name.parse(),
        }
    }
}
