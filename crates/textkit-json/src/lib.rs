//! JSON pretty-printing, minification and validation.
//!
//! Input is parsed with `serde_json` and re-serialized. Object key order is
//! kept as written, and numeric literals are carried through as their
//! original text, so integers beyond 2^53 and long decimals survive a
//! format/minify round trip unchanged.
//!
//! Invalid input yields a [`JsonError`] carrying the parser's message; no
//! partial output is ever produced.
//!
//! # Example
//!
//! ```
//! use textkit_json::{Indent, format, minify};
//!
//! let pretty = format(r#"{"b":1,"a":[true,null]}"#, Indent::Two).unwrap();
//! assert_eq!(pretty, "{\n  \"b\": 1,\n  \"a\": [\n    true,\n    null\n  ]\n}");
//! assert_eq!(minify(&pretty).unwrap(), r#"{"b":1,"a":[true,null]}"#);
//! ```

mod indent;

pub use indent::{Indent, IndentError};

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::PrettyFormatter;

/// JSON processing error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JsonError {
    /// Input is not valid JSON. The message is the parser's, verbatim.
    #[error("{message}")]
    Parse {
        /// Parser message, e.g. "expected value at line 1 column 1".
        message: String,
        /// 1-based line of the error.
        line: usize,
        /// 1-based column of the error.
        column: usize,
    },
    /// Re-serialization failed.
    #[error("Serialization failed: {0}")]
    Serialize(String),
}

impl From<serde_json::Error> for JsonError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse {
            message: e.to_string(),
            line: e.line(),
            column: e.column(),
        }
    }
}

fn parse(input: &str) -> Result<Value, JsonError> {
    let value = serde_json::from_str(input)?;
    Ok(value)
}

/// Pretty-print `input` with the given indentation.
pub fn format(input: &str, indent: Indent) -> Result<String, JsonError> {
    let value = parse(input)?;

    let mut buf = Vec::with_capacity(input.len() * 2);
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
    value
        .serialize(&mut serializer)
        .map_err(|e| JsonError::Serialize(e.to_string()))?;

    tracing::debug!(input_len = input.len(), output_len = buf.len(), %indent, "Formatted JSON");

    String::from_utf8(buf).map_err(|e| JsonError::Serialize(e.to_string()))
}

/// Serialize `input` without any whitespace.
pub fn minify(input: &str) -> Result<String, JsonError> {
    let value = parse(input)?;
    let minified = serde_json::to_string(&value).map_err(|e| JsonError::Serialize(e.to_string()))?;

    tracing::debug!(input_len = input.len(), output_len = minified.len(), "Minified JSON");

    Ok(minified)
}

/// Check that `input` is a single valid JSON document.
pub fn validate(input: &str) -> Result<(), JsonError> {
    parse(input).map(|_| ())
}
