//! CLI command implementations.

pub(crate) mod json;
pub(crate) mod markdown;
pub(crate) mod readability;
pub(crate) mod regex;

pub(crate) use json::JsonCommand;
pub(crate) use markdown::MarkdownArgs;
pub(crate) use readability::ReadabilityArgs;
pub(crate) use regex::RegexArgs;
