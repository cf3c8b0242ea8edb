//! Ordered rewrite pipeline.
//!
//! A [`Pipeline`] is a small interpreter over a list of [`Stage`]s. Each stage
//! applies one regex globally to the whole document, and stages run strictly
//! in declaration order.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::protect::Protected;
use crate::stages;

static STANDARD: LazyLock<Pipeline> = LazyLock::new(|| Pipeline::new(stages::standard()));

/// How a stage rewrites each match of its pattern.
pub(crate) enum Rewrite {
    /// Regex replacement template (`${1}` syntax).
    Template(&'static str),
    /// Callback with access to the protected fragment store.
    With(fn(&Captures<'_>, &mut Protected) -> String),
}

/// A named global rewrite: every match of the pattern is replaced.
pub struct Stage {
    name: &'static str,
    pattern: Regex,
    rewrite: Rewrite,
}

impl Stage {
    /// Build a stage from a built-in pattern.
    ///
    /// Panics if `pattern` is not a valid regex; stage patterns are constants.
    pub(crate) fn new(name: &'static str, pattern: &str, rewrite: Rewrite) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).unwrap(),
            rewrite,
        }
    }

    /// Stage name, unique within a pipeline.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    fn apply(&self, input: &str, protected: &mut Protected) -> String {
        match &self.rewrite {
            Rewrite::Template(template) => self.pattern.replace_all(input, *template).into_owned(),
            Rewrite::With(rewrite) => self
                .pattern
                .replace_all(input, |caps: &Captures<'_>| rewrite(caps, protected))
                .into_owned(),
        }
    }
}

/// Ordered list of rewrite stages.
pub struct Pipeline {
    stages: Vec<Stage>,
}

impl Pipeline {
    fn new(stages: Vec<Stage>) -> Self {
        Self { stages }
    }

    /// The standard markdown pipeline.
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Stage names in execution order.
    pub fn stage_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.stages.iter().map(Stage::name)
    }

    /// Run every stage and return the finished HTML.
    #[must_use]
    pub fn run(&self, markdown: &str) -> String {
        self.run_stages(markdown, self.stages.len())
    }

    /// Run stages up to and including `name`, then restore protected fragments.
    ///
    /// Returns `None` if no stage has that name.
    #[must_use]
    pub fn run_until(&self, name: &str, markdown: &str) -> Option<String> {
        let position = self.stages.iter().position(|stage| stage.name == name)?;
        Some(self.run_stages(markdown, position + 1))
    }

    fn run_stages(&self, markdown: &str, count: usize) -> String {
        let mut protected = Protected::default();
        let mut text = normalize(markdown);

        for stage in &self.stages[..count] {
            text = stage.apply(&text, &mut protected);
        }

        tracing::debug!(
            input_len = markdown.len(),
            stages = count,
            protected = protected.len(),
            "Rendered markdown"
        );

        protected.restore(text.trim())
    }
}

/// Normalize line endings and drop characters reserved for protection tokens.
fn normalize(markdown: &str) -> String {
    markdown
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace(crate::protect::SENTINEL, "")
}
