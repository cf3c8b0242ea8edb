//! Markdown to HTML conversion for a constrained Markdown subset.
//!
//! Rendering is an ordered sequence of global regex rewrites. Every stage
//! re-scans the whole accumulated string, so the order of the stages is what
//! keeps later rewrites from re-matching HTML inserted by earlier ones.
//!
//! # Architecture
//!
//! - [`Stage`]: one named `{pattern, rewrite}` pair
//! - [`Pipeline`]: the declared stage order and the loop that runs it
//!
//! Code fences and inline code spans are lifted out of the text into a
//! protected store as soon as they are recognised, so no later stage can read
//! their contents as formatting syntax. They are put back after the last stage.
//!
//! Rendering never fails: malformed syntax is left in place as literal text.
//! HTML already present in the input is passed through unescaped, so callers
//! rendering untrusted input must sanitize the result themselves.
//!
//! # Example
//!
//! ```
//! let html = textkit_markdown::render("## Hello\n\nThis is **bold**.");
//! assert_eq!(html, "<h2>Hello</h2>\n\n<p>This is <strong>bold</strong>.</p>");
//! ```

mod pipeline;
mod protect;
mod stages;

pub use pipeline::{Pipeline, Stage};
pub use protect::escape_html;

/// Render markdown to HTML with the standard stage order.
#[must_use]
pub fn render(markdown: &str) -> String {
    Pipeline::standard().run(markdown)
}
