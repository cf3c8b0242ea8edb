//! Stage definitions for the standard markdown pipeline.
//!
//! Order matters:
//! - code is protected before anything can read `*` or `#` inside it
//! - headings run from `######` down to `#`
//! - `***` before `**` before `*`
//! - images before links, since both share the `[..](..)` grammar
//! - `list_item` and `list_group` run back to back; nothing that touches
//!   blank lines may be placed between them
//! - paragraphs wrap every remaining line, and `unwrap_blocks` removes the
//!   wrapping again where the line was a block element

use regex::Captures;

use crate::pipeline::{Rewrite, Stage};
use crate::protect::{Protected, escape_html};

/// Emphasis content: no leading or trailing whitespace, single line, ending at
/// the nearest closing delimiter.
macro_rules! delimited {
    ($open:literal, $close:literal, $edge:literal) => {
        concat!(
            $open,
            "([^\\s",
            $edge,
            "](?:[^\\n]*?[^\\s",
            $edge,
            "])??)",
            $close
        )
    };
}

/// Build the standard stage list.
pub(crate) fn standard() -> Vec<Stage> {
    vec![
        Stage::new(
            "fenced_code",
            r"(?ms)^```[ \t]*([^\s`]*)[^\n]*\n(.*?)^```[ \t]*$",
            Rewrite::With(fenced_code),
        ),
        Stage::new("inline_code", r"`([^`\n]+)`", Rewrite::With(inline_code)),
        Stage::new(
            "heading_6",
            r"(?m)^#{6}[ \t]+(\S.*?)[ \t]*$",
            Rewrite::Template("<h6>${1}</h6>"),
        ),
        Stage::new(
            "heading_5",
            r"(?m)^#{5}[ \t]+(\S.*?)[ \t]*$",
            Rewrite::Template("<h5>${1}</h5>"),
        ),
        Stage::new(
            "heading_4",
            r"(?m)^#{4}[ \t]+(\S.*?)[ \t]*$",
            Rewrite::Template("<h4>${1}</h4>"),
        ),
        Stage::new(
            "heading_3",
            r"(?m)^#{3}[ \t]+(\S.*?)[ \t]*$",
            Rewrite::Template("<h3>${1}</h3>"),
        ),
        Stage::new(
            "heading_2",
            r"(?m)^#{2}[ \t]+(\S.*?)[ \t]*$",
            Rewrite::Template("<h2>${1}</h2>"),
        ),
        Stage::new(
            "heading_1",
            r"(?m)^#[ \t]+(\S.*?)[ \t]*$",
            Rewrite::Template("<h1>${1}</h1>"),
        ),
        Stage::new(
            "bold_italic",
            delimited!(r"\*\*\*", r"\*\*\*", "*"),
            Rewrite::Template("<strong><em>${1}</em></strong>"),
        ),
        Stage::new(
            "bold",
            delimited!(r"\*\*", r"\*\*", "*"),
            Rewrite::Template("<strong>${1}</strong>"),
        ),
        Stage::new(
            "italic",
            r"\*([^\s*](?:[^*\n]*?[^\s*])?)\*",
            Rewrite::Template("<em>${1}</em>"),
        ),
        Stage::new(
            "strikethrough",
            delimited!("~~", "~~", "~"),
            Rewrite::Template("<del>${1}</del>"),
        ),
        Stage::new(
            "blockquote",
            r"(?m)^>[ \t]?(.*?)[ \t]*$",
            Rewrite::Template("<blockquote>${1}</blockquote>"),
        ),
        Stage::new(
            "merge_blockquotes",
            r"</blockquote>\n<blockquote>",
            Rewrite::Template("<br>"),
        ),
        Stage::new(
            "horizontal_rule",
            r"(?m)^(?:-{3,}|\*{3,})[ \t]*$",
            Rewrite::Template("<hr>"),
        ),
        Stage::new(
            "image",
            r#"!\[([^\]]*)\]\(([^)\s]+)(?:[ \t]+"([^"]*)")?\)"#,
            Rewrite::With(image),
        ),
        Stage::new(
            "link",
            r#"\[([^\]]+)\]\(([^)\s]+)(?:[ \t]+"([^"]*)")?\)"#,
            Rewrite::With(link),
        ),
        Stage::new(
            "list_item",
            r"(?m)^[ \t]*[-*+][ \t]+(.*?)[ \t]*$",
            Rewrite::Template("<li>${1}</li>"),
        ),
        Stage::new(
            "list_group",
            r"(?m)^<li>.*</li>(?:\n<li>.*</li>)*$",
            Rewrite::Template("<ul>\n${0}\n</ul>"),
        ),
        Stage::new(
            "paragraph",
            r"(?m)^[ \t]*(\S.*?)[ \t]*$",
            Rewrite::Template("<p>${1}</p>"),
        ),
        Stage::new(
            "unwrap_blocks",
            r"(?m)^<p>(</?(?:h[1-6]|ul|ol|li|blockquote|hr|pre|p|div|table)\b.*)</p>$",
            Rewrite::Template("${1}"),
        ),
        Stage::new(
            "collapse_blank_lines",
            r"\n(?:[ \t]*\n){2,}",
            Rewrite::Template("\n\n"),
        ),
    ]
}

fn fenced_code(caps: &Captures<'_>, protected: &mut Protected) -> String {
    let lang = caps.get(1).map_or("", |m| m.as_str());
    let body = &caps[2];
    let body = escape_html(body.strip_suffix('\n').unwrap_or(body));

    let html = if lang.is_empty() {
        format!("<code>{body}</code>")
    } else {
        format!(r#"<code class="language-{}">{body}</code>"#, escape_html(lang))
    };
    format!("<pre>{}</pre>", protected.stash(html))
}

fn inline_code(caps: &Captures<'_>, protected: &mut Protected) -> String {
    format!("<code>{}</code>", protected.stash(escape_html(&caps[1])))
}

fn title_attr(caps: &Captures<'_>) -> String {
    caps.get(3)
        .map(|title| format!(r#" title="{}""#, escape_html(title.as_str())))
        .unwrap_or_default()
}

fn image(caps: &Captures<'_>, _protected: &mut Protected) -> String {
    format!(
        r#"<img src="{}" alt="{}"{}>"#,
        escape_html(&caps[2]),
        escape_html(&caps[1]),
        title_attr(caps)
    )
}

fn link(caps: &Captures<'_>, _protected: &mut Protected) -> String {
    format!(
        r#"<a href="{}"{}>{}</a>"#,
        escape_html(&caps[2]),
        title_attr(caps),
        &caps[1]
    )
}
