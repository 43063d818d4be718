//! Minimal markdown renderer.
//!
//! Only the subset used by content documents is handled: bold, italic,
//! paragraphs and bullet lists. Input is trusted first-party content, so no
//! escaping is performed — raw HTML in a document passes through unchanged.

use std::sync::LazyLock;

use regex::Regex;

// Bold must run before italic: the double-asterisk spans have to be consumed
// before the single-asterisk rule sees the string, otherwise `**` markers get
// eaten as empty italics.
static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
static ITALIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.*?)\*").unwrap());

/// Render body text to an HTML fragment.
///
/// Inline substitutions run over the whole string first, then a line pass
/// groups consecutive `- ` lines into one `<ul>` and wraps every other
/// non-blank line in its own `<p>`. Blank lines are dropped.
pub fn render_markdown(body: &str) -> String {
    let html = BOLD.replace_all(body, "<strong>$1</strong>");
    let html = ITALIC.replace_all(&html, "<em>$1</em>");

    let mut out = String::with_capacity(html.len());
    let mut in_list = false;

    for line in html.lines() {
        let trimmed = line.trim();
        if let Some(item) = trimmed.strip_prefix("- ") {
            if !in_list {
                out.push_str("<ul>");
                in_list = true;
            }
            out.push_str("<li>");
            out.push_str(item);
            out.push_str("</li>");
        } else {
            if in_list {
                out.push_str("</ul>");
                in_list = false;
            }
            if !trimmed.is_empty() {
                out.push_str("<p>");
                out.push_str(trimmed);
                out.push_str("</p>");
            }
        }
    }

    if in_list {
        out.push_str("</ul>");
    }

    out
}
