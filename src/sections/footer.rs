//! Footer binder.

use crate::page::Patch;
use crate::parser::Document;

use super::text_target;

pub const DOCUMENT: &str = "footer.md";

pub const FIELDS: &[&str] = &["company", "tagline", "copyright", "links"];

pub const REQUIRED: &[&str] = &["copyright"];

pub fn patches(doc: &Document) -> Vec<Patch> {
    let record = &doc.record;
    let mut out = Vec::new();

    text_target(&mut out, record, "company", "footer .footer-brand");
    text_target(&mut out, record, "tagline", "footer .footer-tagline");
    text_target(&mut out, record, "copyright", "footer .copyright");

    if let Some(links) = record.get_list("links") {
        out.push(Patch::replace_children(
            "footer .footer-links",
            render_links(links),
            None,
        ));
    }

    out
}

/// Render the quick-links list. Each label links to the section anchor
/// derived from it.
fn render_links(labels: &[String]) -> String {
    let mut html = String::new();
    for label in labels {
        html.push_str("<li><a href=\"#");
        html.push_str(&anchor(label));
        html.push_str("\">");
        html.push_str(label);
        html.push_str("</a></li>");
    }
    html
}

fn anchor(label: &str) -> String {
    label.trim().to_lowercase().replace(' ', "-")
}
