//! About section binder.

use crate::page::Patch;
use crate::parser::Document;
use crate::render::render_markdown;

use super::text_target;

pub const DOCUMENT: &str = "about.md";

pub const FIELDS: &[&str] = &["title", "subtitle"];

pub const REQUIRED: &[&str] = &["title"];

pub fn patches(doc: &Document) -> Vec<Patch> {
    let record = &doc.record;
    let mut out = Vec::new();

    text_target(&mut out, record, "title", "#about .section-title");
    text_target(&mut out, record, "subtitle", "#about .section-subtitle");

    // The body carries the about prose.
    if !doc.body.trim().is_empty() {
        out.push(Patch::html("#about .about-text", render_markdown(&doc.body)));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_document;

    #[test]
    fn test_full_about_document() {
        let doc = parse_document(
            "---\ntitle: About us\nsubtitle: Since 1998\n---\nWe connect *markets*.\n\n- sourcing\n- logistics",
        );

        let patches = patches(&doc);

        assert_eq!(patches.len(), 3);
        assert_eq!(patches[0].selector(), "#about .section-title");
        assert_eq!(patches[1].selector(), "#about .section-subtitle");
        assert_eq!(patches[2].selector(), "#about .about-text");
    }

    #[test]
    fn test_empty_body_is_skipped() {
        let doc = parse_document("---\ntitle: About us\n---\n   \n");

        let patches = patches(&doc);

        assert_eq!(patches.len(), 1);
    }

    #[test]
    fn test_body_renders_markdown() {
        let doc = parse_document("---\ntitle: T\n---\nOne **bold** claim");
        let page = crate::page::Page::new(
            b"<section id=\"about\"><h2 class=\"section-title\">x</h2><div class=\"about-text\">y</div></section>"
                .to_vec(),
        );

        let outcome = page.apply(&patches(&doc)).unwrap();
        let html = String::from_utf8(outcome.html).unwrap();

        assert!(html.contains("<p>One <strong>bold</strong> claim</p>"));
        assert!(html.contains(">T</h2>"));
    }
}
