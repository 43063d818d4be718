//! Hero banner binder.

use crate::page::Patch;
use crate::parser::Document;
use crate::render::render_markdown;

use super::text_target;

pub const DOCUMENT: &str = "hero.md";

/// Fields the hero document is expected to carry.
pub const FIELDS: &[&str] = &["title", "subtitle", "welcome_text", "button_text"];

/// Fields without which the hero section stays fully static.
pub const REQUIRED: &[&str] = &["title"];

// The button keeps its arrow icon; only the label text is replaced.
const ARROW_ICON: &str = r#" <i class="fas fa-arrow-right ms-2"></i>"#;

pub fn patches(doc: &Document) -> Vec<Patch> {
    let record = &doc.record;
    let mut out = Vec::new();

    text_target(&mut out, record, "title", ".hero h1");
    text_target(&mut out, record, "subtitle", ".hero .tagline");

    if let Some(welcome) = record.get_nonempty("welcome_text") {
        out.push(Patch::html(".hero-text", render_markdown(welcome)));
    }

    if let Some(label) = record.get_nonempty("button_text") {
        out.push(Patch::html(
            ".hero .btn-corporate",
            format!("{}{}", label, ARROW_ICON),
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_document;

    #[test]
    fn test_full_hero_document() {
        let doc = parse_document(
            "---\ntitle: Global trade\nsubtitle: Done right\nwelcome_text: We are **here**\nbutton_text: Contact us\n---\n",
        );

        let patches = patches(&doc);

        assert_eq!(patches.len(), 4);
        assert_eq!(patches[0].selector(), ".hero h1");
        assert_eq!(patches[1].selector(), ".hero .tagline");
        assert_eq!(patches[2].selector(), ".hero-text");
        assert_eq!(patches[3].selector(), ".hero .btn-corporate");
    }

    #[test]
    fn test_missing_fields_are_skipped() {
        let doc = parse_document("---\ntitle: Only a title\n---\n");

        let patches = patches(&doc);

        assert_eq!(patches.len(), 1);
        assert_eq!(patches[0].selector(), ".hero h1");
    }

    #[test]
    fn test_empty_fields_are_skipped() {
        let doc = parse_document("---\ntitle:\nsubtitle: Real\n---\n");

        let patches = patches(&doc);

        assert_eq!(patches.len(), 1);
        assert_eq!(patches[0].selector(), ".hero .tagline");
    }

    #[test]
    fn test_button_keeps_icon_markup() {
        let doc = parse_document("---\nbutton_text: Get a quote\n---\n");
        let page = crate::page::Page::new(
            b"<section class=\"hero\"><a class=\"btn-corporate\">old</a></section>".to_vec(),
        );

        let outcome = page.apply(&patches(&doc)).unwrap();
        let html = String::from_utf8(outcome.html).unwrap();

        assert!(html.contains("Get a quote <i class=\"fas fa-arrow-right ms-2\"></i>"));
    }

    #[test]
    fn test_welcome_text_is_rendered() {
        let doc = parse_document("---\nwelcome_text: We are **strong**\n---\n");
        let page =
            crate::page::Page::new(b"<div class=\"hero-text\">static</div>".to_vec());

        let outcome = page.apply(&patches(&doc)).unwrap();
        let html = String::from_utf8(outcome.html).unwrap();

        assert!(html.contains("<p>We are <strong>strong</strong></p>"));
    }

    #[test]
    fn test_document_without_front_matter_produces_nothing() {
        let doc = parse_document("just prose, no header");

        assert!(patches(&doc).is_empty());
    }
}
