//! Contact block binder.

use crate::page::Patch;
use crate::parser::Document;
use crate::render::render_markdown;

use super::text_target;

pub const DOCUMENT: &str = "contact.md";

pub const FIELDS: &[&str] = &["title", "email", "phone", "address"];

pub const REQUIRED: &[&str] = &["title"];

pub fn patches(doc: &Document) -> Vec<Patch> {
    let record = &doc.record;
    let mut out = Vec::new();

    text_target(&mut out, record, "title", "#contact .section-title");
    text_target(&mut out, record, "email", "#contact .contact-email");
    text_target(&mut out, record, "phone", "#contact .contact-phone");
    text_target(&mut out, record, "address", "#contact .contact-address");

    if !doc.body.trim().is_empty() {
        out.push(Patch::html(
            "#contact .contact-text",
            render_markdown(&doc.body),
        ));
    }

    out
}
