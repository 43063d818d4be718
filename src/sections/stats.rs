//! Statistics strip binder.
//!
//! The stats container holds four stat items; the document addresses them
//! positionally with `stat1_number`/`stat1_label` through `stat4_*`.

use crate::page::Patch;
use crate::parser::Document;

pub const DOCUMENT: &str = "stats.md";

/// Number of stat items in the page markup.
pub const STAT_COUNT: usize = 4;

pub fn fields() -> Vec<String> {
    let mut fields = Vec::with_capacity(STAT_COUNT * 2);
    for i in 1..=STAT_COUNT {
        fields.push(format!("stat{}_number", i));
        fields.push(format!("stat{}_label", i));
    }
    fields
}

pub fn patches(doc: &Document) -> Vec<Patch> {
    let record = &doc.record;
    let mut out = Vec::new();

    for i in 1..=STAT_COUNT {
        if let Some(number) = record.get_nonempty(&format!("stat{}_number", i)) {
            out.push(Patch::text(".stats .stat-number", number).nth(i));
        }
        if let Some(label) = record.get_nonempty(&format!("stat{}_label", i)) {
            out.push(Patch::text(".stats .stat-label", label).nth(i));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_document;
    use pretty_assertions::assert_eq;

    const PAGE: &str = "<div class=\"stats\">\
        <div class=\"stat-item\"><span class=\"stat-number\">0</span><span class=\"stat-label\">a</span></div>\
        <div class=\"stat-item\"><span class=\"stat-number\">0</span><span class=\"stat-label\">b</span></div>\
        <div class=\"stat-item\"><span class=\"stat-number\">0</span><span class=\"stat-label\">c</span></div>\
        <div class=\"stat-item\"><span class=\"stat-number\">0</span><span class=\"stat-label\">d</span></div>\
        </div>";

    #[test]
    fn test_all_four_stats_bind_in_position() {
        let doc = parse_document(
            "---\nstat1_number: 25+\nstat1_label: Years\nstat2_number: 40\nstat2_label: Countries\nstat3_number: 1200\nstat3_label: Shipments\nstat4_number: 98%\nstat4_label: On time\n---\n",
        );

        let outcome = crate::page::Page::new(PAGE.as_bytes().to_vec())
            .apply(&patches(&doc))
            .unwrap();
        let html = String::from_utf8(outcome.html).unwrap();

        assert_eq!(
            html,
            "<div class=\"stats\">\
             <div class=\"stat-item\"><span class=\"stat-number\">25+</span><span class=\"stat-label\">Years</span></div>\
             <div class=\"stat-item\"><span class=\"stat-number\">40</span><span class=\"stat-label\">Countries</span></div>\
             <div class=\"stat-item\"><span class=\"stat-number\">1200</span><span class=\"stat-label\">Shipments</span></div>\
             <div class=\"stat-item\"><span class=\"stat-number\">98%</span><span class=\"stat-label\">On time</span></div>\
             </div>"
        );
    }

    #[test]
    fn test_partial_stats_leave_other_items_static() {
        let doc = parse_document("---\nstat3_number: 77\n---\n");

        let outcome = crate::page::Page::new(PAGE.as_bytes().to_vec())
            .apply(&patches(&doc))
            .unwrap();
        let html = String::from_utf8(outcome.html).unwrap();

        assert_eq!(html.matches("<span class=\"stat-number\">0</span>").count(), 3);
        assert!(html.contains("<span class=\"stat-number\">77</span>"));
        // Labels untouched.
        assert!(html.contains(">a</span>"));
    }

    #[test]
    fn test_no_fields_no_patches() {
        let doc = parse_document("---\nunrelated: x\n---\n");

        assert!(patches(&doc).is_empty());
    }

    #[test]
    fn test_fields_enumeration() {
        let fields = fields();

        assert_eq!(fields.len(), 8);
        assert_eq!(fields[0], "stat1_number");
        assert_eq!(fields[7], "stat4_label");
    }
}
