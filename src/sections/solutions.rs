//! Solutions list binder.
//!
//! Unlike the other sections, solutions are assembled from an enumerated
//! list of documents. Documents that fail to load or lack required fields
//! are discarded; survivors are sorted by their numeric `order` field and
//! rendered as cards that alternate layout by position parity. The
//! container is rewritten in one shot, preserving its title node — and only
//! when at least one solution survived, so a broken content set cannot wipe
//! the static cards.

use crate::page::Patch;
use crate::parser::Document;
use crate::render::render_markdown;

/// Container selector and the node preserved inside it.
pub const CONTAINER: &str = ".solutions-container";
pub const KEEP_TITLE: &str = ".section-title";

/// Sort key for documents with a missing or non-numeric `order`; large so
/// unordered items sort last.
pub const ORDER_LAST: i64 = 9999;

pub const FIELDS: &[&str] = &["title", "description", "icon", "image", "order", "features"];

pub const REQUIRED: &[&str] = &["title", "icon"];

/// One solution card ready for rendering.
#[derive(Debug, Clone)]
pub struct Solution {
    /// Source document name, for diagnostics.
    pub name: String,
    pub title: String,
    pub icon: String,
    pub image: Option<String>,
    pub features: Vec<String>,
    /// Rendered HTML content (body, falling back to the `description`
    /// field).
    pub content: String,
    pub order: i64,
}

impl Solution {
    /// Build a solution from a parsed document.
    ///
    /// Returns `None` when a required field is missing; such documents are
    /// discarded from the list entirely.
    pub fn from_document(name: &str, doc: &Document) -> Option<Self> {
        let title = doc.record.get_nonempty("title")?.to_string();
        let icon = doc.record.get_nonempty("icon")?.to_string();

        let content = if doc.body.trim().is_empty() {
            doc.record
                .get_nonempty("description")
                .map(render_markdown)
                .unwrap_or_default()
        } else {
            render_markdown(&doc.body)
        };

        Some(Solution {
            name: name.to_string(),
            title,
            icon,
            image: doc.record.get_nonempty("image").map(str::to_string),
            features: doc
                .record
                .get_list("features")
                .map(<[String]>::to_vec)
                .unwrap_or_default(),
            content,
            order: parse_order(doc.record.get("order")),
        })
    }
}

/// Parse the `order` field; missing or non-numeric values sort last.
pub fn parse_order(raw: Option<&str>) -> i64 {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(ORDER_LAST)
}

/// Sort ascending by order. The sort is stable, so ties and unordered
/// documents keep their enumeration order.
pub fn sort_solutions(solutions: &mut [Solution]) {
    solutions.sort_by_key(|s| s.order);
}

/// Render all cards into one container fragment.
pub fn render_cards(solutions: &[Solution]) -> String {
    let mut html = String::new();
    for (index, solution) in solutions.iter().enumerate() {
        html.push_str(&render_card(solution, index));
    }
    html
}

/// Render one card. Odd positions flip the visual layout.
fn render_card(solution: &Solution, index: usize) -> String {
    let row_class = if index % 2 == 0 {
        "solution-row"
    } else {
        "solution-row reverse"
    };

    let mut html = format!(
        "<div class=\"{}\"><div class=\"solution-icon\"><i class=\"{}\"></i></div>",
        row_class, solution.icon
    );

    html.push_str("<div class=\"solution-body\"><h3>");
    html.push_str(&solution.title);
    html.push_str("</h3>");
    html.push_str(&solution.content);
    if !solution.features.is_empty() {
        html.push_str("<ul class=\"solution-features\">");
        for feature in &solution.features {
            html.push_str("<li>");
            html.push_str(feature);
            html.push_str("</li>");
        }
        html.push_str("</ul>");
    }
    html.push_str("</div>");

    if let Some(image) = &solution.image {
        html.push_str(&format!(
            "<div class=\"solution-image\"><img src=\"{}\" alt=\"{}\"/></div>",
            image, solution.title
        ));
    }

    html.push_str("</div>");
    html
}

/// Build the container patch for the surviving solutions.
///
/// An empty list yields no patch at all: the pre-existing static cards are
/// the fallback when nothing loaded.
pub fn patches(mut solutions: Vec<Solution>) -> Vec<Patch> {
    if solutions.is_empty() {
        return Vec::new();
    }
    sort_solutions(&mut solutions);
    vec![Patch::replace_children(
        CONTAINER,
        render_cards(&solutions),
        Some(KEEP_TITLE),
    )]
}
