//! Section binders.
//!
//! One module per page section. Each binder is a pure mapping from a parsed
//! [`Document`](crate::parser::Document) to the patches for its fixed page
//! targets; fetching and error handling live in the orchestrator. A binder
//! never produces a patch for a field that is absent or empty — the static
//! markup stays as the fallback.

pub mod about;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod solutions;
pub mod stats;

use crate::page::Patch;
use crate::parser::Record;

/// The page sections, in binding order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    About,
    Stats,
    Solutions,
    Contact,
    Footer,
}

impl Section {
    /// Binding order: hero → about → stats → solutions → contact → footer.
    pub const ALL: [Section; 6] = [
        Section::Hero,
        Section::About,
        Section::Stats,
        Section::Solutions,
        Section::Contact,
        Section::Footer,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Stats => "stats",
            Section::Solutions => "solutions",
            Section::Contact => "contact",
            Section::Footer => "footer",
        }
    }

    /// The single document this section reads, if it reads exactly one.
    /// Solutions read an enumerated list from the manifest instead.
    pub fn document(&self) -> Option<&'static str> {
        match self {
            Section::Hero => Some(hero::DOCUMENT),
            Section::About => Some(about::DOCUMENT),
            Section::Stats => Some(stats::DOCUMENT),
            Section::Solutions => None,
            Section::Contact => Some(contact::DOCUMENT),
            Section::Footer => Some(footer::DOCUMENT),
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Push a text patch for a field, when the field has a value.
pub(crate) fn text_target(out: &mut Vec<Patch>, record: &Record, field: &str, selector: &str) {
    if let Some(value) = record.get_nonempty(field) {
        out.push(Patch::text(selector, value));
    }
}
