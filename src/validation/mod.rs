//! Content checks for pagefill sites.
//!
//! Fetches every configured document and runs a suite of checks over the
//! parsed set, reporting what the hydration pipeline would silently skip.
//! Used by `pagefill check`.

mod checks;
mod warning;

pub use warning::{CheckResult, Diagnostic, Severity};

use crate::fetch::ContentSource;
use crate::manifest::Manifest;
use crate::parser::{parse_document, Document};
use crate::sections::Section;

/// Everything the configured site reads, fetched and parsed.
#[derive(Debug, Default)]
pub struct ContentSet {
    pub hero: Option<Document>,
    pub about: Option<Document>,
    pub stats: Option<Document>,
    pub contact: Option<Document>,
    pub footer: Option<Document>,
    /// Solution documents that loaded, by name.
    pub solutions: Vec<(String, Document)>,
    /// Documents that failed to fetch, by name.
    pub missing: Vec<String>,
    /// Local `.md` files no section reads (local sources only).
    pub unreferenced: Vec<String>,
}

impl ContentSet {
    /// The single-document sections with their parsed documents.
    pub fn single_sections(&self) -> [(Section, Option<&Document>); 5] {
        [
            (Section::Hero, self.hero.as_ref()),
            (Section::About, self.about.as_ref()),
            (Section::Stats, self.stats.as_ref()),
            (Section::Contact, self.contact.as_ref()),
            (Section::Footer, self.footer.as_ref()),
        ]
    }
}

/// Fetch and parse every document the manifest references.
pub async fn load_content_set(source: &ContentSource, manifest: &Manifest) -> ContentSet {
    let mut set = ContentSet::default();

    for section in Section::ALL {
        let Some(name) = section.document() else {
            continue;
        };
        match source.fetch(name).await {
            Ok(text) => {
                let doc = Some(parse_document(&text));
                match section {
                    Section::Hero => set.hero = doc,
                    Section::About => set.about = doc,
                    Section::Stats => set.stats = doc,
                    Section::Contact => set.contact = doc,
                    Section::Footer => set.footer = doc,
                    Section::Solutions => unreachable!(),
                }
            }
            Err(_) => set.missing.push(name.to_string()),
        }
    }

    for name in &manifest.solutions {
        match source.fetch(name).await {
            Ok(text) => set.solutions.push((name.clone(), parse_document(&text))),
            Err(_) => set.missing.push(name.clone()),
        }
    }

    let referenced: Vec<&str> = Section::ALL
        .iter()
        .filter_map(|s| s.document())
        .chain(manifest.solutions.iter().map(String::as_str))
        .collect();
    set.unreferenced = source
        .list_documents()
        .into_iter()
        .filter(|name| !referenced.contains(&name.as_str()))
        .collect();

    set
}

/// Run all checks against a loaded content set.
pub fn check_content(set: &ContentSet) -> CheckResult {
    let mut result = CheckResult::new();

    result.merge(checks::check_missing_documents(set));
    result.merge(checks::check_front_matter(set));
    result.merge(checks::check_required_fields(set));
    result.merge(checks::check_empty_fields(set));
    result.merge(checks::check_unknown_fields(set));
    result.merge(checks::check_stat_pairs(set));
    result.merge(checks::check_solutions(set));
    result.merge(checks::check_unreferenced_documents(set));

    result
}

/// Print diagnostics to stderr.
pub fn print_diagnostics(result: &CheckResult) {
    for d in result.iter() {
        eprintln!("  {}[{}]: {}", d.severity, d.code, d.message);
        if let Some(help) = &d.help {
            eprintln!("    help: {}", help);
        }
    }

    let errors = result.error_count();
    let warnings = result.warning_count();

    if errors > 0 {
        eprintln!("Check failed: {} error(s), {} warning(s)", errors, warnings);
    } else if warnings > 0 {
        eprintln!("Check passed ({} warning(s))", warnings);
    } else {
        eprintln!("Check passed.");
    }
}
