//! The hydration pipeline.
//!
//! Fetch every section's document, turn each into patches, apply all
//! patches to the host page in one pass and hand back the rewritten
//! markup plus a per-section report. Sections are awaited one after the
//! other in a fixed order; a failed fetch skips only its own section and
//! parsing cannot fail, so nothing here aborts the run short of the page
//! itself being unreadable or malformed.

use serde::Serialize;

use crate::error::Result;
use crate::fetch::ContentSource;
use crate::manifest::Manifest;
use crate::output::{plural, Printer};
use crate::page::{Page, Patch};
use crate::parser::parse_document;
use crate::sections::{self, solutions::Solution, Section};

/// Outcome of one section's binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionStatus {
    /// At least one target was rewritten.
    Updated,
    /// The document loaded but produced no patches (or every solution was
    /// discarded); the static markup stands.
    NoContent,
    /// The fetch failed; the static markup stands.
    FetchFailed,
}

/// Per-section hydration report entry.
#[derive(Debug, Clone, Serialize)]
pub struct SectionReport {
    pub section: String,
    pub documents: Vec<String>,
    pub status: SectionStatus,
    /// Number of page targets rewritten.
    pub applied: usize,
    /// Selectors that matched nothing in the page.
    pub missing_targets: Vec<String>,
}

/// Full hydration report, serialized for `--report`.
#[derive(Debug, Clone, Serialize)]
pub struct HydrateReport {
    pub sections: Vec<SectionReport>,
}

impl HydrateReport {
    pub fn applied_total(&self) -> usize {
        self.sections.iter().map(|s| s.applied).sum()
    }
}

/// Hydrate the manifest's page from its content source.
///
/// Returns the rewritten page bytes and the report. Writing the output file
/// is the caller's business.
pub async fn hydrate(manifest: &Manifest, printer: &Printer) -> Result<(Vec<u8>, HydrateReport)> {
    let page = Page::from_file(&manifest.page)?;
    let source = ContentSource::from_location(&manifest.content);

    let mut patches: Vec<Patch> = Vec::new();
    // (section, documents, fetch_ok, patch index range)
    let mut collected: Vec<(Section, Vec<String>, bool, std::ops::Range<usize>)> = Vec::new();

    for section in Section::ALL {
        let start = patches.len();
        match section {
            Section::Solutions => {
                let (documents, section_patches) =
                    collect_solutions(&source, &manifest.solutions, printer).await;
                patches.extend(section_patches);
                collected.push((section, documents, true, start..patches.len()));
            }
            _ => {
                let document = section.document().expect("single-document section");
                match collect_single(&source, section, document, printer).await {
                    Ok(section_patches) => {
                        patches.extend(section_patches);
                        collected.push((
                            section,
                            vec![document.to_string()],
                            true,
                            start..patches.len(),
                        ));
                    }
                    Err(message) => {
                        printer.warning("Skipping", &format!("{} ({})", section, message));
                        collected.push((section, vec![document.to_string()], false, start..start));
                    }
                }
            }
        }
    }

    let outcome = page.apply(&patches)?;

    let mut report = HydrateReport {
        sections: Vec::with_capacity(collected.len()),
    };
    for (section, documents, fetched, range) in collected {
        let applied = outcome.applied[range.clone()]
            .iter()
            .filter(|a| **a)
            .count();
        let missing_targets: Vec<String> = range
            .clone()
            .filter(|i| !outcome.applied[*i])
            .map(|i| patches[i].selector().to_string())
            .collect();

        for selector in &missing_targets {
            printer.warning(
                "Missing",
                &format!("{} target `{}` not found in page", section, selector),
            );
        }

        let status = if !fetched {
            SectionStatus::FetchFailed
        } else if applied > 0 {
            SectionStatus::Updated
        } else {
            SectionStatus::NoContent
        };

        if status == SectionStatus::Updated {
            printer.status(
                "Hydrated",
                &format!("{} ({})", section, plural(applied, "target", "targets")),
            );
        }

        report.sections.push(SectionReport {
            section: section.name().to_string(),
            documents,
            status,
            applied,
            missing_targets,
        });
    }

    Ok((outcome.html, report))
}

/// Fetch and bind one single-document section. The error case carries a
/// display message only; the caller downgrades it to a warning.
async fn collect_single(
    source: &ContentSource,
    section: Section,
    document: &str,
    printer: &Printer,
) -> std::result::Result<Vec<Patch>, String> {
    printer.status("Fetching", document);
    let text = source
        .fetch(document)
        .await
        .map_err(|e| e.to_string())?;
    let doc = parse_document(&text);

    let patches = match section {
        Section::Hero => sections::hero::patches(&doc),
        Section::About => sections::about::patches(&doc),
        Section::Stats => sections::stats::patches(&doc),
        Section::Contact => sections::contact::patches(&doc),
        Section::Footer => sections::footer::patches(&doc),
        Section::Solutions => unreachable!("solutions use collect_solutions"),
    };
    Ok(patches)
}

/// Fetch the enumerated solution documents, discarding failures and
/// incomplete documents, and build the container patch.
async fn collect_solutions(
    source: &ContentSource,
    documents: &[String],
    printer: &Printer,
) -> (Vec<String>, Vec<Patch>) {
    let mut survivors: Vec<Solution> = Vec::new();
    let mut loaded = Vec::new();

    for name in documents {
        printer.status("Fetching", name);
        let text = match source.fetch(name).await {
            Ok(text) => text,
            Err(e) => {
                printer.warning("Skipping", &format!("solution {} ({})", name, e));
                continue;
            }
        };
        loaded.push(name.clone());
        let doc = parse_document(&text);
        match Solution::from_document(name, &doc) {
            Some(solution) => survivors.push(solution),
            None => {
                printer.warning(
                    "Skipping",
                    &format!("solution {} (missing title or icon)", name),
                );
            }
        }
    }

    (loaded, sections::solutions::patches(survivors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    const PAGE: &str = r#"<!DOCTYPE html>
<html>
<body>
<section class="hero"><h1>Static hero</h1><p class="tagline">Static tagline</p><div class="hero-text">Static text</div><a class="btn-corporate">Go</a></section>
<section id="about"><h2 class="section-title">About</h2><p class="section-subtitle">sub</p><div class="about-text">static about</div></section>
<div class="stats"><div class="stat-item"><span class="stat-number">0</span><span class="stat-label">l1</span></div><div class="stat-item"><span class="stat-number">0</span><span class="stat-label">l2</span></div><div class="stat-item"><span class="stat-number">0</span><span class="stat-label">l3</span></div><div class="stat-item"><span class="stat-number">0</span><span class="stat-label">l4</span></div></div>
<section id="solutions"><div class="solutions-container"><h2 class="section-title">Solutions</h2><div class="solution-row">static card</div></div></section>
<section id="contact"><h2 class="section-title">Contact</h2><span class="contact-email">old@old</span><span class="contact-phone">0</span><p class="contact-address">old</p><div class="contact-text">old</div></section>
<footer><span class="footer-brand">Old Co</span><p class="footer-tagline">old</p><ul class="footer-links"><li>old</li></ul><p class="copyright">old</p></footer>
</body>
</html>"#;

    fn write_content(dir: &Path) {
        fs::write(
            dir.join("hero.md"),
            "---\ntitle: New hero\nsubtitle: New tagline\nwelcome_text: Hello **world**\nbutton_text: Talk\n---\n",
        )
        .unwrap();
        fs::write(
            dir.join("about.md"),
            "---\ntitle: About new\n---\nAbout *body*",
        )
        .unwrap();
        fs::write(
            dir.join("stats.md"),
            "---\nstat1_number: 25+\nstat1_label: Years\nstat2_number: 40\n---\n",
        )
        .unwrap();
        fs::write(
            dir.join("solution-1.md"),
            "---\ntitle: Customs\nicon: fas fa-stamp\norder: 2\n---\nPaperwork handled.",
        )
        .unwrap();
        fs::write(
            dir.join("solution-2.md"),
            "---\ntitle: Freight\nicon: fas fa-ship\norder: 1\n---\nShips on time.",
        )
        .unwrap();
        fs::write(
            dir.join("contact.md"),
            "---\ntitle: Reach us\nemail: new@example.com\n---\n",
        )
        .unwrap();
        fs::write(
            dir.join("footer.md"),
            "---\ncompany: New Co\ncopyright: © 2024\nlinks: [Home, Contact]\n---\n",
        )
        .unwrap();
    }

    fn manifest_for(dir: &Path) -> Manifest {
        Manifest {
            content: dir.join("content").display().to_string(),
            page: dir.join("index.html"),
            output: dir.join("dist"),
            solutions: vec!["solution-1.md".to_string(), "solution-2.md".to_string()],
        }
    }

    async fn run(dir: &Path) -> (String, HydrateReport) {
        let manifest = manifest_for(dir);
        let printer = Printer::new();
        let (html, report) = hydrate(&manifest, &printer).await.unwrap();
        (String::from_utf8(html).unwrap(), report)
    }

    #[tokio::test]
    async fn test_full_hydration() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("content")).unwrap();
        write_content(&dir.path().join("content"));
        fs::write(dir.path().join("index.html"), PAGE).unwrap();

        let (html, report) = run(dir.path()).await;

        assert!(html.contains("<h1>New hero</h1>"));
        assert!(html.contains("Hello <strong>world</strong>"));
        assert!(html.contains(">About new</h2>"));
        assert!(html.contains("25+"));
        // Solutions sorted by order: Freight (1) before Customs (2).
        let freight = html.find("Freight").unwrap();
        let customs = html.find("Customs").unwrap();
        assert!(freight < customs);
        assert!(!html.contains("static card"));
        assert!(html.contains("<h2 class=\"section-title\">Solutions</h2>"));
        assert!(html.contains("new@example.com"));
        assert!(html.contains("© 2024"));

        assert_eq!(report.sections.len(), 6);
        assert!(report
            .sections
            .iter()
            .all(|s| s.status == SectionStatus::Updated));
    }

    #[tokio::test]
    async fn test_missing_document_skips_only_its_section() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("content")).unwrap();
        write_content(&dir.path().join("content"));
        // Remove the hero document; the rest must still bind.
        fs::remove_file(dir.path().join("content/hero.md")).unwrap();
        fs::write(dir.path().join("index.html"), PAGE).unwrap();

        let (html, report) = run(dir.path()).await;

        assert!(html.contains("<h1>Static hero</h1>"));
        assert!(html.contains(">About new</h2>"));
        assert_eq!(report.sections[0].status, SectionStatus::FetchFailed);
        assert_eq!(report.sections[1].status, SectionStatus::Updated);
    }

    #[tokio::test]
    async fn test_all_solutions_missing_leaves_container() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("content")).unwrap();
        write_content(&dir.path().join("content"));
        fs::remove_file(dir.path().join("content/solution-1.md")).unwrap();
        fs::remove_file(dir.path().join("content/solution-2.md")).unwrap();
        fs::write(dir.path().join("index.html"), PAGE).unwrap();

        let (html, report) = run(dir.path()).await;

        assert!(html.contains("static card"));
        let solutions = &report.sections[3];
        assert_eq!(solutions.section, "solutions");
        assert_eq!(solutions.status, SectionStatus::NoContent);
    }

    #[tokio::test]
    async fn test_incomplete_solution_discarded() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("content")).unwrap();
        write_content(&dir.path().join("content"));
        fs::write(
            dir.path().join("content/solution-1.md"),
            "---\ntitle: No icon here\n---\nbody",
        )
        .unwrap();
        fs::write(dir.path().join("index.html"), PAGE).unwrap();

        let (html, _) = run(dir.path()).await;

        assert!(!html.contains("No icon here"));
        assert!(html.contains("Freight"));
    }

    #[tokio::test]
    async fn test_missing_target_reported_not_fatal() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("content")).unwrap();
        write_content(&dir.path().join("content"));
        // Page without a tagline node.
        let page = PAGE.replace("<p class=\"tagline\">Static tagline</p>", "");
        fs::write(dir.path().join("index.html"), page).unwrap();

        let (html, report) = run(dir.path()).await;

        assert!(html.contains("<h1>New hero</h1>"));
        let hero = &report.sections[0];
        assert_eq!(hero.status, SectionStatus::Updated);
        assert_eq!(hero.missing_targets, vec![".hero .tagline".to_string()]);
    }

    #[tokio::test]
    async fn test_document_without_front_matter_is_no_content() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("content")).unwrap();
        write_content(&dir.path().join("content"));
        fs::write(dir.path().join("content/hero.md"), "prose with no header").unwrap();
        fs::write(dir.path().join("index.html"), PAGE).unwrap();

        let (html, report) = run(dir.path()).await;

        assert!(html.contains("<h1>Static hero</h1>"));
        assert_eq!(report.sections[0].status, SectionStatus::NoContent);
    }
}
