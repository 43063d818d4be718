//! Individual content checks.

use std::collections::HashMap;

use crate::parser::Document;
use crate::sections::{about, contact, footer, hero, solutions, stats, Section};

use super::warning::{CheckResult, Diagnostic};
use super::ContentSet;

/// Documents that failed to fetch. The page still renders its static
/// markup, so this is a warning.
pub fn check_missing_documents(set: &ContentSet) -> CheckResult {
    let mut result = CheckResult::new();
    for name in &set.missing {
        result.push(
            Diagnostic::warning(
                "pagefill::check::missing-document",
                format!("{} could not be fetched; its section stays static", name),
            )
            .with_help("Create the document or remove it from site.yaml"),
        );
    }
    result
}

/// Field-driven documents with no recognizable front matter bind nothing
/// at all — almost certainly an authoring mistake, so an error.
pub fn check_front_matter(set: &ContentSet) -> CheckResult {
    let mut result = CheckResult::new();
    for (section, doc) in set.single_sections() {
        let Some(doc) = doc else { continue };
        if !doc.has_front_matter() {
            result.push(
                Diagnostic::error(
                    "pagefill::check::no-front-matter",
                    format!(
                        "{} has no front matter; the {} section will not update",
                        section.document().unwrap_or_default(),
                        section
                    ),
                )
                .with_help("Start the document with ---, key: value lines, then ---"),
            );
        }
    }
    result
}

/// Required fields per section.
pub fn check_required_fields(set: &ContentSet) -> CheckResult {
    let mut result = CheckResult::new();
    for (section, doc) in set.single_sections() {
        let Some(doc) = doc else { continue };
        if !doc.has_front_matter() {
            continue; // already reported by check_front_matter
        }
        let required: &[&str] = match section {
            Section::Hero => hero::REQUIRED,
            Section::About => about::REQUIRED,
            Section::Contact => contact::REQUIRED,
            Section::Footer => footer::REQUIRED,
            _ => &[],
        };
        for field in required {
            if !doc.record.has_value(field) {
                result.warning(
                    "pagefill::check::missing-field",
                    format!(
                        "{} is missing `{}`; that target stays static",
                        section.document().unwrap_or_default(),
                        field
                    ),
                );
            }
        }
    }
    result
}

/// Fields that are present but empty are skipped by the binders.
pub fn check_empty_fields(set: &ContentSet) -> CheckResult {
    let mut result = CheckResult::new();

    let mut flag = |name: &str, doc: &Document| {
        for (field, value) in doc.record.iter() {
            if value.is_empty() {
                result.push(Diagnostic::warning(
                    "pagefill::check::empty-field",
                    format!("{}: `{}` is empty and will be skipped", name, field),
                ));
            }
        }
    };

    for (section, doc) in set.single_sections() {
        if let Some(doc) = doc {
            flag(section.document().unwrap_or_default(), doc);
        }
    }
    for (name, doc) in &set.solutions {
        flag(name, doc);
    }

    result
}

/// Fields no binder reads, to catch typos like `titel:`.
pub fn check_unknown_fields(set: &ContentSet) -> CheckResult {
    let mut result = CheckResult::new();
    let stat_fields = stats::fields();

    let mut flag = |name: &str, doc: &Document, known: &[&str]| {
        for (field, _) in doc.record.iter() {
            if !known.contains(&field) {
                result.push(
                    Diagnostic::warning(
                        "pagefill::check::unknown-field",
                        format!("{}: `{}` is not read by any target", name, field),
                    )
                    .with_help("Check the field name for typos"),
                );
            }
        }
    };

    for (section, doc) in set.single_sections() {
        let Some(doc) = doc else { continue };
        let name = section.document().unwrap_or_default();
        match section {
            Section::Hero => flag(name, doc, hero::FIELDS),
            Section::About => flag(name, doc, about::FIELDS),
            Section::Stats => {
                let known: Vec<&str> = stat_fields.iter().map(String::as_str).collect();
                flag(name, doc, &known);
            }
            Section::Contact => flag(name, doc, contact::FIELDS),
            Section::Footer => flag(name, doc, footer::FIELDS),
            Section::Solutions => {}
        }
    }
    for (name, doc) in &set.solutions {
        flag(name, doc, solutions::FIELDS);
    }

    result
}

/// A stat number without its label (or the reverse) renders half an item.
pub fn check_stat_pairs(set: &ContentSet) -> CheckResult {
    let mut result = CheckResult::new();
    let Some(doc) = &set.stats else {
        return result;
    };

    for i in 1..=stats::STAT_COUNT {
        let number = format!("stat{}_number", i);
        let label = format!("stat{}_label", i);
        match (doc.record.has_value(&number), doc.record.has_value(&label)) {
            (true, false) => result.warning(
                "pagefill::check::unpaired-stat",
                format!("stats.md: `{}` has no matching `{}`", number, label),
            ),
            (false, true) => result.warning(
                "pagefill::check::unpaired-stat",
                format!("stats.md: `{}` has no matching `{}`", label, number),
            ),
            _ => {}
        }
    }

    result
}

/// Solution-specific checks: discarded documents, bad and duplicate order
/// values.
pub fn check_solutions(set: &ContentSet) -> CheckResult {
    let mut result = CheckResult::new();
    let mut orders: HashMap<i64, Vec<&str>> = HashMap::new();

    for (name, doc) in &set.solutions {
        for field in solutions::REQUIRED {
            if !doc.record.has_value(field) {
                result.push(
                    Diagnostic::warning(
                        "pagefill::check::incomplete-solution",
                        format!("{}: missing `{}`; the solution will be discarded", name, field),
                    )
                    .with_help("Solutions need both title and icon"),
                );
            }
        }

        if let Some(raw) = doc.record.get("order") {
            if !raw.is_empty() && raw.trim().parse::<i64>().is_err() {
                result.warning(
                    "pagefill::check::invalid-order",
                    format!("{}: order `{}` is not numeric; it will sort last", name, raw),
                );
            }
        }

        let order = solutions::parse_order(doc.record.get("order"));
        if order != solutions::ORDER_LAST {
            orders.entry(order).or_default().push(name);
        }
    }

    for (order, names) in orders {
        if names.len() > 1 {
            result.warning(
                "pagefill::check::duplicate-order",
                format!("order {} is used by {}", order, names.join(", ")),
            );
        }
    }

    result
}

/// Local documents nothing reads.
pub fn check_unreferenced_documents(set: &ContentSet) -> CheckResult {
    let mut result = CheckResult::new();
    for name in &set.unreferenced {
        result.push(
            Diagnostic::warning(
                "pagefill::check::unreferenced-document",
                format!("{} is not referenced by any section", name),
            )
            .with_help("Add it to the solutions list in site.yaml or delete it"),
        );
    }
    result
}

#[cfg(test)]
mod tests {
    use super::super::check_content;
    use super::*;
    use crate::parser::parse_document;

    fn set_with_hero(source: &str) -> ContentSet {
        ContentSet {
            hero: Some(parse_document(source)),
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_documents_warn() {
        let set = ContentSet {
            missing: vec!["hero.md".to_string()],
            ..Default::default()
        };

        let result = check_missing_documents(&set);

        assert_eq!(result.warning_count(), 1);
        assert!(!result.has_errors());
    }

    #[test]
    fn test_no_front_matter_is_error() {
        let set = set_with_hero("prose without a header");

        let result = check_front_matter(&set);

        assert!(result.has_errors());
    }

    #[test]
    fn test_front_matter_present_is_clean() {
        let set = set_with_hero("---\ntitle: T\n---\n");

        assert!(check_front_matter(&set).is_empty());
        assert!(check_required_fields(&set).is_empty());
    }

    #[test]
    fn test_missing_required_field_warns() {
        let set = set_with_hero("---\nsubtitle: only\n---\n");

        let result = check_required_fields(&set);

        assert_eq!(result.warning_count(), 1);
    }

    #[test]
    fn test_empty_field_warns() {
        let set = set_with_hero("---\ntitle: T\nsubtitle:\n---\n");

        let result = check_empty_fields(&set);

        assert_eq!(result.warning_count(), 1);
    }

    #[test]
    fn test_unknown_field_warns() {
        let set = set_with_hero("---\ntitle: T\ntitel: typo\n---\n");

        let result = check_unknown_fields(&set);

        assert_eq!(result.warning_count(), 1);
    }

    #[test]
    fn test_unpaired_stats_warn() {
        let set = ContentSet {
            stats: Some(parse_document(
                "---\nstat1_number: 10\nstat2_label: Countries\n---\n",
            )),
            ..Default::default()
        };

        let result = check_stat_pairs(&set);

        assert_eq!(result.warning_count(), 2);
    }

    #[test]
    fn test_incomplete_solution_warns() {
        let set = ContentSet {
            solutions: vec![(
                "solution-1.md".to_string(),
                parse_document("---\ntitle: No icon\n---\n"),
            )],
            ..Default::default()
        };

        let result = check_solutions(&set);

        assert_eq!(result.warning_count(), 1);
    }

    #[test]
    fn test_invalid_and_duplicate_orders_warn() {
        let set = ContentSet {
            solutions: vec![
                (
                    "a.md".to_string(),
                    parse_document("---\ntitle: A\nicon: i\norder: soon\n---\n"),
                ),
                (
                    "b.md".to_string(),
                    parse_document("---\ntitle: B\nicon: i\norder: 1\n---\n"),
                ),
                (
                    "c.md".to_string(),
                    parse_document("---\ntitle: C\nicon: i\norder: 1\n---\n"),
                ),
            ],
            ..Default::default()
        };

        let result = check_solutions(&set);

        // one invalid order + one duplicate pair
        assert_eq!(result.warning_count(), 2);
    }

    #[test]
    fn test_unreferenced_documents_warn() {
        let set = ContentSet {
            unreferenced: vec!["drafts/old.md".to_string()],
            ..Default::default()
        };

        let result = check_unreferenced_documents(&set);

        assert_eq!(result.warning_count(), 1);
    }

    #[test]
    fn test_clean_set_passes() {
        let set = ContentSet {
            hero: Some(parse_document("---\ntitle: T\n---\n")),
            stats: Some(parse_document("---\nstat1_number: 1\nstat1_label: L\n---\n")),
            solutions: vec![(
                "solution-1.md".to_string(),
                parse_document("---\ntitle: A\nicon: i\norder: 1\n---\nbody"),
            )],
            ..Default::default()
        };

        let result = check_content(&set);

        assert!(result.is_empty());
    }
}
