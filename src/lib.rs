//! pagefill - Static page hydration from markdown content
//!
//! A library and CLI for filling the fixed sections of a static HTML page
//! (hero, about, stats, solutions, contact, footer) from small front-matter
//! markdown documents fetched over HTTP or read from a local directory.

pub mod cli;
pub mod error;
pub mod fetch;
pub mod hydrate;
pub mod manifest;
pub mod output;
pub mod page;
pub mod parser;
pub mod render;
pub mod sections;
pub mod validation;

pub use error::{FillError, Result};
pub use fetch::ContentSource;
pub use hydrate::{hydrate, HydrateReport, SectionReport, SectionStatus};
pub use manifest::{Manifest, MANIFEST_FILENAME};
pub use page::{Page, Patch, PatchOp, PatchOutcome, Selector};
pub use parser::{parse_document, Document, FieldValue, Record};
pub use render::render_markdown;
pub use sections::Section;
pub use validation::{check_content, load_content_set, CheckResult, Diagnostic, Severity};
