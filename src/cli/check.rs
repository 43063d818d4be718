//! Check command implementation.
//!
//! Fetches every configured document and reports what hydration would
//! silently skip: missing documents, missing or empty fields, discarded
//! solutions.

use std::path::PathBuf;

use clap::Args;

use crate::error::{FillError, Result};
use crate::fetch::ContentSource;
use crate::output::{plural, Printer};
use crate::validation::{check_content, load_content_set, print_diagnostics};

/// Check content documents without touching the page
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Manifest file
    #[arg(long, short, default_value = "site.yaml")]
    pub manifest: PathBuf,
}

pub async fn run(args: CheckArgs, printer: &Printer) -> Result<()> {
    let manifest = super::load_manifest(&args.manifest, printer)?;
    let source = ContentSource::from_location(&manifest.content);

    printer.status("Checking", &source.location());

    let set = load_content_set(&source, &manifest).await;
    let result = check_content(&set);

    print_diagnostics(&result);

    if result.has_errors() {
        return Err(FillError::Check {
            message: format!("{} found", plural(result.error_count(), "error", "errors")),
            help: Some("Fix the errors above and try again".to_string()),
        });
    }

    Ok(())
}
