pub mod check;
pub mod completions;
pub mod hydrate;
pub mod init;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::error::Result;
use crate::manifest::Manifest;
use crate::output::Printer;

/// pagefill - Static page hydration from markdown content
#[derive(Parser, Debug)]
#[command(name = "pagefill")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Hydrate the page from its content documents
    Hydrate(hydrate::HydrateArgs),

    /// Check content documents without touching the page
    Check(check::CheckArgs),

    /// Scaffold a pagefill site (site.yaml, content samples, host page)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Load the manifest, falling back to defaults when the default manifest
/// file simply is not there.
pub(crate) fn load_manifest(path: &Path, printer: &Printer) -> Result<Manifest> {
    if path.exists() {
        Manifest::load(path)
    } else if path == PathBuf::from(crate::manifest::MANIFEST_FILENAME) {
        printer.info("Defaults", "no site.yaml found, using built-in configuration");
        Ok(Manifest::default())
    } else {
        Manifest::load(path)
    }
}
