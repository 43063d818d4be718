//! Hydrate command implementation.
//!
//! Runs the pipeline once and writes the hydrated page; with `--watch`,
//! keeps re-running whenever the page or a local content document changes.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Args;
use notify::{EventKind, RecursiveMode, Watcher};

use crate::error::{FillError, Result};
use crate::fetch::ContentSource;
use crate::hydrate::hydrate;
use crate::manifest::Manifest;
use crate::output::{display_path, plural, Printer};

/// Hydrate the page from its content documents
#[derive(Args, Debug)]
pub struct HydrateArgs {
    /// Manifest file
    #[arg(long, short, default_value = "site.yaml")]
    pub manifest: PathBuf,

    /// Output directory (overrides the manifest)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Print a JSON report to stdout
    #[arg(long)]
    pub report: bool,

    /// Re-hydrate when the page or local content changes
    #[arg(long)]
    pub watch: bool,
}

pub async fn run(args: HydrateArgs, printer: &Printer) -> Result<()> {
    let mut manifest = super::load_manifest(&args.manifest, printer)?;
    if let Some(output) = args.output {
        manifest.output = output;
    }

    run_once(&manifest, printer, args.report).await?;

    if args.watch {
        watch(&manifest, printer, args.report).await?;
    }

    Ok(())
}

/// One full hydration pass: pipeline, then write the output page.
async fn run_once(manifest: &Manifest, printer: &Printer, report_json: bool) -> Result<()> {
    let (html, report) = hydrate(manifest, printer).await?;

    if !manifest.output.exists() {
        fs::create_dir_all(&manifest.output).map_err(|e| FillError::Io {
            path: manifest.output.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    let out = manifest.output_page();
    fs::write(&out, &html).map_err(|e| FillError::Io {
        path: out.clone(),
        message: format!("Failed to write page: {}", e),
    })?;

    printer.success(
        "Finished",
        &format!(
            "{} ({} applied)",
            display_path(&out),
            plural(report.applied_total(), "target", "targets")
        ),
    );

    if report_json {
        let json = serde_json::to_string_pretty(&report).map_err(|e| FillError::Build {
            message: format!("Failed to serialize report: {}", e),
            help: None,
        })?;
        println!("{}", json);
    }

    Ok(())
}

/// Check if path is a temp/backup file (editor artifacts).
fn is_temp_file(path: &Path) -> bool {
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    matches!(ext, "bck" | "bak" | "backup" | "swp" | "swo" | "tmp")
        || name.ends_with('~')
        || name.starts_with('.')
}

/// Paths worth rebuilding for: content documents and the host page.
fn is_relevant(path: &Path) -> bool {
    if is_temp_file(path) {
        return false;
    }
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("md") | Some("html")
    )
}

/// Watch the local content root and the page file, re-running the pipeline
/// on changes, debounced.
async fn watch(manifest: &Manifest, printer: &Printer, report_json: bool) -> Result<()> {
    let source = ContentSource::from_location(&manifest.content);
    let Some(root) = source.local_root() else {
        return Err(FillError::Build {
            message: "watch mode needs a local content directory".to_string(),
            help: Some("Point `content` in site.yaml at a directory, not a URL".to_string()),
        });
    };

    let (tx, mut rx) = tokio::sync::mpsc::channel::<()>(16);
    let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
        if let Ok(event) = res {
            let interesting = matches!(
                event.kind,
                EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
            );
            if interesting && event.paths.iter().any(|p| is_relevant(p)) {
                let _ = tx.blocking_send(());
            }
        }
    })
    .map_err(watch_error)?;

    watcher
        .watch(root, RecursiveMode::Recursive)
        .map_err(watch_error)?;
    watcher
        .watch(&manifest.page, RecursiveMode::NonRecursive)
        .map_err(watch_error)?;

    printer.info(
        "Watching",
        &format!("{} and {}", display_path(root), display_path(&manifest.page)),
    );

    while rx.recv().await.is_some() {
        // Editors fire bursts of events; let the burst settle first.
        tokio::time::sleep(Duration::from_millis(300)).await;
        while rx.try_recv().is_ok() {}

        if let Err(e) = run_once(manifest, printer, report_json).await {
            printer.error("Error", &e.to_string());
        }
    }

    Ok(())
}

fn watch_error(e: notify::Error) -> FillError {
    FillError::Build {
        message: format!("Watcher error: {}", e),
        help: None,
    }
}
