use miette::Diagnostic;
use thiserror::Error;

/// Main error type for pagefill operations
#[derive(Error, Diagnostic, Debug)]
pub enum FillError {
    #[error("IO error: {0}")]
    #[diagnostic(code(pagefill::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(pagefill::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Failed to fetch {location}: {message}")]
    #[diagnostic(code(pagefill::fetch))]
    Fetch { location: String, message: String },

    #[error("Manifest error: {message}")]
    #[diagnostic(code(pagefill::manifest))]
    Manifest {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Page error: {message}")]
    #[diagnostic(code(pagefill::page))]
    Page { message: String },

    #[error("Check failed: {message}")]
    #[diagnostic(code(pagefill::check))]
    Check {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(pagefill::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, FillError>;
