//! Project manifest (site.yaml) parsing.
//!
//! The manifest defines where content documents live, which page to
//! hydrate, where the result goes and which solution documents are
//! enumerated.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FillError, Result};

/// Default manifest filename looked up in the working directory.
pub const MANIFEST_FILENAME: &str = "site.yaml";

/// Project manifest loaded from site.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Content location: an `http(s)://` base URL or a local directory.
    #[serde(default = "default_content")]
    pub content: String,

    /// The static host page to hydrate.
    #[serde(default = "default_page")]
    pub page: PathBuf,

    /// Output directory for the hydrated page.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Solution documents, loaded in this order.
    #[serde(default = "default_solutions")]
    pub solutions: Vec<String>,
}

fn default_content() -> String {
    "content".to_string()
}

fn default_page() -> PathBuf {
    PathBuf::from("index.html")
}

fn default_output() -> PathBuf {
    PathBuf::from("dist")
}

fn default_solutions() -> Vec<String> {
    (1..=6).map(|i| format!("solution-{}.md", i)).collect()
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            content: default_content(),
            page: default_page(),
            output: default_output(),
            solutions: default_solutions(),
        }
    }
}

impl Manifest {
    /// Load manifest from a site.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| FillError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| FillError::Manifest {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check site.yaml syntax".to_string()),
        })
    }

    /// Where the hydrated page ends up: the output directory joined with
    /// the page's filename.
    pub fn output_page(&self) -> PathBuf {
        let name = self
            .page
            .file_name()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("index.html"));
        self.output.join(name)
    }
}
