//! Content retrieval.
//!
//! Documents are plain static files hosted next to the page. A
//! [`ContentSource`] fetches one by name, either over HTTP or from a local
//! directory. Every call is an independent round trip: no retry, no caching,
//! no shared state between fetches. A missing document or a non-2xx status
//! is a retrieval failure the caller is expected to absorb section-locally.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{FillError, Result};

/// Where content documents come from.
#[derive(Debug, Clone)]
pub enum ContentSource {
    /// Static files behind an HTTP base URL.
    Remote {
        client: reqwest::Client,
        base: String,
    },
    /// Files in a local directory.
    Local { root: PathBuf },
}

impl ContentSource {
    /// Build a source from a manifest location string.
    ///
    /// `http://` and `https://` locations become remote sources; anything
    /// else is treated as a local directory path.
    pub fn from_location(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            ContentSource::Remote {
                client: reqwest::Client::new(),
                base: location.trim_end_matches('/').to_string(),
            }
        } else {
            ContentSource::Local {
                root: PathBuf::from(location),
            }
        }
    }

    /// Human-readable location for status output.
    pub fn location(&self) -> String {
        match self {
            ContentSource::Remote { base, .. } => base.clone(),
            ContentSource::Local { root } => root.display().to_string(),
        }
    }

    /// The local content root, when there is one. Watch mode needs it.
    pub fn local_root(&self) -> Option<&Path> {
        match self {
            ContentSource::Remote { .. } => None,
            ContentSource::Local { root } => Some(root),
        }
    }

    /// Retrieve one document as text.
    pub async fn fetch(&self, name: &str) -> Result<String> {
        match self {
            ContentSource::Remote { client, base } => {
                let url = format!("{}/{}", base, name);
                let response = client.get(&url).send().await.map_err(|e| FillError::Fetch {
                    location: url.clone(),
                    message: e.to_string(),
                })?;
                let status = response.status();
                if !status.is_success() {
                    return Err(FillError::Fetch {
                        location: url,
                        message: format!("HTTP status {}", status),
                    });
                }
                response.text().await.map_err(|e| FillError::Fetch {
                    location: url,
                    message: e.to_string(),
                })
            }
            ContentSource::Local { root } => {
                let path = root.join(name);
                tokio::fs::read_to_string(&path)
                    .await
                    .map_err(|e| FillError::Fetch {
                        location: path.display().to_string(),
                        message: e.to_string(),
                    })
            }
        }
    }

    /// List `.md` documents under a local root, relative to it.
    ///
    /// Used by `check` to flag documents no section will ever read. Remote
    /// sources cannot be enumerated and return an empty list.
    pub fn list_documents(&self) -> Vec<String> {
        let ContentSource::Local { root } = self else {
            return Vec::new();
        };

        let mut names = Vec::new();
        for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
            let path = entry.path();
            if path.is_dir() {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some("md") {
                continue;
            }
            if let Ok(relative) = path.strip_prefix(root) {
                names.push(relative.to_string_lossy().replace('\\', "/"));
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_from_location_remote() {
        let source = ContentSource::from_location("https://example.com/content/");
        assert_eq!(source.location(), "https://example.com/content");
        assert!(source.local_root().is_none());
    }

    #[test]
    fn test_from_location_local() {
        let source = ContentSource::from_location("content");
        assert_eq!(source.local_root(), Some(Path::new("content")));
    }

    #[tokio::test]
    async fn test_local_fetch() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("hero.md"), "---\ntitle: T\n---\n").unwrap();

        let source = ContentSource::Local {
            root: dir.path().to_path_buf(),
        };

        let text = source.fetch("hero.md").await.unwrap();
        assert_eq!(text, "---\ntitle: T\n---\n");
    }

    #[tokio::test]
    async fn test_local_fetch_missing_is_error() {
        let dir = tempdir().unwrap();
        let source = ContentSource::Local {
            root: dir.path().to_path_buf(),
        };

        let result = source.fetch("absent.md").await;
        assert!(matches!(result, Err(FillError::Fetch { .. })));
    }

    #[test]
    fn test_list_documents_local() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("hero.md"), "").unwrap();
        fs::write(dir.path().join("nested/extra.md"), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();

        let source = ContentSource::Local {
            root: dir.path().to_path_buf(),
        };

        assert_eq!(source.list_documents(), vec!["hero.md", "nested/extra.md"]);
    }

    fn serve_once(status: u16, body: &'static str) -> String {
        let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
        let addr = format!("http://{}", server.server_addr().to_ip().unwrap());
        std::thread::spawn(move || {
            if let Ok(request) = server.recv() {
                let response = tiny_http::Response::from_string(body)
                    .with_status_code(tiny_http::StatusCode(status));
                let _ = request.respond(response);
            }
        });
        addr
    }

    #[tokio::test]
    async fn test_remote_fetch_success() {
        let base = serve_once(200, "---\ntitle: Remote\n---\nbody");
        let source = ContentSource::from_location(&base);

        let text = source.fetch("hero.md").await.unwrap();
        assert!(text.contains("Remote"));
    }

    #[tokio::test]
    async fn test_remote_fetch_404_is_error() {
        let base = serve_once(404, "not found");
        let source = ContentSource::from_location(&base);

        let result = source.fetch("hero.md").await;
        match result {
            Err(FillError::Fetch { message, .. }) => assert!(message.contains("404")),
            other => panic!("expected fetch error, got {:?}", other.map(|_| ())),
        }
    }
}
