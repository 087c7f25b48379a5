use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;

use super::{ContentError, ContentSource};

/// Reads content from a local directory laid out like the web host
/// (`<root>/content/<category>/...`).
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Resolve a relative content path, refusing anything that escapes the root
    fn resolve(&self, path: &str) -> Option<PathBuf> {
        let relative = Path::new(path.trim_start_matches('/'));
        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
        {
            return None;
        }
        Some(self.root.join(relative))
    }
}

#[async_trait]
impl ContentSource for DirectorySource {
    async fn fetch(&self, path: &str) -> Result<String, ContentError> {
        let full_path = self
            .resolve(path)
            .ok_or_else(|| ContentError::NotFound(path.to_string()))?;

        match tokio::fs::read_to_string(&full_path).await {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(ContentError::NotFound(path.to_string()))
            }
            Err(source) => Err(ContentError::Io {
                path: path.to_string(),
                source,
            }),
        }
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}
