use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::{ContentError, ContentSource};

/// In-memory content, keyed by relative path. Records every requested path
/// so callers can assert what was (and was not) fetched.
#[derive(Default)]
pub struct MemorySource {
    documents: HashMap<String, String>,
    requests: Mutex<Vec<String>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, path: impl Into<String>, body: impl Into<String>) -> Self {
        self.insert(path, body);
        self
    }

    pub fn insert(&mut self, path: impl Into<String>, body: impl Into<String>) {
        self.documents.insert(path.into(), body.into());
    }

    /// Paths requested so far, in request order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().clone()
    }

    pub fn was_requested(&self, path: &str) -> bool {
        self.requests.lock().iter().any(|p| p == path)
    }
}

#[async_trait]
impl ContentSource for MemorySource {
    async fn fetch(&self, path: &str) -> Result<String, ContentError> {
        self.requests.lock().push(path.to_string());
        self.documents
            .get(path)
            .cloned()
            .ok_or_else(|| ContentError::NotFound(path.to_string()))
    }

    fn describe(&self) -> String {
        format!("memory ({} documents)", self.documents.len())
    }
}
