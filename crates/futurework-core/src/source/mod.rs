//! Content transport.
//!
//! Everything the loader needs from the outside world is "give me the text
//! stored at this relative path". Sources differ only in where that text
//! lives: a static web host, a directory on disk, or memory.

mod directory;
mod http;
mod memory;

pub use directory::DirectorySource;
pub use http::HttpSource;
pub use memory::MemorySource;

use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("Request for {path} failed: {source}")]
    Http {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to fetch {path}: HTTP {status}")]
    Status { path: String, status: u16 },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Read-only access to content documents by relative path
/// (e.g. `content/ai-signals/index.json`).
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn fetch(&self, path: &str) -> Result<String, ContentError>;

    /// Human-readable location, for logs
    fn describe(&self) -> String;
}
