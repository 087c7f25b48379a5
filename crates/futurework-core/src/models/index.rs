use serde::{Deserialize, Serialize};

use super::Status;
use crate::constants::{CONTENT_ROOT, INDEX_FILE};

/// The two content categories published by the content pipeline
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Signals,
    Insights,
}

impl ContentKind {
    /// Directory name under `content/`
    pub fn dir(&self) -> &'static str {
        match self {
            Self::Signals => "ai-signals",
            Self::Insights => "expert-insights",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Signals => "AI Signal",
            Self::Insights => "Expert Insights",
        }
    }

    pub fn index_path(&self) -> String {
        format!("{}/{}/{}", CONTENT_ROOT, self.dir(), INDEX_FILE)
    }

    /// Path of a file listed in (or referenced from) this category
    pub fn file_path(&self, file: &str) -> String {
        format!("{}/{}/{}", CONTENT_ROOT, self.dir(), file.trim_start_matches('/'))
    }
}

/// Lightweight pointer used to decide which full items to fetch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub id: String,
    pub file: String,
    pub date: String,
    pub status: Status,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentIndex {
    #[serde(default)]
    pub last_updated: String,
    #[serde(default)]
    pub items: Vec<IndexEntry>,
}

impl ContentIndex {
    /// Published entries, newest first by `date`, capped at `cap`.
    ///
    /// Dates compare as strings, so they must be zero-padded `YYYY-MM-DD`.
    /// Entries with equal dates keep their index order.
    pub fn published(&self, cap: usize) -> Vec<&IndexEntry> {
        let mut entries: Vec<&IndexEntry> = self
            .items
            .iter()
            .filter(|entry| entry.status.is_published())
            .collect();
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        entries.truncate(cap);
        entries
    }
}
