use serde::{Deserialize, Serialize};

/// Visibility status; only published content is ever shown
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Published,
    Draft,
    /// Any other value, treated like a draft
    #[serde(other)]
    Unknown,
}

impl Status {
    pub fn is_published(&self) -> bool {
        matches!(self, Self::Published)
    }
}
