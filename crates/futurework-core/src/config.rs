use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_MAX_INSIGHTS, DEFAULT_MAX_SIGNALS, ENV_REDUCED_MOTION, MIN_SLIDE_DURATION_MS,
    SLIDE_DURATION_MS,
};
use crate::source::{ContentSource, DirectorySource, HttpSource};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Runtime configuration, loadable from a JSON file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CoreConfig {
    /// Static web host serving `content/...`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Local directory laid out like the web host
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_dir: Option<PathBuf>,

    pub max_signals: usize,
    pub max_insights: usize,
    pub slide_duration_ms: u64,
    pub reduced_motion: bool,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            content_dir: None,
            max_signals: DEFAULT_MAX_SIGNALS,
            max_insights: DEFAULT_MAX_INSIGHTS,
            slide_duration_ms: SLIDE_DURATION_MS,
            reduced_motion: false,
        }
    }
}

/// Where content comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSourceConfig {
    Http(String),
    Directory(PathBuf),
    /// Offline: show bundled content only
    None,
}

impl CoreConfig {
    /// Load config from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from `path` if given, else from the default location when a
    /// file exists there, else defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("futurework").join("config.json"))
    }

    /// Apply the reduced-motion environment override
    pub fn apply_env(&mut self) {
        self.apply_reduced_motion_env(std::env::var(ENV_REDUCED_MOTION).ok().as_deref());
    }

    fn apply_reduced_motion_env(&mut self, value: Option<&str>) {
        if let Some(value) = value {
            let value = value.trim();
            if value == "1" || value.eq_ignore_ascii_case("true") {
                self.reduced_motion = true;
            }
        }
    }

    /// Never shorter than `MIN_SLIDE_DURATION_MS`
    pub fn slide_duration(&self) -> Duration {
        Duration::from_millis(self.slide_duration_ms.max(MIN_SLIDE_DURATION_MS))
    }

    /// A base URL wins over a content directory
    pub fn content_source(&self) -> ContentSourceConfig {
        if let Some(url) = self.base_url.as_deref().filter(|url| !url.trim().is_empty()) {
            return ContentSourceConfig::Http(url.trim().to_string());
        }
        match &self.content_dir {
            Some(dir) => ContentSourceConfig::Directory(dir.clone()),
            None => ContentSourceConfig::None,
        }
    }

    pub fn build_source(&self) -> Option<Arc<dyn ContentSource>> {
        match self.content_source() {
            ContentSourceConfig::Http(url) => Some(Arc::new(HttpSource::new(url))),
            ContentSourceConfig::Directory(dir) => Some(Arc::new(DirectorySource::new(dir))),
            ContentSourceConfig::None => None,
        }
    }
}
