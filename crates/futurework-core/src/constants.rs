//! Application-wide constants
//!
//! Centralized location for content paths, limits and timings
//! that are used across multiple modules.

/// Directory under the content base that holds all content categories
pub const CONTENT_ROOT: &str = "content";

/// Name of the per-category index document
pub const INDEX_FILE: &str = "index.json";

// Loader caps
pub const DEFAULT_MAX_SIGNALS: usize = 5;
pub const DEFAULT_MAX_INSIGHTS: usize = 3;

/// How long one provocation slide stays on screen, in milliseconds
pub const SLIDE_DURATION_MS: u64 = 9000;

/// Shortest slide duration accepted; anything lower is raised to this
pub const MIN_SLIDE_DURATION_MS: u64 = 1000;

// Stream pagination ("show more")
pub const STREAM_PAGE_SIZE: usize = 3;
pub const STREAM_PAGE_STEP: usize = 3;

/// Banner text shown when any category had to fall back to bundled content
pub const LOAD_ERROR_MESSAGE: &str = "Some content could not be loaded. Showing cached content.";

// Environment variables
pub const ENV_LOG_FILE: &str = "FUTUREWORK_LOG_FILE";
pub const ENV_REDUCED_MOTION: &str = "FUTUREWORK_REDUCED_MOTION";

// Section anchors used by slide CTAs
pub mod anchors {
    pub const AI_SIGNAL: &str = "#ai-signal";
    pub const EXPERT_INSIGHTS: &str = "#expert-insights";
    pub const ABOUT_PROJECT: &str = "#about-project";
}
