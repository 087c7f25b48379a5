//! Content loading: index → published entries → item bodies → fallback.

use std::sync::Arc;

use futures::future::join_all;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::constants::{DEFAULT_MAX_INSIGHTS, DEFAULT_MAX_SIGNALS, LOAD_ERROR_MESSAGE};
use crate::defaults::{default_insights, default_signals};
use crate::models::{ContentIndex, ContentKind, Insight, Signal, Status};
use crate::source::{ContentError, ContentSource};

/// A content record that can be listed from a category index
pub trait Publishable: DeserializeOwned + Send {
    fn status(&self) -> Status;

    /// Companion markdown document to resolve after the body is fetched
    fn markdown_file(&self) -> Option<&str> {
        None
    }

    fn attach_markdown(&mut self, _markdown: String) {}
}

impl Publishable for Signal {
    fn status(&self) -> Status {
        self.status
    }
}

impl Publishable for Insight {
    fn status(&self) -> Status {
        self.status
    }

    fn markdown_file(&self) -> Option<&str> {
        self.markdown_file.as_deref()
    }

    fn attach_markdown(&mut self, markdown: String) {
        Insight::attach_markdown(self, markdown);
    }
}

/// Typed access to the published content of a [`ContentSource`]
#[derive(Clone)]
pub struct ContentRepository {
    source: Arc<dyn ContentSource>,
}

impl ContentRepository {
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self { source }
    }

    pub async fn fetch_index(&self, kind: ContentKind) -> Result<ContentIndex, ContentError> {
        let path = kind.index_path();
        let text = self.source.fetch(&path).await?;
        serde_json::from_str(&text).map_err(|source| ContentError::Parse { path, source })
    }

    /// Up to `cap` published items of `kind`, newest first.
    ///
    /// Fails only when the index itself cannot be fetched or parsed. Item
    /// bodies are fetched concurrently and any that fail are dropped.
    pub async fn list_published<T: Publishable>(
        &self,
        kind: ContentKind,
        cap: usize,
    ) -> Result<Vec<T>, ContentError> {
        let index = self.fetch_index(kind).await?;
        let entries = index.published(cap);
        debug!(
            "{}: {} of {} index entries selected",
            kind.dir(),
            entries.len(),
            index.items.len()
        );

        let results = join_all(
            entries
                .iter()
                .map(|entry| self.fetch_item::<T>(kind, &entry.file)),
        )
        .await;

        let mut items = Vec::with_capacity(results.len());
        for (entry, result) in entries.iter().zip(results) {
            match result {
                Ok(item) if item.status().is_published() => items.push(item),
                Ok(_) => debug!("{}: dropping {}, body is not published", kind.dir(), entry.id),
                Err(e) => warn!("{}: skipping {}: {}", kind.dir(), entry.id, e),
            }
        }
        Ok(items)
    }

    async fn fetch_item<T: Publishable>(
        &self,
        kind: ContentKind,
        file: &str,
    ) -> Result<T, ContentError> {
        let path = kind.file_path(file);
        let text = self.source.fetch(&path).await?;
        let mut item: T =
            serde_json::from_str(&text).map_err(|source| ContentError::Parse { path, source })?;

        if let Some(markdown_file) = item.markdown_file().map(str::to_string) {
            match self.source.fetch(&kind.file_path(&markdown_file)).await {
                Ok(markdown) => item.attach_markdown(markdown),
                // Inline paragraphs/blocks stay as the body
                Err(e) => warn!("{}: markdown {} unavailable: {}", kind.dir(), markdown_file, e),
            }
        }

        Ok(item)
    }
}

/// Everything the stream needs for one page session
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedContent {
    pub signals: Vec<Signal>,
    pub insights: Vec<Insight>,
    /// Set when any category's index could not be loaded
    pub error: Option<String>,
}

impl LoadedContent {
    /// Bundled content only, with no error
    pub fn bundled() -> Self {
        Self {
            signals: default_signals(),
            insights: default_insights(),
            error: None,
        }
    }
}

pub struct ContentLoader {
    repository: ContentRepository,
    max_signals: usize,
    max_insights: usize,
}

impl ContentLoader {
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self {
            repository: ContentRepository::new(source),
            max_signals: DEFAULT_MAX_SIGNALS,
            max_insights: DEFAULT_MAX_INSIGHTS,
        }
    }

    pub fn with_limits(mut self, max_signals: usize, max_insights: usize) -> Self {
        self.max_signals = max_signals;
        self.max_insights = max_insights;
        self
    }

    pub fn repository(&self) -> &ContentRepository {
        &self.repository
    }

    /// Load both categories concurrently. Never fails: each category falls
    /// back to bundled content on its own.
    pub async fn load(&self) -> LoadedContent {
        let (signals, insights) = tokio::join!(
            self.repository
                .list_published::<Signal>(ContentKind::Signals, self.max_signals),
            self.repository
                .list_published::<Insight>(ContentKind::Insights, self.max_insights),
        );

        let failed = signals.is_err() || insights.is_err();

        LoadedContent {
            signals: with_fallback(ContentKind::Signals, signals, default_signals),
            insights: with_fallback(ContentKind::Insights, insights, default_insights),
            error: failed.then(|| LOAD_ERROR_MESSAGE.to_string()),
        }
    }
}

fn with_fallback<T>(
    kind: ContentKind,
    result: Result<Vec<T>, ContentError>,
    defaults: fn() -> Vec<T>,
) -> Vec<T> {
    match result {
        Ok(items) if !items.is_empty() => {
            info!("{}: loaded {} items", kind.dir(), items.len());
            items
        }
        // Also fires when the index is fine but every body failed
        Ok(_) => {
            warn!("{}: no items resolved, using bundled content", kind.dir());
            defaults()
        }
        Err(e) => {
            warn!("{}: {}; using bundled content", kind.dir(), e);
            defaults()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InsightBody;
    use crate::source::MemorySource;

    const SIGNALS_INDEX: &str = "content/ai-signals/index.json";
    const INSIGHTS_INDEX: &str = "content/expert-insights/index.json";

    fn index_json(entries: &[(&str, &str, &str)]) -> String {
        let items: Vec<String> = entries
            .iter()
            .map(|(id, date, status)| {
                format!(
                    r#"{{"id":"{id}","file":"{id}.json","date":"{date}","status":"{status}"}}"#
                )
            })
            .collect();
        format!(
            r#"{{"lastUpdated":"2026-02-07","items":[{}]}}"#,
            items.join(",")
        )
    }

    fn signal_json(id: &str, date: &str, status: &str) -> String {
        format!(
            r#"{{"id":"{id}","title":"Signal {id}","summary":"About {id}","source":"Auto-Detected",
                "detectedAt":"{date}T10:00:00Z","date":"{date}","status":"{status}"}}"#
        )
    }

    fn insight_json(id: &str, date: &str, extra: &str) -> String {
        format!(
            r#"{{"id":"{id}","title":"Insight {id}","author":"A","authorRole":"R",
                "excerpt":"E","paragraphs":["inline"],"date":"{date}","status":"published"{extra}}}"#
        )
    }

    fn signal_path(id: &str) -> String {
        format!("content/ai-signals/{}.json", id)
    }

    fn insight_path(id: &str) -> String {
        format!("content/expert-insights/{}.json", id)
    }

    fn scenario_source() -> MemorySource {
        MemorySource::new()
            .with(
                SIGNALS_INDEX,
                index_json(&[
                    ("1", "2026-02-06", "published"),
                    ("2", "2026-02-07", "draft"),
                    ("3", "2026-02-05", "published"),
                ]),
            )
            .with(signal_path("1"), signal_json("1", "2026-02-06", "published"))
            .with(signal_path("2"), signal_json("2", "2026-02-07", "draft"))
            .with(signal_path("3"), signal_json("3", "2026-02-05", "published"))
    }

    #[tokio::test]
    async fn test_published_items_newest_first() {
        let source = Arc::new(scenario_source());
        let repository = ContentRepository::new(source.clone());

        let signals: Vec<Signal> = repository
            .list_published(ContentKind::Signals, 5)
            .await
            .unwrap();

        let ids: Vec<&str> = signals.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
        // Drafts are never fetched
        assert!(!source.was_requested(&signal_path("2")));
    }

    #[tokio::test]
    async fn test_cap_limits_fetches() {
        let source = Arc::new(scenario_source());
        let repository = ContentRepository::new(source.clone());

        let signals: Vec<Signal> = repository
            .list_published(ContentKind::Signals, 1)
            .await
            .unwrap();

        assert_eq!(signals.len(), 1);
        assert_eq!(signals[0].id, "1");
        assert!(!source.was_requested(&signal_path("3")));
        // index + one body
        assert_eq!(source.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_partial_failure_keeps_successes() {
        let source = MemorySource::new()
            .with(
                SIGNALS_INDEX,
                index_json(&[
                    ("a", "2026-02-06", "published"),
                    ("b", "2026-02-05", "published"),
                    ("c", "2026-02-04", "published"),
                ]),
            )
            .with(signal_path("a"), signal_json("a", "2026-02-06", "published"))
            .with(signal_path("c"), "{ not json");
        let repository = ContentRepository::new(Arc::new(source));

        let signals: Vec<Signal> = repository
            .list_published(ContentKind::Signals, 5)
            .await
            .unwrap();
        let ids: Vec<&str> = signals.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["a"]);
    }

    #[tokio::test]
    async fn test_body_marked_draft_is_dropped() {
        let source = MemorySource::new()
            .with(SIGNALS_INDEX, index_json(&[("a", "2026-02-06", "published")]))
            .with(signal_path("a"), signal_json("a", "2026-02-06", "draft"));
        let repository = ContentRepository::new(Arc::new(source));

        let signals: Vec<Signal> = repository
            .list_published(ContentKind::Signals, 5)
            .await
            .unwrap();
        assert!(signals.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_index_status_is_skipped() {
        let source = Arc::new(
            MemorySource::new()
                .with(
                    SIGNALS_INDEX,
                    index_json(&[("1", "2026-02-06", "published"), ("2", "2026-02-07", "archived")]),
                )
                .with(signal_path("1"), signal_json("1", "2026-02-06", "published"))
                .with(signal_path("2"), signal_json("2", "2026-02-07", "published")),
        );
        let content = ContentLoader::new(source.clone()).load().await;

        let ids: Vec<&str> = content.signals.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["1"]);
        assert!(!source.was_requested(&signal_path("2")));
    }

    #[tokio::test]
    async fn test_index_without_last_updated() {
        let source = MemorySource::new()
            .with(
                SIGNALS_INDEX,
                r#"{"items":[{"id":"a","file":"a.json","date":"2026-02-06","status":"published"}]}"#,
            )
            .with(signal_path("a"), signal_json("a", "2026-02-06", "published"));
        let repository = ContentRepository::new(Arc::new(source));

        let signals: Vec<Signal> = repository
            .list_published(ContentKind::Signals, 5)
            .await
            .unwrap();
        assert_eq!(signals.len(), 1);
        assert_eq!(signals[0].id, "a");
    }

    #[tokio::test]
    async fn test_index_failure_is_error() {
        let repository = ContentRepository::new(Arc::new(MemorySource::new()));
        let result = repository
            .list_published::<Signal>(ContentKind::Signals, 5)
            .await;
        assert!(matches!(result, Err(ContentError::NotFound(_))));

        let repository = ContentRepository::new(Arc::new(
            MemorySource::new().with(SIGNALS_INDEX, "<html>"),
        ));
        let result = repository
            .list_published::<Signal>(ContentKind::Signals, 5)
            .await;
        assert!(matches!(result, Err(ContentError::Parse { .. })));
    }

    #[tokio::test]
    async fn test_all_bodies_fail_falls_back_without_error() {
        let source = MemorySource::new()
            .with(
                SIGNALS_INDEX,
                index_json(&[("x", "2026-02-06", "published"), ("y", "2026-02-05", "published")]),
            )
            .with(INSIGHTS_INDEX, index_json(&[("i", "2026-02-01", "published")]))
            .with(insight_path("i"), insight_json("i", "2026-02-01", ""));

        let content = ContentLoader::new(Arc::new(source)).load().await;

        assert_eq!(content.signals, default_signals());
        assert_eq!(content.insights.len(), 1);
        assert_eq!(content.insights[0].id, "i");
        assert!(content.error.is_none());
    }

    #[tokio::test]
    async fn test_index_failure_sets_error_and_uses_defaults() {
        let source = MemorySource::new()
            .with(INSIGHTS_INDEX, index_json(&[("i", "2026-02-01", "published")]))
            .with(insight_path("i"), insight_json("i", "2026-02-01", ""));

        let content = ContentLoader::new(Arc::new(source)).load().await;

        assert_eq!(content.signals, default_signals());
        // The other category is unaffected
        assert_eq!(content.insights[0].id, "i");
        assert_eq!(content.error.as_deref(), Some(LOAD_ERROR_MESSAGE));
    }

    #[tokio::test]
    async fn test_loader_respects_limits() {
        let source = scenario_source()
            .with(
                INSIGHTS_INDEX,
                index_json(&[("i1", "2026-02-01", "published"), ("i2", "2026-02-02", "published")]),
            )
            .with(insight_path("i1"), insight_json("i1", "2026-02-01", ""))
            .with(insight_path("i2"), insight_json("i2", "2026-02-02", ""));

        let content = ContentLoader::new(Arc::new(source))
            .with_limits(1, 1)
            .load()
            .await;

        assert_eq!(content.signals.len(), 1);
        assert_eq!(content.insights.len(), 1);
        assert_eq!(content.insights[0].id, "i2");
    }

    #[tokio::test]
    async fn test_markdown_resolution() {
        let source = MemorySource::new()
            .with(
                INSIGHTS_INDEX,
                index_json(&[("md", "2026-02-02", "published"), ("gone", "2026-02-01", "published")]),
            )
            .with(
                insight_path("md"),
                insight_json("md", "2026-02-02", r#","markdownFile":"md.md""#),
            )
            .with("content/expert-insights/md.md", "# Title\n\nBody")
            .with(
                insight_path("gone"),
                insight_json("gone", "2026-02-01", r#","markdownFile":"gone.md""#),
            );
        let repository = ContentRepository::new(Arc::new(source));

        let insights: Vec<Insight> = repository
            .list_published(ContentKind::Insights, 5)
            .await
            .unwrap();

        assert_eq!(insights.len(), 2);
        assert_eq!(insights[0].body, InsightBody::Markdown("# Title\n\nBody".to_string()));
        // Missing markdown keeps the inline body
        assert_eq!(
            insights[1].body,
            InsightBody::Paragraphs(vec!["inline".to_string()])
        );
    }
}
