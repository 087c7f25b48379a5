//! Content stream: a filtered, searched, sorted and paginated view over a
//! loaded item list.
//!
//! The view is always derived from the base list plus the current control
//! values, so changing one control never loses information another one
//! needs. Lists are small (tens of items), so everything is recomputed on
//! each call.

use std::fmt;

use crate::constants::{STREAM_PAGE_SIZE, STREAM_PAGE_STEP};
use crate::models::{parse_timestamp, Insight, Signal, SignalCategory};
use crate::search::{any_field_contains, normalize_query};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    /// Display date
    #[default]
    Date,
    /// Scanning date
    DetectedAt,
}

impl SortField {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Date => "Date",
            Self::DetectedAt => "Scanning date",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Self::Date => Self::DetectedAt,
            Self::DetectedAt => Self::Date,
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

impl SortOrder {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ascending => "Oldest first",
            Self::Descending => "Newest first",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// What the stream needs to know about an item
pub trait StreamItem {
    fn id(&self) -> &str;
    fn title(&self) -> &str;
    /// Summary for signals, excerpt for insights
    fn summary(&self) -> &str;
    fn category(&self) -> Option<SignalCategory> {
        None
    }
    /// Raw date string for the given sort field
    fn date_value(&self, field: SortField) -> &str;
}

impl StreamItem for Signal {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn summary(&self) -> &str {
        &self.summary
    }

    fn category(&self) -> Option<SignalCategory> {
        self.category
    }

    fn date_value(&self, field: SortField) -> &str {
        match field {
            SortField::Date => &self.date,
            SortField::DetectedAt => &self.detected_at,
        }
    }
}

impl StreamItem for Insight {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn summary(&self) -> &str {
        &self.excerpt
    }

    // Insights have no scanning date
    fn date_value(&self, _field: SortField) -> &str {
        &self.date
    }
}

#[derive(Debug, Clone)]
pub struct StreamController<T> {
    items: Vec<T>,
    category: Option<SignalCategory>,
    query: String,
    normalized_query: String,
    sort_field: SortField,
    sort_order: SortOrder,
    page_size: usize,
    page_step: usize,
    visible: usize,
    active_id: Option<String>,
}

impl<T: StreamItem> Default for StreamController<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StreamItem> StreamController<T> {
    pub fn new() -> Self {
        Self::with_paging(STREAM_PAGE_SIZE, STREAM_PAGE_STEP)
    }

    pub fn with_paging(page_size: usize, page_step: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            items: Vec::new(),
            category: None,
            query: String::new(),
            normalized_query: String::new(),
            sort_field: SortField::default(),
            sort_order: SortOrder::default(),
            page_size,
            page_step: page_step.max(1),
            visible: page_size,
            active_id: None,
        }
    }

    /// Replace the base list. Controls and the visible count are kept.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        if let Some(id) = &self.active_id {
            if !self.items.iter().any(|item| item.id() == id) {
                self.active_id = None;
            }
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn category(&self) -> Option<SignalCategory> {
        self.category
    }

    /// Changing the category resets the visible count to one page
    pub fn set_category(&mut self, category: Option<SignalCategory>) {
        if self.category != category {
            self.category = category;
            self.visible = self.page_size;
        }
    }

    pub fn cycle_category(&mut self) {
        self.set_category(SignalCategory::cycle_next(self.category));
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.normalized_query = normalize_query(&self.query);
    }

    pub fn sort_field(&self) -> SortField {
        self.sort_field
    }

    pub fn set_sort_field(&mut self, field: SortField) {
        self.sort_field = field;
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.sort_order = order;
    }

    pub fn toggle_sort_order(&mut self) {
        self.sort_order = self.sort_order.toggle();
    }

    pub fn show_more(&mut self) {
        self.visible = self.visible.saturating_add(self.page_step);
    }

    pub fn visible_count(&self) -> usize {
        self.visible
    }

    fn matches(&self, item: &T) -> bool {
        if let Some(category) = self.category {
            if item.category() != Some(category) {
                return false;
            }
        }
        any_field_contains(&[item.title(), item.summary()], &self.normalized_query)
    }

    /// Every matching item, sorted. Unparseable dates sort as the oldest.
    pub fn filtered(&self) -> Vec<&T> {
        let mut matching: Vec<(i64, &T)> = self
            .items
            .iter()
            .filter(|item| self.matches(item))
            .map(|item| {
                let key = parse_timestamp(item.date_value(self.sort_field)).unwrap_or(i64::MIN);
                (key, item)
            })
            .collect();

        match self.sort_order {
            SortOrder::Ascending => matching.sort_by(|a, b| a.0.cmp(&b.0)),
            SortOrder::Descending => matching.sort_by(|a, b| b.0.cmp(&a.0)),
        }

        matching.into_iter().map(|(_, item)| item).collect()
    }

    /// The currently revealed page of matching items
    pub fn view(&self) -> Vec<&T> {
        let mut items = self.filtered();
        items.truncate(self.visible);
        items
    }

    pub fn matching_count(&self) -> usize {
        self.items.iter().filter(|item| self.matches(item)).count()
    }

    pub fn has_more(&self) -> bool {
        self.matching_count() > self.visible
    }

    /// Mark an item as active for the drawer. The list is not touched.
    pub fn select(&mut self, id: &str) -> Option<&T> {
        let item = self.items.iter().find(|item| item.id() == id)?;
        self.active_id = Some(id.to_string());
        Some(item)
    }

    pub fn clear_selection(&mut self) {
        self.active_id = None;
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    pub fn active_item(&self) -> Option<&T> {
        let id = self.active_id.as_deref()?;
        self.items.iter().find(|item| item.id() == id)
    }
}
