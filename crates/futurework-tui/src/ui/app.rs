use std::time::{Duration, Instant};

use futurework_core::constants::anchors;
use futurework_core::models::{ContentItem, ContentKind, Insight, Signal, Slide, WHAT_IF_SLIDES};
use futurework_core::{CarouselEngine, CoreConfig, Drawer, LoadedContent, StreamController};
use ratatui::layout::{Position, Rect};
use tracing::{debug, info, warn};

use crate::ui::layout;

/// Which part of the page has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Page,
    Carousel,
    Signals,
    Insights,
    About,
}

impl Focus {
    const ORDER: [Focus; 5] = [
        Focus::Page,
        Focus::Carousel,
        Focus::Signals,
        Focus::Insights,
        Focus::About,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    pub fn for_anchor(anchor: &str) -> Option<Self> {
        match anchor {
            anchors::AI_SIGNAL => Some(Self::Signals),
            anchors::EXPERT_INSIGHTS => Some(Self::Insights),
            anchors::ABOUT_PROJECT => Some(Self::About),
            _ => None,
        }
    }

    pub fn kind(self) -> Option<ContentKind> {
        match self {
            Self::Signals => Some(ContentKind::Signals),
            Self::Insights => Some(ContentKind::Insights),
            _ => None,
        }
    }

    pub fn section(self) -> Option<SectionId> {
        match self {
            Self::Page => None,
            Self::Carousel => Some(SectionId::Carousel),
            Self::Signals => Some(SectionId::Signals),
            Self::Insights => Some(SectionId::Insights),
            Self::About => Some(SectionId::About),
        }
    }
}

impl From<ContentKind> for Focus {
    fn from(kind: ContentKind) -> Self {
        match kind {
            ContentKind::Signals => Self::Signals,
            ContentKind::Insights => Self::Insights,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// Typing into the focused column's search field
    Search,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    Hero,
    Carousel,
    Signals,
    Insights,
    About,
    Footer,
}

/// Clickable page element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// Card at this index of the column's visible list
    Card(ContentKind, usize),
    ShowMore(ContentKind),
}

/// Where everything landed on the last render, in page coordinates
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    pub sections: Vec<(SectionId, Rect)>,
    pub hits: Vec<(Rect, HitTarget)>,
    pub total_height: u16,
}

impl PageLayout {
    pub fn section(&self, id: SectionId) -> Option<Rect> {
        self.sections
            .iter()
            .find(|(section, _)| *section == id)
            .map(|(_, rect)| *rect)
    }

    pub fn hit_at(&self, x: u16, y: u16) -> Option<HitTarget> {
        self.hits
            .iter()
            .find(|(rect, _)| rect.contains(Position::new(x, y)))
            .map(|(_, target)| *target)
    }

    pub fn hit_rect(&self, target: HitTarget) -> Option<Rect> {
        self.hits
            .iter()
            .find(|(_, t)| *t == target)
            .map(|(rect, _)| *rect)
    }
}

pub struct App {
    pub running: bool,
    pub focus: Focus,
    pub input_mode: InputMode,

    /// First page row shown at the top of the page area
    pub page_scroll: u16,
    /// Screen area the page was last drawn into
    pub page_area: Rect,
    /// Whole frame on the last render
    pub screen: Rect,
    pub layout: PageLayout,
    /// Scroll the focused card into view on the next render
    pub reveal_cursor: bool,

    pub slides: &'static [Slide],
    pub carousel: CarouselEngine,
    hovering_carousel: bool,

    pub signals: StreamController<Signal>,
    pub insights: StreamController<Insight>,
    pub signal_cursor: usize,
    pub insight_cursor: usize,

    pub drawer: Drawer<Focus>,
    /// Largest useful drawer body scroll, measured on render
    pub drawer_body_max: u16,

    pub loading: bool,
    pub load_error: Option<String>,
}

impl App {
    pub fn new(slide_duration: Duration, reduced_motion: bool, now: Instant) -> Self {
        let slides: &'static [Slide] = &WHAT_IF_SLIDES;
        Self {
            running: true,
            focus: Focus::Page,
            input_mode: InputMode::Normal,
            page_scroll: 0,
            page_area: Rect::default(),
            screen: Rect::default(),
            layout: PageLayout::default(),
            reveal_cursor: false,
            slides,
            carousel: CarouselEngine::new(slides.len(), slide_duration, reduced_motion, now),
            hovering_carousel: false,
            signals: StreamController::new(),
            insights: StreamController::new(),
            signal_cursor: 0,
            insight_cursor: 0,
            drawer: Drawer::new(),
            drawer_body_max: 0,
            loading: true,
            load_error: None,
        }
    }

    pub fn from_config(config: &CoreConfig, now: Instant) -> Self {
        Self::new(config.slide_duration(), config.reduced_motion, now)
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn apply_content(&mut self, content: LoadedContent) {
        info!(
            "Content ready: {} signals, {} insights{}",
            content.signals.len(),
            content.insights.len(),
            if content.error.is_some() { " (with fallback)" } else { "" }
        );
        self.signals.set_items(content.signals);
        self.insights.set_items(content.insights);
        self.load_error = content.error;
        self.loading = false;
        self.clamp_cursors();
    }

    // ===== Carousel =====

    pub fn active_slide(&self) -> &Slide {
        &self.slides[self.carousel.active_index().min(self.slides.len() - 1)]
    }

    pub fn tick(&mut self, now: Instant) -> bool {
        let advanced = self.carousel.tick(now);
        if advanced {
            debug!("Carousel advanced to slide {}", self.carousel.active_index());
        }
        advanced
    }

    pub fn next_slide(&mut self, now: Instant) {
        self.carousel.next(now);
    }

    pub fn prev_slide(&mut self, now: Instant) {
        self.carousel.prev(now);
    }

    pub fn go_to_slide(&mut self, index: usize, now: Instant) {
        if let Err(e) = self.carousel.go_to(index, now) {
            warn!("{}", e);
        }
    }

    pub fn toggle_autoplay(&mut self, now: Instant) {
        if self.carousel.is_paused() {
            self.carousel.resume(now);
        } else {
            self.carousel.pause(now);
        }
    }

    /// Pointer entering the carousel pauses it, leaving resumes it
    pub fn set_carousel_hover(&mut self, hovering: bool, now: Instant) {
        if hovering == self.hovering_carousel {
            return;
        }
        self.hovering_carousel = hovering;
        if hovering {
            self.carousel.pause(now);
        } else {
            self.carousel.resume(now);
        }
    }

    pub fn is_hovering_carousel(&self) -> bool {
        self.hovering_carousel
    }

    pub fn pointer_moved(&mut self, column: u16, row: u16, now: Instant) {
        let over = !self.drawer.is_open()
            && self
                .page_position(column, row)
                .zip(self.layout.section(SectionId::Carousel))
                .is_some_and(|((x, y), rect)| rect.contains(Position::new(x, y)));
        self.set_carousel_hover(over, now);
    }

    /// Jump to the active slide's call-to-action target
    pub fn activate_slide_cta(&mut self, now: Instant) {
        let target = self.active_slide().cta_target;
        self.scroll_to_anchor(target, now);
    }

    // ===== Focus & scrolling =====

    /// Focus moving onto the carousel pauses it, moving off resumes it
    pub fn set_focus(&mut self, focus: Focus, now: Instant) {
        if focus == self.focus {
            return;
        }
        if self.focus == Focus::Carousel {
            self.carousel.resume(now);
        }
        if focus == Focus::Carousel {
            self.carousel.pause(now);
        }
        self.focus = focus;
        self.input_mode = InputMode::Normal;
    }

    pub fn focus_next(&mut self, now: Instant) {
        self.set_focus(self.focus.next(), now);
        self.reveal_focus();
    }

    pub fn focus_prev(&mut self, now: Instant) {
        self.set_focus(self.focus.prev(), now);
        self.reveal_focus();
    }

    fn reveal_focus(&mut self) {
        if self.focus.kind().is_some() {
            self.reveal_cursor = true;
            return;
        }
        if let Some(rect) = self.focus.section().and_then(|s| self.layout.section(s)) {
            let viewport = self.page_area.height;
            if rect.y < self.page_scroll || rect.y >= self.page_scroll.saturating_add(viewport) {
                self.page_scroll = rect.y.min(self.max_scroll());
            }
        }
    }

    pub fn scroll_to_anchor(&mut self, anchor: &str, now: Instant) {
        let Some(focus) = Focus::for_anchor(anchor) else {
            warn!("Unknown section anchor {}", anchor);
            return;
        };
        if let Some(rect) = focus.section().and_then(|s| self.layout.section(s)) {
            self.page_scroll = rect.y.min(self.max_scroll());
        }
        self.set_focus(focus, now);
    }

    pub fn max_scroll(&self) -> u16 {
        self.layout
            .total_height
            .saturating_sub(self.page_area.height)
    }

    /// Background scrolling is locked while the drawer is open
    pub fn scroll_page(&mut self, delta: i32) {
        if self.drawer.is_open() {
            return;
        }
        let next = (self.page_scroll as i32 + delta).clamp(0, self.max_scroll() as i32);
        self.page_scroll = next as u16;
    }

    pub fn scroll_to_top(&mut self) {
        if !self.drawer.is_open() {
            self.page_scroll = 0;
        }
    }

    pub fn scroll_to_bottom(&mut self) {
        if !self.drawer.is_open() {
            self.page_scroll = self.max_scroll();
        }
    }

    /// Screen cell to page coordinates, if it lies on the page
    fn page_position(&self, column: u16, row: u16) -> Option<(u16, u16)> {
        if !self.page_area.contains(Position::new(column, row)) {
            return None;
        }
        Some((
            column - self.page_area.x,
            row - self.page_area.y + self.page_scroll,
        ))
    }

    // ===== Content stream =====

    pub fn cursor(&self, kind: ContentKind) -> usize {
        match kind {
            ContentKind::Signals => self.signal_cursor,
            ContentKind::Insights => self.insight_cursor,
        }
    }

    fn cursor_mut(&mut self, kind: ContentKind) -> &mut usize {
        match kind {
            ContentKind::Signals => &mut self.signal_cursor,
            ContentKind::Insights => &mut self.insight_cursor,
        }
    }

    pub fn visible_len(&self, kind: ContentKind) -> usize {
        match kind {
            ContentKind::Signals => self.signals.view().len(),
            ContentKind::Insights => self.insights.view().len(),
        }
    }

    fn clamp_cursors(&mut self) {
        for kind in [ContentKind::Signals, ContentKind::Insights] {
            let max = self.visible_len(kind).saturating_sub(1);
            let cursor = self.cursor_mut(kind);
            *cursor = (*cursor).min(max);
        }
    }

    pub fn move_cursor(&mut self, delta: i32) {
        let Some(kind) = self.focus.kind() else {
            return;
        };
        let len = self.visible_len(kind);
        if len == 0 {
            return;
        }
        let cursor = self.cursor_mut(kind);
        *cursor = (*cursor as i32 + delta).clamp(0, len as i32 - 1) as usize;
        self.reveal_cursor = true;
    }

    pub fn query(&self, kind: ContentKind) -> &str {
        match kind {
            ContentKind::Signals => self.signals.query(),
            ContentKind::Insights => self.insights.query(),
        }
    }

    fn set_query(&mut self, kind: ContentKind, query: String) {
        match kind {
            ContentKind::Signals => self.signals.set_query(query),
            ContentKind::Insights => self.insights.set_query(query),
        }
        *self.cursor_mut(kind) = 0;
    }

    pub fn start_search(&mut self) {
        if self.focus.kind().is_some() {
            self.input_mode = InputMode::Search;
        }
    }

    pub fn end_search(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn push_search_char(&mut self, c: char) {
        if let Some(kind) = self.focus.kind() {
            let mut query = self.query(kind).to_string();
            query.push(c);
            self.set_query(kind, query);
        }
    }

    pub fn pop_search_char(&mut self) {
        if let Some(kind) = self.focus.kind() {
            let mut query = self.query(kind).to_string();
            query.pop();
            self.set_query(kind, query);
        }
    }

    pub fn clear_search(&mut self) {
        if let Some(kind) = self.focus.kind() {
            self.set_query(kind, String::new());
        }
    }

    /// Insights have no categories, so this only acts on the signal column
    pub fn cycle_category(&mut self) {
        if self.focus == Focus::Signals {
            self.signals.cycle_category();
            self.signal_cursor = 0;
        }
    }

    pub fn toggle_sort_field(&mut self) {
        match self.focus {
            Focus::Signals => self.signals.set_sort_field(self.signals.sort_field().toggle()),
            Focus::Insights => self.insights.set_sort_field(self.insights.sort_field().toggle()),
            _ => {}
        }
    }

    pub fn toggle_sort_order(&mut self) {
        match self.focus {
            Focus::Signals => self.signals.toggle_sort_order(),
            Focus::Insights => self.insights.toggle_sort_order(),
            _ => {}
        }
    }

    pub fn show_more(&mut self, kind: ContentKind) {
        match kind {
            ContentKind::Signals => self.signals.show_more(),
            ContentKind::Insights => self.insights.show_more(),
        }
    }

    // ===== Drawer =====

    fn item_at(&self, kind: ContentKind, index: usize) -> Option<ContentItem> {
        match kind {
            ContentKind::Signals => self.signals.view().get(index).map(|s| (*s).clone().into()),
            ContentKind::Insights => self.insights.view().get(index).map(|i| (*i).clone().into()),
        }
    }

    pub fn open_item(&mut self, kind: ContentKind, index: usize) {
        let Some(item) = self.item_at(kind, index) else {
            return;
        };
        match kind {
            ContentKind::Signals => {
                self.signals.select(item.id());
            }
            ContentKind::Insights => {
                self.insights.select(item.id());
            }
        }
        debug!("Opening {} in drawer", item.id());
        self.input_mode = InputMode::Normal;
        self.drawer.open(item, self.focus, self.page_scroll);
    }

    pub fn open_selected(&mut self) {
        if let Some(kind) = self.focus.kind() {
            self.open_item(kind, self.cursor(kind));
        }
    }

    /// Close the drawer and put focus and page scroll back where they were
    pub fn close_drawer(&mut self) {
        if let Some(restore) = self.drawer.close() {
            self.page_scroll = restore.page_scroll;
            self.focus = restore.focus;
            self.signals.clear_selection();
            self.insights.clear_selection();
        }
    }

    pub fn drawer_area(&self) -> Rect {
        layout::drawer_area(self.screen)
    }

    pub fn scroll_drawer(&mut self, delta: i32) {
        self.drawer.scroll_body(delta, self.drawer_body_max);
    }

    /// Left click. A click outside the open drawer is a backdrop click.
    pub fn click(&mut self, column: u16, row: u16, now: Instant) {
        if self.drawer.is_open() {
            if !self.drawer_area().contains(Position::new(column, row)) {
                self.close_drawer();
            }
            return;
        }

        let Some((x, y)) = self.page_position(column, row) else {
            return;
        };
        match self.layout.hit_at(x, y) {
            Some(HitTarget::Card(kind, index)) => {
                self.set_focus(kind.into(), now);
                *self.cursor_mut(kind) = index;
                self.open_item(kind, index);
            }
            Some(HitTarget::ShowMore(kind)) => {
                self.set_focus(kind.into(), now);
                self.show_more(kind);
            }
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futurework_core::DrawerFocus;

    const SLIDE: Duration = Duration::from_millis(9000);

    fn app(now: Instant) -> App {
        let mut app = App::new(SLIDE, false, now);
        app.apply_content(LoadedContent::bundled());
        app.screen = Rect::new(0, 0, 100, 40);
        app.page_area = Rect::new(0, 0, 100, 39);
        app.layout = PageLayout {
            sections: vec![
                (SectionId::Hero, Rect::new(0, 0, 100, 10)),
                (SectionId::Carousel, Rect::new(0, 12, 100, 12)),
                (SectionId::Signals, Rect::new(0, 26, 48, 40)),
                (SectionId::Insights, Rect::new(52, 26, 48, 40)),
                (SectionId::About, Rect::new(0, 70, 100, 30)),
                (SectionId::Footer, Rect::new(0, 102, 100, 3)),
            ],
            hits: vec![
                (Rect::new(2, 30, 44, 5), HitTarget::Card(ContentKind::Signals, 0)),
                (Rect::new(2, 36, 44, 5), HitTarget::Card(ContentKind::Signals, 1)),
                (Rect::new(54, 30, 44, 6), HitTarget::Card(ContentKind::Insights, 0)),
            ],
            total_height: 105,
        };
        app
    }

    #[test]
    fn test_focus_cycle_wraps() {
        assert_eq!(Focus::Page.next(), Focus::Carousel);
        assert_eq!(Focus::About.next(), Focus::Page);
        assert_eq!(Focus::Page.prev(), Focus::About);
    }

    #[test]
    fn test_carousel_focus_pauses_and_blur_resumes() {
        let t0 = Instant::now();
        let mut app = app(t0);
        app.set_focus(Focus::Carousel, t0 + Duration::from_secs(2));
        assert!(app.carousel.is_paused());

        app.set_focus(Focus::Signals, t0 + Duration::from_secs(20));
        assert!(!app.carousel.is_paused());
        assert_eq!(app.carousel.deadline(), Some(t0 + Duration::from_secs(27)));
    }

    #[test]
    fn test_hover_pauses_only_over_carousel() {
        let t0 = Instant::now();
        let mut app = app(t0);

        app.pointer_moved(10, 5, t0);
        assert!(!app.carousel.is_paused());

        app.pointer_moved(10, 15, t0);
        assert!(app.is_hovering_carousel());
        assert!(app.carousel.is_paused());

        // Still over the carousel after scrolling the pointer row onto it
        app.page_scroll = 5;
        app.pointer_moved(10, 8, t0);
        assert!(app.carousel.is_paused());

        app.pointer_moved(10, 30, t0);
        assert!(!app.carousel.is_paused());
    }

    #[test]
    fn test_cta_scrolls_to_section_and_focuses_it() {
        let t0 = Instant::now();
        let mut app = app(t0);
        app.set_focus(Focus::Carousel, t0);

        // Slide 1 points at expert insights
        app.activate_slide_cta(t0);
        assert_eq!(app.focus, Focus::Insights);
        assert_eq!(app.page_scroll, 26);
        assert!(!app.carousel.is_paused());

        app.go_to_slide(2, t0);
        app.activate_slide_cta(t0);
        assert_eq!(app.focus, Focus::About);
        assert_eq!(app.page_scroll, app.max_scroll());
    }

    #[test]
    fn test_go_to_slide_out_of_range_is_ignored() {
        let t0 = Instant::now();
        let mut app = app(t0);
        app.go_to_slide(1, t0);
        app.go_to_slide(7, t0);
        assert_eq!(app.carousel.active_index(), 1);
    }

    #[test]
    fn test_drawer_locks_and_restores_scroll() {
        let t0 = Instant::now();
        let mut app = app(t0);
        app.set_focus(Focus::Signals, t0);
        app.page_scroll = 30;

        app.open_selected();
        assert!(app.drawer.is_open());
        assert_eq!(app.drawer.focus(), Some(DrawerFocus::Dismiss));
        assert_eq!(app.signals.active_id(), Some("default-1"));

        app.scroll_page(10);
        app.scroll_to_bottom();
        assert_eq!(app.page_scroll, 30);

        app.close_drawer();
        assert!(!app.drawer.is_open());
        assert_eq!(app.page_scroll, 30);
        assert_eq!(app.focus, Focus::Signals);
        assert!(app.signals.active_id().is_none());
    }

    #[test]
    fn test_reopening_replaces_content_without_closing() {
        let t0 = Instant::now();
        let mut app = app(t0);
        app.set_focus(Focus::Signals, t0);
        app.page_scroll = 12;
        app.open_item(ContentKind::Signals, 0);
        app.open_item(ContentKind::Insights, 1);

        assert!(app.drawer.is_open());
        assert_eq!(app.drawer.item().map(|i| i.id()), Some("default-code-review"));

        app.close_drawer();
        assert_eq!(app.page_scroll, 12);
        assert_eq!(app.focus, Focus::Signals);
    }

    #[test]
    fn test_click_card_opens_and_backdrop_closes() {
        let t0 = Instant::now();
        let mut app = app(t0);
        app.page_scroll = 20;

        // Row 17 on screen is page row 37: second signal card
        app.click(10, 17, t0);
        assert!(app.drawer.is_open());
        assert_eq!(app.focus, Focus::Signals);
        assert_eq!(app.signal_cursor, 1);
        assert_eq!(app.drawer.item().map(|i| i.id()), Some("default-2"));

        // Inside the drawer panel: stays open
        let drawer = app.drawer_area();
        app.click(drawer.x + 1, 5, t0);
        assert!(app.drawer.is_open());

        // Backdrop
        app.click(0, 5, t0);
        assert!(!app.drawer.is_open());
        assert_eq!(app.page_scroll, 20);
    }

    #[test]
    fn test_search_editing_updates_query() {
        let t0 = Instant::now();
        let mut app = app(t0);
        app.start_search();
        assert_eq!(app.input_mode, InputMode::Normal, "no column focused");

        app.set_focus(Focus::Insights, t0);
        app.start_search();
        assert_eq!(app.input_mode, InputMode::Search);
        for c in "empathyx".chars() {
            app.push_search_char(c);
        }
        assert_eq!(app.visible_len(ContentKind::Insights), 0);
        app.pop_search_char();
        assert_eq!(app.query(ContentKind::Insights), "empathy");
        assert_eq!(app.visible_len(ContentKind::Insights), 1);

        app.clear_search();
        assert_eq!(app.visible_len(ContentKind::Insights), 2);
    }

    #[test]
    fn test_category_cycle_only_for_signals() {
        let t0 = Instant::now();
        let mut app = app(t0);
        app.set_focus(Focus::Insights, t0);
        app.cycle_category();
        assert!(app.signals.category().is_none());

        app.set_focus(Focus::Signals, t0);
        app.signal_cursor = 2;
        app.cycle_category();
        assert!(app.signals.category().is_some());
        assert_eq!(app.signal_cursor, 0);
    }

    #[test]
    fn test_move_cursor_is_clamped() {
        let t0 = Instant::now();
        let mut app = app(t0);
        app.set_focus(Focus::Signals, t0);
        app.move_cursor(-1);
        assert_eq!(app.signal_cursor, 0);
        app.move_cursor(10);
        assert_eq!(app.signal_cursor, 2);
        assert!(app.reveal_cursor);
    }

    #[test]
    fn test_content_loading_state() {
        let t0 = Instant::now();
        let mut app = App::new(SLIDE, false, t0);
        assert!(app.loading);
        app.apply_content(LoadedContent {
            error: Some("Some content could not be loaded. Showing cached content.".to_string()),
            ..LoadedContent::bundled()
        });
        assert!(!app.loading);
        assert!(app.load_error.is_some());
        assert_eq!(app.visible_len(ContentKind::Signals), 3);
    }
}
