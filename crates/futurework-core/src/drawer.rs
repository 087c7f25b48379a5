//! Detail drawer state.
//!
//! The drawer shows one item at a time. Opening it remembers where focus
//! and page scroll were so closing can put both back exactly. Opening a
//! different item while already open swaps the content in place and keeps
//! the first saved values.

use crate::models::ContentItem;

/// Focusable controls inside the open drawer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawerFocus {
    #[default]
    Dismiss,
    Body,
}

impl DrawerFocus {
    pub fn toggle(self) -> Self {
        match self {
            Self::Dismiss => Self::Body,
            Self::Body => Self::Dismiss,
        }
    }
}

/// What to put back once the drawer closes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Restore<F> {
    pub focus: F,
    pub page_scroll: u16,
}

#[derive(Debug, Clone)]
struct OpenDrawer<F> {
    item: ContentItem,
    focus: DrawerFocus,
    body_scroll: u16,
    restore: Restore<F>,
}

/// Drawer state, generic over the host's focus type
#[derive(Debug, Clone)]
pub struct Drawer<F> {
    open: Option<OpenDrawer<F>>,
}

impl<F> Default for Drawer<F> {
    fn default() -> Self {
        Self { open: None }
    }
}

impl<F: Copy> Drawer<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn item(&self) -> Option<&ContentItem> {
        self.open.as_ref().map(|open| &open.item)
    }

    pub fn focus(&self) -> Option<DrawerFocus> {
        self.open.as_ref().map(|open| open.focus)
    }

    pub fn body_scroll(&self) -> u16 {
        self.open.as_ref().map_or(0, |open| open.body_scroll)
    }

    /// Show `item`, moving focus to the dismiss control.
    ///
    /// `current_focus` and `current_scroll` are only saved on the first open;
    /// while already open they are ignored.
    pub fn open(&mut self, item: ContentItem, current_focus: F, current_scroll: u16) {
        match self.open.as_mut() {
            Some(open) => {
                open.item = item;
                open.focus = DrawerFocus::Dismiss;
                open.body_scroll = 0;
            }
            None => {
                self.open = Some(OpenDrawer {
                    item,
                    focus: DrawerFocus::Dismiss,
                    body_scroll: 0,
                    restore: Restore {
                        focus: current_focus,
                        page_scroll: current_scroll,
                    },
                });
            }
        }
    }

    /// Close and hand back the saved focus and scroll. `None` if already closed.
    pub fn close(&mut self) -> Option<Restore<F>> {
        self.open.take().map(|open| open.restore)
    }

    pub fn cycle_focus(&mut self) {
        if let Some(open) = self.open.as_mut() {
            open.focus = open.focus.toggle();
        }
    }

    pub fn scroll_body(&mut self, delta: i32, max: u16) {
        if let Some(open) = self.open.as_mut() {
            let next = (open.body_scroll as i32 + delta).clamp(0, max as i32);
            open.body_scroll = next as u16;
        }
    }
}
