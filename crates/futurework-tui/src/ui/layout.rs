// Centralized layout constants and utilities for consistent UI across all sections
// All layout-related values should be defined here for maintainability

use ratatui::layout::Rect;

// =============================================================================
// PADDING CONSTANTS
// =============================================================================

/// Horizontal padding for page sections (left + right)
pub const CONTENT_PADDING_H: u16 = 2;

/// Horizontal padding inside the drawer panel
pub const DRAWER_PADDING_H: u16 = 3;

/// Widest the readable page content gets, in columns
pub const PAGE_MAX_WIDTH: u16 = 120;

/// Gap between the two stream columns
pub const COLUMN_GAP: u16 = 4;

/// Below this width the stream columns stack vertically
pub const TWO_COLUMN_MIN_WIDTH: u16 = 80;

// =============================================================================
// CHROME CONSTANTS
// =============================================================================

/// Key hint bar at the very bottom
pub const STATUSBAR_HEIGHT: u16 = 1;

/// Blank rows between page sections
pub const SECTION_GAP: u16 = 2;

// =============================================================================
// DRAWER CONSTANTS
// =============================================================================

/// Maximum drawer width
pub const DRAWER_MAX_WIDTH: u16 = 76;

/// Columns of backdrop always left visible to the left of the drawer
pub const DRAWER_MIN_BACKDROP: u16 = 4;

// =============================================================================
// LAYOUT HELPER FUNCTIONS
// =============================================================================

/// Apply horizontal padding to a Rect (reduces width and shifts x)
#[inline]
pub fn with_horizontal_padding(area: Rect, padding: u16) -> Rect {
    Rect {
        x: area.x + padding,
        y: area.y,
        width: area.width.saturating_sub(padding * 2),
        height: area.height,
    }
}

/// Width available to page content for a given terminal width
pub fn content_width(width: u16) -> u16 {
    width
        .saturating_sub(CONTENT_PADDING_H * 2)
        .min(PAGE_MAX_WIDTH)
}

/// Left offset that centers the content column
pub fn content_x(width: u16) -> u16 {
    width.saturating_sub(content_width(width)) / 2
}

/// Split content width into (left, right) column widths
pub fn column_widths(width: u16) -> Option<(u16, u16)> {
    if width < TWO_COLUMN_MIN_WIDTH {
        return None;
    }
    let usable = width.saturating_sub(COLUMN_GAP);
    let left = usable / 2;
    Some((left, usable - left))
}

/// Slide-out drawer area anchored to the right edge
pub fn drawer_area(area: Rect) -> Rect {
    let width = DRAWER_MAX_WIDTH.min(area.width.saturating_sub(DRAWER_MIN_BACKDROP));
    Rect {
        x: area.x + area.width.saturating_sub(width),
        y: area.y,
        width,
        height: area.height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_width_is_capped_and_centered() {
        assert_eq!(content_width(80), 76);
        assert_eq!(content_width(200), PAGE_MAX_WIDTH);
        assert_eq!(content_x(200), 40);
        assert_eq!(content_x(80), 2);
    }

    #[test]
    fn test_column_widths() {
        assert_eq!(column_widths(60), None);
        assert_eq!(column_widths(100), Some((48, 48)));
        assert_eq!(column_widths(101), Some((48, 49)));
    }

    #[test]
    fn test_drawer_area_hugs_right_edge() {
        let area = Rect::new(0, 0, 120, 40);
        let drawer = drawer_area(area);
        assert_eq!(drawer.width, DRAWER_MAX_WIDTH);
        assert_eq!(drawer.x + drawer.width, 120);

        let narrow = drawer_area(Rect::new(0, 0, 50, 20));
        assert_eq!(narrow.width, 46);
        assert_eq!(narrow.x, 4);
    }
}
