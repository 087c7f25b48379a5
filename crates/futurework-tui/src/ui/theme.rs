// Centralized theme system for consistent UI styling
// All colors and styles are defined here - edit this file to change the look

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// COLOR PALETTE - Midnight background with gold and cyan highlights
// =============================================================================

/// App background - midnight, almost black
pub const BG_APP: Color = Color::Rgb(5, 10, 20);

/// Card background - subtle lift from midnight
pub const BG_CARD: Color = Color::Rgb(14, 20, 32);

/// Selected card background
pub const BG_SELECTED: Color = Color::Rgb(24, 34, 52);

/// Carousel panel background
pub const BG_PANEL: Color = Color::Rgb(16, 22, 36);

/// Drawer panel background
pub const BG_DRAWER: Color = Color::Rgb(8, 14, 26);

/// Backdrop tint behind the drawer
pub const BG_BACKDROP: Color = Color::Rgb(0, 0, 0);

/// Search input background
pub const BG_INPUT: Color = Color::Rgb(10, 16, 28);

// -----------------------------------------------------------------------------
// Text Colors
// -----------------------------------------------------------------------------

/// Primary text - off-white for readability
pub const TEXT_PRIMARY: Color = Color::Rgb(229, 231, 235);

/// Body copy
pub const TEXT_BODY: Color = Color::Rgb(209, 213, 219);

/// Secondary/muted text
pub const TEXT_MUTED: Color = Color::Rgb(156, 163, 175);

/// Dimmed text for hints, placeholders
pub const TEXT_DIM: Color = Color::Rgb(107, 114, 128);

// -----------------------------------------------------------------------------
// Accent Colors
// -----------------------------------------------------------------------------

/// Signals - hologram cyan
pub const ACCENT_CYAN: Color = Color::Rgb(34, 211, 238);

/// Insights and headings - neon gold
pub const ACCENT_GOLD: Color = Color::Rgb(245, 158, 11);

/// Electric blue for secondary chips
pub const ACCENT_BLUE: Color = Color::Rgb(14, 165, 233);

/// Recommended actions
pub const ACCENT_SUCCESS: Color = Color::Rgb(52, 211, 153);

/// Risks and the load error banner
pub const ACCENT_WARNING: Color = Color::Rgb(251, 191, 36);

// -----------------------------------------------------------------------------
// Border/Indicator Colors
// -----------------------------------------------------------------------------

pub const BORDER_ACTIVE: Color = Color::Rgb(120, 130, 150);

pub const BORDER_INACTIVE: Color = Color::Rgb(45, 55, 72);

/// Progress segment, unfilled
pub const PROGRESS_EMPTY: Color = Color::Rgb(55, 65, 81);

/// Skeleton placeholder blocks
pub const SKELETON: Color = Color::Rgb(31, 41, 55);

// =============================================================================
// STYLE HELPERS
// =============================================================================

pub fn text_primary() -> Style {
    Style::default().fg(TEXT_PRIMARY)
}

pub fn text_body() -> Style {
    Style::default().fg(TEXT_BODY)
}

pub fn text_muted() -> Style {
    Style::default().fg(TEXT_MUTED)
}

pub fn text_dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn title() -> Style {
    Style::default()
        .fg(TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

/// Uppercase section eyebrow labels ("STRATEGIC PROVOCATIONS")
pub fn eyebrow(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

pub fn chip(color: Color) -> Style {
    Style::default().fg(color).bg(BG_CARD)
}

pub fn key_hint() -> Style {
    Style::default()
        .fg(ACCENT_GOLD)
        .add_modifier(Modifier::BOLD)
}

pub fn link() -> Style {
    Style::default()
        .fg(ACCENT_BLUE)
        .add_modifier(Modifier::UNDERLINED)
}

/// Focused interactive control
pub fn focused(color: Color) -> Style {
    Style::default()
        .fg(BG_APP)
        .bg(color)
        .add_modifier(Modifier::BOLD)
}

pub fn border(active: bool) -> Style {
    if active {
        Style::default().fg(BORDER_ACTIVE)
    } else {
        Style::default().fg(BORDER_INACTIVE)
    }
}
