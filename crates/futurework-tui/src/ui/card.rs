pub const INDENT_UNIT: &str = "  ";
pub const SPACER: &str = "  ";
pub const BULLET_GLYPH: &str = "\u{25cf}";
pub const LIST_BULLET: &str = "\u{2022} ";
pub const META_SEPARATOR: &str = " \u{2022} ";
pub const SPARKLE: &str = "\u{2726} ";
pub const QUOTE_BAR: &str = "\u{2502} ";
pub const CLOSE_GLYPH: &str = "\u{2715}";
pub const PAUSE_GLYPH: &str = "\u{23f8}";
pub const PLAY_GLYPH: &str = "\u{25b6}";
pub const PREV_GLYPH: &str = "\u{2039}";
pub const NEXT_GLYPH: &str = "\u{203a}";
pub const ARROW_RIGHT: &str = "\u{2192}";
pub const SEARCH_GLYPH: &str = "\u{2315} ";

/// Progress segment cells
pub const SEGMENT_FULL: &str = "\u{2501}";
pub const SEGMENT_EMPTY: &str = "\u{2500}";

/// Skeleton placeholder fill
pub const SKELETON_FILL: &str = "\u{2591}";
