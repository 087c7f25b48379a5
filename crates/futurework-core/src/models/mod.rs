pub mod dates;
pub mod index;
pub mod insight;
pub mod item;
pub mod signal;
pub mod slide;
pub mod status;

pub use dates::{format_long_date, format_long_date_time, parse_timestamp};
pub use index::{ContentIndex, ContentKind, IndexEntry};
pub use insight::{ContentBlock, Insight, InsightBody};
pub use item::ContentItem;
pub use signal::{DecisionHorizon, Signal, SignalCategory};
pub use slide::{Slide, SlideCategory, WHAT_IF_SLIDES};
pub use status::Status;
