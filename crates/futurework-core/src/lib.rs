pub mod carousel;
pub mod config;
pub mod constants;
pub mod defaults;
pub mod drawer;
pub mod loader;
pub mod models;
pub mod search;
pub mod source;
pub mod stream;
pub mod tracing_setup;

pub use carousel::{CarouselEngine, CarouselError, PlayState};
pub use config::{ConfigError, ContentSourceConfig, CoreConfig};
pub use drawer::{Drawer, DrawerFocus, Restore};
pub use loader::{ContentLoader, ContentRepository, LoadedContent};
pub use source::{ContentError, ContentSource};
pub use stream::{SortField, SortOrder, StreamController, StreamItem};
