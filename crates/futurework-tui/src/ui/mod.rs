pub mod app;
pub mod card;
pub mod components;
pub mod format;
pub mod layout;
pub mod markdown;
pub mod page;
pub mod terminal;
pub mod theme;
pub mod views;

pub use app::{App, Focus, InputMode};
pub use terminal::{init as init_terminal, restore as restore_terminal, Tui};
