pub mod about;
pub mod carousel;
pub mod drawer;
pub mod footer;
pub mod hero;
pub mod stream;

pub use about::about_items;
pub use carousel::carousel_items;
pub use drawer::render_drawer;
pub use footer::footer_items;
pub use hero::hero_items;
pub use stream::{banner_items, column_items};
