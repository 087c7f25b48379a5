pub mod modal_frame;
pub mod stack;

pub use modal_frame::{render_backdrop, render_panel_background, render_panel_header};
pub use stack::{render_stack, stack_height, StackItem};
