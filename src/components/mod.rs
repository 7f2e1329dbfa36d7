//! UI Components
//!
//! Reusable Leptos components.

mod basic_row;
mod list_screen;
mod menu_row;
mod refresh_control;
mod swipe_row;

pub use basic_row::BasicRow;
pub use list_screen::ListScreen;
pub use menu_row::MenuRow;
pub use refresh_control::RefreshControl;
pub use swipe_row::SwipeRow;
