// App module for menu_tui
// Handles application state and business logic

pub mod actions;
pub mod input;
pub mod screen;
pub mod state;

pub use input::handle_input;
pub use screen::{Navigation, Screen, ScreenTransitionError};
pub use state::{App, ManageFocus, Notice, NoticeKind};
