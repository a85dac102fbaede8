//! Console views driving the interactive todo sessions.
//!
//! [`MainView`] is the entry menu; [`TodoView`] runs a session over one
//! list. Both delegate every storage call to the presenters and render all
//! presenter failures through [`report`], so an action failure never ends a
//! session.

mod display;
mod error;
mod main_view;
mod selection;
mod todo_view;

pub use display::DisplaySettings;
pub use error::{ViewError, report};
pub use main_view::{MAIN_MENU, MainAction, MainView};
pub use selection::SelectionTable;
pub use todo_view::{TODO_MENU, TodoAction, TodoView, todo_menu};

#[cfg(test)]
mod tests;
