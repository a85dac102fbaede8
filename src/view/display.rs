//! Text rendering of todos.

use crate::todo::domain::{DEFAULT_DEADLINE_FORMAT, Todo};

/// Presentation options shared by the views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplaySettings {
    deadline_format: String,
}

impl DisplaySettings {
    /// Creates settings with a `chrono` format string for deadlines.
    ///
    /// The format must already be validated; see
    /// [`crate::config::DisplayConfig`].
    #[must_use]
    pub fn new(deadline_format: impl Into<String>) -> Self {
        Self {
            deadline_format: deadline_format.into(),
        }
    }

    /// Full line: title, description, deadline.
    #[must_use]
    pub fn todo_line(&self, todo: &Todo) -> String {
        format!(
            "Title: {}, Description: {}, Deadline: {}",
            todo.title(),
            todo.description(),
            self.deadline(todo)
        )
    }

    /// Short line for deadline-ordered listings.
    #[must_use]
    pub fn deadline_line(&self, todo: &Todo) -> String {
        format!("Todo: {}, Deadline: {}", todo.title(), self.deadline(todo))
    }

    fn deadline(&self, todo: &Todo) -> String {
        todo.deadline().format(&self.deadline_format)
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self::new(DEFAULT_DEADLINE_FORMAT)
    }
}
