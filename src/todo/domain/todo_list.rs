//! Read-only context records: todo lists and users.

use super::{TodoListId, UserId};

/// Named grouping of todos owned by a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoList {
    id: TodoListId,
    title: String,
    owner: UserId,
}

impl TodoList {
    /// Creates a list record.
    #[must_use]
    pub fn new(id: TodoListId, title: impl Into<String>, owner: UserId) -> Self {
        Self {
            id,
            title: title.into(),
            owner,
        }
    }

    /// Returns the list identifier.
    #[must_use]
    pub const fn id(&self) -> TodoListId {
        self.id
    }

    /// Returns the display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns whether `user` may add and delete todos in this list.
    #[must_use]
    pub fn is_owned_by(&self, user: &UserId) -> bool {
        &self.owner == user
    }
}

/// User on whose behalf a session runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: String,
}

impl User {
    /// Creates a user record.
    #[must_use]
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> &UserId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
