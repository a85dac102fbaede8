//! Todo aggregate root and its validated text fields.

use super::{Deadline, Tag, TodoDomainError, TodoId, TodoListId, UserId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::fmt;

/// Non-empty todo title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoTitle(String);

impl TodoTitle {
    /// Creates a validated title.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::EmptyTitle`] when the value is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, TodoDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TodoDomainError::EmptyTitle);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TodoTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Non-empty todo description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoDescription(String);

impl TodoDescription {
    /// Creates a validated description.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::EmptyDescription`] when the value is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, TodoDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TodoDomainError::EmptyDescription);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the description as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TodoDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated fields for a todo that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    /// Todo title.
    pub title: TodoTitle,
    /// Todo description.
    pub description: TodoDescription,
    /// Author of the todo.
    pub author: UserId,
    /// List the todo belongs to.
    pub list_id: TodoListId,
    /// Completion deadline.
    pub deadline: Deadline,
}

/// Todo aggregate root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    id: TodoId,
    title: TodoTitle,
    description: TodoDescription,
    author: UserId,
    list_id: TodoListId,
    deadline: Deadline,
    created_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl Todo {
    /// Creates an open todo with a fresh identifier.
    #[must_use]
    pub fn new(new_todo: NewTodo, clock: &impl Clock) -> Self {
        Self {
            id: TodoId::new(),
            title: new_todo.title,
            description: new_todo.description,
            author: new_todo.author,
            list_id: new_todo.list_id,
            deadline: new_todo.deadline,
            created_at: clock.utc(),
            completed_at: None,
        }
    }

    /// Returns the todo identifier.
    #[must_use]
    pub const fn id(&self) -> TodoId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TodoTitle {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub const fn description(&self) -> &TodoDescription {
        &self.description
    }

    /// Returns the author.
    #[must_use]
    pub const fn author(&self) -> &UserId {
        &self.author
    }

    /// Returns the owning list.
    #[must_use]
    pub const fn list_id(&self) -> TodoListId {
        self.list_id
    }

    /// Returns the deadline.
    #[must_use]
    pub const fn deadline(&self) -> Deadline {
        self.deadline
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the completion timestamp, if completed.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns whether the todo has been completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Returns the hashtags found in the title and description.
    #[must_use]
    pub fn tags(&self) -> Vec<Tag> {
        let mut tags = Tag::extract_all(self.title.as_str());
        tags.extend(Tag::extract_all(self.description.as_str()));
        tags.sort();
        tags.dedup();
        tags
    }

    /// Returns whether the todo carries the given tag.
    #[must_use]
    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags().contains(tag)
    }

    /// Marks the todo as completed.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::AlreadyCompleted`] when the todo was
    /// completed earlier.
    pub fn complete(&mut self, clock: &impl Clock) -> Result<(), TodoDomainError> {
        if self.is_completed() {
            return Err(TodoDomainError::AlreadyCompleted(self.id));
        }
        self.completed_at = Some(clock.utc());
        Ok(())
    }
}
