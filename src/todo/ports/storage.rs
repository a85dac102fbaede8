//! Storage port for todo persistence and queries.

use crate::todo::domain::{Tag, Todo, TodoId, TodoListId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for todo storage operations.
pub type TodoStorageResult<T> = Result<T, TodoStorageError>;

/// Todo persistence contract.
///
/// Collections are returned in storage order; callers that need a
/// particular order sort them.
#[async_trait]
pub trait TodoStorage: Send + Sync {
    /// Stores a new todo.
    ///
    /// # Errors
    ///
    /// Returns [`TodoStorageError::DuplicateTodo`] when the identifier
    /// already exists.
    async fn store(&self, todo: &Todo) -> TodoStorageResult<()>;

    /// Persists changes to an existing todo.
    ///
    /// # Errors
    ///
    /// Returns [`TodoStorageError::NotFound`] when the todo does not exist.
    async fn update(&self, todo: &Todo) -> TodoStorageResult<()>;

    /// Removes a todo.
    ///
    /// # Errors
    ///
    /// Returns [`TodoStorageError::NotFound`] when the todo does not exist.
    async fn delete(&self, id: TodoId) -> TodoStorageResult<()>;

    /// Finds a todo by identifier.
    ///
    /// Returns `None` when the todo does not exist.
    async fn find_by_id(&self, id: TodoId) -> TodoStorageResult<Option<Todo>>;

    /// Returns the todos of one list.
    async fn find_by_list(&self, list_id: TodoListId) -> TodoStorageResult<Vec<Todo>>;

    /// Returns every stored todo.
    async fn find_all(&self) -> TodoStorageResult<Vec<Todo>>;

    /// Returns the todos carrying `tag`.
    async fn find_by_tag(&self, tag: &Tag) -> TodoStorageResult<Vec<Todo>>;

    /// Returns the completed todos.
    async fn find_completed(&self) -> TodoStorageResult<Vec<Todo>>;
}

/// Errors returned by todo storage implementations.
#[derive(Debug, Clone, Error)]
pub enum TodoStorageError {
    /// A todo with the same identifier already exists.
    #[error("duplicate todo identifier: {0}")]
    DuplicateTodo(TodoId),

    /// The todo was not found.
    #[error("todo not found: {0}")]
    NotFound(TodoId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TodoStorageError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
