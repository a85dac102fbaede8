//! Presenter translating todo view requests into storage calls.

use crate::todo::{
    domain::{
        Deadline, NewTodo, Tag, Todo, TodoDescription, TodoDomainError, TodoId, TodoListId,
        TodoTitle, UserId,
    },
    ports::{TodoStorage, TodoStorageError},
};
use log::{debug, info};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a todo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodoRequest {
    title: String,
    description: String,
    author: UserId,
    list_id: TodoListId,
    deadline: Deadline,
}

impl NewTodoRequest {
    /// Creates a request from raw title and description text.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        author: UserId,
        list_id: TodoListId,
        deadline: Deadline,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            author,
            list_id,
            deadline,
        }
    }
}

/// Presenter-level errors for todo operations.
#[derive(Debug, Error)]
pub enum TodoPresenterError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TodoDomainError),
    /// Storage operation failed.
    #[error(transparent)]
    Storage(#[from] TodoStorageError),
}

/// Result type for presenter operations.
pub type TodoPresenterResult<T> = Result<T, TodoPresenterError>;

/// Stateless bridge between the console views and todo storage.
#[derive(Clone)]
pub struct TodoPresenter<S, C>
where
    S: TodoStorage,
    C: Clock + Send + Sync,
{
    storage: Arc<S>,
    clock: Arc<C>,
}

impl<S, C> TodoPresenter<S, C>
where
    S: TodoStorage,
    C: Clock + Send + Sync,
{
    /// Creates a presenter over the given storage.
    #[must_use]
    pub const fn new(storage: Arc<S>, clock: Arc<C>) -> Self {
        Self { storage, clock }
    }

    /// Loads the todos of one list in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`TodoPresenterError::Storage`] when the lookup fails.
    pub async fn load_list_todos(&self, list_id: TodoListId) -> TodoPresenterResult<Vec<Todo>> {
        let todos = self.storage.find_by_list(list_id).await?;
        debug!(
            "event=list_todos_loaded module=presenter list_id={list_id} count={}",
            todos.len()
        );
        Ok(todos)
    }

    /// Validates and stores a new todo.
    ///
    /// # Errors
    ///
    /// Returns [`TodoPresenterError::Domain`] when the title or description is
    /// blank, or [`TodoPresenterError::Storage`] when storage rejects it.
    pub async fn add_new_todo(&self, request: NewTodoRequest) -> TodoPresenterResult<Todo> {
        let new_todo = NewTodo {
            title: TodoTitle::new(request.title)?,
            description: TodoDescription::new(request.description)?,
            author: request.author,
            list_id: request.list_id,
            deadline: request.deadline,
        };
        let todo = Todo::new(new_todo, &*self.clock);
        self.storage.store(&todo).await?;
        info!(
            "event=todo_added module=presenter todo_id={} list_id={} created_at={}",
            todo.id(),
            todo.list_id(),
            todo.created_at().to_rfc3339()
        );
        Ok(todo)
    }

    /// Deletes a todo by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TodoPresenterError::Storage`] when the todo is missing or
    /// storage fails.
    pub async fn delete_todo(&self, id: TodoId) -> TodoPresenterResult<()> {
        self.storage.delete(id).await?;
        info!("event=todo_deleted module=presenter todo_id={id}");
        Ok(())
    }

    /// Marks a todo as completed.
    ///
    /// # Errors
    ///
    /// Returns [`TodoPresenterError::Storage`] when the todo is missing or
    /// storage fails, or [`TodoPresenterError::Domain`] when it is already
    /// completed.
    pub async fn complete_todo(&self, id: TodoId) -> TodoPresenterResult<Todo> {
        let mut todo = self
            .storage
            .find_by_id(id)
            .await?
            .ok_or(TodoStorageError::NotFound(id))?;
        todo.complete(&*self.clock)?;
        self.storage.update(&todo).await?;
        if let Some(completed_at) = todo.completed_at() {
            info!(
                "event=todo_completed module=presenter todo_id={id} completed_at={}",
                completed_at.to_rfc3339()
            );
        }
        Ok(todo)
    }

    /// Returns every todo ordered by ascending deadline.
    ///
    /// Todos sharing a deadline keep their storage order.
    ///
    /// # Errors
    ///
    /// Returns [`TodoPresenterError::Storage`] when the lookup fails.
    pub async fn all_sorted_by_deadline(&self) -> TodoPresenterResult<Vec<Todo>> {
        let mut todos = self.storage.find_all().await?;
        todos.sort_by_key(Todo::deadline);
        Ok(todos)
    }

    /// Returns the todos carrying `tag`.
    ///
    /// # Errors
    ///
    /// Returns [`TodoPresenterError::Storage`] when the lookup fails.
    pub async fn search_by_tag(&self, tag: &Tag) -> TodoPresenterResult<Vec<Todo>> {
        let todos = self.storage.find_by_tag(tag).await?;
        debug!(
            "event=tag_searched module=presenter tag={} count={}",
            tag.as_str(),
            todos.len()
        );
        Ok(todos)
    }

    /// Returns the completed todos.
    ///
    /// # Errors
    ///
    /// Returns [`TodoPresenterError::Storage`] when the lookup fails.
    pub async fn completed_todos(&self) -> TodoPresenterResult<Vec<Todo>> {
        Ok(self.storage.find_completed().await?)
    }
}
