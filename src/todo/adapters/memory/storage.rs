//! In-memory todo storage used by the console binary and tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::todo::{
    domain::{Tag, Todo, TodoId, TodoList, TodoListId, UserId},
    ports::{TodoListStorage, TodoStorage, TodoStorageError, TodoStorageResult},
};

/// Thread-safe in-memory store for todos and lists.
///
/// Todos and lists are kept in insertion order so that list views are
/// stable between fetches.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoStorage {
    state: Arc<RwLock<InMemoryTodoState>>,
}

#[derive(Debug, Default)]
struct InMemoryTodoState {
    todos: Vec<Todo>,
    lists: Vec<TodoList>,
    shared_with: HashMap<TodoListId, Vec<UserId>>,
}

impl InMemoryTodoStorage {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a list, visible to its owner.
    ///
    /// # Errors
    ///
    /// Returns [`TodoStorageError::Persistence`] when the state lock is
    /// poisoned.
    pub fn add_list(&self, list: TodoList) -> TodoStorageResult<()> {
        let mut state = self.write_state()?;
        state.lists.retain(|existing| existing.id() != list.id());
        state.lists.push(list);
        Ok(())
    }

    /// Makes a list visible to a user other than its owner.
    ///
    /// # Errors
    ///
    /// Returns [`TodoStorageError::Persistence`] when the state lock is
    /// poisoned.
    pub fn share_list(&self, list_id: TodoListId, user: UserId) -> TodoStorageResult<()> {
        let mut state = self.write_state()?;
        let members = state.shared_with.entry(list_id).or_default();
        if !members.contains(&user) {
            members.push(user);
        }
        Ok(())
    }

    fn read_state(&self) -> TodoStorageResult<RwLockReadGuard<'_, InMemoryTodoState>> {
        self.state.read().map_err(|err| {
            TodoStorageError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write_state(&self) -> TodoStorageResult<RwLockWriteGuard<'_, InMemoryTodoState>> {
        self.state.write().map_err(|err| {
            TodoStorageError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn filter_todos(&self, predicate: impl Fn(&Todo) -> bool) -> TodoStorageResult<Vec<Todo>> {
        let state = self.read_state()?;
        Ok(state
            .todos
            .iter()
            .filter(|&todo| predicate(todo))
            .cloned()
            .collect())
    }
}

impl InMemoryTodoState {
    fn position(&self, id: TodoId) -> Option<usize> {
        self.todos.iter().position(|todo| todo.id() == id)
    }

    fn is_visible_to(&self, list: &TodoList, user: &UserId) -> bool {
        list.is_owned_by(user)
            || self
                .shared_with
                .get(&list.id())
                .is_some_and(|members| members.contains(user))
    }
}

#[async_trait]
impl TodoStorage for InMemoryTodoStorage {
    async fn store(&self, todo: &Todo) -> TodoStorageResult<()> {
        let mut state = self.write_state()?;
        if state.position(todo.id()).is_some() {
            return Err(TodoStorageError::DuplicateTodo(todo.id()));
        }
        state.todos.push(todo.clone());
        Ok(())
    }

    async fn update(&self, todo: &Todo) -> TodoStorageResult<()> {
        let mut state = self.write_state()?;
        let slot = state
            .todos
            .iter_mut()
            .find(|existing| existing.id() == todo.id())
            .ok_or(TodoStorageError::NotFound(todo.id()))?;
        *slot = todo.clone();
        Ok(())
    }

    async fn delete(&self, id: TodoId) -> TodoStorageResult<()> {
        let mut state = self.write_state()?;
        let index = state.position(id).ok_or(TodoStorageError::NotFound(id))?;
        state.todos.remove(index);
        Ok(())
    }

    async fn find_by_id(&self, id: TodoId) -> TodoStorageResult<Option<Todo>> {
        let state = self.read_state()?;
        Ok(state.todos.iter().find(|todo| todo.id() == id).cloned())
    }

    async fn find_by_list(&self, list_id: TodoListId) -> TodoStorageResult<Vec<Todo>> {
        self.filter_todos(|todo| todo.list_id() == list_id)
    }

    async fn find_all(&self) -> TodoStorageResult<Vec<Todo>> {
        self.filter_todos(|_| true)
    }

    async fn find_by_tag(&self, tag: &Tag) -> TodoStorageResult<Vec<Todo>> {
        self.filter_todos(|todo| todo.has_tag(tag))
    }

    async fn find_completed(&self) -> TodoStorageResult<Vec<Todo>> {
        self.filter_todos(Todo::is_completed)
    }
}

#[async_trait]
impl TodoListStorage for InMemoryTodoStorage {
    async fn find_lists_for_user(&self, user: &UserId) -> TodoStorageResult<Vec<TodoList>> {
        let state = self.read_state()?;
        Ok(state
            .lists
            .iter()
            .filter(|list| state.is_visible_to(list, user))
            .cloned()
            .collect())
    }
}
