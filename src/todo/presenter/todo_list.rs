//! Presenter for the lists a user can open.

use super::TodoPresenterResult;
use crate::todo::{
    domain::{TodoList, UserId},
    ports::TodoListStorage,
};
use std::sync::Arc;

/// Read-only bridge to the list directory.
#[derive(Clone)]
pub struct TodoListPresenter<L>
where
    L: TodoListStorage,
{
    storage: Arc<L>,
}

impl<L> TodoListPresenter<L>
where
    L: TodoListStorage,
{
    /// Creates a presenter over the given list storage.
    #[must_use]
    pub const fn new(storage: Arc<L>) -> Self {
        Self { storage }
    }

    /// Returns the lists owned by or shared with `user`.
    ///
    /// # Errors
    ///
    /// Returns [`super::TodoPresenterError::Storage`] when the lookup fails.
    pub async fn lists_for_user(&self, user: &UserId) -> TodoPresenterResult<Vec<TodoList>> {
        Ok(self.storage.find_lists_for_user(user).await?)
    }
}
