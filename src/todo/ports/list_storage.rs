//! Read-only directory of todo lists.

use super::TodoStorageResult;
use crate::todo::domain::{TodoList, UserId};
use async_trait::async_trait;

/// Lookup of the lists a user may open.
///
/// List creation and sharing happen outside this program.
#[async_trait]
pub trait TodoListStorage: Send + Sync {
    /// Returns the lists owned by or shared with `user`, in storage order.
    async fn find_lists_for_user(&self, user: &UserId) -> TodoStorageResult<Vec<TodoList>>;
}
