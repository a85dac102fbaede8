//! Port contracts for todo management.
//!
//! Ports define infrastructure-agnostic interfaces used by the presenters.

pub mod list_storage;
pub mod storage;

pub use list_storage::TodoListStorage;
pub use storage::{TodoStorage, TodoStorageError, TodoStorageResult};
