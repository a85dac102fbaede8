//! Domain model for todo management.
//!
//! The todo domain models todo creation, completion, and tag lookup while
//! keeping storage and console concerns outside of the domain boundary.

mod deadline;
mod error;
mod ids;
mod tag;
mod todo;
mod todo_list;

pub use deadline::{DEFAULT_DEADLINE_FORMAT, Deadline};
pub use error::{ParseDeadlineError, TodoDomainError};
pub use ids::{TodoId, TodoListId, UserId};
pub use tag::Tag;
pub use todo::{NewTodo, Todo, TodoDescription, TodoTitle};
pub use todo_list::{TodoList, User};
