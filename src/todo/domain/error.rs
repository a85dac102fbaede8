//! Error types for todo domain validation and parsing.

use super::TodoId;
use thiserror::Error;

/// Errors returned while constructing or mutating domain todo values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoDomainError {
    /// The todo title is empty after trimming.
    #[error("todo title must not be empty")]
    EmptyTitle,

    /// The todo description is empty after trimming.
    #[error("todo description must not be empty")]
    EmptyDescription,

    /// The search tag is empty after trimming and removing `#`.
    #[error("tag must not be empty")]
    EmptyTag,

    /// The search tag holds characters a hashtag cannot contain.
    #[error("tag `{0}` may only contain letters, digits, `-` and `_`")]
    InvalidTag(String),

    /// The user identifier is empty after trimming.
    #[error("user identifier must not be empty")]
    EmptyUserId,

    /// The todo is already marked as completed.
    #[error("todo {0} is already completed")]
    AlreadyCompleted(TodoId),
}

/// Error returned when a deadline string matches no accepted format.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unrecognised deadline: {0}")]
pub struct ParseDeadlineError(pub String);
