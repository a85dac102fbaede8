//! Error boundary shared by the console views.

use crate::console::{Console, ConsoleError, ConsoleResult};
use crate::todo::presenter::TodoPresenterError;
use log::warn;
use std::io::{BufRead, Write};
use thiserror::Error;

/// Failure of a single view action.
#[derive(Debug, Error)]
pub enum ViewError {
    /// The interactive surface failed; the session cannot continue.
    #[error(transparent)]
    Console(#[from] ConsoleError),

    /// A presenter call failed; the session reports it and continues.
    #[error("{context}: {source}")]
    Action {
        /// What the user was doing when the call failed.
        context: &'static str,
        /// Underlying presenter failure.
        #[source]
        source: TodoPresenterError,
    },
}

impl ViewError {
    /// Returns a closure tagging a presenter error with `context`.
    pub fn action(context: &'static str) -> impl FnOnce(TodoPresenterError) -> Self {
        move |source| Self::Action { context, source }
    }
}

/// Renders an action outcome and hands back only console failures.
///
/// Every action failure is printed the same way and logged, so the caller
/// can carry on with its loop.
///
/// # Errors
///
/// Returns [`ConsoleError`] when the outcome carries one or when printing
/// the report fails.
pub fn report<R, W>(console: &mut Console<R, W>, outcome: Result<(), ViewError>) -> ConsoleResult<()>
where
    R: BufRead,
    W: Write,
{
    match outcome {
        Ok(()) => Ok(()),
        Err(ViewError::Console(err)) => Err(err),
        Err(err @ ViewError::Action { .. }) => {
            warn!("event=action_failed module=view error=\"{err}\"");
            console.line(err)
        }
    }
}
