//! Todo management for the console.
//!
//! Holds everything below the interactive surface: todo records, the
//! storage contracts the program consumes, an in-memory store, and the
//! presenters the views call. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - View-facing presenters in [`presenter`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod presenter;

#[cfg(test)]
mod tests;
