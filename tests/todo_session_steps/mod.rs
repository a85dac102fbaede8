//! Step definitions for todo session scenarios.

mod given;
mod then;
mod when;
pub mod world;
