//! Adapter implementations of the todo ports.

pub mod memory;
