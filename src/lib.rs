//! todo-console: a console todo-list manager.
//!
//! Users view, add, delete, complete, sort, and search todos inside named
//! lists through numbered menus.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: todo records and validation, free of I/O
//! - **Ports**: async storage traits the presenters consume
//! - **Adapters**: an in-memory store implementing the ports
//! - **Presenters**: shape storage results for the views
//! - **Views**: interactive loops on top of a line console
//!
//! # Modules
//!
//! - [`todo`]: domain, ports, adapters, and presenters
//! - [`console`]: line console and numbered menus
//! - [`view`]: main menu and per-list sessions
//! - [`config`]: TOML configuration
//! - [`logging`]: file logging bootstrap

pub mod config;
pub mod console;
pub mod logging;
pub mod todo;
pub mod view;

#[cfg(test)]
pub(crate) mod test_support;
