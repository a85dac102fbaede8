//! Interactive console surface: line I/O and numbered menus.

mod menu;
mod terminal;

pub use menu::{Menu, MenuEntry, MenuItem};
pub use terminal::{Console, ConsoleError, ConsoleResult};

#[cfg(test)]
mod tests;
