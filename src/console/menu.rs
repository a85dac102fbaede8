//! Numbered single-choice menus.

use super::{Console, ConsoleResult};
use std::io::{BufRead, Write};

/// Static description of a menu option and the capability it needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry<A> {
    /// Number the user types to pick the option.
    pub key: u32,
    /// Text shown next to the number.
    pub label: &'static str,
    /// Whether the option is only offered when mutation is allowed.
    pub requires_mutation: bool,
    /// Action yielded when the option is picked.
    pub action: A,
}

/// Option offered by a built [`Menu`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem<A> {
    key: u32,
    label: &'static str,
    action: A,
}

impl<A: Copy> MenuItem<A> {
    /// Returns the selection number.
    #[must_use]
    pub const fn key(&self) -> u32 {
        self.key
    }

    /// Returns the action.
    #[must_use]
    pub const fn action(&self) -> A {
        self.action
    }
}

/// Ordered mapping from selection numbers to labels and actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu<A> {
    items: Vec<MenuItem<A>>,
}

impl<A: Copy> Menu<A> {
    /// Builds a menu from a fixed table, keeping entries whose capability
    /// guard passes.
    #[must_use]
    pub fn from_entries(entries: &[MenuEntry<A>], allow_mutation: bool) -> Self {
        let items = entries
            .iter()
            .filter(|entry| allow_mutation || !entry.requires_mutation)
            .map(|entry| MenuItem {
                key: entry.key,
                label: entry.label,
                action: entry.action,
            })
            .collect();
        Self { items }
    }

    /// Returns the offered options in display order.
    #[must_use]
    pub fn items(&self) -> &[MenuItem<A>] {
        &self.items
    }

    /// Returns the action bound to `key`, if offered.
    #[must_use]
    pub fn action_for(&self, key: u32) -> Option<A> {
        self.items
            .iter()
            .find(|item| item.key == key)
            .map(|item| item.action)
    }

    /// Prints the options and reads answers until one names an offered
    /// option, then returns its action.
    ///
    /// # Errors
    ///
    /// Returns [`super::ConsoleError`] when writing or reading fails.
    pub fn choose<R, W>(&self, console: &mut Console<R, W>) -> ConsoleResult<A>
    where
        R: BufRead,
        W: Write,
    {
        console.blank_line()?;
        for item in &self.items {
            console.line(format_args!("{}. {}", item.key, item.label))?;
        }
        console.prompt_until("Choose an option: ", "Unknown option, try again.", |answer| {
            answer
                .trim()
                .parse::<u32>()
                .ok()
                .and_then(|key| self.action_for(key))
        })
    }
}
