//! Top-level menu of the console.

use super::{SelectionTable, TodoView, ViewError, report};
use crate::console::{Console, ConsoleResult, Menu, MenuEntry};
use crate::todo::{
    domain::User,
    ports::{TodoListStorage, TodoStorage},
    presenter::TodoListPresenter,
};
use log::info;
use mockable::Clock;
use std::io::{BufRead, Write};

/// Actions offered by the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainAction {
    /// Pick a list and start a session on it.
    OpenList,
    /// Show every todo ordered by deadline.
    SortedByDeadline,
    /// Search todos by tag.
    SearchByTag,
    /// Show completed todos.
    Completed,
    /// Quit the program.
    Exit,
}

/// Main menu table.
pub const MAIN_MENU: [MenuEntry<MainAction>; 5] = [
    MenuEntry {
        key: 1,
        label: "Open todo list",
        requires_mutation: false,
        action: MainAction::OpenList,
    },
    MenuEntry {
        key: 2,
        label: "Todos sorted by deadline",
        requires_mutation: false,
        action: MainAction::SortedByDeadline,
    },
    MenuEntry {
        key: 3,
        label: "Search todos by tag",
        requires_mutation: false,
        action: MainAction::SearchByTag,
    },
    MenuEntry {
        key: 4,
        label: "Completed todos",
        requires_mutation: false,
        action: MainAction::Completed,
    },
    MenuEntry {
        key: 5,
        label: "Exit",
        requires_mutation: false,
        action: MainAction::Exit,
    },
];

/// Entry view: reaches list sessions and the cross-list queries.
pub struct MainView<S, L, C>
where
    S: TodoStorage,
    L: TodoListStorage,
    C: Clock + Send + Sync,
{
    todos: TodoView<S, C>,
    lists: TodoListPresenter<L>,
}

impl<S, L, C> MainView<S, L, C>
where
    S: TodoStorage,
    L: TodoListStorage,
    C: Clock + Send + Sync,
{
    /// Creates the main view.
    #[must_use]
    pub const fn new(todos: TodoView<S, C>, lists: TodoListPresenter<L>) -> Self {
        Self { todos, lists }
    }

    /// Runs the main menu until the user exits.
    ///
    /// # Errors
    ///
    /// Returns [`crate::console::ConsoleError`] when the console fails or its
    /// input closes.
    pub async fn run<R, W>(&self, console: &mut Console<R, W>, user: &User) -> ConsoleResult<()>
    where
        R: BufRead,
        W: Write,
    {
        let menu = Menu::from_entries(&MAIN_MENU, true);
        loop {
            console.clear()?;
            console.line(format_args!("Welcome, {}", user.name()))?;
            match menu.choose(console)? {
                MainAction::Exit => break,
                MainAction::OpenList => {
                    let outcome = self.open_list(console, user).await;
                    let failed = outcome.is_err();
                    report(console, outcome)?;
                    if !failed {
                        continue;
                    }
                }
                MainAction::SortedByDeadline => {
                    self.todos.show_sorted_by_deadline(console, user).await?;
                }
                MainAction::SearchByTag => {
                    self.todos.show_searched_by_tag(console, user).await?;
                }
                MainAction::Completed => self.todos.show_completed(console, user).await?,
            }
            console.pause()?;
        }
        info!("event=main_menu_exit module=view user_id={}", user.id());
        Ok(())
    }

    /// Lists the user's todo lists and opens the chosen one.
    ///
    /// Lists owned by someone else open without add and delete.
    async fn open_list<R, W>(&self, console: &mut Console<R, W>, user: &User) -> Result<(), ViewError>
    where
        R: BufRead,
        W: Write,
    {
        let lists = self
            .lists
            .lists_for_user(user.id())
            .await
            .map_err(ViewError::action("Failed to load todo lists"))?;
        if lists.is_empty() {
            console.line("You have no todo lists.")?;
            console.pause()?;
            return Ok(());
        }

        let table = SelectionTable::new(lists);
        console.line("Your todo lists:")?;
        for (number, list) in table.numbered() {
            let marker = if list.is_owned_by(user.id()) {
                ""
            } else {
                " (read-only)"
            };
            console.line(format_args!("{number}. {}{marker}", list.title()))?;
        }
        let answer = console.prompt("Enter the number of the list to open: ")?;
        let Some(list) = table.resolve(&answer) else {
            console.line("Invalid list number. Please enter a valid number.")?;
            console.pause()?;
            return Ok(());
        };

        let allow_mutation = list.is_owned_by(user.id());
        self.todos
            .start_session(console, user, list, allow_mutation)
            .await?;
        Ok(())
    }
}
