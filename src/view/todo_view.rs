//! Interactive session over a single todo list.

use super::{DisplaySettings, SelectionTable, ViewError, report};
use crate::console::{Console, ConsoleResult, Menu, MenuEntry};
use crate::todo::{
    domain::{Deadline, Tag, TodoDomainError, TodoId, TodoList, TodoListId, User, UserId},
    ports::TodoStorage,
    presenter::{NewTodoRequest, TodoPresenter},
};
use log::info;
use mockable::Clock;
use std::io::{BufRead, Write};

/// Actions offered inside a list session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoAction {
    /// Mark one todo as completed.
    Complete,
    /// Leave the session.
    Back,
    /// Create a todo.
    Add,
    /// Delete a todo.
    Delete,
}

/// Session menu; add and delete need mutation rights.
pub const TODO_MENU: [MenuEntry<TodoAction>; 4] = [
    MenuEntry {
        key: 1,
        label: "Complete todo",
        requires_mutation: false,
        action: TodoAction::Complete,
    },
    MenuEntry {
        key: 2,
        label: "Back",
        requires_mutation: false,
        action: TodoAction::Back,
    },
    MenuEntry {
        key: 3,
        label: "Add todo",
        requires_mutation: true,
        action: TodoAction::Add,
    },
    MenuEntry {
        key: 4,
        label: "Delete todo",
        requires_mutation: true,
        action: TodoAction::Delete,
    },
];

/// Builds the session menu for the given mutation mode.
#[must_use]
pub fn todo_menu(allow_mutation: bool) -> Menu<TodoAction> {
    Menu::from_entries(&TODO_MENU, allow_mutation)
}

/// Wording of the pick-a-todo protocol shared by delete and complete.
struct PickTodo {
    context: &'static str,
    empty: &'static str,
    heading: &'static str,
    prompt: &'static str,
}

const PICK_FOR_DELETE: PickTodo = PickTodo {
    context: "Failed to delete todo",
    empty: "There are no todos to delete.",
    heading: "Select a todo to delete:",
    prompt: "Enter the number of the todo to delete: ",
};

const PICK_FOR_COMPLETE: PickTodo = PickTodo {
    context: "Failed to mark todo as completed",
    empty: "There are no todos to complete.",
    heading: "Select a todo to mark as completed:",
    prompt: "Enter the number of the todo to complete: ",
};

const INVALID_TODO_NUMBER: &str = "Invalid todo number. Please enter a valid number.";

/// Console controller for todos.
///
/// Holds no session state of its own; everything a session needs lives on
/// the stack of [`TodoView::start_session`].
pub struct TodoView<S, C>
where
    S: TodoStorage,
    C: Clock + Send + Sync,
{
    presenter: TodoPresenter<S, C>,
    display: DisplaySettings,
}

impl<S, C> TodoView<S, C>
where
    S: TodoStorage,
    C: Clock + Send + Sync,
{
    /// Creates a view over a presenter.
    #[must_use]
    pub const fn new(presenter: TodoPresenter<S, C>, display: DisplaySettings) -> Self {
        Self { presenter, display }
    }

    /// Runs the list session until the user picks "Back".
    ///
    /// Presenter failures are reported and the loop goes on.
    ///
    /// # Errors
    ///
    /// Returns [`crate::console::ConsoleError`] when the console fails or its
    /// input closes.
    pub async fn start_session<R, W>(
        &self,
        console: &mut Console<R, W>,
        user: &User,
        list: &TodoList,
        allow_mutation: bool,
    ) -> ConsoleResult<()>
    where
        R: BufRead,
        W: Write,
    {
        info!(
            "event=session_started module=view user_id={} list_id={} allow_mutation={allow_mutation}",
            user.id(),
            list.id()
        );
        let menu = todo_menu(allow_mutation);
        loop {
            console.clear()?;
            console.line(format_args!("Todos in list: {}", list.title()))?;
            self.show_todos(console, list.id()).await?;

            let outcome = match menu.choose(console)? {
                TodoAction::Back => break,
                TodoAction::Complete => self.try_mark_completed(console, list.id()).await,
                TodoAction::Add => self.try_add_todo(console, user.id(), list.id()).await,
                TodoAction::Delete => self.try_delete_todo(console, list.id()).await,
            };
            report(console, outcome)?;
            console.pause()?;
        }
        info!(
            "event=session_finished module=view list_id={}",
            list.id()
        );
        Ok(())
    }

    /// Prints the todos of a list, or a single empty-list notice.
    ///
    /// # Errors
    ///
    /// Returns [`crate::console::ConsoleError`] only; load failures are
    /// printed.
    pub async fn show_todos<R, W>(
        &self,
        console: &mut Console<R, W>,
        list_id: TodoListId,
    ) -> ConsoleResult<()>
    where
        R: BufRead,
        W: Write,
    {
        let outcome = self.try_show_todos(console, list_id).await;
        report(console, outcome)
    }

    /// Prompts for a new todo and submits it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::console::ConsoleError`] only; submission failures
    /// are printed.
    pub async fn add_todo<R, W>(
        &self,
        console: &mut Console<R, W>,
        user_id: &UserId,
        list_id: TodoListId,
    ) -> ConsoleResult<()>
    where
        R: BufRead,
        W: Write,
    {
        let outcome = self.try_add_todo(console, user_id, list_id).await;
        report(console, outcome)
    }

    /// Lets the user pick a todo by number and deletes it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::console::ConsoleError`] only.
    pub async fn delete_todo<R, W>(
        &self,
        console: &mut Console<R, W>,
        list_id: TodoListId,
    ) -> ConsoleResult<()>
    where
        R: BufRead,
        W: Write,
    {
        let outcome = self.try_delete_todo(console, list_id).await;
        report(console, outcome)
    }

    /// Lets the user pick a todo by number and marks it completed.
    ///
    /// # Errors
    ///
    /// Returns [`crate::console::ConsoleError`] only.
    pub async fn mark_completed<R, W>(
        &self,
        console: &mut Console<R, W>,
        list_id: TodoListId,
    ) -> ConsoleResult<()>
    where
        R: BufRead,
        W: Write,
    {
        let outcome = self.try_mark_completed(console, list_id).await;
        report(console, outcome)
    }

    /// Prints every todo ordered by deadline.
    ///
    /// # Errors
    ///
    /// Returns [`crate::console::ConsoleError`] only.
    pub async fn show_sorted_by_deadline<R, W>(
        &self,
        console: &mut Console<R, W>,
        user: &User,
    ) -> ConsoleResult<()>
    where
        R: BufRead,
        W: Write,
    {
        let outcome = self.try_show_sorted_by_deadline(console, user).await;
        report(console, outcome)
    }

    /// Prompts for a tag and prints the todos carrying it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::console::ConsoleError`] only.
    pub async fn show_searched_by_tag<R, W>(
        &self,
        console: &mut Console<R, W>,
        user: &User,
    ) -> ConsoleResult<()>
    where
        R: BufRead,
        W: Write,
    {
        let outcome = self.try_show_searched_by_tag(console, user).await;
        report(console, outcome)
    }

    /// Prints the completed todos, numbered from 1.
    ///
    /// # Errors
    ///
    /// Returns [`crate::console::ConsoleError`] only.
    pub async fn show_completed<R, W>(
        &self,
        console: &mut Console<R, W>,
        user: &User,
    ) -> ConsoleResult<()>
    where
        R: BufRead,
        W: Write,
    {
        let outcome = self.try_show_completed(console, user).await;
        report(console, outcome)
    }

    async fn try_show_todos<R, W>(
        &self,
        console: &mut Console<R, W>,
        list_id: TodoListId,
    ) -> Result<(), ViewError>
    where
        R: BufRead,
        W: Write,
    {
        let todos = self
            .presenter
            .load_list_todos(list_id)
            .await
            .map_err(ViewError::action("Failed to load todos"))?;
        if todos.is_empty() {
            console.line("This todo list is empty.")?;
            return Ok(());
        }
        for todo in &todos {
            console.line(self.display.todo_line(todo))?;
        }
        Ok(())
    }

    async fn try_add_todo<R, W>(
        &self,
        console: &mut Console<R, W>,
        user_id: &UserId,
        list_id: TodoListId,
    ) -> Result<(), ViewError>
    where
        R: BufRead,
        W: Write,
    {
        console.line("Creating a todo")?;
        let title = console.prompt_until(
            "Enter the todo title: ",
            "The title must not be empty. Please enter a title.",
            non_blank,
        )?;
        let description = console.prompt_until(
            "Enter a description: ",
            "The description must not be empty. Please enter a description.",
            non_blank,
        )?;
        let deadline = console.prompt_until(
            "Enter the deadline (YYYY-MM-DD): ",
            "Invalid date. Please enter the date in the correct format.",
            |answer| Deadline::parse(answer).ok(),
        )?;

        let request = NewTodoRequest::new(title, description, user_id.clone(), list_id, deadline);
        self.presenter
            .add_new_todo(request)
            .await
            .map_err(ViewError::action("Failed to create todo"))?;
        console.line("Todo created.")?;
        Ok(())
    }

    async fn try_delete_todo<R, W>(
        &self,
        console: &mut Console<R, W>,
        list_id: TodoListId,
    ) -> Result<(), ViewError>
    where
        R: BufRead,
        W: Write,
    {
        let Some(todo_id) = self.pick_todo(console, list_id, &PICK_FOR_DELETE).await? else {
            return Ok(());
        };
        self.presenter
            .delete_todo(todo_id)
            .await
            .map_err(ViewError::action(PICK_FOR_DELETE.context))?;
        console.line("Todo deleted.")?;
        Ok(())
    }

    async fn try_mark_completed<R, W>(
        &self,
        console: &mut Console<R, W>,
        list_id: TodoListId,
    ) -> Result<(), ViewError>
    where
        R: BufRead,
        W: Write,
    {
        let Some(todo_id) = self.pick_todo(console, list_id, &PICK_FOR_COMPLETE).await? else {
            return Ok(());
        };
        self.presenter
            .complete_todo(todo_id)
            .await
            .map_err(ViewError::action(PICK_FOR_COMPLETE.context))?;
        console.line("Todo marked as completed.")?;
        Ok(())
    }

    /// Fetches the list, numbers it, and resolves the user's answer to the
    /// identifier shown under that number.
    async fn pick_todo<R, W>(
        &self,
        console: &mut Console<R, W>,
        list_id: TodoListId,
        wording: &PickTodo,
    ) -> Result<Option<TodoId>, ViewError>
    where
        R: BufRead,
        W: Write,
    {
        let todos = self
            .presenter
            .load_list_todos(list_id)
            .await
            .map_err(ViewError::action(wording.context))?;
        if todos.is_empty() {
            console.line(wording.empty)?;
            return Ok(None);
        }

        let table = SelectionTable::new(todos);
        console.line(wording.heading)?;
        for (number, todo) in table.numbered() {
            console.line(format_args!("{number}. Title: {}", todo.title()))?;
        }
        let answer = console.prompt(wording.prompt)?;
        let picked = table.resolve(&answer).map(|todo| todo.id());
        if picked.is_none() {
            console.line(INVALID_TODO_NUMBER)?;
        }
        Ok(picked)
    }

    async fn try_show_sorted_by_deadline<R, W>(
        &self,
        console: &mut Console<R, W>,
        user: &User,
    ) -> Result<(), ViewError>
    where
        R: BufRead,
        W: Write,
    {
        let todos = self
            .presenter
            .all_sorted_by_deadline()
            .await
            .map_err(ViewError::action("Failed to show sorted todos"))?;
        console.line(format_args!("Todos for {}, sorted by deadline:", user.name()))?;
        for todo in &todos {
            console.line(self.display.deadline_line(todo))?;
        }
        Ok(())
    }

    async fn try_show_searched_by_tag<R, W>(
        &self,
        console: &mut Console<R, W>,
        user: &User,
    ) -> Result<(), ViewError>
    where
        R: BufRead,
        W: Write,
    {
        let answer = console.prompt("Enter a tag to search for: ")?;
        let tag = match Tag::parse(&answer) {
            Ok(tag) => tag,
            Err(TodoDomainError::EmptyTag) => {
                console.line("The tag must not be empty.")?;
                return Ok(());
            }
            Err(_) => {
                console.line("A tag may only contain letters, digits, '-' and '_'.")?;
                return Ok(());
            }
        };
        info!(
            "event=tag_search module=view user_id={} tag={}",
            user.id(),
            tag.as_str()
        );

        let todos = self
            .presenter
            .search_by_tag(&tag)
            .await
            .map_err(ViewError::action("Failed to search todos"))?;
        if todos.is_empty() {
            console.line(format_args!("No todos found with tag {tag}."))?;
            return Ok(());
        }
        console.line("Found todos:")?;
        for todo in &todos {
            console.line(self.display.todo_line(todo))?;
        }
        Ok(())
    }

    async fn try_show_completed<R, W>(
        &self,
        console: &mut Console<R, W>,
        user: &User,
    ) -> Result<(), ViewError>
    where
        R: BufRead,
        W: Write,
    {
        let todos = self
            .presenter
            .completed_todos()
            .await
            .map_err(ViewError::action("Failed to load completed todos"))?;
        if todos.is_empty() {
            console.line("There are no completed todos.")?;
            return Ok(());
        }
        console.line(format_args!("Completed todos of {}:", user.name()))?;
        for (number, todo) in SelectionTable::new(&todos).numbered() {
            console.line(format_args!(
                "{number}. Title: {}, Description: {}",
                todo.title(),
                todo.description()
            ))?;
        }
        Ok(())
    }
}

fn non_blank(answer: &str) -> Option<String> {
    let trimmed = answer.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
