//! Shared world state for todo session BDD scenarios.

use std::io::Cursor;
use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use todo_console::{
    console::{Console, ConsoleResult},
    todo::{
        adapters::memory::InMemoryTodoStorage,
        domain::{Todo, TodoList, User, UserId},
        ports::TodoStorage,
        presenter::{TodoListPresenter, TodoPresenter},
    },
    view::{DisplaySettings, MainView, TodoView},
};

/// Main view wired to the in-memory store.
pub type TestMainView = MainView<InMemoryTodoStorage, InMemoryTodoStorage, DefaultClock>;

/// Scenario world for console session behaviour tests.
pub struct TodoSessionWorld {
    pub storage: Arc<InMemoryTodoStorage>,
    pub user: User,
    pub lists: Vec<TodoList>,
    pub script: Vec<String>,
    pub output: String,
    pub outcome: Option<ConsoleResult<()>>,
}

impl TodoSessionWorld {
    /// Creates a world with an empty store and no scripted input.
    #[must_use]
    pub fn new() -> Self {
        let user_id = UserId::new("ana").expect("fixed user id is valid");
        Self {
            storage: Arc::new(InMemoryTodoStorage::new()),
            user: User::new(user_id, "Ana"),
            lists: Vec::new(),
            script: Vec::new(),
            output: String::new(),
            outcome: None,
        }
    }

    /// Builds the main view over the world's store.
    pub fn main_view(&self) -> TestMainView {
        let todos = TodoView::new(
            TodoPresenter::new(Arc::clone(&self.storage), Arc::new(DefaultClock)),
            DisplaySettings::default(),
        );
        MainView::new(todos, TodoListPresenter::new(Arc::clone(&self.storage)))
    }

    /// Builds a console answering prompts with the scripted lines.
    pub fn console(&self) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        let mut input = String::new();
        for line in &self.script {
            input.push_str(line);
            input.push('\n');
        }
        Console::new(Cursor::new(input.into_bytes()), Vec::new())
    }

    /// Looks up a seeded list by title.
    pub fn list_titled(&self, title: &str) -> Result<&TodoList, eyre::Report> {
        self.lists
            .iter()
            .find(|list| list.title() == title)
            .ok_or_else(|| eyre::eyre!("no list titled {title:?} in scenario world"))
    }

    /// Looks up a stored todo by title.
    pub fn todo_titled(&self, title: &str) -> Result<Todo, eyre::Report> {
        let todos = run_async(self.storage.find_all())?;
        todos
            .into_iter()
            .find(|todo| todo.title().as_str() == title)
            .ok_or_else(|| eyre::eyre!("no todo titled {title:?} in storage"))
    }
}

impl Default for TodoSessionWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TodoSessionWorld {
    TodoSessionWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
