//! Interactive todo-list manager.
//!
//! Usage:
//!
//! ```text
//! todo-console [--config <path>] [--log-level <level>] [--no-clear]
//! ```
//!
//! Lists named in the configuration are seeded into an in-memory store at
//! start-up; lists owned by another user open read-only. End of input
//! (Ctrl-D) leaves the program like the "Exit" option does.

use clap::Parser;
use log::info;
use mockable::DefaultClock;
use std::path::PathBuf;
use std::sync::Arc;
use todo_console::{
    config::AppConfig,
    console::{Console, ConsoleError},
    logging::init_logging,
    todo::{
        adapters::memory::InMemoryTodoStorage,
        domain::{TodoList, TodoListId, User},
        presenter::{TodoListPresenter, TodoPresenter},
    },
    view::{DisplaySettings, MainView, TodoView},
};

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Parser)]
#[command(name = "todo-console", version, about = "Manage todo lists from the terminal")]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level overriding the configuration (trace|debug|info|warn|error).
    #[arg(long)]
    log_level: Option<String>,

    /// Never clear the screen between menus.
    #[arg(long)]
    no_clear: bool,
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    let level = cli
        .log_level
        .as_deref()
        .unwrap_or(config.logging.level.as_str());
    let _logger = config
        .log_directory()
        .map(|dir| init_logging(level, &dir))
        .transpose()?;

    let user = config.user()?;
    let storage = Arc::new(InMemoryTodoStorage::new());
    seed_lists(&config, &storage, &user)?;

    let todo_view = TodoView::new(
        TodoPresenter::new(Arc::clone(&storage), Arc::new(DefaultClock)),
        DisplaySettings::new(config.display.deadline_format.as_str()),
    );
    let main_view = MainView::new(todo_view, TodoListPresenter::new(storage));
    let mut console = Console::stdio(config.display.clear_screen && !cli.no_clear);

    match main_view.run(&mut console, &user).await {
        Ok(()) => Ok(()),
        Err(ConsoleError::InputClosed) => {
            info!("event=input_closed module=main");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

/// Registers the configured lists, sharing foreign-owned ones with `user`.
fn seed_lists(
    config: &AppConfig,
    storage: &InMemoryTodoStorage,
    user: &User,
) -> Result<(), BoxError> {
    for list_config in &config.lists {
        let owner = config.list_owner(list_config)?;
        let list = TodoList::new(TodoListId::new(), list_config.title.trim(), owner);
        let list_id = list.id();
        let shared = !list.is_owned_by(user.id());
        storage.add_list(list)?;
        if shared {
            storage.share_list(list_id, user.id().clone())?;
        }
    }
    info!(
        "event=lists_seeded module=main count={}",
        config.lists.len()
    );
    Ok(())
}
