//! Shared fixtures for unit tests: storage mock, todo builders, and a
//! console driven by scripted input.

use crate::console::Console;
use crate::todo::{
    domain::{
        Deadline, NewTodo, Tag, Todo, TodoDescription, TodoId, TodoList, TodoListId, TodoTitle,
        User, UserId,
    },
    ports::{TodoStorage, TodoStorageResult},
};
use async_trait::async_trait;
use mockable::DefaultClock;
use std::io::Cursor;

mockall::mock! {
    pub Storage {}

    #[async_trait]
    impl TodoStorage for Storage {
        async fn store(&self, todo: &Todo) -> TodoStorageResult<()>;
        async fn update(&self, todo: &Todo) -> TodoStorageResult<()>;
        async fn delete(&self, id: TodoId) -> TodoStorageResult<()>;
        async fn find_by_id(&self, id: TodoId) -> TodoStorageResult<Option<Todo>>;
        async fn find_by_list(&self, list_id: TodoListId) -> TodoStorageResult<Vec<Todo>>;
        async fn find_all(&self) -> TodoStorageResult<Vec<Todo>>;
        async fn find_by_tag(&self, tag: &Tag) -> TodoStorageResult<Vec<Todo>>;
        async fn find_completed(&self) -> TodoStorageResult<Vec<Todo>>;
    }
}

/// Console whose input is a fixed script and whose output is captured.
pub type ScriptedConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

/// Builds a console that answers prompts with `lines`, one per read.
pub fn scripted_console(lines: &[&str]) -> ScriptedConsole {
    let mut script = lines.join("\n");
    script.push('\n');
    Console::new(Cursor::new(script.into_bytes()), Vec::new())
}

/// Returns everything written to a scripted console.
pub fn output_of(console: &ScriptedConsole) -> String {
    String::from_utf8_lossy(console.output()).into_owned()
}

/// Acting user used across tests.
pub fn user() -> User {
    User::new(user_id("ana"), "Ana")
}

/// Builds a user identifier, panicking on blank input.
pub fn user_id(value: &str) -> UserId {
    UserId::new(value).expect("valid user id")
}

/// List owned by [`user`].
pub fn owned_list(title: &str) -> TodoList {
    TodoList::new(TodoListId::new(), title, user_id("ana"))
}

/// Parses a deadline, panicking on bad input.
pub fn deadline(value: &str) -> Deadline {
    Deadline::parse(value).expect("valid deadline")
}

/// Builds an open todo in `list_id`.
pub fn todo_in(list_id: TodoListId, title: &str, due: &str) -> Todo {
    let new_todo = NewTodo {
        title: TodoTitle::new(title).expect("valid title"),
        description: TodoDescription::new(format!("{title} details")).expect("valid description"),
        author: user_id("ana"),
        list_id,
        deadline: deadline(due),
    };
    Todo::new(new_todo, &DefaultClock)
}

/// Builds a completed todo in `list_id`.
pub fn completed_todo_in(list_id: TodoListId, title: &str, due: &str) -> Todo {
    let mut todo = todo_in(list_id, title, due);
    todo.complete(&DefaultClock).expect("fresh todo completes");
    todo
}
