//! Given steps for todo session BDD scenarios.

use super::world::{TodoSessionWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use todo_console::todo::{
    domain::{Deadline, NewTodo, Todo, TodoDescription, TodoList, TodoListId, TodoTitle, UserId},
    ports::TodoStorage,
};

#[given(r#"a todo list "{title}" owned by the user"#)]
fn list_owned_by_user(world: &mut TodoSessionWorld, title: String) -> Result<(), eyre::Report> {
    let list = TodoList::new(TodoListId::new(), title, world.user.id().clone());
    world.storage.add_list(list.clone()).wrap_err("register list")?;
    world.lists.push(list);
    Ok(())
}

#[given(r#"a todo list "{title}" owned by "{owner}" and shared with the user"#)]
fn list_shared_with_user(
    world: &mut TodoSessionWorld,
    title: String,
    owner: String,
) -> Result<(), eyre::Report> {
    let owner_id = UserId::new(owner).wrap_err("owner id")?;
    let list = TodoList::new(TodoListId::new(), title, owner_id);
    world.storage.add_list(list.clone()).wrap_err("register list")?;
    world
        .storage
        .share_list(list.id(), world.user.id().clone())
        .wrap_err("share list")?;
    world.lists.push(list);
    Ok(())
}

#[given(r#"the list "{list}" has a todo "{title}" due "{due}""#)]
fn list_has_todo(
    world: &mut TodoSessionWorld,
    list: String,
    title: String,
    due: String,
) -> Result<(), eyre::Report> {
    let list_id = world.list_titled(&list)?.id();
    let new_todo = NewTodo {
        description: TodoDescription::new(format!("{title} details")).wrap_err("description")?,
        title: TodoTitle::new(title).wrap_err("title")?,
        author: world.user.id().clone(),
        list_id,
        deadline: Deadline::parse(&due).wrap_err("deadline")?,
    };
    let todo = Todo::new(new_todo, &mockable::DefaultClock);
    run_async(world.storage.store(&todo)).wrap_err("seed todo")?;
    Ok(())
}

#[given(r#"the user enters "{line}""#)]
fn user_enters(world: &mut TodoSessionWorld, line: String) {
    world.script.push(line);
}

#[given("the user presses Enter")]
fn user_presses_enter(world: &mut TodoSessionWorld) {
    world.script.push(String::new());
}
