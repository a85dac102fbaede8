//! Then steps for todo session BDD scenarios.

use super::world::{TodoSessionWorld, run_async};
use rstest_bdd_macros::then;
use todo_console::{
    console::{ConsoleError, ConsoleResult},
    todo::{domain::Deadline, ports::TodoStorage},
};

fn outcome(world: &TodoSessionWorld) -> Result<&ConsoleResult<()>, eyre::Report> {
    world
        .outcome
        .as_ref()
        .ok_or_else(|| eyre::eyre!("console has not been run"))
}

#[then("the console exits cleanly")]
fn console_exits_cleanly(world: &TodoSessionWorld) -> Result<(), eyre::Report> {
    match outcome(world)? {
        Ok(()) => Ok(()),
        Err(err) => Err(eyre::eyre!("expected clean exit, got {err}")),
    }
}

#[then("the console reports that input closed")]
fn console_reports_closed_input(world: &TodoSessionWorld) -> Result<(), eyre::Report> {
    let result = outcome(world)?;
    if !matches!(result, Err(ConsoleError::InputClosed)) {
        return Err(eyre::eyre!("expected closed input, got {result:?}"));
    }
    Ok(())
}

#[then(r#"the output contains "{text}""#)]
fn output_contains(world: &TodoSessionWorld, text: String) -> Result<(), eyre::Report> {
    if !world.output.contains(&text) {
        return Err(eyre::eyre!("output lacks {text:?}:\n{}", world.output));
    }
    Ok(())
}

#[then(r#"the output does not contain "{text}""#)]
fn output_lacks(world: &TodoSessionWorld, text: String) -> Result<(), eyre::Report> {
    if world.output.contains(&text) {
        return Err(eyre::eyre!("output unexpectedly has {text:?}"));
    }
    Ok(())
}

#[then(r#"the list "{list}" holds {count:usize} todos"#)]
fn list_holds(world: &TodoSessionWorld, list: String, count: usize) -> Result<(), eyre::Report> {
    let list_id = world.list_titled(&list)?.id();
    let todos = run_async(world.storage.find_by_list(list_id))?;
    if todos.len() != count {
        return Err(eyre::eyre!(
            "expected {count} todos in {list:?}, found {}",
            todos.len()
        ));
    }
    Ok(())
}

#[then(r#"the todo "{title}" is due "{due}""#)]
fn todo_is_due(world: &TodoSessionWorld, title: String, due: String) -> Result<(), eyre::Report> {
    let expected = Deadline::parse(&due)?;
    let todo = world.todo_titled(&title)?;
    if todo.deadline() != expected {
        return Err(eyre::eyre!(
            "expected {title:?} due {expected}, found {}",
            todo.deadline()
        ));
    }
    Ok(())
}

#[then(r#"the todo "{title}" is completed"#)]
fn todo_is_completed(world: &TodoSessionWorld, title: String) -> Result<(), eyre::Report> {
    if !world.todo_titled(&title)?.is_completed() {
        return Err(eyre::eyre!("expected {title:?} to be completed"));
    }
    Ok(())
}

#[then(r#"the todo "{title}" is still open"#)]
fn todo_is_open(world: &TodoSessionWorld, title: String) -> Result<(), eyre::Report> {
    if world.todo_titled(&title)?.is_completed() {
        return Err(eyre::eyre!("expected {title:?} to stay open"));
    }
    Ok(())
}
