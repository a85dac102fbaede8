//! When steps for todo session BDD scenarios.

use super::world::{TodoSessionWorld, run_async};
use rstest_bdd_macros::when;

#[when("the user runs the console")]
fn user_runs_console(world: &mut TodoSessionWorld) {
    let view = world.main_view();
    let mut console = world.console();
    let outcome = run_async(view.run(&mut console, &world.user));
    world.output = String::from_utf8_lossy(console.output()).into_owned();
    world.outcome = Some(outcome);
}
