//! When steps for drag and drop BDD scenarios.

use rstest_bdd_macros::when;
use taskboard::board::domain::TaskStatus;

use super::world::{TaskDropWorld, parse_task_id};

fn parse_status(value: &str) -> Result<TaskStatus, eyre::Report> {
    TaskStatus::try_from(value).map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))
}

#[when(r#"task "{task}" is dragged"#)]
fn task_is_dragged(world: &mut TaskDropWorld, task: String) -> Result<(), eyre::Report> {
    let task_id = parse_task_id(&task)?;
    world.store()?.set_dragging_task_id(task_id);
    Ok(())
}

#[when(r#"the dragged task is dropped on "{status}""#)]
fn dragged_task_is_dropped(world: &mut TaskDropWorld, status: String) -> Result<(), eyre::Report> {
    let status = parse_status(&status)?;
    world.store()?.on_task_drop(status);
    Ok(())
}

#[when("the drag is cancelled")]
fn drag_is_cancelled(world: &mut TaskDropWorld) -> Result<(), eyre::Report> {
    world.store()?.remove_dragging_task_id();
    Ok(())
}

#[when(r#"a task with a blank title is added to "{status}""#)]
fn blank_task_is_added(world: &mut TaskDropWorld, status: String) -> Result<(), eyre::Report> {
    let status = parse_status(&status)?;
    let result = world.store()?.add_task("   ", status);
    world.last_add_result = Some(result);
    Ok(())
}
