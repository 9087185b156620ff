//! Then steps for drag and drop BDD scenarios.

use rstest_bdd_macros::then;
use taskboard::board::{
    domain::{BoardDomainError, TaskStatus},
    services::BoardStoreError,
};

use super::world::{TaskDropWorld, parse_task_id, run_async};

#[then(r#"task "{task}" has status "{status}""#)]
fn task_has_status(world: &TaskDropWorld, task: String, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let found = world
        .store()?
        .task(&parse_task_id(&task)?)
        .ok_or_else(|| eyre::eyre!("task {task} is missing"))?;

    if found.status() != expected {
        return Err(eyre::eyre!(
            "expected task {task} in {expected}, found {}",
            found.status()
        ));
    }
    Ok(())
}

#[then("no task is being dragged")]
fn no_task_is_dragged(world: &TaskDropWorld) -> Result<(), eyre::Report> {
    let store = world.store()?;
    if store.is_dragging() || store.dragging_task_id().is_some() {
        return Err(eyre::eyre!(
            "expected idle drag session, found {:?}",
            store.dragging_task_id()
        ));
    }
    Ok(())
}

#[then("the task is rejected for an empty title")]
fn task_is_rejected(world: &TaskDropWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_add_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing add task result"))?;

    if !matches!(
        result,
        Err(BoardStoreError::Domain(BoardDomainError::EmptyTaskTitle))
    ) {
        return Err(eyre::eyre!("expected EmptyTaskTitle error, got {result:?}"));
    }
    Ok(())
}

#[then("the board still holds {count:usize} tasks")]
fn board_holds_tasks(world: &TaskDropWorld, count: usize) -> Result<(), eyre::Report> {
    let found = world.store()?.state().tasks().len();
    if found != count {
        return Err(eyre::eyre!("expected {count} tasks, found {found}"));
    }
    Ok(())
}

#[then("no snapshot has been saved")]
fn no_snapshot_saved(world: &TaskDropWorld) -> Result<(), eyre::Report> {
    run_async(world.store()?.flush());
    let saves = world.persistence.save_count();
    if saves != 0 {
        return Err(eyre::eyre!("expected no saves, found {saves}"));
    }
    Ok(())
}
