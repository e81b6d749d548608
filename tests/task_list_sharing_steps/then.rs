//! Then steps for task list sharing BDD scenarios.

use super::world::{TaskListSharingWorld, run_async};
use rstest_bdd_macros::then;
use tasklists::task_list::services::TaskListServiceError;

fn last_result(
    world: &TaskListSharingWorld,
) -> Result<&Result<(), TaskListServiceError>, eyre::Report> {
    world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing operation result"))
}

#[then(r#"user "{user}" can view the task list"#)]
fn user_can_view(world: &TaskListSharingWorld, user: String) -> Result<(), eyre::Report> {
    if let Some(Err(err)) = &world.last_result {
        return Err(eyre::eyre!("preceding operation failed: {err}"));
    }
    let id = world.task_list_id()?;
    let task_list = run_async(world.service.get(&user, &id))
        .map_err(|err| eyre::eyre!("expected {user} to view the list, got {err}"))?;

    if !task_list
        .user_relations()
        .iter()
        .any(|relation| relation.user_id().as_str() == user)
        && task_list.owner_id().as_str() != user
    {
        return Err(eyre::eyre!("{user} is neither owner nor related"));
    }
    Ok(())
}

#[then(r#"user "{user}" is refused access to the task list"#)]
fn user_is_refused(world: &TaskListSharingWorld, user: String) -> Result<(), eyre::Report> {
    let id = world.task_list_id()?;
    let result = run_async(world.service.get(&user, &id));
    if !matches!(result, Err(TaskListServiceError::Forbidden(_))) {
        return Err(eyre::eyre!("expected Forbidden for {user}, got {result:?}"));
    }
    Ok(())
}

#[then("the operation is forbidden")]
fn operation_forbidden(world: &TaskListSharingWorld) -> Result<(), eyre::Report> {
    let result = last_result(world)?;
    if !matches!(result, Err(TaskListServiceError::Forbidden(_))) {
        return Err(eyre::eyre!("expected Forbidden error, got {result:?}"));
    }
    Ok(())
}

#[then("the operation is rejected as invalid")]
fn operation_invalid(world: &TaskListSharingWorld) -> Result<(), eyre::Report> {
    let result = last_result(world)?;
    if !matches!(result, Err(TaskListServiceError::InvalidRequest(_))) {
        return Err(eyre::eyre!("expected InvalidRequest error, got {result:?}"));
    }
    Ok(())
}

#[then(r#"the task list is named "{name}""#)]
fn task_list_named(world: &TaskListSharingWorld, name: String) -> Result<(), eyre::Report> {
    let task_list = world
        .task_list
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing task list in scenario world"))?;
    let stored = run_async(
        world
            .service
            .get(task_list.owner_id().as_str(), task_list.id().as_str()),
    )
    .map_err(|err| eyre::eyre!("owner could not read the list: {err}"))?;

    if stored.name().as_str() != name {
        return Err(eyre::eyre!(
            "expected name {name}, found {}",
            stored.name().as_str()
        ));
    }
    Ok(())
}

#[then("the task list no longer exists")]
fn task_list_gone(world: &TaskListSharingWorld) -> Result<(), eyre::Report> {
    let result = last_result(world)?;
    if let Err(err) = result {
        return Err(eyre::eyre!("delete failed: {err}"));
    }
    let task_list = world
        .task_list
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing task list in scenario world"))?;
    let lookup = run_async(
        world
            .service
            .get(task_list.owner_id().as_str(), task_list.id().as_str()),
    );
    if !matches!(lookup, Err(TaskListServiceError::NotFound(_))) {
        return Err(eyre::eyre!("expected NotFound after delete, got {lookup:?}"));
    }
    Ok(())
}
