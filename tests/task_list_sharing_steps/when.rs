//! When steps for task list sharing BDD scenarios.

use super::world::{TaskListSharingWorld, run_async};
use rstest_bdd_macros::when;

#[when(r#"user "{user}" adds themselves to the task list"#)]
fn add_relation(world: &mut TaskListSharingWorld, user: String) -> Result<(), eyre::Report> {
    let id = world.task_list_id()?;
    world.last_result = Some(run_async(world.service.add_relation(&user, &id)));
    Ok(())
}

#[when(r#"user "{user}" removes themselves from the task list"#)]
fn remove_relation(world: &mut TaskListSharingWorld, user: String) -> Result<(), eyre::Report> {
    let id = world.task_list_id()?;
    world.last_result = Some(run_async(world.service.remove_relation(&user, &id)));
    Ok(())
}

#[when(r#"user "{user}" renames the task list to "{name}""#)]
fn rename(world: &mut TaskListSharingWorld, user: String, name: String) -> Result<(), eyre::Report> {
    let id = world.task_list_id()?;
    let result = run_async(world.service.update(&user, &id, &name));
    world.last_result = Some(result.map(|_| ()));
    Ok(())
}

#[when(r#"user "{user}" deletes the task list"#)]
fn delete(world: &mut TaskListSharingWorld, user: String) -> Result<(), eyre::Report> {
    let id = world.task_list_id()?;
    world.last_result = Some(run_async(world.service.delete(&user, &id)));
    Ok(())
}

#[when(r#"user "{user}" creates a task list without a name"#)]
fn create_unnamed(world: &mut TaskListSharingWorld, user: String) {
    let result = run_async(world.service.create(&user, ""));
    if let Ok(ref created) = result {
        world.task_list = Some(created.clone());
    }
    world.last_result = Some(result.map(|_| ()));
}
