//! Given steps for task list sharing BDD scenarios.

use super::world::{TaskListSharingWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"user "{owner}" has created a task list named "{name}""#)]
fn task_list_created(
    world: &mut TaskListSharingWorld,
    owner: String,
    name: String,
) -> Result<(), eyre::Report> {
    let created = run_async(world.service.create(&owner, &name))
        .wrap_err("create task list for sharing scenario")?;
    world.task_list = Some(created);
    Ok(())
}

#[given(r#"user "{user}" has added themselves to the task list"#)]
fn relation_added(world: &mut TaskListSharingWorld, user: String) -> Result<(), eyre::Report> {
    let id = world.task_list_id()?;
    run_async(world.service.add_relation(&user, &id))
        .wrap_err("add relation in scenario setup")?;
    Ok(())
}
