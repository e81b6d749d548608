//! Route table for the task list API.
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | GET | /api/task-lists/{id}?userId= | `get_task_list` |
//! | GET | /api/task-lists?userId=&skip=&take= | `list_task_lists` |
//! | POST | /api/task-lists | `create_task_list` |
//! | PUT | /api/task-lists/{id} | `update_task_list` |
//! | PUT | /api/task-lists/add-relation?userId=&taskListId= | `add_relation` |
//! | PUT | /api/task-lists/remove-relation?userId=&taskListId= | `remove_relation` |
//! | DELETE | /api/task-lists/{id}?userId= | `delete_task_list` |
//! | GET | /health | `health_check` |

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, put};
use mockable::Clock;

use super::handlers::{
    add_relation, create_task_list, delete_task_list, get_task_list, health_check,
    list_task_lists, remove_relation, update_task_list,
};
use crate::task_list::{ports::TaskListRepository, services::TaskListService};

/// Base path of the task list resource.
pub const TASK_LISTS_PATH: &str = "/api/task-lists";

const ADD_RELATION_PATH: &str = "/api/task-lists/add-relation";
const REMOVE_RELATION_PATH: &str = "/api/task-lists/remove-relation";
const TASK_LIST_PATH: &str = "/api/task-lists/{id}";

/// Builds the router serving the task list API backed by `service`.
#[must_use]
pub fn create_router<R, C>(service: TaskListService<R, C>) -> Router
where
    R: TaskListRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route(
            TASK_LISTS_PATH,
            get(list_task_lists::<R, C>).post(create_task_list::<R, C>),
        )
        .route(ADD_RELATION_PATH, put(add_relation::<R, C>))
        .route(REMOVE_RELATION_PATH, put(remove_relation::<R, C>))
        .route(
            TASK_LIST_PATH,
            get(get_task_list::<R, C>)
                .put(update_task_list::<R, C>)
                .delete(delete_task_list::<R, C>),
        )
        .with_state(Arc::new(service))
}
