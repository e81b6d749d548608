//! HTTP handlers for task list endpoints.
//!
//! Each handler extracts the request shape, calls one service operation,
//! and converts the outcome into a response. Handlers are generic over the
//! repository and clock so the same router serves every adapter.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use mockable::Clock;
use serde::{Deserialize, Serialize};

use super::dto::{
    CreateTaskListRequest, PageQuery, RelationQuery, TaskListResponse, UpdateTaskListRequest,
    UserQuery,
};
use super::error::ApiErrorResponse;
use super::routes::TASK_LISTS_PATH;
use crate::task_list::{ports::TaskListRepository, services::TaskListService};

/// Shared service handle stored as router state.
pub type SharedTaskListService<R, C> = Arc<TaskListService<R, C>>;

/// Result type returned by task list handlers.
pub type HandlerResult<T> = Result<T, ApiErrorResponse>;

/// `GET /api/task-lists/{id}?userId=` returns a single list.
///
/// # Errors
///
/// 400 for blank arguments, 404 for an unknown list, 403 when the user may
/// not view it.
pub async fn get_task_list<R, C>(
    State(service): State<SharedTaskListService<R, C>>,
    Path(task_list_id): Path<String>,
    query_string: Result<Query<UserQuery>, QueryRejection>,
) -> HandlerResult<Json<TaskListResponse>>
where
    R: TaskListRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Query(query) = query_string?;
    let task_list = service.get(&query.user_id, &task_list_id).await?;
    Ok(Json(TaskListResponse::from(&task_list)))
}

/// `GET /api/task-lists?userId=&skip=&take=` returns the user's lists,
/// newest first.
///
/// # Errors
///
/// 400 for a blank user, a non-numeric or negative `skip`, or a
/// non-numeric or non-positive `take`.
pub async fn list_task_lists<R, C>(
    State(service): State<SharedTaskListService<R, C>>,
    query_string: Result<Query<PageQuery>, QueryRejection>,
) -> HandlerResult<Json<Vec<TaskListResponse>>>
where
    R: TaskListRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Query(query) = query_string?;
    let task_lists = service
        .get_page(&query.user_id, query.skip, query.take)
        .await?;
    Ok(Json(task_lists.iter().map(TaskListResponse::from).collect()))
}

/// `POST /api/task-lists` creates a list and points `Location` at it.
///
/// # Errors
///
/// 400 when the body is not a JSON object of the expected shape, or the
/// owner or name is blank.
pub async fn create_task_list<R, C>(
    State(service): State<SharedTaskListService<R, C>>,
    payload: Result<Json<CreateTaskListRequest>, JsonRejection>,
) -> HandlerResult<Response>
where
    R: TaskListRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Json(request) = payload?;
    let task_list = service.create(&request.user_id, &request.name).await?;
    let location = format!("{TASK_LISTS_PATH}/{}", task_list.id());
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(TaskListResponse::from(&task_list)),
    )
        .into_response())
}

/// `PUT /api/task-lists/{id}` renames a list.
///
/// # Errors
///
/// 400 for a malformed body or blank arguments, 404 for an unknown list,
/// 403 when the user is not the owner, 409 on a concurrent modification.
pub async fn update_task_list<R, C>(
    State(service): State<SharedTaskListService<R, C>>,
    Path(task_list_id): Path<String>,
    payload: Result<Json<UpdateTaskListRequest>, JsonRejection>,
) -> HandlerResult<Json<TaskListResponse>>
where
    R: TaskListRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Json(request) = payload?;
    let task_list = service
        .update(&request.user_id, &task_list_id, &request.new_name)
        .await?;
    Ok(Json(TaskListResponse::from(&task_list)))
}

/// `PUT /api/task-lists/add-relation?userId=&taskListId=` shares a list with
/// the user.
///
/// # Errors
///
/// 400 for blank arguments, 404 for an unknown list, 403 when the user owns
/// the list or already has access, 409 on a concurrent modification.
pub async fn add_relation<R, C>(
    State(service): State<SharedTaskListService<R, C>>,
    query_string: Result<Query<RelationQuery>, QueryRejection>,
) -> HandlerResult<StatusCode>
where
    R: TaskListRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Query(query) = query_string?;
    service
        .add_relation(&query.user_id, &query.task_list_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `PUT /api/task-lists/remove-relation?userId=&taskListId=` revokes the
/// user's access.
///
/// # Errors
///
/// 400 for blank arguments, 404 for an unknown list, 403 when the user owns
/// the list or has no access, 409 on a concurrent modification.
pub async fn remove_relation<R, C>(
    State(service): State<SharedTaskListService<R, C>>,
    query_string: Result<Query<RelationQuery>, QueryRejection>,
) -> HandlerResult<StatusCode>
where
    R: TaskListRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Query(query) = query_string?;
    service
        .remove_relation(&query.user_id, &query.task_list_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /api/task-lists/{id}?userId=` deletes a list.
///
/// # Errors
///
/// 400 for blank arguments, 404 for an unknown list, 403 when the user is
/// not the owner.
pub async fn delete_task_list<R, C>(
    State(service): State<SharedTaskListService<R, C>>,
    Path(task_list_id): Path<String>,
    query_string: Result<Query<UserQuery>, QueryRejection>,
) -> HandlerResult<StatusCode>
where
    R: TaskListRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Query(query) = query_string?;
    service.delete(&query.user_id, &task_list_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Health check body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"healthy"` while the process serves requests.
    pub status: String,
    /// Crate version.
    pub version: String,
}

/// `GET /health` reports liveness.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_owned(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
    })
}
