//! Request and response bodies for the task list API.
//!
//! Field names are camelCase on the wire. Request fields default to empty
//! strings so that missing values reach the service and are reported as
//! invalid requests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::task_list::{
    domain::{TaskList, UserTaskListRelation},
    services::DEFAULT_PAGE_SIZE,
};

/// Body of `POST /api/task-lists`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateTaskListRequest {
    /// Owner of the new list.
    pub user_id: String,
    /// Display name of the new list.
    pub name: String,
}

/// Body of `PUT /api/task-lists/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateTaskListRequest {
    /// Requesting user.
    pub user_id: String,
    /// Replacement display name.
    pub new_name: String,
}

/// Query string naming the requesting user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserQuery {
    /// Requesting user.
    pub user_id: String,
}

/// Query string of `GET /api/task-lists`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageQuery {
    /// Requesting user.
    pub user_id: String,
    /// Number of lists to skip.
    pub skip: i64,
    /// Maximum number of lists to return.
    pub take: i64,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            user_id: String::new(),
            skip: 0,
            take: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Query string of the relation endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RelationQuery {
    /// User gaining or losing access.
    pub user_id: String,
    /// Target task list.
    pub task_list_id: String,
}

/// Wire form of a user relation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRelationResponse {
    /// Related user.
    pub user_id: String,
    /// Time the relation was granted.
    pub date_added: DateTime<Utc>,
}

impl From<&UserTaskListRelation> for UserRelationResponse {
    fn from(relation: &UserTaskListRelation) -> Self {
        Self {
            user_id: relation.user_id().as_str().to_owned(),
            date_added: relation.date_added(),
        }
    }
}

/// Wire form of a task list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskListResponse {
    /// Task list identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Owning user.
    pub owner_id: String,
    /// Users the list is shared with, in the order they were added.
    pub user_relations: Vec<UserRelationResponse>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<&TaskList> for TaskListResponse {
    fn from(task_list: &TaskList) -> Self {
        Self {
            id: task_list.id().as_str().to_owned(),
            name: task_list.name().as_str().to_owned(),
            owner_id: task_list.owner_id().as_str().to_owned(),
            user_relations: task_list
                .user_relations()
                .iter()
                .map(UserRelationResponse::from)
                .collect(),
            created_at: task_list.created_at(),
        }
    }
}
