//! Diesel row models for task list persistence.

use super::schema::task_lists;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Query result row for task list records.
#[derive(Debug, Clone, Queryable, QueryableByName, Selectable)]
#[diesel(table_name = task_lists)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskListRow {
    /// Task list identifier.
    #[diesel(sql_type = diesel::sql_types::Varchar)]
    pub id: String,
    /// Display name.
    #[diesel(sql_type = diesel::sql_types::Text)]
    pub name: String,
    /// Owning user identifier.
    #[diesel(sql_type = diesel::sql_types::Varchar)]
    pub owner_id: String,
    /// Relation documents.
    #[diesel(sql_type = diesel::sql_types::Jsonb)]
    pub user_relations: Value,
    /// Optimistic concurrency token.
    #[diesel(sql_type = diesel::sql_types::BigInt)]
    pub version: i64,
    /// Creation timestamp.
    #[diesel(sql_type = diesel::sql_types::Timestamptz)]
    pub created_at: DateTime<Utc>,
}

/// Insert model for task list records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = task_lists)]
pub struct NewTaskListRow {
    /// Task list identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Owning user identifier.
    pub owner_id: String,
    /// Relation documents.
    pub user_relations: Value,
    /// Optimistic concurrency token.
    pub version: i64,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// JSONB shape of a single relation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationDocument {
    /// Related user identifier.
    pub user_id: String,
    /// Time the relation was granted.
    pub date_added: DateTime<Utc>,
}
