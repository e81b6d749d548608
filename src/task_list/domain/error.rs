//! Error types for task list domain validation and relation guards.

use thiserror::Error;

/// Errors returned while constructing or mutating task list values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskListDomainError {
    /// The user identifier is empty after trimming.
    #[error("userId cannot be empty")]
    EmptyUserId,

    /// The task list identifier is empty after trimming.
    #[error("taskListId cannot be empty")]
    EmptyTaskListId,

    /// The task list name is empty after trimming.
    #[error("name cannot be empty")]
    EmptyName,

    /// The owner cannot be added to or removed from the relation set.
    #[error("the owner cannot hold a relation to their own task list")]
    OwnerRelation,

    /// The user already holds a relation to the task list.
    #[error("user {0} already has access to this task list")]
    RelationExists(String),

    /// The user holds no relation to the task list.
    #[error("user {0} has no relation to this task list")]
    RelationMissing(String),
}
