//! Repository port for task list persistence and membership lookup.

use crate::task_list::domain::{TaskList, TaskListId, TaskListVersion, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task list repository operations.
pub type TaskListRepositoryResult<T> = Result<T, TaskListRepositoryError>;

/// Skip/take window applied by the store to membership queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    skip: u64,
    take: u64,
}

impl Page {
    /// Creates a window skipping `skip` records and returning at most `take`.
    #[must_use]
    pub const fn new(skip: u64, take: u64) -> Self {
        Self { skip, take }
    }

    /// Returns the number of records to skip.
    #[must_use]
    pub const fn skip(self) -> u64 {
        self.skip
    }

    /// Returns the maximum number of records to return.
    #[must_use]
    pub const fn take(self) -> u64 {
        self.take
    }
}

/// Task list persistence contract.
#[async_trait]
pub trait TaskListRepository: Send + Sync {
    /// Stores a new task list.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListRepositoryError::DuplicateTaskList`] when the
    /// identifier already exists.
    async fn store(&self, task_list: &TaskList) -> TaskListRepositoryResult<()>;

    /// Finds a task list by identifier.
    ///
    /// Returns `None` when the task list does not exist.
    async fn find_by_id(&self, id: &TaskListId) -> TaskListRepositoryResult<Option<TaskList>>;

    /// Returns lists owned by `user_id` or shared with them through a
    /// relation, restricted to `page`.
    ///
    /// Stores return records ordered by creation time then identifier so
    /// consecutive pages do not overlap.
    async fn find_by_member(
        &self,
        user_id: &UserId,
        page: Page,
    ) -> TaskListRepositoryResult<Vec<TaskList>>;

    /// Replaces the stored document when its version still equals
    /// `task_list.version()`, returning the newly stored version.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListRepositoryError::NotFound`] when the task list does
    /// not exist or [`TaskListRepositoryError::VersionConflict`] when another
    /// writer replaced it first.
    async fn update(&self, task_list: &TaskList) -> TaskListRepositoryResult<TaskListVersion>;

    /// Deletes a task list by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListRepositoryError::NotFound`] when the task list does
    /// not exist.
    async fn delete(&self, id: &TaskListId) -> TaskListRepositoryResult<()>;
}

/// Errors returned by task list repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskListRepositoryError {
    /// A task list with the same identifier already exists.
    #[error("duplicate task list identifier: {0}")]
    DuplicateTaskList(TaskListId),

    /// The task list was not found.
    #[error("task list not found: {0}")]
    NotFound(TaskListId),

    /// The stored version no longer matches the version being replaced.
    #[error("task list {id} was modified concurrently (expected version {expected})")]
    VersionConflict {
        /// Task list that was modified.
        id: TaskListId,
        /// Version the writer expected to replace.
        expected: TaskListVersion,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskListRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
