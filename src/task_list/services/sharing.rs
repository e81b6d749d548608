//! Service layer for task list ownership, sharing, and paging.

use crate::task_list::{
    domain::{TaskList, TaskListDomainError, TaskListId, TaskListName, UserId},
    ports::{Page, TaskListRepository, TaskListRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Page size used when a caller does not specify one.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Operation a requester attempted on a task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskListAction {
    /// Reading a single task list.
    View,
    /// Renaming a task list.
    Update,
    /// Deleting a task list.
    Delete,
    /// Granting the requester access to a task list.
    AddRelation,
    /// Revoking the requester's access to a task list.
    RemoveRelation,
}

impl TaskListAction {
    /// Returns the message reported when the action is refused.
    #[must_use]
    pub const fn denial_message(self) -> &'static str {
        match self {
            Self::View => "You are not authorized to view this task list.",
            Self::Update => "You are not authorized to update this task list.",
            Self::Delete => "You are not authorized to delete this task list.",
            Self::AddRelation => "Cannot add user to this task list.",
            Self::RemoveRelation => "Cannot remove user from this task list.",
        }
    }
}

/// Service-level errors for task list operations.
#[derive(Debug, Error)]
pub enum TaskListServiceError {
    /// An argument was missing, blank, or out of range.
    #[error("{0}")]
    InvalidRequest(String),
    /// The referenced task list does not exist.
    #[error("Task list is not found.")]
    NotFound(TaskListId),
    /// The requester may not perform the action.
    #[error("{}", .0.denial_message())]
    Forbidden(TaskListAction),
    /// Another request replaced the task list between read and write.
    #[error("Task list was modified by another request, retry the operation.")]
    Conflict(TaskListId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(TaskListRepositoryError),
}

impl From<TaskListDomainError> for TaskListServiceError {
    fn from(err: TaskListDomainError) -> Self {
        Self::InvalidRequest(err.to_string())
    }
}

impl From<TaskListRepositoryError> for TaskListServiceError {
    fn from(err: TaskListRepositoryError) -> Self {
        match err {
            TaskListRepositoryError::NotFound(id) => Self::NotFound(id),
            TaskListRepositoryError::VersionConflict { id, .. } => Self::Conflict(id),
            other => Self::Repository(other),
        }
    }
}

/// Result type for task list service operations.
pub type TaskListServiceResult<T> = Result<T, TaskListServiceError>;

/// Task list orchestration service.
///
/// Every operation validates its string arguments before touching the
/// repository. Mutations re-read the stored list and replace it guarded by
/// the list's version, so concurrent writers surface
/// [`TaskListServiceError::Conflict`] instead of silently losing a change.
#[derive(Clone)]
pub struct TaskListService<R, C>
where
    R: TaskListRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskListService<R, C>
where
    R: TaskListRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task list service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a task list owned by `owner_id`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListServiceError::InvalidRequest`] when either argument
    /// is blank, or [`TaskListServiceError::Repository`] when persistence
    /// fails.
    pub async fn create(&self, owner_id: &str, name: &str) -> TaskListServiceResult<TaskList> {
        let owner = UserId::new(owner_id)?;
        let list_name = TaskListName::new(name)?;

        let task_list = TaskList::new(owner, list_name, &*self.clock);
        self.repository.store(&task_list).await?;
        tracing::info!(
            task_list_id = %task_list.id(),
            owner_id = %task_list.owner_id(),
            "task list created"
        );
        Ok(task_list)
    }

    /// Renames a task list. Only the owner may rename.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListServiceError::InvalidRequest`] for blank arguments,
    /// [`TaskListServiceError::NotFound`] when the list does not exist,
    /// [`TaskListServiceError::Forbidden`] when the requester is not the
    /// owner, or [`TaskListServiceError::Conflict`] when the list changed
    /// concurrently.
    pub async fn update(
        &self,
        user_id: &str,
        task_list_id: &str,
        new_name: &str,
    ) -> TaskListServiceResult<TaskList> {
        let requester = UserId::new(user_id)?;
        let id = TaskListId::parse(task_list_id)?;
        let list_name = TaskListName::new(new_name)?;

        let mut task_list = self.load(&id).await?;
        if !task_list.is_owner(&requester) {
            return Err(TaskListServiceError::Forbidden(TaskListAction::Update));
        }

        task_list.rename(list_name);
        self.replace(&mut task_list).await?;
        tracing::info!(task_list_id = %id, user_id = %requester, "task list renamed");
        Ok(task_list)
    }

    /// Returns a task list visible to `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListServiceError::InvalidRequest`] for blank arguments,
    /// [`TaskListServiceError::NotFound`] when the list does not exist, or
    /// [`TaskListServiceError::Forbidden`] when the requester is neither the
    /// owner nor related.
    pub async fn get(&self, user_id: &str, task_list_id: &str) -> TaskListServiceResult<TaskList> {
        let requester = UserId::new(user_id)?;
        let id = TaskListId::parse(task_list_id)?;

        let task_list = self.load(&id).await?;
        if !task_list.can_view(&requester) {
            return Err(TaskListServiceError::Forbidden(TaskListAction::View));
        }
        Ok(task_list)
    }

    /// Returns a page of lists owned by or shared with `user_id`, newest
    /// first.
    ///
    /// The store applies `skip` and `take`; ordering by creation time happens
    /// here, within the returned page.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListServiceError::InvalidRequest`] when `user_id` is
    /// blank, `skip` is negative, or `take` is not positive.
    pub async fn get_page(
        &self,
        user_id: &str,
        skip: i64,
        take: i64,
    ) -> TaskListServiceResult<Vec<TaskList>> {
        let requester = UserId::new(user_id)?;
        let page = page_from_bounds(skip, take)?;

        let mut task_lists = self.repository.find_by_member(&requester, page).await?;
        task_lists.sort_by(|left, right| right.created_at().cmp(&left.created_at()));
        tracing::debug!(
            user_id = %requester,
            skip,
            take,
            returned = task_lists.len(),
            "task list page loaded"
        );
        Ok(task_lists)
    }

    /// Grants `user_id` access to a task list they do not own.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListServiceError::InvalidRequest`] for blank arguments,
    /// [`TaskListServiceError::NotFound`] when the list does not exist,
    /// [`TaskListServiceError::Forbidden`] when the requester is the owner or
    /// already related, or [`TaskListServiceError::Conflict`] when the list
    /// changed concurrently.
    pub async fn add_relation(&self, user_id: &str, task_list_id: &str) -> TaskListServiceResult<()> {
        let requester = UserId::new(user_id)?;
        let id = TaskListId::parse(task_list_id)?;

        let mut task_list = self.load(&id).await?;
        task_list
            .add_relation(requester.clone(), &*self.clock)
            .map_err(|_| TaskListServiceError::Forbidden(TaskListAction::AddRelation))?;
        self.replace(&mut task_list).await?;
        tracing::info!(task_list_id = %id, user_id = %requester, "relation added");
        Ok(())
    }

    /// Revokes the relation `user_id` holds to a task list.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListServiceError::InvalidRequest`] for blank arguments,
    /// [`TaskListServiceError::NotFound`] when the list does not exist,
    /// [`TaskListServiceError::Forbidden`] when the requester is the owner or
    /// holds no relation, or [`TaskListServiceError::Conflict`] when the list
    /// changed concurrently.
    pub async fn remove_relation(
        &self,
        user_id: &str,
        task_list_id: &str,
    ) -> TaskListServiceResult<()> {
        let requester = UserId::new(user_id)?;
        let id = TaskListId::parse(task_list_id)?;

        let mut task_list = self.load(&id).await?;
        task_list
            .remove_relation(&requester)
            .map_err(|_| TaskListServiceError::Forbidden(TaskListAction::RemoveRelation))?;
        self.replace(&mut task_list).await?;
        tracing::info!(task_list_id = %id, user_id = %requester, "relation removed");
        Ok(())
    }

    /// Deletes a task list. Only the owner may delete.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListServiceError::InvalidRequest`] for blank arguments,
    /// [`TaskListServiceError::NotFound`] when the list does not exist, or
    /// [`TaskListServiceError::Forbidden`] when the requester is not the
    /// owner.
    pub async fn delete(&self, user_id: &str, task_list_id: &str) -> TaskListServiceResult<()> {
        let requester = UserId::new(user_id)?;
        let id = TaskListId::parse(task_list_id)?;

        let task_list = self.load(&id).await?;
        if !task_list.is_owner(&requester) {
            return Err(TaskListServiceError::Forbidden(TaskListAction::Delete));
        }

        self.repository.delete(&id).await?;
        tracing::info!(task_list_id = %id, user_id = %requester, "task list deleted");
        Ok(())
    }

    async fn load(&self, id: &TaskListId) -> TaskListServiceResult<TaskList> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| TaskListServiceError::NotFound(id.clone()))
    }

    async fn replace(&self, task_list: &mut TaskList) -> TaskListServiceResult<()> {
        let version = self.repository.update(task_list).await.inspect_err(|err| {
            if matches!(err, TaskListRepositoryError::VersionConflict { .. }) {
                tracing::warn!(task_list_id = %task_list.id(), "{err}");
            }
        })?;
        task_list.mark_persisted(version);
        Ok(())
    }
}

fn page_from_bounds(skip: i64, take: i64) -> TaskListServiceResult<Page> {
    let skip_count = u64::try_from(skip).map_err(|_| {
        TaskListServiceError::InvalidRequest(
            "skip must be greater than or equal to 0".to_owned(),
        )
    })?;
    let take_count = u64::try_from(take)
        .ok()
        .filter(|count| *count > 0)
        .ok_or_else(|| {
            TaskListServiceError::InvalidRequest("take must be greater than 0".to_owned())
        })?;
    Ok(Page::new(skip_count, take_count))
}
