//! In-memory repository for task lists.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task_list::{
    domain::{TaskList, TaskListId, TaskListVersion, UserId},
    ports::{Page, TaskListRepository, TaskListRepositoryError, TaskListRepositoryResult},
};

/// Thread-safe in-memory task list repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskListRepository {
    state: Arc<RwLock<HashMap<TaskListId, TaskList>>>,
}

impl InMemoryTaskListRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(err: &impl std::fmt::Display) -> TaskListRepositoryError {
    TaskListRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

/// Converts a page bound to `usize`, saturating on narrow targets.
fn bound(value: u64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

#[async_trait]
impl TaskListRepository for InMemoryTaskListRepository {
    async fn store(&self, task_list: &TaskList) -> TaskListRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| poisoned(&err))?;
        if state.contains_key(task_list.id()) {
            return Err(TaskListRepositoryError::DuplicateTaskList(
                task_list.id().clone(),
            ));
        }
        state.insert(task_list.id().clone(), task_list.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &TaskListId) -> TaskListRepositoryResult<Option<TaskList>> {
        let state = self.state.read().map_err(|err| poisoned(&err))?;
        Ok(state.get(id).cloned())
    }

    async fn find_by_member(
        &self,
        user_id: &UserId,
        page: Page,
    ) -> TaskListRepositoryResult<Vec<TaskList>> {
        let state = self.state.read().map_err(|err| poisoned(&err))?;
        let mut visible: Vec<&TaskList> = state
            .values()
            .filter(|task_list| task_list.can_view(user_id))
            .collect();
        visible.sort_by(|left, right| {
            left.created_at()
                .cmp(&right.created_at())
                .then_with(|| left.id().cmp(right.id()))
        });
        Ok(visible
            .into_iter()
            .skip(bound(page.skip()))
            .take(bound(page.take()))
            .cloned()
            .collect())
    }

    async fn update(&self, task_list: &TaskList) -> TaskListRepositoryResult<TaskListVersion> {
        let mut state = self.state.write().map_err(|err| poisoned(&err))?;
        let stored = state
            .get_mut(task_list.id())
            .ok_or_else(|| TaskListRepositoryError::NotFound(task_list.id().clone()))?;
        if stored.version() != task_list.version() {
            return Err(TaskListRepositoryError::VersionConflict {
                id: task_list.id().clone(),
                expected: task_list.version(),
            });
        }

        let next_version = task_list.version().next();
        let mut replacement = task_list.clone();
        replacement.mark_persisted(next_version);
        *stored = replacement;
        Ok(next_version)
    }

    async fn delete(&self, id: &TaskListId) -> TaskListRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| poisoned(&err))?;
        state
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| TaskListRepositoryError::NotFound(id.clone()))
    }
}
