//! Shared world state for task list sharing BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use tasklists::task_list::{
    adapters::memory::InMemoryTaskListRepository,
    domain::TaskList,
    services::{TaskListService, TaskListServiceError},
};

/// Service type used by the BDD world.
pub type TestTaskListService = TaskListService<InMemoryTaskListRepository, DefaultClock>;

/// Scenario world for task list sharing behaviour tests.
pub struct TaskListSharingWorld {
    pub service: TestTaskListService,
    pub task_list: Option<TaskList>,
    pub last_result: Option<Result<(), TaskListServiceError>>,
}

impl TaskListSharingWorld {
    /// Creates a world backed by an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        let service = TaskListService::new(
            Arc::new(InMemoryTaskListRepository::new()),
            Arc::new(DefaultClock),
        );

        Self {
            service,
            task_list: None,
            last_result: None,
        }
    }

    /// Returns the identifier of the scenario's task list.
    pub fn task_list_id(&self) -> Result<String, eyre::Report> {
        self.task_list
            .as_ref()
            .map(|task_list| task_list.id().as_str().to_owned())
            .ok_or_else(|| eyre::eyre!("missing task list in scenario world"))
    }
}

impl Default for TaskListSharingWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskListSharingWorld {
    TaskListSharingWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
