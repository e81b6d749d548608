//! Application services for task list management.

mod sharing;

pub use sharing::{
    DEFAULT_PAGE_SIZE, TaskListAction, TaskListService, TaskListServiceError,
    TaskListServiceResult,
};
