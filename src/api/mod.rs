//! HTTP API for shared task lists.
//!
//! Handlers translate requests into [`TaskListService`] calls and map
//! service failures onto status codes:
//!
//! | Failure | Status |
//! |---------|--------|
//! | invalid request | 400 |
//! | forbidden | 403 |
//! | not found | 404 |
//! | concurrent modification | 409 |
//! | storage failure | 500 |
//!
//! [`TaskListService`]: crate::task_list::services::TaskListService

pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;

pub use error::{ApiError, ApiErrorResponse};
pub use routes::{TASK_LISTS_PATH, create_router};
