//! `PostgreSQL` adapters for task list persistence.
//!
//! Each task list is stored as a single row whose relation set is a JSONB
//! document, so reads and replaces touch exactly one record.

mod models;
mod repository;
mod schema;

pub use repository::{PostgresTaskListRepository, SCHEMA_SQL, TaskListPgPool};

#[cfg(test)]
pub(crate) use models::TaskListRow;
#[cfg(test)]
pub(crate) use repository::{row_to_task_list, to_new_row};
