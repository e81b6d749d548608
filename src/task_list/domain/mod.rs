//! Domain model for shared task lists.
//!
//! A task list is owned by exactly one user and may be shared with other
//! users through relations. The owner has implicit access and never appears
//! in the relation set.

mod error;
mod ids;
mod relation;
mod task_list;

pub use error::TaskListDomainError;
pub use ids::{TaskListId, TaskListName, UserId};
pub use relation::UserTaskListRelation;
pub use task_list::{PersistedTaskListData, TaskList, TaskListVersion};
