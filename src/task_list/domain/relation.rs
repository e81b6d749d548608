//! User-to-task-list access relations.

use super::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Grants a non-owner user access to a task list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserTaskListRelation {
    user_id: UserId,
    date_added: DateTime<Utc>,
}

impl UserTaskListRelation {
    /// Creates a relation granted at `date_added`.
    #[must_use]
    pub const fn new(user_id: UserId, date_added: DateTime<Utc>) -> Self {
        Self {
            user_id,
            date_added,
        }
    }

    /// Returns the related user.
    #[must_use]
    pub const fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the time the relation was granted.
    #[must_use]
    pub const fn date_added(&self) -> DateTime<Utc> {
        self.date_added
    }
}
