//! Task list aggregate root.

use super::{TaskListDomainError, TaskListId, TaskListName, UserId, UserTaskListRelation};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::fmt;

/// Optimistic concurrency token stored alongside each task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskListVersion(u64);

impl TaskListVersion {
    /// Version assigned to a freshly created task list.
    pub const INITIAL: Self = Self(1);

    /// Wraps a persisted version value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the version that follows this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskListVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Task list aggregate root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskList {
    id: TaskListId,
    name: TaskListName,
    owner_id: UserId,
    user_relations: Vec<UserTaskListRelation>,
    created_at: DateTime<Utc>,
    version: TaskListVersion,
}

/// Parameter object for reconstructing a persisted task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskListData {
    /// Persisted task list identifier.
    pub id: TaskListId,
    /// Persisted display name.
    pub name: TaskListName,
    /// Persisted owner.
    pub owner_id: UserId,
    /// Persisted relations in insertion order.
    pub user_relations: Vec<UserTaskListRelation>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted concurrency token.
    pub version: TaskListVersion,
}

impl TaskList {
    /// Creates a new task list owned by `owner_id`.
    ///
    /// The relation set starts empty: the owner has implicit access.
    #[must_use]
    pub fn new(owner_id: UserId, name: TaskListName, clock: &impl Clock) -> Self {
        Self {
            id: TaskListId::new(),
            name,
            owner_id,
            user_relations: Vec::new(),
            created_at: clock.utc(),
            version: TaskListVersion::INITIAL,
        }
    }

    /// Reconstructs a task list from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskListData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            owner_id: data.owner_id,
            user_relations: data.user_relations,
            created_at: data.created_at,
            version: data.version,
        }
    }

    /// Returns the task list identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskListId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub const fn name(&self) -> &TaskListName {
        &self.name
    }

    /// Returns the owner.
    #[must_use]
    pub const fn owner_id(&self) -> &UserId {
        &self.owner_id
    }

    /// Returns the relations in insertion order.
    #[must_use]
    pub fn user_relations(&self) -> &[UserTaskListRelation] {
        &self.user_relations
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the concurrency token last read from or written to storage.
    #[must_use]
    pub const fn version(&self) -> TaskListVersion {
        self.version
    }

    /// Returns `true` when `user_id` owns this list.
    #[must_use]
    pub fn is_owner(&self, user_id: &UserId) -> bool {
        self.owner_id == *user_id
    }

    /// Returns `true` when `user_id` holds a relation to this list.
    #[must_use]
    pub fn has_relation(&self, user_id: &UserId) -> bool {
        self.user_relations
            .iter()
            .any(|relation| relation.user_id() == user_id)
    }

    /// Returns `true` when `user_id` may view this list.
    #[must_use]
    pub fn can_view(&self, user_id: &UserId) -> bool {
        self.is_owner(user_id) || self.has_relation(user_id)
    }

    /// Replaces the display name.
    pub fn rename(&mut self, name: TaskListName) {
        self.name = name;
    }

    /// Grants `user_id` access to this list.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListDomainError::OwnerRelation`] for the owner and
    /// [`TaskListDomainError::RelationExists`] when the user is already
    /// related.
    pub fn add_relation(
        &mut self,
        user_id: UserId,
        clock: &impl Clock,
    ) -> Result<(), TaskListDomainError> {
        if self.is_owner(&user_id) {
            return Err(TaskListDomainError::OwnerRelation);
        }
        if self.has_relation(&user_id) {
            return Err(TaskListDomainError::RelationExists(user_id.to_string()));
        }
        self.user_relations
            .push(UserTaskListRelation::new(user_id, clock.utc()));
        Ok(())
    }

    /// Revokes the relation held by `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListDomainError::OwnerRelation`] for the owner and
    /// [`TaskListDomainError::RelationMissing`] when the user holds no
    /// relation.
    pub fn remove_relation(&mut self, user_id: &UserId) -> Result<(), TaskListDomainError> {
        if self.is_owner(user_id) {
            return Err(TaskListDomainError::OwnerRelation);
        }
        if !self.has_relation(user_id) {
            return Err(TaskListDomainError::RelationMissing(user_id.to_string()));
        }
        self.user_relations
            .retain(|relation| relation.user_id() != user_id);
        Ok(())
    }

    /// Records the version assigned by storage after a successful replace.
    pub const fn mark_persisted(&mut self, version: TaskListVersion) {
        self.version = version;
    }
}
