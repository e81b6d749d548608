//! Identifier and validated scalar types for the task list domain.

use super::TaskListDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Returns the value unchanged when it holds at least one non-whitespace
/// character.
fn non_blank(value: String, error: TaskListDomainError) -> Result<String, TaskListDomainError> {
    if value.trim().is_empty() {
        return Err(error);
    }
    Ok(value)
}

/// Unique identifier for a task list.
///
/// Generated identifiers are UUIDv4 strings, but any non-blank string read
/// back from storage or a request path is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskListId(String);

impl TaskListId {
    /// Creates a new random task list identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Creates a validated identifier from an existing value.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListDomainError::EmptyTaskListId`] when the value is
    /// empty or whitespace only.
    pub fn parse(value: impl Into<String>) -> Result<Self, TaskListDomainError> {
        non_blank(value.into(), TaskListDomainError::EmptyTaskListId).map(Self)
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TaskListId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<str> for TaskListId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a user acting on task lists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Creates a validated user identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListDomainError::EmptyUserId`] when the value is empty
    /// or whitespace only.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskListDomainError> {
        non_blank(value.into(), TaskListDomainError::EmptyUserId).map(Self)
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display name of a task list.
///
/// A name must contain at least one non-whitespace character, so `" "` is
/// rejected like `""`. Accepted names keep their surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskListName(String);

impl TaskListName {
    /// Creates a validated task list name.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListDomainError::EmptyName`] when the value is empty or
    /// whitespace only.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskListDomainError> {
        non_blank(value.into(), TaskListDomainError::EmptyName).map(Self)
    }

    /// Returns the name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskListName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskListName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
