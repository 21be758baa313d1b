//! Failure taxonomy shared by the task use cases.

use super::dto::ValidationErrors;
use crate::task::{
    domain::{TaskDomainError, TaskId},
    ports::TaskRepositoryError,
};
use thiserror::Error;

/// Service-level errors for task use cases.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// A caller-supplied argument is unusable, such as a non-positive id.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Request payload failed the input rules.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// No task exists with the identifier.
    #[error("task with id {0} not found")]
    NotFound(TaskId),

    /// Another task already uses the title.
    #[error("task with title '{0}' already exists")]
    Duplicate(String),

    /// Domain construction failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task use case operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Converts a raw identifier into a [`TaskId`], rejecting non-positive values.
pub(crate) fn parse_task_id(raw: i64) -> TaskServiceResult<TaskId> {
    if raw <= 0 {
        return Err(TaskServiceError::InvalidArgument(format!(
            "task id must be a positive integer, got {raw}"
        )));
    }
    Ok(TaskId::new(raw)?)
}
