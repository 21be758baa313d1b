//! Use case for fetching a single task.

use super::{
    dto::TaskResponse,
    error::{TaskServiceError, TaskServiceResult, parse_task_id},
};
use crate::task::ports::TaskRepository;
use std::sync::Arc;
use tracing::debug;

/// Fetches one task by identifier.
pub struct GetTaskByIdUseCase<R: TaskRepository> {
    repository: Arc<R>,
}

impl<R: TaskRepository> GetTaskByIdUseCase<R> {
    /// Creates the use case over a repository.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns the task with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::InvalidArgument`] for a non-positive id,
    /// [`TaskServiceError::NotFound`] when no task matches, and
    /// [`TaskServiceError::Repository`] when storage fails.
    pub async fn execute(&self, id: i64) -> TaskServiceResult<TaskResponse> {
        let task_id = parse_task_id(id)?;
        let task = self
            .repository
            .find_by_id(task_id)
            .await?
            .ok_or(TaskServiceError::NotFound(task_id))?;
        debug!(task_id = %task_id, "fetched task");
        Ok(TaskResponse::from(&task))
    }
}
