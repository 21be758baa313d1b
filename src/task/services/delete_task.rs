//! Use case for deleting a task.

use super::error::{TaskServiceError, TaskServiceResult, parse_task_id};
use crate::task::ports::TaskRepository;
use std::sync::Arc;
use tracing::info;

/// Deletes a task after confirming it exists.
pub struct DeleteTaskUseCase<R: TaskRepository> {
    repository: Arc<R>,
}

impl<R: TaskRepository> DeleteTaskUseCase<R> {
    /// Creates the use case over a repository.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Deletes the task with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::InvalidArgument`] for a non-positive id,
    /// [`TaskServiceError::NotFound`] when no task matches, and
    /// [`TaskServiceError::Repository`] when storage fails.
    pub async fn execute(&self, id: i64) -> TaskServiceResult<()> {
        let task_id = parse_task_id(id)?;
        if !self.repository.exists(task_id).await? {
            return Err(TaskServiceError::NotFound(task_id));
        }

        self.repository.delete(task_id).await?;
        info!(task_id = %task_id, "task deleted");
        Ok(())
    }
}
