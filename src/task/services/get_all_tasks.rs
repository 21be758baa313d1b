//! Use case for listing every task.

use super::{dto::TaskResponse, error::TaskServiceResult};
use crate::task::ports::TaskRepository;
use std::sync::Arc;
use tracing::debug;

/// Lists tasks newest first.
pub struct GetAllTasksUseCase<R: TaskRepository> {
    repository: Arc<R>,
}

impl<R: TaskRepository> GetAllTasksUseCase<R> {
    /// Creates the use case over a repository.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns all tasks ordered by creation time, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskServiceError::Repository`] when storage fails.
    pub async fn execute(&self) -> TaskServiceResult<Vec<TaskResponse>> {
        let tasks = self.repository.find_all().await?;
        debug!(count = tasks.len(), "listed tasks");
        Ok(tasks.iter().map(TaskResponse::from).collect())
    }
}
