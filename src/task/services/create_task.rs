//! Use case for creating a task.

use super::{
    dto::{CreateTaskRequest, TaskResponse},
    error::TaskServiceResult,
    title::ensure_title_available,
};
use crate::task::{domain::Task, ports::TaskRepository};
use mockable::Clock;
use std::sync::Arc;
use tracing::info;

/// Validates, de-duplicates and stores a new task.
pub struct CreateTaskUseCase<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> CreateTaskUseCase<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates the use case over a repository and clock.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a task.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskServiceError::Validation`] when the title is blank
    /// or longer than 255 characters, [`super::TaskServiceError::Duplicate`]
    /// when another task already uses the title, and
    /// [`super::TaskServiceError::Repository`] when storage fails.
    pub async fn execute(&self, request: CreateTaskRequest) -> TaskServiceResult<TaskResponse> {
        request.validate()?;
        ensure_title_available(&*self.repository, request.title(), None).await?;

        let (title, description) = request.into_parts();
        let task = Task::create(title, description, &*self.clock);
        let saved = self.repository.save(&task).await?;

        info!(task_id = %saved.id(), "task created");
        Ok(TaskResponse::from(&saved))
    }
}
