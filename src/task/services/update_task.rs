//! Use case for updating a task.
//!
//! Requests that only carry `completed` flip the completion state without
//! touching title rules or the duplicate-title lookup. Every other request
//! is a full update: it must carry a title that passes validation and does
//! not collide with another task's title.

use super::{
    dto::{FieldUpdate, TaskResponse, UpdateMode, UpdateTaskRequest},
    error::{TaskServiceError, TaskServiceResult, parse_task_id},
    title::ensure_title_available,
};
use crate::task::{domain::Task, ports::TaskRepository};
use mockable::Clock;
use std::sync::Arc;
use tracing::{debug, info};

/// Applies status toggles and full updates to stored tasks.
pub struct UpdateTaskUseCase<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> UpdateTaskUseCase<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates the use case over a repository and clock.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Updates the task with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::InvalidArgument`] for a non-positive id,
    /// [`TaskServiceError::NotFound`] when no task matches,
    /// [`TaskServiceError::Validation`] when a full update omits the title
    /// or the title breaks the title rules, [`TaskServiceError::Duplicate`]
    /// when another task already uses the new title, and
    /// [`TaskServiceError::Repository`] when storage fails.
    pub async fn execute(
        &self,
        id: i64,
        request: UpdateTaskRequest,
    ) -> TaskServiceResult<TaskResponse> {
        let task_id = parse_task_id(id)?;
        let mut task = self
            .repository
            .find_by_id(task_id)
            .await?
            .ok_or(TaskServiceError::NotFound(task_id))?;

        match request.into_mode() {
            UpdateMode::StatusToggle(completed) => self.toggle_status(&mut task, completed),
            UpdateMode::Full(full) => self.apply_full_update(&mut task, full).await?,
        }

        let updated = self.repository.update(&task).await?;
        info!(task_id = %updated.id(), completed = updated.completed(), "task updated");
        Ok(TaskResponse::from(&updated))
    }

    fn toggle_status(&self, task: &mut Task, completed: bool) {
        debug!(task_id = %task.id(), completed, "toggling task status");
        let title = task.title().to_owned();
        let description = task.description().map(str::to_owned);
        task.update(title, description, completed, &*self.clock);
    }

    async fn apply_full_update(
        &self,
        task: &mut Task,
        request: UpdateTaskRequest,
    ) -> TaskServiceResult<()> {
        request.validate()?;

        if let Some(new_title) = request.title().as_set() {
            if new_title != task.title() {
                ensure_title_available(&*self.repository, new_title, Some(task.id())).await?;
            }
        }

        let (title_update, description_update, completed_update) = request.into_parts();
        let title = title_update.unwrap_or_else(|| task.title().to_owned());
        let description =
            description_update.unwrap_or_else(|| task.description().map(str::to_owned));
        let completed = match completed_update {
            FieldUpdate::Keep => task.completed(),
            FieldUpdate::Set(value) => value,
        };
        task.update(title, description, completed, &*self.clock);
        Ok(())
    }
}
