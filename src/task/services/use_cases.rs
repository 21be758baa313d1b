//! Bundle wiring every task use case against one repository and clock.

use super::{
    CreateTaskUseCase, DeleteTaskUseCase, GetAllTasksUseCase, GetTaskByIdUseCase,
    UpdateTaskUseCase,
};
use crate::task::ports::TaskRepository;
use mockable::Clock;
use std::sync::Arc;

/// All task use cases sharing a repository and clock.
pub struct TaskUseCases<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates tasks.
    pub create: CreateTaskUseCase<R, C>,
    /// Lists tasks.
    pub get_all: GetAllTasksUseCase<R>,
    /// Fetches one task.
    pub get_by_id: GetTaskByIdUseCase<R>,
    /// Updates or toggles a task.
    pub update: UpdateTaskUseCase<R, C>,
    /// Deletes a task.
    pub delete: DeleteTaskUseCase<R>,
}

impl<R, C> TaskUseCases<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Wires every use case to the shared repository and clock.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            create: CreateTaskUseCase::new(Arc::clone(&repository), Arc::clone(&clock)),
            get_all: GetAllTasksUseCase::new(Arc::clone(&repository)),
            get_by_id: GetTaskByIdUseCase::new(Arc::clone(&repository)),
            update: UpdateTaskUseCase::new(Arc::clone(&repository), clock),
            delete: DeleteTaskUseCase::new(repository),
        }
    }
}
