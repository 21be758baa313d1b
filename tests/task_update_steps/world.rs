//! Shared world state for task update BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use tasks_api::task::{
    adapters::memory::InMemoryTaskRepository,
    services::{TaskResponse, TaskServiceResult, TaskUseCases},
};

/// Use case bundle used by the BDD world.
pub type TestUseCases = TaskUseCases<InMemoryTaskRepository, DefaultClock>;

/// Scenario world for task update behaviour tests.
pub struct TaskUpdateWorld {
    pub use_cases: TestUseCases,
    pub last_created_task: Option<TaskResponse>,
    pub last_update_result: Option<TaskServiceResult<TaskResponse>>,
}

impl TaskUpdateWorld {
    /// Creates a world over an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            use_cases: TaskUseCases::new(
                Arc::new(InMemoryTaskRepository::new()),
                Arc::new(DefaultClock),
            ),
            last_created_task: None,
            last_update_result: None,
        }
    }

    /// Returns the id of the most recently created task.
    ///
    /// # Errors
    ///
    /// Returns an error when no task was created in the scenario.
    pub fn last_task_id(&self) -> Result<i64, eyre::Report> {
        self.last_created_task
            .as_ref()
            .map(|task| task.id)
            .ok_or_else(|| eyre::eyre!("missing created task in scenario world"))
    }

    /// Returns the task produced by a successful update.
    ///
    /// # Errors
    ///
    /// Returns an error when no update ran or the update failed.
    pub fn updated_task(&self) -> Result<&TaskResponse, eyre::Report> {
        match self.last_update_result.as_ref() {
            Some(Ok(task)) => Ok(task),
            Some(Err(err)) => Err(eyre::eyre!("update failed: {err}")),
            None => Err(eyre::eyre!("missing update result in scenario world")),
        }
    }
}

impl Default for TaskUpdateWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskUpdateWorld {
    TaskUpdateWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
