//! Shared application state handed to every handler.

use crate::config::Environment;
use crate::task::{ports::TaskRepository, services::TaskUseCases};
use mockable::Clock;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Shared application dependencies.
pub struct AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    use_cases: Arc<TaskUseCases<R, C>>,
    environment: Environment,
    started_at: Instant,
}

impl<R, C> AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates state around the wired use cases.
    #[must_use]
    pub fn new(use_cases: TaskUseCases<R, C>, environment: Environment) -> Self {
        Self {
            use_cases: Arc::new(use_cases),
            environment,
            started_at: Instant::now(),
        }
    }

    /// Returns the task use cases.
    #[must_use]
    pub fn use_cases(&self) -> &TaskUseCases<R, C> {
        &self.use_cases
    }

    /// Returns the deployment environment.
    #[must_use]
    pub const fn environment(&self) -> Environment {
        self.environment
    }

    /// Returns how long the server has been running.
    #[must_use]
    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}

impl<R, C> Clone for AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            use_cases: Arc::clone(&self.use_cases),
            environment: self.environment,
            started_at: self.started_at,
        }
    }
}
