//! In-memory repository for task tests and demos.

use async_trait::async_trait;
use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Identifiers are assigned from a monotonically increasing counter starting
/// at 1, mirroring an auto-increment primary key.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, Task>,
    title_index: HashMap<String, TaskId>,
    last_id: i64,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the lock is poisoned.
    pub fn len(&self) -> TaskRepositoryResult<usize> {
        Ok(self.read()?.tasks.len())
    }

    /// Returns `true` when no tasks are stored.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the lock is poisoned.
    pub fn is_empty(&self) -> TaskRepositoryResult<bool> {
        Ok(self.read()?.tasks.is_empty())
    }

    fn read(&self) -> TaskRepositoryResult<RwLockReadGuard<'_, InMemoryTaskState>> {
        self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> TaskRepositoryResult<RwLockWriteGuard<'_, InMemoryTaskState>> {
        self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

/// Rejects a title already indexed under a different task.
fn ensure_title_free(
    state: &InMemoryTaskState,
    title: &str,
    owner: TaskId,
) -> TaskRepositoryResult<()> {
    match state.title_index.get(title) {
        Some(existing) if *existing != owner => {
            Err(TaskRepositoryError::DuplicateTitle(title.to_owned()))
        }
        _ => Ok(()),
    }
}

fn next_id(state: &mut InMemoryTaskState) -> TaskRepositoryResult<TaskId> {
    state.last_id = state.last_id.checked_add(1).ok_or_else(|| {
        TaskRepositoryError::persistence(std::io::Error::other("task id space exhausted"))
    })?;
    TaskId::new(state.last_id).map_err(TaskRepositoryError::persistence)
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn save(&self, task: &Task) -> TaskRepositoryResult<Task> {
        let mut state = self.write()?;
        ensure_title_free(&state, task.title(), TaskId::UNASSIGNED)?;

        let id = next_id(&mut state)?;
        let stored = task.clone().with_id(id);
        state.title_index.insert(stored.title().to_owned(), id);
        state.tasks.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<Task> {
        let mut state = self.write()?;

        let old_title = state
            .tasks
            .get(&task.id())
            .ok_or(TaskRepositoryError::NotFound(task.id()))?
            .title()
            .to_owned();
        ensure_title_free(&state, task.title(), task.id())?;

        // Remove the old title index entry before adding the updated one.
        state.title_index.remove(&old_title);
        state.title_index.insert(task.title().to_owned(), task.id());
        state.tasks.insert(task.id(), task.clone());
        Ok(task.clone())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.read()?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn find_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.read()?;
        let mut tasks: Vec<Task> = state.tasks.values().cloned().collect();
        tasks.sort_by_key(|task| Reverse((task.created_at(), task.id())));
        Ok(tasks)
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        let removed = state
            .tasks
            .remove(&id)
            .ok_or(TaskRepositoryError::NotFound(id))?;
        state.title_index.remove(removed.title());
        Ok(())
    }

    async fn exists(&self, id: TaskId) -> TaskRepositoryResult<bool> {
        let state = self.read()?;
        Ok(state.tasks.contains_key(&id))
    }

    async fn find_by_title(&self, title: &str) -> TaskRepositoryResult<Option<Task>> {
        let state = self.read()?;
        let task = state
            .title_index
            .get(title)
            .and_then(|task_id| state.tasks.get(task_id))
            .cloned();
        Ok(task)
    }
}
