//! Title uniqueness check shared by create and full update.

use super::error::{TaskServiceError, TaskServiceResult};
use crate::task::{domain::TaskId, ports::TaskRepository};
use tracing::warn;

/// Fails with [`TaskServiceError::Duplicate`] when a task other than `owner`
/// already uses `title`.
pub(super) async fn ensure_title_available<R>(
    repository: &R,
    title: &str,
    owner: Option<TaskId>,
) -> TaskServiceResult<()>
where
    R: TaskRepository + ?Sized,
{
    match repository.find_by_title(title).await? {
        Some(existing) if Some(existing.id()) != owner => {
            warn!(existing_id = %existing.id(), title, "rejected duplicate task title");
            Err(TaskServiceError::Duplicate(title.to_owned()))
        }
        _ => Ok(()),
    }
}
