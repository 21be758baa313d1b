//! Domain model for the task entity.
//!
//! The task domain owns identity, timestamps and in-place mutation while
//! keeping validation of user input and all infrastructure concerns outside
//! of the domain boundary.

mod error;
mod ids;
mod task;

pub use error::TaskDomainError;
pub use ids::TaskId;
pub use task::{PersistedTaskData, Task};
