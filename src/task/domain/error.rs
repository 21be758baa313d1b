//! Error types for task domain validation.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task identifier is negative.
    #[error("task identifier cannot be negative: {0}")]
    NegativeId(i64),
}
