//! `SQLite` adapters for task persistence.
//!
//! The connection pool is built once at startup by [`open_database`], handed
//! to [`SqliteTaskRepository`] and released when the last clone is dropped.

mod migrations;
mod models;
mod pool;
mod repository;
mod schema;

pub use migrations::latest_version;
pub use pool::{DatabaseError, IN_MEMORY_URL, TaskSqlitePool, open_database};
pub use repository::SqliteTaskRepository;
