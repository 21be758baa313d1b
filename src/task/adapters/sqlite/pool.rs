//! Connection pool construction and per-connection settings.

use super::migrations::apply_migrations;
use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PoolError};
use diesel::sqlite::SqliteConnection;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// `SQLite` connection pool type used by task adapters.
pub type TaskSqlitePool = Pool<ConnectionManager<SqliteConnection>>;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Errors raised while opening or migrating the task database.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// The pool could not establish connections.
    #[error("failed to open database pool: {0}")]
    Pool(#[from] PoolError),

    /// A schema query failed.
    #[error("schema migration failed: {0}")]
    Migration(#[from] diesel::result::Error),

    /// The database was written by a newer schema than this binary knows.
    #[error("database schema version {db_version} is newer than supported version {latest_supported}")]
    UnsupportedSchemaVersion {
        /// Version recorded in the database.
        db_version: i32,
        /// Latest version this binary can apply.
        latest_supported: i32,
    },
}

/// `SQLite` URL naming a private, per-connection in-memory database.
pub const IN_MEMORY_URL: &str = ":memory:";

/// Prepares every connection the pool opens.
#[derive(Debug, Clone, Copy)]
struct ConnectionSetup {
    busy_timeout: Duration,
    migrate: bool,
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionSetup {
    fn on_acquire(&self, connection: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        connection
            .batch_execute(&format!(
                "PRAGMA busy_timeout = {}; PRAGMA journal_mode = WAL; PRAGMA foreign_keys = ON;",
                self.busy_timeout.as_millis()
            ))
            .map_err(diesel::r2d2::Error::QueryError)?;

        // An in-memory connection starts from an empty database.
        if self.migrate {
            apply_migrations(connection).map_err(|err| match err {
                DatabaseError::Migration(query) => diesel::r2d2::Error::QueryError(query),
                other => diesel::r2d2::Error::QueryError(
                    diesel::result::Error::QueryBuilderError(Box::new(other)),
                ),
            })?;
        }
        Ok(())
    }
}

/// Opens a pooled connection to `database_url` and brings the schema up to
/// date.
///
/// `database_url` is a file path or [`IN_MEMORY_URL`]. In-memory databases
/// are private to each connection, so they should be opened with
/// `max_connections = 1`; their connections are never retired by age or
/// idleness, and any connection the pool does open is migrated first.
///
/// # Errors
///
/// Returns [`DatabaseError`] when the pool cannot connect or migrations fail.
pub fn open_database(
    database_url: &str,
    max_connections: u32,
) -> Result<TaskSqlitePool, DatabaseError> {
    let in_memory = database_url == IN_MEMORY_URL;
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let mut builder = Pool::builder()
        .max_size(max_connections)
        .connection_customizer(Box::new(ConnectionSetup {
            busy_timeout: BUSY_TIMEOUT,
            migrate: in_memory,
        }));
    if in_memory {
        builder = builder.max_lifetime(None).idle_timeout(None);
    }
    let pool = builder.build(manager)?;

    let mut connection = pool.get()?;
    apply_migrations(&mut connection)?;
    debug!(database_url, max_connections, "task database ready");
    Ok(pool)
}
