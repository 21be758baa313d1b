//! Ordered schema migrations tracked through `PRAGMA user_version`.

use super::pool::DatabaseError;
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::sql_types::Integer;
use diesel::sqlite::SqliteConnection;
use tracing::info;

#[derive(Debug, Clone, Copy)]
struct Migration {
    version: i32,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    sql: include_str!("0001_create_tasks.sql"),
}];

#[derive(QueryableByName)]
struct UserVersion {
    #[diesel(sql_type = Integer)]
    user_version: i32,
}

/// Returns the latest schema version known by this binary.
#[must_use]
pub fn latest_version() -> i32 {
    MIGRATIONS.last().map_or(0, |migration| migration.version)
}

/// Applies all pending migrations in one immediate transaction.
pub(super) fn apply_migrations(connection: &mut SqliteConnection) -> Result<(), DatabaseError> {
    let current = current_user_version(connection)?;
    let latest = latest_version();

    if current > latest {
        return Err(DatabaseError::UnsupportedSchemaVersion {
            db_version: current,
            latest_supported: latest,
        });
    }
    if current == latest {
        return Ok(());
    }

    connection.immediate_transaction(|tx| {
        for migration in MIGRATIONS.iter().filter(|m| m.version > current) {
            tx.batch_execute(migration.sql)?;
            tx.batch_execute(&format!("PRAGMA user_version = {};", migration.version))?;
        }
        Ok::<(), diesel::result::Error>(())
    })?;

    info!(from = current, to = latest, "applied task schema migrations");
    Ok(())
}

fn current_user_version(connection: &mut SqliteConnection) -> QueryResult<i32> {
    diesel::sql_query("PRAGMA user_version")
        .get_result::<UserVersion>(connection)
        .map(|row| row.user_version)
}
