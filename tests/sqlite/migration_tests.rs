//! Schema migration behaviour of the `SQLite` adapter.

use super::helpers::{SqliteContext, sqlite_context};
use rstest::rstest;
use tasks_api::task::{
    adapters::sqlite::{IN_MEMORY_URL, SqliteTaskRepository, latest_version, open_database},
    domain::Task,
    ports::TaskRepository,
};

#[rstest]
fn latest_version_covers_initial_schema() {
    assert!(latest_version() >= 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reopening_keeps_existing_rows(
    sqlite_context: Result<SqliteContext, eyre::Report>,
) -> Result<(), eyre::Report> {
    let ctx = sqlite_context?;
    let saved = ctx.repo.save(&Task::create("Durable", None, &ctx.clock)).await?;

    let reopened = SqliteTaskRepository::new(open_database(&ctx.path, 2)?);
    let found = reopened.find_by_id(saved.id()).await?;

    eyre::ensure!(
        found.map(|task| task.title().to_owned()).as_deref() == Some("Durable"),
        "row lost after reopening"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn in_memory_database_is_migrated() -> Result<(), eyre::Report> {
    let repo = SqliteTaskRepository::new(open_database(IN_MEMORY_URL, 1)?);

    let tasks = repo.find_all().await?;

    eyre::ensure!(tasks.is_empty(), "fresh in-memory database should be empty");
    Ok(())
}

#[rstest]
fn in_memory_connections_are_never_retired() -> Result<(), eyre::Report> {
    let pool = open_database(IN_MEMORY_URL, 1)?;

    eyre::ensure!(pool.max_lifetime().is_none(), "in-memory connection has a max lifetime");
    eyre::ensure!(pool.idle_timeout().is_none(), "in-memory connection has an idle timeout");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn every_in_memory_connection_gets_the_schema() -> Result<(), eyre::Report> {
    let pool = open_database(IN_MEMORY_URL, 2)?;
    let held = pool.get()?;
    let repo = SqliteTaskRepository::new(pool.clone());

    let tasks = repo.find_all().await?;
    drop(held);

    eyre::ensure!(tasks.is_empty(), "second connection should see an empty tasks table");
    Ok(())
}
