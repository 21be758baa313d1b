//! Unique title index and missing-row failures in the `SQLite` repository.

use super::helpers::{SqliteContext, sqlite_context};
use rstest::rstest;
use tasks_api::task::{
    domain::{Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unique_index_rejects_duplicate_title(
    sqlite_context: Result<SqliteContext, eyre::Report>,
) -> Result<(), eyre::Report> {
    let ctx = sqlite_context?;
    ctx.repo.save(&Task::create("Only once", None, &ctx.clock)).await?;

    let result = ctx.repo.save(&Task::create("Only once", None, &ctx.clock)).await;

    eyre::ensure!(
        matches!(result, Err(TaskRepositoryError::DuplicateTitle(ref title)) if title == "Only once"),
        "expected DuplicateTitle, got {result:?}"
    );
    eyre::ensure!(ctx.repo.find_all().await?.len() == 1, "duplicate row was stored");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rename_onto_existing_title_is_rejected(
    sqlite_context: Result<SqliteContext, eyre::Report>,
) -> Result<(), eyre::Report> {
    let ctx = sqlite_context?;
    ctx.repo.save(&Task::create("Taken", None, &ctx.clock)).await?;
    let mut other = ctx.repo.save(&Task::create("Free", None, &ctx.clock)).await?;
    other.update("Taken", None, false, &ctx.clock);

    let result = ctx.repo.update(&other).await;

    eyre::ensure!(
        matches!(result, Err(TaskRepositoryError::DuplicateTitle(_))),
        "expected DuplicateTitle, got {result:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_of_missing_row_is_not_found(
    sqlite_context: Result<SqliteContext, eyre::Report>,
) -> Result<(), eyre::Report> {
    let ctx = sqlite_context?;
    let ghost = Task::create("Ghost", None, &ctx.clock).with_id(TaskId::new(404)?);

    let result = ctx.repo.update(&ghost).await;

    eyre::ensure!(
        matches!(result, Err(TaskRepositoryError::NotFound(id)) if id.value() == 404),
        "expected NotFound, got {result:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_of_missing_row_is_not_found(
    sqlite_context: Result<SqliteContext, eyre::Report>,
) -> Result<(), eyre::Report> {
    let ctx = sqlite_context?;

    let result = ctx.repo.delete(TaskId::new(12)?).await;

    eyre::ensure!(
        matches!(result, Err(TaskRepositoryError::NotFound(_))),
        "expected NotFound, got {result:?}"
    );
    Ok(())
}
