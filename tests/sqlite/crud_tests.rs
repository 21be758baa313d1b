//! CRUD round-trips through the `SQLite` repository.

use super::helpers::{SqliteContext, sqlite_context};
use rstest::rstest;
use tasks_api::task::{
    domain::{Task, TaskId},
    ports::TaskRepository,
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn save_assigns_id_and_round_trips_fields(
    sqlite_context: Result<SqliteContext, eyre::Report>,
) -> Result<(), eyre::Report> {
    let ctx = sqlite_context?;
    let draft = Task::create("Plan sprint", Some("Two weeks".to_owned()), &ctx.clock);

    let saved = ctx.repo.save(&draft).await?;
    let found = ctx
        .repo
        .find_by_id(saved.id())
        .await?
        .ok_or_else(|| eyre::eyre!("saved task not found"))?;

    eyre::ensure!(saved.is_persisted(), "id was not assigned");
    eyre::ensure!(found.title() == "Plan sprint", "title mismatch");
    eyre::ensure!(found.description() == Some("Two weeks"), "description mismatch");
    eyre::ensure!(!found.completed(), "completion mismatch");
    eyre::ensure!(found.created_at() == draft.created_at(), "created_at mismatch");
    eyre::ensure!(found.updated_at() == draft.updated_at(), "updated_at mismatch");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_overwrites_mutable_fields(
    sqlite_context: Result<SqliteContext, eyre::Report>,
) -> Result<(), eyre::Report> {
    let ctx = sqlite_context?;
    let mut task = ctx
        .repo
        .save(&Task::create("Draft", Some("notes".to_owned()), &ctx.clock))
        .await?;
    task.update("Final", None, true, &ctx.clock);

    let updated = ctx.repo.update(&task).await?;

    eyre::ensure!(updated.title() == "Final", "title not updated");
    eyre::ensure!(updated.description().is_none(), "description not cleared");
    eyre::ensure!(updated.completed(), "completion not updated");
    eyre::ensure!(updated.updated_at() > updated.created_at(), "updated_at not refreshed");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_all_lists_newest_first(
    sqlite_context: Result<SqliteContext, eyre::Report>,
) -> Result<(), eyre::Report> {
    let ctx = sqlite_context?;
    for title in ["T1", "T2", "T3"] {
        ctx.repo.save(&Task::create(title, None, &ctx.clock)).await?;
    }

    let titles: Vec<String> = ctx
        .repo
        .find_all()
        .await?
        .iter()
        .map(|task| task.title().to_owned())
        .collect();

    eyre::ensure!(titles == ["T3", "T2", "T1"], "unexpected order {titles:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_then_lookup_is_none(
    sqlite_context: Result<SqliteContext, eyre::Report>,
) -> Result<(), eyre::Report> {
    let ctx = sqlite_context?;
    let saved = ctx.repo.save(&Task::create("Ephemeral", None, &ctx.clock)).await?;

    eyre::ensure!(ctx.repo.exists(saved.id()).await?, "task should exist before delete");
    ctx.repo.delete(saved.id()).await?;

    eyre::ensure!(!ctx.repo.exists(saved.id()).await?, "task still exists");
    eyre::ensure!(ctx.repo.find_by_id(saved.id()).await?.is_none(), "task still found");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_by_title_matches_exactly(
    sqlite_context: Result<SqliteContext, eyre::Report>,
) -> Result<(), eyre::Report> {
    let ctx = sqlite_context?;
    let saved = ctx.repo.save(&Task::create("Exact", None, &ctx.clock)).await?;

    let found = ctx.repo.find_by_title("Exact").await?;
    let missing = ctx.repo.find_by_title("exact").await?;
    let unknown = ctx.repo.find_by_id(TaskId::new(saved.id().value() + 100)?).await?;

    eyre::ensure!(found.map(|task| task.id()) == Some(saved.id()), "title lookup failed");
    eyre::ensure!(missing.is_none(), "lookup ignored case");
    eyre::ensure!(unknown.is_none(), "unknown id returned a task");
    Ok(())
}
