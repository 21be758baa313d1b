//! Task CRUD endpoints and their success envelopes.

use super::helpers::{app, create, send};
use axum::{
    Router,
    http::{Method, StatusCode},
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_returns_201_with_task(app: Router) -> Result<(), eyre::Report> {
    let (status, json) = send(
        &app,
        Method::POST,
        "/tasks",
        Some(r#"{"title": "Buy milk", "description": "Oat"}"#),
    )
    .await?;

    eyre::ensure!(status == StatusCode::CREATED, "unexpected status {status}");
    eyre::ensure!(json["success"] == true, "success flag missing: {json}");
    eyre::ensure!(json["message"] == "Task created successfully", "message: {json}");
    eyre::ensure!(json["data"]["title"] == "Buy milk", "title: {json}");
    eyre::ensure!(json["data"]["description"] == "Oat", "description: {json}");
    eyre::ensure!(json["data"]["completed"] == false, "completed: {json}");
    eyre::ensure!(json["data"]["createdAt"].is_string(), "createdAt: {json}");
    eyre::ensure!(json["data"]["updatedAt"].is_string(), "updatedAt: {json}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_returns_count_and_newest_first(app: Router) -> Result<(), eyre::Report> {
    for title in ["T1", "T2", "T3"] {
        create(&app, &format!(r#"{{"title": "{title}"}}"#)).await?;
    }

    let (status, json) = send(&app, Method::GET, "/tasks", None).await?;

    eyre::ensure!(status == StatusCode::OK, "unexpected status {status}");
    eyre::ensure!(json["count"] == 3, "count: {json}");
    let titles: Vec<_> = json["data"]
        .as_array()
        .ok_or_else(|| eyre::eyre!("data is not an array: {json}"))?
        .iter()
        .filter_map(|task| task["title"].as_str())
        .collect();
    eyre::ensure!(titles == ["T3", "T2", "T1"], "unexpected order {titles:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_returns_created_task(app: Router) -> Result<(), eyre::Report> {
    let id = create(&app, r#"{"title": "Fetch me"}"#).await?;

    let (status, json) = send(&app, Method::GET, &format!("/tasks/{id}"), None).await?;

    eyre::ensure!(status == StatusCode::OK, "unexpected status {status}");
    eyre::ensure!(json["data"]["id"] == id, "id: {json}");
    eyre::ensure!(json["data"]["title"] == "Fetch me", "title: {json}");
    eyre::ensure!(json.get("message").is_none(), "unexpected message: {json}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn toggle_via_put_keeps_title(app: Router) -> Result<(), eyre::Report> {
    let id = create(&app, r#"{"title": "A", "description": "B"}"#).await?;

    let (status, json) = send(
        &app,
        Method::PUT,
        &format!("/tasks/{id}"),
        Some(r#"{"completed": true}"#),
    )
    .await?;

    eyre::ensure!(status == StatusCode::OK, "unexpected status {status}");
    eyre::ensure!(json["message"] == "Task updated successfully", "message: {json}");
    eyre::ensure!(json["data"]["completed"] == true, "completed: {json}");
    eyre::ensure!(json["data"]["title"] == "A", "title: {json}");
    eyre::ensure!(json["data"]["description"] == "B", "description: {json}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn null_description_clears_it(app: Router) -> Result<(), eyre::Report> {
    let id = create(&app, r#"{"title": "Notes", "description": "old"}"#).await?;

    let (status, json) = send(
        &app,
        Method::PUT,
        &format!("/tasks/{id}"),
        Some(r#"{"title": "Notes", "description": null}"#),
    )
    .await?;

    eyre::ensure!(status == StatusCode::OK, "unexpected status {status}");
    eyre::ensure!(json["data"].get("description").is_none(), "description: {json}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_then_get_is_404(app: Router) -> Result<(), eyre::Report> {
    let id = create(&app, r#"{"title": "Short-lived"}"#).await?;
    let path = format!("/tasks/{id}");

    let (deleted, body) = send(&app, Method::DELETE, &path, None).await?;
    let (fetched, _) = send(&app, Method::GET, &path, None).await?;

    eyre::ensure!(deleted == StatusCode::OK, "delete returned {deleted}");
    eyre::ensure!(body["success"] == true, "delete body: {body}");
    eyre::ensure!(body["message"] == "Task deleted successfully", "delete body: {body}");
    eyre::ensure!(body.get("data").is_none(), "delete body carries data: {body}");
    eyre::ensure!(fetched == StatusCode::NOT_FOUND, "get after delete returned {fetched}");
    Ok(())
}
