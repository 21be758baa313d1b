//! Shared fixtures for HTTP API integration tests.

use crate::test_helpers::StepClock;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, Response, StatusCode, header},
};
use rstest::fixture;
use serde_json::Value;
use std::sync::Arc;
use tasks_api::{
    config::Environment,
    http::{AppState, router},
    task::{adapters::memory::InMemoryTaskRepository, services::TaskUseCases},
};
use tower::ServiceExt;

/// Builds a router over an empty in-memory repository.
pub fn app_for(environment: Environment) -> Router {
    let use_cases = TaskUseCases::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(StepClock::new()),
    );
    router(AppState::new(use_cases, environment))
}

/// Router in the development environment.
#[fixture]
pub fn app() -> Router {
    app_for(Environment::Development)
}

/// Sends one request and returns the status with the decoded JSON body.
///
/// # Errors
///
/// Returns an error when the request cannot be built or the body is not
/// JSON.
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<&str>,
) -> Result<(StatusCode, Value), eyre::Report> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_owned()))?,
        None => builder.body(Body::empty())?,
    };

    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    let json = serde_json::from_slice(&bytes)?;
    Ok((status, json))
}

/// Sends a prepared request and returns the raw response.
///
/// # Errors
///
/// Returns an error when the router fails to respond.
pub async fn respond(app: &Router, request: Request<Body>) -> Result<Response<Body>, eyre::Report> {
    Ok(app.clone().oneshot(request).await?)
}

/// Creates a task through the API and returns its id.
///
/// # Errors
///
/// Returns an error when the request fails or does not return 201.
pub async fn create(app: &Router, body: &str) -> Result<i64, eyre::Report> {
    let (status, json) = send(app, Method::POST, "/tasks", Some(body)).await?;
    eyre::ensure!(status == StatusCode::CREATED, "create returned {status}: {json}");
    json["data"]["id"]
        .as_i64()
        .ok_or_else(|| eyre::eyre!("created task has no id: {json}"))
}
