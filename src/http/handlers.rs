//! HTTP handlers translating requests into task use case calls.

use super::{envelope::ApiResponse, error::ApiError, state::AppState};
use crate::task::{
    ports::TaskRepository,
    services::{CreateTaskRequest, TaskResponse, UpdateTaskRequest},
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use mockable::Clock;

const INVALID_ID_FORMAT: &str = "Invalid ID format. ID must be a number.";

/// Parses a path segment into a raw task id.
///
/// Range checks belong to the use cases; this only rejects non-numbers.
fn parse_path_id(raw: &str) -> Result<i64, ApiError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ApiError::bad_request(INVALID_ID_FORMAT))
}

/// `GET /tasks`
///
/// # Errors
///
/// Returns [`ApiError`] when storage fails.
pub async fn list_tasks<R, C>(
    State(state): State<AppState<R, C>>,
) -> Result<Json<ApiResponse<Vec<TaskResponse>>>, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let tasks = state
        .use_cases()
        .get_all
        .execute()
        .await
        .map_err(|err| ApiError::from_service(&err, state.environment()))?;
    Ok(Json(ApiResponse::list(tasks)))
}

/// `POST /tasks`
///
/// # Errors
///
/// Returns [`ApiError`] for malformed bodies, title violations, duplicate
/// titles and storage failures.
pub async fn create_task<R, C>(
    State(state): State<AppState<R, C>>,
    body: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<TaskResponse>>), ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Json(request) = body?;
    let task = state
        .use_cases()
        .create
        .execute(request)
        .await
        .map_err(|err| ApiError::from_service(&err, state.environment()))?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::data(task).with_message("Task created successfully")),
    ))
}

/// `GET /tasks/{id}`
///
/// # Errors
///
/// Returns [`ApiError`] for malformed or non-positive ids, missing tasks and
/// storage failures.
pub async fn get_task<R, C>(
    State(state): State<AppState<R, C>>,
    Path(raw_id): Path<String>,
) -> Result<Json<ApiResponse<TaskResponse>>, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let id = parse_path_id(&raw_id)?;
    let task = state
        .use_cases()
        .get_by_id
        .execute(id)
        .await
        .map_err(|err| ApiError::from_service(&err, state.environment()))?;
    Ok(Json(ApiResponse::data(task)))
}

/// `PUT /tasks/{id}`
///
/// # Errors
///
/// Returns [`ApiError`] for malformed ids or bodies, missing tasks, title
/// violations, duplicate titles and storage failures.
pub async fn update_task<R, C>(
    State(state): State<AppState<R, C>>,
    Path(raw_id): Path<String>,
    body: Result<Json<UpdateTaskRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<TaskResponse>>, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let id = parse_path_id(&raw_id)?;
    let Json(request) = body?;
    let task = state
        .use_cases()
        .update
        .execute(id, request)
        .await
        .map_err(|err| ApiError::from_service(&err, state.environment()))?;
    Ok(Json(
        ApiResponse::data(task).with_message("Task updated successfully"),
    ))
}

/// `DELETE /tasks/{id}`
///
/// # Errors
///
/// Returns [`ApiError`] for malformed or non-positive ids, missing tasks and
/// storage failures.
pub async fn delete_task<R, C>(
    State(state): State<AppState<R, C>>,
    Path(raw_id): Path<String>,
) -> Result<Json<ApiResponse<()>>, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let id = parse_path_id(&raw_id)?;
    state
        .use_cases()
        .delete
        .execute(id)
        .await
        .map_err(|err| ApiError::from_service(&err, state.environment()))?;
    Ok(Json(ApiResponse::message("Task deleted successfully")))
}
