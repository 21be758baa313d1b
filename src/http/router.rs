//! Route table and request middleware.

use super::{error::ApiError, handlers, health, security, state::AppState};
use crate::task::ports::TaskRepository;
use axum::{
    Router,
    extract::{DefaultBodyLimit, Request},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
};
use mockable::Clock;
use std::time::Instant;
use tracing::info;

/// Maximum accepted request body size.
pub const BODY_LIMIT_BYTES: usize = 10 * 1024 * 1024;

/// Builds the application router.
pub fn router<R, C>(state: AppState<R, C>) -> Router
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let environment = state.environment();
    let routes = Router::new()
        .route("/", get(health::api_info))
        .route("/health", get(health::health::<R, C>))
        .route(
            "/tasks",
            get(handlers::list_tasks::<R, C>).post(handlers::create_task::<R, C>),
        )
        .route(
            "/tasks/{id}",
            get(handlers::get_task::<R, C>)
                .put(handlers::update_task::<R, C>)
                .delete(handlers::delete_task::<R, C>),
        )
        .fallback(health::not_found)
        .layer(middleware::from_fn(attach_error_path))
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(middleware::from_fn(log_request))
        .with_state(state);
    security::with_security_headers(routes).layer(security::cors_layer(environment))
}

/// Re-renders error responses so their body names the request path.
async fn attach_error_path(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    let response = next.run(request).await;
    let unplaced = response
        .extensions()
        .get::<ApiError>()
        .filter(|err| err.path().is_none())
        .cloned();
    match unplaced {
        Some(err) => err.at(path).into_response(),
        None => response,
    }
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(request).await;

    info!(
        %method,
        path = %path,
        status = response.status().as_u16(),
        elapsed = ?started.elapsed(),
        "handled request"
    );
    response
}
