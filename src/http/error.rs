//! Mapping of use case failures onto HTTP status codes and error bodies.

use crate::config::Environment;
use crate::task::{ports::TaskRepositoryError, services::TaskServiceError};
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, error};

const HIDDEN_INTERNAL_MESSAGE: &str = "Something went wrong";

/// Error response returned by every handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    error: &'static str,
    message: String,
    path: Option<String>,
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    success: bool,
    error: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<&'a str>,
    timestamp: DateTime<Utc>,
}

impl ApiError {
    /// Creates an error with an explicit status.
    #[must_use]
    pub fn new(status: StatusCode, error: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            error,
            message: message.into(),
            path: None,
        }
    }

    /// Records the request path reported in the error body.
    #[must_use]
    pub fn at(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Creates a 400 response for malformed input.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Bad Request", message)
    }

    /// Classifies a use case failure.
    ///
    /// Storage failures become 500 responses whose message is hidden in
    /// production.
    #[must_use]
    pub fn from_service(err: &TaskServiceError, environment: Environment) -> Self {
        let (status, label) = classify(err);
        let message = if status.is_server_error() {
            error!(error = %err, "task request failed");
            if environment.is_production() {
                HIDDEN_INTERNAL_MESSAGE.to_owned()
            } else {
                err.to_string()
            }
        } else {
            debug!(error = %err, status = status.as_u16(), "task request rejected");
            err.to_string()
        };
        Self::new(status, label, message)
    }

    /// Returns the HTTP status.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the client-facing message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the request path, once the router has attached it.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            success: false,
            error: self.error,
            message: &self.message,
            path: self.path.as_deref(),
            timestamp: Utc::now(),
        };
        let mut response = (self.status, Json(body)).into_response();
        response.extensions_mut().insert(self);
        response
    }
}

fn classify(err: &TaskServiceError) -> (StatusCode, &'static str) {
    match err {
        TaskServiceError::InvalidArgument(_) => (StatusCode::BAD_REQUEST, "Bad Request"),
        TaskServiceError::Validation(_) => (StatusCode::BAD_REQUEST, "Validation Error"),
        TaskServiceError::Domain(_) => (StatusCode::BAD_REQUEST, "Domain Error"),
        TaskServiceError::NotFound(_)
        | TaskServiceError::Repository(TaskRepositoryError::NotFound(_)) => {
            (StatusCode::NOT_FOUND, "Not Found")
        }
        TaskServiceError::Duplicate(_)
        | TaskServiceError::Repository(TaskRepositoryError::DuplicateTitle(_)) => {
            (StatusCode::CONFLICT, "Conflict")
        }
        TaskServiceError::Repository(TaskRepositoryError::Persistence(_)) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
        }
    }
}
