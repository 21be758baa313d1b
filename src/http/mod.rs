//! HTTP transport for the task use cases.
//!
//! Handlers only translate between JSON and the use case DTOs; business
//! rules stay in [`crate::task::services`].

mod envelope;
mod error;
mod handlers;
mod health;
mod router;
mod security;
mod state;

pub use envelope::ApiResponse;
pub use error::ApiError;
pub use health::HealthResponse;
pub use router::{BODY_LIMIT_BYTES, router};
pub use security::cors_layer;
pub use state::AppState;
