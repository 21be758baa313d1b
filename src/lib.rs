//! Tasks API: a layered CRUD backend for a single task entity.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: the task entity, its identity and timestamps
//! - **Ports**: the repository trait consumed by the use cases
//! - **Adapters**: in-memory and `SQLite` repository implementations
//! - **Services**: one use case per workflow, with request/response DTOs
//!
//! # Modules
//!
//! - [`task`]: domain, ports, adapters and use cases
//! - [`http`]: axum transport mapping use case results onto JSON
//! - [`config`]: command-line and environment configuration
//! - [`telemetry`]: `tracing` subscriber setup
//! - [`server`]: process bootstrap and graceful shutdown

pub mod config;
pub mod http;
pub mod server;
pub mod task;
pub mod telemetry;
