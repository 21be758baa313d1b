//! Starts the tasks HTTP API.
//!
//! Usage:
//!
//! ```text
//! tasks_api_server [--port 3000] [--environment development|production]
//!                  [--database-url tasks.db] [--max-connections 8]
//!                  [--log-format pretty|json]
//! ```
//!
//! Every flag can also be supplied through its environment variable
//! (`PORT`, `APP_ENV`, `DATABASE_URL`, `DATABASE_MAX_CONNECTIONS`,
//! `LOG_FORMAT`). `RUST_LOG` overrides the log filter.

use clap::Parser;
use tasks_api::config::AppConfig;
use tasks_api::server::{ServerError, run};

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    run(AppConfig::parse()).await
}
