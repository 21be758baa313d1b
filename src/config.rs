//! Runtime configuration parsed from command-line flags and environment.

use crate::task::adapters::sqlite::IN_MEMORY_URL;
use clap::{Parser, ValueEnum};
use std::fmt;
use std::net::{Ipv4Addr, SocketAddr};

/// Deployment environment the server runs in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Environment {
    /// Local development: verbose logs, detailed error messages.
    #[default]
    Development,
    /// Production: internal error details are hidden from clients.
    Production,
}

impl Environment {
    /// Returns the canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }

    /// Returns `true` for [`Environment::Production`].
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output format for log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

/// Server configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "tasks_api_server", version, about = "Task CRUD HTTP API")]
pub struct AppConfig {
    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Deployment environment.
    #[arg(long, env = "APP_ENV", value_enum, default_value_t = Environment::Development)]
    pub environment: Environment,

    /// `SQLite` database file path, or `:memory:`.
    #[arg(long, env = "DATABASE_URL", default_value = "tasks.db")]
    pub database_url: String,

    /// Maximum pooled database connections.
    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value_t = 8)]
    pub max_connections: u32,

    /// Log output format.
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Returns the address the server binds to (all interfaces).
    #[must_use]
    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }

    /// Returns the pool size to use, forcing a single connection for
    /// in-memory databases.
    #[must_use]
    pub fn effective_max_connections(&self) -> u32 {
        if self.database_url == IN_MEMORY_URL {
            1
        } else {
            self.max_connections.max(1)
        }
    }
}
