//! Connection pool configuration.

use std::env;
use std::time::Duration;

use crate::db::{DbError, DbResult};

const DEFAULT_URL: &str = "sqlite://farmacia.db";
const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Where the store lives and how large the shared pool may grow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// SQLx connection URL, e.g. `sqlite://farmacia.db`.
    pub url: String,
    /// Upper bound on pooled connections.
    pub max_connections: u32,
    /// How long a request waits for a free connection before failing.
    pub acquire_timeout: Duration,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
        }
    }
}

impl DatabaseConfig {
    /// Read `DATABASE_URL` and `DATABASE_MAX_CONNECTIONS`, falling back to defaults.
    pub fn from_env() -> DbResult<Self> {
        let mut config = Self::default();

        if let Ok(url) = env::var("DATABASE_URL")
            && !url.trim().is_empty()
        {
            config.url = url;
        }

        if let Ok(raw) = env::var("DATABASE_MAX_CONNECTIONS") {
            config.max_connections = raw.parse().map_err(|_| DbError::Configuration {
                message: format!("DATABASE_MAX_CONNECTIONS must be a positive integer, got '{raw}'"),
            })?;
        }

        if config.max_connections == 0 {
            return Err(DbError::Configuration {
                message: "DATABASE_MAX_CONNECTIONS must be at least 1".to_string(),
            });
        }

        Ok(config)
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }
}
