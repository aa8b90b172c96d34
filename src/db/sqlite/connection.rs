//! SQLite connection pool management.

use std::path::Path;
use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::{debug, warn};

use super::helpers::map_sqlx_error;
use super::{SqliteClienteRepository, SqliteMedicamentoRepository};
use crate::db::{Database, DatabaseConfig, DbError, DbResult};

/// SQLite database implementation.
///
/// Owns the single shared pool for the process. Connections are checked out
/// per statement and return to the pool when the statement completes.
pub struct SqliteDatabase {
    pool: SqlitePool,
}

impl SqliteDatabase {
    /// Build the pool described by `config`.
    ///
    /// The database must already exist; a missing file is a connection error.
    pub async fn connect(config: &DatabaseConfig) -> DbResult<Self> {
        if !config.url.starts_with("sqlite:") {
            return Err(DbError::Configuration {
                message: format!("unsupported database URL '{}', expected sqlite:", config.url),
            });
        }

        if config.max_connections == 0 {
            return Err(DbError::Configuration {
                message: "max_connections must be at least 1".to_string(),
            });
        }

        let options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|e| DbError::Configuration {
                message: e.to_string(),
            })?;

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect_with(options)
            .await
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?;

        debug!(url = %config.url, max_connections = config.max_connections, "Database pool ready");
        Ok(Self { pool })
    }

    /// Open a database file at the given path, creating it if missing.
    pub async fn open<P: AsRef<Path>>(path: P) -> DbResult<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(options)
            .await
            .map_err(map_sqlx_error)?;

        Ok(Self { pool })
    }

    /// Create an in-memory database (useful for testing).
    ///
    /// Every SQLite in-memory connection is its own database, so the pool is
    /// pinned to one connection that is never recycled.
    pub async fn in_memory() -> DbResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .map_err(map_sqlx_error)?;

        Ok(Self { pool })
    }

    /// Get the underlying pool for running statements directly.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close every pooled connection. Later statements fail with a connection error.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

impl Database for SqliteDatabase {
    type Clientes<'a> = SqliteClienteRepository<'a>;
    type Medicamentos<'a> = SqliteMedicamentoRepository<'a>;

    async fn probe(&self) -> bool {
        match sqlx::query_scalar::<_, i64>("SELECT 1")
            .fetch_one(&self.pool)
            .await
        {
            Ok(_) => true,
            Err(e) => {
                warn!(error = %e, "Database probe failed");
                false
            }
        }
    }

    fn clientes(&self) -> Self::Clientes<'_> {
        SqliteClienteRepository { pool: &self.pool }
    }

    fn medicamentos(&self) -> Self::Medicamentos<'_> {
        SqliteMedicamentoRepository { pool: &self.pool }
    }
}
