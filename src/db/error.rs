//! Database error types.
//!
//! Uses miette for diagnostic output and thiserror for derive macros.
//! The variants carry enough cause information for the HTTP layer to pick a
//! status code without inspecting driver errors.

use miette::Diagnostic;
use thiserror::Error;

/// Database operation errors.
#[derive(Error, Diagnostic, Debug)]
pub enum DbError {
    #[error("Database error: {message}")]
    #[diagnostic(code(farmacia::db::database_error))]
    Database { message: String },

    #[error("Connection error: {message}")]
    #[diagnostic(
        code(farmacia::db::connection_error),
        help("Check DATABASE_URL and that the database is reachable.")
    )]
    Connection { message: String },

    #[error("Constraint violation: {message}")]
    #[diagnostic(code(farmacia::db::constraint))]
    Constraint { message: String },

    #[error("Invalid database configuration: {message}")]
    #[diagnostic(code(farmacia::db::configuration))]
    Configuration { message: String },
}

impl DbError {
    /// True when the store itself could not be reached (pool closed, timed out, I/O).
    pub fn is_connection(&self) -> bool {
        matches!(self, DbError::Connection { .. })
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
