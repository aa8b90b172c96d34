//! Shared helper functions for SQLite repositories.

use crate::db::DbError;

/// Classify a driver error into the storage-agnostic error type.
///
/// Anything that means "the store could not be reached" becomes
/// `DbError::Connection`; integrity violations become `DbError::Constraint`.
pub fn map_sqlx_error(e: sqlx::Error) -> DbError {
    let message = e.to_string();
    match &e {
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => DbError::Connection { message },
        sqlx::Error::Configuration(_) => DbError::Configuration { message },
        sqlx::Error::Database(db)
            if db.is_unique_violation()
                || db.is_foreign_key_violation()
                || db.is_check_violation() =>
        {
            DbError::Constraint { message }
        }
        _ => DbError::Database { message },
    }
}
