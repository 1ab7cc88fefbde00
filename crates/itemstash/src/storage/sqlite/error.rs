//! SQLite error mapping.
//!
//! Maps `tokio_rusqlite::Error` and `rusqlite::Error` to `RepositoryError`
//! from `itemstash_core::storage`.

use itemstash_core::storage::RepositoryError;

/// Maps a rusqlite error to a RepositoryError.
///
/// # Error Mapping
///
/// - `QueryReturnedNoRows` → `RepositoryError::NotFound`
/// - Connection errors → `RepositoryError::ConnectionFailed`
/// - All other errors → `RepositoryError::QueryFailed`
fn map_rusqlite_error(
    err: &rusqlite::Error,
    entity_type: &'static str,
    id: &str,
) -> RepositoryError {
    match err {
        // Connection-related errors
        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.code == rusqlite::ErrorCode::CannotOpen =>
        {
            RepositoryError::ConnectionFailed(format!("Cannot open database: {err}"))
        }

        // Query returned no rows (not found)
        rusqlite::Error::QueryReturnedNoRows => RepositoryError::NotFound {
            entity_type,
            id: id.to_string(),
        },

        // All other errors
        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

/// Maps a tokio_rusqlite error with a known ID to a RepositoryError.
///
/// This is the main entry point for error mapping in async code. It
/// extracts the inner `rusqlite::Error` if present, otherwise maps to a
/// generic error.
pub fn map_tokio_rusqlite_error_with_id(
    err: tokio_rusqlite::Error,
    entity_type: &'static str,
    id: impl Into<String>,
) -> RepositoryError {
    let id_str = id.into();
    match &err {
        tokio_rusqlite::Error::Rusqlite(rusqlite_err) => {
            map_rusqlite_error(rusqlite_err, entity_type, &id_str)
        }
        tokio_rusqlite::Error::Close(_) => {
            RepositoryError::ConnectionFailed("Connection closed unexpectedly".to_string())
        }
        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

/// Maps a tokio_rusqlite error when no entity ID is known at the call site.
pub fn map_tokio_rusqlite_error(
    err: tokio_rusqlite::Error,
    entity_type: &'static str,
) -> RepositoryError {
    map_tokio_rusqlite_error_with_id(err, entity_type, "unknown")
}
