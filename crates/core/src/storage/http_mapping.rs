//! Pure functions for mapping repository errors to HTTP status codes.
//!
//! This module provides HTTP status code mappings for [`RepositoryError`]
//! variants, following the Functional Core pattern - pure functions with no
//! side effects.

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `NotFound` -> 404 (Not Found)
/// - `ConnectionFailed` -> 503 (Service Unavailable)
/// - `QueryFailed` -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use itemstash_core::storage::{repository_error_to_status_code, RepositoryError};
///
/// let error = RepositoryError::NotFound {
///     entity_type: "Item",
///     id: "42".to_string(),
/// };
/// assert_eq!(repository_error_to_status_code(&error), 404);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::ConnectionFailed(_) => 503,
        RepositoryError::QueryFailed(_) => 500,
    }
}
