use thiserror::Error;

/// Errors that can occur during repository operations.
///
/// `NotFound` is an expected, reportable outcome whenever an operation
/// references a nonexistent id; the other variants are storage failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
