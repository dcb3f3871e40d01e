//! Domain errors for the todolist system.

use thiserror::Error;

/// Domain-level errors that can occur in the todolist system.
///
/// Point lookups report a missing item as `None`; `ItemNotFound` is for
/// callers that require the item to exist.
#[derive(Debug, Error)]
pub enum DomainError {
    /// No item with this id exists.
    #[error("Item not found: {0}")]
    ItemNotFound(i64),

    /// The backing store failed.
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Result alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

impl From<sqlx::Error> for DomainError {
    fn from(err: sqlx::Error) -> Self {
        DomainError::DatabaseError(err.to_string())
    }
}
