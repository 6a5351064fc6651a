//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`HbnbError`]
//! via `#[from]`. Adapters box their backend errors into
//! [`HbnbError::Storage`].

/// Top-level error returned by application services.
#[derive(Debug, thiserror::Error)]
pub enum HbnbError {
    /// The request payload was rejected.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A referenced record does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The storage backend failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Reasons a request payload is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The body is missing, not JSON, or not a JSON object.
    #[error("Not a JSON")]
    NotAJson,

    /// A required field is absent.
    #[error("Missing {0}")]
    MissingField(&'static str),
}

/// A lookup by identifier found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Kind of record that was looked up (`"State"`, `"User"`, …).
    pub entity: &'static str,
    /// Identifier as received from the caller.
    pub id: String,
}
