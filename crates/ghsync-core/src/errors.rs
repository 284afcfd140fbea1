//! Domain errors.

use thiserror::Error;

/// Domain error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum DomainError {
    /// No stored credential for this user.
    #[error("Not authenticated: no GitHub integration for user {user_id}")]
    NotAuthenticated { user_id: u64 },

    /// Wraps [`ghsync_ghapi_interface::ApiError`].
    #[error("API error: {source}")]
    ApiError {
        source: ghsync_ghapi_interface::ApiError,
    },

    /// Wraps [`ghsync_database_interface::DatabaseError`].
    #[error("Database error: {source}")]
    DatabaseError {
        source: ghsync_database_interface::DatabaseError,
    },
}

impl From<ghsync_ghapi_interface::ApiError> for DomainError {
    fn from(e: ghsync_ghapi_interface::ApiError) -> Self {
        Self::ApiError { source: e }
    }
}

impl From<ghsync_database_interface::DatabaseError> for DomainError {
    fn from(e: ghsync_database_interface::DatabaseError) -> Self {
        Self::DatabaseError { source: e }
    }
}

/// Result alias for `DomainError`.
pub type Result<T> = core::result::Result<T, DomainError>;
