//! API errors.

use thiserror::Error;

/// API error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ApiError {
    /// Upstream answered with a non-success status.
    #[error("GitHub request on {url} failed with status {status}: {body}")]
    RemoteFetchError { url: String, status: u16, body: String },

    /// Request could not be sent or its response could not be read.
    #[error("GitHub request on {url} could not complete: {source}")]
    HttpError {
        url: String,
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    /// Response body does not have the expected shape.
    #[error("Unexpected payload from {route}: {reason}")]
    InvalidPayload { route: String, reason: String },

    /// OAuth code exchange was refused.
    #[error("OAuth code exchange failed: {reason}")]
    OAuthError { reason: String },

    #[error(transparent)]
    ImplementationError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

impl ApiError {
    pub fn invalid_payload<E: std::fmt::Display>(route: &str, reason: E) -> Self {
        Self::InvalidPayload {
            route: route.into(),
            reason: reason.to_string(),
        }
    }
}

/// Result alias for `ApiError`.
pub type Result<T, E = ApiError> = core::result::Result<T, E>;
