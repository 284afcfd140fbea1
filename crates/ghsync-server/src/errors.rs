//! Server errors.

use actix_http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use ghsync_core::DomainError;
use ghsync_crypto::CryptoError;
use ghsync_database_interface::DatabaseError;
use ghsync_ghapi_interface::ApiError;
use thiserror::Error;

/// Server error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("I/O error,\n  caused by: {}", source)]
    IoError { source: std::io::Error },

    #[error("{source}")]
    DomainError { source: DomainError },

    #[error("Token error: {source}")]
    CryptoError { source: CryptoError },

    #[error("Database error: {source}")]
    DatabaseError { source: DatabaseError },

    #[error("API error: {source}")]
    ApiError { source: ApiError },

    #[error("Metrics error: {reason}")]
    MetricsError { reason: String },
}

impl From<DomainError> for ServerError {
    fn from(e: DomainError) -> Self {
        Self::DomainError { source: e }
    }
}

impl From<CryptoError> for ServerError {
    fn from(e: CryptoError) -> Self {
        Self::CryptoError { source: e }
    }
}

impl From<DatabaseError> for ServerError {
    fn from(e: DatabaseError) -> Self {
        Self::DatabaseError { source: e }
    }
}

impl From<ApiError> for ServerError {
    fn from(e: ApiError) -> Self {
        Self::ApiError { source: e }
    }
}

impl ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::DomainError {
                source: DomainError::NotAuthenticated { .. },
            } => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.to_string()
        }))
    }
}

/// Result alias for `ServerError`.
pub type Result<T> = core::result::Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use actix_web::body::MessageBody;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn not_authenticated_is_unauthorized() {
        let error = ServerError::from(DomainError::NotAuthenticated { user_id: 1 });
        assert_eq!(error.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn other_errors_are_json_500() {
        let error = ServerError::from(DomainError::from(DatabaseError::UnknownIntegration(4)));
        let response = error.error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = response.into_body().try_into_bytes().unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"error": "Database error: No integration for user ID '4'"})
        );
    }
}
