//! Session token validator.

use actix_web::{
    dev::ServiceRequest, http::StatusCode, web, Error, HttpMessage, HttpResponse, ResponseError,
};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use ghsync_crypto::{CryptoError, JwtUtils};
use ghsync_sentry::sentry;
use thiserror::Error;

use crate::server::AppContext;

/// Account authenticated by its session token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionUser {
    pub user_id: u64,
}

/// Validation error.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing application context.")]
    MissingContext,
    #[error("Invalid session token: {source}")]
    TokenError { source: CryptoError },
}

impl ValidationError {
    /// The session token is a live credential, so it stays out of the error and the Sentry scope.
    pub fn token_error(source: CryptoError) -> Self {
        Self::TokenError { source }
    }
}

impl ResponseError for ValidationError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingContext => StatusCode::INTERNAL_SERVER_ERROR,
            Self::TokenError { .. } => StatusCode::UNAUTHORIZED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.to_string()
        }))
    }
}

/// Session token authentication validator.
///
/// On success the request carries a [`SessionUser`] extension.
pub async fn session_auth_validator(
    req: ServiceRequest,
    credentials: BearerAuth,
) -> Result<ServiceRequest, (Error, ServiceRequest)> {
    match extract_session_user(&req, &credentials) {
        Ok(user) => {
            sentry::configure_scope(|scope| {
                scope.set_user(Some(sentry::User {
                    id: Some(user.user_id.to_string()),
                    ..sentry::User::default()
                }));
            });

            req.extensions_mut().insert(user);
            Ok(req)
        }
        Err(e) => Err((e.into(), req)),
    }
}

fn extract_session_user(
    req: &ServiceRequest,
    credentials: &BearerAuth,
) -> Result<SessionUser, ValidationError> {
    let ctx = req
        .app_data::<web::Data<AppContext>>()
        .ok_or(ValidationError::MissingContext)?;

    JwtUtils::verify_session_token(credentials.token(), &ctx.config.auth.session_secret)
        .map(|user_id| SessionUser { user_id })
        .map_err(ValidationError::token_error)
}
