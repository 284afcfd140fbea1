use std::time::Duration;

use ghsync_ghapi_interface::ApiError;
use http::StatusCode;

#[derive(Debug, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum GitHubError {
    #[error("Request on {url} failed: {source}")]
    HttpError { url: String, source: reqwest::Error },

    #[error("Request on {url} failed with status {status}")]
    StatusError {
        url: String,
        status: StatusCode,
        body: String,
        rate_limited: bool,
        retry_after: Option<Duration>,
    },

    #[error("OAuth code exchange failed: {reason}")]
    OAuthError { reason: String },

    #[error(transparent)]
    ImplementationError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

impl GitHubError {
    /// Whether the same request may succeed later.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::HttpError { source, .. } => source.is_timeout() || source.is_connect(),
            Self::StatusError {
                status,
                rate_limited,
                ..
            } => match *status {
                StatusCode::TOO_MANY_REQUESTS => true,
                StatusCode::FORBIDDEN => *rate_limited,
                s => s.is_server_error(),
            },
            _ => false,
        }
    }

    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::StatusError { retry_after, .. } => *retry_after,
            _ => None,
        }
    }
}

impl From<GitHubError> for ApiError {
    fn from(e: GitHubError) -> Self {
        match e {
            GitHubError::StatusError {
                url, status, body, ..
            } => ApiError::RemoteFetchError {
                url,
                status: status.as_u16(),
                body,
            },
            GitHubError::HttpError { url, source } => ApiError::HttpError {
                url,
                source: source.into(),
            },
            GitHubError::OAuthError { reason } => ApiError::OAuthError { reason },
            e => ApiError::ImplementationError { source: e.into() },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_error(status: StatusCode, rate_limited: bool) -> GitHubError {
        GitHubError::StatusError {
            url: "https://api.github.com/user".into(),
            status,
            body: String::new(),
            rate_limited,
            retry_after: None,
        }
    }

    #[test]
    fn transient_statuses() {
        assert!(status_error(StatusCode::TOO_MANY_REQUESTS, false).is_transient());
        assert!(status_error(StatusCode::BAD_GATEWAY, false).is_transient());
        assert!(status_error(StatusCode::FORBIDDEN, true).is_transient());

        assert!(!status_error(StatusCode::FORBIDDEN, false).is_transient());
        assert!(!status_error(StatusCode::NOT_FOUND, false).is_transient());
        assert!(!status_error(StatusCode::UNAUTHORIZED, false).is_transient());
    }

    #[test]
    fn into_api_error() {
        let err: ApiError = status_error(StatusCode::NOT_FOUND, false).into();
        assert!(matches!(
            err,
            ApiError::RemoteFetchError { status: 404, .. }
        ));
    }
}
