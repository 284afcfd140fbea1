//! Null driver for GH API.

#![warn(missing_docs)]
#![warn(clippy::all)]

use async_trait::async_trait;
use ghsync_ghapi_interface::{
    routes,
    types::{GhOAuthToken, GhPage},
    ApiService, Result,
};
use serde_json::json;

/// Null API service.
///
/// Answers as an account with no organization: every listing is empty.
#[derive(Clone, Default)]
pub struct NullApiService {
    _private: (),
}

impl NullApiService {
    /// Build a null API service.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

#[async_trait]
impl ApiService for NullApiService {
    #[tracing::instrument(skip(self, _credential), ret)]
    async fn fetch(&self, route: &str, _credential: &str) -> Result<GhPage> {
        if route == routes::user() {
            Ok(GhPage::new(json!({"id": 1, "login": "null"})))
        } else {
            Ok(GhPage::new(json!([])))
        }
    }

    #[tracing::instrument(skip_all)]
    async fn oauth_access_token_create(
        &self,
        _client_id: &str,
        _client_secret: &str,
        code: &str,
        _redirect_uri: &str,
    ) -> Result<GhOAuthToken> {
        Ok(GhOAuthToken {
            access_token: format!("null-{code}"),
            token_type: "bearer".into(),
            ..Default::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lists_are_empty() {
        let service = NullApiService::new();
        let (user, _) = service.user_get("token").await.unwrap();
        assert_eq!(user.login, "null");

        let orgs = service
            .fetch("/user/orgs?per_page=100&page=1", "token")
            .await
            .unwrap()
            .into_items("/user/orgs")
            .unwrap();
        assert!(orgs.is_empty());
    }
}
