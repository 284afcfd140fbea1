use async_trait::async_trait;

use crate::{
    routes,
    types::{GhOAuthToken, GhPage, GhUser},
    ApiError, Result,
};

/// GitHub API Adapter interface
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Authenticated GET on a route relative to the API root.
    async fn fetch(&self, route: &str, credential: &str) -> Result<GhPage>;
    /// Exchange an OAuth authorization code for an access token.
    async fn oauth_access_token_create(
        &self,
        client_id: &str,
        client_secret: &str,
        code: &str,
        redirect_uri: &str,
    ) -> Result<GhOAuthToken>;
    /// Get the authenticated user, with its raw payload.
    async fn user_get(&self, credential: &str) -> Result<(GhUser, serde_json::Value)> {
        let route = routes::user();
        let page = self.fetch(&route, credential).await?;
        let user = serde_json::from_value(page.body.clone())
            .map_err(|e| ApiError::invalid_payload(&route, e))?;
        Ok((user, page.body))
    }
}
