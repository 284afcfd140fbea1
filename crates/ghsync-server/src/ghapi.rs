//! GitHub Api wrappers.

use async_trait::async_trait;
use ghsync_config::Config;
use ghsync_ghapi_github::{GitHubError, GithubApiService};
use ghsync_ghapi_interface::{
    types::{GhOAuthToken, GhPage},
    ApiService, Result,
};

use crate::metrics::GITHUB_API_CALLS;

/// GitHub Api Service with metrics.
pub struct MetricsApiService {
    inner: Box<dyn ApiService>,
}

impl MetricsApiService {
    /// Creates a new service on top of the GitHub REST adapter.
    pub fn new(config: Config) -> core::result::Result<Self, GitHubError> {
        Ok(Self::wrap(Box::new(GithubApiService::new(config)?)))
    }

    /// Counts calls made through another adapter.
    pub fn wrap(inner: Box<dyn ApiService>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ApiService for MetricsApiService {
    async fn fetch(&self, route: &str, credential: &str) -> Result<GhPage> {
        GITHUB_API_CALLS.inc();
        self.inner.fetch(route, credential).await
    }

    async fn oauth_access_token_create(
        &self,
        client_id: &str,
        client_secret: &str,
        code: &str,
        redirect_uri: &str,
    ) -> Result<GhOAuthToken> {
        GITHUB_API_CALLS.inc();
        self.inner
            .oauth_access_token_create(client_id, client_secret, code, redirect_uri)
            .await
    }
}
