//! GitHub OAuth application settings.

use ghsync_config::Config;
use ghsync_core::use_cases::auth::OAuthCredentials;
use ghsync_ghapi_interface::{ApiError, ApiService, Result};
use url::Url;

/// OAuth application used to connect GitHub accounts.
///
/// Built once from the configuration and shared by the auth routes.
#[derive(Debug, Clone)]
pub struct AuthProvider {
    client_id: String,
    client_secret: String,
    callback_url: String,
    scopes: Vec<String>,
    authorize_url: String,
}

impl AuthProvider {
    pub fn from_config(config: &Config) -> Self {
        Self {
            client_id: config.auth.client_id.clone(),
            client_secret: config.auth.client_secret.clone(),
            callback_url: config.auth.callback_url.clone(),
            scopes: config.auth.scopes.clone(),
            authorize_url: format!(
                "{}/login/oauth/authorize",
                config.api.github.oauth_url.trim_end_matches('/')
            ),
        }
    }

    /// URL the browser is sent to for the consent screen.
    #[tracing::instrument(skip(self, state), fields(client_id = %self.client_id))]
    pub fn authorize_url(&self, state: &str) -> Result<String> {
        let mut url = Url::parse(&self.authorize_url).map_err(|e| {
            ApiError::ImplementationError {
                source: Box::new(e),
            }
        })?;

        url.query_pairs_mut()
            .append_pair("client_id", &self.client_id)
            .append_pair("redirect_uri", &self.callback_url)
            .append_pair("scope", &self.scopes.join(" "))
            .append_pair("state", state);

        Ok(url.to_string())
    }

    /// Trade the callback code for an access token.
    #[tracing::instrument(skip_all)]
    pub async fn exchange_code(
        &self,
        api_service: &dyn ApiService,
        code: &str,
    ) -> Result<OAuthCredentials> {
        let token = api_service
            .oauth_access_token_create(
                &self.client_id,
                &self.client_secret,
                code,
                &self.callback_url,
            )
            .await?;

        Ok(OAuthCredentials {
            access_token: token.access_token,
            refresh_token: token.refresh_token,
        })
    }
}
