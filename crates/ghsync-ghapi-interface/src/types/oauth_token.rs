use serde::{Deserialize, Serialize};

/// OAuth access token, from the authorization code exchange.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhOAuthToken {
    /// Access token.
    pub access_token: String,
    /// Refresh token, for expiring user tokens.
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Token type.
    #[serde(default)]
    pub token_type: String,
    /// Granted scopes, comma-separated.
    #[serde(default)]
    pub scope: String,
}
