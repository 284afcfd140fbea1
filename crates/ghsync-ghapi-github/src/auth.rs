//! Client construction.

use std::time::Duration;

use ghsync_config::Config;
use http::{header, HeaderMap};
use reqwest::ClientBuilder;

use crate::errors::GitHubError;

/// Get anonymous GitHub client builder.
pub fn get_anonymous_client_builder(config: &Config) -> ClientBuilder {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCEPT,
        header::HeaderValue::from_static("application/vnd.github+json"),
    );
    headers.insert(
        "X-GitHub-Api-Version",
        header::HeaderValue::from_static("2022-11-28"),
    );

    ClientBuilder::new()
        .connect_timeout(Duration::from_millis(config.api.github.connect_timeout))
        .user_agent(format!("ghsync/{}", config.version))
        .default_headers(headers)
}

/// Authorization header for a user access token.
pub fn bearer_header(credential: &str) -> Result<header::HeaderValue, GitHubError> {
    let mut value = header::HeaderValue::from_str(&format!("Bearer {credential}"))
        .map_err(|e| GitHubError::ImplementationError { source: e.into() })?;
    value.set_sensitive(true);
    Ok(value)
}

/// Build a GitHub URL.
pub fn build_github_url<T: Into<String>>(config: &Config, path: T) -> String {
    format!(
        "{}{}",
        config.api.github.root_url.trim_end_matches('/'),
        path.into()
    )
}

/// Build a GitHub OAuth URL.
pub fn build_oauth_url<T: Into<String>>(config: &Config, path: T) -> String {
    format!(
        "{}{}",
        config.api.github.oauth_url.trim_end_matches('/'),
        path.into()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_anonymous_client_builder() {
        let config = Config::from_env_no_version();
        get_anonymous_client_builder(&config).build().unwrap();
    }

    #[test]
    fn test_build_github_url() {
        let mut config = Config::from_env_no_version();
        config.api.github.root_url = "http://localhost:1234/".into();
        assert_eq!(
            build_github_url(&config, "/user/orgs"),
            "http://localhost:1234/user/orgs"
        );
    }

    #[test]
    fn test_bearer_header() {
        let value = bearer_header("abcdef").unwrap();
        assert!(value.is_sensitive());
        assert_eq!(value.to_str().unwrap(), "Bearer abcdef");
        assert!(bearer_header("bad\ntoken").is_err());
    }
}
