//! GitHub REST adapter.

mod auth;
mod errors;

use std::{
    sync::atomic::{AtomicU32, Ordering},
    time::{Duration, SystemTime, UNIX_EPOCH},
};

use async_trait::async_trait;
use backoff::{ExponentialBackoff, ExponentialBackoffBuilder};
use ghsync_config::Config;
use ghsync_ghapi_interface::{
    types::{GhOAuthToken, GhPage},
    ApiService, Result,
};
use http::{header, HeaderMap};
use reqwest::Client;
use serde::Deserialize;

pub use crate::errors::GitHubError;
use crate::auth::{bearer_header, build_github_url, build_oauth_url, get_anonymous_client_builder};

/// GitHub API adapter implementation.
#[derive(Clone)]
pub struct GithubApiService {
    config: Config,
    client: Client,
}

impl GithubApiService {
    /// Creates new GitHub API adapter.
    pub fn new(config: Config) -> core::result::Result<Self, GitHubError> {
        let client = get_anonymous_client_builder(&config)
            .build()
            .map_err(|e| GitHubError::ImplementationError { source: e.into() })?;

        Ok(Self { config, client })
    }

    fn build_url(&self, path: &str) -> String {
        build_github_url(&self.config, path)
    }

    fn retry_policy(&self) -> ExponentialBackoff {
        let retry = &self.config.sync.retry;
        ExponentialBackoffBuilder::new()
            .with_initial_interval(Duration::from_millis(retry.initial_interval))
            .with_max_interval(Duration::from_millis(retry.max_interval))
            .with_max_elapsed_time(None)
            .build()
    }

    fn classify(&self, error: GitHubError, attempt: u32) -> backoff::Error<GitHubError> {
        if attempt >= self.config.sync.retry.max_retries || !error.is_transient() {
            return backoff::Error::permanent(error);
        }

        let cap = Duration::from_millis(self.config.sync.retry.max_interval);
        match error.retry_after() {
            Some(delay) => backoff::Error::retry_after(error, delay.min(cap)),
            None => backoff::Error::transient(error),
        }
    }

    async fn fetch_once(
        &self,
        url: &str,
        credential: &str,
    ) -> core::result::Result<GhPage, GitHubError> {
        let response = self
            .client
            .get(url)
            .header(header::AUTHORIZATION, bearer_header(credential)?)
            .send()
            .await
            .map_err(|source| GitHubError::HttpError {
                url: url.into(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let headers = response.headers().clone();
            let body = response.text().await.unwrap_or_default();
            return Err(GitHubError::StatusError {
                url: url.into(),
                status,
                body,
                rate_limited: is_rate_limited(&headers),
                retry_after: retry_after(&headers),
            });
        }

        let has_next_page = response
            .headers()
            .get(header::LINK)
            .and_then(|v| v.to_str().ok())
            .map(has_next_link);
        let body = response
            .json::<serde_json::Value>()
            .await
            .map_err(|source| GitHubError::HttpError {
                url: url.into(),
                source,
            })?;

        Ok(GhPage {
            body,
            has_next_page,
        })
    }
}

#[async_trait]
impl ApiService for GithubApiService {
    #[tracing::instrument(skip(self, credential))]
    async fn fetch(&self, route: &str, credential: &str) -> Result<GhPage> {
        let url = self.build_url(route);
        let url = url.as_str();
        let attempts = &AtomicU32::new(0);

        let operation = move || async move {
            let attempt = attempts.fetch_add(1, Ordering::Relaxed);
            self.fetch_once(url, credential)
                .await
                .map_err(|e| self.classify(e, attempt))
        };

        backoff::future::retry_notify(self.retry_policy(), operation, |e, delay: Duration| {
            tracing::warn!(
                error = %e,
                delay_ms = delay.as_millis() as u64,
                "Transient GitHub failure, retrying"
            )
        })
        .await
        .map_err(Into::into)
    }

    #[tracing::instrument(skip(self, client_secret, code))]
    async fn oauth_access_token_create(
        &self,
        client_id: &str,
        client_secret: &str,
        code: &str,
        redirect_uri: &str,
    ) -> Result<GhOAuthToken> {
        #[derive(Deserialize)]
        struct Response {
            access_token: Option<String>,
            refresh_token: Option<String>,
            token_type: Option<String>,
            scope: Option<String>,
            error: Option<String>,
            error_description: Option<String>,
        }

        let url = build_oauth_url(&self.config, "/login/oauth/access_token");
        let http_error = |source: reqwest::Error| GitHubError::HttpError {
            url: url.clone(),
            source,
        };

        let response = self
            .client
            .post(&url)
            .header(header::ACCEPT, "application/json")
            .form(&[
                ("client_id", client_id),
                ("client_secret", client_secret),
                ("code", code),
                ("redirect_uri", redirect_uri),
            ])
            .send()
            .await
            .map_err(http_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GitHubError::StatusError {
                url: url.clone(),
                status,
                body,
                rate_limited: false,
                retry_after: None,
            }
            .into());
        }

        let payload = response.json::<Response>().await.map_err(http_error)?;
        match payload.access_token {
            Some(access_token) => Ok(GhOAuthToken {
                access_token,
                refresh_token: payload.refresh_token,
                token_type: payload.token_type.unwrap_or_default(),
                scope: payload.scope.unwrap_or_default(),
            }),
            None => Err(GitHubError::OAuthError {
                reason: payload
                    .error_description
                    .or(payload.error)
                    .unwrap_or_else(|| "missing access token".into()),
            }
            .into()),
        }
    }
}

/// Whether a `Link` header advertises a next page.
fn has_next_link(link: &str) -> bool {
    link.split(',').any(|entry| {
        entry
            .split(';')
            .skip(1)
            .any(|param| param.trim().replace(' ', "") == "rel=\"next\"")
    })
}

fn is_rate_limited(headers: &HeaderMap) -> bool {
    headers.contains_key(header::RETRY_AFTER)
        || header_str(headers, "x-ratelimit-remaining") == Some("0")
}

fn retry_after(headers: &HeaderMap) -> Option<Duration> {
    if let Some(seconds) = header_str(headers, header::RETRY_AFTER.as_str())
        .and_then(|v| v.trim().parse::<u64>().ok())
    {
        return Some(Duration::from_secs(seconds));
    }

    if header_str(headers, "x-ratelimit-remaining") != Some("0") {
        return None;
    }

    let reset = header_str(headers, "x-ratelimit-reset")?
        .trim()
        .parse::<u64>()
        .ok()?;
    let now = SystemTime::now().duration_since(UNIX_EPOCH).ok()?.as_secs();
    Some(Duration::from_secs(reset.saturating_sub(now)))
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

#[cfg(test)]
mod tests {
    use ghsync_ghapi_interface::ApiError;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wiremock::{
        matchers::{body_string_contains, header as header_eq, method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    use super::*;

    fn arrange_config(server: &MockServer, max_retries: u32) -> Config {
        let mut config = Config::from_env_no_version();
        config.api.github.root_url = server.uri();
        config.api.github.oauth_url = server.uri();
        config.sync.retry.max_retries = max_retries;
        config.sync.retry.initial_interval = 1;
        config.sync.retry.max_interval = 5;
        config
    }

    #[test]
    fn test_has_next_link() {
        assert!(has_next_link(
            r#"<https://api.github.com/user/orgs?page=2>; rel="next", <https://api.github.com/user/orgs?page=5>; rel="last""#
        ));
        assert!(!has_next_link(
            r#"<https://api.github.com/user/orgs?page=1>; rel="first", <https://api.github.com/user/orgs?page=4>; rel="prev""#
        ));
    }

    #[test]
    fn test_retry_after() {
        let mut headers = HeaderMap::new();
        assert_eq!(retry_after(&headers), None);
        assert!(!is_rate_limited(&headers));

        headers.insert(header::RETRY_AFTER, "3".parse().unwrap());
        assert_eq!(retry_after(&headers), Some(Duration::from_secs(3)));
        assert!(is_rate_limited(&headers));
    }

    #[tokio::test]
    async fn test_fetch_with_link_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user/orgs"))
            .and(query_param("page", "1"))
            .and(header_eq("authorization", "Bearer abcdef"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([{"id": 1, "login": "acme"}]))
                    .insert_header(
                        "link",
                        r#"<https://api.github.com/user/orgs?page=2>; rel="next""#,
                    ),
            )
            .expect(1)
            .mount(&server)
            .await;

        let service = GithubApiService::new(arrange_config(&server, 0)).unwrap();
        let page = service
            .fetch("/user/orgs?per_page=100&page=1", "abcdef")
            .await
            .unwrap();

        assert_eq!(page.body, json!([{"id": 1, "login": "acme"}]));
        assert_eq!(page.has_next_page, Some(true));
    }

    #[tokio::test]
    async fn test_fetch_without_link_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1, "login": "me"})))
            .mount(&server)
            .await;

        let service = GithubApiService::new(arrange_config(&server, 0)).unwrap();
        let page = service.fetch("/user", "abcdef").await.unwrap();
        assert_eq!(page.has_next_page, None);
    }

    #[tokio::test]
    async fn test_fetch_not_found_is_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/orgs/acme/repos"))
            .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
            .expect(1)
            .mount(&server)
            .await;

        let service = GithubApiService::new(arrange_config(&server, 3)).unwrap();
        let err = service.fetch("/orgs/acme/repos", "abcdef").await.unwrap_err();

        match err {
            ApiError::RemoteFetchError { status, body, .. } => {
                assert_eq!(status, 404);
                assert_eq!(body, "Not Found");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_retries_rate_limit() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user/orgs"))
            .respond_with(ResponseTemplate::new(429))
            .up_to_n_times(2)
            .expect(2)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/user/orgs"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let service = GithubApiService::new(arrange_config(&server, 3)).unwrap();
        let page = service.fetch("/user/orgs", "abcdef").await.unwrap();
        assert_eq!(page.body, json!([]));
    }

    #[tokio::test]
    async fn test_fetch_gives_up_after_max_retries() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user/orgs"))
            .respond_with(ResponseTemplate::new(503))
            .expect(3)
            .mount(&server)
            .await;

        let service = GithubApiService::new(arrange_config(&server, 2)).unwrap();
        let err = service.fetch("/user/orgs", "abcdef").await.unwrap_err();
        assert!(matches!(err, ApiError::RemoteFetchError { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_fetch_forbidden_without_rate_limit_is_permanent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/orgs/acme/repos"))
            .respond_with(
                ResponseTemplate::new(403).insert_header("x-ratelimit-remaining", "4999"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let service = GithubApiService::new(arrange_config(&server, 3)).unwrap();
        let err = service.fetch("/orgs/acme/repos", "abcdef").await.unwrap_err();
        assert!(matches!(err, ApiError::RemoteFetchError { status: 403, .. }));
    }

    #[tokio::test]
    async fn test_oauth_access_token_create() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login/oauth/access_token"))
            .and(body_string_contains("code=good"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "gho_123",
                "token_type": "bearer",
                "scope": "read:org,read:user,repo"
            })))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/login/oauth/access_token"))
            .and(body_string_contains("code=bad"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "error": "bad_verification_code",
                "error_description": "The code passed is incorrect or expired."
            })))
            .mount(&server)
            .await;

        let service = GithubApiService::new(arrange_config(&server, 0)).unwrap();
        let token = service
            .oauth_access_token_create("id", "secret", "good", "http://localhost/callback")
            .await
            .unwrap();
        assert_eq!(
            token,
            GhOAuthToken {
                access_token: "gho_123".into(),
                refresh_token: None,
                token_type: "bearer".into(),
                scope: "read:org,read:user,repo".into()
            }
        );

        let err = service
            .oauth_access_token_create("id", "secret", "bad", "http://localhost/callback")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::OAuthError { .. }));
    }
}
