//! Config module.

mod drivers;

use std::{env, str::FromStr};

pub use drivers::{ApiDriver, DatabaseDriver, DriverError, SyncStatusMode};

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database driver.
    pub driver: DatabaseDriver,
    /// Postgres options.
    pub pg: DatabasePgConfig,
}

#[derive(Debug, Clone)]
pub struct DatabasePgConfig {
    /// Database URL.
    pub url: String,
    /// Database pool size.
    pub pool_size: u32,
    /// Database connection timeout (in seconds)
    pub connection_timeout: u32,
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// API driver.
    pub driver: ApiDriver,
    /// GitHub options.
    pub github: ApiGitHubConfig,
}

#[derive(Debug, Clone)]
pub struct ApiGitHubConfig {
    /// GitHub API connect timeout (in milliseconds).
    pub connect_timeout: u64,
    /// GitHub API root URL.
    pub root_url: String,
    /// GitHub OAuth root URL.
    pub oauth_url: String,
}

#[derive(Debug, Clone)]
pub struct SyncRetryConfig {
    /// Maximum retries for a transient upstream failure. Zero disables retries.
    pub max_retries: u32,
    /// First backoff interval (in milliseconds).
    pub initial_interval: u64,
    /// Backoff interval cap (in milliseconds).
    pub max_interval: u64,
}

#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Items requested per page.
    pub page_size: u64,
    /// Maximum in-flight upstream requests for one run.
    pub max_concurrent_requests: usize,
    /// Use the `Link` response header as the end-of-collection signal when present.
    pub follow_link_header: bool,
    /// Sync status bookkeeping.
    pub status_mode: SyncStatusMode,
    /// Retry options.
    pub retry: SyncRetryConfig,
}

#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// OAuth application client ID.
    pub client_id: String,
    /// OAuth application client secret.
    pub client_secret: String,
    /// OAuth callback URL.
    pub callback_url: String,
    /// Requested OAuth scopes.
    pub scopes: Vec<String>,
    /// Secret used to sign session and state tokens.
    pub session_secret: String,
    /// Session token lifetime (in seconds).
    pub session_lifetime: u64,
    /// Frontend URL, target of the post-login redirect.
    pub frontend_url: String,
}

#[derive(Debug, Clone)]
pub struct SentryConfig {
    /// Sentry URL.
    pub url: String,
    /// Traces sample rate (between 0 and 1) for Sentry
    pub traces_sample_rate: f32,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Use bunyan logging.
    pub use_bunyan: bool,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server bind IP.
    pub bind_ip: String,
    /// Server bind port.
    pub bind_port: u16,
    /// Server workers count.
    pub workers_count: Option<u16>,
    /// Allowed CORS origin. Any origin when empty.
    pub cors_origin: String,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Database options.
    pub database: DatabaseConfig,
    /// API options.
    pub api: ApiConfig,
    /// Sync options.
    pub sync: SyncConfig,
    /// Auth options.
    pub auth: AuthConfig,
    /// Logging options.
    pub logging: LoggingConfig,
    /// Sentry options.
    pub sentry: SentryConfig,
    /// Server options.
    pub server: ServerConfig,
    /// App version
    pub version: String,
}

impl Config {
    /// Create configuration from environment.
    pub fn from_env(version: String) -> Config {
        Config {
            database: DatabaseConfig {
                driver: DatabaseDriver::from_str(&env_to_str("GHSYNC_DATABASE_DRIVER", "pg"))
                    .unwrap_or(DatabaseDriver::Postgres),
                pg: DatabasePgConfig {
                    url: env_to_str("GHSYNC_DATABASE_PG_URL", ""),
                    pool_size: env_to_u32("GHSYNC_DATABASE_PG_POOL_SIZE", 20),
                    connection_timeout: env_to_u32("GHSYNC_DATABASE_PG_CONNECTION_TIMEOUT", 5),
                },
            },
            api: ApiConfig {
                driver: ApiDriver::from_str(&env_to_str("GHSYNC_API_DRIVER", "github"))
                    .unwrap_or(ApiDriver::GitHub),
                github: ApiGitHubConfig {
                    connect_timeout: env_to_u64("GHSYNC_API_GITHUB_CONNECT_TIMEOUT", 5000),
                    root_url: env_to_str("GHSYNC_API_GITHUB_ROOT_URL", "https://api.github.com"),
                    oauth_url: env_to_str("GHSYNC_API_GITHUB_OAUTH_URL", "https://github.com"),
                },
            },
            sync: SyncConfig {
                page_size: env_to_u64("GHSYNC_SYNC_PAGE_SIZE", 100).clamp(1, 100),
                max_concurrent_requests: env_to_u32("GHSYNC_SYNC_MAX_CONCURRENT_REQUESTS", 8)
                    .max(1) as usize,
                follow_link_header: env_to_bool("GHSYNC_SYNC_FOLLOW_LINK_HEADER", true),
                status_mode: SyncStatusMode::from_str(&env_to_str(
                    "GHSYNC_SYNC_STATUS_MODE",
                    "per_repository",
                ))
                .unwrap_or_default(),
                retry: SyncRetryConfig {
                    max_retries: env_to_u32("GHSYNC_SYNC_RETRY_MAX_RETRIES", 3),
                    initial_interval: env_to_u64("GHSYNC_SYNC_RETRY_INITIAL_INTERVAL", 500),
                    max_interval: env_to_u64("GHSYNC_SYNC_RETRY_MAX_INTERVAL", 30_000),
                },
            },
            auth: AuthConfig {
                client_id: env_to_str("GHSYNC_AUTH_CLIENT_ID", ""),
                client_secret: env_to_str("GHSYNC_AUTH_CLIENT_SECRET", ""),
                callback_url: env_to_str(
                    "GHSYNC_AUTH_CALLBACK_URL",
                    "http://localhost:3000/api/auth/github/callback",
                ),
                scopes: env_to_list("GHSYNC_AUTH_SCOPES", "read:user,read:org,repo"),
                session_secret: env_to_str("GHSYNC_AUTH_SESSION_SECRET", ""),
                session_lifetime: env_to_u64("GHSYNC_AUTH_SESSION_LIFETIME", 86_400),
                frontend_url: env_to_str("GHSYNC_AUTH_FRONTEND_URL", "http://localhost:4200"),
            },
            logging: LoggingConfig {
                use_bunyan: env_to_bool("GHSYNC_LOGGING_USE_BUNYAN", false),
            },
            sentry: SentryConfig {
                url: env_to_str("GHSYNC_SENTRY_URL", ""),
                traces_sample_rate: env_to_f32("GHSYNC_SENTRY_TRACES_SAMPLE_RATE", 0.0),
            },
            server: ServerConfig {
                bind_ip: env_to_str("GHSYNC_SERVER_BIND_IP", "127.0.0.1"),
                bind_port: env_to_u16("GHSYNC_SERVER_BIND_PORT", 3000),
                workers_count: env_to_optional_u16("GHSYNC_SERVER_WORKERS_COUNT", None),
                cors_origin: env_to_str("GHSYNC_SERVER_CORS_ORIGIN", ""),
            },
            version,
        }
    }

    pub fn from_env_no_version() -> Self {
        Self::from_env("0.0.0".into())
    }
}

fn env_to_u16(name: &str, default: u16) -> u16 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_optional_u16(name: &str, default: Option<u16>) -> Option<u16> {
    env::var(name)
        .map(|e| e.parse::<u16>().map(Some).unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_u32(name: &str, default: u32) -> u32 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_f32(name: &str, default: f32) -> f32 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .map(|e| !(e.is_empty() || e == "0" || e.eq_ignore_ascii_case("false")))
        .unwrap_or(default)
}

fn env_to_str(name: &str, default: &str) -> String {
    env::var(name)
        .unwrap_or_else(|_e| default.to_string())
        .replace("\\n", "\n")
}

fn env_to_list(name: &str, default: &str) -> Vec<String> {
    env_to_str(name, default)
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
