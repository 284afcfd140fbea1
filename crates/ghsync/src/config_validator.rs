//! Validation utilities.

use std::fmt::Write;

use ghsync_config::{ApiDriver, Config, DatabaseDriver};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Errors on environment variables:\n{}", errors)]
    EnvVarsError { errors: String },
}

fn validate_env_vars(config: &Config) -> Result<(), ValidationError> {
    #[inline]
    fn _missing(error: &mut String, name: &str) {
        error.push('\n');
        let _ = write!(error, "  - Missing env. var.: {}", name);
    }

    let mut error = String::new();

    // Check server configuration
    if config.server.bind_ip.is_empty() {
        _missing(&mut error, "GHSYNC_SERVER_BIND_IP");
    }
    if config.server.bind_port == 0 {
        _missing(&mut error, "GHSYNC_SERVER_BIND_PORT");
    }

    // Check PG configuration
    if config.database.driver == DatabaseDriver::Postgres && config.database.pg.url.is_empty() {
        _missing(&mut error, "GHSYNC_DATABASE_PG_URL");
    }

    // Session tokens cannot be signed without a secret
    if config.auth.session_secret.is_empty() {
        _missing(&mut error, "GHSYNC_AUTH_SESSION_SECRET");
    }

    // Check OAuth application
    if config.api.driver == ApiDriver::GitHub {
        if config.auth.client_id.is_empty() {
            _missing(&mut error, "GHSYNC_AUTH_CLIENT_ID");
        }
        if config.auth.client_secret.is_empty() {
            _missing(&mut error, "GHSYNC_AUTH_CLIENT_SECRET");
        }
    }

    if error.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::EnvVarsError { errors: error })
    }
}

/// Validate configuration.
pub fn validate_configuration(config: &Config) -> Result<(), ValidationError> {
    validate_env_vars(config)
}
