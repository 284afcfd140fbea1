use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use time::OffsetDateTime;

use super::{CryptoError, Result};

/// Lifetime of an OAuth state token, in seconds.
pub const STATE_TOKEN_LIFETIME: u64 = 600;

/// Claims of a session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// GitHub user ID.
    pub sub: u64,
    pub iat: u64,
    pub exp: u64,
}

/// Claims of an OAuth state token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateClaims {
    pub nonce: String,
    pub iat: u64,
    pub exp: u64,
}

/// JWT utilities.
pub struct JwtUtils;

impl JwtUtils {
    /// Create HS256 Jwt from a shared secret.
    pub fn create_jwt<T: Serialize>(secret: &str, claims: &T) -> Result<String> {
        if secret.is_empty() {
            return Err(CryptoError::MissingSecret);
        }

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .map_err(|e| CryptoError::JwtCreationFailed { source: e })
    }

    /// Verify signature and expiration, then decode Jwt.
    pub fn verify_jwt<T>(token: &str, secret: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        if secret.is_empty() {
            return Err(CryptoError::MissingSecret);
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &validation,
        )
        .map_err(|e| CryptoError::JwtVerificationFailed { source: e })
        .map(|s| s.claims)
    }

    /// Create a session token for a user.
    pub fn create_session_token(secret: &str, user_id: u64, lifetime: u64) -> Result<String> {
        let iat = Self::now();
        Self::create_jwt(
            secret,
            &SessionClaims {
                sub: user_id,
                iat,
                exp: iat + lifetime,
            },
        )
    }

    /// Check a session token and return its user ID.
    pub fn verify_session_token(token: &str, secret: &str) -> Result<u64> {
        Self::verify_jwt::<SessionClaims>(token, secret).map(|c| c.sub)
    }

    /// Create an OAuth state token around a random nonce.
    pub fn create_state_token(secret: &str) -> Result<String> {
        let iat = Self::now();
        Self::create_jwt(
            secret,
            &StateClaims {
                nonce: Self::generate_nonce(),
                iat,
                exp: iat + STATE_TOKEN_LIFETIME,
            },
        )
    }

    pub fn verify_state_token(token: &str, secret: &str) -> Result<StateClaims> {
        Self::verify_jwt(token, secret)
    }

    fn generate_nonce() -> String {
        use rand::{distributions::Alphanumeric, Rng};

        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(32)
            .map(char::from)
            .collect()
    }

    fn now() -> u64 {
        OffsetDateTime::now_utc().unix_timestamp() as u64
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn session_token() {
        let token = JwtUtils::create_session_token("secret", 1234, 60).unwrap();

        assert_eq!(
            JwtUtils::verify_session_token(&token, "secret").unwrap(),
            1234
        );
        assert!(matches!(
            JwtUtils::verify_session_token(&token, "other"),
            Err(CryptoError::JwtVerificationFailed { .. })
        ));
    }

    #[test]
    fn expired_session_token() {
        let token = JwtUtils::create_jwt(
            "secret",
            &SessionClaims {
                sub: 1,
                iat: 1_000,
                exp: 2_000,
            },
        )
        .unwrap();

        assert!(JwtUtils::verify_session_token(&token, "secret").is_err());
    }

    #[test]
    fn state_token() {
        let first = JwtUtils::create_state_token("secret").unwrap();
        let second = JwtUtils::create_state_token("secret").unwrap();

        let first = JwtUtils::verify_state_token(&first, "secret").unwrap();
        let second = JwtUtils::verify_state_token(&second, "secret").unwrap();
        assert_eq!(first.nonce.len(), 32);
        assert_ne!(first.nonce, second.nonce);
        assert_eq!(first.exp - first.iat, STATE_TOKEN_LIFETIME);
    }

    #[test]
    fn missing_secret() {
        assert!(matches!(
            JwtUtils::create_session_token("", 1, 60),
            Err(CryptoError::MissingSecret)
        ));
    }
}
