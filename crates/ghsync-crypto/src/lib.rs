//! Crypto module.

mod errors;
mod jwt;

pub use jwt::{JwtUtils, SessionClaims, StateClaims, STATE_TOKEN_LIFETIME};

pub use self::errors::{CryptoError, Result};
