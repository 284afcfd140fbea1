//! GitHub account connection.

mod provider;
pub(crate) mod routes;
pub mod validator;

pub use provider::AuthProvider;
