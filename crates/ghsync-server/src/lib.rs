//! Server module.

#![warn(clippy::all)]

pub mod auth;
pub mod errors;
pub mod ghapi;
mod github;
mod health;
mod metrics;
pub mod server;

pub use errors::{Result, ServerError};
