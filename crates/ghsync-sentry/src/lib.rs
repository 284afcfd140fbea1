//! Sentry module.

mod client;
mod debug;

pub use client::with_sentry_configuration;
pub use debug::send_test_event;
pub use sentry;
