use std::{future::Future, str::FromStr};

use ghsync_config::Config;
use sentry::{integrations::debug_images::DebugImagesIntegration, types::Dsn, ClientOptions};
use tracing::{info, warn};

/// Configure Sentry integration by wrapping a function.
pub async fn with_sentry_configuration<T, Fut, E>(config: &Config, func: T) -> Result<(), E>
where
    T: FnOnce() -> Fut,
    Fut: Future<Output = Result<(), E>>,
{
    let _guard = {
        if config.sentry.url.is_empty() {
            None
        } else {
            match Dsn::from_str(&config.sentry.url) {
                Ok(dsn) => {
                    info!("Sentry integration enabled.");

                    // Enable backtraces
                    std::env::set_var("RUST_BACKTRACE", "1");

                    let mut options =
                        ClientOptions::new().add_integration(DebugImagesIntegration::default());

                    options.dsn = Some(dsn);
                    options.default_integrations = true;
                    options.in_app_exclude.push("actix");
                    options.in_app_exclude.push("sentry");
                    options.in_app_exclude.push("tokio");
                    options.release = Some(config.version.to_string().into());
                    options.send_default_pii = false;
                    options.attach_stacktrace = true;
                    options.traces_sample_rate = config.sentry.traces_sample_rate;
                    options.debug = false;

                    Some(sentry::init(options))
                }
                Err(e) => {
                    warn!(error = %e, message = "Invalid Sentry DSN, integration disabled");
                    None
                }
            }
        }
    };

    func().await
}
