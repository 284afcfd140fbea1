use anyhow::anyhow;
use async_trait::async_trait;
use clap::Parser;
use ghsync_sentry::send_test_event;

use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// Send a test message to Sentry
#[derive(Parser)]
pub(crate) struct DebugTestSentryCommand {
    /// Custom message, defaults to "This is a test"
    #[clap(short, long)]
    message: Option<String>,
}

#[async_trait]
impl Command for DebugTestSentryCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        if ctx.config.sentry.url.is_empty() {
            Err(anyhow!("Sentry URL is not configured."))
        } else {
            let event_id = send_test_event(self.message);
            writeln!(ctx.writer.write().await, "Event {} sent.", event_id)?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use crate::testutils::{test_command, CommandContextTest};

    #[tokio::test]
    async fn run() -> Result<(), Box<dyn Error>> {
        let mut ctx = CommandContextTest::new();
        ctx.config.sentry.url = "https://key@sentry.example.com/1".into();

        assert!(test_command(ctx, &["debug", "test-sentry", "-m", "hello"])
            .await
            .starts_with("Event "));

        Ok(())
    }
}
