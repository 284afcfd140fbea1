use clap::Parser;
use ghsync_crypto::JwtUtils;

use crate::{commands::CommandContext, Result};

/// Create a session token for a user
#[derive(Parser)]
pub(crate) struct AuthGenerateTokenCommand {
    /// User ID (GitHub account ID)
    pub user_id: u64,
}

impl AuthGenerateTokenCommand {
    pub async fn run(self, ctx: CommandContext) -> Result<()> {
        let token = JwtUtils::create_session_token(
            &ctx.config.auth.session_secret,
            self.user_id,
            ctx.config.auth.session_lifetime,
        )?;

        writeln!(ctx.writer.write().await, "{}", token)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use ghsync_crypto::JwtUtils;

    use crate::testutils::{test_command, CommandContextTest};

    #[tokio::test]
    async fn run() -> Result<(), Box<dyn Error>> {
        let mut ctx = CommandContextTest::new();
        ctx.config.auth.session_secret = "s3cr3t".into();

        let output = test_command(ctx, &["auth", "generate-token", "42"]).await;
        assert!(output.starts_with("ey"));
        assert_eq!(JwtUtils::verify_session_token(output.trim(), "s3cr3t")?, 42);

        Ok(())
    }
}
