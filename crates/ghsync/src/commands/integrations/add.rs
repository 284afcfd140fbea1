use clap::Parser;
use ghsync_models::Integration;
use time::OffsetDateTime;

use crate::{commands::CommandContext, Result};

/// Register an access token for a user, bypassing the OAuth flow
#[derive(Parser)]
pub(crate) struct IntegrationsAddCommand {
    /// User ID (GitHub account ID)
    pub user_id: u64,

    /// GitHub access token
    pub access_token: String,
}

impl IntegrationsAddCommand {
    pub async fn run(self, ctx: CommandContext) -> Result<()> {
        let previous = ctx.db_service.integrations_get(self.user_id).await?;
        let integration = match previous {
            Some(previous) => Integration {
                access_token: self.access_token,
                ..previous
            },
            None => Integration {
                user_id: self.user_id,
                access_token: self.access_token,
                connected_at: Some(OffsetDateTime::now_utc()),
                ..Default::default()
            },
        };

        ctx.db_service.integrations_upsert(integration).await?;

        writeln!(
            ctx.writer.write().await,
            "Integration for user {} added/edited.",
            self.user_id
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use ghsync_database_interface::DbService;
    use ghsync_models::Integration;

    use crate::testutils::{test_command, CommandContextTest};

    #[tokio::test]
    async fn run() -> Result<(), Box<dyn Error>> {
        let ctx = CommandContextTest::new();

        assert_eq!(
            test_command(ctx, &["integrations", "add", "7", "gho_abc"]).await,
            "Integration for user 7 added/edited.\n"
        );

        Ok(())
    }

    #[tokio::test]
    async fn run_existing() -> Result<(), Box<dyn Error>> {
        let ctx = CommandContextTest::new();
        ctx.db_service
            .integrations_upsert(Integration {
                user_id: 7,
                access_token: "old".into(),
                ..Default::default()
            })
            .await?;

        assert_eq!(
            test_command(ctx, &["integrations", "add", "7", "new"]).await,
            "Integration for user 7 added/edited.\n"
        );

        Ok(())
    }
}
