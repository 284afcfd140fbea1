use clap::Parser;
use ghsync_core::use_cases::auth::RemoveIntegrationInterface;
use shaku::HasComponent;

use crate::{commands::CommandContext, Result};

/// Disconnect a user and drop its stored token
#[derive(Parser)]
pub(crate) struct IntegrationsRemoveCommand {
    /// User ID (GitHub account ID)
    pub user_id: u64,
}

impl IntegrationsRemoveCommand {
    pub async fn run(self, ctx: CommandContext) -> Result<()> {
        let remove_integration: &dyn RemoveIntegrationInterface = ctx.core_module.resolve_ref();
        let removed = remove_integration
            .run(&ctx.as_core_context(), self.user_id)
            .await?;

        if removed {
            writeln!(
                ctx.writer.write().await,
                "Integration for user {} removed.",
                self.user_id
            )?;
        } else {
            writeln!(
                ctx.writer.write().await,
                "No integration found for user {}.",
                self.user_id
            )?;
        }

        Ok(())
    }
}
