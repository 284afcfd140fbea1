use async_trait::async_trait;
use clap::Parser;
use ghsync_core::use_cases::sync::GetSyncStatusInterface;
use shaku::HasComponent;
use time::format_description::well_known::Rfc3339;

use super::{Command, CommandContext};
use crate::Result;

/// Show the last synchronization of a user
#[derive(Debug, Parser)]
pub(crate) struct StatusCommand {
    /// User ID (GitHub account ID)
    user_id: u64,
}

#[async_trait]
impl Command for StatusCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let get_sync_status: &dyn GetSyncStatusInterface = ctx.core_module.resolve_ref();
        let status = get_sync_status
            .run(&ctx.as_core_context(), self.user_id)
            .await?;

        match status {
            Some(status) => writeln!(
                ctx.writer.write().await,
                "Last sync for user {}: {} ({}).",
                self.user_id,
                status.last_synced.format(&Rfc3339)?,
                status.sync_type
            )?,
            None => writeln!(
                ctx.writer.write().await,
                "No sync recorded for user {}.",
                self.user_id
            )?,
        }

        Ok(())
    }
}
