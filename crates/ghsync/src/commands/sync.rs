use async_trait::async_trait;
use clap::Parser;
use ghsync_core::use_cases::sync::SyncAllDataInterface;
use shaku::HasComponent;

use super::{Command, CommandContext};
use crate::Result;

/// Synchronize all GitHub data of a connected user
#[derive(Debug, Parser)]
pub(crate) struct SyncCommand {
    /// User ID (GitHub account ID)
    user_id: u64,
}

#[async_trait]
impl Command for SyncCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let sync_all_data: &dyn SyncAllDataInterface = ctx.core_module.resolve_ref();
        let report = sync_all_data
            .run(&ctx.as_core_context(), self.user_id)
            .await?;

        let stats = report.stats;
        let mut writer = ctx.writer.write().await;
        writeln!(writer, "Data synced from GitHub for user {}.", self.user_id)?;
        writeln!(writer, "- Organizations: {}", stats.organizations)?;
        writeln!(writer, "- Repositories: {}", stats.repositories)?;
        writeln!(writer, "- Commits: {}", stats.commits)?;
        writeln!(writer, "- Pull Requests: {}", stats.pull_requests)?;
        writeln!(writer, "- Issues: {}", stats.issues)?;
        writeln!(writer, "- Changelogs: {}", stats.changelogs)?;

        Ok(())
    }
}
