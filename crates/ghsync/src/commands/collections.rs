use async_trait::async_trait;
use clap::Parser;
use ghsync_core::use_cases::collections::CountCollectionsInterface;
use shaku::HasComponent;

use super::{Command, CommandContext};
use crate::Result;

/// Show stored record counts
#[derive(Parser)]
pub(crate) struct CollectionsCommand;

#[async_trait]
impl Command for CollectionsCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let count_collections: &dyn CountCollectionsInterface = ctx.core_module.resolve_ref();
        let counts = count_collections.run(&ctx.as_core_context()).await?;

        let mut writer = ctx.writer.write().await;
        for entry in counts {
            writeln!(
                writer,
                "- {}: {}",
                entry.collection.display_name(),
                entry.count
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use ghsync_database_interface::DbService;
    use ghsync_models::Repository;

    use crate::testutils::{test_command, CommandContextTest};

    #[tokio::test]
    async fn run() -> Result<(), Box<dyn Error>> {
        let ctx = CommandContextTest::new();
        ctx.db_service
            .repositories_upsert(Repository {
                repo_id: 1,
                org_id: 1,
                name: "api".into(),
                ..Default::default()
            })
            .await?;

        let output = test_command(ctx, &["collections"]).await;
        assert_eq!(output.lines().count(), 7);
        assert!(output.starts_with("- Organizations: 0\n- Repositories: 1\n"));

        Ok(())
    }
}
