use clap::Parser;
use time::format_description::well_known::Rfc3339;

use crate::{commands::CommandContext, Result};

/// List connected users
#[derive(Parser)]
pub(crate) struct IntegrationsListCommand;

impl IntegrationsListCommand {
    pub async fn run(self, ctx: CommandContext) -> Result<()> {
        let integrations = ctx.db_service.integrations_all().await?;

        if integrations.is_empty() {
            writeln!(ctx.writer.write().await, "No integration found.")?;
        } else {
            writeln!(ctx.writer.write().await, "Integrations:")?;
            for integration in integrations {
                let login = integration.profile["login"].as_str().unwrap_or("?");
                let last_synced = match integration.last_synced {
                    Some(date) => date.format(&Rfc3339)?,
                    None => "never".into(),
                };

                writeln!(
                    ctx.writer.write().await,
                    "- {} ({}), last synced: {}",
                    integration.user_id,
                    login,
                    last_synced
                )?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use ghsync_database_interface::DbService;
    use ghsync_models::Integration;
    use serde_json::json;
    use time::macros::datetime;

    use crate::testutils::{test_command, CommandContextTest};

    #[tokio::test]
    async fn run_no_integrations() -> Result<(), Box<dyn Error>> {
        let ctx = CommandContextTest::new();

        assert_eq!(
            test_command(ctx, &["integrations", "list"]).await,
            "No integration found.\n"
        );

        Ok(())
    }

    #[tokio::test]
    async fn run() -> Result<(), Box<dyn Error>> {
        let ctx = CommandContextTest::new();
        ctx.db_service
            .integrations_upsert(Integration {
                user_id: 2,
                profile: json!({"login": "octocat"}),
                last_synced: Some(datetime!(2024-05-02 8:00 UTC)),
                ..Default::default()
            })
            .await?;
        ctx.db_service
            .integrations_upsert(Integration {
                user_id: 1,
                ..Default::default()
            })
            .await?;

        assert_eq!(
            test_command(ctx, &["integrations", "list"]).await,
            "Integrations:\n\
             - 1 (?), last synced: never\n\
             - 2 (octocat), last synced: 2024-05-02T08:00:00Z\n"
        );

        Ok(())
    }
}
