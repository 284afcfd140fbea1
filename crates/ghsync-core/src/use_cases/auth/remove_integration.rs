use async_trait::async_trait;
use shaku::{Component, Interface};

use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait RemoveIntegrationInterface: Interface {
    /// Returns `false` when there was nothing to remove.
    async fn run<'a>(&self, ctx: &CoreContext<'a>, user_id: u64) -> Result<bool>;
}

#[derive(Component)]
#[shaku(interface = RemoveIntegrationInterface)]
pub(crate) struct RemoveIntegration;

#[async_trait]
impl RemoveIntegrationInterface for RemoveIntegration {
    #[tracing::instrument(skip(self, ctx))]
    async fn run<'a>(&self, ctx: &CoreContext<'a>, user_id: u64) -> Result<bool> {
        Ok(ctx.db_service.integrations_delete(user_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use ghsync_database_interface::DbService;
    use ghsync_models::Integration;

    use super::*;
    use crate::context::tests::CoreContextTest;

    #[tokio::test]
    async fn run() {
        let ctx = CoreContextTest::new();
        ctx.db_service
            .integrations_upsert(Integration {
                user_id: 1,
                ..Default::default()
            })
            .await
            .unwrap();

        assert!(RemoveIntegration.run(&ctx.as_context(), 1).await.unwrap());
        assert!(!RemoveIntegration.run(&ctx.as_context(), 1).await.unwrap());
    }
}
