use async_trait::async_trait;
use ghsync_models::SyncStatus;
use shaku::{Component, Interface};

use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait GetSyncStatusInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, user_id: u64) -> Result<Option<SyncStatus>>;
}

#[derive(Component)]
#[shaku(interface = GetSyncStatusInterface)]
pub(crate) struct GetSyncStatus;

#[async_trait]
impl GetSyncStatusInterface for GetSyncStatus {
    #[tracing::instrument(skip(self, ctx))]
    async fn run<'a>(&self, ctx: &CoreContext<'a>, user_id: u64) -> Result<Option<SyncStatus>> {
        Ok(ctx
            .db_service
            .integrations_get(user_id)
            .await?
            .and_then(|i| i.sync_status()))
    }
}
