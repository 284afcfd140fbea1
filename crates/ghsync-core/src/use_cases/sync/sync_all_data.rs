use async_trait::async_trait;
use futures::{StreamExt, TryStreamExt};
use ghsync_config::SyncStatusMode;
use ghsync_ghapi_interface::{routes, types::GhOrganization};
use shaku::{Component, HasComponent, Interface};
use tracing::info;

use super::{GetSyncStatusInterface, SyncOrganizationInterface, SyncReport, SyncSession};
use crate::{
    mapping, use_cases::auth::ResolveAccessTokenInterface, CoreContext, Result,
};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait SyncAllDataInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, user_id: u64) -> Result<SyncReport>;
}

/// Synchronize everything the user can see: profile, organizations and
/// their whole repository trees.
///
/// Organizations, repositories and issues are walked concurrently, with
/// in-flight requests bounded for the whole run. The first error aborts
/// the run.
#[derive(Component)]
#[shaku(interface = SyncAllDataInterface)]
pub(crate) struct SyncAllData;

#[async_trait]
impl SyncAllDataInterface for SyncAllData {
    #[tracing::instrument(skip(self, ctx))]
    async fn run<'a>(&self, ctx: &CoreContext<'a>, user_id: u64) -> Result<SyncReport> {
        let resolve_access_token: &dyn ResolveAccessTokenInterface =
            ctx.core_module.resolve_ref();
        let credential = resolve_access_token.run(ctx, user_id).await?;

        let session = SyncSession::new(
            user_id,
            credential,
            ctx.config.sync.max_concurrent_requests,
        );
        let session = &session;

        let (user, raw) = session.user_get(ctx).await?;
        ctx.db_service
            .users_upsert(mapping::user_profile(user, raw))
            .await?;

        let mut orgs = Vec::new();
        for (org, raw) in session
            .collector(ctx)
            .collect_as::<GhOrganization>(&routes::user_orgs())
            .await?
        {
            orgs.push(
                ctx.db_service
                    .organizations_upsert(mapping::organization(org, raw))
                    .await?,
            );
            session.counters.add_organizations(1);
        }

        let sync_organization: &dyn SyncOrganizationInterface = ctx.core_module.resolve_ref();
        futures::stream::iter(orgs)
            .map(Ok)
            .try_for_each_concurrent(None, |org| async move {
                sync_organization.run(ctx, session, &org).await
            })
            .await?;

        session.mark_synced(ctx, SyncStatusMode::PerRun).await?;

        let get_sync_status: &dyn GetSyncStatusInterface = ctx.core_module.resolve_ref();
        let report = SyncReport {
            status: get_sync_status.run(ctx, user_id).await?,
            stats: session.stats(),
        };

        info!(
            user_id = user_id,
            stats = ?report.stats,
            message = "Synchronization complete"
        );

        Ok(report)
    }
}
