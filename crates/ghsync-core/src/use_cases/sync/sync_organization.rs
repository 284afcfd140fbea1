use async_trait::async_trait;
use futures::{StreamExt, TryStreamExt};
use ghsync_ghapi_interface::{routes, types::GhRepository};
use ghsync_models::Organization;
use shaku::{Component, HasComponent, Interface};

use super::{SyncRepositoryInterface, SyncSession};
use crate::{mapping, CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait SyncOrganizationInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        session: &SyncSession,
        org: &Organization,
    ) -> Result<()>;
}

/// Synchronize every repository of an organization concurrently.
#[derive(Component)]
#[shaku(interface = SyncOrganizationInterface)]
pub(crate) struct SyncOrganization;

#[async_trait]
impl SyncOrganizationInterface for SyncOrganization {
    #[tracing::instrument(skip_all, fields(org = %org.name))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        session: &SyncSession,
        org: &Organization,
    ) -> Result<()> {
        let repos = session
            .collector(ctx)
            .collect_as::<GhRepository>(&routes::org_repos(&org.name))
            .await?;

        let sync_repository: &dyn SyncRepositoryInterface = ctx.core_module.resolve_ref();
        futures::stream::iter(repos)
            .map(Ok)
            .try_for_each_concurrent(None, |(repo, raw)| async move {
                let repo = mapping::repository(org.org_id, repo, raw);
                sync_repository.run(ctx, session, org, &repo).await
            })
            .await
    }
}
