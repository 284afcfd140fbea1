use async_trait::async_trait;
use ghsync_ghapi_interface::{routes, types::GhTimelineEvent};
use ghsync_models::{Issue, Organization, Repository};
use shaku::{Component, Interface};

use super::SyncSession;
use crate::{mapping, CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait SyncIssueInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        session: &SyncSession,
        org: &Organization,
        repo: &Repository,
        issue: &Issue,
    ) -> Result<()>;
}

/// Store an issue, then its whole timeline.
#[derive(Component)]
#[shaku(interface = SyncIssueInterface)]
pub(crate) struct SyncIssue;

#[async_trait]
impl SyncIssueInterface for SyncIssue {
    #[tracing::instrument(skip_all, fields(repo = %repo.full_name, number = issue.number))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        session: &SyncSession,
        org: &Organization,
        repo: &Repository,
        issue: &Issue,
    ) -> Result<()> {
        ctx.db_service.issues_upsert(issue.clone()).await?;
        session.counters.add_issues(1);

        let events = session
            .collector(ctx)
            .collect_as::<GhTimelineEvent>(&routes::issue_timeline(
                &org.name,
                &repo.name,
                issue.number,
            ))
            .await?;

        let changelogs = events
            .into_iter()
            .enumerate()
            .map(|(position, (event, raw))| {
                mapping::changelog(issue.issue_id, position, event, raw)
            })
            .collect::<Vec<_>>();

        if !changelogs.is_empty() {
            let written = ctx.db_service.changelogs_upsert_many(changelogs).await?;
            session.counters.add_changelogs(written);
        }

        Ok(())
    }
}
