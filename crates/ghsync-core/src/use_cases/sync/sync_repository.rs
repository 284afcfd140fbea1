use async_trait::async_trait;
use futures::{StreamExt, TryStreamExt};
use ghsync_config::SyncStatusMode;
use ghsync_ghapi_interface::{
    routes,
    types::{GhCommit, GhIssue, GhPullRequest},
};
use ghsync_models::{Organization, Repository};
use shaku::{Component, HasComponent, Interface};
use tracing::info;

use super::{SyncIssueInterface, SyncSession};
use crate::{mapping, CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait SyncRepositoryInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        session: &SyncSession,
        org: &Organization,
        repo: &Repository,
    ) -> Result<()>;
}

/// Store a repository with its commits, pull requests and issues.
///
/// The three phases run one after the other. Issues of one phase are
/// synchronized concurrently.
#[derive(Component)]
#[shaku(interface = SyncRepositoryInterface)]
pub(crate) struct SyncRepository;

#[async_trait]
impl SyncRepositoryInterface for SyncRepository {
    #[tracing::instrument(skip_all, fields(repo = %repo.full_name))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        session: &SyncSession,
        org: &Organization,
        repo: &Repository,
    ) -> Result<()> {
        ctx.db_service.repositories_upsert(repo.clone()).await?;
        session.counters.add_repositories(1);

        let collector = session.collector(ctx);

        // Commits
        let commits = collector
            .collect_as::<GhCommit>(&routes::repo_commits(&org.name, &repo.name))
            .await?
            .into_iter()
            .map(|(commit, raw)| mapping::commit(repo.repo_id, commit, raw))
            .collect::<Vec<_>>();
        if !commits.is_empty() {
            let written = ctx.db_service.commits_upsert_many(commits).await?;
            session.counters.add_commits(written);
        }

        // Pull requests
        let pulls = collector
            .collect_as::<GhPullRequest>(&routes::repo_pulls(&org.name, &repo.name))
            .await?;
        for (pull, raw) in pulls {
            ctx.db_service
                .pull_requests_upsert(mapping::pull_request(repo.repo_id, pull, raw))
                .await?;
            session.counters.add_pull_requests(1);
        }

        // Issues
        let issues = collector
            .collect_as::<GhIssue>(&routes::repo_issues(&org.name, &repo.name))
            .await?;
        let sync_issue: &dyn SyncIssueInterface = ctx.core_module.resolve_ref();
        futures::stream::iter(issues)
            .map(Ok)
            .try_for_each_concurrent(None, |(issue, raw)| async move {
                let issue = mapping::issue(repo.repo_id, issue, raw);
                sync_issue.run(ctx, session, org, repo, &issue).await
            })
            .await?;

        session
            .mark_synced(ctx, SyncStatusMode::PerRepository)
            .await?;

        info!(
            repo = %repo.full_name,
            message = "Repository synchronized"
        );

        Ok(())
    }
}
