use std::sync::atomic::{AtomicU64, Ordering};

use ghsync_config::SyncStatusMode;
use ghsync_ghapi_interface::{types::GhUser, ApiError};
use ghsync_models::SyncStatus;
use serde::Serialize;
use serde_json::Value;
use tokio::sync::Semaphore;

use crate::{collector::PaginatedCollector, CoreContext, Result};

/// Records written during a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncStats {
    pub organizations: u64,
    pub repositories: u64,
    pub commits: u64,
    pub pull_requests: u64,
    pub issues: u64,
    pub changelogs: u64,
}

/// Outcome of a full synchronization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncReport {
    pub status: Option<SyncStatus>,
    pub stats: SyncStats,
}

#[derive(Debug, Default)]
pub(crate) struct SyncCounters {
    organizations: AtomicU64,
    repositories: AtomicU64,
    commits: AtomicU64,
    pull_requests: AtomicU64,
    issues: AtomicU64,
    changelogs: AtomicU64,
}

impl SyncCounters {
    pub fn add_organizations(&self, n: u64) {
        self.organizations.fetch_add(n, Ordering::Relaxed);
    }

    pub fn add_repositories(&self, n: u64) {
        self.repositories.fetch_add(n, Ordering::Relaxed);
    }

    pub fn add_commits(&self, n: u64) {
        self.commits.fetch_add(n, Ordering::Relaxed);
    }

    pub fn add_pull_requests(&self, n: u64) {
        self.pull_requests.fetch_add(n, Ordering::Relaxed);
    }

    pub fn add_issues(&self, n: u64) {
        self.issues.fetch_add(n, Ordering::Relaxed);
    }

    pub fn add_changelogs(&self, n: u64) {
        self.changelogs.fetch_add(n, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> SyncStats {
        SyncStats {
            organizations: self.organizations.load(Ordering::Relaxed),
            repositories: self.repositories.load(Ordering::Relaxed),
            commits: self.commits.load(Ordering::Relaxed),
            pull_requests: self.pull_requests.load(Ordering::Relaxed),
            issues: self.issues.load(Ordering::Relaxed),
            changelogs: self.changelogs.load(Ordering::Relaxed),
        }
    }
}

/// State shared by every branch of one synchronization run.
pub struct SyncSession {
    user_id: u64,
    credential: String,
    permits: Semaphore,
    pub(crate) counters: SyncCounters,
}

impl SyncSession {
    pub fn new(user_id: u64, credential: String, max_concurrent_requests: usize) -> Self {
        Self {
            user_id,
            credential,
            permits: Semaphore::new(max_concurrent_requests.max(1)),
            counters: SyncCounters::default(),
        }
    }

    pub fn user_id(&self) -> u64 {
        self.user_id
    }

    pub fn stats(&self) -> SyncStats {
        self.counters.snapshot()
    }

    pub(crate) fn collector<'s>(&'s self, ctx: &'s CoreContext<'_>) -> PaginatedCollector<'s> {
        PaginatedCollector::new(
            ctx.api_service,
            &self.credential,
            &self.permits,
            ctx.config.sync.page_size,
        )
        .follow_link_header(ctx.config.sync.follow_link_header)
    }

    pub(crate) async fn user_get(&self, ctx: &CoreContext<'_>) -> Result<(GhUser, Value)> {
        let _permit = self
            .permits
            .acquire()
            .await
            .map_err(|e| ApiError::ImplementationError {
                source: Box::new(e),
            })?;

        Ok(ctx.api_service.user_get(&self.credential).await?)
    }

    /// Write the sync status if the configured mode writes at this point.
    pub(crate) async fn mark_synced(
        &self,
        ctx: &CoreContext<'_>,
        at: SyncStatusMode,
    ) -> Result<()> {
        if ctx.config.sync.status_mode == at {
            ctx.db_service
                .integrations_set_sync_status(self.user_id, SyncStatus::full_now())
                .await?;
        }

        Ok(())
    }
}
