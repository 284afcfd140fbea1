use async_trait::async_trait;
use ghsync_models::{
    Changelog, Collection, Commit, Integration, Issue, ListPage, ListQuery, Organization,
    PullRequest, Repository, SyncStatus, UserProfile,
};

use crate::{DatabaseError, Result};

/// Storage for integrations and synchronized GitHub data.
///
/// Every `*_upsert` call is keyed by the external identifier of its entity:
/// writing the same key twice leaves one record holding the last payload.
#[async_trait]
pub trait DbService: Send + Sync {
    async fn changelogs_upsert(&self, instance: Changelog) -> Result<Changelog>;
    /// Upsert a batch of changelogs, returning the number of written records.
    async fn changelogs_upsert_many(&self, instances: Vec<Changelog>) -> Result<u64>;
    async fn changelogs_get(&self, changelog_id: &str) -> Result<Option<Changelog>>;
    async fn changelogs_list(&self, query: &ListQuery) -> Result<ListPage<Changelog>>;
    async fn changelogs_count(&self) -> Result<u64>;
    async fn commits_upsert(&self, instance: Commit) -> Result<Commit>;
    /// Upsert a batch of commits, returning the number of written records.
    async fn commits_upsert_many(&self, instances: Vec<Commit>) -> Result<u64>;
    async fn commits_get(&self, commit_id: &str) -> Result<Option<Commit>>;
    async fn commits_list(&self, query: &ListQuery) -> Result<ListPage<Commit>>;
    async fn commits_count(&self) -> Result<u64>;
    async fn health_check(&self) -> Result<()>;
    async fn integrations_upsert(&self, instance: Integration) -> Result<Integration>;
    async fn integrations_get(&self, user_id: u64) -> Result<Option<Integration>>;
    async fn integrations_get_expect(&self, user_id: u64) -> Result<Integration> {
        self.integrations_get(user_id)
            .await?
            .ok_or(DatabaseError::UnknownIntegration(user_id))
    }
    async fn integrations_set_sync_status(
        &self,
        user_id: u64,
        status: SyncStatus,
    ) -> Result<Integration>;
    async fn integrations_delete(&self, user_id: u64) -> Result<bool>;
    async fn integrations_all(&self) -> Result<Vec<Integration>>;
    async fn issues_upsert(&self, instance: Issue) -> Result<Issue>;
    async fn issues_get(&self, issue_id: u64) -> Result<Option<Issue>>;
    async fn issues_list(&self, query: &ListQuery) -> Result<ListPage<Issue>>;
    async fn issues_count(&self) -> Result<u64>;
    async fn organizations_upsert(&self, instance: Organization) -> Result<Organization>;
    async fn organizations_get(&self, org_id: u64) -> Result<Option<Organization>>;
    async fn organizations_list(&self, query: &ListQuery) -> Result<ListPage<Organization>>;
    async fn organizations_count(&self) -> Result<u64>;
    async fn pull_requests_upsert(&self, instance: PullRequest) -> Result<PullRequest>;
    async fn pull_requests_get(&self, pull_id: u64) -> Result<Option<PullRequest>>;
    async fn pull_requests_list(&self, query: &ListQuery) -> Result<ListPage<PullRequest>>;
    async fn pull_requests_count(&self) -> Result<u64>;
    async fn repositories_upsert(&self, instance: Repository) -> Result<Repository>;
    async fn repositories_get(&self, repo_id: u64) -> Result<Option<Repository>>;
    async fn repositories_list(&self, query: &ListQuery) -> Result<ListPage<Repository>>;
    async fn repositories_count(&self) -> Result<u64>;
    async fn users_upsert(&self, instance: UserProfile) -> Result<UserProfile>;
    async fn users_get(&self, user_id: u64) -> Result<Option<UserProfile>>;
    async fn users_list(&self, query: &ListQuery) -> Result<ListPage<UserProfile>>;
    async fn users_count(&self) -> Result<u64>;

    /// Record count of a collection.
    async fn collection_count(&self, collection: Collection) -> Result<u64> {
        match collection {
            Collection::Organizations => self.organizations_count().await,
            Collection::Repositories => self.repositories_count().await,
            Collection::Commits => self.commits_count().await,
            Collection::Pulls => self.pull_requests_count().await,
            Collection::Issues => self.issues_count().await,
            Collection::Changelogs => self.changelogs_count().await,
            Collection::Users => self.users_count().await,
        }
    }
}
