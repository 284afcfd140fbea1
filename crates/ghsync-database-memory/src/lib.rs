use std::{cmp::Ordering, collections::HashMap, hash::Hash, sync::RwLock};

use async_trait::async_trait;
use ghsync_database_interface::{dedupe_last_by_key, DbService, Result};
use ghsync_models::{
    Changelog, Commit, Integration, Issue, ListPage, ListQuery, Organization, PullRequest,
    Repository, SortOrder, SyncStatus, UserProfile,
};

#[derive(Debug, Default)]
pub struct MemoryDb {
    integrations: RwLock<HashMap<u64, Integration>>,
    users: RwLock<HashMap<u64, UserProfile>>,
    organizations: RwLock<HashMap<u64, Organization>>,
    repositories: RwLock<HashMap<u64, Repository>>,
    commits: RwLock<HashMap<String, Commit>>,
    pull_requests: RwLock<HashMap<u64, PullRequest>>,
    issues: RwLock<HashMap<u64, Issue>>,
    changelogs: RwLock<HashMap<String, Changelog>>,
}

impl MemoryDb {
    pub fn new() -> Self {
        Default::default()
    }
}

/// Row comparator for one sortable field.
type Comparator<T> = fn(&T, &T) -> Ordering;

/// Filter, sort and slice a table the way a listing query asks.
fn select<K, T, F, P, B>(
    table: &RwLock<HashMap<K, T>>,
    query: &ListQuery,
    filter: F,
    primary: P,
    default_order: SortOrder,
    tiebreak: B,
) -> ListPage<T>
where
    K: Eq + Hash,
    T: Clone,
    F: Fn(&T) -> bool,
    P: Fn(&T, &T) -> Ordering,
    B: Fn(&T, &T) -> Ordering,
{
    let mut values: Vec<_> = table
        .read()
        .unwrap()
        .values()
        .filter(|v| filter(v))
        .cloned()
        .collect();

    let order = query.order_or(default_order);
    values.sort_by(|a, b| {
        let ordering = match order {
            SortOrder::Asc => primary(a, b),
            SortOrder::Desc => primary(b, a),
        };
        ordering.then_with(|| tiebreak(a, b))
    });

    let total = values.len() as u64;
    let items = values
        .into_iter()
        .skip(query.offset() as usize)
        .take(query.limit as usize)
        .collect();

    ListPage { items, total }
}

fn matches_search(term: &Option<String>, fields: &[Option<&str>]) -> bool {
    match term {
        None => true,
        Some(term) => fields
            .iter()
            .flatten()
            .any(|f| f.to_lowercase().contains(term)),
    }
}

fn matches_author(query: &ListQuery, author: Option<&str>) -> bool {
    match query.author_term() {
        None => true,
        Some(term) => author.is_some_and(|a| a.to_lowercase().contains(&term)),
    }
}

fn matches_parent(query: &ListQuery, parent_id: u64) -> bool {
    query.parent_id.map_or(true, |id| id == parent_id)
}

fn matches_state(query: &ListQuery, state: &str) -> bool {
    query
        .state
        .as_deref()
        .map_or(true, |s| s.eq_ignore_ascii_case(state))
}

fn changelog_order(field: Option<&str>) -> Comparator<Changelog> {
    match field {
        Some("changelogId") => |a, b| a.changelog_id.cmp(&b.changelog_id),
        Some("issueId") => |a, b| a.issue_id.cmp(&b.issue_id),
        _ => |a, b| a.created_at.cmp(&b.created_at),
    }
}

fn commit_order(field: Option<&str>) -> Comparator<Commit> {
    match field {
        Some("commitId") => |a, b| a.commit_id.cmp(&b.commit_id),
        Some("repoId") => |a, b| a.repo_id.cmp(&b.repo_id),
        _ => |a, b| a.date.cmp(&b.date),
    }
}

fn issue_order(field: Option<&str>) -> Comparator<Issue> {
    match field {
        Some("issueId") => |a, b| a.issue_id.cmp(&b.issue_id),
        Some("repoId") => |a, b| a.repo_id.cmp(&b.repo_id),
        Some("state") => |a, b| a.state.cmp(&b.state),
        Some("closedAt") => |a, b| a.closed_at.cmp(&b.closed_at),
        _ => |a, b| a.created_at.cmp(&b.created_at),
    }
}

fn organization_order(field: Option<&str>) -> Comparator<Organization> {
    match field {
        Some("orgId") => |a, b| a.org_id.cmp(&b.org_id),
        _ => |a, b| a.name.cmp(&b.name),
    }
}

fn pull_request_order(field: Option<&str>) -> Comparator<PullRequest> {
    match field {
        Some("pullId") => |a, b| a.pull_id.cmp(&b.pull_id),
        Some("repoId") => |a, b| a.repo_id.cmp(&b.repo_id),
        Some("state") => |a, b| a.state.cmp(&b.state),
        Some("mergedAt") => |a, b| a.merged_at.cmp(&b.merged_at),
        _ => |a, b| a.created_at.cmp(&b.created_at),
    }
}

fn repository_order(field: Option<&str>) -> Comparator<Repository> {
    match field {
        Some("repoId") => |a, b| a.repo_id.cmp(&b.repo_id),
        Some("orgId") => |a, b| a.org_id.cmp(&b.org_id),
        Some("fullName") => |a, b| a.full_name.cmp(&b.full_name),
        _ => |a, b| a.name.cmp(&b.name),
    }
}

fn user_order(field: Option<&str>) -> Comparator<UserProfile> {
    match field {
        Some("userId") => |a, b| a.user_id.cmp(&b.user_id),
        Some("name") => |a, b| a.name.cmp(&b.name),
        _ => |a, b| a.login.cmp(&b.login),
    }
}

#[async_trait]
impl DbService for MemoryDb {
    ////////////
    // Changelogs

    async fn changelogs_upsert(&self, instance: Changelog) -> Result<Changelog> {
        self.changelogs
            .write()
            .unwrap()
            .insert(instance.changelog_id.clone(), instance.clone());
        Ok(instance)
    }

    async fn changelogs_upsert_many(&self, instances: Vec<Changelog>) -> Result<u64> {
        let instances = dedupe_last_by_key(instances, |c| c.changelog_id.clone());
        let count = instances.len() as u64;
        let mut changelogs = self.changelogs.write().unwrap();
        for instance in instances {
            changelogs.insert(instance.changelog_id.clone(), instance);
        }
        Ok(count)
    }

    async fn changelogs_get(&self, changelog_id: &str) -> Result<Option<Changelog>> {
        Ok(self.changelogs.read().unwrap().get(changelog_id).cloned())
    }

    async fn changelogs_list(&self, query: &ListQuery) -> Result<ListPage<Changelog>> {
        let term = query.search_term();
        Ok(select(
            &self.changelogs,
            query,
            |c| matches_parent(query, c.issue_id) && matches_search(&term, &[c.event.as_deref()]),
            changelog_order(query.sort_by.as_deref()),
            SortOrder::Desc,
            |a, b| a.changelog_id.cmp(&b.changelog_id),
        ))
    }

    async fn changelogs_count(&self) -> Result<u64> {
        Ok(self.changelogs.read().unwrap().len() as u64)
    }

    /////////
    // Commits

    async fn commits_upsert(&self, instance: Commit) -> Result<Commit> {
        self.commits
            .write()
            .unwrap()
            .insert(instance.commit_id.clone(), instance.clone());
        Ok(instance)
    }

    async fn commits_upsert_many(&self, instances: Vec<Commit>) -> Result<u64> {
        let instances = dedupe_last_by_key(instances, |c| c.commit_id.clone());
        let count = instances.len() as u64;
        let mut commits = self.commits.write().unwrap();
        for instance in instances {
            commits.insert(instance.commit_id.clone(), instance);
        }
        Ok(count)
    }

    async fn commits_get(&self, commit_id: &str) -> Result<Option<Commit>> {
        Ok(self.commits.read().unwrap().get(commit_id).cloned())
    }

    async fn commits_list(&self, query: &ListQuery) -> Result<ListPage<Commit>> {
        let term = query.search_term();
        Ok(select(
            &self.commits,
            query,
            |c| {
                matches_parent(query, c.repo_id)
                    && matches_author(query, c.author.as_ref().map(|a| a.login.as_str()))
                    && matches_search(
                        &term,
                        &[
                            Some(c.message.as_str()),
                            c.author.as_ref().map(|a| a.login.as_str()),
                        ],
                    )
            },
            commit_order(query.sort_by.as_deref()),
            SortOrder::Desc,
            |a, b| a.commit_id.cmp(&b.commit_id),
        ))
    }

    async fn commits_count(&self) -> Result<u64> {
        Ok(self.commits.read().unwrap().len() as u64)
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }

    //////////////
    // Integrations

    async fn integrations_upsert(&self, instance: Integration) -> Result<Integration> {
        self.integrations
            .write()
            .unwrap()
            .insert(instance.user_id, instance.clone());
        Ok(instance)
    }

    async fn integrations_get(&self, user_id: u64) -> Result<Option<Integration>> {
        Ok(self.integrations.read().unwrap().get(&user_id).cloned())
    }

    async fn integrations_set_sync_status(
        &self,
        user_id: u64,
        status: SyncStatus,
    ) -> Result<Integration> {
        let mut integration = self.integrations_get_expect(user_id).await?;
        integration.last_synced = Some(status.last_synced);
        integration.sync_type = Some(status.sync_type);
        self.integrations
            .write()
            .unwrap()
            .insert(user_id, integration.clone());
        Ok(integration)
    }

    async fn integrations_delete(&self, user_id: u64) -> Result<bool> {
        Ok(self.integrations.write().unwrap().remove(&user_id).is_some())
    }

    async fn integrations_all(&self) -> Result<Vec<Integration>> {
        let mut values: Vec<_> = self.integrations.read().unwrap().values().cloned().collect();
        values.sort_by_key(|i| i.user_id);
        Ok(values)
    }

    ////////
    // Issues

    async fn issues_upsert(&self, instance: Issue) -> Result<Issue> {
        self.issues
            .write()
            .unwrap()
            .insert(instance.issue_id, instance.clone());
        Ok(instance)
    }

    async fn issues_get(&self, issue_id: u64) -> Result<Option<Issue>> {
        Ok(self.issues.read().unwrap().get(&issue_id).cloned())
    }

    async fn issues_list(&self, query: &ListQuery) -> Result<ListPage<Issue>> {
        let term = query.search_term();
        Ok(select(
            &self.issues,
            query,
            |i| {
                matches_parent(query, i.repo_id)
                    && matches_state(query, &i.state)
                    && matches_search(
                        &term,
                        &[
                            Some(i.title.as_str()),
                            i.user.as_ref().map(|u| u.login.as_str()),
                        ],
                    )
            },
            issue_order(query.sort_by.as_deref()),
            SortOrder::Desc,
            |a, b| a.issue_id.cmp(&b.issue_id),
        ))
    }

    async fn issues_count(&self) -> Result<u64> {
        Ok(self.issues.read().unwrap().len() as u64)
    }

    ///////////////
    // Organizations

    async fn organizations_upsert(&self, instance: Organization) -> Result<Organization> {
        self.organizations
            .write()
            .unwrap()
            .insert(instance.org_id, instance.clone());
        Ok(instance)
    }

    async fn organizations_get(&self, org_id: u64) -> Result<Option<Organization>> {
        Ok(self.organizations.read().unwrap().get(&org_id).cloned())
    }

    async fn organizations_list(&self, query: &ListQuery) -> Result<ListPage<Organization>> {
        let term = query.search_term();
        Ok(select(
            &self.organizations,
            query,
            |o| matches_search(&term, &[Some(o.name.as_str()), o.description.as_deref()]),
            organization_order(query.sort_by.as_deref()),
            SortOrder::Asc,
            |a, b| a.org_id.cmp(&b.org_id),
        ))
    }

    async fn organizations_count(&self) -> Result<u64> {
        Ok(self.organizations.read().unwrap().len() as u64)
    }

    ///////////////
    // Pull requests

    async fn pull_requests_upsert(&self, instance: PullRequest) -> Result<PullRequest> {
        self.pull_requests
            .write()
            .unwrap()
            .insert(instance.pull_id, instance.clone());
        Ok(instance)
    }

    async fn pull_requests_get(&self, pull_id: u64) -> Result<Option<PullRequest>> {
        Ok(self.pull_requests.read().unwrap().get(&pull_id).cloned())
    }

    async fn pull_requests_list(&self, query: &ListQuery) -> Result<ListPage<PullRequest>> {
        let term = query.search_term();
        Ok(select(
            &self.pull_requests,
            query,
            |p| {
                matches_parent(query, p.repo_id)
                    && matches_state(query, &p.state)
                    && matches_search(
                        &term,
                        &[
                            Some(p.title.as_str()),
                            p.user.as_ref().map(|u| u.login.as_str()),
                        ],
                    )
            },
            pull_request_order(query.sort_by.as_deref()),
            SortOrder::Desc,
            |a, b| a.pull_id.cmp(&b.pull_id),
        ))
    }

    async fn pull_requests_count(&self) -> Result<u64> {
        Ok(self.pull_requests.read().unwrap().len() as u64)
    }

    //////////////
    // Repositories

    async fn repositories_upsert(&self, instance: Repository) -> Result<Repository> {
        self.repositories
            .write()
            .unwrap()
            .insert(instance.repo_id, instance.clone());
        Ok(instance)
    }

    async fn repositories_get(&self, repo_id: u64) -> Result<Option<Repository>> {
        Ok(self.repositories.read().unwrap().get(&repo_id).cloned())
    }

    async fn repositories_list(&self, query: &ListQuery) -> Result<ListPage<Repository>> {
        let term = query.search_term();
        Ok(select(
            &self.repositories,
            query,
            |r| {
                matches_parent(query, r.org_id)
                    && matches_search(
                        &term,
                        &[
                            Some(r.name.as_str()),
                            Some(r.full_name.as_str()),
                            r.description.as_deref(),
                        ],
                    )
            },
            repository_order(query.sort_by.as_deref()),
            SortOrder::Asc,
            |a, b| a.repo_id.cmp(&b.repo_id),
        ))
    }

    async fn repositories_count(&self) -> Result<u64> {
        Ok(self.repositories.read().unwrap().len() as u64)
    }

    ///////
    // Users

    async fn users_upsert(&self, instance: UserProfile) -> Result<UserProfile> {
        self.users
            .write()
            .unwrap()
            .insert(instance.user_id, instance.clone());
        Ok(instance)
    }

    async fn users_get(&self, user_id: u64) -> Result<Option<UserProfile>> {
        Ok(self.users.read().unwrap().get(&user_id).cloned())
    }

    async fn users_list(&self, query: &ListQuery) -> Result<ListPage<UserProfile>> {
        let term = query.search_term();
        Ok(select(
            &self.users,
            query,
            |u| {
                matches_search(
                    &term,
                    &[Some(u.login.as_str()), u.name.as_deref(), u.email.as_deref()],
                )
            },
            user_order(query.sort_by.as_deref()),
            SortOrder::Asc,
            |a, b| a.user_id.cmp(&b.user_id),
        ))
    }

    async fn users_count(&self) -> Result<u64> {
        Ok(self.users.read().unwrap().len() as u64)
    }
}
