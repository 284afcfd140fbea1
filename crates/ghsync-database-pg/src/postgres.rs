use async_trait::async_trait;
use ghsync_database_interface::{
    dedupe_last_by_key, DatabaseError, DbService, Result, INTEGRATIONS_STORE,
};
use ghsync_models::{
    Changelog, Collection, Commit, Integration, Issue, ListPage, ListQuery, Organization,
    PullRequest, Repository, SortOrder, SyncStatus, UserProfile,
};
use sqlx::{postgres::PgRow, types::Json, FromRow, PgPool, Postgres, QueryBuilder};

use crate::row::{
    ChangelogRow, CommitRow, IntegrationRow, IssueRow, OrganizationRow, PullRequestRow,
    RepositoryRow, UserProfileRow,
};

/// Rows per multi-row insert, well under the bind parameter limit.
const BULK_CHUNK_SIZE: usize = 1000;

/// Static description of how a table answers a listing query.
struct ListLayout {
    table: &'static str,
    parent_column: Option<&'static str>,
    state_column: Option<&'static str>,
    search_columns: &'static [&'static str],
    author_column: Option<&'static str>,
    /// Sortable fields, by listing field name.
    sort_columns: &'static [(&'static str, &'static str)],
    sort_column: &'static str,
    default_order: SortOrder,
    key_column: &'static str,
}

const CHANGELOG_LIST: ListLayout = ListLayout {
    table: "changelog",
    parent_column: Some("issue_id"),
    state_column: None,
    search_columns: &["event"],
    author_column: None,
    sort_columns: &[
        ("changelogId", "changelog_id"),
        ("issueId", "issue_id"),
        ("createdAt", "created_at"),
    ],
    sort_column: "created_at",
    default_order: SortOrder::Desc,
    key_column: "changelog_id",
};

const COMMIT_LIST: ListLayout = ListLayout {
    table: "git_commit",
    parent_column: Some("repo_id"),
    state_column: None,
    search_columns: &["message", "author->>'login'"],
    author_column: Some("author->>'login'"),
    sort_columns: &[("commitId", "commit_id"), ("repoId", "repo_id"), ("date", "date")],
    sort_column: "date",
    default_order: SortOrder::Desc,
    key_column: "commit_id",
};

const ISSUE_LIST: ListLayout = ListLayout {
    table: "issue",
    parent_column: Some("repo_id"),
    state_column: Some("state"),
    search_columns: &["title", "author->>'login'"],
    author_column: None,
    sort_columns: &[
        ("issueId", "issue_id"),
        ("repoId", "repo_id"),
        ("state", "state"),
        ("createdAt", "created_at"),
        ("closedAt", "closed_at"),
    ],
    sort_column: "created_at",
    default_order: SortOrder::Desc,
    key_column: "issue_id",
};

const ORGANIZATION_LIST: ListLayout = ListLayout {
    table: "organization",
    parent_column: None,
    state_column: None,
    search_columns: &["name", "description"],
    author_column: None,
    sort_columns: &[("orgId", "org_id"), ("name", "name")],
    sort_column: "name",
    default_order: SortOrder::Asc,
    key_column: "org_id",
};

const PULL_REQUEST_LIST: ListLayout = ListLayout {
    table: "pull_request",
    parent_column: Some("repo_id"),
    state_column: Some("state"),
    search_columns: &["title", "author->>'login'"],
    author_column: None,
    sort_columns: &[
        ("pullId", "pull_id"),
        ("repoId", "repo_id"),
        ("state", "state"),
        ("createdAt", "created_at"),
        ("mergedAt", "merged_at"),
    ],
    sort_column: "created_at",
    default_order: SortOrder::Desc,
    key_column: "pull_id",
};

const REPOSITORY_LIST: ListLayout = ListLayout {
    table: "repository",
    parent_column: Some("org_id"),
    state_column: None,
    search_columns: &["name", "full_name", "description"],
    author_column: None,
    sort_columns: &[
        ("repoId", "repo_id"),
        ("orgId", "org_id"),
        ("name", "name"),
        ("fullName", "full_name"),
    ],
    sort_column: "name",
    default_order: SortOrder::Asc,
    key_column: "repo_id",
};

const USER_LIST: ListLayout = ListLayout {
    table: "github_user",
    parent_column: None,
    state_column: None,
    search_columns: &["login", "name", "email"],
    author_column: None,
    sort_columns: &[("userId", "user_id"), ("login", "login"), ("name", "name")],
    sort_column: "login",
    default_order: SortOrder::Asc,
    key_column: "user_id",
};

fn implementation_error(e: sqlx::Error) -> DatabaseError {
    DatabaseError::ImplementationError { source: e.into() }
}

/// Escape LIKE wildcards and wrap the term for a substring match.
fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

impl ListLayout {
    fn order_column(&self, field: Option<&str>) -> &'static str {
        field
            .and_then(|f| self.sort_columns.iter().find(|(name, _)| *name == f))
            .map_or(self.sort_column, |(_, column)| *column)
    }
}

fn push_list_filters(
    qb: &mut QueryBuilder<'_, Postgres>,
    layout: &ListLayout,
    query: &ListQuery,
) {
    qb.push(" WHERE TRUE");

    if let (Some(column), Some(parent_id)) = (layout.parent_column, query.parent_id) {
        qb.push(format!(" AND {column} = "))
            .push_bind(parent_id as i64);
    }

    if let (Some(column), Some(state)) = (layout.state_column, query.state.as_deref()) {
        qb.push(format!(" AND LOWER({column}) = LOWER("))
            .push_bind(state.to_owned())
            .push(")");
    }

    if let (Some(column), Some(author)) = (layout.author_column, query.author_term()) {
        qb.push(format!(" AND {column} ILIKE "))
            .push_bind(like_pattern(&author));
    }

    if let Some(term) = query.search_term() {
        if !layout.search_columns.is_empty() {
            let pattern = like_pattern(&term);
            qb.push(" AND (");
            let mut separated = qb.separated(" OR ");
            for column in layout.search_columns {
                separated.push(format!("{column} ILIKE "));
                separated.push_bind_unseparated(pattern.clone());
            }
            qb.push(")");
        }
    }
}

pub struct PostgresDb {
    pool: PgPool,
}

impl PostgresDb {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn count(&self, table: &str) -> Result<u64> {
        sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&self.pool)
            .await
            .map(|c| c as u64)
            .map_err(implementation_error)
    }

    async fn list<R, T>(&self, layout: &ListLayout, query: &ListQuery) -> Result<ListPage<T>>
    where
        R: for<'r> FromRow<'r, PgRow> + Send + Unpin,
        T: From<R>,
    {
        let mut count_qb: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT COUNT(*) FROM {}", layout.table));
        push_list_filters(&mut count_qb, layout, query);
        let total = count_qb
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(implementation_error)? as u64;

        let (direction, nulls) = match query.order_or(layout.default_order) {
            SortOrder::Asc => ("ASC", "FIRST"),
            SortOrder::Desc => ("DESC", "LAST"),
        };

        let mut qb: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT * FROM {}", layout.table));
        push_list_filters(&mut qb, layout, query);
        qb.push(format!(
            " ORDER BY {} {direction} NULLS {nulls}, {} ASC LIMIT ",
            layout.order_column(query.sort_by.as_deref()),
            layout.key_column
        ))
        .push_bind(i64::try_from(query.limit).unwrap_or(i64::MAX))
        .push(" OFFSET ")
        .push_bind(i64::try_from(query.offset()).unwrap_or(i64::MAX));

        let items = qb
            .build_query_as::<R>()
            .fetch_all(&self.pool)
            .await
            .map_err(implementation_error)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(ListPage { items, total })
    }
}

#[async_trait]
impl DbService for PostgresDb {
    #[tracing::instrument(skip(self))]
    async fn changelogs_upsert(&self, instance: Changelog) -> Result<Changelog> {
        sqlx::query_as::<_, ChangelogRow>(
            r#"
            INSERT INTO changelog
            (
                changelog_id,
                issue_id,
                event,
                changes,
                created_at,
                raw
            )
            VALUES
            (
                $1,
                $2,
                $3,
                $4,
                $5,
                $6
            )
            ON CONFLICT (changelog_id) DO UPDATE
            SET issue_id = EXCLUDED.issue_id,
                event = EXCLUDED.event,
                changes = EXCLUDED.changes,
                created_at = EXCLUDED.created_at,
                raw = EXCLUDED.raw
            RETURNING *
            ;
        "#,
        )
        .bind(instance.changelog_id)
        .bind(instance.issue_id as i64)
        .bind(instance.event)
        .bind(instance.changes)
        .bind(instance.created_at)
        .bind(instance.raw)
        .fetch_one(&self.pool)
        .await
        .map(Into::into)
        .map_err(|e| DatabaseError::store_write(Collection::Changelogs, e))
    }

    #[tracing::instrument(skip_all, fields(count = instances.len()))]
    async fn changelogs_upsert_many(&self, instances: Vec<Changelog>) -> Result<u64> {
        let instances = dedupe_last_by_key(instances, |c| c.changelog_id.clone());
        let mut written = 0;

        for chunk in instances.chunks(BULK_CHUNK_SIZE) {
            let mut qb: QueryBuilder<Postgres> = QueryBuilder::new(
                "INSERT INTO changelog (changelog_id, issue_id, event, changes, created_at, raw) ",
            );
            qb.push_values(chunk, |mut b, c| {
                b.push_bind(c.changelog_id.clone())
                    .push_bind(c.issue_id as i64)
                    .push_bind(c.event.clone())
                    .push_bind(c.changes.clone())
                    .push_bind(c.created_at)
                    .push_bind(c.raw.clone());
            });
            qb.push(
                r#"
                ON CONFLICT (changelog_id) DO UPDATE
                SET issue_id = EXCLUDED.issue_id,
                    event = EXCLUDED.event,
                    changes = EXCLUDED.changes,
                    created_at = EXCLUDED.created_at,
                    raw = EXCLUDED.raw
            "#,
            );

            written += qb
                .build()
                .execute(&self.pool)
                .await
                .map_err(|e| DatabaseError::store_write(Collection::Changelogs, e))?
                .rows_affected();
        }

        Ok(written)
    }

    #[tracing::instrument(skip(self))]
    async fn changelogs_get(&self, changelog_id: &str) -> Result<Option<Changelog>> {
        sqlx::query_as::<_, ChangelogRow>(
            r#"
                SELECT *
                FROM changelog
                WHERE changelog_id = $1
            "#,
        )
        .bind(changelog_id)
        .fetch_optional(&self.pool)
        .await
        .map(|x| x.map(Into::into))
        .map_err(implementation_error)
    }

    #[tracing::instrument(skip(self))]
    async fn changelogs_list(&self, query: &ListQuery) -> Result<ListPage<Changelog>> {
        self.list::<ChangelogRow, _>(&CHANGELOG_LIST, query).await
    }

    #[tracing::instrument(skip(self))]
    async fn changelogs_count(&self) -> Result<u64> {
        self.count(CHANGELOG_LIST.table).await
    }

    #[tracing::instrument(skip(self))]
    async fn commits_upsert(&self, instance: Commit) -> Result<Commit> {
        sqlx::query_as::<_, CommitRow>(
            r#"
            INSERT INTO git_commit
            (
                commit_id,
                repo_id,
                author,
                message,
                date,
                raw
            )
            VALUES
            (
                $1,
                $2,
                $3,
                $4,
                $5,
                $6
            )
            ON CONFLICT (commit_id) DO UPDATE
            SET repo_id = EXCLUDED.repo_id,
                author = EXCLUDED.author,
                message = EXCLUDED.message,
                date = EXCLUDED.date,
                raw = EXCLUDED.raw
            RETURNING *
            ;
        "#,
        )
        .bind(instance.commit_id)
        .bind(instance.repo_id as i64)
        .bind(instance.author.map(Json))
        .bind(instance.message)
        .bind(instance.date)
        .bind(instance.raw)
        .fetch_one(&self.pool)
        .await
        .map(Into::into)
        .map_err(|e| DatabaseError::store_write(Collection::Commits, e))
    }

    #[tracing::instrument(skip_all, fields(count = instances.len()))]
    async fn commits_upsert_many(&self, instances: Vec<Commit>) -> Result<u64> {
        let instances = dedupe_last_by_key(instances, |c| c.commit_id.clone());
        let mut written = 0;

        for chunk in instances.chunks(BULK_CHUNK_SIZE) {
            let mut qb: QueryBuilder<Postgres> = QueryBuilder::new(
                "INSERT INTO git_commit (commit_id, repo_id, author, message, date, raw) ",
            );
            qb.push_values(chunk, |mut b, c| {
                b.push_bind(c.commit_id.clone())
                    .push_bind(c.repo_id as i64)
                    .push_bind(c.author.clone().map(Json))
                    .push_bind(c.message.clone())
                    .push_bind(c.date)
                    .push_bind(c.raw.clone());
            });
            qb.push(
                r#"
                ON CONFLICT (commit_id) DO UPDATE
                SET repo_id = EXCLUDED.repo_id,
                    author = EXCLUDED.author,
                    message = EXCLUDED.message,
                    date = EXCLUDED.date,
                    raw = EXCLUDED.raw
            "#,
            );

            written += qb
                .build()
                .execute(&self.pool)
                .await
                .map_err(|e| DatabaseError::store_write(Collection::Commits, e))?
                .rows_affected();
        }

        Ok(written)
    }

    #[tracing::instrument(skip(self))]
    async fn commits_get(&self, commit_id: &str) -> Result<Option<Commit>> {
        sqlx::query_as::<_, CommitRow>(
            r#"
                SELECT *
                FROM git_commit
                WHERE commit_id = $1
            "#,
        )
        .bind(commit_id)
        .fetch_optional(&self.pool)
        .await
        .map(|x| x.map(Into::into))
        .map_err(implementation_error)
    }

    #[tracing::instrument(skip(self))]
    async fn commits_list(&self, query: &ListQuery) -> Result<ListPage<Commit>> {
        self.list::<CommitRow, _>(&COMMIT_LIST, query).await
    }

    #[tracing::instrument(skip(self))]
    async fn commits_count(&self) -> Result<u64> {
        self.count(COMMIT_LIST.table).await
    }

    #[tracing::instrument(skip(self))]
    async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1;")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(implementation_error)
    }

    #[tracing::instrument(skip(self, instance), fields(user_id = instance.user_id))]
    async fn integrations_upsert(&self, instance: Integration) -> Result<Integration> {
        sqlx::query_as::<_, IntegrationRow>(
            r#"
            INSERT INTO integration
            (
                provider,
                user_id,
                access_token,
                refresh_token,
                profile,
                connected_at,
                last_synced,
                sync_type
            )
            VALUES
            (
                $1,
                $2,
                $3,
                $4,
                $5,
                $6,
                $7,
                $8
            )
            ON CONFLICT (provider, user_id) DO UPDATE
            SET access_token = EXCLUDED.access_token,
                refresh_token = EXCLUDED.refresh_token,
                profile = EXCLUDED.profile,
                connected_at = EXCLUDED.connected_at,
                last_synced = EXCLUDED.last_synced,
                sync_type = EXCLUDED.sync_type
            RETURNING *
            ;
        "#,
        )
        .bind(instance.provider)
        .bind(instance.user_id as i64)
        .bind(instance.access_token)
        .bind(instance.refresh_token)
        .bind(instance.profile)
        .bind(instance.connected_at)
        .bind(instance.last_synced)
        .bind(instance.sync_type.map(|s| s.to_str()))
        .fetch_one(&self.pool)
        .await
        .map(Into::into)
        .map_err(|e| DatabaseError::store_write(INTEGRATIONS_STORE, e))
    }

    #[tracing::instrument(skip(self))]
    async fn integrations_get(&self, user_id: u64) -> Result<Option<Integration>> {
        sqlx::query_as::<_, IntegrationRow>(
            r#"
                SELECT *
                FROM integration
                WHERE user_id = $1
            "#,
        )
        .bind(user_id as i64)
        .fetch_optional(&self.pool)
        .await
        .map(|x| x.map(Into::into))
        .map_err(implementation_error)
    }

    #[tracing::instrument(skip(self))]
    async fn integrations_set_sync_status(
        &self,
        user_id: u64,
        status: SyncStatus,
    ) -> Result<Integration> {
        sqlx::query_as::<_, IntegrationRow>(
            r#"
                UPDATE integration
                SET last_synced = $1,
                sync_type = $2
                WHERE user_id = $3
                RETURNING *
            "#,
        )
        .bind(status.last_synced)
        .bind(status.sync_type.to_str())
        .bind(user_id as i64)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DatabaseError::store_write(INTEGRATIONS_STORE, e))?
        .map(Into::into)
        .ok_or(DatabaseError::UnknownIntegration(user_id))
    }

    #[tracing::instrument(skip(self))]
    async fn integrations_delete(&self, user_id: u64) -> Result<bool> {
        sqlx::query(
            r#"
            DELETE FROM integration
            WHERE user_id = $1
        "#,
        )
        .bind(user_id as i64)
        .execute(&self.pool)
        .await
        .map(|x| x.rows_affected() > 0)
        .map_err(implementation_error)
    }

    #[tracing::instrument(skip(self))]
    async fn integrations_all(&self) -> Result<Vec<Integration>> {
        sqlx::query_as::<_, IntegrationRow>(
            r#"
                SELECT *
                FROM integration
                ORDER BY user_id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map(|x| x.into_iter().map(Into::into).collect())
        .map_err(implementation_error)
    }

    #[tracing::instrument(skip(self))]
    async fn issues_upsert(&self, instance: Issue) -> Result<Issue> {
        sqlx::query_as::<_, IssueRow>(
            r#"
            INSERT INTO issue
            (
                issue_id,
                repo_id,
                number,
                title,
                author,
                state,
                created_at,
                closed_at,
                raw
            )
            VALUES
            (
                $1,
                $2,
                $3,
                $4,
                $5,
                $6,
                $7,
                $8,
                $9
            )
            ON CONFLICT (issue_id) DO UPDATE
            SET repo_id = EXCLUDED.repo_id,
                number = EXCLUDED.number,
                title = EXCLUDED.title,
                author = EXCLUDED.author,
                state = EXCLUDED.state,
                created_at = EXCLUDED.created_at,
                closed_at = EXCLUDED.closed_at,
                raw = EXCLUDED.raw
            RETURNING *
            ;
        "#,
        )
        .bind(instance.issue_id as i64)
        .bind(instance.repo_id as i64)
        .bind(instance.number as i64)
        .bind(instance.title)
        .bind(instance.user.map(Json))
        .bind(instance.state)
        .bind(instance.created_at)
        .bind(instance.closed_at)
        .bind(instance.raw)
        .fetch_one(&self.pool)
        .await
        .map(Into::into)
        .map_err(|e| DatabaseError::store_write(Collection::Issues, e))
    }

    #[tracing::instrument(skip(self))]
    async fn issues_get(&self, issue_id: u64) -> Result<Option<Issue>> {
        sqlx::query_as::<_, IssueRow>(
            r#"
                SELECT *
                FROM issue
                WHERE issue_id = $1
            "#,
        )
        .bind(issue_id as i64)
        .fetch_optional(&self.pool)
        .await
        .map(|x| x.map(Into::into))
        .map_err(implementation_error)
    }

    #[tracing::instrument(skip(self))]
    async fn issues_list(&self, query: &ListQuery) -> Result<ListPage<Issue>> {
        self.list::<IssueRow, _>(&ISSUE_LIST, query).await
    }

    #[tracing::instrument(skip(self))]
    async fn issues_count(&self) -> Result<u64> {
        self.count(ISSUE_LIST.table).await
    }

    #[tracing::instrument(skip(self))]
    async fn organizations_upsert(&self, instance: Organization) -> Result<Organization> {
        sqlx::query_as::<_, OrganizationRow>(
            r#"
            INSERT INTO organization
            (
                org_id,
                name,
                description,
                url,
                avatar_url,
                raw
            )
            VALUES
            (
                $1,
                $2,
                $3,
                $4,
                $5,
                $6
            )
            ON CONFLICT (org_id) DO UPDATE
            SET name = EXCLUDED.name,
                description = EXCLUDED.description,
                url = EXCLUDED.url,
                avatar_url = EXCLUDED.avatar_url,
                raw = EXCLUDED.raw
            RETURNING *
            ;
        "#,
        )
        .bind(instance.org_id as i64)
        .bind(instance.name)
        .bind(instance.description)
        .bind(instance.url)
        .bind(instance.avatar_url)
        .bind(instance.raw)
        .fetch_one(&self.pool)
        .await
        .map(Into::into)
        .map_err(|e| DatabaseError::store_write(Collection::Organizations, e))
    }

    #[tracing::instrument(skip(self))]
    async fn organizations_get(&self, org_id: u64) -> Result<Option<Organization>> {
        sqlx::query_as::<_, OrganizationRow>(
            r#"
                SELECT *
                FROM organization
                WHERE org_id = $1
            "#,
        )
        .bind(org_id as i64)
        .fetch_optional(&self.pool)
        .await
        .map(|x| x.map(Into::into))
        .map_err(implementation_error)
    }

    #[tracing::instrument(skip(self))]
    async fn organizations_list(&self, query: &ListQuery) -> Result<ListPage<Organization>> {
        self.list::<OrganizationRow, _>(&ORGANIZATION_LIST, query)
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn organizations_count(&self) -> Result<u64> {
        self.count(ORGANIZATION_LIST.table).await
    }

    #[tracing::instrument(skip(self))]
    async fn pull_requests_upsert(&self, instance: PullRequest) -> Result<PullRequest> {
        sqlx::query_as::<_, PullRequestRow>(
            r#"
            INSERT INTO pull_request
            (
                pull_id,
                repo_id,
                number,
                title,
                author,
                state,
                created_at,
                merged_at,
                raw
            )
            VALUES
            (
                $1,
                $2,
                $3,
                $4,
                $5,
                $6,
                $7,
                $8,
                $9
            )
            ON CONFLICT (pull_id) DO UPDATE
            SET repo_id = EXCLUDED.repo_id,
                number = EXCLUDED.number,
                title = EXCLUDED.title,
                author = EXCLUDED.author,
                state = EXCLUDED.state,
                created_at = EXCLUDED.created_at,
                merged_at = EXCLUDED.merged_at,
                raw = EXCLUDED.raw
            RETURNING *
            ;
        "#,
        )
        .bind(instance.pull_id as i64)
        .bind(instance.repo_id as i64)
        .bind(instance.number as i64)
        .bind(instance.title)
        .bind(instance.user.map(Json))
        .bind(instance.state)
        .bind(instance.created_at)
        .bind(instance.merged_at)
        .bind(instance.raw)
        .fetch_one(&self.pool)
        .await
        .map(Into::into)
        .map_err(|e| DatabaseError::store_write(Collection::Pulls, e))
    }

    #[tracing::instrument(skip(self))]
    async fn pull_requests_get(&self, pull_id: u64) -> Result<Option<PullRequest>> {
        sqlx::query_as::<_, PullRequestRow>(
            r#"
                SELECT *
                FROM pull_request
                WHERE pull_id = $1
            "#,
        )
        .bind(pull_id as i64)
        .fetch_optional(&self.pool)
        .await
        .map(|x| x.map(Into::into))
        .map_err(implementation_error)
    }

    #[tracing::instrument(skip(self))]
    async fn pull_requests_list(&self, query: &ListQuery) -> Result<ListPage<PullRequest>> {
        self.list::<PullRequestRow, _>(&PULL_REQUEST_LIST, query)
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn pull_requests_count(&self) -> Result<u64> {
        self.count(PULL_REQUEST_LIST.table).await
    }

    #[tracing::instrument(skip(self))]
    async fn repositories_upsert(&self, instance: Repository) -> Result<Repository> {
        sqlx::query_as::<_, RepositoryRow>(
            r#"
            INSERT INTO repository
            (
                repo_id,
                org_id,
                name,
                full_name,
                description,
                url,
                raw
            )
            VALUES
            (
                $1,
                $2,
                $3,
                $4,
                $5,
                $6,
                $7
            )
            ON CONFLICT (repo_id) DO UPDATE
            SET org_id = EXCLUDED.org_id,
                name = EXCLUDED.name,
                full_name = EXCLUDED.full_name,
                description = EXCLUDED.description,
                url = EXCLUDED.url,
                raw = EXCLUDED.raw
            RETURNING *
            ;
        "#,
        )
        .bind(instance.repo_id as i64)
        .bind(instance.org_id as i64)
        .bind(instance.name)
        .bind(instance.full_name)
        .bind(instance.description)
        .bind(instance.url)
        .bind(instance.raw)
        .fetch_one(&self.pool)
        .await
        .map(Into::into)
        .map_err(|e| DatabaseError::store_write(Collection::Repositories, e))
    }

    #[tracing::instrument(skip(self))]
    async fn repositories_get(&self, repo_id: u64) -> Result<Option<Repository>> {
        sqlx::query_as::<_, RepositoryRow>(
            r#"
                SELECT *
                FROM repository
                WHERE repo_id = $1
            "#,
        )
        .bind(repo_id as i64)
        .fetch_optional(&self.pool)
        .await
        .map(|x| x.map(Into::into))
        .map_err(implementation_error)
    }

    #[tracing::instrument(skip(self))]
    async fn repositories_list(&self, query: &ListQuery) -> Result<ListPage<Repository>> {
        self.list::<RepositoryRow, _>(&REPOSITORY_LIST, query).await
    }

    #[tracing::instrument(skip(self))]
    async fn repositories_count(&self) -> Result<u64> {
        self.count(REPOSITORY_LIST.table).await
    }

    #[tracing::instrument(skip(self))]
    async fn users_upsert(&self, instance: UserProfile) -> Result<UserProfile> {
        sqlx::query_as::<_, UserProfileRow>(
            r#"
            INSERT INTO github_user
            (
                user_id,
                login,
                name,
                avatar_url,
                email,
                raw
            )
            VALUES
            (
                $1,
                $2,
                $3,
                $4,
                $5,
                $6
            )
            ON CONFLICT (user_id) DO UPDATE
            SET login = EXCLUDED.login,
                name = EXCLUDED.name,
                avatar_url = EXCLUDED.avatar_url,
                email = EXCLUDED.email,
                raw = EXCLUDED.raw
            RETURNING *
            ;
        "#,
        )
        .bind(instance.user_id as i64)
        .bind(instance.login)
        .bind(instance.name)
        .bind(instance.avatar_url)
        .bind(instance.email)
        .bind(instance.raw)
        .fetch_one(&self.pool)
        .await
        .map(Into::into)
        .map_err(|e| DatabaseError::store_write(Collection::Users, e))
    }

    #[tracing::instrument(skip(self))]
    async fn users_get(&self, user_id: u64) -> Result<Option<UserProfile>> {
        sqlx::query_as::<_, UserProfileRow>(
            r#"
                SELECT *
                FROM github_user
                WHERE user_id = $1
            "#,
        )
        .bind(user_id as i64)
        .fetch_optional(&self.pool)
        .await
        .map(|x| x.map(Into::into))
        .map_err(implementation_error)
    }

    #[tracing::instrument(skip(self))]
    async fn users_list(&self, query: &ListQuery) -> Result<ListPage<UserProfile>> {
        self.list::<UserProfileRow, _>(&USER_LIST, query).await
    }

    #[tracing::instrument(skip(self))]
    async fn users_count(&self) -> Result<u64> {
        self.count(USER_LIST.table).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_pattern() {
        assert_eq!(like_pattern("foo"), "%foo%");
        assert_eq!(like_pattern("50%_off"), "%50\\%\\_off%");
    }

    #[test]
    fn test_order_column() {
        assert_eq!(COMMIT_LIST.order_column(None), "date");
        assert_eq!(COMMIT_LIST.order_column(Some("commitId")), "commit_id");
        assert_eq!(REPOSITORY_LIST.order_column(Some("fullName")), "full_name");
        assert_eq!(COMMIT_LIST.order_column(Some("date; DROP TABLE git_commit")), "date");
    }
}
