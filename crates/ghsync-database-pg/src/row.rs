use ghsync_models::{
    Actor, Changelog, Commit, Integration, Issue, Organization, PullRequest, Repository,
    UserProfile,
};
use sqlx::{postgres::PgRow, types::Json, FromRow, Row};

use crate::fields::SyncTypeDecode;

pub(crate) struct ChangelogRow(Changelog);
pub(crate) struct CommitRow(Commit);
pub(crate) struct IntegrationRow(Integration);
pub(crate) struct IssueRow(Issue);
pub(crate) struct OrganizationRow(Organization);
pub(crate) struct PullRequestRow(PullRequest);
pub(crate) struct RepositoryRow(Repository);
pub(crate) struct UserProfileRow(UserProfile);

macro_rules! impl_from_row_wrapper {
    ($($row:ident => $model:ident),* $(,)?) => {
        $(
            impl From<$row> for $model {
                fn from(r: $row) -> Self {
                    r.0
                }
            }
        )*
    };
}

impl_from_row_wrapper!(
    ChangelogRow => Changelog,
    CommitRow => Commit,
    IntegrationRow => Integration,
    IssueRow => Issue,
    OrganizationRow => Organization,
    PullRequestRow => PullRequest,
    RepositoryRow => Repository,
    UserProfileRow => UserProfile,
);

fn get_actor(row: &PgRow, column: &str) -> core::result::Result<Option<Actor>, sqlx::Error> {
    Ok(row
        .try_get::<Option<Json<Actor>>, _>(column)?
        .map(|Json(actor)| actor))
}

impl<'r> FromRow<'r, PgRow> for ChangelogRow {
    fn from_row(row: &'r PgRow) -> core::result::Result<Self, sqlx::Error> {
        Ok(Self(Changelog {
            changelog_id: row.try_get("changelog_id")?,
            issue_id: row.try_get::<i64, _>("issue_id")? as u64,
            event: row.try_get("event")?,
            changes: row.try_get("changes")?,
            created_at: row.try_get("created_at")?,
            raw: row.try_get("raw")?,
        }))
    }
}

impl<'r> FromRow<'r, PgRow> for CommitRow {
    fn from_row(row: &'r PgRow) -> core::result::Result<Self, sqlx::Error> {
        Ok(Self(Commit {
            commit_id: row.try_get("commit_id")?,
            repo_id: row.try_get::<i64, _>("repo_id")? as u64,
            author: get_actor(row, "author")?,
            message: row.try_get("message")?,
            date: row.try_get("date")?,
            raw: row.try_get("raw")?,
        }))
    }
}

impl<'r> FromRow<'r, PgRow> for IntegrationRow {
    fn from_row(row: &'r PgRow) -> core::result::Result<Self, sqlx::Error> {
        Ok(Self(Integration {
            provider: row.try_get("provider")?,
            user_id: row.try_get::<i64, _>("user_id")? as u64,
            access_token: row.try_get("access_token")?,
            refresh_token: row.try_get("refresh_token")?,
            profile: row.try_get("profile")?,
            connected_at: row.try_get("connected_at")?,
            last_synced: row.try_get("last_synced")?,
            sync_type: row
                .try_get::<Option<SyncTypeDecode>, _>("sync_type")?
                .map(|s| *s),
        }))
    }
}

impl<'r> FromRow<'r, PgRow> for IssueRow {
    fn from_row(row: &'r PgRow) -> core::result::Result<Self, sqlx::Error> {
        Ok(Self(Issue {
            issue_id: row.try_get::<i64, _>("issue_id")? as u64,
            repo_id: row.try_get::<i64, _>("repo_id")? as u64,
            number: row.try_get::<i64, _>("number")? as u64,
            title: row.try_get("title")?,
            user: get_actor(row, "author")?,
            state: row.try_get("state")?,
            created_at: row.try_get("created_at")?,
            closed_at: row.try_get("closed_at")?,
            raw: row.try_get("raw")?,
        }))
    }
}

impl<'r> FromRow<'r, PgRow> for OrganizationRow {
    fn from_row(row: &'r PgRow) -> core::result::Result<Self, sqlx::Error> {
        Ok(Self(Organization {
            org_id: row.try_get::<i64, _>("org_id")? as u64,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            url: row.try_get("url")?,
            avatar_url: row.try_get("avatar_url")?,
            raw: row.try_get("raw")?,
        }))
    }
}

impl<'r> FromRow<'r, PgRow> for PullRequestRow {
    fn from_row(row: &'r PgRow) -> core::result::Result<Self, sqlx::Error> {
        Ok(Self(PullRequest {
            pull_id: row.try_get::<i64, _>("pull_id")? as u64,
            repo_id: row.try_get::<i64, _>("repo_id")? as u64,
            number: row.try_get::<i64, _>("number")? as u64,
            title: row.try_get("title")?,
            user: get_actor(row, "author")?,
            state: row.try_get("state")?,
            created_at: row.try_get("created_at")?,
            merged_at: row.try_get("merged_at")?,
            raw: row.try_get("raw")?,
        }))
    }
}

impl<'r> FromRow<'r, PgRow> for RepositoryRow {
    fn from_row(row: &'r PgRow) -> core::result::Result<Self, sqlx::Error> {
        Ok(Self(Repository {
            repo_id: row.try_get::<i64, _>("repo_id")? as u64,
            org_id: row.try_get::<i64, _>("org_id")? as u64,
            name: row.try_get("name")?,
            full_name: row.try_get("full_name")?,
            description: row.try_get("description")?,
            url: row.try_get("url")?,
            raw: row.try_get("raw")?,
        }))
    }
}

impl<'r> FromRow<'r, PgRow> for UserProfileRow {
    fn from_row(row: &'r PgRow) -> core::result::Result<Self, sqlx::Error> {
        Ok(Self(UserProfile {
            user_id: row.try_get::<i64, _>("user_id")? as u64,
            login: row.try_get("login")?,
            name: row.try_get("name")?,
            avatar_url: row.try_get("avatar_url")?,
            email: row.try_get("email")?,
            raw: row.try_get("raw")?,
        }))
    }
}
