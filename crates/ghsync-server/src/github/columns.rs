//! Table layout hints served with the collection counts.

use ghsync_models::Collection;
use serde::Serialize;
use ColumnType::{Date, Image, String as Text, Url};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ColumnType {
    String,
    Url,
    Image,
    Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Column {
    pub field: &'static str,
    pub header_name: &'static str,
    #[serde(rename = "type")]
    pub kind: ColumnType,
    pub sortable: bool,
    pub searchable: bool,
    pub filterable: bool,
}

const fn col(field: &'static str, header_name: &'static str, kind: ColumnType) -> Column {
    Column {
        field,
        header_name,
        kind,
        sortable: false,
        searchable: false,
        filterable: false,
    }
}

impl Column {
    const fn sortable(self) -> Self {
        Self {
            sortable: true,
            ..self
        }
    }

    const fn searchable(self) -> Self {
        Self {
            searchable: true,
            ..self
        }
    }

    const fn filterable(self) -> Self {
        Self {
            filterable: true,
            ..self
        }
    }
}

const ORGANIZATIONS: &[Column] = &[
    col("orgId", "ID", Text).sortable(),
    col("name", "Name", Text).sortable().searchable(),
    col("description", "Description", Text).searchable(),
    col("url", "URL", Url),
    col("avatarUrl", "Avatar", Image),
];

const REPOSITORIES: &[Column] = &[
    col("repoId", "ID", Text).sortable(),
    col("orgId", "Org ID", Text).sortable().filterable(),
    col("name", "Name", Text).sortable().searchable(),
    col("fullName", "Full Name", Text).sortable().searchable(),
    col("description", "Description", Text).searchable(),
    col("url", "URL", Url),
];

const COMMITS: &[Column] = &[
    col("commitId", "Commit ID", Text).sortable(),
    col("repoId", "Repo ID", Text).sortable().filterable(),
    col("message", "Message", Text).searchable(),
    col("author.login", "Author", Text).searchable().filterable(),
    col("author.avatar_url", "Author Avatar", Image),
    col("date", "Date", Date).sortable(),
];

const PULLS: &[Column] = &[
    col("pullId", "PR ID", Text).sortable(),
    col("repoId", "Repo ID", Text).sortable().filterable(),
    col("title", "Title", Text).searchable(),
    col("user.login", "Author", Text).searchable(),
    col("user.avatar_url", "Author Avatar", Image),
    col("state", "State", Text).sortable().filterable(),
    col("createdAt", "Created", Date).sortable(),
    col("mergedAt", "Merged", Date).sortable(),
];

const ISSUES: &[Column] = &[
    col("issueId", "Issue ID", Text).sortable(),
    col("repoId", "Repo ID", Text).sortable().filterable(),
    col("title", "Title", Text).searchable(),
    col("user.login", "Author", Text).searchable(),
    col("user.avatar_url", "Author Avatar", Image),
    col("state", "State", Text).sortable().filterable(),
    col("createdAt", "Created", Date).sortable(),
    col("closedAt", "Closed", Date).sortable(),
];

const CHANGELOGS: &[Column] = &[
    col("changelogId", "Changelog ID", Text).sortable(),
    col("issueId", "Issue ID", Text).sortable().filterable(),
    col("event", "Event", Text).searchable(),
    col("changes.actor.login", "Actor", Text),
    col("changes.actor.avatar_url", "Actor Avatar", Image),
    col("createdAt", "Created", Date).sortable(),
];

const USERS: &[Column] = &[
    col("userId", "User ID", Text).sortable(),
    col("login", "Login", Text).sortable().searchable(),
    col("name", "Name", Text).sortable().searchable(),
    col("email", "Email", Text).searchable(),
    col("avatarUrl", "Avatar", Image),
];

pub(crate) fn columns(collection: Collection) -> &'static [Column] {
    match collection {
        Collection::Organizations => ORGANIZATIONS,
        Collection::Repositories => REPOSITORIES,
        Collection::Commits => COMMITS,
        Collection::Pulls => PULLS,
        Collection::Issues => ISSUES,
        Collection::Changelogs => CHANGELOGS,
        Collection::Users => USERS,
    }
}

pub(crate) fn is_sortable(collection: Collection, field: &str) -> bool {
    columns(collection)
        .iter()
        .any(|c| c.sortable && c.field == field)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn every_collection_has_an_id_column() {
        for collection in Collection::ALL {
            let first = columns(collection)[0];
            assert!(first.field.ends_with("Id"), "{collection}");
            assert!(first.sortable);
        }
    }

    #[test]
    fn sortable_fields() {
        assert!(is_sortable(Collection::Repositories, "fullName"));
        assert!(is_sortable(Collection::Changelogs, "createdAt"));
        assert!(!is_sortable(Collection::Commits, "author.login"));
        assert!(!is_sortable(Collection::Users, "unknown"));
    }

    #[test]
    fn serialize() {
        assert_eq!(
            serde_json::to_value(col("avatarUrl", "Avatar", Image)).unwrap(),
            json!({
                "field": "avatarUrl",
                "headerName": "Avatar",
                "type": "image",
                "sortable": false,
                "searchable": false,
                "filterable": false
            })
        );
    }
}
