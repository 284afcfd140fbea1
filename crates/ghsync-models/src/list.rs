use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// Stored collections exposed to readers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Organizations,
    Repositories,
    Commits,
    Pulls,
    Issues,
    Changelogs,
    Users,
}

impl Collection {
    pub const ALL: [Collection; 7] = [
        Self::Organizations,
        Self::Repositories,
        Self::Commits,
        Self::Pulls,
        Self::Issues,
        Self::Changelogs,
        Self::Users,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Organizations => "organizations",
            Self::Repositories => "repositories",
            Self::Commits => "commits",
            Self::Pulls => "pulls",
            Self::Issues => "issues",
            Self::Changelogs => "changelogs",
            Self::Users => "users",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Organizations => "Organizations",
            Self::Repositories => "Repositories",
            Self::Commits => "Commits",
            Self::Pulls => "Pull Requests",
            Self::Issues => "Issues",
            Self::Changelogs => "Changelogs",
            Self::Users => "Users",
        }
    }
}

impl From<Collection> for &'static str {
    fn from(collection: Collection) -> Self {
        collection.key()
    }
}

impl Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match &s.to_lowercase()[..] {
            "asc" | "1" => Ok(Self::Asc),
            "desc" | "-1" => Ok(Self::Desc),
            other => Err(format!("Unknown sort order: {other}")),
        }
    }
}

/// Read-side filters shared by every collection listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// 1-based page number.
    pub page: u64,
    pub limit: u64,
    /// Case-insensitive substring matched against the collection text fields.
    pub search: Option<String>,
    /// Organization, repository or issue ID, depending on the collection.
    pub parent_id: Option<u64>,
    /// Pull request or issue state.
    pub state: Option<String>,
    /// Commit author login, matched as a case-insensitive substring.
    pub author: Option<String>,
    /// Column field to sort on. Unknown fields use the collection default.
    pub sort_by: Option<String>,
    /// Overrides the collection default direction.
    pub sort_order: Option<SortOrder>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            search: None,
            parent_id: None,
            state: None,
            author: None,
            sort_by: None,
            sort_order: None,
        }
    }
}

impl ListQuery {
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }

    /// Effective direction, given the collection default.
    pub fn order_or(&self, default: SortOrder) -> SortOrder {
        self.sort_order.unwrap_or(default)
    }

    /// Lowercased search term, if not blank.
    pub fn search_term(&self) -> Option<String> {
        normalize_term(self.search.as_deref())
    }

    /// Lowercased author filter, if not blank.
    pub fn author_term(&self) -> Option<String> {
        normalize_term(self.author.as_deref())
    }
}

fn normalize_term(term: Option<&str>) -> Option<String> {
    term.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
}

/// One page of a collection listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    pub total: u64,
}

impl<T> ListPage<T> {
    pub fn total_pages(&self, limit: u64) -> u64 {
        if limit == 0 {
            0
        } else {
            self.total.div_ceil(limit)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset() {
        let query = ListQuery {
            page: 3,
            limit: 20,
            ..Default::default()
        };
        assert_eq!(query.offset(), 40);
        assert_eq!(ListQuery { page: 0, ..Default::default() }.offset(), 0);
        assert_eq!(
            ListQuery {
                page: u64::MAX,
                limit: 10,
                ..Default::default()
            }
            .offset(),
            u64::MAX
        );
    }

    #[test]
    fn search_term() {
        let query = ListQuery {
            search: Some("  Foo ".into()),
            ..Default::default()
        };
        assert_eq!(query.search_term().as_deref(), Some("foo"));
        assert_eq!(
            ListQuery {
                search: Some("   ".into()),
                ..Default::default()
            }
            .search_term(),
            None
        );
        assert_eq!(
            ListQuery {
                author: Some(" OctoCat".into()),
                ..Default::default()
            }
            .author_term()
            .as_deref(),
            Some("octocat")
        );
    }

    #[test]
    fn total_pages() {
        let page = ListPage::<()> {
            items: vec![],
            total: 21,
        };
        assert_eq!(page.total_pages(10), 3);
        assert_eq!(page.total_pages(0), 0);
    }
}
