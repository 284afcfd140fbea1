//! Query string and envelope of the collection listings.

use std::str::FromStr;

use actix_web::HttpResponse;
use ghsync_models::{Collection, ListPage, ListQuery, SortOrder};
use serde::{Deserialize, Serialize};

use super::columns::is_sortable;

/// Upper bound of `limit`.
pub(crate) const MAX_LIMIT: u64 = 1000;
/// Upper bound of `page`, so that offsets stay within a signed 64-bit range.
pub(crate) const MAX_PAGE: u64 = i64::MAX as u64 / MAX_LIMIT;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ListParams {
    page: Option<u64>,
    limit: Option<u64>,
    search: Option<String>,
    org_id: Option<u64>,
    repo_id: Option<u64>,
    issue_id: Option<u64>,
    state: Option<String>,
    author: Option<String>,
    sort_by: Option<String>,
    sort_order: Option<String>,
}

impl ListParams {
    /// Keep the filters that apply to `collection`.
    ///
    /// Unknown sort orders and non sortable fields fall back to the
    /// collection default.
    pub fn into_query(self, collection: Collection) -> ListQuery {
        let parent_id = match collection {
            Collection::Repositories => self.org_id,
            Collection::Commits | Collection::Pulls | Collection::Issues => self.repo_id,
            Collection::Changelogs => self.issue_id,
            Collection::Organizations | Collection::Users => None,
        };

        let state = match collection {
            Collection::Pulls | Collection::Issues => {
                self.state.filter(|s| !s.trim().is_empty())
            }
            _ => None,
        };

        let author = match collection {
            Collection::Commits => self.author.filter(|a| !a.trim().is_empty()),
            _ => None,
        };

        let sort_by = self
            .sort_by
            .filter(|field| is_sortable(collection, field));

        let defaults = ListQuery::default();
        ListQuery {
            page: self.page.unwrap_or(defaults.page).clamp(1, MAX_PAGE),
            limit: self.limit.unwrap_or(defaults.limit).clamp(1, MAX_LIMIT),
            search: self.search,
            parent_id,
            state,
            author,
            sort_by,
            sort_order: self
                .sort_order
                .as_deref()
                .and_then(|s| SortOrder::from_str(s).ok()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Pagination {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub total_pages: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl Pagination {
    pub fn new(query: &ListQuery, total: u64) -> Self {
        Self {
            page: query.page,
            limit: query.limit,
            total,
            total_pages: if query.limit == 0 {
                0
            } else {
                total.div_ceil(query.limit)
            },
            has_next: query.page.saturating_mul(query.limit) < total,
            has_prev: query.page > 1,
        }
    }
}

#[derive(Debug, Serialize)]
struct ListResponse<T> {
    success: bool,
    data: Vec<T>,
    pagination: Pagination,
}

pub(crate) fn list_response<T: Serialize>(query: &ListQuery, page: ListPage<T>) -> HttpResponse {
    HttpResponse::Ok().json(ListResponse {
        success: true,
        pagination: Pagination::new(query, page.total),
        data: page.items,
    })
}
