//! Paginated collection of GitHub list endpoints.

use ghsync_ghapi_interface::{routes, ApiError, ApiService, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::Semaphore;
use tracing::debug;

/// Walks `page=1,2,3,...` of a list route until the collection is exhausted.
///
/// A page is the last one when the `Link` header says so (if present and
/// followed), otherwise when it holds fewer items than the page size.
pub struct PaginatedCollector<'a> {
    api_service: &'a dyn ApiService,
    credential: &'a str,
    permits: &'a Semaphore,
    page_size: u64,
    follow_link_header: bool,
}

impl<'a> PaginatedCollector<'a> {
    pub fn new(
        api_service: &'a dyn ApiService,
        credential: &'a str,
        permits: &'a Semaphore,
        page_size: u64,
    ) -> Self {
        Self {
            api_service,
            credential,
            permits,
            page_size: page_size.max(1),
            follow_link_header: true,
        }
    }

    pub fn follow_link_header(mut self, value: bool) -> Self {
        self.follow_link_header = value;
        self
    }

    /// Fetch every page of `route` and concatenate their items.
    #[tracing::instrument(skip(self), fields(page_size = self.page_size))]
    pub async fn collect_all(&self, route: &str) -> Result<Vec<Value>> {
        let mut items = Vec::new();
        let mut page_number = 1;

        loop {
            let url = routes::paginated(route, self.page_size, page_number);
            let page = {
                let _permit = self.permits.acquire().await.map_err(|e| {
                    ApiError::ImplementationError {
                        source: Box::new(e),
                    }
                })?;
                self.api_service.fetch(&url, self.credential).await?
            };

            let has_next_page = page.has_next_page;
            let page_items = page.into_items(&url)?;
            let count = page_items.len() as u64;
            items.extend(page_items);

            let exhausted = match has_next_page {
                Some(next) if self.follow_link_header => !next,
                _ => count < self.page_size,
            };

            if exhausted {
                debug!(
                    route = route,
                    pages = page_number,
                    items = items.len(),
                    message = "Collection exhausted"
                );
                return Ok(items);
            }

            page_number += 1;
        }
    }

    /// Same as [`Self::collect_all`], decoding each item while keeping its raw payload.
    pub async fn collect_as<T: DeserializeOwned>(&self, route: &str) -> Result<Vec<(T, Value)>> {
        self.collect_all(route)
            .await?
            .into_iter()
            .map(|raw| {
                serde_json::from_value(raw.clone())
                    .map(|item| (item, raw))
                    .map_err(|e| ApiError::invalid_payload(route, e))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use ghsync_ghapi_interface::{types::GhPage, MockApiService};
    use mockall::predicate;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn items(range: std::ops::Range<u64>) -> Value {
        Value::Array(range.map(|id| json!({ "id": id })).collect())
    }

    #[tokio::test]
    async fn stops_on_short_page() {
        let mut api = MockApiService::new();
        for (page, body) in [(1, items(0..100)), (2, items(100..200)), (3, items(200..250))] {
            api.expect_fetch()
                .with(
                    predicate::eq(format!("/user/orgs?per_page=100&page={page}")),
                    predicate::eq("token"),
                )
                .times(1)
                .return_once(move |_, _| Ok(GhPage::new(body)));
        }

        let permits = Semaphore::new(1);
        let collected = PaginatedCollector::new(&api, "token", &permits, 100)
            .collect_all("/user/orgs")
            .await
            .unwrap();

        assert_eq!(collected.len(), 250);
        assert_eq!(collected[249], json!({"id": 249}));
    }

    #[tokio::test]
    async fn fetches_trailing_empty_page() {
        let mut api = MockApiService::new();
        for (page, body) in [(1, items(0..100)), (2, items(100..200)), (3, items(0..0))] {
            api.expect_fetch()
                .with(
                    predicate::eq(format!("/user/orgs?per_page=100&page={page}")),
                    predicate::always(),
                )
                .times(1)
                .return_once(move |_, _| Ok(GhPage::new(body)));
        }

        let permits = Semaphore::new(1);
        let collected = PaginatedCollector::new(&api, "token", &permits, 100)
            .collect_all("/user/orgs")
            .await
            .unwrap();

        assert_eq!(collected.len(), 200);
    }

    #[tokio::test]
    async fn link_header_ends_collection() {
        let mut api = MockApiService::new();
        api.expect_fetch()
            .with(
                predicate::eq("/user/orgs?per_page=2&page=1"),
                predicate::always(),
            )
            .times(1)
            .return_once(|_, _| Ok(GhPage::new(items(0..2)).with_next_page(false)));

        let permits = Semaphore::new(1);
        let collected = PaginatedCollector::new(&api, "token", &permits, 2)
            .collect_all("/user/orgs")
            .await
            .unwrap();

        assert_eq!(collected.len(), 2);
    }

    #[tokio::test]
    async fn link_header_ignored_when_disabled() {
        let mut api = MockApiService::new();
        api.expect_fetch()
            .with(
                predicate::eq("/user/orgs?per_page=2&page=1"),
                predicate::always(),
            )
            .times(1)
            .return_once(|_, _| Ok(GhPage::new(items(0..2)).with_next_page(false)));
        api.expect_fetch()
            .with(
                predicate::eq("/user/orgs?per_page=2&page=2"),
                predicate::always(),
            )
            .times(1)
            .return_once(|_, _| Ok(GhPage::new(items(0..0))));

        let permits = Semaphore::new(1);
        let collected = PaginatedCollector::new(&api, "token", &permits, 2)
            .follow_link_header(false)
            .collect_all("/user/orgs")
            .await
            .unwrap();

        assert_eq!(collected.len(), 2);
    }

    #[tokio::test]
    async fn rejects_non_array_page() {
        let mut api = MockApiService::new();
        api.expect_fetch()
            .times(1)
            .return_once(|_, _| Ok(GhPage::new(json!({"message": "Moved"}))));

        let permits = Semaphore::new(1);
        let result = PaginatedCollector::new(&api, "token", &permits, 100)
            .collect_all("/user/orgs")
            .await;

        assert!(matches!(result, Err(ApiError::InvalidPayload { .. })));
    }

    #[tokio::test]
    async fn propagates_fetch_error() {
        let mut api = MockApiService::new();
        api.expect_fetch().times(1).return_once(|url, _| {
            Err(ApiError::RemoteFetchError {
                url: url.into(),
                status: 502,
                body: String::new(),
            })
        });

        let permits = Semaphore::new(1);
        let result = PaginatedCollector::new(&api, "token", &permits, 100)
            .collect_all("/user/orgs")
            .await;

        assert!(matches!(
            result,
            Err(ApiError::RemoteFetchError { status: 502, .. })
        ));
    }
}
