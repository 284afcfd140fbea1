use async_trait::async_trait;
use ghsync_models::Collection;
use serde::Serialize;
use shaku::{Component, Interface};

use crate::{CoreContext, Result};

/// Stored record count of one collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CollectionCount {
    pub collection: Collection,
    pub count: u64,
}

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait CountCollectionsInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>) -> Result<Vec<CollectionCount>>;
}

#[derive(Component)]
#[shaku(interface = CountCollectionsInterface)]
pub(crate) struct CountCollections;

#[async_trait]
impl CountCollectionsInterface for CountCollections {
    #[tracing::instrument(skip(self, ctx))]
    async fn run<'a>(&self, ctx: &CoreContext<'a>) -> Result<Vec<CollectionCount>> {
        let mut counts = Vec::with_capacity(Collection::ALL.len());
        for collection in Collection::ALL {
            counts.push(CollectionCount {
                collection,
                count: ctx.db_service.collection_count(collection).await?,
            });
        }

        Ok(counts)
    }
}
