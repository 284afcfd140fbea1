pub(crate) mod count_collections;

pub use count_collections::{CollectionCount, CountCollectionsInterface};

#[cfg(any(test, feature = "testkit"))]
pub use count_collections::MockCountCollectionsInterface;
