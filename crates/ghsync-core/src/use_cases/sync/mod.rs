pub(crate) mod get_sync_status;
mod session;
pub(crate) mod sync_all_data;
pub(crate) mod sync_issue;
pub(crate) mod sync_organization;
pub(crate) mod sync_repository;

pub use get_sync_status::GetSyncStatusInterface;
pub use session::{SyncReport, SyncSession, SyncStats};
pub use sync_all_data::SyncAllDataInterface;
pub use sync_issue::SyncIssueInterface;
pub use sync_organization::SyncOrganizationInterface;
pub use sync_repository::SyncRepositoryInterface;

#[cfg(any(test, feature = "testkit"))]
pub use self::{
    get_sync_status::MockGetSyncStatusInterface, sync_all_data::MockSyncAllDataInterface,
    sync_issue::MockSyncIssueInterface, sync_organization::MockSyncOrganizationInterface,
    sync_repository::MockSyncRepositoryInterface,
};
