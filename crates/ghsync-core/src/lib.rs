//! Core module.

#![warn(clippy::all)]
#![allow(clippy::new_without_default)]

pub mod collector;
mod context;
pub mod errors;
pub mod mapping;
pub mod use_cases;

pub use context::CoreContext;
pub use errors::{DomainError, Result};
use shaku::module;
use use_cases::{
    auth::{
        connect_integration::ConnectIntegration, remove_integration::RemoveIntegration,
        resolve_access_token::ResolveAccessToken,
    },
    collections::count_collections::CountCollections,
    sync::{
        get_sync_status::GetSyncStatus, sync_all_data::SyncAllData, sync_issue::SyncIssue,
        sync_organization::SyncOrganization, sync_repository::SyncRepository,
    },
};

module! {
    pub CoreModule {
        components = [
            ConnectIntegration, CountCollections, GetSyncStatus,
            RemoveIntegration, ResolveAccessToken, SyncAllData,
            SyncIssue, SyncOrganization, SyncRepository
        ],
        providers = []
    }
}
