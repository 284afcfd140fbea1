mod actor;
mod changelog;
mod commit;
mod integration;
mod issue;
mod list;
mod organization;
mod pull_request;
mod repository;
mod sync_type;
mod user_profile;

pub use actor::Actor;
pub use changelog::Changelog;
pub use commit::Commit;
pub use integration::{Integration, SyncStatus, GITHUB_PROVIDER};
pub use issue::Issue;
pub use list::{Collection, ListPage, ListQuery, SortOrder};
pub use organization::Organization;
pub use pull_request::PullRequest;
pub use repository::Repository;
pub use sync_type::{SyncType, SyncTypeError};
pub use user_profile::UserProfile;
