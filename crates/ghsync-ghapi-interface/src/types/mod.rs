mod commit;
mod issue;
mod oauth_token;
mod organization;
mod page;
mod pull_request;
mod repository;
mod timeline_event;
mod user;

pub use commit::{GhCommit, GhCommitDetails, GhCommitUser};
pub use issue::GhIssue;
pub use oauth_token::GhOAuthToken;
pub use organization::GhOrganization;
pub use page::GhPage;
pub use pull_request::GhPullRequest;
pub use repository::GhRepository;
pub use timeline_event::GhTimelineEvent;
pub use user::GhUser;
