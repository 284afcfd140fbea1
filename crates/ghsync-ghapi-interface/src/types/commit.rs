use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::GhUser;

/// GitHub commit, as listed on a repository.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhCommit {
    /// SHA.
    pub sha: String,
    /// Linked GitHub account, absent when the author email matches no account.
    #[serde(default)]
    pub author: Option<GhUser>,
    /// Git-level details.
    pub commit: GhCommitDetails,
}

/// Git-level commit details.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhCommitDetails {
    /// Message.
    pub message: String,
    /// Git author.
    #[serde(default)]
    pub author: Option<GhCommitUser>,
}

/// Git commit author.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhCommitUser {
    /// Name.
    pub name: String,
    /// Email.
    pub email: String,
    /// Date.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub date: Option<OffsetDateTime>,
}
