use serde::{Deserialize, Serialize};

/// Compact view of a GitHub account attached to a commit, pull request or issue.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Actor {
    pub id: u64,
    pub login: String,
    pub avatar_url: Option<String>,
}
