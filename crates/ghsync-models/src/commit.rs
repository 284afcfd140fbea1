use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::Actor;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Commit {
    /// Commit SHA.
    pub commit_id: String,
    pub repo_id: u64,
    /// GitHub account linked to the commit author, when GitHub could match one.
    pub author: Option<Actor>,
    pub message: String,
    #[serde(with = "time::serde::rfc3339::option")]
    pub date: Option<OffsetDateTime>,
    pub raw: serde_json::Value,
}
