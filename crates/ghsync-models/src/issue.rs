use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::Actor;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub issue_id: u64,
    pub repo_id: u64,
    pub number: u64,
    pub title: String,
    pub user: Option<Actor>,
    pub state: String,
    #[serde(with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub closed_at: Option<OffsetDateTime>,
    pub raw: serde_json::Value,
}
