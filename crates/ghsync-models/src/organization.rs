use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub org_id: u64,
    /// Organization login.
    pub name: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub avatar_url: Option<String>,
    pub raw: serde_json::Value,
}
