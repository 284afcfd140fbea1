use serde::{Deserialize, Serialize};

/// GitHub Organization, as listed for the authenticated user.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhOrganization {
    /// ID.
    pub id: u64,
    /// Login.
    pub login: String,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// API URL.
    #[serde(default)]
    pub url: Option<String>,
    /// Avatar URL.
    #[serde(default)]
    pub avatar_url: Option<String>,
}
