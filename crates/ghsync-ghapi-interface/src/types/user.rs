use serde::{Deserialize, Serialize};

/// GitHub User.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhUser {
    /// ID.
    pub id: u64,
    /// Username.
    pub login: String,
    /// Display name, only on full user payloads.
    #[serde(default)]
    pub name: Option<String>,
    /// Public email, only on full user payloads.
    #[serde(default)]
    pub email: Option<String>,
    /// Avatar URL.
    #[serde(default)]
    pub avatar_url: Option<String>,
}
