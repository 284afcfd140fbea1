use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::GhUser;

/// Common fields of an issue timeline event.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhTimelineEvent {
    /// Event kind.
    #[serde(default)]
    pub event: Option<String>,
    /// Actor.
    #[serde(default)]
    pub actor: Option<GhUser>,
    /// Created at.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
}
