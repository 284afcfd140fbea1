use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::SyncType;

pub const GITHUB_PROVIDER: &str = "github";

/// Stored OAuth credential for one account, plus its sync bookkeeping.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Integration {
    pub provider: String,
    pub user_id: u64,
    #[serde(skip_serializing, default)]
    pub access_token: String,
    #[serde(skip_serializing, default)]
    pub refresh_token: Option<String>,
    pub profile: serde_json::Value,
    #[serde(with = "time::serde::rfc3339::option")]
    pub connected_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub last_synced: Option<OffsetDateTime>,
    pub sync_type: Option<SyncType>,
}

impl Default for Integration {
    fn default() -> Self {
        Self {
            provider: GITHUB_PROVIDER.into(),
            user_id: 0,
            access_token: String::new(),
            refresh_token: None,
            profile: serde_json::Value::Null,
            connected_at: None,
            last_synced: None,
            sync_type: None,
        }
    }
}

impl Integration {
    pub fn sync_status(&self) -> Option<SyncStatus> {
        match (self.last_synced, self.sync_type) {
            (Some(last_synced), Some(sync_type)) => Some(SyncStatus {
                last_synced,
                sync_type,
            }),
            _ => None,
        }
    }
}

/// Last completed synchronization of an account.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SyncStatus {
    #[serde(with = "time::serde::rfc3339")]
    pub last_synced: OffsetDateTime,
    pub sync_type: SyncType,
}

impl SyncStatus {
    pub fn full_now() -> Self {
        Self {
            last_synced: OffsetDateTime::now_utc(),
            sync_type: SyncType::Full,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use time::macros::datetime;

    use super::*;

    #[test]
    fn sync_status_requires_both_fields() {
        let mut integration = Integration {
            user_id: 1,
            access_token: "token".into(),
            ..Default::default()
        };
        assert_eq!(integration.sync_status(), None);

        integration.last_synced = Some(datetime!(2024-01-01 0:00 UTC));
        assert_eq!(integration.sync_status(), None);

        integration.sync_type = Some(SyncType::Full);
        assert_eq!(
            integration.sync_status(),
            Some(SyncStatus {
                last_synced: datetime!(2024-01-01 0:00 UTC),
                sync_type: SyncType::Full
            })
        );
    }

    #[test]
    fn tokens_are_not_serialized() {
        let integration = Integration {
            user_id: 1,
            access_token: "secret".into(),
            refresh_token: Some("refresh".into()),
            ..Default::default()
        };

        let value = serde_json::to_value(&integration).unwrap();
        assert_eq!(value.get("accessToken"), None);
        assert_eq!(value.get("refreshToken"), None);
        assert_eq!(value["userId"], 1);
    }
}
