use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncTypeError {
    /// Unknown sync type.
    #[error("Unknown sync type: {}", sync_type)]
    UnknownSyncType { sync_type: String },
}

/// Kind of synchronization recorded on an integration.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Copy, Clone, Default)]
#[serde(rename_all = "snake_case")]
pub enum SyncType {
    /// Whole account tree.
    #[default]
    Full,
}

impl SyncType {
    pub fn to_str(self) -> &'static str {
        self.into()
    }
}

impl Display for SyncType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for SyncType {
    type Err = SyncTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl TryFrom<&str> for SyncType {
    type Error = SyncTypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "full" => Ok(Self::Full),
            e => Err(SyncTypeError::UnknownSyncType {
                sync_type: e.to_string(),
            }),
        }
    }
}

impl From<SyncType> for &'static str {
    fn from(sync_type: SyncType) -> Self {
        match sync_type {
            SyncType::Full => "full",
        }
    }
}
