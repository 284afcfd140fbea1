use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("Invalid driver kind: {kind}")]
    InvalidDriverKind { kind: String },
    #[error("Invalid sync status mode: {mode}")]
    InvalidStatusMode { mode: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiDriver {
    Null,
    GitHub,
}

impl FromStr for ApiDriver {
    type Err = DriverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match &s.to_lowercase()[..] {
            "null" => Ok(Self::Null),
            "github" => Ok(Self::GitHub),
            _ => Err(DriverError::InvalidDriverKind { kind: s.into() }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseDriver {
    Memory,
    Postgres,
}

impl FromStr for DatabaseDriver {
    type Err = DriverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match &s.to_lowercase()[..] {
            "memory" => Ok(Self::Memory),
            "pg" => Ok(Self::Postgres),
            _ => Err(DriverError::InvalidDriverKind { kind: s.into() }),
        }
    }
}

/// When the sync status record gets written during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncStatusMode {
    /// Overwrite the record each time a repository completes.
    #[default]
    PerRepository,
    /// Write the record once, after the whole run succeeded.
    PerRun,
}

impl FromStr for SyncStatusMode {
    type Err = DriverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match &s.to_lowercase().replace('-', "_")[..] {
            "per_repository" => Ok(Self::PerRepository),
            "per_run" => Ok(Self::PerRun),
            _ => Err(DriverError::InvalidStatusMode { mode: s.into() }),
        }
    }
}
