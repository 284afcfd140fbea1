use thiserror::Error;

/// Store name for integration records, which live outside the listable collections.
pub const INTEGRATIONS_STORE: &str = "integrations";

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("No integration for user ID '{0}'")]
    UnknownIntegration(u64),

    #[error("Could not write to {store}: {source}")]
    StoreWriteError {
        store: &'static str,
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    #[error(transparent)]
    ImplementationError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

impl DatabaseError {
    pub fn store_write<S, E>(store: S, source: E) -> Self
    where
        S: Into<&'static str>,
        E: Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    {
        Self::StoreWriteError {
            store: store.into(),
            source: source.into(),
        }
    }
}

pub type Result<T, E = DatabaseError> = core::result::Result<T, E>;
