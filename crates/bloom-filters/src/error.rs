//! Error types for the membership filters

use thiserror::Error;

/// Errors that can occur while constructing or operating a filter
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// Only reachable through a sizing defect; hash positions are always
    /// reduced into range before they reach the store.
    #[error("Bit index out of range: {index} >= {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Entropy source unavailable: {0}")]
    EntropyUnavailable(String),

    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),
}

impl FilterError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

/// Errors from an external bloom service
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Filter key already exists")]
    AlreadyExists,

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Timeout")]
    Timeout,

    #[error("Command error: {0}")]
    Command(String),
}
