//! Remote-backed filter
//!
//! Delegates `add`/`exists` to an external bloom service through the
//! `BloomBackend` port. Backend failures are returned as
//! `FilterError::Backend` so callers can tell "service unavailable" apart
//! from a filter answer.

use tracing::{debug, warn};

use crate::domain::FilterConfig;
use crate::error::{BackendError, FilterError};
use crate::ports::{BloomBackend, MembershipFilter};

/// Filter whose state lives in an external bloom service
pub struct RemoteFilter<B: BloomBackend> {
    backend: B,
    key: String,
}

impl<B: BloomBackend> RemoteFilter<B> {
    /// Reserve `key` on the backend, sized from `config`
    ///
    /// An already-reserved key is reused as is.
    pub fn new(backend: B, key: impl Into<String>, config: &FilterConfig) -> Result<Self, FilterError> {
        config.validate()?;
        let key = key.into();

        match backend.reserve(&key, config.false_positive_rate, config.capacity) {
            Ok(()) => debug!(
                key = %key,
                capacity = config.capacity,
                false_positive_rate = config.false_positive_rate,
                "Reserved remote bloom filter"
            ),
            Err(BackendError::AlreadyExists) => {
                debug!(key = %key, "Remote bloom filter already exists, reusing it")
            }
            Err(e) => {
                warn!(key = %key, error = %e, "Failed to reserve remote bloom filter");
                return Err(e.into());
            }
        }

        Ok(Self { backend, key })
    }

    /// Key the filter is stored under
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: BloomBackend> MembershipFilter for RemoteFilter<B> {
    fn add(&self, data: &[u8]) -> Result<bool, FilterError> {
        let inserted = self.backend.add(&self.key, data).map_err(|e| {
            warn!(key = %self.key, error = %e, "Remote bloom add failed");
            FilterError::from(e)
        })?;
        Ok(!inserted)
    }

    fn exists(&self, data: &[u8]) -> Result<bool, FilterError> {
        self.backend.exists(&self.key, data).map_err(|e| {
            warn!(key = %self.key, error = %e, "Remote bloom exists failed");
            FilterError::from(e)
        })
    }
}
