//! Outbound Port (Driven Port)
//!
//! What a remote-backed filter needs from an external bloom service
//! (a key-value store with native bloom commands). Network timeouts and
//! retries belong to the implementation.

use crate::error::BackendError;

/// External bloom service
pub trait BloomBackend: Send + Sync {
    /// Create the filter stored under `key`
    ///
    /// Returns `BackendError::AlreadyExists` if the key is already reserved.
    fn reserve(&self, key: &str, false_positive_rate: f64, capacity: usize)
        -> Result<(), BackendError>;

    /// Add `item` to the filter under `key`, returning `true` if it was newly
    /// inserted
    fn add(&self, key: &str, item: &[u8]) -> Result<bool, BackendError>;

    /// Test `item` against the filter under `key`
    fn exists(&self, key: &str, item: &[u8]) -> Result<bool, BackendError>;
}
