//! Inbound Port (Driving Port)
//!
//! Callers program against `MembershipFilter` and can swap the bit-packed,
//! hash-set and remote-backed variants without code changes.

use crate::error::FilterError;

/// Probabilistic set-membership contract
///
/// Results:
/// - `add` returns `true` if the element was already present (or is a false
///   positive) and `false` if it was newly inserted.
/// - `exists` returns `true` if the element is present or a false positive,
///   `false` if it is definitely absent.
///
/// In-process variants only return `Err` on an internal sizing defect.
/// Remote-backed variants surface backend failures here.
pub trait MembershipFilter: Send + Sync {
    /// Insert a byte sequence, reporting whether it was already present
    fn add(&self, data: &[u8]) -> Result<bool, FilterError>;

    /// Test a byte sequence without modifying the filter
    fn exists(&self, data: &[u8]) -> Result<bool, FilterError>;

    /// Insert the UTF-8 bytes of `text`
    fn add_str(&self, text: &str) -> Result<bool, FilterError> {
        self.add(text.as_bytes())
    }

    /// Test the UTF-8 bytes of `text`
    fn exists_str(&self, text: &str) -> Result<bool, FilterError> {
        self.exists(text.as_bytes())
    }
}

impl<F: MembershipFilter + ?Sized> MembershipFilter for Box<F> {
    fn add(&self, data: &[u8]) -> Result<bool, FilterError> {
        (**self).add(data)
    }

    fn exists(&self, data: &[u8]) -> Result<bool, FilterError> {
        (**self).exists(data)
    }
}

impl<F: MembershipFilter + ?Sized> MembershipFilter for std::sync::Arc<F> {
    fn add(&self, data: &[u8]) -> Result<bool, FilterError> {
        (**self).add(data)
    }

    fn exists(&self, data: &[u8]) -> Result<bool, FilterError> {
        (**self).exists(data)
    }
}
