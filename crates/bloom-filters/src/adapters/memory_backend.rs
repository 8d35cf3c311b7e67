//! In-process bloom service
//!
//! Implements `BloomBackend` over keyed `BloomFilter`s, mirroring the
//! behavior of a key-value store with native bloom commands: adding to a
//! missing key creates it with default sizing, testing a missing key
//! reports absent.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use parking_lot::Mutex;

use crate::domain::BloomFilter;
use crate::error::BackendError;
use crate::ports::{BloomBackend, MembershipFilter};

/// Sizing used when `add` targets a key that was never reserved
pub const DEFAULT_AUTO_CAPACITY: usize = 100;
pub const DEFAULT_AUTO_ERROR_RATE: f64 = 0.01;

/// Keyed bloom filters held in memory
#[derive(Default)]
pub struct InMemoryBackend {
    filters: Mutex<HashMap<String, BloomFilter>>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of reserved keys
    pub fn key_count(&self) -> usize {
        self.filters.lock().len()
    }
}

fn command_error(e: impl std::fmt::Display) -> BackendError {
    BackendError::Command(e.to_string())
}

impl BloomBackend for InMemoryBackend {
    fn reserve(&self, key: &str, false_positive_rate: f64, capacity: usize) -> Result<(), BackendError> {
        let mut filters = self.filters.lock();
        if filters.contains_key(key) {
            return Err(BackendError::AlreadyExists);
        }
        let filter = BloomFilter::new(capacity, false_positive_rate).map_err(command_error)?;
        filters.insert(key.to_string(), filter);
        Ok(())
    }

    fn add(&self, key: &str, item: &[u8]) -> Result<bool, BackendError> {
        let mut filters = self.filters.lock();
        let filter = match filters.entry(key.to_string()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(
                BloomFilter::new(DEFAULT_AUTO_CAPACITY, DEFAULT_AUTO_ERROR_RATE)
                    .map_err(command_error)?,
            ),
        };
        filter.add(item).map(|present| !present).map_err(command_error)
    }

    fn exists(&self, key: &str, item: &[u8]) -> Result<bool, BackendError> {
        match self.filters.lock().get(key) {
            Some(filter) => filter.exists(item).map_err(command_error),
            None => Ok(false),
        }
    }
}
