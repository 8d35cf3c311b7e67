//! Hash-set backed filter
//!
//! Stores the `k` full 64-bit hash values of each element in a set instead of
//! flipping bits in an array. Same contract as `BloomFilter`; trades memory
//! for simpler storage. Collisions between the hash values themselves are an
//! additional, very small, false-positive source.

use std::collections::HashSet;

use parking_lot::Mutex;
use tracing::{debug, warn};

use super::config::FilterConfig;
use super::hash_functions::HashFamily;
use super::parameters::calculate_optimal_parameters;
use crate::error::FilterError;
use crate::ports::MembershipFilter;

/// Upper bound on the set's pre-allocation, in hash values
const MAX_PREALLOCATED: usize = 1 << 20;

/// Filter over a set of seen hash values
#[derive(Debug)]
pub struct HashSetFilter {
    hashes: HashFamily,
    capacity: usize,
    state: Mutex<SetState>,
}

#[derive(Debug)]
struct SetState {
    seen: HashSet<u64>,
    inserted: usize,
}

impl HashSetFilter {
    /// Create a filter sized for `capacity` elements at `false_positive_rate`
    ///
    /// The hash count is derived exactly as for the bit-packed filter.
    pub fn new(capacity: usize, false_positive_rate: f64) -> Result<Self, FilterError> {
        let params = calculate_optimal_parameters(capacity, false_positive_rate)?;
        let hashes = HashFamily::new(params.hash_count, params.bit_count)?;
        Ok(Self::with_hash_family(capacity, hashes))
    }

    /// Create a filter from a validated configuration
    pub fn from_config(config: &FilterConfig) -> Result<Self, FilterError> {
        let params = config.params()?;
        let hashes = match config.seed {
            Some(seed) => HashFamily::with_seed(params.hash_count, params.bit_count, seed)?,
            None => HashFamily::new(params.hash_count, params.bit_count)?,
        };
        Ok(Self::with_hash_family(config.capacity, hashes))
    }

    pub fn with_hash_family(capacity: usize, hashes: HashFamily) -> Self {
        let reserve = capacity
            .saturating_mul(hashes.hash_count())
            .min(MAX_PREALLOCATED);
        debug!(
            capacity,
            hash_count = hashes.hash_count(),
            reserve,
            "Created hash-set filter"
        );
        Self {
            state: Mutex::new(SetState {
                seen: HashSet::with_capacity(reserve),
                inserted: 0,
            }),
            hashes,
            capacity,
        }
    }

    /// Number of elements reported as newly added
    pub fn len(&self) -> usize {
        self.state.lock().inserted
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of distinct hash values stored
    pub fn stored_hashes(&self) -> usize {
        self.state.lock().seen.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn hash_count(&self) -> usize {
        self.hashes.hash_count()
    }
}

impl MembershipFilter for HashSetFilter {
    fn add(&self, data: &[u8]) -> Result<bool, FilterError> {
        let values = self.hashes.raw_hashes(data);

        let mut state = self.state.lock();
        let mut present = true;
        for value in values {
            // `insert` returns true when the value was not yet in the set.
            present &= !state.seen.insert(value);
        }
        if present {
            return Ok(true);
        }

        state.inserted += 1;
        if state.inserted == self.capacity + 1 {
            warn!(
                capacity = self.capacity,
                "Hash-set filter exceeded its capacity"
            );
        }
        Ok(false)
    }

    fn exists(&self, data: &[u8]) -> Result<bool, FilterError> {
        let values = self.hashes.raw_hashes(data);

        let state = self.state.lock();
        Ok(values.iter().all(|value| state.seen.contains(value)))
    }
}
