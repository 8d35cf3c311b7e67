//! Core Bloom filter implementation
//!
//! INVARIANTS:
//! - No false negatives: once `add(x)` returns, `exists(x)` is true forever
//! - Bits are only ever set; bit count and hash count never change
//! - The test-then-set in `add` runs under one lock, so concurrent adds of
//!   the same element see at most one "newly added"

use parking_lot::Mutex;
use tracing::{debug, warn};

use super::bit_store::BitStore;
use super::config::FilterConfig;
use super::hash_functions::HashFamily;
use super::parameters::{calculate_fpr, calculate_optimal_parameters};
use crate::error::FilterError;
use crate::ports::MembershipFilter;

/// Bit-packed Bloom filter
///
/// A space-efficient probabilistic data structure that can test whether an
/// element is a member of a set. False positives are possible, but false
/// negatives are not.
#[derive(Debug)]
pub struct BloomFilter {
    hashes: HashFamily,
    capacity: usize,
    state: Mutex<FilterState>,
}

#[derive(Debug)]
struct FilterState {
    bits: BitStore,
    /// Elements reported as newly added (n)
    inserted: usize,
}

impl BloomFilter {
    /// Create a filter sized for `capacity` elements at `false_positive_rate`
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

    /// Create a filter whose hash seed comes from the OS entropy source
    pub fn with_random_seed(capacity: usize, false_positive_rate: f64) -> Result<Self, FilterError> {
        let params = calculate_optimal_parameters(capacity, false_positive_rate)?;
        let hashes = HashFamily::from_entropy(params.hash_count, params.bit_count)?;
        Ok(Self::with_hash_family(capacity, hashes))
    }

    /// Create a filter around an explicitly constructed hash family
    ///
    /// The bit store is sized to the family's index range.
    pub fn with_hash_family(capacity: usize, hashes: HashFamily) -> Self {
        debug!(
            capacity,
            bit_count = hashes.bit_count(),
            hash_count = hashes.hash_count(),
            "Created bloom filter"
        );
        Self {
            state: Mutex::new(FilterState {
                bits: BitStore::new(hashes.bit_count()),
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

    /// Advisory capacity the filter was sized for
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get the filter size in bits
    pub fn bit_count(&self) -> usize {
        self.hashes.bit_count()
    }

    /// Get the number of hash functions
    pub fn hash_count(&self) -> usize {
        self.hashes.hash_count()
    }

    /// Get the number of bits set in the filter
    pub fn bits_set(&self) -> usize {
        self.state.lock().bits.count_ones()
    }

    /// Bytes held by the bit array
    pub fn memory_bytes(&self) -> usize {
        self.state.lock().bits.memory_bytes()
    }

    /// Estimate the current false positive rate from the inserted count
    ///
    /// Formula: FPR = (1 - e^(-kn/m))^k
    pub fn estimated_fpr(&self) -> f64 {
        calculate_fpr(self.bit_count(), self.len(), self.hash_count())
    }

    pub fn hash_family(&self) -> &HashFamily {
        &self.hashes
    }
}

impl MembershipFilter for BloomFilter {
    fn add(&self, data: &[u8]) -> Result<bool, FilterError> {
        let positions = self.hashes.positions(data);

        let mut state = self.state.lock();
        // Setting an already-set bit is a no-op, so one pass both tests and sets.
        let mut present = true;
        for pos in positions {
            present &= state.bits.set_bit(pos)?;
        }
        if present {
            return Ok(true);
        }

        state.inserted += 1;
        if state.inserted == self.capacity + 1 {
            warn!(
                capacity = self.capacity,
                bit_count = self.hashes.bit_count(),
                "Bloom filter exceeded its capacity; false positive rate will degrade"
            );
        }
        Ok(false)
    }

    fn exists(&self, data: &[u8]) -> Result<bool, FilterError> {
        let positions = self.hashes.positions(data);

        let state = self.state.lock();
        for pos in positions {
            if !state.bits.test_bit(pos)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}
