//! Hash family for Bloom filters
//!
//! Uses MurmurHash3 (x64, 128-bit) once per element and derives `k`
//! positions by double hashing: `h(i) = h1 + i * h2 (mod m)`.
//!
//! A `HashFamily` is an explicit value owned by one filter. Its seed never
//! changes after construction, so previously set bits keep their meaning.

use std::io::Cursor;

use rand::rngs::OsRng;
use rand::RngCore;

use super::bit_store::MAX_BIT_COUNT;
use crate::error::FilterError;

/// Seed used when none is supplied
pub const DEFAULT_SEED: u32 = 0x9747_b28c;

/// Hash an element with MurmurHash3 x64_128, returning (h1, h2)
///
/// `h2` is forced odd so the double-hashing stride is never zero.
pub fn murmur_hash_pair(element: &[u8], seed: u32) -> (u64, u64) {
    let mut cursor = Cursor::new(element);
    let hash = murmur3::murmur3_x64_128(&mut cursor, seed)
        .expect("reading an in-memory cursor is infallible");
    let h1 = hash as u64;
    let h2 = (hash >> 64) as u64 | 1;
    (h1, h2)
}

/// Deterministic mapping of byte sequences to `hash_count` positions in
/// `[0, bit_count)`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashFamily {
    hash_count: usize,
    bit_count: usize,
    seed: u32,
}

impl HashFamily {
    /// Create a family with the default seed
    pub fn new(hash_count: usize, bit_count: usize) -> Result<Self, FilterError> {
        Self::with_seed(hash_count, bit_count, DEFAULT_SEED)
    }

    /// Create a family with an explicit seed
    pub fn with_seed(hash_count: usize, bit_count: usize, seed: u32) -> Result<Self, FilterError> {
        if hash_count == 0 {
            return Err(FilterError::invalid("hash count must be at least 1"));
        }
        if bit_count == 0 {
            return Err(FilterError::invalid("bit count must be at least 1"));
        }
        if bit_count > MAX_BIT_COUNT {
            return Err(FilterError::invalid(format!(
                "bit count {} exceeds the maximum of {}",
                bit_count, MAX_BIT_COUNT
            )));
        }
        Ok(Self {
            hash_count,
            bit_count,
            seed,
        })
    }

    /// Create a family seeded from the operating system's entropy source
    ///
    /// # Errors
    /// `FilterError::EntropyUnavailable` if the OS RNG cannot be read.
    pub fn from_entropy(hash_count: usize, bit_count: usize) -> Result<Self, FilterError> {
        let mut buf = [0u8; 4];
        OsRng
            .try_fill_bytes(&mut buf)
            .map_err(|e| FilterError::EntropyUnavailable(e.to_string()))?;
        Self::with_seed(hash_count, bit_count, u32::from_le_bytes(buf))
    }

    /// Compute the `hash_count` bit positions for an element
    pub fn positions(&self, element: &[u8]) -> Vec<usize> {
        let m = self.bit_count as u64;
        self.raw_hashes(element)
            .into_iter()
            .map(|hash| (hash % m) as usize)
            .collect()
    }

    /// Compute the `hash_count` unreduced 64-bit hash values for an element
    pub fn raw_hashes(&self, element: &[u8]) -> Vec<u64> {
        let (h1, h2) = murmur_hash_pair(element, self.seed);
        (0..self.hash_count as u64)
            .map(|i| h1.wrapping_add(i.wrapping_mul(h2)))
            .collect()
    }

    /// Number of positions produced per element (k)
    pub fn hash_count(&self) -> usize {
        self.hash_count
    }

    /// Size of the index range (m)
    pub fn bit_count(&self) -> usize {
        self.bit_count
    }

    /// Seed fixed at construction
    pub fn seed(&self) -> u32 {
        self.seed
    }
}
