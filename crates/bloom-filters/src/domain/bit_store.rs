//! Packed bit array backing the bit-level Bloom filter
//!
//! Bits are stored in 64-bit words. Bits are only ever set, never cleared.

use bitvec::prelude::*;

use crate::error::FilterError;

/// Largest bit count a `BitStore` can address
pub const MAX_BIT_COUNT: usize = BitSlice::<u64, Lsb0>::MAX_BITS;

/// Fixed-size dense bit sequence
#[derive(Clone, Debug)]
pub struct BitStore {
    bits: BitVec<u64, Lsb0>,
}

impl BitStore {
    /// Create a zero-filled store of `len` bits
    ///
    /// `len` must not exceed `MAX_BIT_COUNT`; sizes reaching here come from a
    /// validated `HashFamily`.
    pub fn new(len: usize) -> Self {
        Self {
            bits: bitvec![u64, Lsb0; 0; len],
        }
    }

    /// Set the bit at `index`, returning whether it was already set
    pub fn set_bit(&mut self, index: usize) -> Result<bool, FilterError> {
        self.check(index)?;
        Ok(self.bits.replace(index, true))
    }

    /// Test the bit at `index`
    pub fn test_bit(&self, index: usize) -> Result<bool, FilterError> {
        self.check(index)?;
        Ok(self.bits[index])
    }

    fn check(&self, index: usize) -> Result<(), FilterError> {
        if index >= self.bits.len() {
            return Err(FilterError::IndexOutOfRange {
                index,
                len: self.bits.len(),
            });
        }
        Ok(())
    }

    /// Number of addressable bits
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Number of bits currently set
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones()
    }

    /// Bytes held by the backing words
    pub fn memory_bytes(&self) -> usize {
        self.bits.as_raw_slice().len() * std::mem::size_of::<u64>()
    }
}
