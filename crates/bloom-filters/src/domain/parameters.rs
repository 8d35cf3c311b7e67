//! Optimal Bloom filter parameter calculation
//!
//! Formulas:
//! - m = ceil(-n*ln(fpr) / (ln(2)^2))  -- optimal bits
//! - k = ceil((m/n) * ln(2))           -- optimal hash functions, at least 1
//! - FPR = (1 - e^(-kn/m))^k

use std::f64::consts::LN_2;

use super::bit_store::MAX_BIT_COUNT;
use crate::error::FilterError;

/// Bloom filter parameters
#[derive(Clone, Debug, PartialEq)]
pub struct FilterParams {
    /// Number of bits in the filter (m)
    pub bit_count: usize,
    /// Number of hash functions (k)
    pub hash_count: usize,
    /// Expected false positive rate once `capacity` elements are inserted
    pub expected_fpr: f64,
}

/// Calculate optimal Bloom filter parameters for given constraints
///
/// # Arguments
/// * `capacity` - Expected number of distinct elements (n), must be > 0
/// * `false_positive_rate` - Target false positive rate, must be in (0, 1)
///
/// # Errors
/// `FilterError::InvalidConfiguration` if either argument is out of range,
/// or if the derived bit count is too large to allocate.
pub fn calculate_optimal_parameters(
    capacity: usize,
    false_positive_rate: f64,
) -> Result<FilterParams, FilterError> {
    validate(capacity, false_positive_rate)?;

    let n = capacity as f64;
    let ln2_squared = LN_2 * LN_2;

    let bits = (-n * false_positive_rate.ln() / ln2_squared).ceil();
    if !bits.is_finite() || bits >= MAX_BIT_COUNT as f64 {
        return Err(FilterError::invalid(format!(
            "capacity {} at rate {} needs {} bits, more than the {} a filter can hold",
            capacity, false_positive_rate, bits, MAX_BIT_COUNT
        )));
    }
    let bit_count = bits as usize;
    let hash_count = ((bit_count as f64 / n) * LN_2).ceil() as usize;
    let hash_count = hash_count.max(1);

    Ok(FilterParams {
        bit_count,
        hash_count,
        expected_fpr: calculate_fpr(bit_count, capacity, hash_count),
    })
}

/// Check the (capacity, rate) pair a filter is sized from
pub fn validate(capacity: usize, false_positive_rate: f64) -> Result<(), FilterError> {
    if capacity == 0 {
        return Err(FilterError::invalid("capacity must be greater than 0"));
    }
    // Negated so NaN is rejected too.
    if !(false_positive_rate > 0.0 && false_positive_rate < 1.0) {
        return Err(FilterError::invalid(format!(
            "false positive rate {} must be in (0, 1)",
            false_positive_rate
        )));
    }
    Ok(())
}

/// Calculate the false positive rate for given parameters
///
/// Formula: FPR = (1 - e^(-kn/m))^k
pub fn calculate_fpr(m: usize, n: usize, k: usize) -> f64 {
    if m == 0 {
        return 1.0;
    }
    let exponent = -(k as f64) * (n as f64) / (m as f64);
    (1.0 - exponent.exp()).powi(k as i32)
}
