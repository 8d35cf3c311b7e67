//! Filter configuration and validation
//!
//! # Example
//!
//! ```ignore
//! use bloom_filters::domain::FilterConfigBuilder;
//!
//! let config = FilterConfigBuilder::new()
//!     .capacity(10_000)
//!     .false_positive_rate(0.001)
//!     .build()?;
//! ```

use serde::{Deserialize, Serialize};

use super::parameters::{self, FilterParams};
use crate::error::FilterError;

/// Prefix for environment overrides read by `FilterConfig::from_env`
pub const DEFAULT_ENV_PREFIX: &str = "BLOOM";

/// Filter sizing configuration
///
/// Immutable once a filter is built from it; fully determines the derived
/// bit count and hash count.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Expected number of distinct elements (advisory, never enforced)
    pub capacity: usize,
    /// Target false positive rate at `capacity`, in (0, 1)
    pub false_positive_rate: f64,
    /// Hash seed; the default seed is used when unset
    pub seed: Option<u32>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            capacity: 1_000_000,
            false_positive_rate: 0.001,
            seed: None,
        }
    }
}

impl FilterConfig {
    /// Create a new configuration with validation
    pub fn new(capacity: usize, false_positive_rate: f64) -> Result<Self, FilterError> {
        let config = Self {
            capacity,
            false_positive_rate,
            seed: None,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate capacity > 0 and rate in (0, 1)
    pub fn validate(&self) -> Result<(), FilterError> {
        self.params().map(|_| ())
    }

    /// Derive the optimal bit count and hash count
    pub fn params(&self) -> Result<FilterParams, FilterError> {
        parameters::calculate_optimal_parameters(self.capacity, self.false_positive_rate)
    }

    /// Builder-style method to set the hash seed
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Load from `BLOOM_*` environment variables over the defaults
    pub fn from_env() -> Result<Self, FilterError> {
        Self::from_env_with_prefix(DEFAULT_ENV_PREFIX)
    }

    /// Load from `<prefix>_CAPACITY`, `<prefix>_FALSE_POSITIVE_RATE` and
    /// `<prefix>_SEED` over the defaults
    pub fn from_env_with_prefix(prefix: &str) -> Result<Self, FilterError> {
        Self::from_lookup(prefix, |key| std::env::var(key).ok())
    }

    fn from_lookup<F>(prefix: &str, lookup: F) -> Result<Self, FilterError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(val) = lookup(&format!("{}_CAPACITY", prefix)) {
            config.capacity = parse_var(prefix, "CAPACITY", &val)?;
        }
        if let Some(val) = lookup(&format!("{}_FALSE_POSITIVE_RATE", prefix)) {
            config.false_positive_rate = parse_var(prefix, "FALSE_POSITIVE_RATE", &val)?;
        }
        if let Some(val) = lookup(&format!("{}_SEED", prefix)) {
            config.seed = Some(parse_var(prefix, "SEED", &val)?);
        }

        config.validate()?;
        Ok(config)
    }
}

fn parse_var<T: std::str::FromStr>(prefix: &str, name: &str, val: &str) -> Result<T, FilterError> {
    val.trim().parse().map_err(|_| {
        FilterError::invalid(format!("{}_{} has unparseable value {:?}", prefix, name, val))
    })
}

/// Builder for FilterConfig with validation
#[derive(Default)]
pub struct FilterConfigBuilder {
    capacity: Option<usize>,
    false_positive_rate: Option<f64>,
    seed: Option<u32>,
}

impl FilterConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the expected number of distinct elements
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Set the target false positive rate
    pub fn false_positive_rate(mut self, rate: f64) -> Self {
        self.false_positive_rate = Some(rate);
        self
    }

    /// Fix the hash seed
    pub fn seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the FilterConfig, validating all parameters
    pub fn build(self) -> Result<FilterConfig, FilterError> {
        let defaults = FilterConfig::default();

        let config = FilterConfig {
            capacity: self.capacity.unwrap_or(defaults.capacity),
            false_positive_rate: self
                .false_positive_rate
                .unwrap_or(defaults.false_positive_rate),
            seed: self.seed.or(defaults.seed),
        };

        config.validate()?;
        Ok(config)
    }
}
