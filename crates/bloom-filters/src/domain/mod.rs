//! Domain Layer - Pure business logic
//!
//! This layer contains:
//! - Parameter calculations
//! - Hash family
//! - Packed bit store
//! - Bit-packed and hash-set filter cores
//! - Configuration
//!
//! RULES:
//! - No I/O operations
//! - No async code

pub mod bit_store;
pub mod bloom_filter;
pub mod config;
pub mod hash_functions;
pub mod hash_set_filter;
pub mod parameters;

pub use bit_store::BitStore;
pub use bloom_filter::BloomFilter;
pub use config::{FilterConfig, FilterConfigBuilder};
pub use hash_functions::{HashFamily, DEFAULT_SEED};
pub use hash_set_filter::HashSetFilter;
pub use parameters::{calculate_fpr, calculate_optimal_parameters, FilterParams};
