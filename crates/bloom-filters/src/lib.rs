//! # Bloom Filters
//!
//! Probabilistic set membership: answers "definitely absent" or "possibly
//! present" for an element, trading a bounded false-positive rate for a
//! small memory footprint. Meant as a cheap pre-filter in front of an
//! expensive existence check (disk lookup, remote call, cache miss).
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure logic, no I/O
//!   - `calculate_optimal_parameters`: bit count and hash count from
//!     (capacity, false positive rate)
//!   - `HashFamily`: MurmurHash3 + double hashing
//!   - `BitStore`: packed 64-bit-word bit array
//!   - `BloomFilter`: bit-packed filter core
//!   - `HashSetFilter`: filter over a set of seen hash values
//!   - `FilterConfig` / `FilterConfigBuilder`: validated configuration
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `MembershipFilter`: the contract every variant implements
//!   - `BloomBackend`: external bloom service (driven port)
//!
//! - **Adapters Layer** (`adapters/`)
//!   - `RemoteFilter`: `MembershipFilter` over a `BloomBackend`
//!   - `InMemoryBackend`: in-process `BloomBackend`
//!   - `Instrumented`: metrics decorator
//!
//! ## Invariants
//!
//! - No false negatives: after `add(x)`, `exists(x)` is true forever
//! - Bits are never cleared; sizing is fixed at construction
//! - Concurrent `add` of one element: at most one caller sees `false`
//!
//! ## Usage Example
//!
//! ```ignore
//! use bloom_filters::{BloomFilter, MembershipFilter};
//!
//! let filter = BloomFilter::new(1000, 0.01)?;
//! assert!(!filter.add_str("alpha")?); // newly added
//! assert!(filter.add_str("alpha")?);  // already present
//! assert!(filter.exists_str("alpha")?);
//! ```
//!
//! ## Selecting a variant
//!
//! ```ignore
//! use bloom_filters::{build_filter, FilterConfig, FilterKind};
//!
//! let config = FilterConfig::from_env()?;
//! let filter = build_filter(FilterKind::HashSet, &config)?;
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod factory;
pub mod metrics;
pub mod ports;

// Re-exports for convenience
pub use adapters::{InMemoryBackend, Instrumented, RemoteFilter};
pub use domain::{
    calculate_optimal_parameters, BitStore, BloomFilter, FilterConfig, FilterConfigBuilder,
    FilterParams, HashFamily, HashSetFilter,
};
pub use error::{BackendError, FilterError};
pub use factory::{build_filter, FilterKind};
pub use metrics::{Metrics, MetricsRecorder, MetricsSnapshot, NoOpMetrics};
pub use ports::{BloomBackend, MembershipFilter};
