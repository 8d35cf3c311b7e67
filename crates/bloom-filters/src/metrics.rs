//! Metrics hooks for filter operations
//!
//! Provides instrumentation points for monitoring add/lookup volume,
//! observed positive rate and operation latencies.
//!
//! ## Usage
//!
//! ```ignore
//! use bloom_filters::metrics::Metrics;
//!
//! let metrics = Metrics::new();
//! let start = std::time::Instant::now();
//! let found = filter.exists(element)?;
//! metrics.record_lookup(start.elapsed(), found);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Metrics collector for filter operations
///
/// Thread-safe counters shared by any number of filters.
#[derive(Debug, Default)]
pub struct Metrics {
    /// Total add calls
    pub adds_performed: AtomicU64,
    /// Add calls that reported the element as newly inserted
    pub adds_new: AtomicU64,
    /// Total lookups performed
    pub lookups_performed: AtomicU64,
    /// Lookups that reported present (true or false positive)
    pub lookups_positive: AtomicU64,
    /// Operations that returned an error
    pub errors: AtomicU64,
    /// Cumulative add time in nanoseconds
    pub add_time_ns: AtomicU64,
    /// Cumulative lookup time in nanoseconds
    pub lookup_time_ns: AtomicU64,
}

impl Metrics {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an add call
    ///
    /// # Arguments
    /// * `duration` - Time taken
    /// * `already_present` - The value `add` returned
    pub fn record_add(&self, duration: Duration, already_present: bool) {
        self.adds_performed.fetch_add(1, Ordering::Relaxed);
        self.add_time_ns
            .fetch_add(duration.as_nanos() as u64, Ordering::Relaxed);
        if !already_present {
            self.adds_new.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record a lookup
    ///
    /// # Arguments
    /// * `duration` - Time taken
    /// * `found` - Whether the element was reported present
    pub fn record_lookup(&self, duration: Duration, found: bool) {
        self.lookups_performed.fetch_add(1, Ordering::Relaxed);
        self.lookup_time_ns
            .fetch_add(duration.as_nanos() as u64, Ordering::Relaxed);
        if found {
            self.lookups_positive.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record a failed operation
    pub fn record_error(&self) {
        self.errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            adds_performed: self.adds_performed.load(Ordering::Relaxed),
            adds_new: self.adds_new.load(Ordering::Relaxed),
            lookups_performed: self.lookups_performed.load(Ordering::Relaxed),
            lookups_positive: self.lookups_positive.load(Ordering::Relaxed),
            errors: self.errors.load(Ordering::Relaxed),
            avg_add_ns: average(&self.add_time_ns, &self.adds_performed),
            avg_lookup_ns: average(&self.lookup_time_ns, &self.lookups_performed),
        }
    }

    /// Ratio of positive lookups to total lookups
    ///
    /// Includes both true positives and false positives.
    pub fn observed_positive_rate(&self) -> f64 {
        let total = self.lookups_performed.load(Ordering::Relaxed);
        let positive = self.lookups_positive.load(Ordering::Relaxed);
        if total > 0 {
            positive as f64 / total as f64
        } else {
            0.0
        }
    }

    /// Reset all counters
    pub fn reset(&self) {
        self.adds_performed.store(0, Ordering::Relaxed);
        self.adds_new.store(0, Ordering::Relaxed);
        self.lookups_performed.store(0, Ordering::Relaxed);
        self.lookups_positive.store(0, Ordering::Relaxed);
        self.errors.store(0, Ordering::Relaxed);
        self.add_time_ns.store(0, Ordering::Relaxed);
        self.lookup_time_ns.store(0, Ordering::Relaxed);
    }
}

fn average(total: &AtomicU64, count: &AtomicU64) -> u64 {
    let total = total.load(Ordering::Relaxed);
    let count = count.load(Ordering::Relaxed);
    if count > 0 {
        total / count
    } else {
        0
    }
}

/// Point-in-time metrics snapshot
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub adds_performed: u64,
    pub adds_new: u64,
    pub lookups_performed: u64,
    pub lookups_positive: u64,
    pub errors: u64,
    pub avg_add_ns: u64,
    pub avg_lookup_ns: u64,
}

/// Trait for custom metrics recording implementations
///
/// Implement this trait to integrate with external metrics systems.
pub trait MetricsRecorder: Send + Sync {
    fn record_add(&self, duration: Duration, already_present: bool);

    fn record_lookup(&self, duration: Duration, found: bool);

    fn record_error(&self);
}

/// No-op metrics recorder for when metrics are disabled
#[derive(Default)]
pub struct NoOpMetrics;

impl MetricsRecorder for NoOpMetrics {
    fn record_add(&self, _: Duration, _: bool) {}
    fn record_lookup(&self, _: Duration, _: bool) {}
    fn record_error(&self) {}
}

impl MetricsRecorder for Metrics {
    fn record_add(&self, duration: Duration, already_present: bool) {
        Metrics::record_add(self, duration, already_present);
    }

    fn record_lookup(&self, duration: Duration, found: bool) {
        Metrics::record_lookup(self, duration, found);
    }

    fn record_error(&self) {
        Metrics::record_error(self);
    }
}
