//! Metrics decorator for any `MembershipFilter`

use std::sync::Arc;
use std::time::Instant;

use tracing::error;

use crate::error::FilterError;
use crate::metrics::MetricsRecorder;
use crate::ports::MembershipFilter;

/// Wraps a filter and records every call into a shared recorder
pub struct Instrumented<F> {
    inner: F,
    recorder: Arc<dyn MetricsRecorder>,
}

impl<F: MembershipFilter> Instrumented<F> {
    pub fn new(inner: F, recorder: Arc<dyn MetricsRecorder>) -> Self {
        Self { inner, recorder }
    }

    pub fn inner(&self) -> &F {
        &self.inner
    }

    pub fn into_inner(self) -> F {
        self.inner
    }
}

impl<F: MembershipFilter> MembershipFilter for Instrumented<F> {
    fn add(&self, data: &[u8]) -> Result<bool, FilterError> {
        let start = Instant::now();
        match self.inner.add(data) {
            Ok(present) => {
                self.recorder.record_add(start.elapsed(), present);
                Ok(present)
            }
            Err(e) => {
                self.recorder.record_error();
                error!(error = %e, "Filter add failed");
                Err(e)
            }
        }
    }

    fn exists(&self, data: &[u8]) -> Result<bool, FilterError> {
        let start = Instant::now();
        match self.inner.exists(data) {
            Ok(found) => {
                self.recorder.record_lookup(start.elapsed(), found);
                Ok(found)
            }
            Err(e) => {
                self.recorder.record_error();
                error!(error = %e, "Filter lookup failed");
                Err(e)
            }
        }
    }
}
