//! Metric sink seam.
//!
//! Mappers program against `MetricSink` instead of a concrete transport so the
//! emission sequence can be tested against a recording sink and so hosts can
//! thread an explicitly constructed client through their pipeline.

use crate::line::MetricKind;

/// Anything that accepts metric samples. Implementations must never fail
/// observably; emission is best-effort by contract.
pub trait MetricSink {
    /// Emit one sample.
    fn emit(&self, metric: &str, value: f64, kind: MetricKind);

    /// Duration in milliseconds.
    fn timing(&self, metric: &str, value_ms: f64) {
        self.emit(metric, value_ms, MetricKind::Timing);
    }

    /// Point-in-time level.
    fn gauge(&self, metric: &str, value: f64) {
        self.emit(metric, value, MetricKind::Gauge);
    }

    /// Monotonic count.
    fn counter(&self, metric: &str, value: f64) {
        self.emit(metric, value, MetricKind::Counter);
    }

    /// Counter of one.
    fn incr(&self, metric: &str) {
        self.counter(metric, 1.0);
    }
}
