//! Ad hoc metric recording.
//!
//! Narrow entry point for one-off measurements taken outside the step loop.
//! Timing values arrive in seconds and are converted to milliseconds on the
//! wire, matching the mapper. Vision encoding timings additionally land in
//! the thread-local buffer so the engine's collector can fold them into the
//! next iteration snapshot; the buffer write and the network emission are
//! independent side effects.

use statline_core::{MetricKind, MetricSink};

use crate::logger::SECS_TO_MS;
use crate::registry;
use crate::stats::{self, VISION_ENCODING_METRIC};

/// Record one bare sample, routing through the global client when configured.
pub fn record_metric(metric: &str, value: f64, kind: MetricKind) {
    if metric == VISION_ENCODING_METRIC && kind == MetricKind::Timing {
        stats::record_vision_encoding_time(value);
    }

    if let Some(client) = registry::global_client() {
        match kind {
            MetricKind::Timing => client.timing(metric, value * SECS_TO_MS),
            MetricKind::Counter => client.counter(metric, value),
            MetricKind::Gauge => client.gauge(metric, value),
        }
    }
}

/// Timing is the common case; `seconds` is converted to milliseconds.
pub fn record_timing(metric: &str, seconds: f64) {
    record_metric(metric, seconds, MetricKind::Timing);
}
