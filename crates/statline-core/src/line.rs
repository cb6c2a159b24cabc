//! StatsD line-protocol encoding.
//!
//! Wire format: `"{prefix}.{metric}:{value}|{code}"` where the code is one of
//! `c` (counter), `g` (gauge), `ms` (timing). Values use default `f64`
//! formatting; StatsD-family aggregators parse floats permissively.

use bytes::Bytes;

/// Sample kind, mapped to a StatsD type code on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    /// Monotonic count (`c`).
    Counter,
    /// Point-in-time level (`g`).
    Gauge,
    /// Duration in milliseconds (`ms`).
    Timing,
}

impl MetricKind {
    /// Wire type code (stable protocol surface).
    pub fn code(self) -> &'static str {
        match self {
            MetricKind::Counter => "c",
            MetricKind::Gauge => "g",
            MetricKind::Timing => "ms",
        }
    }
}

/// One metric sample. Ephemeral: built and consumed within a single send.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSample {
    pub metric: String,
    pub value: f64,
    pub kind: MetricKind,
}

/// Encode one sample as a StatsD line payload.
pub fn encode(prefix: &str, sample: &MetricSample) -> Bytes {
    Bytes::from(format!(
        "{prefix}.{}:{}|{}",
        sample.metric,
        sample.value,
        sample.kind.code()
    ))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn sample(metric: &str, value: f64, kind: MetricKind) -> MetricSample {
        MetricSample {
            metric: metric.to_string(),
            value,
            kind,
        }
    }

    #[test]
    fn timing_payload() {
        let b = encode("vllm", &sample("x", 1.5, MetricKind::Timing));
        assert_eq!(&b[..], b"vllm.x:1.5|ms");
    }

    #[test]
    fn gauge_and_counter_codes() {
        let g = encode("vllm", &sample("kv_cache_usage_perc", 42.5, MetricKind::Gauge));
        assert_eq!(&g[..], b"vllm.kv_cache_usage_perc:42.5|g");

        let c = encode("vllm", &sample("prompt_tokens", 128.0, MetricKind::Counter));
        assert_eq!(&c[..], b"vllm.prompt_tokens:128|c");
    }

    #[test]
    fn only_three_codes_exist() {
        assert_eq!(MetricKind::Counter.code(), "c");
        assert_eq!(MetricKind::Gauge.code(), "g");
        assert_eq!(MetricKind::Timing.code(), "ms");
    }

    #[test]
    fn custom_prefix() {
        let b = encode("myapp", &sample("queue_depth", 3.0, MetricKind::Gauge));
        assert_eq!(&b[..], b"myapp.queue_depth:3|g");
    }
}
