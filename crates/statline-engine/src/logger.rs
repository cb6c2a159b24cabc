//! Stats-to-metric mapping.
//!
//! `emit_stats` is the pure mapping: it walks up to three snapshots and
//! issues a fixed, deterministic emission sequence against any `MetricSink`.
//! `StatsdStatLogger` is the engine-facing wrapper that owns the optional
//! transport and implements the `StatLogger` registration contract.

use statline_core::{MetricSink, StatsdClient};

use statline_core::error::Result;

use crate::config::StatsdConfig;
use crate::stats::{IterationStats, MultiModalCacheStats, SchedulerStats, VISION_ENCODING_METRIC};

/// All timing metrics carry seconds in the snapshots and milliseconds on the
/// wire.
pub(crate) const SECS_TO_MS: f64 = 1000.0;

/// Logging-registration contract the engine drives once per scheduling step.
pub trait StatLogger {
    /// Record one step's snapshots. Must never fail or block.
    fn record(
        &self,
        scheduler_stats: Option<&SchedulerStats>,
        iteration_stats: Option<&IterationStats>,
        mm_cache_stats: Option<&MultiModalCacheStats>,
        engine_idx: usize,
    );

    /// Periodic flush hook. Datagram emitters have nothing to flush.
    fn log(&self) {}

    /// Startup hook, after the engine finishes initialization.
    fn log_engine_initialized(&self) {}
}

/// Emit the metric sequence for one scheduling step.
///
/// Each block is guarded by presence of its snapshot; within a call the
/// order is fixed. Absent `iteration_stats` ends the sequence early even
/// when the other snapshots are present.
pub fn emit_stats(
    sink: &dyn MetricSink,
    scheduler_stats: Option<&SchedulerStats>,
    iteration_stats: Option<&IterationStats>,
    mm_cache_stats: Option<&MultiModalCacheStats>,
) {
    if let Some(stats) = scheduler_stats {
        sink.gauge("num_requests_running", stats.num_running_reqs as f64);
        sink.gauge("num_requests_waiting", stats.num_waiting_reqs as f64);
        sink.gauge("kv_cache_usage_perc", stats.kv_cache_usage * 100.0);
        sink.counter("prefix_cache_queries", stats.prefix_cache_stats.queries as f64);
        sink.counter("prefix_cache_hits", stats.prefix_cache_stats.hits as f64);

        if let Some(connector) = &stats.connector_prefix_cache_stats {
            sink.counter("external_prefix_cache_queries", connector.queries as f64);
            sink.counter("external_prefix_cache_hits", connector.hits as f64);
        }
    }

    if let Some(stats) = mm_cache_stats {
        sink.counter("mm_cache_queries", stats.queries as f64);
        sink.counter("mm_cache_hits", stats.hits as f64);
    }

    let Some(stats) = iteration_stats else {
        return;
    };

    sink.counter("num_preemptions", stats.num_preempted_reqs as f64);
    sink.counter("prompt_tokens", stats.num_prompt_tokens as f64);
    sink.counter("generation_tokens", stats.num_generation_tokens as f64);

    for ttft in &stats.time_to_first_tokens_iter {
        sink.timing("time_to_first_token_seconds", ttft * SECS_TO_MS);
    }
    for itl in &stats.inter_token_latencies_iter {
        sink.timing("inter_token_latency_seconds", itl * SECS_TO_MS);
    }
    for vision_time in &stats.vision_encoding_times_iter {
        sink.timing(VISION_ENCODING_METRIC, vision_time * SECS_TO_MS);
    }

    for req in &stats.finished_requests {
        sink.incr(&format!("request_success.{}", req.finish_reason.as_str()));
        sink.timing("e2e_request_latency_seconds", req.e2e_latency * SECS_TO_MS);
        sink.timing("request_queue_time_seconds", req.queued_time * SECS_TO_MS);
        sink.timing("request_inference_time_seconds", req.inference_time * SECS_TO_MS);
        sink.timing("request_prefill_time_seconds", req.prefill_time * SECS_TO_MS);
        sink.timing("request_decode_time_seconds", req.decode_time * SECS_TO_MS);
    }
}

/// StatsD stat logger for the engine's step loop.
#[derive(Debug)]
pub struct StatsdStatLogger {
    client: Option<StatsdClient>,
}

impl StatsdStatLogger {
    /// Build from an explicit config; `None` yields a disabled logger whose
    /// `record` is a no-op.
    pub fn new(config: Option<&StatsdConfig>) -> Result<Self> {
        let client = match config {
            Some(cfg) => Some(cfg.connect()?),
            None => None,
        };
        Ok(Self { client })
    }

    /// Build from the `VLLM_STATSD_*` environment contract. Disabled when
    /// the host variable is unset; fails fast on a malformed port.
    pub fn from_env() -> Result<Self> {
        Self::new(StatsdConfig::from_env()?.as_ref())
    }

    pub fn is_enabled(&self) -> bool {
        self.client.is_some()
    }
}

impl StatLogger for StatsdStatLogger {
    fn record(
        &self,
        scheduler_stats: Option<&SchedulerStats>,
        iteration_stats: Option<&IterationStats>,
        mm_cache_stats: Option<&MultiModalCacheStats>,
        engine_idx: usize,
    ) {
        // engine_idx is reserved for per-engine metric tagging.
        let _ = engine_idx;

        if let Some(client) = &self.client {
            emit_stats(client, scheduler_stats, iteration_stats, mm_cache_stats);
        }
    }
}
