//! Read-only statistics snapshots consumed by the mapper.
//!
//! The engine's statistics-collection subsystem fills these once per
//! scheduling step; this crate only reads them. The thread-local
//! vision-encoding buffer at the bottom is the seam the ad hoc recorder
//! feeds and the engine-side collector drains into
//! `IterationStats::vision_encoding_times_iter`.

use std::cell::RefCell;

/// Metric name the ad hoc recorder special-cases into the vision buffer.
pub const VISION_ENCODING_METRIC: &str = "vision_encoding_seconds";

/// Query/hit pair shared by the prefix, connector, and multimodal caches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub queries: u64,
    pub hits: u64,
}

/// Multimodal (vision) cache snapshot.
pub type MultiModalCacheStats = CacheStats;

/// Scheduler occupancy and cache snapshot.
#[derive(Debug, Clone, Default)]
pub struct SchedulerStats {
    pub num_running_reqs: u64,
    pub num_waiting_reqs: u64,
    /// Fraction of KV cache blocks in use, in `[0, 1]`.
    pub kv_cache_usage: f64,
    pub prefix_cache_stats: CacheStats,
    /// Present only when a KV connector serves an external prefix cache.
    pub connector_prefix_cache_stats: Option<CacheStats>,
}

/// Why a request finished. Closed set: `request_success.{reason}` metric
/// names are built from this, which bounds metric-name cardinality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    /// Hit a stop condition (EOS or stop string).
    Stop,
    /// Hit the max-tokens limit.
    Length,
    /// Aborted by the client or scheduler.
    Abort,
}

impl FinishReason {
    /// Lowercase reason used in metric names (stable wire surface).
    pub fn as_str(self) -> &'static str {
        match self {
            FinishReason::Stop => "stop",
            FinishReason::Length => "length",
            FinishReason::Abort => "abort",
        }
    }
}

/// Latency breakdown of one completed request. All fields are seconds.
#[derive(Debug, Clone)]
pub struct FinishedRequestStats {
    pub finish_reason: FinishReason,
    pub e2e_latency: f64,
    pub queued_time: f64,
    pub inference_time: f64,
    pub prefill_time: f64,
    pub decode_time: f64,
}

/// Per-iteration token counts and latency samples.
///
/// The `_iter` sequences hold only the samples observed since the previous
/// scheduling step; empty sequences are the common case.
#[derive(Debug, Clone, Default)]
pub struct IterationStats {
    pub num_preempted_reqs: u64,
    pub num_prompt_tokens: u64,
    pub num_generation_tokens: u64,
    /// Time-to-first-token samples, seconds.
    pub time_to_first_tokens_iter: Vec<f64>,
    /// Inter-token latency samples, seconds.
    pub inter_token_latencies_iter: Vec<f64>,
    /// Vision encoding durations, seconds.
    pub vision_encoding_times_iter: Vec<f64>,
    pub finished_requests: Vec<FinishedRequestStats>,
}

thread_local! {
    static VISION_ENCODING_TIMES: RefCell<Vec<f64>> = const { RefCell::new(Vec::new()) };
}

/// Buffer one vision encoding duration (seconds) on the current thread.
pub fn record_vision_encoding_time(seconds: f64) {
    VISION_ENCODING_TIMES.with(|buf| buf.borrow_mut().push(seconds));
}

/// Drain the current thread's buffered vision encoding durations.
pub fn take_vision_encoding_times() -> Vec<f64> {
    VISION_ENCODING_TIMES.with(|buf| std::mem::take(&mut *buf.borrow_mut()))
}
