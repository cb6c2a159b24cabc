//! statline engine layer.
//!
//! This crate wires the core StatsD transport to an inference engine's
//! runtime statistics: snapshot types produced once per scheduling step, the
//! mapper that decomposes them into gauge/counter/timing emissions, the
//! environment-driven configuration, the process-wide memoized client, and
//! the ad hoc recording entry point used for one-off measurements.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod adhoc;
pub mod config;
pub mod logger;
pub mod registry;
pub mod stats;

pub use adhoc::{record_metric, record_timing};
pub use config::StatsdConfig;
pub use logger::{StatLogger, StatsdStatLogger};
pub use stats::{
    CacheStats, FinishReason, FinishedRequestStats, IterationStats, MultiModalCacheStats,
    SchedulerStats,
};
