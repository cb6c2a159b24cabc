//! statline core: StatsD wire primitives, the metric sink trait, and the UDP
//! transport.
//!
//! This crate defines the line-protocol contracts and error surface shared by
//! the engine-facing mapper and by host applications that want to emit ad hoc
//! samples. It carries no knowledge of engine statistics so it can be reused
//! outside the inference loop.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Emission is best-effort by contract: the only fallible operation exposed to
//! callers is transport construction. Everything on the send path returns
//! normally regardless of network state.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod client;
pub mod error;
pub mod line;
pub mod sink;

/// Shared result type.
pub use error::{Result, StatlineError};

pub use client::StatsdClient;
pub use line::{MetricKind, MetricSample};
pub use sink::MetricSink;
