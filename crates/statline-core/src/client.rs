//! StatsD UDP transport (fire-and-forget).
//!
//! Sending rules:
//! - One nonblocking datagram per sample, no buffering, batching, or retry.
//! - `try_send` is the only fallible step; the public sink impl discards its
//!   result. The emitter instruments a latency-sensitive loop, so transient
//!   network failures must stay invisible to callers and must not be logged
//!   per drop.

use std::net::UdpSocket;

use crate::error::Result;
use crate::line::{self, MetricKind, MetricSample};
use crate::sink::MetricSink;

/// Default metric namespace.
pub const DEFAULT_PREFIX: &str = "vllm";

/// UDP StatsD client. `host`/`port`/`prefix` are fixed at construction; the
/// socket is owned exclusively and never reconfigured, so `&self` sends are
/// safe from any number of threads.
#[derive(Debug)]
pub struct StatsdClient {
    host: String,
    port: u16,
    prefix: String,
    sock: UdpSocket,
}

impl StatsdClient {
    /// Open a client with the default `"vllm"` prefix.
    ///
    /// Fails only if socket creation/setup fails: UDP has no connection step,
    /// so an unreachable aggregator is not observable here.
    pub fn new(host: impl Into<String>, port: u16) -> Result<Self> {
        Self::with_prefix(host, port, DEFAULT_PREFIX)
    }

    /// Open a client with an explicit metric prefix.
    pub fn with_prefix(
        host: impl Into<String>,
        port: u16,
        prefix: impl Into<String>,
    ) -> Result<Self> {
        let sock = UdpSocket::bind("0.0.0.0:0")?;
        sock.set_nonblocking(true)?;

        let host = host.into();
        let prefix = prefix.into();
        tracing::debug!(%host, port, %prefix, "statsd client initialized");

        Ok(Self {
            host,
            port,
            prefix,
            sock,
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// One best-effort datagram. Callers on the emission path go through
    /// [`MetricSink::emit`], which discards this result.
    fn try_send(&self, sample: &MetricSample) -> std::io::Result<()> {
        let payload = line::encode(&self.prefix, sample);
        self.sock
            .send_to(&payload, (self.host.as_str(), self.port))?;
        Ok(())
    }
}

impl MetricSink for StatsdClient {
    fn emit(&self, metric: &str, value: f64, kind: MetricKind) {
        // Best-effort contract: drop failures silently rather than perturb
        // or flood the hot path being instrumented.
        let sample = MetricSample {
            metric: metric.to_string(),
            value,
            kind,
        };
        let _ = self.try_send(&sample);
    }
}
