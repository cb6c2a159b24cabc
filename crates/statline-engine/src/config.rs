//! StatsD emitter configuration (strict parsing).
//!
//! Two sources: the `VLLM_STATSD_HOST` / `VLLM_STATSD_PORT` environment
//! contract, and an embeddable serde section for hosts that carry the
//! settings in their own config file. The explicit paths fail fast on
//! malformed values; only the memoized global registry downgrades those
//! errors to a disabled emitter.

use serde::Deserialize;

use statline_core::client::DEFAULT_PREFIX;
use statline_core::error::{Result, StatlineError};
use statline_core::StatsdClient;

/// Aggregator host. Absent or empty means telemetry is disabled entirely.
pub const ENV_STATSD_HOST: &str = "VLLM_STATSD_HOST";
/// Aggregator port, default `8125`.
pub const ENV_STATSD_PORT: &str = "VLLM_STATSD_PORT";

const DEFAULT_PORT: u16 = 8125;

/// Where and how to emit.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatsdConfig {
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_prefix")]
    pub prefix: String,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}
fn default_prefix() -> String {
    DEFAULT_PREFIX.into()
}

impl StatsdConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            prefix: default_prefix(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.host.is_empty() {
            return Err(StatlineError::InvalidConfig(
                "statsd.host must not be empty".into(),
            ));
        }
        if self.prefix.is_empty() {
            return Err(StatlineError::InvalidConfig(
                "statsd.prefix must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Read the environment contract. `Ok(None)` when the host variable is
    /// unset or empty (telemetry disabled); `Err` on a non-numeric port so
    /// misconfiguration surfaces at startup rather than silently defaulting.
    pub fn from_env() -> Result<Option<Self>> {
        Self::from_lookup(
            std::env::var(ENV_STATSD_HOST).ok(),
            std::env::var(ENV_STATSD_PORT).ok(),
        )
    }

    fn from_lookup(host: Option<String>, port: Option<String>) -> Result<Option<Self>> {
        let Some(host) = host.filter(|h| !h.is_empty()) else {
            return Ok(None);
        };

        let port = match port {
            None => DEFAULT_PORT,
            Some(raw) => raw.parse().map_err(|_| {
                StatlineError::InvalidConfig(format!(
                    "{ENV_STATSD_PORT} must be a port number, got {raw:?}"
                ))
            })?,
        };

        Ok(Some(Self {
            host,
            port,
            prefix: default_prefix(),
        }))
    }

    /// Open a transport for this config.
    pub fn connect(&self) -> Result<StatsdClient> {
        self.validate()?;
        StatsdClient::with_prefix(&self.host, self.port, &self.prefix)
    }
}
