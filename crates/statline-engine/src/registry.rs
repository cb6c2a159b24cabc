//! Process-wide memoized StatsD client.
//!
//! Outermost-boundary fallback for call sites that cannot carry an explicit
//! client. Exactly one initialization attempt per process: unset host, a
//! malformed port, and transport-construction failure all settle into a
//! permanent unconfigured state. The environment is never re-read.

use std::sync::OnceLock;

use statline_core::StatsdClient;

use crate::config::StatsdConfig;

static GLOBAL_CLIENT: OnceLock<Option<StatsdClient>> = OnceLock::new();

/// The global client, if the environment configured one.
pub fn global_client() -> Option<&'static StatsdClient> {
    GLOBAL_CLIENT.get_or_init(init_from_env).as_ref()
}

fn init_from_env() -> Option<StatsdClient> {
    let cfg = match StatsdConfig::from_env() {
        Ok(Some(cfg)) => cfg,
        Ok(None) => return None,
        Err(e) => {
            // One warning at first use, then permanent silence: record paths
            // must never fail or flood logs.
            tracing::warn!(error = %e, "statsd telemetry disabled: bad environment config");
            return None;
        }
    };

    match cfg.connect() {
        Ok(client) => {
            tracing::debug!(host = %cfg.host, port = cfg.port, "global statsd client ready");
            Some(client)
        }
        Err(e) => {
            tracing::warn!(error = %e, "statsd telemetry disabled: transport init failed");
            None
        }
    }
}
