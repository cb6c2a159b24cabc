//! Registry behavior with a malformed port configuration.
//!
//! Own integration binary (own process): the registry memoizes its first
//! environment read, and this case depends on the environment state at that
//! moment. A valid host with a non-numeric port must settle into the same
//! permanent unconfigured state as an unset host.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use statline_engine::registry;

#[test]
fn bad_port_settles_permanently_unconfigured() {
    std::env::set_var("VLLM_STATSD_HOST", "127.0.0.1");
    std::env::set_var("VLLM_STATSD_PORT", "not-a-port");

    // Both calls return the unconfigured marker; the config error is
    // downgraded to one warning, never surfaced.
    assert!(registry::global_client().is_none());
    assert!(registry::global_client().is_none());

    // One-shot memoization: repairing the environment after first use
    // must not revive the registry.
    std::env::set_var("VLLM_STATSD_PORT", "8125");
    assert!(registry::global_client().is_none());
}
