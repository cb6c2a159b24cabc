//! Shared error type across statline crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, StatlineError>;

/// Unified error type used by core and the engine layer.
///
/// Nothing on the send path produces these: transient datagram failures are
/// discarded inside the transport. The variants cover the two startup-time
/// failures a host can observe.
#[derive(Debug, Error)]
pub enum StatlineError {
    /// UDP socket creation or setup failed at construction.
    #[error("transport init failed: {0}")]
    TransportInit(#[from] std::io::Error),
    /// Malformed configuration (e.g. non-numeric port).
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
