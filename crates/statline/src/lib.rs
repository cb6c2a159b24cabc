//! Top-level facade crate for statline.
//!
//! Re-exports core wire types and the engine layer so users can depend on a
//! single crate.

pub mod core {
    pub use statline_core::*;
}

pub mod engine {
    pub use statline_engine::*;
}
