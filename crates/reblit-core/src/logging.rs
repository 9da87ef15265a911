#![forbid(unsafe_code)]

//! Feature-gated structured logging.
//!
//! With the `tracing` feature enabled this module re-exports the `tracing`
//! macros so downstream crates can log through one import path. The
//! `tracing-json` feature additionally pulls in `tracing-subscriber` and
//! provides subscriber installation helpers honoring `RUST_LOG`.
//!
//! With both features off this module is empty and the crate carries zero
//! logging overhead.

#[cfg(feature = "tracing")]
pub use tracing::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};

/// Install a human-readable subscriber filtered by `RUST_LOG`.
///
/// Intended for embedder binaries and examples; libraries should never call
/// this. Panics if a global subscriber is already set.
#[cfg(feature = "tracing-json")]
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

/// Install a JSON-lines subscriber filtered by `RUST_LOG`.
///
/// One event per line, suitable for log shipping from production embedders.
/// Panics if a global subscriber is already set.
#[cfg(feature = "tracing-json")]
pub fn init_json() {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
