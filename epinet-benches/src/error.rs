//! Benchmark setup error type.
//!
//! Setup functions propagate failures with `?` so the bench bodies only have
//! a single place that turns an error into a panic.

use epinet_core::NetworkError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Building or connecting the network failed.
    #[error("network operation failed: {0}")]
    Network(#[from] NetworkError),
    /// A zero value was passed where a non-zero integer was required.
    #[error("expected a non-zero value for {context}")]
    ZeroValue {
        /// A description of the parameter that was unexpectedly zero.
        context: &'static str,
    },
}
