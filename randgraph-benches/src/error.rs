//! Benchmark setup error type.

use randgraph_core::GraphError;

/// Errors that may occur while preparing benchmark inputs.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Request validation or graph generation failed.
    #[error("graph generation failed: {0}")]
    Graph(#[from] GraphError),
}
