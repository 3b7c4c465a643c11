//! Benchmark support crate for randgraph.
//!
//! Holds the parameter and setup-error types shared by the Criterion
//! benchmarks for graph generation and edge-list text handling.

pub mod error;
pub mod params;
