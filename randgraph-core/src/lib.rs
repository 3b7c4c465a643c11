//! Randgraph core library.
//!
//! Generates random connected simple graphs: no self-loops, no repeated
//! unordered pairs, and, whenever the edge budget allows, a spanning tree
//! over every node. Generated edges can be rendered to and parsed from the
//! plain-text edge-list format and assembled into a [`GraphData`] for
//! connectivity checks.
//!
//! ```
//! use randgraph_core::{
//!     GeneratorParams, GraphData, GraphRequestBuilder, RandomGraphGenerator, format_edge_list,
//! };
//!
//! let request = GraphRequestBuilder::new()
//!     .with_nodes(6)
//!     .with_edges(8)
//!     .with_weight_bounds(1, 9)
//!     .build()?;
//! let generator = RandomGraphGenerator::new(GeneratorParams::default().with_rng_seed(42));
//! let edges = generator.generate(&request)?;
//!
//! let graph = GraphData::from_edges(edges.iter().copied());
//! assert!(graph.is_connected());
//! assert_eq!(format_edge_list(&edges).lines().count(), 8);
//! # Ok::<(), randgraph_core::GraphError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

mod edge;
mod edge_list;
mod error;
mod generator;
mod graph;
mod request;
mod union_find;
mod used;

pub use crate::{
    edge::{Edge, NodeId, Weight, max_simple_edges},
    edge_list::{
        ParsedEdgeList, SkipReason, SkippedLine, format_edge_list, parse_edge_list,
        write_edge_list,
    },
    error::{GraphError, GraphErrorCode, Result},
    generator::{
        DEFAULT_MAX_ATTEMPTS_PER_EDGE, GeneratorParams, RandomGraphGenerator, generate_graph,
    },
    graph::GraphData,
    request::{
        DEFAULT_MAX_WEIGHT, DEFAULT_MIN_WEIGHT, GraphRequest, GraphRequestBuilder, WeightRange,
    },
};

#[cfg(test)]
mod test_utils;
