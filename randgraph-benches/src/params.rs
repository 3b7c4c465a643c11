//! Benchmark parameter types.

use std::fmt;

use randgraph_core::{GraphRequest, GraphRequestBuilder, Result, max_simple_edges};

/// How many edges a benchmark requests relative to its node count.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EdgeDensity {
    /// `n - 1` edges: only the spanning-tree phase runs.
    Tree,
    /// `2n` edges, capped at the simple-graph maximum.
    Sparse,
    /// Half of all possible pairs, where resampling starts to matter.
    HalfComplete,
}

impl EdgeDensity {
    /// Every density, in increasing order.
    pub const ALL: [Self; 3] = [Self::Tree, Self::Sparse, Self::HalfComplete];

    /// Returns the edge count requested for `node_count` nodes.
    #[must_use]
    pub fn edge_count(self, node_count: usize) -> usize {
        let max = max_simple_edges(node_count);
        match self {
            Self::Tree => node_count.saturating_sub(1),
            Self::Sparse => node_count.saturating_mul(2).min(max),
            Self::HalfComplete => max.div_ceil(2).max(node_count.saturating_sub(1)),
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Tree => "tree",
            Self::Sparse => "sparse",
            Self::HalfComplete => "half",
        }
    }
}

/// Parameters for a generation benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct GenerateBenchParams {
    /// Number of nodes in the generated graph.
    pub node_count: usize,
    /// Requested edge density.
    pub density: EdgeDensity,
    /// Whether edges carry weights.
    pub weighted: bool,
}

impl GenerateBenchParams {
    /// Builds the request this run generates.
    ///
    /// # Errors
    /// Returns [`randgraph_core::GraphError`] if `node_count` is zero.
    pub fn request(&self) -> Result<GraphRequest> {
        GraphRequestBuilder::new()
            .with_nodes(self.node_count)
            .with_edges(self.density.edge_count(self.node_count))
            .with_weighted(self.weighted)
            .build()
    }
}

impl fmt::Display for GenerateBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},{}", self.node_count, self.density.label())?;
        if self.weighted {
            f.write_str(",weighted")?;
        }
        Ok(())
    }
}
