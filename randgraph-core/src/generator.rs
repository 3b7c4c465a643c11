//! Random connected simple-graph generation.
//!
//! Generation runs in two phases over a growing list of nodes already
//! attached to the graph:
//!
//! 1. **Spanning construction.** Nodes `2, 3, …, n` are attached in order,
//!    each to a node drawn uniformly from the attached list. After `n - 1`
//!    edges every node is reachable from node 1.
//! 2. **Extra edges.** Both endpoints are drawn from the attached list until
//!    the requested edge count is met.
//!
//! Every accepted edge appends its source to the attached list, so nodes
//! that joined early (or were chosen as sources often) are drawn more often
//! than late ones. Candidates that form a self-loop or repeat an unordered
//! pair are rejected and redrawn, up to
//! [`GeneratorParams::max_attempts_per_edge`] times per edge.
//!
//! When fewer than `n - 1` edges are requested only the first
//! `edges + 1` nodes are attached and the result is not connected.

use std::collections::TryReserveError;
use std::num::NonZeroUsize;

use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};
use tracing::{debug, info, instrument};

use crate::{
    Result,
    edge::{Edge, NodeId, Weight},
    error::GraphError,
    request::{GraphRequest, GraphRequestBuilder, WeightRange},
    used::UsedPairs,
};

/// Default per-edge draw budget.
pub const DEFAULT_MAX_ATTEMPTS_PER_EDGE: usize = 1_000_000;

const DEFAULT_ATTEMPT_BUDGET: NonZeroUsize = match NonZeroUsize::new(DEFAULT_MAX_ATTEMPTS_PER_EDGE) {
    Some(budget) => budget,
    None => NonZeroUsize::MIN,
};

/// The node every spanning construction starts from.
const ROOT_NODE: NodeId = 1;

/// Tuning for [`RandomGraphGenerator`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GeneratorParams {
    max_attempts_per_edge: NonZeroUsize,
    rng_seed: Option<u64>,
}

impl GeneratorParams {
    /// Creates parameters with an explicit per-edge draw budget.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidAttemptBudget`] when the budget is zero.
    ///
    /// # Examples
    /// ```
    /// use randgraph_core::GeneratorParams;
    ///
    /// let params = GeneratorParams::new(500).expect("budget is non-zero");
    /// assert_eq!(params.max_attempts_per_edge(), 500);
    /// assert!(GeneratorParams::new(0).is_err());
    /// ```
    pub fn new(max_attempts_per_edge: usize) -> Result<Self> {
        let max_attempts_per_edge =
            NonZeroUsize::new(max_attempts_per_edge).ok_or(GraphError::InvalidAttemptBudget)?;
        Ok(Self {
            max_attempts_per_edge,
            rng_seed: None,
        })
    }

    /// Seeds the generator so repeated runs produce identical graphs.
    #[must_use]
    pub const fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Returns the number of candidate draws allowed per edge.
    #[must_use]
    pub const fn max_attempts_per_edge(&self) -> usize {
        self.max_attempts_per_edge.get()
    }

    /// Returns the configured seed, if any.
    #[must_use]
    pub const fn rng_seed(&self) -> Option<u64> {
        self.rng_seed
    }
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            max_attempts_per_edge: DEFAULT_ATTEMPT_BUDGET,
            rng_seed: None,
        }
    }
}

/// Produces random connected simple graphs.
///
/// # Examples
/// ```
/// use randgraph_core::{GeneratorParams, GraphRequest, RandomGraphGenerator};
///
/// let generator = RandomGraphGenerator::new(GeneratorParams::default().with_rng_seed(7));
/// let request = GraphRequest::new(4, 3).expect("request is valid");
/// let edges = generator.generate(&request).expect("generation succeeds");
/// assert_eq!(edges.len(), 3);
/// assert!(edges.iter().all(|edge| edge.weight().is_none()));
/// ```
#[derive(Clone, Debug, Default)]
pub struct RandomGraphGenerator {
    params: GeneratorParams,
}

impl RandomGraphGenerator {
    /// Creates a generator with the given parameters.
    #[must_use]
    pub const fn new(params: GeneratorParams) -> Self {
        Self { params }
    }

    /// Returns the generator parameters.
    #[must_use]
    pub const fn params(&self) -> &GeneratorParams {
        &self.params
    }

    /// Generates a graph using the configured seed, or OS entropy when no
    /// seed was set.
    ///
    /// # Errors
    /// Returns [`GraphError::CapacityExceeded`] or
    /// [`GraphError::GenerationFailed`] as described on
    /// [`generate_with_rng`](Self::generate_with_rng).
    pub fn generate(&self, request: &GraphRequest) -> Result<Vec<Edge>> {
        let mut rng = match self.params.rng_seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        self.generate_with_rng(request, &mut rng)
    }

    /// Generates a graph drawing all randomness from `rng`.
    ///
    /// The returned edges number exactly [`GraphRequest::edge_count`]; none
    /// is a self-loop and no unordered pair repeats. When the request
    /// [spans all nodes](GraphRequest::spans_all_nodes) the first
    /// `node_count - 1` edges form a spanning tree.
    ///
    /// # Errors
    /// Returns [`GraphError::CapacityExceeded`] when storage for the edge
    /// count cannot be reserved, and [`GraphError::GenerationFailed`] when
    /// an edge cannot be placed within the per-edge draw budget. No partial
    /// result is returned.
    #[instrument(
        name = "generator.generate",
        err,
        skip(self, request, rng),
        fields(
            nodes = request.node_count(),
            requested_edges = request.requested_edges(),
            edges = request.edge_count(),
            weighted = request.is_weighted(),
        ),
    )]
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        request: &GraphRequest,
        rng: &mut R,
    ) -> Result<Vec<Edge>> {
        if request.is_clamped() {
            debug!(
                requested = request.requested_edges(),
                max = request.max_edges(),
                "edge count clamped to simple-graph maximum"
            );
        }

        let node_count = request.node_count();
        let edge_count = request.edge_count();
        let Buffers {
            mut attached,
            mut used,
            mut edges,
        } = Buffers::reserve(edge_count)?;
        attached.push(ROOT_NODE);

        for edge_index in 0..edge_count {
            // Node ids are 1-based and node 1 is already attached.
            let next_node = edge_index.saturating_add(2);
            let (source, destination) = if next_node <= node_count {
                self.draw_fresh_pair(edge_index, &used, rng, |rng| {
                    (next_node, pick_attached(&attached, rng))
                })?
            } else {
                self.draw_fresh_pair(edge_index, &used, rng, |rng| {
                    let destination = pick_attached(&attached, rng);
                    (pick_attached(&attached, rng), destination)
                })?
            };
            used.insert(source, destination);
            edges.push(Edge::new(source, destination));
            attached.push(source);
        }

        if let Some(range) = request.weights() {
            assign_weights(&mut edges, range, rng);
        }

        info!(edges = edges.len(), "graph generation completed");
        Ok(edges)
    }

    fn draw_fresh_pair<R, F>(
        &self,
        edge_index: usize,
        used: &UsedPairs,
        rng: &mut R,
        mut draw: F,
    ) -> Result<(NodeId, NodeId)>
    where
        R: Rng + ?Sized,
        F: FnMut(&mut R) -> (NodeId, NodeId),
    {
        let budget = self.params.max_attempts_per_edge();
        for _ in 0..budget {
            let (source, destination) = draw(rng);
            if used.accepts(source, destination) {
                return Ok((source, destination));
            }
        }
        Err(GraphError::GenerationFailed {
            edge_index,
            attempts: budget,
        })
    }
}

/// Per-run working storage, reserved up front so an unsatisfiable edge
/// count fails before any drawing starts.
struct Buffers {
    attached: Vec<NodeId>,
    used: UsedPairs,
    edges: Vec<Edge>,
}

impl Buffers {
    fn reserve(edge_count: usize) -> Result<Self> {
        let exceeded = |_: TryReserveError| GraphError::CapacityExceeded { edges: edge_count };
        let mut edges = Vec::new();
        edges.try_reserve_exact(edge_count).map_err(exceeded)?;
        let mut attached = Vec::new();
        attached
            .try_reserve_exact(edge_count.saturating_add(1))
            .map_err(exceeded)?;
        let used = UsedPairs::try_with_capacity(edge_count).map_err(exceeded)?;
        Ok(Self {
            attached,
            used,
            edges,
        })
    }
}

fn pick_attached<R: Rng + ?Sized>(attached: &[NodeId], rng: &mut R) -> NodeId {
    attached.choose(rng).copied().unwrap_or(ROOT_NODE)
}

fn assign_weights<R: Rng + ?Sized>(edges: &mut [Edge], range: WeightRange, rng: &mut R) {
    for edge in edges {
        *edge = edge.with_weight(rng.gen_range(range.as_range()));
    }
}

/// Validates raw parameters and generates a graph with OS entropy.
///
/// `weights` carries `(min_weight, max_weight)` for weighted graphs.
///
/// # Errors
/// Returns [`GraphError::InvalidNodeCount`] for zero nodes,
/// [`GraphError::InvalidWeightRange`] for inverted bounds,
/// [`GraphError::CapacityExceeded`] for edge counts too large to store, and
/// [`GraphError::GenerationFailed`] when generation exhausts its budget.
///
/// # Examples
/// ```
/// use randgraph_core::generate_graph;
///
/// let edges = generate_graph(5, 4, Some((10, 10))).expect("generation succeeds");
/// assert_eq!(edges.len(), 4);
/// assert!(edges.iter().all(|edge| edge.weight() == Some(10)));
/// ```
pub fn generate_graph(
    node_count: usize,
    requested_edges: usize,
    weights: Option<(Weight, Weight)>,
) -> Result<Vec<Edge>> {
    let builder = GraphRequestBuilder::new()
        .with_nodes(node_count)
        .with_edges(requested_edges);
    let builder = match weights {
        Some((min, max)) => builder.with_weight_bounds(min, max),
        None => builder,
    };
    RandomGraphGenerator::default().generate(&builder.build()?)
}
