//! Validated graph-shape requests.
//!
//! [`GraphRequestBuilder`] collects the raw size and weight parameters and
//! [`GraphRequestBuilder::build`] turns them into a [`GraphRequest`] whose
//! invariants the generator relies on: at least one node, an ordered weight
//! range, and an edge count clamped to what a simple graph can hold.

use std::num::NonZeroUsize;
use std::ops::RangeInclusive;

use crate::{
    Result,
    edge::{Weight, max_simple_edges},
    error::GraphError,
};

/// Default lower weight bound.
pub const DEFAULT_MIN_WEIGHT: Weight = 1;
/// Default upper weight bound.
pub const DEFAULT_MAX_WEIGHT: Weight = 100;

/// Inclusive range weights are drawn from.
///
/// # Examples
/// ```
/// use randgraph_core::WeightRange;
///
/// let range = WeightRange::new(5, 9).expect("range is ordered");
/// assert!(range.contains(9));
/// assert!(WeightRange::new(9, 5).is_err());
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WeightRange {
    min: Weight,
    max: Weight,
}

impl WeightRange {
    /// Creates a range covering `min..=max`.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidWeightRange`] when `min > max`.
    pub const fn new(min: Weight, max: Weight) -> Result<Self> {
        if min > max {
            return Err(GraphError::InvalidWeightRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Returns the lower bound.
    #[must_use]
    pub const fn min(&self) -> Weight {
        self.min
    }

    /// Returns the upper bound.
    #[must_use]
    pub const fn max(&self) -> Weight {
        self.max
    }

    /// Returns `true` when `weight` lies within the range.
    #[must_use]
    pub const fn contains(&self, weight: Weight) -> bool {
        self.min <= weight && weight <= self.max
    }

    pub(crate) const fn as_range(&self) -> RangeInclusive<Weight> {
        self.min..=self.max
    }
}

impl Default for WeightRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_WEIGHT,
            max: DEFAULT_MAX_WEIGHT,
        }
    }
}

/// A validated request for one random connected graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GraphRequest {
    node_count: NonZeroUsize,
    requested_edges: usize,
    weights: Option<WeightRange>,
}

impl GraphRequest {
    /// Builds an unweighted request.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidNodeCount`] when `node_count` is zero.
    ///
    /// # Examples
    /// ```
    /// use randgraph_core::GraphRequest;
    ///
    /// let request = GraphRequest::new(3, 10).expect("three nodes are valid");
    /// assert_eq!(request.edge_count(), 3);
    /// assert_eq!(request.requested_edges(), 10);
    /// ```
    pub fn new(node_count: usize, requested_edges: usize) -> Result<Self> {
        GraphRequestBuilder::new()
            .with_nodes(node_count)
            .with_edges(requested_edges)
            .build()
    }

    /// Returns the number of nodes, numbered `1..=node_count`.
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.node_count.get()
    }

    /// Returns the edge count as supplied by the caller.
    #[must_use]
    pub const fn requested_edges(&self) -> usize {
        self.requested_edges
    }

    /// Returns the largest edge count a simple graph on these nodes allows.
    #[must_use]
    pub const fn max_edges(&self) -> usize {
        max_simple_edges(self.node_count.get())
    }

    /// Returns the number of edges the generator will produce.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        let max = self.max_edges();
        if self.requested_edges < max {
            self.requested_edges
        } else {
            max
        }
    }

    /// Returns `true` when the requested edge count was reduced.
    #[must_use]
    pub const fn is_clamped(&self) -> bool {
        self.requested_edges > self.max_edges()
    }

    /// Returns `true` when the edge budget covers a spanning tree, which is
    /// when the generated graph is guaranteed to be connected.
    #[must_use]
    pub const fn spans_all_nodes(&self) -> bool {
        self.edge_count().saturating_add(1) >= self.node_count.get()
    }

    /// Returns the weight range, or `None` for unweighted graphs.
    #[must_use]
    pub const fn weights(&self) -> Option<WeightRange> {
        self.weights
    }

    /// Returns `true` when generated edges carry weights.
    #[must_use]
    pub const fn is_weighted(&self) -> bool {
        self.weights.is_some()
    }
}

/// Collects raw graph-shape parameters before validation.
///
/// # Examples
/// ```
/// use randgraph_core::GraphRequestBuilder;
///
/// let request = GraphRequestBuilder::new()
///     .with_nodes(5)
///     .with_edges(4)
///     .with_weight_bounds(10, 10)
///     .build()
///     .expect("request is valid");
/// assert_eq!(request.edge_count(), 4);
/// assert!(request.is_weighted());
/// ```
#[derive(Clone, Debug)]
pub struct GraphRequestBuilder {
    node_count: usize,
    requested_edges: usize,
    weighted: bool,
    min_weight: Weight,
    max_weight: Weight,
}

impl Default for GraphRequestBuilder {
    fn default() -> Self {
        Self {
            node_count: 1,
            requested_edges: 0,
            weighted: false,
            min_weight: DEFAULT_MIN_WEIGHT,
            max_weight: DEFAULT_MAX_WEIGHT,
        }
    }
}

impl GraphRequestBuilder {
    /// Creates a builder for a single isolated node with default weights.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of nodes.
    #[must_use]
    pub const fn with_nodes(mut self, node_count: usize) -> Self {
        self.node_count = node_count;
        self
    }

    /// Sets the requested number of edges.
    #[must_use]
    pub const fn with_edges(mut self, requested_edges: usize) -> Self {
        self.requested_edges = requested_edges;
        self
    }

    /// Enables or disables weights without touching the bounds.
    #[must_use]
    pub const fn with_weighted(mut self, weighted: bool) -> Self {
        self.weighted = weighted;
        self
    }

    /// Enables weights drawn from `min..=max`.
    #[must_use]
    pub const fn with_weight_bounds(mut self, min: Weight, max: Weight) -> Self {
        self.weighted = true;
        self.min_weight = min;
        self.max_weight = max;
        self
    }

    /// Returns the configured node count.
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.node_count
    }

    /// Returns the configured edge count before clamping.
    #[must_use]
    pub const fn requested_edges(&self) -> usize {
        self.requested_edges
    }

    /// Validates the parameters and constructs a [`GraphRequest`].
    ///
    /// Weight bounds are only checked when weights are enabled.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidNodeCount`] for zero nodes and
    /// [`GraphError::InvalidWeightRange`] for inverted weight bounds.
    pub fn build(self) -> Result<GraphRequest> {
        let node_count = NonZeroUsize::new(self.node_count).ok_or(GraphError::InvalidNodeCount {
            got: self.node_count,
        })?;
        let weights = if self.weighted {
            Some(WeightRange::new(self.min_weight, self.max_weight)?)
        } else {
            None
        };
        Ok(GraphRequest {
            node_count,
            requested_edges: self.requested_edges,
            weights,
        })
    }
}
