//! Edge records exchanged between the generator and its consumers.

use std::fmt;

/// 1-based node identifier.
pub type NodeId = usize;

/// Integer edge weight.
pub type Weight = i64;

/// A single generated or parsed link between two nodes.
///
/// Links are stored as given; the unordered identity used for duplicate
/// detection is available via [`Edge::key`].
///
/// # Examples
/// ```
/// use randgraph_core::Edge;
///
/// let edge = Edge::new(3, 1).with_weight(7);
/// assert_eq!(edge.key(), (1, 3));
/// assert_eq!(edge.to_string(), "3 1 7");
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    source: NodeId,
    destination: NodeId,
    weight: Option<Weight>,
}

impl Edge {
    /// Creates an unweighted edge.
    #[must_use]
    pub const fn new(source: NodeId, destination: NodeId) -> Self {
        Self {
            source,
            destination,
            weight: None,
        }
    }

    /// Attaches `weight` to the edge.
    #[must_use]
    pub const fn with_weight(mut self, weight: Weight) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Returns the node the edge starts from.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> NodeId { self.source }

    /// Returns the node the edge points to.
    #[must_use]
    #[rustfmt::skip]
    pub const fn destination(&self) -> NodeId { self.destination }

    /// Returns the weight, or `None` for unweighted edges.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> Option<Weight> { self.weight }

    /// Returns `true` when both endpoints are the same node.
    #[must_use]
    pub const fn is_self_loop(&self) -> bool {
        self.source == self.destination
    }

    /// Returns the endpoints in canonical `(smaller, larger)` order.
    #[must_use]
    pub const fn key(&self) -> (NodeId, NodeId) {
        canonical_pair(self.source, self.destination)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.source, self.destination)?;
        if let Some(weight) = self.weight {
            write!(f, " {weight}")?;
        }
        Ok(())
    }
}

pub(crate) const fn canonical_pair(left: NodeId, right: NodeId) -> (NodeId, NodeId) {
    if left <= right {
        (left, right)
    } else {
        (right, left)
    }
}

/// Maximum number of edges in a simple undirected graph on `node_count`
/// nodes, `n * (n - 1) / 2`, saturating at `usize::MAX`.
///
/// # Examples
/// ```
/// use randgraph_core::max_simple_edges;
///
/// assert_eq!(max_simple_edges(0), 0);
/// assert_eq!(max_simple_edges(1), 0);
/// assert_eq!(max_simple_edges(4), 6);
/// ```
#[must_use]
pub const fn max_simple_edges(node_count: usize) -> usize {
    let Some(lower) = node_count.checked_sub(1) else {
        return 0;
    };
    // One of n and n - 1 is even, so halve that one before multiplying.
    let (even, other) = if node_count % 2 == 0 {
        (node_count, lower)
    } else {
        (lower, node_count)
    };
    match (even / 2).checked_mul(other) {
        Some(max) => max,
        None => usize::MAX,
    }
}
