//! In-memory graph assembled from generated or parsed edges.
//!
//! [`GraphData`] is the hand-off point between the generator (or the
//! edge-list parser) and whatever consumes the graph: it keeps the distinct
//! node identifiers, the links in insertion order, and answers
//! connectivity questions treating every link as undirected.

use std::collections::{BTreeSet, HashMap};

use crate::{
    edge::{Edge, NodeId},
    edge_list::ParsedEdgeList,
    union_find::DisjointSet,
};

/// Distinct nodes plus the links between them.
///
/// # Examples
/// ```
/// use randgraph_core::{Edge, GraphData};
///
/// let graph = GraphData::from_edges([Edge::new(1, 2), Edge::new(3, 4)]);
/// assert_eq!(graph.node_count(), 4);
/// assert_eq!(graph.component_count(), 2);
/// assert!(!graph.is_connected());
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct GraphData {
    nodes: BTreeSet<NodeId>,
    edges: Vec<Edge>,
}

impl GraphData {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from `edges`, registering every endpoint.
    #[must_use]
    pub fn from_edges(edges: impl IntoIterator<Item = Edge>) -> Self {
        let mut graph = Self::new();
        for edge in edges {
            graph.insert_edge(edge);
        }
        graph
    }

    /// Builds a graph from the edges of a parsed edge list. Skipped lines
    /// contribute nothing.
    #[must_use]
    pub fn from_parsed(parsed: ParsedEdgeList) -> Self {
        Self::from_edges(parsed.into_edges())
    }

    /// Registers nodes `1..=node_count` so isolated nodes are kept.
    #[must_use]
    pub fn with_isolated_nodes(mut self, node_count: usize) -> Self {
        self.nodes.extend(1..=node_count);
        self
    }

    /// Registers `node`, returning `false` if it was already present.
    pub fn insert_node(&mut self, node: NodeId) -> bool {
        self.nodes.insert(node)
    }

    /// Appends `edge` and registers both endpoints.
    pub fn insert_edge(&mut self, edge: Edge) {
        self.nodes.insert(edge.source());
        self.nodes.insert(edge.destination());
        self.edges.push(edge);
    }

    /// Returns the distinct node identifiers in ascending order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = NodeId> + '_ {
        self.nodes.iter().copied()
    }

    /// Returns the links in insertion order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the number of distinct nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of links.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` when `node` is registered.
    #[must_use]
    pub fn contains_node(&self, node: NodeId) -> bool {
        self.nodes.contains(&node)
    }

    /// Counts connected components, ignoring link direction.
    #[must_use]
    pub fn component_count(&self) -> usize {
        let index: HashMap<NodeId, usize> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(position, &node)| (node, position))
            .collect();
        let mut components = DisjointSet::new(index.len());
        for edge in &self.edges {
            if let (Some(&source), Some(&destination)) =
                (index.get(&edge.source()), index.get(&edge.destination()))
            {
                components.union(source, destination);
            }
        }
        components.component_count()
    }

    /// Returns `true` when every node reaches every other node. The empty
    /// graph counts as connected.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.component_count() <= 1
    }
}

impl FromIterator<Edge> for GraphData {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        Self::from_edges(iter)
    }
}
