//! Shared test utilities for `randgraph-core`.

use std::collections::HashSet;

use proptest::test_runner::Config as ProptestConfig;
use randgraph_test_support::ci::property_test_profile::ProptestRunProfile;

use crate::{edge::Edge, graph::GraphData};

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROGTEST_CASES` and
/// `RANDGRAPH_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Returns a description of the first simplicity violation in `edges`, if
/// any: a self-loop or an unordered pair seen twice.
pub(crate) fn simplicity_violation(edges: &[Edge]) -> Option<String> {
    let mut seen = HashSet::with_capacity(edges.len());
    edges.iter().enumerate().find_map(|(index, edge)| {
        if edge.is_self_loop() {
            Some(format!("edge {index}: self-loop on node {}", edge.source()))
        } else if !seen.insert(edge.key()) {
            Some(format!(
                "edge {index}: pair {:?} appears more than once",
                edge.key()
            ))
        } else {
            None
        }
    })
}

/// Returns `true` when the first `node_count - 1` edges connect every node
/// in `1..=node_count`.
pub(crate) fn prefix_spans(edges: &[Edge], node_count: usize) -> bool {
    let tree_len = node_count.saturating_sub(1);
    let Some(prefix) = edges.get(..tree_len) else {
        return false;
    };
    let graph = GraphData::from_edges(prefix.iter().copied()).with_isolated_nodes(node_count);
    graph.node_count() == node_count && graph.is_connected()
}
