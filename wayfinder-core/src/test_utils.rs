//! Shared test utilities for `wayfinder-core`.

use proptest::test_runner::Config as ProptestConfig;
use wayfinder_test_support::proptest_profile::ProptestRunProfile;

use crate::graph::Graph;

/// Builds a standard proptest configuration from the shared profile.
///
/// Keeps property suites aligned on the same `PROPTEST_CASES`
/// interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases);
    ProptestConfig {
        cases: profile.cases(),
        ..ProptestConfig::default()
    }
}

/// Name given to node `index` in generated graphs.
pub(crate) fn node_name(index: usize) -> String {
    format!("n{index}")
}

/// Builds an undirected graph over `node_count` nodes named by
/// [`node_name`], adding `edges` in order.
///
/// Every node is registered even when no edge touches it.
pub(crate) fn graph_from_indices(node_count: usize, edges: &[(usize, usize, u8)]) -> Graph {
    let mut graph = Graph::undirected();
    for index in 0..node_count {
        graph.add_node(&node_name(index));
    }
    for &(source, target, weight) in edges {
        graph.add_edge(&node_name(source), &node_name(target), f64::from(weight));
    }
    graph
}
