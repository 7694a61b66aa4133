//! Structural invariants of a Kruskal spanning forest.

use std::collections::HashMap;

use proptest::test_runner::{TestCaseError, TestCaseResult};

use super::oracle::prim_forest;
use super::strategies::MstFixture;

/// Kruskal's forest must weigh exactly as much as Prim's.
pub(super) fn run_oracle_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let forest = fixture
        .graph()
        .kruskal_mst()
        .map_err(|err| TestCaseError::fail(format!("kruskal_mst failed: {err}")))?;
    let oracle = prim_forest(fixture.node_count, &fixture.edges);

    if forest.total_weight() != oracle.total_weight
        || forest.edges().len() != oracle.edge_count
        || forest.component_count() != oracle.component_count
    {
        return Err(TestCaseError::fail(format!(
            "forest mismatch for {:?}: kruskal=({}, {} edges, {} components) oracle={oracle:?}",
            fixture.shape,
            forest.total_weight(),
            forest.edges().len(),
            forest.component_count(),
        )));
    }
    Ok(())
}

/// The forest is acyclic, has `V - C` edges, and is reproducible.
pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let forest = graph
        .kruskal_mst()
        .map_err(|err| TestCaseError::fail(format!("kruskal_mst failed: {err}")))?;

    let mut parent: HashMap<&str, &str> = HashMap::new();
    for edge in forest.edges() {
        if edge.source() == edge.target() {
            return Err(TestCaseError::fail(format!(
                "self-loop accepted at {}",
                edge.source()
            )));
        }
        let left = root(&mut parent, edge.source());
        let right = root(&mut parent, edge.target());
        if left == right {
            return Err(TestCaseError::fail(format!(
                "edge {} -- {} closes a cycle",
                edge.source(),
                edge.target()
            )));
        }
        parent.insert(right, left);
    }

    let expected = fixture.node_count - forest.component_count();
    if forest.edges().len() != expected {
        return Err(TestCaseError::fail(format!(
            "expected {expected} edges for {} components, got {}",
            forest.component_count(),
            forest.edges().len()
        )));
    }

    let again = graph
        .kruskal_mst()
        .map_err(|err| TestCaseError::fail(format!("kruskal_mst failed: {err}")))?;
    if again != forest {
        return Err(TestCaseError::fail("repeated run chose different edges"));
    }
    Ok(())
}

fn root<'a>(parent: &mut HashMap<&'a str, &'a str>, key: &'a str) -> &'a str {
    let mut current = key;
    while let Some(&next) = parent.get(current) {
        current = next;
    }
    current
}
