//! Prim's algorithm as an independent oracle for spanning forest weights.
//!
//! Runs an O(V^2) Prim from every node not yet covered, so it shares no code
//! or data structure with the Kruskal implementation under test.

/// Weight and shape of the minimum spanning forest computed by Prim.
#[derive(Clone, Debug, PartialEq)]
pub(super) struct OracleForest {
    pub total_weight: f64,
    pub edge_count: usize,
    pub component_count: usize,
}

pub(super) fn prim_forest(node_count: usize, edges: &[(usize, usize, u8)]) -> OracleForest {
    let mut lightest = vec![vec![None::<u8>; node_count]; node_count];
    for &(source, target, weight) in edges {
        if source == target {
            continue;
        }
        for (from, to) in [(source, target), (target, source)] {
            let slot = &mut lightest[from][to];
            *slot = Some(slot.map_or(weight, |current| current.min(weight)));
        }
    }

    let mut covered = vec![false; node_count];
    let mut forest = OracleForest {
        total_weight: 0.0,
        edge_count: 0,
        component_count: 0,
    };
    for root in 0..node_count {
        if covered[root] {
            continue;
        }
        forest.component_count += 1;
        let mut best: Vec<Option<u8>> = lightest[root].clone();
        covered[root] = true;
        loop {
            let next = (0..node_count)
                .filter(|&node| !covered[node])
                .filter_map(|node| best[node].map(|weight| (weight, node)))
                .min();
            let Some((weight, node)) = next else {
                break;
            };
            covered[node] = true;
            forest.total_weight += f64::from(weight);
            forest.edge_count += 1;
            for (other, candidate) in lightest[node].iter().enumerate() {
                if let Some(candidate) = *candidate {
                    best[other] = Some(best[other].map_or(candidate, |w| w.min(candidate)));
                }
            }
        }
    }
    forest
}
