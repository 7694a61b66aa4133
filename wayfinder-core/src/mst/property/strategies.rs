//! Graph fixtures for MST property tests.
//!
//! Generators draw from a seeded [`SmallRng`] so every failing case can be
//! replayed from its `(shape, seed)` pair. Weights are small integers, which
//! keeps every weight sum exact in `f64`.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::graph::Graph;
use crate::test_utils::graph_from_indices;

const MIN_NODES: usize = 2;
const MAX_NODES: usize = 24;

/// Topology families exercised by the property suites.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum GraphShape {
    /// Random edges with weights spread over a wide range.
    Scattered,
    /// Random edges drawing from a pool of at most three weights.
    Tied,
    /// A random spanning path plus a few chords.
    Sparse,
    /// Two to four components with no edges between them.
    Disconnected,
}

/// Generated input with enough context to diagnose a failure.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    pub node_count: usize,
    pub edges: Vec<(usize, usize, u8)>,
    pub shape: GraphShape,
}

impl MstFixture {
    pub(super) fn graph(&self) -> Graph {
        graph_from_indices(self.node_count, &self.edges)
    }
}

fn shape_strategy() -> impl Strategy<Value = GraphShape> {
    prop_oneof![
        1 => Just(GraphShape::Scattered),
        2 => Just(GraphShape::Tied),
        1 => Just(GraphShape::Sparse),
        1 => Just(GraphShape::Disconnected),
    ]
}

pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (shape_strategy(), any::<u64>()).prop_map(|(shape, seed)| generate_fixture(shape, seed))
}

pub(super) fn generate_fixture(shape: GraphShape, seed: u64) -> MstFixture {
    let mut rng = SmallRng::seed_from_u64(seed);
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let edges = match shape {
        GraphShape::Scattered => random_edges(&mut rng, 0..node_count, |r| r.gen_range(0..=200)),
        GraphShape::Tied => {
            let pool: Vec<u8> = (0..rng.gen_range(1..=3))
                .map(|_| rng.gen_range(1..=10))
                .collect();
            random_edges(&mut rng, 0..node_count, move |r| {
                pool[r.gen_range(0..pool.len())]
            })
        }
        GraphShape::Sparse => sparse_edges(&mut rng, node_count),
        GraphShape::Disconnected => {
            let cut = rng.gen_range(1..node_count);
            let mut edges = random_edges(&mut rng, 0..cut, |r| r.gen_range(0..=50));
            edges.extend(random_edges(&mut rng, cut..node_count, |r| {
                r.gen_range(0..=50)
            }));
            edges
        }
    };
    MstFixture {
        node_count,
        edges,
        shape,
    }
}

fn random_edges(
    rng: &mut SmallRng,
    nodes: std::ops::Range<usize>,
    mut weight: impl FnMut(&mut SmallRng) -> u8,
) -> Vec<(usize, usize, u8)> {
    let probability = rng.gen_range(0.1..0.6);
    let mut edges = Vec::new();
    for source in nodes.clone() {
        for target in nodes.clone().filter(|&target| target > source) {
            if rng.gen_bool(probability) {
                edges.push((source, target, weight(rng)));
            }
        }
    }
    edges
}

fn sparse_edges(rng: &mut SmallRng, node_count: usize) -> Vec<(usize, usize, u8)> {
    let mut order: Vec<usize> = (0..node_count).collect();
    for index in (1..order.len()).rev() {
        order.swap(index, rng.gen_range(0..=index));
    }
    let mut edges: Vec<_> = order
        .windows(2)
        .map(|pair| (pair[0], pair[1], rng.gen_range(0..=100)))
        .collect();
    for _ in 0..node_count / 2 {
        let source = rng.gen_range(0..node_count);
        let target = rng.gen_range(0..node_count);
        edges.push((source, target, rng.gen_range(0..=100)));
    }
    edges
}
