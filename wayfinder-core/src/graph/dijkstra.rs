//! Single-pair shortest paths with Dijkstra's algorithm.

use std::{
    cmp::{Ordering, Reverse},
    collections::BinaryHeap,
    sync::Arc,
};

use tracing::{debug, instrument};

use super::{Graph, NodeId};
use crate::error::GraphError;

/// Minimum-weight path between two locations.
#[derive(Clone, Debug, PartialEq)]
pub struct ShortestPath {
    distance: f64,
    path: Vec<Arc<str>>,
}

impl ShortestPath {
    /// Returns the summed weight of the path.
    #[must_use]
    #[rustfmt::skip]
    pub fn distance(&self) -> f64 { self.distance }

    /// Returns the nodes from source to target, both inclusive.
    #[must_use]
    #[rustfmt::skip]
    pub fn path(&self) -> &[Arc<str>] { &self.path }

    /// Consumes the result, returning the node sequence.
    #[must_use]
    pub fn into_path(self) -> Vec<Arc<str>> {
        self.path
    }
}

/// Tentative distance queued for a node.
///
/// Ordered by distance and then by key so equal distances pop in a
/// deterministic order.
#[derive(Debug)]
struct Frontier<'a> {
    distance: f64,
    key: &'a str,
    node: NodeId,
}

impl PartialEq for Frontier<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier<'_> {}

impl Ord for Frontier<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.key.cmp(other.key))
    }
}

impl PartialOrd for Frontier<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Graph {
    /// Computes the minimum-weight path from `source` to `target`.
    ///
    /// Uses a binary min-heap of tentative distances, discards stale heap
    /// entries and stops as soon as `target` is settled. Correct only for
    /// non-negative weights.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownNode`] when either endpoint is not
    /// registered and [`GraphError::Unreachable`] when no path exists.
    ///
    /// # Examples
    /// ```
    /// use wayfinder_core::Graph;
    ///
    /// let mut graph = Graph::undirected();
    /// graph.add_edge("A", "B", 4.0);
    /// graph.add_edge("B", "C", 1.0);
    /// graph.add_edge("A", "C", 7.0);
    /// let shortest = graph.dijkstra("A", "C").expect("C is reachable");
    /// assert_eq!(shortest.distance(), 5.0);
    /// assert_eq!(shortest.path().len(), 3);
    /// ```
    #[instrument(level = "debug", name = "graph.dijkstra", skip(self))]
    pub fn dijkstra(&self, source: &str, target: &str) -> Result<ShortestPath, GraphError> {
        let origin = self.require(source)?;
        let goal = self.require(target)?;

        let mut distances = vec![f64::INFINITY; self.node_count()];
        let mut previous: Vec<Option<NodeId>> = vec![None; self.node_count()];
        let mut heap = BinaryHeap::new();
        distances[origin] = 0.0;
        heap.push(Reverse(Frontier {
            distance: 0.0,
            key: self.key(origin),
            node: origin,
        }));

        while let Some(Reverse(entry)) = heap.pop() {
            if entry.distance > distances[entry.node] {
                continue;
            }
            if entry.node == goal {
                break;
            }
            for &(next, weight) in self.adjacent(entry.node) {
                let candidate = entry.distance + weight;
                if candidate < distances[next] {
                    distances[next] = candidate;
                    previous[next] = Some(entry.node);
                    heap.push(Reverse(Frontier {
                        distance: candidate,
                        key: self.key(next),
                        node: next,
                    }));
                }
            }
        }

        let distance = distances[goal];
        if distance == f64::INFINITY {
            return Err(GraphError::Unreachable {
                origin: Arc::clone(self.key(origin)),
                target: Arc::clone(self.key(goal)),
            });
        }

        let path = self.walk_back(goal, &previous);
        debug!(distance, hops = path.len().saturating_sub(1), "shortest path found");
        Ok(ShortestPath { distance, path })
    }

    fn walk_back(&self, goal: NodeId, previous: &[Option<NodeId>]) -> Vec<Arc<str>> {
        let mut path = Vec::new();
        let mut cursor = Some(goal);
        // Bounded by the node count so negative weights cannot loop forever.
        while let Some(node) = cursor.filter(|_| path.len() < self.node_count()) {
            path.push(Arc::clone(self.key(node)));
            cursor = previous[node];
        }
        path.reverse();
        path
    }
}
