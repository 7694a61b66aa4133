//! Minimum spanning tree (MST) construction with Kruskal's algorithm.
//!
//! Logical edges are sorted by ascending weight with a stable sort, so edges
//! of equal weight keep the order in which [`Graph::edges`] enumerates them.
//! That order is the tie-break policy. Each edge is accepted when its
//! endpoints still lie in different components of a fresh [`DisjointSet`].
//!
//! A disconnected graph yields a minimum spanning forest; callers should
//! consult [`SpanningForest::is_tree`] before calling the result a tree.

mod union_find;

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::{
    error::GraphError,
    graph::{Edge, Graph, Orientation},
};

pub use self::union_find::DisjointSet;

/// The output of a minimum spanning forest computation.
///
/// When the input graph is connected, the forest is a minimum spanning tree.
#[derive(Clone, Debug, PartialEq)]
pub struct SpanningForest {
    edges: Vec<Edge>,
    total_weight: f64,
    component_count: usize,
}

impl SpanningForest {
    /// Returns the accepted edges in acceptance order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the summed weight of the accepted edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_weight(&self) -> f64 { self.total_weight }

    /// Returns the number of connected components spanned by the forest.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.component_count == 1
    }
}

impl Graph {
    /// Computes a minimum spanning forest using Kruskal's algorithm.
    ///
    /// # Errors
    /// Returns [`GraphError::NotUndirected`] for directed graphs.
    ///
    /// # Examples
    /// ```
    /// use wayfinder_core::Graph;
    ///
    /// let mut graph = Graph::undirected();
    /// graph.add_edge("A", "B", 1.0);
    /// graph.add_edge("B", "C", 2.0);
    /// graph.add_edge("A", "C", 3.0);
    /// let forest = graph.kruskal_mst().expect("graph is undirected");
    /// assert!(forest.is_tree());
    /// assert_eq!(forest.edges().len(), 2);
    /// assert_eq!(forest.total_weight(), 3.0);
    /// ```
    #[instrument(level = "debug", name = "graph.kruskal_mst", skip(self))]
    pub fn kruskal_mst(&self) -> Result<SpanningForest, GraphError> {
        if self.orientation() != Orientation::Undirected {
            return Err(GraphError::NotUndirected);
        }

        let mut sets = DisjointSet::new();
        for id in 0..self.node_count() {
            sets.make_set(id);
        }

        let mut candidates = self.logical_edges();
        candidates.sort_by(|left, right| left.2.total_cmp(&right.2));

        let mut edges = Vec::with_capacity(self.node_count().saturating_sub(1));
        let mut total_weight = 0.0;
        for (from, to, weight) in candidates {
            if sets.union(&from, &to)? {
                total_weight += weight;
                edges.push(Edge::new(
                    Arc::clone(self.key(from)),
                    Arc::clone(self.key(to)),
                    weight,
                ));
            }
        }

        debug!(
            accepted = edges.len(),
            components = sets.component_count(),
            total_weight,
            "spanning forest computed"
        );
        Ok(SpanningForest {
            edges,
            total_weight,
            component_count: sets.component_count(),
        })
    }
}


#[cfg(test)]
mod property;
