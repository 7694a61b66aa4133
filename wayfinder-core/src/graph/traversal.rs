//! Unweighted traversals: breadth-first and depth-first search.

use std::{
    collections::{HashMap, VecDeque},
    sync::Arc,
};

use tracing::{instrument, trace};

use super::{Graph, NodeId};
use crate::error::GraphError;

/// Result of a breadth-first traversal.
///
/// Holds the visitation order and, for every reached node, the node it was
/// discovered from (`None` for the start). The parent links describe a
/// fewest-hop path from the start to any reached node.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BfsTraversal {
    order: Vec<Arc<str>>,
    parents: HashMap<Arc<str>, Option<Arc<str>>>,
}

impl BfsTraversal {
    /// Returns nodes in the order they were dequeued.
    #[must_use]
    #[rustfmt::skip]
    pub fn order(&self) -> &[Arc<str>] { &self.order }

    /// Returns the discovery parent of every reached node.
    #[must_use]
    #[rustfmt::skip]
    pub fn parents(&self) -> &HashMap<Arc<str>, Option<Arc<str>>> { &self.parents }

    /// Returns `true` when `key` was reached from the start.
    #[must_use]
    pub fn reached(&self, key: &str) -> bool {
        self.parents.contains_key(key)
    }

    /// Reconstructs the fewest-hop path from the start to `destination`.
    ///
    /// Returns `None` when `destination` was not reached.
    ///
    /// # Examples
    /// ```
    /// use wayfinder_core::Graph;
    ///
    /// let mut graph = Graph::undirected();
    /// graph.add_edge("A", "B", 9.0);
    /// graph.add_edge("B", "C", 9.0);
    /// graph.add_edge("A", "C", 50.0);
    /// let bfs = graph.bfs("A").expect("A is registered");
    /// let path = bfs.path_to("C").expect("C is reachable");
    /// assert_eq!(path.len(), 2);
    /// ```
    #[must_use]
    pub fn path_to(&self, destination: &str) -> Option<Vec<Arc<str>>> {
        let (mut key, mut parent) = self.parents.get_key_value(destination)?;
        let mut path = vec![Arc::clone(key)];
        while let Some(previous) = parent {
            (key, parent) = self.parents.get_key_value(previous.as_ref())?;
            path.push(Arc::clone(key));
        }
        path.reverse();
        Some(path)
    }
}

impl Graph {
    /// Breadth-first traversal from `start` using a FIFO frontier.
    ///
    /// Neighbours are enqueued in adjacency order and each node is visited at
    /// most once.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownNode`] when `start` is not registered.
    #[instrument(level = "debug", name = "graph.bfs", skip(self))]
    pub fn bfs(&self, start: &str) -> Result<BfsTraversal, GraphError> {
        let origin = self.require(start)?;
        let mut visited = vec![false; self.node_count()];
        let mut parent: Vec<Option<NodeId>> = vec![None; self.node_count()];
        let mut frontier = VecDeque::from([origin]);
        let mut order = Vec::new();
        visited[origin] = true;

        while let Some(node) = frontier.pop_front() {
            order.push(node);
            for &(next, _) in self.adjacent(node) {
                if !visited[next] {
                    visited[next] = true;
                    parent[next] = Some(node);
                    frontier.push_back(next);
                }
            }
        }

        trace!(visited = order.len(), "breadth-first traversal finished");
        let parents = order
            .iter()
            .map(|&node| {
                let key = Arc::clone(self.key(node));
                (key, parent[node].map(|up| Arc::clone(self.key(up))))
            })
            .collect();
        Ok(BfsTraversal {
            order: order.into_iter().map(|node| Arc::clone(self.key(node))).collect(),
            parents,
        })
    }

    /// Depth-first traversal from `start` using an explicit stack.
    ///
    /// Neighbours are pushed in reverse adjacency order so the first-inserted
    /// neighbour is explored first, matching a recursive traversal.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownNode`] when `start` is not registered.
    #[instrument(level = "debug", name = "graph.dfs", skip(self))]
    pub fn dfs(&self, start: &str) -> Result<Vec<Arc<str>>, GraphError> {
        let origin = self.require(start)?;
        let mut visited = vec![false; self.node_count()];
        let mut stack = vec![origin];
        let mut order = Vec::new();

        while let Some(node) = stack.pop() {
            if visited[node] {
                continue;
            }
            visited[node] = true;
            order.push(Arc::clone(self.key(node)));
            stack.extend(
                self.adjacent(node)
                    .iter()
                    .rev()
                    .map(|&(next, _)| next)
                    .filter(|&next| !visited[next]),
            );
        }

        trace!(visited = order.len(), "depth-first traversal finished");
        Ok(order)
    }
}
