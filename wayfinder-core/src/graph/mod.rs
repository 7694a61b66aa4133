//! Weighted adjacency-list graph over string-keyed locations.
//!
//! Keys are opaque, case-sensitive strings shared as [`Arc<str>`]. Each key
//! is assigned a dense internal id in first-seen order; ids only index the
//! adjacency storage and never escape the crate, so every result is reported
//! in terms of keys.
//!
//! Edge weights are expected to be finite and non-negative. The graph does
//! not check this: shortest-path results are only meaningful when callers
//! honour it ([`crate::EdgeList`] validates the edges it parses).

mod dijkstra;
mod traversal;

use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use crate::error::GraphError;

pub use self::{dijkstra::ShortestPath, traversal::BfsTraversal};

/// Dense internal node identifier, assigned in first-seen order.
pub(crate) type NodeId = usize;

/// How edges added to a [`Graph`] are stored.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Orientation {
    /// Every edge is stored in both directions with the same weight.
    #[default]
    Undirected,
    /// Edges are stored only from source to target.
    Directed,
}

/// A single weighted edge between two locations.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
    source: Arc<str>,
    target: Arc<str>,
    weight: f64,
}

impl Edge {
    /// Creates an edge from `source` to `target`.
    ///
    /// # Examples
    /// ```
    /// use wayfinder_core::Edge;
    ///
    /// let edge = Edge::new("Cafeteria", "Stairs_B2_GF", 2.0);
    /// assert_eq!(edge.source(), "Cafeteria");
    /// assert_eq!(edge.weight(), 2.0);
    /// ```
    #[must_use]
    pub fn new(source: impl Into<Arc<str>>, target: impl Into<Arc<str>>, weight: f64) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight,
        }
    }

    /// Returns the key the edge starts from.
    #[must_use]
    #[rustfmt::skip]
    pub fn source(&self) -> &str { &self.source }

    /// Returns the key the edge leads to.
    #[must_use]
    #[rustfmt::skip]
    pub fn target(&self) -> &str { &self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> f64 { self.weight }
}

/// Weighted graph stored as per-node adjacency lists.
///
/// # Examples
/// ```
/// use wayfinder_core::Graph;
///
/// let mut graph = Graph::undirected();
/// graph.add_edge("A", "B", 1.0);
/// graph.add_edge("B", "C", 2.0);
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edges().len(), 2);
/// assert!(graph.contains("C"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Graph {
    orientation: Orientation,
    keys: Vec<Arc<str>>,
    ids: HashMap<Arc<str>, NodeId>,
    adjacency: Vec<Vec<(NodeId, f64)>>,
}

impl Graph {
    /// Creates an empty graph with the given orientation.
    #[must_use]
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            ..Self::default()
        }
    }

    /// Creates an empty undirected graph.
    #[must_use]
    pub fn undirected() -> Self {
        Self::new(Orientation::Undirected)
    }

    /// Returns how edges are stored.
    #[must_use]
    #[rustfmt::skip]
    pub fn orientation(&self) -> Orientation { self.orientation }

    /// Ensures `key` has an adjacency entry. Adding an existing key is a no-op.
    pub fn add_node(&mut self, key: &str) {
        self.intern(key);
    }

    /// Adds an edge, registering both endpoints if needed.
    ///
    /// Undirected graphs also record the reverse entry `target -> source`.
    /// Parallel edges are kept as separate adjacency entries.
    pub fn add_edge(&mut self, source: &str, target: &str, weight: f64) {
        let from = self.intern(source);
        let to = self.intern(target);
        self.adjacency[from].push((to, weight));
        if self.orientation == Orientation::Undirected {
            self.adjacency[to].push((from, weight));
        }
    }

    /// Returns `true` when `key` is a registered node.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.ids.contains_key(key)
    }

    /// Returns the number of registered nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.keys.len()
    }

    /// Returns the number of logical edges reported by [`Graph::edges`].
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.logical_edges().len()
    }

    /// Returns every registered key in first-seen order.
    ///
    /// The order carries no algorithmic meaning; sort it when a stable
    /// presentation is required.
    #[must_use]
    pub fn nodes(&self) -> &[Arc<str>] {
        &self.keys
    }

    /// Returns the neighbours of `key` with their edge weights in insertion
    /// order, or `None` if `key` is not registered.
    pub fn neighbours(&self, key: &str) -> Option<impl Iterator<Item = (&str, f64)> + '_> {
        let id = self.id_of(key)?;
        Some(
            self.adjacency[id]
                .iter()
                .map(|&(next, weight)| (self.keys[next].as_ref(), weight)),
        )
    }

    /// Returns each logical edge exactly once.
    ///
    /// Edges are enumerated by node in first-seen order and then by
    /// adjacency order. In undirected graphs `(u, v, w)` and `(v, u, w)` are
    /// the same edge and only the first encounter is reported; parallel
    /// edges with different weights remain distinct.
    #[must_use]
    pub fn edges(&self) -> Vec<Edge> {
        self.logical_edges()
            .into_iter()
            .map(|(from, to, weight)| Edge {
                source: Arc::clone(&self.keys[from]),
                target: Arc::clone(&self.keys[to]),
                weight,
            })
            .collect()
    }

    pub(crate) fn logical_edges(&self) -> Vec<(NodeId, NodeId, f64)> {
        let mut seen = HashSet::new();
        let mut edges = Vec::new();
        for (from, neighbours) in self.adjacency.iter().enumerate() {
            for &(to, weight) in neighbours {
                if self.orientation == Orientation::Undirected {
                    let pair = if from <= to { (from, to) } else { (to, from) };
                    if !seen.insert((pair, weight_bits(weight))) {
                        continue;
                    }
                }
                edges.push((from, to, weight));
            }
        }
        edges
    }

    pub(crate) fn id_of(&self, key: &str) -> Option<NodeId> {
        self.ids.get(key).copied()
    }

    pub(crate) fn require(&self, key: &str) -> Result<NodeId, GraphError> {
        self.id_of(key)
            .ok_or_else(|| GraphError::UnknownNode { key: Arc::from(key) })
    }

    pub(crate) fn key(&self, id: NodeId) -> &Arc<str> {
        &self.keys[id]
    }

    pub(crate) fn adjacent(&self, id: NodeId) -> &[(NodeId, f64)] {
        &self.adjacency[id]
    }

    fn intern(&mut self, key: &str) -> NodeId {
        if let Some(id) = self.id_of(key) {
            return id;
        }
        let id = self.keys.len();
        let key: Arc<str> = Arc::from(key);
        self.keys.push(Arc::clone(&key));
        self.ids.insert(key, id);
        self.adjacency.push(Vec::new());
        id
    }
}

// `0.0` and `-0.0` name the same weight.
fn weight_bits(weight: f64) -> u64 {
    if weight == 0.0 { 0 } else { weight.to_bits() }
}
