//! Query facade over the location graph and the sorted name index.
//!
//! The navigator is built once and never mutated afterwards, so a single
//! instance can be shared by any number of readers without locking.

use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::{
    dataset::EdgeList,
    error::{GraphError, QueryError},
    graph::{BfsTraversal, Graph, Orientation},
    index::LocationTree,
    report::{DestinationOutcome, Route, SpanningTreeReport, TraversalKind, TraversalReport},
};

/// Answers location queries against an immutable graph and name index.
///
/// # Examples
/// ```
/// use wayfinder_core::Navigator;
///
/// let navigator = Navigator::campus();
/// let route = navigator
///     .shortest_path("Cafeteria", "Auditorium")
///     .expect("both locations exist");
/// assert_eq!(route.distance(), 25.0);
/// assert!(navigator.search("Cafeteria"));
/// assert!(!navigator.search("NoSuchRoom"));
/// ```
#[derive(Clone, Debug)]
pub struct Navigator {
    graph: Graph,
    tree: LocationTree,
}

impl Navigator {
    /// Builds a navigator over the built-in undirected campus floor plan.
    #[must_use]
    pub fn campus() -> Self {
        Self::from_edges(Orientation::Undirected, &EdgeList::campus())
    }

    #[instrument(
        level = "debug",
        name = "navigator.build",
        skip(edges),
        fields(edges = edges.len()),
    )]
    pub(crate) fn from_edges(orientation: Orientation, edges: &EdgeList) -> Self {
        let mut graph = Graph::new(orientation);
        for edge in edges {
            graph.add_edge(edge.source(), edge.target(), edge.weight());
        }
        let tree = graph.nodes().iter().cloned().collect::<LocationTree>();
        debug!(
            nodes = graph.node_count(),
            tree_depth = tree.depth(),
            "navigator ready"
        );
        Self { graph, tree }
    }

    /// Returns the underlying graph.
    #[must_use]
    #[rustfmt::skip]
    pub fn graph(&self) -> &Graph { &self.graph }

    /// Returns the sorted name index.
    #[must_use]
    #[rustfmt::skip]
    pub fn tree(&self) -> &LocationTree { &self.tree }

    /// Returns every location name sorted ascending.
    #[must_use]
    pub fn list_locations(&self) -> Vec<Arc<str>> {
        let mut locations = self.graph.nodes().to_vec();
        locations.sort_unstable();
        locations
    }

    /// Computes the minimum-weight route from `start` to `destination`.
    ///
    /// # Errors
    /// Returns [`QueryError::InvalidLocation`] when either location is
    /// unknown and [`QueryError::NoPath`] when they are not connected.
    #[instrument(name = "navigator.shortest_path", skip(self), err(Display))]
    pub fn shortest_path(&self, start: &str, destination: &str) -> Result<Route, QueryError> {
        if !self.graph.contains(start) || !self.graph.contains(destination) {
            return Err(reject(QueryError::InvalidLocation {
                start: Arc::from(start),
                destination: Arc::from(destination),
            }));
        }

        match self.graph.dijkstra(start, destination) {
            Ok(shortest) => Ok(Route {
                start: Arc::from(start),
                destination: Arc::from(destination),
                distance: shortest.distance(),
                path: shortest.into_path(),
            }),
            Err(GraphError::Unreachable { .. }) => Err(reject(QueryError::NoPath {
                start: Arc::from(start),
                destination: Arc::from(destination),
            })),
            Err(_) => Err(reject(QueryError::InvalidLocation {
                start: Arc::from(start),
                destination: Arc::from(destination),
            })),
        }
    }

    /// Runs a traversal of the given kind from `start`.
    ///
    /// For BFS a `destination` additionally reports the fewest-hop path or
    /// that the destination is not reachable. An empty destination counts as
    /// none. DFS ignores `destination`.
    ///
    /// # Errors
    /// Returns [`QueryError::InvalidStart`] when `start` is unknown and
    /// [`QueryError::InvalidDestination`] when a BFS destination is unknown.
    #[instrument(name = "navigator.traversal", skip(self), err(Display))]
    pub fn traversal(
        &self,
        kind: TraversalKind,
        start: &str,
        destination: Option<&str>,
    ) -> Result<TraversalReport, QueryError> {
        let invalid_start = || {
            reject(QueryError::InvalidStart {
                start: Arc::from(start),
            })
        };

        match kind {
            TraversalKind::Bfs => {
                let bfs = self.graph.bfs(start).map_err(|_| invalid_start())?;
                let destination = destination
                    .filter(|target| !target.is_empty())
                    .map(|target| self.locate(&bfs, target))
                    .transpose()?;
                Ok(TraversalReport {
                    kind,
                    start: Arc::from(start),
                    order: bfs.order().to_vec(),
                    destination,
                })
            }
            TraversalKind::Dfs => {
                let order = self.graph.dfs(start).map_err(|_| invalid_start())?;
                Ok(TraversalReport {
                    kind,
                    start: Arc::from(start),
                    order,
                    destination: None,
                })
            }
        }
    }

    /// Breadth-first traversal; see [`Navigator::traversal`].
    ///
    /// # Errors
    /// As for [`Navigator::traversal`].
    pub fn breadth_first(
        &self,
        start: &str,
        destination: Option<&str>,
    ) -> Result<TraversalReport, QueryError> {
        self.traversal(TraversalKind::Bfs, start, destination)
    }

    /// Depth-first traversal; see [`Navigator::traversal`].
    ///
    /// # Errors
    /// Returns [`QueryError::InvalidStart`] when `start` is unknown.
    pub fn depth_first(&self, start: &str) -> Result<TraversalReport, QueryError> {
        self.traversal(TraversalKind::Dfs, start, None)
    }

    /// Computes the minimum spanning tree of the location graph.
    ///
    /// A disconnected graph yields a spanning forest, which the report
    /// labels as such.
    ///
    /// # Errors
    /// Returns [`QueryError::Mst`] when the graph is directed.
    #[instrument(name = "navigator.minimum_spanning_tree", skip(self), err(Display))]
    pub fn minimum_spanning_tree(&self) -> Result<SpanningTreeReport, QueryError> {
        self.graph
            .kruskal_mst()
            .map(|forest| SpanningTreeReport { forest })
            .map_err(|source| reject(QueryError::Mst { source }))
    }

    /// Returns `true` when `location` is a known location name.
    #[must_use]
    pub fn search(&self, location: &str) -> bool {
        let found = self.tree.search(location);
        debug!(location, found, "location lookup");
        found
    }

    /// Returns every location name in ascending order, read from the index.
    #[must_use]
    pub fn sorted_locations(&self) -> Vec<Arc<str>> {
        self.tree.inorder().cloned().collect()
    }

    fn locate(
        &self,
        bfs: &BfsTraversal,
        destination: &str,
    ) -> Result<DestinationOutcome, QueryError> {
        if !self.graph.contains(destination) {
            return Err(reject(QueryError::InvalidDestination {
                destination: Arc::from(destination),
            }));
        }
        let destination: Arc<str> = Arc::from(destination);
        Ok(match bfs.path_to(&destination) {
            Some(path) => DestinationOutcome::Reached { destination, path },
            None => DestinationOutcome::Unreachable { destination },
        })
    }
}

fn reject(error: QueryError) -> QueryError {
    warn!(code = error.code().as_str(), error = %error, "query rejected");
    error
}
