//! Successful query results returned by [`crate::Navigator`].
//!
//! Every report keeps the raw values for programmatic callers and renders
//! the human-readable summary through [`fmt::Display`].

use std::{fmt, sync::Arc};

use crate::{graph::Edge, mst::SpanningForest};

const ARROW: &str = " -> ";

/// Traversal strategies offered by the navigator.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TraversalKind {
    /// Breadth-first search.
    Bfs,
    /// Depth-first search.
    Dfs,
}

impl TraversalKind {
    /// Returns the short label used in rendered output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bfs => "BFS",
            Self::Dfs => "DFS",
        }
    }
}

/// A weighted shortest route between two locations.
///
/// # Examples
/// ```
/// use wayfinder_core::Navigator;
///
/// let navigator = Navigator::campus();
/// let route = navigator
///     .shortest_path("Cafeteria", "B2_GF")
///     .expect("both locations exist");
/// assert_eq!(
///     route.to_string(),
///     "Shortest path Cafeteria -> B2_GF: Cafeteria -> Stairs_B2_GF -> B2_GF (distance=3.0)"
/// );
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    pub(crate) start: Arc<str>,
    pub(crate) destination: Arc<str>,
    pub(crate) distance: f64,
    pub(crate) path: Vec<Arc<str>>,
}

impl Route {
    /// Returns the requested start location.
    #[must_use]
    #[rustfmt::skip]
    pub fn start(&self) -> &str { &self.start }

    /// Returns the requested destination.
    #[must_use]
    #[rustfmt::skip]
    pub fn destination(&self) -> &str { &self.destination }

    /// Returns the total walking cost of the route.
    #[must_use]
    #[rustfmt::skip]
    pub fn distance(&self) -> f64 { self.distance }

    /// Returns the locations from start to destination inclusive.
    #[must_use]
    #[rustfmt::skip]
    pub fn path(&self) -> &[Arc<str>] { &self.path }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Shortest path {} -> {}: {} (distance={:?})",
            self.start,
            self.destination,
            self.path.join(ARROW),
            self.distance
        )
    }
}

/// What a breadth-first traversal found out about a requested destination.
#[derive(Clone, Debug, PartialEq)]
pub enum DestinationOutcome {
    /// The destination was reached; `path` is the fewest-hop route to it.
    Reached {
        /// Requested destination.
        destination: Arc<str>,
        /// Locations from start to destination inclusive.
        path: Vec<Arc<str>>,
    },
    /// The destination exists but cannot be reached from the start.
    Unreachable {
        /// Requested destination.
        destination: Arc<str>,
    },
}

/// Visitation order of a traversal plus, for BFS, the destination outcome.
#[derive(Clone, Debug, PartialEq)]
pub struct TraversalReport {
    pub(crate) kind: TraversalKind,
    pub(crate) start: Arc<str>,
    pub(crate) order: Vec<Arc<str>>,
    pub(crate) destination: Option<DestinationOutcome>,
}

impl TraversalReport {
    /// Returns which traversal produced the report.
    #[must_use]
    #[rustfmt::skip]
    pub fn kind(&self) -> TraversalKind { self.kind }

    /// Returns the start location.
    #[must_use]
    #[rustfmt::skip]
    pub fn start(&self) -> &str { &self.start }

    /// Returns locations in visitation order.
    #[must_use]
    #[rustfmt::skip]
    pub fn order(&self) -> &[Arc<str>] { &self.order }

    /// Returns the destination outcome when one was requested.
    #[must_use]
    #[rustfmt::skip]
    pub fn destination(&self) -> Option<&DestinationOutcome> { self.destination.as_ref() }
}

impl fmt::Display for TraversalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} order: {}", self.kind.label(), self.order.join(ARROW))?;
        match &self.destination {
            Some(DestinationOutcome::Reached { destination, path }) => write!(
                f,
                "\n{} path {} -> {destination}: {} (unweighted hops)",
                self.kind.label(),
                self.start,
                path.join(ARROW)
            ),
            Some(DestinationOutcome::Unreachable { destination }) => write!(
                f,
                "\nDestination '{destination}' not reachable from '{}'",
                self.start
            ),
            None => Ok(()),
        }
    }
}

/// Minimum spanning tree (or forest) of the location graph.
#[derive(Clone, Debug, PartialEq)]
pub struct SpanningTreeReport {
    pub(crate) forest: SpanningForest,
}

impl SpanningTreeReport {
    /// Returns the underlying forest.
    #[must_use]
    #[rustfmt::skip]
    pub fn forest(&self) -> &SpanningForest { &self.forest }

    /// Returns the accepted edges.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        self.forest.edges()
    }

    /// Returns the total weight of the accepted edges.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.forest.total_weight()
    }
}

impl fmt::Display for SpanningTreeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MST total weight: {:?}", self.forest.total_weight())?;
        if !self.forest.is_tree() {
            write!(
                f,
                " (spanning forest over {} disconnected components)",
                self.forest.component_count()
            )?;
        }
        for edge in self.forest.edges() {
            write!(
                f,
                "\n{} -- {} (w={:?})",
                edge.source(),
                edge.target(),
                edge.weight()
            )?;
        }
        Ok(())
    }
}
