//! Builder utilities for configuring [`Navigator`] instances.
//!
//! Selects the graph orientation and the edge list the navigator is built
//! from, validating the configuration before any structure is populated.

use crate::{dataset::EdgeList, error::EdgeListError, graph::Orientation, navigator::Navigator};

/// Configures and constructs [`Navigator`] instances.
///
/// Defaults to an undirected graph over the built-in campus floor plan.
///
/// # Examples
/// ```
/// use wayfinder_core::{NavigatorBuilder, Orientation};
///
/// let navigator = NavigatorBuilder::new()
///     .with_orientation(Orientation::Undirected)
///     .build()
///     .expect("campus plan is valid");
/// assert!(navigator.search("Library"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct NavigatorBuilder {
    orientation: Orientation,
    edges: Option<EdgeList>,
}

impl NavigatorBuilder {
    /// Creates a builder populated with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how edges are stored in the graph.
    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Returns the configured orientation.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Replaces the campus floor plan with `edges`.
    ///
    /// # Examples
    /// ```
    /// use wayfinder_core::{Edge, NavigatorBuilder};
    ///
    /// let navigator = NavigatorBuilder::new()
    ///     .with_edges([Edge::new("Gate", "Quad", 3.0)].into_iter().collect())
    ///     .build()
    ///     .expect("edge list is non-empty");
    /// assert_eq!(navigator.list_locations().len(), 2);
    /// ```
    #[must_use]
    pub fn with_edges(mut self, edges: EdgeList) -> Self {
        self.edges = Some(edges);
        self
    }

    /// Returns `true` when a replacement edge list has been supplied.
    #[must_use]
    pub fn has_custom_edges(&self) -> bool {
        self.edges.is_some()
    }

    /// Validates the configuration and constructs a [`Navigator`].
    ///
    /// # Errors
    /// Returns [`EdgeListError::Empty`] when the supplied edge list holds no
    /// edges.
    pub fn build(self) -> Result<Navigator, EdgeListError> {
        let edges = self.edges.unwrap_or_else(EdgeList::campus);
        if edges.is_empty() {
            return Err(EdgeListError::Empty);
        }
        Ok(Navigator::from_edges(self.orientation, &edges))
    }
}
