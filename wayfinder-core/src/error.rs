//! Error types for the Wayfinder core library.
//!
//! Failures are grouped by condition: graph-level contract violations
//! ([`GraphError`]), user-facing query rejections ([`QueryError`]) and edge
//! list ingestion problems ([`EdgeListError`]), plus the union-find's own
//! [`DisjointSetError`]. Each enum exposes a stable
//! machine-readable code for logs and front-ends.

use std::{fmt, io, sync::Arc};

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Errors returned by [`crate::DisjointSet`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DisjointSetError {
    /// The key was never registered with [`crate::DisjointSet::make_set`].
    #[error("key {key} is not registered in the disjoint set")]
    UnknownKey {
        /// Debug rendering of the unregistered key.
        key: String,
    },
}

define_error_codes! {
    /// Stable codes describing [`DisjointSetError`] variants.
    enum DisjointSetErrorCode for DisjointSetError {
        /// The key was never registered.
        UnknownKey => UnknownKey { .. } => "DISJOINT_SET_UNKNOWN_KEY",
    }
}

/// An error produced by [`crate::Graph`] algorithms.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// A query referenced a node key that was never added to the graph.
    #[error("node `{key}` is not registered in the graph")]
    UnknownNode {
        /// The key that could not be resolved.
        key: Arc<str>,
    },
    /// Both endpoints exist but no path connects them.
    #[error("no path from `{origin}` to `{target}`")]
    Unreachable {
        /// Start of the requested path.
        origin: Arc<str>,
        /// End of the requested path.
        target: Arc<str>,
    },
    /// Kruskal's algorithm was requested on a directed graph.
    #[error("Kruskal requires an undirected graph.")]
    NotUndirected,
    /// The spanning forest's union-find rejected an operation.
    #[error("union-find invariant violated: {source}")]
    DisjointSet {
        /// Underlying union-find failure.
        #[source]
        source: DisjointSetError,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A query referenced an unregistered node.
        UnknownNode => UnknownNode { .. } => "GRAPH_UNKNOWN_NODE",
        /// No path connects the requested endpoints.
        Unreachable => Unreachable { .. } => "GRAPH_UNREACHABLE",
        /// Kruskal's algorithm was requested on a directed graph.
        NotUndirected => NotUndirected => "GRAPH_NOT_UNDIRECTED",
        /// The spanning forest's union-find rejected an operation.
        DisjointSet => DisjointSet { .. } => "GRAPH_DISJOINT_SET",
    }
}

impl From<DisjointSetError> for GraphError {
    fn from(source: DisjointSetError) -> Self {
        Self::DisjointSet { source }
    }
}

/// A rejected [`crate::Navigator`] query.
///
/// The `Display` output is the message shown to the person asking, so every
/// variant renders as a complete sentence without internal detail.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum QueryError {
    /// The start or destination of a route is not a known location.
    #[error("Invalid start or destination location")]
    InvalidLocation {
        /// Requested start location.
        start: Arc<str>,
        /// Requested destination.
        destination: Arc<str>,
    },
    /// Both locations exist but are not connected.
    #[error("No path found between locations")]
    NoPath {
        /// Requested start location.
        start: Arc<str>,
        /// Requested destination.
        destination: Arc<str>,
    },
    /// A traversal was requested from an unknown location.
    #[error("Invalid start location")]
    InvalidStart {
        /// Requested start location.
        start: Arc<str>,
    },
    /// A traversal destination is not a known location.
    #[error("Invalid destination location")]
    InvalidDestination {
        /// Requested destination.
        destination: Arc<str>,
    },
    /// The spanning tree could not be computed for this graph.
    #[error("{source}")]
    Mst {
        /// Structural violation reported by the graph.
        #[source]
        source: GraphError,
    },
}

define_error_codes! {
    /// Stable codes describing [`QueryError`] variants.
    enum QueryErrorCode for QueryError {
        /// The start or destination of a route is not a known location.
        InvalidLocation => InvalidLocation { .. } => "QUERY_INVALID_LOCATION",
        /// Both locations exist but are not connected.
        NoPath => NoPath { .. } => "QUERY_NO_PATH",
        /// A traversal was requested from an unknown location.
        InvalidStart => InvalidStart { .. } => "QUERY_INVALID_START",
        /// A traversal destination is not a known location.
        InvalidDestination => InvalidDestination { .. } => "QUERY_INVALID_DESTINATION",
        /// The spanning tree could not be computed for this graph.
        MstFailure => Mst { .. } => "QUERY_MST_FAILURE",
    }
}

impl QueryError {
    /// Retrieve the inner [`GraphErrorCode`] when the failure came from the
    /// spanning tree computation.
    #[must_use]
    pub const fn graph_code(&self) -> Option<GraphErrorCode> {
        match self {
            Self::Mst { source } => Some(source.code()),
            _ => None,
        }
    }
}

/// An error raised while loading or validating an edge list.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum EdgeListError {
    /// Reading from the underlying source failed.
    #[error("failed to read edge list: {source}")]
    Io {
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// A line did not contain exactly `SOURCE TARGET WEIGHT`.
    #[error("line {line}: expected `SOURCE TARGET WEIGHT`, found `{content}`")]
    MalformedLine {
        /// One-based line number.
        line: usize,
        /// The offending line, trimmed.
        content: String,
    },
    /// The weight column was not a finite, non-negative number.
    #[error("line {line}: weight `{raw}` must be a finite, non-negative number")]
    InvalidWeight {
        /// One-based line number.
        line: usize,
        /// The raw weight token.
        raw: String,
    },
    /// The edge list contained no edges.
    #[error("edge list contains no edges")]
    Empty,
}

define_error_codes! {
    /// Stable codes describing [`EdgeListError`] variants.
    enum EdgeListErrorCode for EdgeListError {
        /// Reading from the underlying source failed.
        Io => Io { .. } => "EDGE_LIST_IO",
        /// A line did not contain exactly three fields.
        MalformedLine => MalformedLine { .. } => "EDGE_LIST_MALFORMED_LINE",
        /// The weight column was invalid.
        InvalidWeight => InvalidWeight { .. } => "EDGE_LIST_INVALID_WEIGHT",
        /// The edge list contained no edges.
        Empty => Empty => "EDGE_LIST_EMPTY",
    }
}
