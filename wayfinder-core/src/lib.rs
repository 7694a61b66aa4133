//! Wayfinder core library.
//!
//! Models a campus floor plan as a weighted location graph and answers
//! traversal, shortest-path, spanning-tree and ordered-lookup queries through
//! the [`Navigator`] facade.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod dataset;
mod error;
mod graph;
mod index;
mod mst;
mod navigator;
mod report;

#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::NavigatorBuilder,
    dataset::EdgeList,
    error::{
        DisjointSetError, DisjointSetErrorCode, EdgeListError, EdgeListErrorCode, GraphError,
        GraphErrorCode, QueryError, QueryErrorCode,
    },
    graph::{BfsTraversal, Edge, Graph, Orientation, ShortestPath},
    index::{Inorder, LocationTree},
    mst::{DisjointSet, SpanningForest},
    navigator::Navigator,
    report::{DestinationOutcome, Route, SpanningTreeReport, TraversalKind, TraversalReport},
};
