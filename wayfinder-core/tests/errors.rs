use std::{io, sync::Arc};

use rstest::rstest;
use wayfinder_core::{
    DisjointSetError, DisjointSetErrorCode, EdgeListError, EdgeListErrorCode, GraphError,
    GraphErrorCode, QueryError, QueryErrorCode,
};

#[rstest]
#[case(GraphError::UnknownNode { key: Arc::from("X") }, GraphErrorCode::UnknownNode)]
#[case(
    GraphError::Unreachable { origin: Arc::from("A"), target: Arc::from("B") },
    GraphErrorCode::Unreachable,
)]
#[case(GraphError::NotUndirected, GraphErrorCode::NotUndirected)]
#[case(
    GraphError::from(DisjointSetError::UnknownKey { key: "7".to_owned() }),
    GraphErrorCode::DisjointSet,
)]
fn returns_expected_graph_code(#[case] error: GraphError, #[case] expected: GraphErrorCode) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().to_string(), expected.as_str());
}

#[rstest]
#[case(
    QueryError::InvalidLocation { start: Arc::from("A"), destination: Arc::from("B") },
    QueryErrorCode::InvalidLocation,
    None,
)]
#[case(
    QueryError::NoPath { start: Arc::from("A"), destination: Arc::from("B") },
    QueryErrorCode::NoPath,
    None,
)]
#[case(QueryError::InvalidStart { start: Arc::from("A") }, QueryErrorCode::InvalidStart, None)]
#[case(
    QueryError::InvalidDestination { destination: Arc::from("B") },
    QueryErrorCode::InvalidDestination,
    None,
)]
#[case(
    QueryError::Mst { source: GraphError::NotUndirected },
    QueryErrorCode::MstFailure,
    Some(GraphErrorCode::NotUndirected),
)]
fn returns_expected_query_code(
    #[case] error: QueryError,
    #[case] expected: QueryErrorCode,
    #[case] graph_code: Option<GraphErrorCode>,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), expected.as_str());
    assert_eq!(error.graph_code(), graph_code);
}

#[rstest]
#[case(
    EdgeListError::Io { source: io::Error::other("disk gone") },
    EdgeListErrorCode::Io,
)]
#[case(
    EdgeListError::MalformedLine { line: 1, content: "A B".to_owned() },
    EdgeListErrorCode::MalformedLine,
)]
#[case(
    EdgeListError::InvalidWeight { line: 2, raw: "-1".to_owned() },
    EdgeListErrorCode::InvalidWeight,
)]
#[case(EdgeListError::Empty, EdgeListErrorCode::Empty)]
fn returns_expected_edge_list_code(
    #[case] error: EdgeListError,
    #[case] expected: EdgeListErrorCode,
) {
    assert_eq!(error.code(), expected);
}

#[test]
fn returns_expected_disjoint_set_code() {
    let error = DisjointSetError::UnknownKey {
        key: "\"ghost\"".to_owned(),
    };
    assert_eq!(error.code(), DisjointSetErrorCode::UnknownKey);
    assert_eq!(error.code().to_string(), "DISJOINT_SET_UNKNOWN_KEY");
}

#[test]
fn code_strings_are_stable() {
    assert_eq!(GraphErrorCode::UnknownNode.as_str(), "GRAPH_UNKNOWN_NODE");
    assert_eq!(QueryErrorCode::NoPath.as_str(), "QUERY_NO_PATH");
    assert_eq!(QueryErrorCode::MstFailure.as_str(), "QUERY_MST_FAILURE");
    assert_eq!(EdgeListErrorCode::InvalidWeight.as_str(), "EDGE_LIST_INVALID_WEIGHT");
    assert_eq!(DisjointSetErrorCode::UnknownKey.as_str(), "DISJOINT_SET_UNKNOWN_KEY");
}

#[test]
fn mst_failure_exposes_its_source() {
    let error = QueryError::Mst {
        source: GraphError::NotUndirected,
    };
    let source = std::error::Error::source(&error).expect("source must be attached");
    assert_eq!(source.to_string(), GraphError::NotUndirected.to_string());
}
