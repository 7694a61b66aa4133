//! Unit tests for the location name tree.

use std::collections::BTreeSet;

use proptest::prelude::*;
use rstest::rstest;

use super::LocationTree;
use crate::test_utils::suite_proptest_config;

fn sorted(tree: &LocationTree) -> Vec<&str> {
    tree.inorder().map(AsRef::as_ref).collect()
}

#[test]
fn empty_tree_finds_nothing() {
    let tree = LocationTree::new();
    assert!(tree.is_empty());
    assert_eq!(tree.depth(), 0);
    assert!(!tree.search("Library"));
    assert_eq!(tree.inorder().next(), None);
}

#[test]
fn duplicate_inserts_are_ignored() {
    let mut tree = LocationTree::new();
    assert!(tree.insert("Library"));
    assert!(!tree.insert("Library"));
    assert_eq!(tree.len(), 1);
    assert_eq!(sorted(&tree), ["Library"]);
}

#[rstest]
#[case::present("Cafeteria", true)]
#[case::lowercase("cafeteria", false)]
#[case::prefix("Cafe", false)]
#[case::empty("", false)]
fn search_is_exact_and_case_sensitive(#[case] query: &str, #[case] expected: bool) {
    let tree: LocationTree = ["Library", "Cafeteria", "Auditorium"].into_iter().collect();
    assert_eq!(tree.search(query), expected);
}

#[test]
fn inorder_uses_byte_order() {
    let tree: LocationTree = ["b", "B", "a", "A_1", "_"].into_iter().collect();
    assert_eq!(sorted(&tree), ["A_1", "B", "_", "a", "b"]);
}

#[test]
fn inorder_restarts_on_every_call() {
    let tree: LocationTree = ["m", "c", "x"].into_iter().collect();
    assert_eq!(sorted(&tree), sorted(&tree));
}

#[rstest]
#[case::balanced(&["d", "b", "f", "a", "c", "e", "g"], 3)]
#[case::ascending(&["a", "b", "c", "d"], 4)]
#[case::descending(&["d", "c", "b", "a"], 4)]
#[case::single(&["a"], 1)]
fn depth_follows_insertion_order(#[case] keys: &[&str], #[case] expected: usize) {
    let tree: LocationTree = keys.iter().copied().collect();
    assert_eq!(tree.depth(), expected);
}

#[test]
fn degenerate_insertion_order_stays_iterative() {
    let keys: Vec<String> = (0..20_000).map(|index| format!("room{index:05}")).collect();
    let tree: LocationTree = keys.iter().map(String::as_str).collect();
    assert_eq!(tree.depth(), keys.len());
    assert!(tree.search("room19999"));
    assert_eq!(tree.inorder().count(), keys.len());
}

proptest! {
    #![proptest_config(suite_proptest_config(64))]

    #[test]
    fn inorder_matches_sorted_unique_keys(keys in prop::collection::vec("[A-Za-z_0-9]{0,6}", 0..40)) {
        let tree: LocationTree = keys.iter().map(String::as_str).collect();
        let expected: Vec<&str> = keys
            .iter()
            .map(String::as_str)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        prop_assert_eq!(sorted(&tree), expected.clone());
        prop_assert_eq!(tree.len(), expected.len());
        for key in &keys {
            prop_assert!(tree.search(key));
        }
    }
}
