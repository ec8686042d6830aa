//! Tests for leaf traversal over metadata trees

use rstest::rstest;

use rdm_deposit::domain::{identity, visit, visit_leaves, Node, Scalar};
use rdm_deposit::util::testing::init_test_setup;

fn parse(json: &str) -> Node {
    serde_json::from_str(json).expect("valid json")
}

/// Independent leaf count over the serde_json value model.
fn reference_leaf_count(value: &serde_json::Value) -> usize {
    match value {
        serde_json::Value::Object(map) => map.values().map(reference_leaf_count).sum(),
        serde_json::Value::Array(items) => items.iter().map(reference_leaf_count).sum(),
        _ => 1,
    }
}

#[rstest]
#[case("null")]
#[case("\"only\"")]
#[case("[]")]
#[case("{}")]
#[case("[1, [2, [3, [4, []]]], {\"a\": {\"b\": {}}}]")]
#[case(r#"{"metadata": {"title": "T", "creators": [{"name": "A"}, {"name": "B", "ids": [1, 2]}]}, "draft": true}"#)]
fn given_document_when_visiting_then_invocations_equal_leaf_count(#[case] json: &str) {
    init_test_setup();
    let node = parse(json);
    let expected = reference_leaf_count(&serde_json::from_str(json).unwrap());

    let mut calls = 0;
    visit(&node, |_| calls += 1);

    assert_eq!(calls, expected);
    assert_eq!(node.leaf_count(), expected);
    assert_eq!(node.leaves().len(), expected);
}

#[test]
fn given_sequence_when_visiting_then_order_is_a_b_c() {
    let node = parse(r#"["a", "b", "c"]"#);
    let mut seen = Vec::new();
    node.visit(|leaf| seen.push(leaf.to_string()));
    assert_eq!(seen, vec!["a", "b", "c"]);
}

#[test]
fn given_mapping_when_visiting_then_follows_document_order_not_key_order() {
    let node = parse(r#"{"zeta": 1, "alpha": 2, "mid": {"y": 3, "b": 4}}"#);
    let mut seen = Vec::new();
    node.visit(|leaf| seen.push(leaf.clone()));
    assert_eq!(
        seen,
        vec![
            Scalar::Integer(1),
            Scalar::Integer(2),
            Scalar::Integer(3),
            Scalar::Integer(4)
        ]
    );
}

#[test]
fn given_identity_when_visiting_then_no_observable_change() {
    let node = parse(r#"{"a": [1, null, {"b": "c"}]}"#);
    let snapshot = node.clone();
    visit(&node, identity);
    assert_eq!(node, snapshot);
    visit_leaves(&node);
    assert_eq!(node, snapshot);
}

#[test]
fn given_null_values_when_visiting_then_null_is_a_leaf() {
    let node = parse(r#"{"a": null, "b": [null]}"#);
    let mut nulls = 0;
    node.visit(|leaf| {
        if *leaf == Scalar::Null {
            nulls += 1
        }
    });
    assert_eq!(nulls, 2);
    assert!(Node::null().is_leaf());
    assert!(!Node::null().is_container());
}

#[test]
fn given_error_in_callback_when_try_visiting_then_propagates_unchanged() {
    #[derive(Debug, PartialEq)]
    struct Rejected(i64);

    let node = parse("[1, 2, 3, 4]");
    let mut visited = Vec::new();
    let result = node.try_visit(|leaf| {
        if let Scalar::Integer(i) = leaf {
            visited.push(*i);
            if *i == 3 {
                return Err(Rejected(*i));
            }
        }
        Ok(())
    });

    assert_eq!(result, Err(Rejected(3)));
    assert_eq!(visited, vec![1, 2, 3]);
}

#[test]
fn given_deep_tree_when_visiting_then_terminates() {
    let mut node = Node::leaf("bottom");
    for i in 0..500 {
        node = if i % 2 == 0 {
            Node::sequence([node])
        } else {
            Node::mapping([("k", node)])
        };
    }
    assert_eq!(node.leaf_count(), 1);
    assert_eq!(node.depth(), 500);
}

#[test]
fn given_custom_separator_when_visiting_with_path_then_uses_it() {
    let node = parse(r#"{"metadata": {"projects": [{"title": "X"}]}}"#);
    let mut paths = Vec::new();
    node.visit_with_path("/", |path, _| paths.push(path.to_string()));
    assert_eq!(paths, vec!["metadata/projects/0/title"]);
}
