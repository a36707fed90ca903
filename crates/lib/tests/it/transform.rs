//! Transform behavior end to end: flatten/hierarchize, deep clone, ensure,
//! and filter.

use datapath::{
    Node,
    transform::{Flat, clone_node, ensure, filter, flatten, hierarchize},
};

use crate::helpers::author;

#[test]
fn test_flatten_produces_leaf_paths_in_walk_order() {
    let flat = flatten(&author());
    let keys: Vec<&str> = flat.keys().map(|k| k.as_str()).collect();
    assert_eq!(
        keys,
        vec![
            "name.first",
            "name.last",
            "birth",
            "favorites.foods.0",
            "favorites.foods.1",
            "favorites.colors.0",
            "favorites.colors.1",
            "favorites.colors.2",
            "favorites.movies.0.main",
            "favorites.movies.0.year",
            "favorites.movies.1.main",
            "favorites.movies.1.year",
        ]
    );
    assert_eq!(flat.get("favorites.colors.1"), Some(&Node::Text("Cyan".into())));
}

#[test]
fn test_flatten_hierarchize_round_trip() {
    let node = author();
    assert_eq!(hierarchize(&flatten(&node)), node);
}

#[test]
fn test_hierarchize_applies_keys_in_order() {
    let mut flat = Flat::new();
    flat.insert("a.b".to_string(), Node::Int(1));
    // The later write replaces the earlier one
    flat.insert("a".to_string(), Node::Int(2));

    let node = hierarchize(&flat);
    assert_eq!(node.get_as::<i64>("a"), Some(2));
    assert!(!node.has("a.b"));
}

#[test]
fn test_deep_clone_is_independent() {
    let node = author();
    let mut copy = clone_node(&node, true);
    assert_eq!(copy, node);

    copy.set("name.first", "Someone Else");
    copy.remove("favorites.colors.0");
    assert_eq!(node.get_as::<&str>("name.first"), Some("Jeremy"));
    assert_eq!(node.get_as::<&str>("favorites.colors.0"), Some("Gray"));
}

#[test]
fn test_shallow_clone_copies_top_level() {
    let node = author();
    let mut copy = clone_node(&node, false);
    assert_eq!(copy, node);

    copy.remove("name");
    assert!(node.has("name"));
}

#[test]
fn test_ensure_repairs_missing_and_mistyped() {
    let mut node = author();

    // Present and correctly typed: untouched
    ensure(&mut node, "favorites.colors", Node::list());
    assert_eq!(node.get_as::<&str>("favorites.colors.0"), Some("Gray"));

    // Mistyped: a string where a list is needed
    node.set("favorites.colors", "oops");
    ensure(&mut node, "favorites.colors", Node::list());
    assert!(matches!(node.resolve("favorites.colors"), Some(Node::List(_))));

    // Missing: created along with intermediates
    let value = ensure(&mut node, "settings.theme", Node::Text("dark".into()));
    assert_eq!(value, &Node::Text("dark".into()));
    assert_eq!(node.get_as::<&str>("settings.theme"), Some("dark"));
}

#[test]
fn test_ensure_int_and_float_share_a_category() {
    let mut node = Node::map();
    node.set("ratio", 2i64);

    // Both are "number"; the existing integer survives a float fallback
    let value = ensure(&mut node, "ratio", Node::Float(0.5));
    assert_eq!(value, &Node::Int(2));
}

#[test]
fn test_filter_keeps_accepted_subtrees() {
    let node = author();

    // Drop the whole favorites subtree
    let filtered = filter(&node, |_, _, path, _| path != "favorites");
    assert!(!filtered.has("favorites"));
    assert_eq!(filtered.get_as::<&str>("name.first"), Some("Jeremy"));
    assert!(filtered.has("birth"));

    // The original is untouched
    assert!(node.has("favorites.movies.0.main"));
}

#[test]
fn test_filter_by_level() {
    let node = author();

    // Keep only the top level
    let filtered = filter(&node, |_, _, _, level| level == 0);
    assert!(filtered.has("name"));
    assert!(!filtered.has("name.first"));
    assert!(!filtered.has("favorites.colors"));
}

#[test]
fn test_filter_by_value() {
    let mut node = Node::map();
    node.set("scores.0", 10);
    node.set("scores.1", -3);
    node.set("scores.2", 7);
    node.set("scores.3", -1);

    let filtered = filter(&node, |_, value, _, _| {
        value.as_int().is_none_or(|n| n >= 0)
    });
    let scores = filtered.resolve("scores").unwrap().as_list().unwrap();
    assert_eq!(scores.len(), 2);
    assert_eq!(scores.get(0), Some(&Node::Int(10)));
    assert_eq!(scores.get(1), Some(&Node::Int(7)));
}

#[test]
fn test_filter_accept_all_is_identity() {
    let node = author();
    assert_eq!(filter(&node, |_, _, _, _| true), node);
}
