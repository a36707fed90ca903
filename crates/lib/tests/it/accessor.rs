//! Point operations through the public API: has/get/set/remove and the
//! hard-invariant forms.

use datapath::{DataError, Node, path};

use crate::helpers::{author, author_birth};

#[test]
fn test_presence_probes() {
    let node = author();

    assert!(node.has("name"));
    assert!(node.has("name.first"));
    assert!(node.has("favorites.movies.1.main"));
    assert!(!node.has("name.middle"));
    assert!(!node.has("favorites.movies.5"));
    assert!(!node.has("favorites.movies.0.director"));
}

#[test]
fn test_reads_never_mutate() {
    let node = author();
    let before = node.clone();

    assert!(!node.has("totally.absent.path"));
    assert!(node.get("another.missing.one").is_none());
    assert_eq!(node, before);
}

#[test]
fn test_typed_reads() {
    let node = author();

    assert_eq!(node.get_as::<&str>("name.first"), Some("Jeremy"));
    assert_eq!(node.get_as::<i64>("favorites.movies.0.year"), Some(2014));
    assert_eq!(node.get_as::<chrono::DateTime<chrono::Utc>>("birth"), Some(author_birth()));

    // Wrong type reads as absence, same as a missing path
    assert_eq!(node.get_as::<i64>("name.first"), None);
}

#[test]
fn test_fallback_reads() {
    let node = author();
    let fallback = Node::Text("Unknown".into());

    assert_eq!(node.get_or("name.first", &fallback), "Jeremy");
    assert_eq!(node.get_or("name.middle", &fallback), "Unknown");
}

#[test]
fn test_require_reports_path() {
    let node = author();

    let err = node.require("contact.email").unwrap_err();
    assert!(err.is_validation());
    assert_eq!(err.path(), Some("contact.email"));
    assert!(err.to_string().contains("contact.email"));
}

#[test]
fn test_require_with_predicate() {
    let node = author();

    let year = node
        .require_with("favorites.movies.0.year", |v| {
            v.as_int().is_some_and(|n| n > 1900)
        })
        .unwrap();
    assert_eq!(year, &2014i64);

    let err = node
        .require_with("favorites.movies.0.year", |v| {
            v.as_int().is_some_and(|n| n > 2020)
        })
        .unwrap_err();
    assert!(matches!(err, DataError::Validation { .. }));
}

#[test]
fn test_set_then_get_round_trip() {
    let mut node = Node::map();

    node.set(path!("a.b.c"), "deep");
    assert_eq!(node.get_as::<&str>("a.b.c"), Some("deep"));

    // Overwrite with a different type at the same path
    node.set("a.b.c", 42);
    assert_eq!(node.get_as::<i64>("a.b.c"), Some(42));
}

#[test]
fn test_set_builds_mixed_structure() {
    let mut node = Node::map();
    node.set("records.0.tags.0", "alpha");
    node.set("records.0.tags.1", "beta");
    node.set("records.1.tags.0", "gamma");

    assert!(matches!(node.resolve("records"), Some(Node::List(_))));
    assert!(matches!(node.resolve("records.0"), Some(Node::Map(_))));
    assert_eq!(node.get_as::<&str>("records.1.tags.0"), Some("gamma"));
}

#[test]
fn test_set_discards_incompatible_structure() {
    let mut node = author();

    // "name.first" holds a string; writing below it replaces the scalar
    node.set("name.first.preferred", "Jem");
    assert_eq!(node.get_as::<&str>("name.first.preferred"), Some("Jem"));
    assert!(node.get_as::<&str>("name.first").is_none());

    // Writing a key segment into a list replaces the list with a map
    node.set("favorites.colors.primary", "Gray");
    assert!(matches!(node.resolve("favorites.colors"), Some(Node::Map(_))));
    assert!(!node.has("favorites.colors.0"));
}

#[test]
fn test_remove_round_trip() {
    let mut node = author();

    let removed = node.remove("favorites.movies.1");
    let movie = removed.expect("movie should have been present");
    assert_eq!(movie.get_as::<&str>("main"), Some("Arrival"));
    assert!(!node.has("favorites.movies.1"));

    // Reinsert at the same location
    node.set("favorites.movies.1", movie);
    assert_eq!(node.get_as::<&str>("favorites.movies.1.main"), Some("Arrival"));
}

#[test]
fn test_remove_missing_is_silent() {
    let mut node = author();
    let before = node.clone();

    assert_eq!(node.remove("favorites.movies.9"), None);
    assert_eq!(node.remove("no.such.subtree.at.all"), None);
    assert_eq!(node, before);
}

#[test]
fn test_normalized_paths_address_same_location() {
    let mut node = Node::map();
    node.set("a.b", 1);

    assert!(node.has(".a.b"));
    assert!(node.has("a..b"));
    assert!(node.has("a.b."));
    assert_eq!(node.get_as::<i64>("..a..b.."), Some(1));
}

#[test]
fn test_path_macro_forms() {
    let node = author();

    assert!(node.has(path!("name.first")));
    assert!(node.has(path!("favorites", "movies", "0", "main")));
    assert!(node.has(path!("favorites", "movies", 0, "main")));
}
