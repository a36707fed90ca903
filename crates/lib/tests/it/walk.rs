//! Walker contract: depth-first order, pruning, and the parent/path/level
//! arguments.

use datapath::Node;

use crate::helpers::author;

#[test]
fn test_walk_visits_every_child_once() {
    let node = author();
    let mut paths: Vec<String> = Vec::new();
    node.walk(|_, _, path, _| {
        paths.push(path.to_string());
        false
    });

    let mut deduped = paths.clone();
    deduped.dedup();
    assert_eq!(paths, deduped, "no path should be visited twice");

    // Every visited path resolves back to a node
    for path in &paths {
        assert!(node.resolve(path.as_str()).is_some(), "path {path}");
    }
}

#[test]
fn test_walk_is_deterministic() {
    let node = author();
    let collect = || {
        let mut paths: Vec<String> = Vec::new();
        node.walk(|_, _, path, _| {
            paths.push(path.to_string());
            false
        });
        paths
    };
    assert_eq!(collect(), collect());
}

#[test]
fn test_walk_depth_first_parent_before_children() {
    let node = author();
    let mut paths: Vec<String> = Vec::new();
    node.walk(|_, _, path, _| {
        paths.push(path.to_string());
        false
    });

    for (i, path) in paths.iter().enumerate() {
        if let Some((parent, _)) = path.rsplit_once('.') {
            let parent_pos = paths
                .iter()
                .position(|p| p == parent)
                .expect("parent should be visited");
            assert!(parent_pos < i, "{parent} should precede {path}");
        }
    }
}

#[test]
fn test_walk_level_counts_dots() {
    let node = author();
    node.walk(|_, _, path, level| {
        assert_eq!(level, path.matches('.').count(), "path {path}");
        false
    });
}

#[test]
fn test_pruning_skips_entire_subtree() {
    let node = author();
    let mut visited: Vec<String> = Vec::new();
    node.walk(|_, _, path, _| {
        visited.push(path.to_string());
        path.ends_with("movies")
    });

    assert!(visited.contains(&"favorites.movies".to_string()));
    assert!(!visited.iter().any(|p| p.starts_with("favorites.movies.")));
    // Siblings of the pruned subtree are unaffected
    assert!(visited.contains(&"favorites.colors.2".to_string()));
}

#[test]
fn test_pruning_scalars_changes_nothing() {
    let node = author();
    let count = |prune_scalars: bool| {
        let mut n = 0usize;
        node.walk(|_, value, _, _| {
            n += 1;
            prune_scalars && value.is_scalar()
        });
        n
    };
    // Scalars have no children, so "handling" them cannot hide anything
    assert_eq!(count(false), count(true));
}

#[test]
fn test_walk_parent_contains_value() {
    let node = author();
    node.walk(|parent, value, path, _| {
        let key = path.rsplit_once('.').map_or(path, |(_, key)| key);
        let through_parent = match parent {
            Node::Map(map) => map.get(key),
            Node::List(list) => list.get(key.parse().unwrap()),
            _ => panic!("parent must be a container"),
        };
        assert_eq!(through_parent, Some(value), "path {path}");
        false
    });
}

#[test]
fn test_empty_containers_yield_no_visits() {
    let mut count = 0usize;
    Node::map().walk(|_, _, _, _| {
        count += 1;
        false
    });
    Node::list().walk(|_, _, _, _| {
        count += 1;
        false
    });
    assert_eq!(count, 0);
}
