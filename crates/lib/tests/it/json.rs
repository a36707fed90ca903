//! JSON interchange exercised through the accessor surface.

use datapath::{Node, from_json, to_json, transform::flatten};
use serde_json::json;

#[test]
fn test_document_loads_and_addresses() {
    let node = from_json(json!({
        "server": {
            "host": "localhost",
            "port": 8080,
            "tls": false
        },
        "admins": ["ada", "grace"]
    }));

    assert_eq!(node.get_as::<&str>("server.host"), Some("localhost"));
    assert_eq!(node.get_as::<i64>("server.port"), Some(8080));
    assert_eq!(node.get_as::<bool>("server.tls"), Some(false));
    assert_eq!(node.get_as::<&str>("admins.1"), Some("grace"));
}

#[test]
fn test_round_trip_preserves_structure_and_order() {
    let json = json!({
        "zulu": {"z": 1},
        "alpha": [1, 2.5, null, "x"],
        "mike": true
    });
    let node = from_json(json.clone());
    assert_eq!(to_json(&node), json);

    let keys: Vec<&str> = node.as_map().unwrap().keys().map(|k| k.as_str()).collect();
    assert_eq!(keys, vec!["zulu", "alpha", "mike"]);
}

#[test]
fn test_edits_survive_serialization() {
    let mut node = from_json(json!({"config": {"retries": 3}}));
    node.set("config.retries", 5);
    node.set("config.backoff.initial_ms", 100);
    node.remove("config.retries");

    assert_eq!(
        to_json(&node),
        json!({"config": {"backoff": {"initial_ms": 100}}})
    );
}

#[test]
fn test_flatten_of_parsed_document() {
    let node = from_json(json!({
        "a": {"b": [10, 20]},
        "c": "leaf"
    }));
    let flat = flatten(&node);
    let keys: Vec<&str> = flat.keys().map(|k| k.as_str()).collect();
    assert_eq!(keys, vec!["a.b.0", "a.b.1", "c"]);
}

#[test]
fn test_serde_derives_match_json_module() {
    // Node's own Serialize/Deserialize go through the enum representation;
    // the json module is the structural mapping. Both must agree with
    // themselves round-tripping.
    let node = from_json(json!({"k": [1, {"n": true}]}));
    let encoded = serde_json::to_string(&node).unwrap();
    let decoded: Node = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, node);
}
