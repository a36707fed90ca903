//! Conversions between [`Node`] trees and `serde_json::Value`.
//!
//! JSON is the interchange format for callers that materialize their data
//! from documents (and for the `datapath` CLI). The mapping is structural:
//! objects become maps (key order preserved), arrays become lists, and JSON
//! scalars become the matching node scalars. There is no date syntax in
//! JSON, so [`Node::Date`] serializes to its RFC 3339 string and never
//! round-trips back into a date — callers that need date leaves construct
//! them directly.

use crate::node::{List, Map, Node};

/// Converts a JSON value into a node tree.
pub fn from_json(value: serde_json::Value) -> Node {
    match value {
        serde_json::Value::Null => Node::Null,
        serde_json::Value::Bool(b) => Node::Bool(b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Node::Int(i)
            } else {
                Node::Float(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        serde_json::Value::String(s) => Node::Text(s),
        serde_json::Value::Array(items) => {
            Node::List(items.into_iter().map(from_json).collect::<List>())
        }
        serde_json::Value::Object(entries) => Node::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key, from_json(value)))
                .collect::<Map>(),
        ),
    }
}

/// Converts a node tree into a JSON value.
pub fn to_json(node: &Node) -> serde_json::Value {
    match node {
        Node::Null => serde_json::Value::Null,
        Node::Bool(b) => serde_json::Value::Bool(*b),
        Node::Int(n) => serde_json::Value::from(*n),
        Node::Float(x) => {
            // JSON has no NaN/Infinity; fall back to null like serde_json does
            serde_json::Number::from_f64(*x)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null)
        }
        Node::Text(s) => serde_json::Value::String(s.clone()),
        Node::Date(d) => serde_json::Value::String(d.to_rfc3339()),
        Node::Map(map) => serde_json::Value::Object(
            map.iter()
                .map(|(key, value)| (key.clone(), to_json(value)))
                .collect(),
        ),
        Node::List(list) => {
            serde_json::Value::Array(list.iter().map(to_json).collect())
        }
    }
}

impl From<serde_json::Value> for Node {
    fn from(value: serde_json::Value) -> Self {
        from_json(value)
    }
}

impl From<&Node> for serde_json::Value {
    fn from(node: &Node) -> Self {
        to_json(node)
    }
}
