//! The node tree and its path-addressed accessor operations.
//!
//! [`Node`] is the unit of data: a closed union over scalars (null, boolean,
//! number, string, date) and containers ([`Map`], [`List`]). All point
//! operations — [`Node::has`], [`Node::get`], [`Node::set`],
//! [`Node::remove`] — address into the tree with dotted [`Path`]s, and
//! [`Node::walk`] traverses it depth-first with caller-controlled pruning.
//!
//! Absence is never an error for these operations: probing a path that does
//! not exist returns `false`/`None`, and removing one is a silent no-op. Only
//! [`Node::require`] and the schema validation in [`crate::transform`]
//! surface failures, because there the caller asked for a hard invariant.
//!
//! # Usage
//!
//! ```
//! use datapath::{Node, path};
//!
//! let mut node = Node::map();
//! node.set(path!("favorites.colors.0"), "Gray");
//! node.set(path!("favorites.colors.1"), "Cyan");
//!
//! assert!(node.has("favorites.colors.1"));
//! assert_eq!(node.get_as::<&str>("favorites.colors.1"), Some("Cyan"));
//! assert!(node.get("favorites.colors.9").is_none());
//! ```

use std::fmt;

use chrono::{DateTime, Utc};

use crate::{
    errors::DataError,
    path::{Path, as_index, is_index},
};

pub mod list;
pub mod map;

pub use list::List;
pub use map::Map;

/// A value in the hierarchical data tree.
///
/// Scalars are terminal; `Map` and `List` contain further nodes. Containment
/// is part of the type, not discovered at runtime — the traversal and
/// auto-vivification rules of the accessor operations are all written as
/// explicit variant inspection.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Node {
    // Scalars (terminal values)
    /// Null/empty value. Doubles as the "missing" sentinel: a path whose
    /// terminal value is null reports as absent from `has`/`get`.
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Text string value
    Text(String),
    /// Timestamp value. A scalar: traversal treats dates as leaves and never
    /// descends into them.
    Date(DateTime<Utc>),

    // Containers
    /// Insertion-ordered string-keyed mapping
    Map(Map),
    /// Ordered sequence addressed by integer index
    List(List),
}

impl Node {
    /// Creates an empty map node.
    pub fn map() -> Self {
        Node::Map(Map::new())
    }

    /// Creates an empty list node.
    pub fn list() -> Self {
        Node::List(List::new())
    }

    /// Returns true if this is a scalar (terminal) node.
    pub fn is_scalar(&self) -> bool {
        !self.is_container()
    }

    /// Returns true if this node can contain other nodes.
    pub fn is_container(&self) -> bool {
        matches!(self, Node::Map(_) | Node::List(_))
    }

    /// Returns true if this is the null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }

    /// Returns true if this is a container with no children.
    pub fn is_empty_container(&self) -> bool {
        match self {
            Node::Map(map) => map.is_empty(),
            Node::List(list) => list.is_empty(),
            _ => false,
        }
    }

    /// Returns the coarse runtime category of this node.
    ///
    /// These are the names schema leaves use in
    /// [`validate`](crate::transform::validate), and the categories compared
    /// by [`ensure`](crate::transform::ensure). Note `Int` and `Float` are
    /// both `"number"`.
    pub fn type_name(&self) -> &'static str {
        match self {
            Node::Null => "null",
            Node::Bool(_) => "boolean",
            Node::Int(_) | Node::Float(_) => "number",
            Node::Text(_) => "string",
            Node::Date(_) => "date",
            Node::Map(_) => "object",
            Node::List(_) => "array",
        }
    }

    /// Attempts to read this node as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Node::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to read this node as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Node::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to read this node as a float. Integers widen.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Node::Float(x) => Some(*x),
            Node::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Attempts to read this node as a string slice.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to read this node as a timestamp.
    pub fn as_date(&self) -> Option<DateTime<Utc>> {
        match self {
            Node::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Attempts to read this node as a map (immutable reference).
    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Node::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Attempts to read this node as a mutable map reference.
    pub fn as_map_mut(&mut self) -> Option<&mut Map> {
        match self {
            Node::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Attempts to read this node as a list (immutable reference).
    pub fn as_list(&self) -> Option<&List> {
        match self {
            Node::List(list) => Some(list),
            _ => None,
        }
    }

    /// Attempts to read this node as a mutable list reference.
    pub fn as_list_mut(&mut self) -> Option<&mut List> {
        match self {
            Node::List(list) => Some(list),
            _ => None,
        }
    }
}

// Path-addressed accessor operations.
impl Node {
    /// Resolves a path to the node it addresses, if the location exists.
    ///
    /// Unlike [`Node::get`] this returns null terminals as nodes. A
    /// zero-segment path resolves to the node itself. Scalars encountered
    /// mid-path end the resolution with `None` rather than an error.
    pub fn resolve(&self, path: impl AsRef<Path>) -> Option<&Node> {
        let mut current = self;
        for segment in path.as_ref().components() {
            current = current.child(segment)?;
        }
        Some(current)
    }

    /// Mutable variant of [`Node::resolve`]. Never creates anything.
    pub fn resolve_mut(&mut self, path: impl AsRef<Path>) -> Option<&mut Node> {
        let mut current = self;
        for segment in path.as_ref().components() {
            current = current.child_mut(segment)?;
        }
        Some(current)
    }

    /// Returns true if the path resolves to a non-null value.
    ///
    /// A zero-segment path reports presence iff this node itself is
    /// non-null. Never mutates the tree.
    pub fn has(&self, path: impl AsRef<Path>) -> bool {
        self.resolve(path).is_some_and(|node| !node.is_null())
    }

    /// Gets the value at a path.
    ///
    /// `None` stands for the missing sentinel: the path does not resolve, or
    /// it resolves to null. Probing a scalar with a deeper path is treated as
    /// absence, never an error.
    pub fn get(&self, path: impl AsRef<Path>) -> Option<&Node> {
        self.resolve(path).filter(|node| !node.is_null())
    }

    /// Gets the value at a path, or `fallback` when it is absent.
    pub fn get_or<'a>(&'a self, path: impl AsRef<Path>, fallback: &'a Node) -> &'a Node {
        self.get(path).unwrap_or(fallback)
    }

    /// Gets a value by path with automatic type conversion.
    ///
    /// Returns `None` if the path is absent or the value has a different
    /// type.
    ///
    /// ```
    /// # use datapath::Node;
    /// let mut node = Node::map();
    /// node.set("user.age", 30);
    /// assert_eq!(node.get_as::<i64>("user.age"), Some(30));
    /// assert_eq!(node.get_as::<&str>("user.age"), None);
    /// ```
    pub fn get_as<'a, T>(&'a self, path: impl AsRef<Path>) -> Option<T>
    where
        T: TryFrom<&'a Node, Error = DataError>,
    {
        let value = self.get(path)?;
        T::try_from(value).ok()
    }

    /// Gets the value at a path, failing if it is absent.
    ///
    /// This is the hard-invariant form of [`Node::get`]: use it where a
    /// missing value is a programming error rather than an optional field.
    /// The error carries the offending path and a snapshot of the target.
    pub fn require(&self, path: impl AsRef<Path>) -> Result<&Node, DataError> {
        self.require_with(path, |_| true)
    }

    /// Gets the value at a path, failing if it is absent or rejected by
    /// `validator`.
    pub fn require_with<F>(&self, path: impl AsRef<Path>, validator: F) -> Result<&Node, DataError>
    where
        F: FnOnce(&Node) -> bool,
    {
        let path = path.as_ref();
        let value = self.get(path).ok_or_else(|| DataError::Validation {
            path: path.as_str().to_string(),
            reason: format!("no value in {}", crate::json::to_json(self)),
        })?;
        if !validator(value) {
            return Err(DataError::Validation {
                path: path.as_str().to_string(),
                reason: format!("'{value}' failed the validation predicate"),
            });
        }
        Ok(value)
    }

    /// Sets `value` at a path, creating intermediate containers as needed.
    ///
    /// A zero-segment path is a no-op. A missing intermediate container is
    /// created as a [`List`] when the following segment parses as an index,
    /// else as a [`Map`]. Existing structure that cannot hold the path —
    /// a scalar in an intermediate position, or a list addressed with a
    /// non-index segment — is destructively replaced: a write always
    /// succeeds, at the cost of discarding incompatible structure.
    pub fn set(&mut self, path: impl AsRef<Path>, value: impl Into<Node>) {
        let path = path.as_ref();
        let segments: Vec<&str> = path.components().collect();
        if segments.is_empty() {
            return;
        }
        tracing::trace!(path = %path, "set");
        self.set_segments(&segments, value.into());
    }

    fn set_segments(&mut self, segments: &[&str], value: Node) {
        let Some((key, rest)) = segments.split_first() else {
            return;
        };
        if !self.can_address(key) {
            *self = Node::empty_container_for(key);
        }
        match self {
            Node::Map(map) => {
                if rest.is_empty() {
                    map.insert(*key, value);
                } else {
                    let child = map.get_or_insert_with(key, || Node::empty_container_for(rest[0]));
                    if !child.can_address(rest[0]) {
                        *child = Node::empty_container_for(rest[0]);
                    }
                    child.set_segments(rest, value);
                }
            }
            Node::List(list) => {
                let Some(index) = as_index(key) else {
                    unreachable!("list receiver always has an index segment")
                };
                if rest.is_empty() {
                    list.set(index, value);
                } else {
                    let child = list.get_mut_padded(index);
                    if !child.can_address(rest[0]) {
                        *child = Node::empty_container_for(rest[0]);
                    }
                    child.set_segments(rest, value);
                }
            }
            _ => unreachable!("receiver was coerced to a container"),
        }
    }

    /// Removes the value at a path, returning it.
    ///
    /// A zero-segment path removes nothing. A path whose parent does not
    /// exist is a silent no-op returning `None`; removal of the absent is
    /// not an error. Both containers preserve the relative order of their
    /// remaining children.
    pub fn remove(&mut self, path: impl AsRef<Path>) -> Option<Node> {
        let path = path.as_ref();
        let segments: Vec<&str> = path.components().collect();
        let (last, parents) = segments.split_last()?;
        let parent = if parents.is_empty() {
            self
        } else {
            self.resolve_mut(crate::path::PathBuf::from_segments(parents))?
        };
        let removed = match parent {
            Node::Map(map) => map.remove(last),
            Node::List(list) => as_index(last).and_then(|index| list.remove(index)),
            _ => None,
        };
        if removed.is_some() {
            tracing::trace!(path = %path, "remove");
        }
        removed
    }

    /// Walks the nested structure depth-first, calling `callback` for every
    /// child node.
    ///
    /// The callback receives the direct parent, the child value, the dotted
    /// path from the walk root, and the nesting level. Returning `true`
    /// marks the child handled: the walker does not descend into it even
    /// when it is a container. Traversal order is deterministic — map
    /// insertion order, list index order — so repeated walks visit nodes
    /// identically.
    pub fn walk<F>(&self, mut callback: F)
    where
        F: FnMut(&Node, &Node, &str, usize) -> bool,
    {
        self.walk_inner("", 0, &mut callback);
    }

    /// [`Node::walk`] starting from a base path prefix and nesting level.
    pub fn walk_from<F>(&self, base: impl AsRef<Path>, level: usize, mut callback: F)
    where
        F: FnMut(&Node, &Node, &str, usize) -> bool,
    {
        let base = base.as_ref().to_path_buf();
        self.walk_inner(base.as_str(), level, &mut callback);
    }

    fn walk_inner<F>(&self, base: &str, level: usize, callback: &mut F)
    where
        F: FnMut(&Node, &Node, &str, usize) -> bool,
    {
        match self {
            Node::Map(map) => {
                for (key, value) in map.iter() {
                    let child_path = join_path(base, key);
                    let handled = callback(self, value, &child_path, level);
                    if !handled && value.is_container() {
                        value.walk_inner(&child_path, level + 1, callback);
                    }
                }
            }
            Node::List(list) => {
                for (index, value) in list.iter().enumerate() {
                    let child_path = join_path(base, &index.to_string());
                    let handled = callback(self, value, &child_path, level);
                    if !handled && value.is_container() {
                        value.walk_inner(&child_path, level + 1, callback);
                    }
                }
            }
            _ => {}
        }
    }

    fn child(&self, segment: &str) -> Option<&Node> {
        match self {
            Node::Map(map) => map.get(segment),
            Node::List(list) => list.get(as_index(segment)?),
            _ => None,
        }
    }

    fn child_mut(&mut self, segment: &str) -> Option<&mut Node> {
        match self {
            Node::Map(map) => map.get_mut(segment),
            Node::List(list) => list.get_mut(as_index(segment)?),
            _ => None,
        }
    }

    /// True if this node is a container that can hold the given segment.
    fn can_address(&self, segment: &str) -> bool {
        match self {
            Node::Map(_) => true,
            Node::List(_) => is_index(segment),
            _ => false,
        }
    }

    /// The empty container auto-vivified for a missing position addressed by
    /// `segment`: a list for index segments, a map otherwise.
    pub(crate) fn empty_container_for(segment: &str) -> Node {
        if is_index(segment) {
            Node::list()
        } else {
            Node::map()
        }
    }
}

fn join_path(base: &str, key: &str) -> String {
    if base.is_empty() {
        key.to_string()
    } else {
        format!("{base}.{key}")
    }
}

impl Default for Node {
    fn default() -> Self {
        Node::Null
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Null => write!(f, "null"),
            Node::Bool(b) => write!(f, "{b}"),
            Node::Int(n) => write!(f, "{n}"),
            Node::Float(x) => write!(f, "{x}"),
            Node::Text(s) => write!(f, "{s}"),
            Node::Date(d) => write!(f, "{}", d.to_rfc3339()),
            Node::Map(map) => write!(f, "{map}"),
            Node::List(list) => write!(f, "{list}"),
        }
    }
}

// Convenient From implementations for common types
impl From<bool> for Node {
    fn from(value: bool) -> Self {
        Node::Bool(value)
    }
}

impl From<i64> for Node {
    fn from(value: i64) -> Self {
        Node::Int(value)
    }
}

impl From<i32> for Node {
    fn from(value: i32) -> Self {
        Node::Int(value as i64)
    }
}

impl From<u32> for Node {
    fn from(value: u32) -> Self {
        Node::Int(value as i64)
    }
}

impl From<f64> for Node {
    fn from(value: f64) -> Self {
        Node::Float(value)
    }
}

impl From<f32> for Node {
    fn from(value: f32) -> Self {
        Node::Float(value as f64)
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::Text(value)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::Text(value.to_string())
    }
}

impl From<DateTime<Utc>> for Node {
    fn from(value: DateTime<Utc>) -> Self {
        Node::Date(value)
    }
}

impl From<Map> for Node {
    fn from(value: Map) -> Self {
        Node::Map(value)
    }
}

impl From<List> for Node {
    fn from(value: List) -> Self {
        Node::List(value)
    }
}

impl From<Vec<Node>> for Node {
    fn from(value: Vec<Node>) -> Self {
        Node::List(value.into())
    }
}

// TryFrom implementations backing `get_as`
impl TryFrom<&Node> for String {
    type Error = DataError;

    fn try_from(node: &Node) -> Result<Self, Self::Error> {
        match node {
            Node::Text(s) => Ok(s.clone()),
            _ => Err(DataError::TypeMismatch {
                expected: "string".to_string(),
                actual: node.type_name().to_string(),
            }),
        }
    }
}

impl<'a> TryFrom<&'a Node> for &'a str {
    type Error = DataError;

    fn try_from(node: &'a Node) -> Result<Self, Self::Error> {
        match node {
            Node::Text(s) => Ok(s),
            _ => Err(DataError::TypeMismatch {
                expected: "string".to_string(),
                actual: node.type_name().to_string(),
            }),
        }
    }
}

impl TryFrom<&Node> for i64 {
    type Error = DataError;

    fn try_from(node: &Node) -> Result<Self, Self::Error> {
        match node {
            Node::Int(n) => Ok(*n),
            _ => Err(DataError::TypeMismatch {
                expected: "number".to_string(),
                actual: node.type_name().to_string(),
            }),
        }
    }
}

impl TryFrom<&Node> for f64 {
    type Error = DataError;

    fn try_from(node: &Node) -> Result<Self, Self::Error> {
        node.as_float().ok_or_else(|| DataError::TypeMismatch {
            expected: "number".to_string(),
            actual: node.type_name().to_string(),
        })
    }
}

impl TryFrom<&Node> for bool {
    type Error = DataError;

    fn try_from(node: &Node) -> Result<Self, Self::Error> {
        match node {
            Node::Bool(b) => Ok(*b),
            _ => Err(DataError::TypeMismatch {
                expected: "boolean".to_string(),
                actual: node.type_name().to_string(),
            }),
        }
    }
}

impl TryFrom<&Node> for DateTime<Utc> {
    type Error = DataError;

    fn try_from(node: &Node) -> Result<Self, Self::Error> {
        node.as_date().ok_or_else(|| DataError::TypeMismatch {
            expected: "date".to_string(),
            actual: node.type_name().to_string(),
        })
    }
}

// PartialEq implementations for comparing nodes with plain values
impl PartialEq<str> for Node {
    fn eq(&self, other: &str) -> bool {
        match self {
            Node::Text(s) => s == other,
            _ => false,
        }
    }
}

impl PartialEq<&str> for Node {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<String> for Node {
    fn eq(&self, other: &String) -> bool {
        self == other.as_str()
    }
}

impl PartialEq<i64> for Node {
    fn eq(&self, other: &i64) -> bool {
        match self {
            Node::Int(n) => n == other,
            _ => false,
        }
    }
}

impl PartialEq<bool> for Node {
    fn eq(&self, other: &bool) -> bool {
        match self {
            Node::Bool(b) => b == other,
            _ => false,
        }
    }
}

// Reverse implementations for symmetry
impl PartialEq<Node> for str {
    fn eq(&self, other: &Node) -> bool {
        other == self
    }
}

impl PartialEq<Node> for &str {
    fn eq(&self, other: &Node) -> bool {
        other == *self
    }
}

impl PartialEq<Node> for i64 {
    fn eq(&self, other: &Node) -> bool {
        other == self
    }
}

impl PartialEq<Node> for bool {
    fn eq(&self, other: &Node) -> bool {
        other == self
    }
}
