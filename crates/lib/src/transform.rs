//! Higher-level transforms built on the accessor and walker primitives.
//!
//! Everything here re-materializes or inspects node trees through the public
//! [`Node`] operations: [`clone_node`] and [`filter`] rebuild structure with
//! `walk` + `set`/`remove`, [`flatten`]/[`hierarchize`] convert between
//! nested trees and single-level path mappings, [`ensure`] repairs a single
//! location, and [`validate`] checks a tree against a schema-shaped node.

use indexmap::IndexMap;

use crate::{
    errors::{DataError, SchemaFailure},
    node::Node,
    path::Path,
};

/// A single-level mapping from full dotted paths to the scalar leaves found
/// at those paths. Key order follows the walk order of the source tree.
pub type Flat = IndexMap<String, Node>;

/// Copies a node tree.
///
/// With `deep = false` only the top-level container is freshly built (the
/// one-level copy of the dynamic original; with owned nodes the children are
/// value copies, so no aliasing survives either mode). With `deep = true`
/// the tree is re-materialized path by path through `walk` + `set`: scalars
/// are set directly, and empty containers are set as matching empty
/// containers so they survive the rebuild even though a walk never visits
/// their absent children. Scalars are returned as-is in both modes.
///
/// Note the rebuild addresses every leaf by its dotted path, so a map key
/// that parses as an integer re-vivifies as a list index. Trees using
/// numeric map keys do not round-trip through a deep copy; the same caveat
/// applies to [`flatten`]/[`hierarchize`].
pub fn clone_node(target: &Node, deep: bool) -> Node {
    if !deep || target.is_scalar() {
        return target.clone();
    }

    let mut copy = match target {
        Node::List(_) => Node::list(),
        _ => Node::map(),
    };
    target.walk(|_, value, path, _| {
        if value.is_scalar() {
            copy.set(path, value.clone());
        } else if value.is_empty_container() {
            let empty = match value {
                Node::List(_) => Node::list(),
                _ => Node::map(),
            };
            copy.set(path, empty);
        }
        false
    });
    copy
}

/// Flattens a tree's nested hierarchy into a [`Flat`] mapping.
///
/// Every scalar leaf is recorded under its full dotted path and pruned from
/// further traversal; containers never appear as entries, so empty maps and
/// lists leave no trace (the documented asymmetry of the
/// flatten/hierarchize round-trip).
///
/// ```
/// # use datapath::{Node, transform::flatten};
/// let mut node = Node::map();
/// node.set("a.b", 1);
/// node.set("a.c", 2);
///
/// let flat = flatten(&node);
/// assert_eq!(flat.get("a.b"), Some(&Node::Int(1)));
/// assert_eq!(flat.get("a.c"), Some(&Node::Int(2)));
/// assert_eq!(flat.len(), 2);
/// ```
pub fn flatten(target: &Node) -> Flat {
    let mut flat = Flat::new();
    target.walk(|_, value, path, _| {
        if value.is_container() {
            false
        } else {
            flat.insert(path.to_string(), value.clone());
            true
        }
    });
    flat
}

/// Rebuilds a nested tree from a [`Flat`] mapping.
///
/// The root container follows the same rule [`Node::set`] uses for
/// intermediates: a list when the first key's leading segment is an index,
/// a map otherwise (and for an empty mapping). Keys are applied in the
/// mapping's own order through [`Node::set`], so deeper containers
/// auto-vivify by the usual next-segment rule. For any tree with no empty
/// containers and no map keys that parse as integers,
/// `hierarchize(flatten(tree))` is structurally equal to the tree — list
/// roots included.
pub fn hierarchize(flat: &Flat) -> Node {
    let mut root = flat
        .keys()
        .find_map(|path| Path::new(path).components().next())
        .map_or_else(Node::map, Node::empty_container_for);
    for (path, value) in flat {
        root.set(path.as_str(), value.clone());
    }
    root
}

/// Guarantees a usable value at `path`, returning the value found there.
///
/// When the path is absent, or the existing value's coarse runtime category
/// (see [`Node::type_name`]) differs from `fallback`'s, the fallback is
/// written through [`Node::set`] first. The comparison is by category, not
/// structure: an object with the wrong shape is left alone as long as it is
/// an object.
pub fn ensure<'a>(target: &'a mut Node, path: impl AsRef<Path>, fallback: Node) -> &'a Node {
    let path = path.as_ref();
    let needs_write = match target.get(path) {
        None => true,
        Some(existing) => existing.type_name() != fallback.type_name(),
    };
    if needs_write {
        tracing::debug!(path = %path, fallback = %fallback, "ensure rewrote value");
        target.set(path, fallback);
    }
    target
        .resolve(path)
        .expect("value exists after ensure write")
}

/// Builds a copy of `target` without the nodes rejected by `predicate`.
///
/// The predicate sees the *original* tree's parent and value, never the
/// copy's. A rejected node is removed from the copy together with its whole
/// subtree (the walk prunes it).
pub fn filter<F>(target: &Node, mut predicate: F) -> Node
where
    F: FnMut(&Node, &Node, &str, usize) -> bool,
{
    let mut copy = clone_node(target, true);
    let mut rejected: Vec<String> = Vec::new();
    target.walk(|parent, value, path, level| {
        if predicate(parent, value, path, level) {
            false
        } else {
            rejected.push(path.to_string());
            true
        }
    });
    // Reverse visit order: within a list, later indices go first so earlier
    // removals don't shift the positions still to be removed.
    for path in rejected.iter().rev() {
        copy.remove(path.as_str());
    }
    copy
}

/// The type names a schema leaf may carry, one per [`Node::type_name`]
/// category.
fn is_type_name(name: &str) -> bool {
    matches!(
        name,
        "null" | "boolean" | "number" | "string" | "date" | "object" | "array"
    )
}

/// Checks `data` against a schema-shaped node.
///
/// `schema` mirrors the expected structure; its scalar leaves are type-name
/// strings (`"string"`, `"number"`, `"boolean"`, `"date"`, `"object"`,
/// `"array"`, `"null"`). Every leaf at `path` requires `data` to have a
/// value at `path` whose [`Node::type_name`] matches. Failures accumulate
/// across the whole schema and surface as one aggregate
/// [`DataError::SchemaValidation`] naming each offending path.
///
/// A schema leaf that is not one of the type names above — a non-string
/// scalar, or a string with no matching category — is a caller bug, not a
/// data failure: it surfaces immediately as
/// [`DataError::InvalidSchema`], taking precedence over any accumulated
/// data failures.
///
/// ```
/// # use datapath::{Node, transform::validate};
/// let mut schema = Node::map();
/// schema.set("name.first", "string");
/// schema.set("age", "number");
///
/// let mut data = Node::map();
/// data.set("name.first", "Jeremy");
/// data.set("age", 21);
///
/// assert!(validate(&data, &schema).is_ok());
///
/// data.remove("age");
/// let err = validate(&data, &schema).unwrap_err();
/// assert!(err.to_string().contains("'age' expected number, found nothing"));
/// ```
pub fn validate(data: &Node, schema: &Node) -> Result<(), DataError> {
    let mut invalid: Option<DataError> = None;
    let mut failures = Vec::new();
    schema.walk(|_, expected, path, _| {
        if expected.is_container() {
            return false;
        }
        if invalid.is_some() {
            return true;
        }
        let expected_name = match expected.as_text() {
            Some(name) if is_type_name(name) => name,
            Some(name) => {
                invalid = Some(DataError::InvalidSchema {
                    path: path.to_string(),
                    reason: format!("unknown type name '{name}'"),
                });
                return true;
            }
            None => {
                invalid = Some(DataError::InvalidSchema {
                    path: path.to_string(),
                    reason: format!(
                        "schema leaves must be type-name strings, found {}",
                        expected.type_name()
                    ),
                });
                return true;
            }
        };
        match data.get(path) {
            Some(value) if value.type_name() == expected_name => {}
            Some(value) => failures.push(SchemaFailure {
                path: path.to_string(),
                expected: expected_name.to_string(),
                actual: Some(value.type_name().to_string()),
            }),
            None => failures.push(SchemaFailure {
                path: path.to_string(),
                expected: expected_name.to_string(),
                actual: None,
            }),
        }
        true
    });

    if let Some(err) = invalid {
        tracing::debug!(%err, "malformed schema");
        return Err(err);
    }
    if failures.is_empty() {
        Ok(())
    } else {
        tracing::debug!(count = failures.len(), "schema validation failed");
        Err(DataError::SchemaValidation { failures })
    }
}

/// [`validate`] as a plain boolean check.
pub fn is_valid(data: &Node, schema: &Node) -> bool {
    validate(data, schema).is_ok()
}
