//! Path-addressed access and transforms for nested map/list data.
//!
//! `datapath` gives structured trees of maps, lists and scalars a uniform
//! dotted-path surface: `"favorites.movies.0.title"` addresses one location
//! regardless of how many map/list hops it crosses. On top of the point
//! operations sits a depth-first walker with caller-controlled pruning, and
//! a set of transforms (flatten, hierarchize, filter, schema validation)
//! built from those primitives.
//!
//! Key properties:
//!
//! * **Absence is not an error**: probing, reading with a fallback, or
//!   removing a missing path are all total operations. Only the explicitly
//!   hard-invariant forms ([`Node::require`], [`transform::validate`])
//!   return errors.
//! * **Writes always land**: [`Node::set`] auto-vivifies missing
//!   intermediate containers (lists for index segments, maps otherwise) and
//!   destructively replaces structure that cannot hold the path.
//! * **Deterministic order**: maps keep insertion order, so walks,
//!   flattening and serialization are reproducible.
//!
//! # Example
//!
//! ```
//! use datapath::{Node, transform};
//!
//! let mut person = Node::map();
//! person.set("name.first", "Jeremy");
//! person.set("favorites.colors.0", "Gray");
//! person.set("favorites.colors.1", "Cyan");
//!
//! assert!(person.has("favorites.colors.1"));
//! assert_eq!(person.get_as::<&str>("name.first"), Some("Jeremy"));
//!
//! let flat = transform::flatten(&person);
//! assert_eq!(flat.keys().count(), 3);
//! ```

pub mod errors;
pub mod json;
pub mod node;
pub mod path;
pub mod transform;

pub use errors::DataError;
pub use json::{from_json, to_json};
pub use node::{List, Map, Node};
pub use path::{Path, PathBuf};

/// Result type used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the library.
///
/// Structured module errors stay transparent so their messages surface
/// unchanged; the helpers let callers branch without matching the nested
/// enums.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured accessor and transform errors from the errors module
    #[error(transparent)]
    Data(errors::DataError),

    /// Structured path parsing errors from the path module
    #[error(transparent)]
    Path(#[from] path::PathError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Io(_) => "io",
            Error::Serialize(_) => "serialize",
            Error::Data(_) => "errors",
            Error::Path(_) => "path",
        }
    }

    /// Check if this error comes from the data layer (validation, schema,
    /// or type mismatch).
    pub fn is_data(&self) -> bool {
        matches!(self, Error::Data(_))
    }

    /// Check if this error is a failed schema validation, regardless of
    /// wrapping.
    pub fn is_schema_validation(&self) -> bool {
        matches!(self, Error::Data(err) if err.is_schema_validation())
    }

    /// Check if this error comes from I/O.
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io(_))
    }
}
