//! Dotted paths addressing positions inside nested nodes.
//!
//! A path is an ordered sequence of segments joined by `.`, e.g.
//! `"favorites.movies.0.main"`. Each segment is interpreted as a map key or,
//! when it parses as a non-negative integer, as a list index. The [`Path`] /
//! [`PathBuf`] pair follows the borrowed/owned split of `std::path`.
//!
//! Paths are normalized by filtering empty segments: `"a..b"` reads the same
//! as `"a.b"`, and `""` denotes zero segments (the node itself). Because a
//! literal `.` is the separator, it cannot occur inside a segment; there is no
//! escaping mechanism. This is a documented limitation of the addressing
//! scheme, not something callers can work around.
//!
//! # Usage
//!
//! ```rust
//! use datapath::path::PathBuf;
//! use std::str::FromStr;
//!
//! // From a dotted string (normalization is infallible)
//! let path = PathBuf::from_str("user.profile.name")?;
//!
//! // From pre-split segments
//! let path = PathBuf::from_segments(["user", "profile", "name"]);
//!
//! // Built incrementally
//! let path = PathBuf::new().push("user").push("profile").push("name");
//! # Ok::<(), std::convert::Infallible>(())
//! ```

use std::{borrow::Borrow, fmt, ops::Deref, str::FromStr};

use thiserror::Error;

/// Error type for segment validation failures.
///
/// Path construction itself is infallible through normalization; this error
/// only arises when building a [`Component`] from a string that cannot be a
/// single segment. It also reserves the niche for a future escaping syntax.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    /// Invalid segment: segments cannot contain the `.` separator.
    #[error("invalid path segment '{segment}': {reason}")]
    InvalidSegment { segment: String, reason: String },
}

/// Returns true if `segment` addresses a list index rather than a map key.
///
/// A segment is an index iff the whole segment parses as a non-negative
/// integer. This is the rule that decides whether a write auto-vivifies a
/// list or a map for a missing intermediate container.
pub fn is_index(segment: &str) -> bool {
    segment.parse::<usize>().is_ok()
}

/// Parses a segment as a list index, if it is one.
pub(crate) fn as_index(segment: &str) -> Option<usize> {
    segment.parse::<usize>().ok()
}

/// Normalizes a dotted path string by dropping empty segments.
///
/// ```rust
/// # use datapath::path::normalize_path;
/// assert_eq!(normalize_path(""), "");
/// assert_eq!(normalize_path(".user"), "user");
/// assert_eq!(normalize_path("user..profile"), "user.profile");
/// assert_eq!(normalize_path("..."), "");
/// ```
pub fn normalize_path(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    input
        .split('.')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join(".")
}

/// A single validated path segment.
///
/// Segments may not contain the `.` separator. Empty segments are allowed at
/// construction and disappear during normalization.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Component {
    inner: String,
}

impl Component {
    /// Creates a segment from a string.
    ///
    /// # Errors
    /// Fails only if the string contains a `.`.
    pub fn new(s: impl Into<String>) -> Result<Self, PathError> {
        let s = s.into();

        if s.contains('.') {
            return Err(PathError::InvalidSegment {
                segment: s.clone(),
                reason: "segments cannot contain the '.' separator".to_string(),
            });
        }

        Ok(Component { inner: s })
    }

    /// Returns the segment as a string slice.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Returns true if this segment addresses a list index.
    pub fn is_index(&self) -> bool {
        is_index(&self.inner)
    }
}

impl AsRef<str> for Component {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl FromStr for Component {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Component::new(s)
    }
}

/// An owned dotted path.
///
/// `PathBuf` stores the normalized dotted form and derefs to [`Path`] for all
/// read-only operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PathBuf {
    inner: String,
}

/// A borrowed dotted path, analogous to `&str` next to `String`.
///
/// `Path` is unsized and always used behind a reference. Any `&str` can be
/// viewed as a `&Path` without allocation; empty segments are filtered when
/// the path is iterated, so un-normalized input addresses the same position
/// as its normalized form.
#[derive(Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Path {
    inner: str,
}

impl PathBuf {
    /// Creates a new empty path (zero segments, addressing the node itself).
    pub fn new() -> Self {
        Self {
            inner: String::new(),
        }
    }

    /// Creates a path from an already-split sequence of segments.
    ///
    /// This is the pre-split form of path input: both
    /// `PathBuf::from_segments(["a", "0", "b"])` and `"a.0.b"` address the
    /// same position.
    pub fn from_segments<I>(segments: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut path = Self::new();
        for segment in segments {
            path = path.push(segment.as_ref());
        }
        path
    }

    /// Appends a path fragment, normalizing the input.
    ///
    /// Accepts single segments, dotted fragments and `Path` types alike; empty
    /// input leaves the path unchanged.
    pub fn push(mut self, fragment: impl AsRef<str>) -> Self {
        let normalized = normalize_path(fragment.as_ref());
        if normalized.is_empty() {
            return self;
        }

        if self.inner.is_empty() {
            self.inner = normalized;
        } else {
            self.inner.push('.');
            self.inner.push_str(&normalized);
        }
        self
    }

    /// Appends a list index as a segment.
    pub fn push_index(self, index: usize) -> Self {
        self.push(index.to_string())
    }

    /// Appends a validated segment.
    pub fn push_component(mut self, component: Component) -> Self {
        if component.inner.is_empty() {
            return self;
        }
        if self.inner.is_empty() {
            self.inner = component.inner;
        } else {
            self.inner.push('.');
            self.inner.push_str(&component.inner);
        }
        self
    }

    /// Joins this path with another path.
    pub fn join(mut self, other: impl AsRef<Path>) -> Self {
        let other = other.as_ref();
        if self.inner.is_empty() {
            self.inner = other.inner.to_string();
        } else if !other.inner.is_empty() {
            self.inner.push('.');
            self.inner.push_str(&other.inner);
        }
        self
    }

    /// Returns the parent path, or `None` if this path has at most one segment.
    pub fn parent(&self) -> Option<PathBuf> {
        self.inner.rfind('.').map(|last_dot| PathBuf {
            inner: self.inner[..last_dot].to_string(),
        })
    }

    /// Creates a `PathBuf` by normalizing the input string.
    pub fn normalize(path: &str) -> Self {
        PathBuf {
            inner: normalize_path(path),
        }
    }
}

impl Path {
    /// Views a string slice as a borrowed path.
    ///
    /// No validation happens here; empty segments are filtered when the path
    /// is iterated.
    pub fn new(s: &str) -> &Path {
        // SAFETY: Path is repr(transparent) over str
        unsafe { &*(s as *const str as *const Path) }
    }

    /// Returns an iterator over the segments as string slices.
    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.inner.split('.').filter(|s| !s.is_empty())
    }

    /// Returns the number of segments.
    pub fn len(&self) -> usize {
        self.components().count()
    }

    /// Returns `true` if the path has no segments.
    pub fn is_empty(&self) -> bool {
        self.components().next().is_none()
    }

    /// Returns the last segment, or `None` if the path is empty.
    pub fn last(&self) -> Option<&str> {
        self.inner.split('.').filter(|s| !s.is_empty()).next_back()
    }

    /// Returns the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Converts this `Path` to an owned, normalized `PathBuf`.
    pub fn to_path_buf(&self) -> PathBuf {
        PathBuf::normalize(&self.inner)
    }
}

impl Deref for PathBuf {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        Path::new(self.inner.as_str())
    }
}

impl AsRef<Path> for PathBuf {
    fn as_ref(&self) -> &Path {
        self.deref()
    }
}

impl AsRef<Path> for Path {
    fn as_ref(&self) -> &Path {
        self
    }
}

impl AsRef<Path> for str {
    fn as_ref(&self) -> &Path {
        Path::new(self)
    }
}

impl AsRef<Path> for String {
    fn as_ref(&self) -> &Path {
        Path::new(self)
    }
}

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl AsRef<str> for PathBuf {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl Borrow<Path> for PathBuf {
    fn borrow(&self) -> &Path {
        self.deref()
    }
}

impl FromStr for PathBuf {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::normalize(s))
    }
}

impl From<&Path> for PathBuf {
    fn from(path: &Path) -> Self {
        path.to_path_buf()
    }
}

impl fmt::Display for PathBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inner.is_empty() {
            write!(f, "(empty path)")
        } else {
            write!(f, "{}", self.inner)
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inner.is_empty() {
            write!(f, "(empty path)")
        } else {
            write!(f, "{}", &self.inner)
        }
    }
}

/// Constructs a path from literals and runtime values.
///
/// - `path!()` — empty path (`PathBuf`)
/// - `path!("user.profile.name")` — single literal (`&'static Path`, no allocation)
/// - `path!("user", "profile", "name")` — multiple fragments (`PathBuf`)
/// - `path!(base, "profile")` — mixed runtime/literal (`PathBuf`)
#[macro_export]
macro_rules! path {
    // Empty path - returns PathBuf
    () => {
        $crate::path::PathBuf::new()
    };

    // Single string literal - returns &'static Path (zero allocation)
    ($single:literal) => {
        $crate::path::Path::new($single)
    };

    // Multiple fragments - returns PathBuf
    ($first:expr $(, $rest:expr)* $(,)?) => {{
        let mut path = $crate::path::PathBuf::new();
        path = path.push($first.to_string());
        $(
            path = path.push($rest.to_string());
        )*
        path
    }};
}
