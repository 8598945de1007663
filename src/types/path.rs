//! Location of a violation inside the validated value.
//!
//! Paths are built from the inside out: a nested validator reports a
//! violation relative to itself, and every enclosing field or array scope
//! prefixes its own segment on the way up.

use core::fmt::{self, Display, Write};
use smallvec::SmallVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One step of an [`ErrorPath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PathSegment {
    /// An object key, rendered as `.name` (or bare `name` at the start).
    Field(String),
    /// An array position, rendered as `[index]`.
    Index(usize),
}

impl From<&str> for PathSegment {
    #[inline]
    fn from(name: &str) -> Self {
        Self::Field(name.into())
    }
}

impl From<String> for PathSegment {
    #[inline]
    fn from(name: String) -> Self {
        Self::Field(name)
    }
}

impl From<usize> for PathSegment {
    #[inline]
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

/// Dot/bracket path identifying where a violation occurred, e.g. `a[0].test`.
///
/// The root path has no segments and renders as the empty string.
///
/// # Examples
///
/// ```
/// use schema_rail::ErrorPath;
///
/// let path = ErrorPath::field("test").within(0usize).within("a");
/// assert_eq!(path.to_string(), "a[0].test");
/// assert_eq!(path, "a[0].test");
/// assert!(ErrorPath::root().is_root());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ErrorPath {
    segments: SmallVec<[PathSegment; 4]>,
}

impl ErrorPath {
    /// The empty path, i.e. the value passed to the validator itself.
    #[inline]
    pub fn root() -> Self {
        Self::default()
    }

    /// A single-segment path naming an object key.
    #[inline]
    pub fn field(name: impl Into<String>) -> Self {
        let mut segments = SmallVec::new();
        segments.push(PathSegment::Field(name.into()));
        Self { segments }
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    #[inline]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Prefixes `segment`, moving this path one scope outward.
    #[inline]
    pub fn prepend(&mut self, segment: impl Into<PathSegment>) {
        self.segments.insert(0, segment.into());
    }

    /// Builder form of [`ErrorPath::prepend`].
    #[inline]
    #[must_use]
    pub fn within(mut self, segment: impl Into<PathSegment>) -> Self {
        self.prepend(segment);
        self
    }
}

impl Display for ErrorPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Field(name) => {
                    if position > 0 {
                        f.write_char('.')?;
                    }
                    f.write_str(name)?;
                }
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

/// Caller-chosen parameter names (as used by custom rules) become a single
/// field segment; the empty string is the root.
impl From<&str> for ErrorPath {
    fn from(parameter: &str) -> Self {
        if parameter.is_empty() {
            Self::root()
        } else {
            Self::field(parameter)
        }
    }
}

impl From<String> for ErrorPath {
    fn from(parameter: String) -> Self {
        if parameter.is_empty() {
            Self::root()
        } else {
            Self::field(parameter)
        }
    }
}

impl PartialEq<str> for ErrorPath {
    fn eq(&self, other: &str) -> bool {
        self.to_string() == other
    }
}

impl PartialEq<&str> for ErrorPath {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

#[cfg(feature = "serde")]
impl Serialize for ErrorPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for ErrorPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::from)
    }
}
