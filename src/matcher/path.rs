//! Dotted field paths
//!
//! A path is split once at construction (`"a.b"` -> `["a", "b"]`) and reused
//! for every evaluation.

use std::fmt;
use std::hash::{Hash, Hasher};

use super::document::{DocumentValue, ValueKind};
use super::errors::{MatcherError, MatcherResult};

/// Default maximum number of path segments
pub const DEFAULT_MAX_PATH_DEPTH: usize = 200;

/// Immutable, pre-split field path.
///
/// Always holds at least one segment and no segment is empty.
#[derive(Debug, Clone)]
pub struct FieldPath {
    dotted: String,
    parts: Box<[String]>,
}

impl FieldPath {
    /// Parses a dotted path with the default depth limit.
    pub fn parse(dotted: &str) -> MatcherResult<Self> {
        Self::parse_with_limit(dotted, DEFAULT_MAX_PATH_DEPTH)
    }

    /// Parses a dotted path, rejecting it if it has more than `max_depth`
    /// segments.
    ///
    /// # Errors
    ///
    /// - `EmptyPath` if `dotted` is empty
    /// - `EmptyPathSegment` if any segment is empty
    /// - `PathTooDeep` if the segment count exceeds `max_depth`
    pub fn parse_with_limit(dotted: &str, max_depth: usize) -> MatcherResult<Self> {
        if dotted.is_empty() {
            return Err(MatcherError::EmptyPath);
        }

        let parts: Vec<String> = dotted.split('.').map(str::to_owned).collect();

        if let Some(position) = parts.iter().position(String::is_empty) {
            return Err(MatcherError::EmptyPathSegment {
                path: dotted.to_owned(),
                position,
            });
        }

        if parts.len() > max_depth {
            return Err(MatcherError::PathTooDeep {
                path: dotted.to_owned(),
                depth: parts.len(),
                limit: max_depth,
            });
        }

        Ok(Self {
            dotted: dotted.to_owned(),
            parts: parts.into_boxed_slice(),
        })
    }

    /// Returns the path segments in order
    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    /// Returns the number of segments
    pub fn depth(&self) -> usize {
        self.parts.len()
    }

    /// Returns the original dotted form
    pub fn as_str(&self) -> &str {
        &self.dotted
    }

    /// Resolves this path against a document.
    ///
    /// Descends one object level per segment. Returns `None` if a segment is
    /// missing or a non-object is hit before the last segment. The terminal
    /// value is returned whatever its kind; arrays are not traversed.
    pub fn resolve<'d>(&self, document: &'d dyn DocumentValue) -> Option<&'d dyn DocumentValue> {
        self.parts.iter().try_fold(document, |current, part| {
            if current.kind() != ValueKind::Object {
                return None;
            }
            current.field(part)
        })
    }
}

impl PartialEq for FieldPath {
    fn eq(&self, other: &Self) -> bool {
        self.parts == other.parts
    }
}

impl Eq for FieldPath {}

impl Hash for FieldPath {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.parts.hash(state);
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dotted)
    }
}
