//! String length constraints (`maxLength` / `minLength`)
//!
//! Matching semantics:
//! - The value at the path must exist and be a string, otherwise no match
//! - Length is measured in codepoints, not bytes
//! - `Max` matches iff `count <= bound`, `Min` matches iff `count >= bound`
//!
//! Arrays at the path are not expanded; they simply fail the string check.

use std::fmt;

use super::document::{DocumentValue, ValueKind};
use super::errors::{MatcherError, MatcherResult};
use super::expression::{ExpressionKind, MatchExpression, Operand};
use super::path::{FieldPath, DEFAULT_MAX_PATH_DEPTH};
use super::utf8::count_codepoints;

/// Direction of a length bound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthBound {
    /// Upper bound, inclusive
    Max,
    /// Lower bound, inclusive
    Min,
}

impl LengthBound {
    /// Returns the schema keyword for this bound
    pub fn keyword(&self) -> &'static str {
        match self {
            LengthBound::Max => "maxLength",
            LengthBound::Min => "minLength",
        }
    }

    /// Returns the expression kind for this bound
    pub fn kind(&self) -> ExpressionKind {
        match self {
            LengthBound::Max => ExpressionKind::MAX_LENGTH,
            LengthBound::Min => ExpressionKind::MIN_LENGTH,
        }
    }

    /// Whether a string of `count` codepoints satisfies `bound`
    pub fn admits(&self, count: u64, bound: u64) -> bool {
        match self {
            LengthBound::Max => count <= bound,
            LengthBound::Min => count >= bound,
        }
    }
}

/// Codepoint length constraint on the string at a field path.
///
/// Immutable after construction; evaluation is a pure function of the
/// expression and the document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StrLengthExpression {
    variant: LengthBound,
    path: FieldPath,
    bound: u64,
}

impl StrLengthExpression {
    /// Creates a `maxLength` constraint.
    pub fn max_length(path: &str, bound: i64) -> MatcherResult<Self> {
        Self::new(LengthBound::Max, path, bound)
    }

    /// Creates a `minLength` constraint.
    pub fn min_length(path: &str, bound: i64) -> MatcherResult<Self> {
        Self::new(LengthBound::Min, path, bound)
    }

    /// Creates a constraint with the default path depth limit.
    pub fn new(variant: LengthBound, path: &str, bound: i64) -> MatcherResult<Self> {
        Self::with_depth_limit(variant, path, bound, DEFAULT_MAX_PATH_DEPTH)
    }

    /// Creates a constraint, rejecting paths deeper than `max_depth`.
    ///
    /// # Errors
    ///
    /// - `NegativeBound` if `bound < 0`
    /// - any path error from [`FieldPath::parse_with_limit`]
    pub fn with_depth_limit(
        variant: LengthBound,
        path: &str,
        bound: i64,
        max_depth: usize,
    ) -> MatcherResult<Self> {
        let bound = u64::try_from(bound).map_err(|_| MatcherError::NegativeBound {
            keyword: variant.keyword(),
            bound,
        })?;
        let path = FieldPath::parse_with_limit(path, max_depth)?;

        Ok(Self {
            variant,
            path,
            bound,
        })
    }

    /// Returns the bound direction
    pub fn variant(&self) -> LengthBound {
        self.variant
    }

    /// Returns the field path
    pub fn field_path(&self) -> &FieldPath {
        &self.path
    }

    /// Returns the bound
    pub fn bound(&self) -> u64 {
        self.bound
    }

    /// Returns the schema keyword
    pub fn keyword(&self) -> &'static str {
        self.variant.keyword()
    }

    /// Codepoint length of the string at the path, if there is one.
    fn string_length(&self, document: &dyn DocumentValue) -> Option<u64> {
        let value = self.path.resolve(document)?;
        if value.kind() != ValueKind::String {
            return None;
        }
        let count = count_codepoints(value.string_bytes()?);
        Some(u64::try_from(count).unwrap_or(u64::MAX))
    }
}

impl MatchExpression for StrLengthExpression {
    fn kind(&self) -> ExpressionKind {
        self.variant.kind()
    }

    fn path(&self) -> Option<&FieldPath> {
        Some(&self.path)
    }

    fn operand(&self) -> Operand<'_> {
        Operand::Bound(self.bound)
    }

    fn matches(&self, document: &dyn DocumentValue) -> bool {
        match self.string_length(document) {
            Some(count) => self.variant.admits(count, self.bound),
            None => false,
        }
    }

    fn clone_box(&self) -> Box<dyn MatchExpression> {
        Box::new(self.clone())
    }
}

impl fmt::Display for StrLengthExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.path, self.keyword(), self.bound)
    }
}
