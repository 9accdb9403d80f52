//! Leaf match expressions and structural equivalence
//!
//! Every leaf expression reports a stable `ExpressionKind` tag. Two
//! expressions are equivalent only when their tags are equal and their path
//! and operand compare equal. Equivalence is used by the optimizer to drop
//! duplicate predicates; it plays no part in evaluation.

use serde_json::Value;
use std::fmt;

use super::document::DocumentValue;
use super::path::FieldPath;

/// Stable discriminant of a leaf expression kind.
///
/// Tags are unique per concrete kind. Kinds defined outside this crate pick
/// their own tags outside the range used here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExpressionKind(u16);

impl ExpressionKind {
    /// `minLength` on a string field
    pub const MIN_LENGTH: ExpressionKind = ExpressionKind(0x0301);
    /// `maxLength` on a string field
    pub const MAX_LENGTH: ExpressionKind = ExpressionKind(0x0302);

    /// Creates a kind from a raw tag.
    pub const fn from_tag(tag: u16) -> Self {
        Self(tag)
    }

    /// Returns the raw tag
    pub const fn tag(self) -> u16 {
        self.0
    }
}

/// Right-hand side of a leaf expression, as seen by the equivalence check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand<'a> {
    /// No operand
    None,
    /// Integer bound (lengths, sizes, counts)
    Bound(u64),
    /// Literal document value
    Literal(&'a Value),
}

/// A leaf predicate evaluated directly against a document.
///
/// Implementations are immutable once built and safe to share across
/// threads.
pub trait MatchExpression: fmt::Debug + Send + Sync {
    /// Discriminant of the concrete kind
    fn kind(&self) -> ExpressionKind;

    /// Field the expression tests, if any
    fn path(&self) -> Option<&FieldPath>;

    /// Operand compared by `equivalent`
    fn operand(&self) -> Operand<'_>;

    /// Evaluates the predicate against a document.
    fn matches(&self, document: &dyn DocumentValue) -> bool;

    /// Structural equality with any other expression.
    ///
    /// Different kinds are never equivalent, even where their semantics
    /// happen to coincide.
    fn equivalent(&self, other: &dyn MatchExpression) -> bool {
        if self.kind() != other.kind() {
            return false;
        }
        self.path() == other.path() && self.operand() == other.operand()
    }

    /// Clones into a new boxed expression
    fn clone_box(&self) -> Box<dyn MatchExpression>;
}

impl Clone for Box<dyn MatchExpression> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Drops every expression equivalent to an earlier one, keeping order.
pub fn dedup_equivalent(expressions: Vec<Box<dyn MatchExpression>>) -> Vec<Box<dyn MatchExpression>> {
    let mut kept: Vec<Box<dyn MatchExpression>> = Vec::with_capacity(expressions.len());
    for expr in expressions {
        if !kept.iter().any(|k| k.equivalent(expr.as_ref())) {
            kept.push(expr);
        }
    }
    kept
}
