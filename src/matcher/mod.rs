//! Schema constraint matcher for aeromatch
//!
//! Leaf predicates used by schema validation to test one field of a
//! document. The first kinds provided are codepoint length bounds on string
//! fields (`maxLength`, `minLength`).
//!
//! # Evaluation Flow
//!
//! 1. Resolve the pre-split field path against the document
//! 2. Absent or non-string value: no match
//! 3. Count UTF-8 codepoints in the string
//! 4. Compare the count to the bound
//!
//! # Guarantees
//!
//! - Expressions are immutable and `Send + Sync`
//! - Evaluation is pure and never errors or logs
//! - Malformed UTF-8 never crashes evaluation; its count is unspecified
//! - Invalid paths and negative bounds are rejected at construction
//! - Equivalence never holds across expression kinds

mod builder;
mod config;
mod document;
mod errors;
mod expression;
mod path;
mod str_length;
mod utf8;

pub use builder::ExpressionBuilder;
pub use config::MatcherConfig;
pub use document::{DocumentValue, ValueKind};
pub use errors::{MatcherError, MatcherErrorCode, MatcherResult, Severity};
pub use expression::{dedup_equivalent, ExpressionKind, MatchExpression, Operand};
pub use path::{FieldPath, DEFAULT_MAX_PATH_DEPTH};
pub use str_length::{LengthBound, StrLengthExpression};
pub use utf8::{count_codepoints, count_codepoints_str, sequence_len};
