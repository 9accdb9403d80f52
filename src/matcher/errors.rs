//! Matcher error types
//!
//! Error codes:
//! - AERO_MATCH_EMPTY_PATH (REJECT)
//! - AERO_MATCH_EMPTY_PATH_SEGMENT (REJECT)
//! - AERO_MATCH_PATH_TOO_DEEP (REJECT)
//! - AERO_MATCH_NEGATIVE_BOUND (REJECT)
//! - AERO_MATCH_CONFIG_UNREADABLE (FATAL)
//! - AERO_MATCH_CONFIG_MALFORMED (FATAL)
//!
//! Only construction and configuration can fail. Evaluating a document
//! never produces an error.

use std::fmt;
use thiserror::Error;

/// Result type for matcher operations
pub type MatcherResult<T> = Result<T, MatcherError>;

/// Severity levels for matcher errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Schema rejected at compile time
    Reject,
    /// Matcher cannot start
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Reject => write!(f, "REJECT"),
            Severity::Fatal => write!(f, "FATAL"),
        }
    }
}

/// Machine-readable matcher error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatcherErrorCode {
    /// Dotted path is empty
    AeroMatchEmptyPath,
    /// Dotted path has an empty segment
    AeroMatchEmptyPathSegment,
    /// Dotted path exceeds the configured depth
    AeroMatchPathTooDeep,
    /// Length bound is negative
    AeroMatchNegativeBound,
    /// Config file could not be read
    AeroMatchConfigUnreadable,
    /// Config file could not be parsed
    AeroMatchConfigMalformed,
}

impl MatcherErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            MatcherErrorCode::AeroMatchEmptyPath => "AERO_MATCH_EMPTY_PATH",
            MatcherErrorCode::AeroMatchEmptyPathSegment => "AERO_MATCH_EMPTY_PATH_SEGMENT",
            MatcherErrorCode::AeroMatchPathTooDeep => "AERO_MATCH_PATH_TOO_DEEP",
            MatcherErrorCode::AeroMatchNegativeBound => "AERO_MATCH_NEGATIVE_BOUND",
            MatcherErrorCode::AeroMatchConfigUnreadable => "AERO_MATCH_CONFIG_UNREADABLE",
            MatcherErrorCode::AeroMatchConfigMalformed => "AERO_MATCH_CONFIG_MALFORMED",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        match self {
            MatcherErrorCode::AeroMatchConfigUnreadable
            | MatcherErrorCode::AeroMatchConfigMalformed => Severity::Fatal,
            _ => Severity::Reject,
        }
    }
}

impl fmt::Display for MatcherErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors raised while building match expressions or loading their config
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatcherError {
    // ==================
    // Construction Errors
    // ==================
    /// Dotted path is the empty string
    #[error("Field path must not be empty")]
    EmptyPath,

    /// A token between dots is empty
    #[error("Field path '{path}' has an empty segment at position {position}")]
    EmptyPathSegment { path: String, position: usize },

    /// Too many tokens
    #[error("Field path '{path}' has {depth} segments, limit is {limit}")]
    PathTooDeep {
        path: String,
        depth: usize,
        limit: usize,
    },

    /// Length bound below zero
    #[error("{keyword} requires a non-negative bound, got {bound}")]
    NegativeBound { keyword: &'static str, bound: i64 },

    // ==================
    // Config Errors
    // ==================
    /// Config file could not be read
    #[error("Cannot read matcher config '{path}': {reason}")]
    ConfigUnreadable { path: String, reason: String },

    /// Config could not be parsed
    #[error("Malformed matcher config: {0}")]
    ConfigMalformed(String),
}

impl MatcherError {
    /// Returns the error code
    pub fn code(&self) -> MatcherErrorCode {
        match self {
            MatcherError::EmptyPath => MatcherErrorCode::AeroMatchEmptyPath,
            MatcherError::EmptyPathSegment { .. } => MatcherErrorCode::AeroMatchEmptyPathSegment,
            MatcherError::PathTooDeep { .. } => MatcherErrorCode::AeroMatchPathTooDeep,
            MatcherError::NegativeBound { .. } => MatcherErrorCode::AeroMatchNegativeBound,
            MatcherError::ConfigUnreadable { .. } => MatcherErrorCode::AeroMatchConfigUnreadable,
            MatcherError::ConfigMalformed(_) => MatcherErrorCode::AeroMatchConfigMalformed,
        }
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code().severity()
    }

    /// Returns whether this is a fatal error
    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}
