//! Matcher configuration
//!
//! Loaded once at startup from JSON. Every field has a default, so an empty
//! object is a valid config.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::errors::{MatcherError, MatcherResult};
use super::path::DEFAULT_MAX_PATH_DEPTH;
use crate::observability::Severity;

/// Configuration for building match expressions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MatcherConfig {
    /// Deepest dotted path accepted (default: 200)
    #[serde(default = "default_max_path_depth")]
    pub max_path_depth: usize,

    /// Minimum severity logged by the builder (default: WARN)
    #[serde(default = "default_log_threshold")]
    pub log_threshold: Severity,
}

fn default_max_path_depth() -> usize {
    DEFAULT_MAX_PATH_DEPTH
}

fn default_log_threshold() -> Severity {
    Severity::Warn
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            max_path_depth: default_max_path_depth(),
            log_threshold: default_log_threshold(),
        }
    }
}

impl MatcherConfig {
    /// Parses a config from a JSON string.
    pub fn from_json_str(json: &str) -> MatcherResult<Self> {
        serde_json::from_str(json).map_err(|e| MatcherError::ConfigMalformed(e.to_string()))
    }

    /// Reads and parses a JSON config file.
    ///
    /// # Errors
    ///
    /// - `ConfigUnreadable` if the file cannot be read
    /// - `ConfigMalformed` if it is not a valid config
    pub fn load(path: impl AsRef<Path>) -> MatcherResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| MatcherError::ConfigUnreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_json_str(&contents)
    }

    /// Config with a custom path depth limit
    pub fn with_max_path_depth(max_path_depth: usize) -> Self {
        Self {
            max_path_depth,
            ..Default::default()
        }
    }
}
