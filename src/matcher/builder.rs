//! Expression builder used by the schema compiler
//!
//! Applies the configured limits and logs every accepted or rejected
//! constraint. Errors surface here, at compile time, never during
//! evaluation.

use super::config::MatcherConfig;
use super::errors::MatcherResult;
use super::expression::MatchExpression;
use super::str_length::{LengthBound, StrLengthExpression};
use crate::observability::Logger;

/// Builds match expressions under a fixed config.
#[derive(Debug, Clone)]
pub struct ExpressionBuilder {
    config: MatcherConfig,
    logger: Logger,
}

impl Default for ExpressionBuilder {
    fn default() -> Self {
        Self::new(MatcherConfig::default())
    }
}

impl ExpressionBuilder {
    /// Creates a builder; the logger threshold comes from the config.
    pub fn new(config: MatcherConfig) -> Self {
        let logger = Logger::new(config.log_threshold);
        Self { config, logger }
    }

    /// Returns the active config
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Builds a `maxLength` constraint.
    pub fn max_length(&self, path: &str, bound: i64) -> MatcherResult<StrLengthExpression> {
        self.str_length(LengthBound::Max, path, bound)
    }

    /// Builds a `minLength` constraint.
    pub fn min_length(&self, path: &str, bound: i64) -> MatcherResult<StrLengthExpression> {
        self.str_length(LengthBound::Min, path, bound)
    }

    /// Builds a length constraint of either direction.
    pub fn str_length(
        &self,
        variant: LengthBound,
        path: &str,
        bound: i64,
    ) -> MatcherResult<StrLengthExpression> {
        match StrLengthExpression::with_depth_limit(variant, path, bound, self.config.max_path_depth)
        {
            Ok(expr) => {
                let bound = expr.bound().to_string();
                self.logger.trace(
                    "MATCH_EXPRESSION_BUILT",
                    &[
                        ("bound", bound.as_str()),
                        ("keyword", expr.keyword()),
                        ("path", expr.field_path().as_str()),
                    ],
                );
                Ok(expr)
            }
            Err(err) => {
                let reason = err.to_string();
                self.logger.warn(
                    "MATCH_EXPRESSION_REJECTED",
                    &[
                        ("code", err.code().code()),
                        ("keyword", variant.keyword()),
                        ("reason", reason.as_str()),
                    ],
                );
                Err(err)
            }
        }
    }

    /// Builds a length constraint as a boxed leaf for an expression tree.
    pub fn boxed_str_length(
        &self,
        variant: LengthBound,
        path: &str,
        bound: i64,
    ) -> MatcherResult<Box<dyn MatchExpression>> {
        let expr = self.str_length(variant, path, bound)?;
        Ok(Box::new(expr))
    }
}
