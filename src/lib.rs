//! aeromatch - Schema constraint matching for aerodb documents
//!
//! Leaf predicates evaluated against semi-structured documents during
//! schema validation.

pub mod matcher;
pub mod observability;
