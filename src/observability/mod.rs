//! Observability for aeromatch
//!
//! Structured JSON logging only. Match evaluation never logs; events are
//! emitted when expressions are built or rejected.
//!
//! # Usage
//!
//! ```ignore
//! use aeromatch::observability::{Logger, Severity};
//!
//! let logger = Logger::new(Severity::Info);
//! logger.info("SCHEMA_COMPILED", &[("constraints", "3")]);
//! ```

mod logger;

pub use logger::{Logger, Severity};
