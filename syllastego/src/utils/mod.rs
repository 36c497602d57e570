//! Utility functions and supporting infrastructure.
//!
//! Provides fixed framing, the hyphenation capability and error types
//! shared by the pipeline stages and table loaders.

pub mod errors;
pub mod framing;
pub mod hyphenate;
