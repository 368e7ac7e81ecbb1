//! Error handling
//!
//! Defines error types for the resolver and metadata modules.

pub mod types;

pub use types::*;
