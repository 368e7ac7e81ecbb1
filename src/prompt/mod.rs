//! Conflict prompting
//!
//! The conflict strategy trait, its built-in policies, and the
//! interactive stdin implementation.

pub mod stdin;
pub mod strategies;
pub mod strategy;

pub use stdin::StdinPrompt;
pub use strategies::{AlwaysOverwrite, FailOnConflict, SuffixRename};
pub use strategy::{Conflict, ConflictKind, ConflictStrategy, Resolution, StrategyFn};
