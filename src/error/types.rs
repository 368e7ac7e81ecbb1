//! Error types
//!
//! Defines domain-specific error types for the resolver and metadata modules.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Resolver module errors
#[derive(Debug)]
pub enum ResolveError {
    /// The strategy gave up, or answered in a way the operation cannot honor
    Conflict(PathBuf),
    /// The strategy was consulted `attempts` times without producing a free path
    RetriesExhausted { path: PathBuf, attempts: usize },
    /// The prefix could not be compiled into a glob pattern
    BadPattern(String),
    /// The interactive prompt channel closed before a reply arrived
    PromptClosed,
    IoError(io::Error),
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::Conflict(p) => write!(f, "Unresolved collision at: {}", p.display()),
            ResolveError::RetriesExhausted { path, attempts } => write!(
                f,
                "No free path found for {} after {} attempts",
                path.display(),
                attempts
            ),
            ResolveError::BadPattern(p) => write!(f, "Invalid glob pattern: {}", p),
            ResolveError::PromptClosed => write!(f, "Prompt input closed"),
            ResolveError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for ResolveError {}

impl From<io::Error> for ResolveError {
    fn from(error: io::Error) -> Self {
        ResolveError::IoError(error)
    }
}

/// Metadata module errors
#[derive(Debug)]
pub enum MetadataError {
    NodeNotFound(String),
    InvalidNodePath(String),
    NodeExists(String),
}

impl fmt::Display for MetadataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataError::NodeNotFound(p) => write!(f, "Node not found: {}", p),
            MetadataError::InvalidNodePath(p) => write!(f, "Invalid node path: {}", p),
            MetadataError::NodeExists(p) => write!(f, "Node already exists: {}", p),
        }
    }
}

impl std::error::Error for MetadataError {}

/// General error that encompasses all error types of this crate
#[derive(Debug)]
pub enum OutputGuardError {
    Resolve(ResolveError),
    Metadata(MetadataError),
    Config(config::ConfigError),
    IoError(io::Error),
}

impl fmt::Display for OutputGuardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputGuardError::Resolve(e) => write!(f, "Resolve error: {}", e),
            OutputGuardError::Metadata(e) => write!(f, "Metadata error: {}", e),
            OutputGuardError::Config(e) => write!(f, "Configuration error: {}", e),
            OutputGuardError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for OutputGuardError {}

// Implement conversions from specific errors to OutputGuardError
impl From<ResolveError> for OutputGuardError {
    fn from(error: ResolveError) -> Self {
        OutputGuardError::Resolve(error)
    }
}

impl From<MetadataError> for OutputGuardError {
    fn from(error: MetadataError) -> Self {
        OutputGuardError::Metadata(error)
    }
}

impl From<config::ConfigError> for OutputGuardError {
    fn from(error: config::ConfigError) -> Self {
        OutputGuardError::Config(error)
    }
}

impl From<io::Error> for OutputGuardError {
    fn from(error: io::Error) -> Self {
        OutputGuardError::IoError(error)
    }
}
