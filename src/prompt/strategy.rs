//! Conflict strategy
//!
//! The seam between the resolver loops and whatever decides how a
//! collision is handled. Interactive prompting, fixed policies, and
//! caller-supplied callbacks all implement the same trait.

use std::path::{Path, PathBuf};

use crate::error::ResolveError;

/// What kind of collision is being resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictKind {
    /// A file occupies the exact target path and only renaming can free it
    RenameOnly,
    /// A file occupies the exact target path; overwriting is allowed
    File,
    /// One or more files match the target prefix; overwriting deletes them all
    Prefix,
}

/// A collision between a desired output path and existing files
#[derive(Debug)]
pub struct Conflict<'a> {
    pub kind: ConflictKind,
    /// The desired path, or path prefix for [`ConflictKind::Prefix`]
    pub path: &'a Path,
    /// The files currently occupying the target
    pub existing: &'a [PathBuf],
}

/// Outcome chosen for a single conflict
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Delete whatever occupies the target and reuse it
    Overwrite,
    /// Retry under this filename in the same parent directory
    Rename(String),
    /// Give up; the resolver reports the conflict as an error
    Abort,
}

/// Decides how a single collision is resolved.
///
/// The resolver consults the strategy once per conflicting candidate path
/// and acts on the returned [`Resolution`].
pub trait ConflictStrategy {
    fn resolve(&mut self, conflict: &Conflict<'_>) -> Result<Resolution, ResolveError>;
}

/// Adapter turning a caller-supplied callback into a [`ConflictStrategy`]
pub struct StrategyFn<F>(pub F);

impl<F> ConflictStrategy for StrategyFn<F>
where
    F: FnMut(&Conflict<'_>) -> Result<Resolution, ResolveError>,
{
    fn resolve(&mut self, conflict: &Conflict<'_>) -> Result<Resolution, ResolveError> {
        (self.0)(conflict)
    }
}
