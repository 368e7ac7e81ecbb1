//! Built-in strategies
//!
//! Non-interactive conflict policies for batch callers.

use crate::error::ResolveError;
use crate::prompt::strategy::{Conflict, ConflictKind, ConflictStrategy, Resolution};

/// Deletes conflicting files unconditionally
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysOverwrite;

impl ConflictStrategy for AlwaysOverwrite {
    fn resolve(&mut self, _conflict: &Conflict<'_>) -> Result<Resolution, ResolveError> {
        Ok(Resolution::Overwrite)
    }
}

/// Treats the first conflict as an error
#[derive(Debug, Clone, Copy, Default)]
pub struct FailOnConflict;

impl ConflictStrategy for FailOnConflict {
    fn resolve(&mut self, _conflict: &Conflict<'_>) -> Result<Resolution, ResolveError> {
        Ok(Resolution::Abort)
    }
}

/// Renames mechanically by appending `_1`, `_2`, ... to the file stem
#[derive(Debug, Clone, Default)]
pub struct SuffixRename {
    counter: usize,
}

impl SuffixRename {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConflictStrategy for SuffixRename {
    fn resolve(&mut self, conflict: &Conflict<'_>) -> Result<Resolution, ResolveError> {
        let stem = match conflict.path.file_stem() {
            Some(stem) => stem.to_string_lossy(),
            None => return Ok(Resolution::Abort),
        };
        self.counter += 1;
        let name = match conflict.kind {
            // Prefixes have no extension to preserve
            ConflictKind::Prefix => format!("{}_{}", stem, self.counter),
            _ => match conflict.path.extension() {
                Some(ext) => format!("{}_{}.{}", stem, self.counter, ext.to_string_lossy()),
                None => format!("{}_{}", stem, self.counter),
            },
        };
        Ok(Resolution::Rename(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};

    fn conflict_at(path: &Path, existing: &[PathBuf], kind: ConflictKind) -> Resolution {
        let conflict = Conflict {
            kind,
            path,
            existing,
        };
        SuffixRename::new().resolve(&conflict).unwrap()
    }

    #[test]
    fn test_always_overwrite() {
        let existing = [PathBuf::from("out.txt")];
        let conflict = Conflict {
            kind: ConflictKind::File,
            path: Path::new("out.txt"),
            existing: &existing,
        };
        assert_eq!(
            AlwaysOverwrite.resolve(&conflict).unwrap(),
            Resolution::Overwrite
        );
    }

    #[test]
    fn test_fail_on_conflict() {
        let existing = [PathBuf::from("out.txt")];
        let conflict = Conflict {
            kind: ConflictKind::File,
            path: Path::new("out.txt"),
            existing: &existing,
        };
        assert_eq!(FailOnConflict.resolve(&conflict).unwrap(), Resolution::Abort);
    }

    #[test]
    fn test_suffix_rename_preserves_extension() {
        let existing = [PathBuf::from("/tmp/out.txt")];
        assert_eq!(
            conflict_at(Path::new("/tmp/out.txt"), &existing, ConflictKind::File),
            Resolution::Rename("out_1.txt".to_string())
        );
    }

    #[test]
    fn test_suffix_rename_counts_up() {
        let existing = [PathBuf::from("/tmp/out")];
        let conflict = Conflict {
            kind: ConflictKind::File,
            path: Path::new("/tmp/out"),
            existing: &existing,
        };
        let mut strategy = SuffixRename::new();
        assert_eq!(
            strategy.resolve(&conflict).unwrap(),
            Resolution::Rename("out_1".to_string())
        );
        assert_eq!(
            strategy.resolve(&conflict).unwrap(),
            Resolution::Rename("out_2".to_string())
        );
    }

    #[test]
    fn test_suffix_rename_on_prefix_ignores_extension_split() {
        let existing = [PathBuf::from("/tmp/run.log")];
        assert_eq!(
            conflict_at(Path::new("/tmp/run.log"), &existing, ConflictKind::Prefix),
            Resolution::Rename("run_1".to_string())
        );
    }
}
