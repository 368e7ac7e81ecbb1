//! Overwrite-or-rename resolution
//!
//! Resolves an exact output path against an existing file, either by
//! deleting it or by renaming the target until a free path is found.

use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ResolveError;
use crate::prompt::{Conflict, ConflictKind, ConflictStrategy, Resolution};
use crate::resolver::{Resolver, filesystem};

impl<S: ConflictStrategy> Resolver<S> {
    /// Resolve `path` for writing a single output file.
    ///
    /// With `overwrite` set, the file at `path` is deleted if present and
    /// `path` is returned unchanged; the call is idempotent when the file
    /// is absent. Otherwise the strategy is consulted while the candidate
    /// exists: an overwrite answer flips the policy and deletes the final
    /// candidate, a rename answer re-joins the new name with the original
    /// parent directory. At most one file is deleted per call.
    pub fn resolve_file(&mut self, path: &Path, overwrite: bool) -> Result<PathBuf, ResolveError> {
        if overwrite {
            filesystem::remove_if_exists(path)?;
            return Ok(path.to_path_buf());
        }

        let parent = path.parent().unwrap_or_else(|| Path::new("")).to_path_buf();
        let mut current = path.to_path_buf();
        let mut overwrite = false;
        let mut attempts = 0;

        while current.exists() {
            self.bump_attempts(&mut attempts, &current)?;
            let existing = [current.clone()];
            let resolution = self.strategy.resolve(&Conflict {
                kind: ConflictKind::File,
                path: &current,
                existing: &existing,
            })?;
            match resolution {
                Resolution::Overwrite => {
                    overwrite = true;
                    break;
                }
                Resolution::Rename(name) => {
                    if !filesystem::is_safe_filename(&name) {
                        warn!(
                            "Rejected replacement filename {:?} for {}",
                            name,
                            current.display()
                        );
                        continue;
                    }
                    current = parent.join(name);
                }
                Resolution::Abort => return Err(ResolveError::Conflict(current)),
            }
        }

        if overwrite {
            fs::remove_file(&current)?;
            info!("Deleted {}", current.display());
        }

        Ok(current)
    }
}
