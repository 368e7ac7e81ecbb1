//! Wildcard overwrite-or-rename resolution
//!
//! Resolves an output path prefix against every file matching `prefix*`,
//! deleting the whole match set or rebinding the prefix to a new name.

use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ResolveError;
use crate::prompt::{Conflict, ConflictKind, ConflictStrategy, Resolution};
use crate::resolver::{Resolver, filesystem};

impl<S: ConflictStrategy> Resolver<S> {
    /// Resolve `path` as a prefix shared by a set of output files.
    ///
    /// With no matching files the prefix is returned unchanged. With
    /// matches and `overwrite` set, every matched file still present is
    /// deleted and the prefix is returned. Otherwise the strategy sees
    /// the full match list; an overwrite answer retries with overwriting
    /// forced on, a rename answer rebinds the prefix under the same
    /// parent directory and retries with the original policy.
    pub fn resolve_prefix(&mut self, path: &Path, overwrite: bool) -> Result<PathBuf, ResolveError> {
        let mut current = path.to_path_buf();
        let mut overwrite = overwrite;
        let mut attempts = 0;

        loop {
            let matches = filesystem::matching_paths(&current)?;
            if matches.is_empty() {
                return Ok(current);
            }

            if overwrite {
                for file in &matches {
                    if file.exists() {
                        fs::remove_file(file)?;
                        info!("Deleted {}", file.display());
                    }
                }
                return Ok(current);
            }

            self.bump_attempts(&mut attempts, &current)?;
            let resolution = self.strategy.resolve(&Conflict {
                kind: ConflictKind::Prefix,
                path: &current,
                existing: &matches,
            })?;
            match resolution {
                Resolution::Overwrite => overwrite = true,
                Resolution::Rename(name) => {
                    if !filesystem::is_safe_filename(&name) {
                        warn!(
                            "Rejected replacement prefix {:?} for {}",
                            name,
                            current.display()
                        );
                        continue;
                    }
                    let parent = current
                        .parent()
                        .unwrap_or_else(|| Path::new(""))
                        .to_path_buf();
                    current = parent.join(name);
                }
                Resolution::Abort => return Err(ResolveError::Conflict(current)),
            }
        }
    }
}
