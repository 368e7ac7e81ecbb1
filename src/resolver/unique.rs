//! Unique filename resolution
//!
//! Produces a path under a parent directory that no existing file
//! occupies, renaming until a free name is found. Never deletes.

use log::warn;
use std::path::{Path, PathBuf};

use crate::error::ResolveError;
use crate::prompt::{Conflict, ConflictKind, ConflictStrategy, Resolution};
use crate::resolver::{Resolver, filesystem};

impl<S: ConflictStrategy> Resolver<S> {
    /// Join `parent` and `filename`; while the joined path exists, ask the
    /// strategy for a replacement name under the same parent.
    ///
    /// The returned path does not exist at return time. Overwriting is not
    /// offered here, so a strategy answering [`Resolution::Overwrite`] (or
    /// aborting) fails with [`ResolveError::Conflict`].
    pub fn ensure_unique(&mut self, parent: &Path, filename: &str) -> Result<PathBuf, ResolveError> {
        let mut candidate = parent.join(filename);
        let mut attempts = 0;

        while candidate.exists() {
            self.bump_attempts(&mut attempts, &candidate)?;
            let existing = [candidate.clone()];
            let resolution = self.strategy.resolve(&Conflict {
                kind: ConflictKind::RenameOnly,
                path: &candidate,
                existing: &existing,
            })?;
            match resolution {
                Resolution::Rename(name) => {
                    if !filesystem::is_safe_filename(&name) {
                        warn!(
                            "Rejected replacement filename {:?} for {}",
                            name,
                            candidate.display()
                        );
                        continue;
                    }
                    candidate = parent.join(name);
                }
                Resolution::Overwrite | Resolution::Abort => {
                    return Err(ResolveError::Conflict(candidate));
                }
            }
        }

        Ok(candidate)
    }
}
