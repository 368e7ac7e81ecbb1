//! File system helpers
//!
//! Existence checks, deletion, and prefix expansion for the resolvers.

use globset::Glob;
use log::{info, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::ResolveError;

/// Delete the file at `path` if present. Returns whether a deletion happened.
pub fn remove_if_exists(path: &Path) -> io::Result<bool> {
    if path.exists() {
        fs::remove_file(path)?;
        info!("Deleted {}", path.display());
        Ok(true)
    } else {
        Ok(false)
    }
}

/// Check that an operator-supplied replacement filename is usable
/// (non-empty, no traversal sequences, no embedded separators)
pub fn is_safe_filename(name: &str) -> bool {
    !name.is_empty()
        && !name.contains("..")
        && !name.contains('/')
        && !name.contains('\\')
        && !name.contains('\0')
}

/// Expand every entry matching `prefix*` in the prefix's parent directory.
///
/// A missing parent directory yields no matches. Unreadable entries are
/// skipped. Results are sorted for stable reporting.
pub fn matching_paths(prefix: &Path) -> Result<Vec<PathBuf>, ResolveError> {
    let parent = prefix.parent().unwrap_or_else(|| Path::new(""));
    let read_root = if parent.as_os_str().is_empty() {
        Path::new(".")
    } else {
        parent
    };

    let stem = prefix
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let matcher = Glob::new(&format!("{}*", stem))
        .map_err(|e| ResolveError::BadPattern(e.to_string()))?
        .compile_matcher();

    let entries = match fs::read_dir(read_root) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(ResolveError::IoError(e)),
    };

    let mut matches = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry in {}: {}", read_root.display(), e);
                continue;
            }
        };
        let name = entry.file_name();
        if matcher.is_match(&name) {
            if parent.as_os_str().is_empty() {
                matches.push(PathBuf::from(&name));
            } else {
                matches.push(parent.join(&name));
            }
        }
    }
    matches.sort();
    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_remove_if_exists() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");
        assert!(!remove_if_exists(&path).unwrap());

        std::fs::write(&path, b"data").unwrap();
        assert!(remove_if_exists(&path).unwrap());
        assert!(!path.exists());
    }

    #[test]
    fn test_is_safe_filename() {
        assert!(is_safe_filename("report.txt"));
        assert!(is_safe_filename("report_1"));
        assert!(!is_safe_filename(""));
        assert!(!is_safe_filename("../escape"));
        assert!(!is_safe_filename("a/b.txt"));
        assert!(!is_safe_filename("a\\b.txt"));
        assert!(!is_safe_filename("nul\0byte"));
    }

    #[test]
    fn test_matching_paths_expands_prefix() {
        let dir = tempdir().unwrap();
        for name in ["run.h5", "run.log", "run_old.h5", "other.h5"] {
            std::fs::write(dir.path().join(name), b"").unwrap();
        }

        let matches = matching_paths(&dir.path().join("run")).unwrap();
        let names: Vec<String> = matches
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["run.h5", "run.log", "run_old.h5"]);
    }

    #[test]
    fn test_matching_paths_no_matches() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("other.h5"), b"").unwrap();
        assert!(matching_paths(&dir.path().join("run")).unwrap().is_empty());
    }

    #[test]
    fn test_matching_paths_missing_parent() {
        let dir = tempdir().unwrap();
        let prefix = dir.path().join("absent").join("run");
        assert!(matching_paths(&prefix).unwrap().is_empty());
    }
}
