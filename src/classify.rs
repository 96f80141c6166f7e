//! Repository directory classification.
//!
//! A directory is a repository root when it has an `objects/` directory and
//! a `HEAD` regular file. Both bare layouts (`project.git/`) and working
//! trees (`project/.git/`) are recognized through [`find_repository`].

use std::fs::{self, Metadata};
use std::io;
use std::path::{Path, PathBuf};

use log::warn;

/// Log a filesystem error unless it is "not found".
pub(crate) fn report_io_error(action: &str, path: &Path, err: &io::Error) {
    if err.kind() != io::ErrorKind::NotFound {
        warn!("{} {}: {}", action, path.display(), err);
    }
}

/// Stat `path`, following symlinks.
///
/// Returns `None` when the path does not exist or cannot be inspected.
/// Failures other than "not found" are logged.
pub(crate) fn probe(path: &Path) -> Option<Metadata> {
    match fs::metadata(path) {
        Ok(metadata) => Some(metadata),
        Err(err) => {
            report_io_error("Error checking path", path, &err);
            None
        }
    }
}

/// Return true if `path` contains an `objects/` directory and a `HEAD` file.
pub fn is_repository_root(path: &Path) -> bool {
    let objects_is_dir = probe(&path.join("objects")).is_some_and(|m| m.is_dir());
    if !objects_is_dir {
        return false;
    }
    probe(&path.join("HEAD")).is_some_and(|m| m.is_file())
}

/// Find the git directory for `path`.
///
/// Checks `path` itself first and then `path/.git`, returning whichever is a
/// repository root.
pub fn find_repository(path: &Path) -> Option<PathBuf> {
    if is_repository_root(path) {
        return Some(path.to_path_buf());
    }
    let dotgit = path.join(".git");
    if is_repository_root(&dotgit) {
        return Some(dotgit);
    }
    None
}
