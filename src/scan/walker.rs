//! Tree walker: depth-first search for repository roots.

use std::path::Path;

use log::warn;
use walkdir::{DirEntry, WalkDir};

use super::{ConfigFn, Scanner};
use crate::classify::{self, report_io_error};
use crate::registry::RepoRegistry;

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().as_encoded_bytes().first() == Some(&b'.')
}

fn report_walk_error(err: &walkdir::Error) {
    let path = err.path().unwrap_or_else(|| Path::new(""));
    if let Some(ancestor) = err.loop_ancestor() {
        warn!(
            "Skipping filesystem loop at {}: points back to {}",
            path.display(),
            ancestor.display()
        );
        return;
    }
    match err.io_error() {
        Some(io_err) if err.depth() == 0 => {
            warn!("Error opening directory {}: {}", path.display(), io_err)
        }
        Some(io_err) => report_io_error("Error checking path", path, io_err),
        None => warn!("Error checking path {}: {}", path.display(), err),
    }
}

impl Scanner<'_> {
    /// Walk the tree at `path`, registering repositories relative to `base`.
    ///
    /// A directory that is a repository root, or whose `.git` is one, is
    /// registered and not descended into. Other directories are searched
    /// recursively, skipping entries whose name starts with `.` unless
    /// hidden paths are enabled. Symlinks are followed; links that lead back
    /// to one of their ancestors are reported and skipped. Entries are
    /// visited in file name order.
    pub fn scan_path(
        &self,
        base: &Path,
        path: &Path,
        registry: &mut dyn RepoRegistry,
        config_fn: &mut ConfigFn<'_>,
    ) {
        let scan_hidden = self.config.scan_hidden_path;

        let mut walker = WalkDir::new(path).follow_links(true).sort_by_file_name();
        if let Some(depth) = self.config.max_depth {
            walker = walker.max_depth(depth);
        }

        let mut entries = walker
            .into_iter()
            .filter_entry(move |e| e.depth() == 0 || scan_hidden || !is_hidden(e));

        while let Some(entry) = entries.next() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    report_walk_error(&err);
                    continue;
                }
            };

            if !entry.file_type().is_dir() {
                if entry.depth() == 0 {
                    warn!("Error opening directory {}: not a directory", entry.path().display());
                }
                continue;
            }

            if let Some(repo_dir) = classify::find_repository(entry.path()) {
                self.add_repo(base, &repo_dir, registry, config_fn);
                entries.skip_current_dir();
            }
        }
    }
}
