//! # Repository Scanning
//!
//! This module ties the building blocks together into the two scanning
//! entry points:
//!
//! 1.  **Tree mode (`Scanner::scan_tree`)**: Walks a directory tree
//!     depth-first. Every directory that is a repository root (or holds a
//!     `.git` directory that is one) is handed to the record builder, and
//!     the walk does not descend into it any further.
//!
//! 2.  **List mode (`Scanner::scan_projects`)**: Reads a file of paths
//!     relative to the scan root and runs a tree scan from each of them.
//!
//! For every repository found, the record builder (`Scanner::add_repo`)
//! registers a record and merges metadata from the filesystem layout, the
//! legacy `config` file, the owner of the directory, the `description` file
//! and the repository-local override file.
//!
//! Scanning never fails as a whole. Filesystem errors are logged and the
//! affected path is skipped or the affected piece of metadata left out.
//! Records are created through a caller-supplied [`RepoRegistry`] and
//! settings are applied through a caller-supplied callback, so the scanner
//! keeps no state between calls.

mod builder;
mod list;
mod walker;

use std::path::{Path, PathBuf};

use log::warn;

use crate::config::ScanConfig;
use crate::owner::{SystemUserDatabase, UserDatabase};
use crate::record::RepositoryRecord;
use crate::registry::{RepoList, RepoRegistry};

/// Registration callback: applies one `key`/`value` setting to a record.
pub type ConfigFn<'f> = dyn FnMut(&mut RepositoryRecord, &str, &str) + 'f;

static SYSTEM_USERS: SystemUserDatabase = SystemUserDatabase;

/// Repository scanner for one configuration.
pub struct Scanner<'a> {
    config: &'a ScanConfig,
    users: &'a dyn UserDatabase,
}

impl<'a> Scanner<'a> {
    /// Create a scanner that resolves owners through the system user
    /// database.
    pub fn new(config: &'a ScanConfig) -> Self {
        Self {
            config,
            users: &SYSTEM_USERS,
        }
    }

    /// Resolve owners through `users` instead of the system database.
    pub fn with_user_database(mut self, users: &'a dyn UserDatabase) -> Self {
        self.users = users;
        self
    }

    pub fn config(&self) -> &ScanConfig {
        self.config
    }

    /// Scan the tree below `root`, registering every repository found.
    pub fn scan_tree(
        &self,
        root: &Path,
        registry: &mut dyn RepoRegistry,
        config_fn: &mut ConfigFn<'_>,
    ) {
        let root = absolutize(root);
        self.scan_path(&root, &root, registry, config_fn);
    }

    /// Scan `root` into a fresh [`RepoList`] using the default registration
    /// callback.
    pub fn collect(&self, root: &Path) -> RepoList {
        let mut list = RepoList::new();
        self.scan_tree(root, &mut list, &mut RepositoryRecord::apply_setting);
        list
    }
}

/// Make `path` absolute without touching the filesystem.
pub(crate) fn absolutize(path: &Path) -> PathBuf {
    match std::path::absolute(path) {
        Ok(absolute) => absolute,
        Err(err) => {
            warn!("Error resolving path {}: {}", path.display(), err);
            path.to_path_buf()
        }
    }
}
