//! Shared test utilities for integration and E2E tests.
//!
//! This module provides a fixture that lays out fake repository trees in a
//! temporary directory, plus a helper to run the binary against it.
//!
//! ## Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_bare_repo("tools/hello.git");
//!     fixture.command().arg("scan").arg(fixture.path()).assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
#[allow(unused_imports)]
pub mod prelude {
    pub use assert_cmd::Command;
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    pub use super::TestFixture;
}

/// A temporary directory populated with fake repositories.
///
/// A fake repository is just enough to be recognized: an `objects/`
/// directory and a `HEAD` file.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

#[allow(dead_code)]
impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add a bare repository at `path` (e.g. `tools/hello.git`).
    pub fn with_bare_repo(self, path: &str) -> Self {
        self.make_git_dir(path);
        self
    }

    /// Add a working tree at `path` with its repository in `path/.git`.
    pub fn with_work_tree(self, path: &str) -> Self {
        self.make_git_dir(&format!("{}/.git", path));
        self.temp_dir
            .child(path)
            .child("README.md")
            .write_str("# readme\n")
            .expect("Failed to write README");
        self
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `rel` inside the fixture.
    pub fn join(&self, rel: &str) -> PathBuf {
        self.temp_dir.path().join(rel)
    }

    /// Create a command for the repo-scan binary, running in the fixture.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::cargo_bin("repo-scan").expect("binary is built");
        cmd.current_dir(self.path())
            .env_remove("REPO_SCAN_CONFIG")
            .env("NO_COLOR", "1")
            // Keep the user's own configuration file out of the way.
            .env("XDG_CONFIG_HOME", self.path().join(".no-config"))
            .env("HOME", self.path().join(".no-home"));
        cmd
    }

    fn make_git_dir(&self, path: &str) {
        let dir = self.temp_dir.child(path);
        dir.child("objects")
            .create_dir_all()
            .expect("Failed to create objects dir");
        dir.child("HEAD")
            .write_str("ref: refs/heads/main\n")
            .expect("Failed to write HEAD");
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
