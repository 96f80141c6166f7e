//! # Repository Scanning Library
//!
//! This library finds git repositories below one or more directories and
//! builds a metadata record for each of them. It backs the `repo-scan`
//! command-line tool but can be used on its own by anything that needs to
//! publish a tree of repositories, such as a web front end.
//!
//! ## Quick Example
//!
//! ```no_run
//! use repo_scan::config::ScanConfig;
//! use repo_scan::scan::Scanner;
//! use std::path::Path;
//!
//! let config = ScanConfig {
//!     section_from_path: 1,
//!     ..ScanConfig::default()
//! };
//! let repos = Scanner::new(&config).collect(Path::new("/srv/git"));
//! for repo in repos.iter() {
//!     println!("{}: {}", repo.name, repo.path.display());
//! }
//! ```
//!
//! ## Core Concepts
//!
//! - **Classification (`classify`)**: A directory is a repository when it has
//!   an `objects/` directory and a `HEAD` file, either itself (bare) or in its
//!   `.git` subdirectory (working tree).
//! - **Records (`record`, `registry`)**: Each repository becomes a
//!   `RepositoryRecord`. Records are created through a `RepoRegistry` owned by
//!   the caller, and settings reach them through a registration callback.
//! - **Metadata sources**: the relative path (`path`, `section`), the legacy
//!   git-style `config` file (`legacy`), the directory owner (`owner`), the
//!   `description` file, and the repository-local override file
//!   (`configfile`), which is applied last and wins.
//! - **Scanning (`scan`)**: A depth-first walk that stops at every repository
//!   it finds, or a scan of only the paths named in a project list.
//!
//! Scanning is best effort: filesystem errors are logged through the `log`
//! facade and the affected path or piece of metadata is skipped.

pub mod classify;
pub mod config;
pub mod configfile;
pub mod defaults;
pub mod error;
pub mod legacy;
pub mod output;
pub mod owner;
pub mod path;
pub mod record;
pub mod registry;
pub mod scan;
pub mod section;
pub mod suggestions;

#[cfg(test)]
mod path_proptest;
