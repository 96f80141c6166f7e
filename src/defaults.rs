//! Default values and well-known file names used while scanning.
//!
//! This module centralizes the names of the files that are looked up inside
//! each repository directory, along with the default values shared by the
//! library and the command-line tool.

use std::path::PathBuf;

/// Description every freshly registered repository starts out with.
pub const DEFAULT_DESCRIPTION: &str = "[no description]";

/// A repository containing this file is never registered.
pub const NOWEB_FILENAME: &str = "noweb";

/// Repository-local override file, applied last.
pub const OVERRIDE_FILENAME: &str = "cgitrc";

/// File whose contents become the repository description.
pub const DESCRIPTION_FILENAME: &str = "description";

/// Legacy per-repository config file (git-style INI).
pub const LEGACY_CONFIG_FILENAME: &str = "config";

/// Upper bound on how much of a `description` file is read.
pub const DEFAULT_MAX_DESCRIPTION_SIZE: usize = 64 * 1024;

/// File name of the scan configuration inside the config directory.
pub const CONFIG_FILENAME: &str = "config.yaml";

/// Returns the default location of the scan configuration file.
///
/// Uses the platform-appropriate configuration directory:
/// - Linux: `~/.config/repo-scan/config.yaml` (XDG Base Directory)
/// - macOS: `~/Library/Application Support/repo-scan/config.yaml`
/// - Windows: `{FOLDERID_RoamingAppData}\repo-scan\config.yaml`
///
/// Returns `None` when the platform has no configuration directory. This can
/// be overridden by the `--config` flag or the `REPO_SCAN_CONFIG`
/// environment variable.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("repo-scan").join(CONFIG_FILENAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_path_ends_with_file_name() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("repo-scan/config.yaml"));
        }
    }

    #[test]
    fn test_default_description_is_not_empty() {
        assert!(!DEFAULT_DESCRIPTION.is_empty());
    }
}
