//! # Error Suggestions
//!
//! Helpers that build CLI errors carrying `hint:` lines, so an error says
//! what went wrong and how to fix it.
//!
//! ```rust,ignore
//! use repo_scan::suggestions;
//!
//! return Err(suggestions::scan_root_not_found(path));
//! ```

use std::path::Path;

/// Generate an error for a scan root that does not exist.
pub fn scan_root_not_found(path: &Path) -> anyhow::Error {
    anyhow::anyhow!(
        "Scan root not found: {path}\n\n\
         hint: Check the path for typos\n\
         hint: Relative paths are resolved from the current directory",
        path = path.display()
    )
}

/// Generate an error for when no scan root was given anywhere.
pub fn no_scan_roots() -> anyhow::Error {
    anyhow::anyhow!(
        "No directory to scan\n\n\
         hint: Pass one or more directories, e.g. 'repo-scan scan /srv/git'\n\
         hint: Or list them under 'scan-paths' in the configuration file"
    )
}

/// Generate an error for an explicitly requested configuration file that
/// does not exist.
pub fn config_not_found(path: &Path) -> anyhow::Error {
    anyhow::anyhow!(
        "Configuration file not found: {path}\n\n\
         hint: Use -c/--config to specify a different path\n\
         hint: Set the REPO_SCAN_CONFIG environment variable",
        path = path.display()
    )
}

/// Generate an error for a project list that does not exist.
pub fn project_list_not_found(path: &Path) -> anyhow::Error {
    anyhow::anyhow!(
        "Project list not found: {path}\n\n\
         hint: The project list holds one path per line, relative to the scan root\n\
         hint: Drop --project-list to scan the whole tree instead",
        path = path.display()
    )
}

/// Generate an error for a path that is not a repository.
pub fn not_a_repository(path: &Path) -> anyhow::Error {
    anyhow::anyhow!(
        "Not a repository: {path}\n\n\
         hint: A repository has an 'objects' directory and a 'HEAD' file\n\
         hint: For a working tree, pass the directory that contains '.git'",
        path = path.display()
    )
}
