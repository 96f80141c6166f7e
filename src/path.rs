//! Path-to-name normalization for discovered repositories

use std::path::Path;

/// Strip a trailing `/.git` (or else a single trailing `/`) and any leading
/// `/` from a relative repository path.
pub fn normalize_name(rel: &str) -> &str {
    let rel = if rel == ".git" {
        ""
    } else if let Some(stripped) = rel.strip_suffix("/.git") {
        stripped
    } else if let Some(stripped) = rel.strip_suffix('/') {
        stripped.strip_suffix("/.git").unwrap_or(stripped)
    } else {
        rel
    };
    rel.trim_start_matches('/')
}

/// Derive the logical name of the repository at `repo_dir` relative to the
/// scan root `base`.
///
/// When `repo_dir` is not below `base` the whole path is used. The result
/// never starts or ends with `/` and never ends in `/.git`. If nothing is
/// left (the scan root is the repository itself), the repository
/// directory's own name is used instead.
pub fn relative_name(base: &Path, repo_dir: &Path) -> String {
    let rel = repo_dir.strip_prefix(base).unwrap_or(repo_dir);
    let rel = rel.to_string_lossy();
    let name = normalize_name(&rel).trim_end_matches('/');
    if !name.is_empty() {
        return name.to_string();
    }

    let dir = if repo_dir.file_name().is_some_and(|n| n == ".git") {
        repo_dir.parent().unwrap_or(repo_dir)
    } else {
        repo_dir
    };
    dir.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
