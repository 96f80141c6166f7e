//! # Scan Configuration
//!
//! This module defines `ScanConfig`, the set of knobs that control how a
//! directory tree is scanned and how repository metadata is collected, and
//! the logic for loading it from a YAML file.
//!
//! ## Format
//!
//! Keys are kebab-case and every key is optional:
//!
//! ```yaml
//! scan-paths:
//!   - /srv/git
//! enable-git-config: true
//! remove-suffix: true
//! section-from-path: 1
//! strict-export: git-daemon-export-ok
//! ```
//!
//! Unknown keys are rejected so that typos do not silently turn a feature
//! off.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::defaults::{DEFAULT_MAX_DESCRIPTION_SIZE, OVERRIDE_FILENAME};
use crate::error::{Error, Result};

/// Settings consumed by the scanner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct ScanConfig {
    /// Roots scanned when none are given explicitly.
    pub scan_paths: Vec<PathBuf>,

    /// Newline-delimited list of paths (relative to the scan root) to scan
    /// instead of walking the whole tree.
    pub project_list: Option<PathBuf>,

    /// Name of a marker file that must exist in a repository for it to be
    /// registered.
    pub strict_export: Option<String>,

    /// Read the repository's legacy `config` file.
    pub enable_git_config: bool,

    /// Strip a trailing `.git` from repository urls.
    pub remove_suffix: bool,

    /// Descend into directories whose name starts with `.`.
    pub scan_hidden_path: bool,

    /// Number of path segments used as the section.
    ///
    /// Positive values count from the start of the relative path, negative
    /// values from the end. Zero disables sections.
    pub section_from_path: i32,

    /// Maximum directory depth below a scan root.
    pub max_depth: Option<usize>,

    /// Upper bound, in bytes, on the `description` file contents.
    pub max_description_size: usize,

    /// Name of the repository-local override file.
    pub override_file: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            scan_paths: Vec::new(),
            project_list: None,
            strict_export: None,
            enable_git_config: false,
            remove_suffix: false,
            scan_hidden_path: false,
            section_from_path: 0,
            max_depth: None,
            max_description_size: DEFAULT_MAX_DESCRIPTION_SIZE,
            override_file: OVERRIDE_FILENAME.to_string(),
        }
    }
}

impl ScanConfig {
    /// Check values that deserialize fine but make no sense.
    pub fn validate(&self) -> Result<()> {
        if self.override_file.is_empty() || self.override_file.contains('/') {
            return Err(Error::ConfigParse {
                message: format!("invalid override-file name '{}'", self.override_file),
                hint: Some("Use a plain file name such as 'cgitrc'".to_string()),
            });
        }
        if let Some(marker) = &self.strict_export {
            if marker.is_empty() || marker.contains('/') {
                return Err(Error::ConfigParse {
                    message: format!("invalid strict-export marker '{}'", marker),
                    hint: Some("Use a plain file name such as 'git-daemon-export-ok'".to_string()),
                });
            }
        }
        if self.max_depth == Some(0) {
            return Err(Error::ConfigParse {
                message: "max-depth must be at least 1".to_string(),
                hint: Some("Remove max-depth to scan without a depth limit".to_string()),
            });
        }
        Ok(())
    }
}

/// Parse a YAML document into a `ScanConfig`.
///
/// An empty document yields the defaults.
pub fn parse(yaml_content: &str) -> Result<ScanConfig> {
    if yaml_content.trim().is_empty() {
        return Ok(ScanConfig::default());
    }

    let config: ScanConfig = serde_yaml::from_str(yaml_content).map_err(|e| {
        let message = e.to_string();
        let hint = if message.contains("unknown field") {
            Some("Check the key spelling; keys are kebab-case (e.g. 'scan-hidden-path')".to_string())
        } else {
            None
        };
        Error::ConfigParse { message, hint }
    })?;

    config.validate()?;
    Ok(config)
}

/// Load a `ScanConfig` from a YAML file.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<ScanConfig> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Error::io(path, e)
        }
    })?;
    parse(&content)
}
