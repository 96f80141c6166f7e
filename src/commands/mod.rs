//! # CLI Command Implementations
//!
//! Each subcommand of `repo-scan` lives in its own file with:
//! - An `Args` struct that defines the command-specific arguments and
//!   options, derived using `clap`.
//! - An `execute` function that takes the parsed `Args` and runs the command
//!   on top of the `repo_scan` library.
//!
//! The scan settings shared by all commands are defined here in
//! [`ScanOptions`].

pub mod inspect;
pub mod scan;

use anyhow::Result;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

use repo_scan::config::{self, ScanConfig};
use repo_scan::defaults::default_config_path;
use repo_scan::error::Error;
use repo_scan::output::OutputFormat;

/// Scan settings; each flag overrides the configuration file.
#[derive(Args, Debug, Default)]
pub struct ScanOptions {
    /// Path to a YAML scan configuration file.
    ///
    /// Defaults to `repo-scan/config.yaml` in the platform configuration
    /// directory, when that file exists.
    #[arg(short, long, value_name = "FILE", env = "REPO_SCAN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Marker file a repository must contain to be listed.
    #[arg(long, value_name = "NAME")]
    pub strict_export: Option<String>,

    /// Read gitweb.* and cgit.* settings from each repository's config file.
    #[arg(long)]
    pub enable_git_config: bool,

    /// Strip a trailing ".git" from repository urls.
    #[arg(long)]
    pub remove_suffix: bool,

    /// Also search directories whose name starts with ".".
    #[arg(long)]
    pub scan_hidden_path: bool,

    /// Derive sections from this many leading (positive) or trailing
    /// (negative) path segments.
    #[arg(long, value_name = "N", allow_hyphen_values = true)]
    pub section_from_path: Option<i32>,

    /// Do not search deeper than this many directories below a root.
    #[arg(long, value_name = "NUM")]
    pub max_depth: Option<usize>,
}

impl ScanOptions {
    /// Load the configuration file (if any) and apply the flags on top.
    pub fn load(&self) -> Result<ScanConfig> {
        let mut config = match &self.config {
            Some(path) => config::from_file(path).map_err(|e| match e {
                Error::ConfigNotFound { path } => repo_scan::suggestions::config_not_found(&path),
                other => anyhow::Error::new(other),
            })?,
            None => match default_config_path().filter(|p| p.is_file()) {
                Some(path) => {
                    log::debug!("Using configuration {}", path.display());
                    config::from_file(&path)?
                }
                None => ScanConfig::default(),
            },
        };

        if let Some(marker) = &self.strict_export {
            config.strict_export = Some(marker.clone());
        }
        config.enable_git_config |= self.enable_git_config;
        config.remove_suffix |= self.remove_suffix;
        config.scan_hidden_path |= self.scan_hidden_path;
        if let Some(n) = self.section_from_path {
            config.section_from_path = n;
        }
        if let Some(depth) = self.max_depth {
            config.max_depth = Some(depth);
        }

        config.validate()?;
        Ok(config)
    }
}

/// Output format choices on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum FormatArg {
    /// Repositories grouped by section
    #[default]
    Text,
    /// section= and repo.*= lines for inclusion in a cgitrc
    Cgitrc,
    /// JSON array of records
    Json,
    /// YAML list of records
    Yaml,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Cgitrc => OutputFormat::Cgitrc,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Yaml => OutputFormat::Yaml,
        }
    }
}
