//! # Scan Command Implementation
//!
//! This module implements the `scan` subcommand, which searches one or more
//! directory trees for repositories and prints what it found.
//!
//! ## Functionality
//!
//! - **Tree Scan**: Walks every root and registers each repository found
//! - **Project List**: With `--project-list`, only the listed paths below the
//!   root are scanned
//! - **Formats**: Plain text, cgitrc include lines, JSON or YAML
//!
//! This command is read-only.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use repo_scan::output::{self, OutputConfig};
use repo_scan::record::RepositoryRecord;
use repo_scan::registry::RepoList;
use repo_scan::scan::Scanner;
use repo_scan::suggestions;

use super::{FormatArg, ScanOptions};

/// Scan directory trees for repositories and list them
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Directories to scan. Defaults to `scan-paths` from the configuration.
    #[arg(value_name = "ROOT")]
    pub roots: Vec<PathBuf>,

    /// Only scan the paths listed in FILE, one per line, relative to ROOT.
    #[arg(long, value_name = "FILE")]
    pub project_list: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: FormatArg,

    /// Also list repositories marked hide=1.
    #[arg(short, long)]
    pub all: bool,

    #[command(flatten)]
    pub options: ScanOptions,
}

/// Execute the `scan` command.
///
/// Every root is scanned into the same list, in the order given. Problems
/// with individual paths are logged and skipped; only a missing root or an
/// unreadable project list fails the command.
pub fn execute(args: ScanArgs, output: &OutputConfig) -> Result<()> {
    let config = args.options.load()?;

    let roots = if args.roots.is_empty() {
        config.scan_paths.clone()
    } else {
        args.roots.clone()
    };
    if roots.is_empty() {
        return Err(suggestions::no_scan_roots());
    }
    if let Some(missing) = roots.iter().find(|root| !root.is_dir()) {
        return Err(suggestions::scan_root_not_found(missing));
    }

    let project_list = args.project_list.clone().or_else(|| config.project_list.clone());
    if let Some(list) = &project_list {
        if !list.is_file() {
            return Err(suggestions::project_list_not_found(list));
        }
    }

    let scanner = Scanner::new(&config);
    let mut repos = RepoList::new();
    for root in &roots {
        match &project_list {
            Some(list) => scanner
                .scan_projects(root, list, &mut repos, &mut RepositoryRecord::apply_setting)
                .with_context(|| format!("Failed to scan projects below {}", root.display()))?,
            None => scanner.scan_tree(root, &mut repos, &mut RepositoryRecord::apply_setting),
        }
    }
    log::info!("Found {} repositories", repos.len());

    let shown = output::visible(repos.iter(), args.all);
    print!("{}", output::render(&shown, args.format.into(), output)?);
    Ok(())
}
