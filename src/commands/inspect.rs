//! # Inspect Command Implementation
//!
//! This module implements the `inspect` subcommand, which checks whether a
//! single directory is a repository and, if so, shows the record the scanner
//! would build for it without walking anything else.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use repo_scan::classify;
use repo_scan::output::{self, OutputConfig};
use repo_scan::record::RepositoryRecord;
use repo_scan::registry::RepoList;
use repo_scan::scan::Scanner;
use repo_scan::suggestions;

use super::{FormatArg, ScanOptions};

/// Show the record built for a single repository
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Repository directory (bare, or a working tree containing .git).
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Scan root the repository name is relative to. Defaults to the parent
    /// of PATH.
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum, default_value = "cgitrc")]
    pub format: FormatArg,

    #[command(flatten)]
    pub options: ScanOptions,
}

/// Execute the `inspect` command.
pub fn execute(args: InspectArgs, output: &OutputConfig) -> Result<()> {
    let config = args.options.load()?;
    let path = std::path::absolute(&args.path)?;

    let repo_dir = classify::find_repository(&path)
        .ok_or_else(|| suggestions::not_a_repository(&path))?;

    let root = match &args.root {
        Some(root) => std::path::absolute(root)?,
        None => path.parent().map(PathBuf::from).unwrap_or_else(|| path.clone()),
    };

    let mut repos = RepoList::new();
    Scanner::new(&config).add_repo(
        &root,
        &repo_dir,
        &mut repos,
        &mut RepositoryRecord::apply_setting,
    );

    if repos.is_empty() {
        anyhow::bail!(
            "{} was not registered (opted out, missing export marker, or unreadable)",
            repo_dir.display()
        );
    }

    let shown: Vec<&RepositoryRecord> = repos.iter().collect();
    print!("{}", output::render(&shown, args.format.into(), output)?);
    Ok(())
}
