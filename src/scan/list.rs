//! List mode: scan only the paths named in a project list file.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use super::{absolutize, ConfigFn, Scanner};
use crate::error::{Error, Result};
use crate::registry::RepoRegistry;

impl Scanner<'_> {
    /// Scan each path listed in `projects_file`.
    ///
    /// Every non-empty line names a path relative to `root` and is scanned
    /// as a tree of its own, so a line may name a single repository or a
    /// directory holding many. Names stay relative to `root`.
    ///
    /// Fails when the list cannot be opened or read. Repositories found
    /// before a read error remain registered.
    pub fn scan_projects(
        &self,
        root: &Path,
        projects_file: &Path,
        registry: &mut dyn RepoRegistry,
        config_fn: &mut ConfigFn<'_>,
    ) -> Result<()> {
        let root = absolutize(root);
        let list_error = |source| Error::ProjectList {
            path: projects_file.to_path_buf(),
            source,
        };

        let file = File::open(projects_file).map_err(list_error)?;
        for line in BufReader::new(file).lines() {
            let line = line.map_err(list_error)?;
            let line = line.strip_suffix('\r').unwrap_or(&line);
            if line.is_empty() {
                continue;
            }
            let path = root.join(line.trim_start_matches('/'));
            debug!("Scanning listed path {}", path.display());
            self.scan_path(&root, &path, registry, config_fn);
        }
        Ok(())
    }
}
