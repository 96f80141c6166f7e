//! Record builder: registers one repository and merges its metadata.

use std::fs::{File, Metadata};
use std::io::Read;
use std::path::Path;

use log::{debug, warn};

use super::{ConfigFn, Scanner};
use crate::classify::probe;
use crate::defaults::{DESCRIPTION_FILENAME, LEGACY_CONFIG_FILENAME, NOWEB_FILENAME};
use crate::error::{Error, Result};
use crate::path::relative_name;
use crate::record::RepositoryRecord;
use crate::registry::RepoRegistry;
use crate::{configfile, legacy, owner, section};

#[cfg(unix)]
fn owner_uid(metadata: &Metadata) -> Option<u32> {
    use std::os::unix::fs::MetadataExt;
    Some(metadata.uid())
}

#[cfg(not(unix))]
fn owner_uid(_metadata: &Metadata) -> Option<u32> {
    None
}

/// Read at most `limit` bytes of `path`, dropping trailing line breaks.
fn read_description(path: &Path, limit: usize) -> Result<String> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let mut buf = Vec::new();
    file.take(limit as u64)
        .read_to_end(&mut buf)
        .map_err(|e| Error::io(path, e))?;
    let text = String::from_utf8_lossy(&buf);
    Ok(text.trim_end_matches(['\r', '\n']).to_string())
}

fn log_error(err: &Error) {
    if !err.is_not_found() {
        warn!("{}", err);
    }
}

impl Scanner<'_> {
    /// Register the repository whose git directory is `path`.
    ///
    /// `base` is the scan root the repository name is derived from. Nothing
    /// is registered when `path` cannot be accessed, when it contains a
    /// `noweb` file, or when the strict-export marker is configured but
    /// missing.
    pub fn add_repo(
        &self,
        base: &Path,
        path: &Path,
        registry: &mut dyn RepoRegistry,
        config_fn: &mut ConfigFn<'_>,
    ) {
        let metadata = match std::fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(err) => {
                warn!("Error accessing {}: {}", path.display(), err);
                return;
            }
        };

        if let Some(marker) = &self.config.strict_export {
            if probe(&path.join(marker)).is_none() {
                debug!("Skipping {}: no {} marker", path.display(), marker);
                return;
            }
        }

        if probe(&path.join(NOWEB_FILENAME)).is_some() {
            debug!("Skipping {}: opted out with {}", path.display(), NOWEB_FILENAME);
            return;
        }

        let rel = relative_name(base, path);
        let record = registry.add_repo(&rel);
        // A registry may hand back a record from an earlier pass.
        record.name = rel.clone();
        record.url = rel.clone();

        if self.config.enable_git_config {
            let config_path = path.join(LEGACY_CONFIG_FILENAME);
            if let Err(err) = legacy::read_config(&config_path, |k, v| config_fn(record, k, v)) {
                log_error(&err);
            }
        }

        if self.config.remove_suffix {
            record.remove_url_suffix();
        }

        record.path = path.to_path_buf();

        if record.owner.is_none() {
            self.resolve_owner(path, &metadata, record);
        }

        if record.has_default_description() {
            let desc_path = path.join(DESCRIPTION_FILENAME);
            if probe(&desc_path).is_some_and(|m| m.is_file()) {
                match read_description(&desc_path, self.config.max_description_size) {
                    Ok(desc) => record.description = Some(desc),
                    Err(err) => log_error(&err),
                }
            }
        }

        if let Some(section) = section::from_path(&rel, self.config.section_from_path) {
            let name = section::strip_section(&record.name, section).to_string();
            record.section = Some(section.to_string());
            record.name = name;
        }

        let override_path = path.join(&self.config.override_file);
        if probe(&override_path).is_some() {
            if let Err(err) = configfile::parse_file(&override_path, |k, v| config_fn(record, k, v))
            {
                log_error(&err);
            }
        }

        debug!("Registered {} from {}", rel, path.display());
    }

    fn resolve_owner(&self, path: &Path, metadata: &Metadata, record: &mut RepositoryRecord) {
        let Some(uid) = owner_uid(metadata) else {
            return;
        };
        match owner::resolve(self.users, uid) {
            Ok(name) => record.owner = Some(name),
            Err(err) => warn!("Error reading owner-info for {}: {}", path.display(), err),
        }
    }
}
