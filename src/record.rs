//! # Repository Records
//!
//! A `RepositoryRecord` is the metadata collected for one discovered
//! repository. Records are created by a [`RepoRegistry`](crate::registry::RepoRegistry),
//! filled in by the scanner, and fed configuration settings through a
//! registration callback.
//!
//! [`RepositoryRecord::apply_setting`] is the default registration callback.
//! It understands the well-known repository keys and keeps everything else
//! as opaque attributes.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::defaults::DEFAULT_DESCRIPTION;

/// Metadata for a discovered repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    /// Display name, relative to the scan root and possibly to the section.
    pub name: String,
    /// Identifier used in urls; starts out equal to the name.
    pub url: String,
    /// Absolute path of the repository's git directory.
    pub path: PathBuf,
    /// Human-readable owner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Grouping label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_branch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clone_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_link: Option<String>,
    /// Left out of listings unless explicitly asked for.
    #[serde(default, skip_serializing_if = "is_false")]
    pub hide: bool,
    /// Never listed.
    #[serde(default, skip_serializing_if = "is_false")]
    pub ignore: bool,
    /// Settings without a dedicated field, in key order.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim(), "1" | "true" | "yes")
}

impl RepositoryRecord {
    /// Create a record whose name and url are both `name`.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            url: name.to_string(),
            path: PathBuf::new(),
            owner: None,
            description: Some(DEFAULT_DESCRIPTION.to_string()),
            section: None,
            homepage: None,
            default_branch: None,
            clone_url: None,
            readme: None,
            logo: None,
            logo_link: None,
            hide: false,
            ignore: false,
            attributes: BTreeMap::new(),
        }
    }

    /// Whether the description is still unset, empty or the default.
    pub fn has_default_description(&self) -> bool {
        match self.description.as_deref() {
            None => true,
            Some(desc) => desc.is_empty() || desc == DEFAULT_DESCRIPTION,
        }
    }

    /// Drop a trailing `.git` from the url.
    pub fn remove_url_suffix(&mut self) {
        if let Some(stripped) = self.url.strip_suffix(".git") {
            let len = stripped.len();
            self.url.truncate(len);
        }
    }

    /// Apply one `key = value` setting to the record.
    ///
    /// This is the default registration callback used for both the legacy
    /// config file and the override file.
    pub fn apply_setting(&mut self, key: &str, value: &str) {
        match key {
            "url" => self.url = value.to_string(),
            "name" => self.name = value.to_string(),
            "path" => self.path = PathBuf::from(value),
            "desc" => self.description = Some(value.to_string()),
            "owner" => self.owner = Some(value.to_string()),
            "section" => self.section = Some(value.to_string()),
            "homepage" => self.homepage = Some(value.to_string()),
            "defbranch" => self.default_branch = Some(value.to_string()),
            "clone-url" => self.clone_url = Some(value.to_string()),
            "readme" => self.readme = Some(value.to_string()),
            "logo" => self.logo = Some(value.to_string()),
            "logo-link" => self.logo_link = Some(value.to_string()),
            "hide" => self.hide = parse_flag(value),
            "ignore" => self.ignore = parse_flag(value),
            _ => {
                self.attributes.insert(key.to_string(), value.to_string());
            }
        }
    }

    /// All settings in the order the `cgitrc` listing prints them, without
    /// the `repo.` prefix.
    pub fn settings(&self) -> Vec<(&str, String)> {
        let mut out: Vec<(&str, String)> = vec![
            ("url", self.url.clone()),
            ("name", self.name.clone()),
            ("path", self.path.to_string_lossy().into_owned()),
        ];
        let optional = [
            ("desc", &self.description),
            ("owner", &self.owner),
            ("homepage", &self.homepage),
            ("defbranch", &self.default_branch),
            ("clone-url", &self.clone_url),
            ("readme", &self.readme),
            ("logo", &self.logo),
            ("logo-link", &self.logo_link),
        ];
        for (key, value) in optional {
            if let Some(value) = value {
                out.push((key, value.clone()));
            }
        }
        if self.hide {
            out.push(("hide", "1".to_string()));
        }
        if self.ignore {
            out.push(("ignore", "1".to_string()));
        }
        for (key, value) in &self.attributes {
            out.push((key.as_str(), value.clone()));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_defaults() {
        let record = RepositoryRecord::new("tools/hello.git");
        assert_eq!(record.name, "tools/hello.git");
        assert_eq!(record.url, "tools/hello.git");
        assert_eq!(record.description.as_deref(), Some(DEFAULT_DESCRIPTION));
        assert!(record.has_default_description());
        assert!(record.owner.is_none());
    }

    #[test]
    fn test_has_default_description() {
        let mut record = RepositoryRecord::new("r");
        record.description = Some(String::new());
        assert!(record.has_default_description());
        record.description = None;
        assert!(record.has_default_description());
        record.description = Some("custom".to_string());
        assert!(!record.has_default_description());
    }

    #[test]
    fn test_remove_url_suffix() {
        let mut record = RepositoryRecord::new("tools/hello.git");
        record.remove_url_suffix();
        assert_eq!(record.url, "tools/hello");
        assert_eq!(record.name, "tools/hello.git");

        let mut plain = RepositoryRecord::new("plain");
        plain.remove_url_suffix();
        assert_eq!(plain.url, "plain");
    }

    #[test]
    fn test_apply_setting_known_keys() {
        let mut record = RepositoryRecord::new("r");
        record.apply_setting("desc", "A repository");
        record.apply_setting("owner", "Jane Doe");
        record.apply_setting("section", "tools");
        record.apply_setting("defbranch", "main");
        record.apply_setting("hide", "1");
        assert_eq!(record.description.as_deref(), Some("A repository"));
        assert_eq!(record.owner.as_deref(), Some("Jane Doe"));
        assert_eq!(record.section.as_deref(), Some("tools"));
        assert_eq!(record.default_branch.as_deref(), Some("main"));
        assert!(record.hide);
        assert!(!record.ignore);
    }

    #[test]
    fn test_apply_setting_unknown_key_is_kept() {
        let mut record = RepositoryRecord::new("r");
        record.apply_setting("enable-log-linecount", "0");
        assert_eq!(
            record.attributes.get("enable-log-linecount").map(String::as_str),
            Some("0")
        );
    }

    #[test]
    fn test_settings_order() {
        let mut record = RepositoryRecord::new("r");
        record.path = PathBuf::from("/srv/git/r");
        record.owner = Some("me".to_string());
        record.apply_setting("zzz", "1");
        let keys: Vec<&str> = record.settings().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["url", "name", "path", "desc", "owner", "zzz"]);
    }
}
