//! Registration targets for discovered repositories.
//!
//! The scanner does not own the records it builds. It asks a
//! [`RepoRegistry`] for a record by name and fills it in place, so the
//! caller decides how records are stored and how names collide.

use std::collections::HashMap;

use crate::record::RepositoryRecord;

/// Owner of repository records.
pub trait RepoRegistry {
    /// Return the record registered under `key`, creating it if needed.
    fn add_repo(&mut self, key: &str) -> &mut RepositoryRecord;
}

/// Ordered in-memory registry.
///
/// Records keep the order in which they were first registered. Lookups are
/// by the key passed to [`RepoRegistry::add_repo`], which stays stable even
/// when settings later rename the record or change its url.
#[derive(Debug, Clone, Default)]
pub struct RepoList {
    records: Vec<RepositoryRecord>,
    index: HashMap<String, usize>,
}

impl RepoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record registered under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&RepositoryRecord> {
        self.index.get(key).map(|&i| &self.records[i])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &RepositoryRecord> {
        self.records.iter()
    }

    pub fn into_records(self) -> Vec<RepositoryRecord> {
        self.records
    }
}

impl RepoRegistry for RepoList {
    fn add_repo(&mut self, key: &str) -> &mut RepositoryRecord {
        let next = self.records.len();
        let index = *self.index.entry(key.to_string()).or_insert(next);
        if index == next {
            self.records.push(RepositoryRecord::new(key));
        }
        &mut self.records[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_repo_creates_record() {
        let mut list = RepoList::new();
        let record = list.add_repo("tools/hello");
        assert_eq!(record.name, "tools/hello");
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_add_repo_fetches_existing() {
        let mut list = RepoList::new();
        list.add_repo("a").owner = Some("me".to_string());
        let again = list.add_repo("a");
        assert_eq!(again.owner.as_deref(), Some("me"));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_lookup_survives_rename() {
        let mut list = RepoList::new();
        list.add_repo("a/b").name = "b".to_string();
        assert_eq!(list.get("a/b").map(|r| r.name.as_str()), Some("b"));
        list.add_repo("a/b");
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_iteration_order() {
        let mut list = RepoList::new();
        list.add_repo("z");
        list.add_repo("a");
        list.add_repo("z");
        let names: Vec<&str> = list.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["z", "a"]);
    }
}
