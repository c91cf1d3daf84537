//! Append-only memoization of resolved files, keyed by source name.
//!
//! Grounded on `SolFilesCache` in the teacher's `src/cache.rs`: a flat map
//! from source name to resolved artifact that the engine consults before
//! doing any I/O.

use std::collections::HashMap;

use crate::resolved_file::ResolvedFile;

#[derive(Debug, Default)]
pub struct ResolvedFileCache {
    entries: HashMap<String, ResolvedFile>,
}

impl ResolvedFileCache {
    pub fn get(&self, source_name: &str) -> Option<&ResolvedFile> {
        self.entries.get(source_name)
    }

    /// Inserts `file` under its own source name, returning the stored entry.
    /// The first insertion for a given source name wins; later calls with an
    /// identical file are no-ops, since resolution is deterministic.
    pub fn insert(&mut self, file: ResolvedFile) -> &ResolvedFile {
        let source_name = file.source_name().to_string();
        self.entries.entry(source_name).or_insert(file)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{path::PathBuf, sync::Arc};

    fn project_file(source_name: &str) -> ResolvedFile {
        ResolvedFile::ProjectFile {
            source_name: source_name.to_string(),
            absolute_path: PathBuf::from(format!("/project/{source_name}")),
            content: Arc::from("contract C {}"),
        }
    }

    #[test]
    fn insert_then_get_round_trips() {
        let mut cache = ResolvedFileCache::default();
        cache.insert(project_file("contracts/Token.sol"));
        assert_eq!(cache.get("contracts/Token.sol").unwrap().source_name(), "contracts/Token.sol");
        assert!(cache.get("contracts/Other.sol").is_none());
    }

    #[test]
    fn missing_key_returns_none() {
        let cache = ResolvedFileCache::default();
        assert!(cache.get("anything").is_none());
    }
}
