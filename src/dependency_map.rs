//! Records which npm-style package name resolves to which dependency, keyed
//! by the importing origin, so the lookup happens once per (origin, name)
//! pair no matter how many files import it.

use std::collections::BTreeMap;

use crate::package::Package;

/// Either the project itself or a specific resolved package, as the
/// importing side of a dependency-map entry.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Origin {
    Project,
    /// The package's `root_source_name`.
    Package(String),
}

/// Either the project sentinel or a concrete resolved package, as the
/// imported side of a dependency-map entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dependency {
    Project,
    Package(Package),
}

/// `origin -> imported_package_name -> dependency`. A `BTreeMap` backs this
/// rather than a `HashMap` so that `Resolver::get_remappings` emits entries
/// in a stable order across calls against the same resolver state.
#[derive(Debug, Default)]
pub struct DependencyMap {
    map: BTreeMap<Origin, BTreeMap<String, Dependency>>,
}

impl DependencyMap {
    pub fn get(&self, origin: &Origin, imported_package_name: &str) -> Option<&Dependency> {
        self.map.get(origin).and_then(|inner| inner.get(imported_package_name))
    }

    /// Records a dependency resolution. Recording the same
    /// `(origin, imported_package_name)` pair twice with differing
    /// dependencies indicates a bug in the caller: resolution of a given pair
    /// is expected to be stable for the lifetime of a `Resolver`.
    pub fn record(&mut self, origin: Origin, imported_package_name: String, dependency: Dependency) {
        let slot = self.map.entry(origin).or_default().entry(imported_package_name);
        match slot {
            std::collections::btree_map::Entry::Occupied(existing) => {
                debug_assert_eq!(existing.get(), &dependency, "dependency map entry overwritten with a conflicting value");
            }
            std::collections::btree_map::Entry::Vacant(empty) => {
                empty.insert(dependency);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.map.values().all(|inner| inner.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Origin, &String, &Dependency)> {
        self.map.iter().flat_map(|(origin, inner)| inner.iter().map(move |(name, dep)| (origin, name, dep)))
    }
}
