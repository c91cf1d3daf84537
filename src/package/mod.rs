//! Package identity, `package.json` manifests, and node-style resolution.

mod classify;
mod locator;

pub use classify::{classify, Classification};
pub use locator::{NodeResolver, WalkingNodeResolver};

use std::path::PathBuf;

/// A resolved npm-style dependency root: either a real installed package or a
/// monorepo sibling whose version is pinned to the literal `local`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    pub name: String,
    pub version: String,
    pub root_absolute_path: PathBuf,
    pub root_source_name: String,
}

/// The subset of a `package.json` the resolver cares about.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct PackageManifest {
    pub name: String,
    #[serde(default)]
    pub version: String,
}

/// Compares two dotted-triple version strings as declared by a user
/// remapping's `npm/<name>@<version>/` target against a package's installed
/// `package.json` version. Parsed with [`semver::Version`] rather than
/// compared byte-for-byte so equivalent versions that differ only in leading
/// zero padding or similar cosmetic formatting still match; falls back to a
/// plain string comparison for inputs `semver` can't parse (the `local`
/// literal neither side should reach here with).
pub fn versions_match(declared: &str, installed: &str) -> bool {
    match (semver::Version::parse(declared), semver::Version::parse(installed)) {
        (Ok(a), Ok(b)) => a == b,
        _ => declared == installed,
    }
}

#[cfg(test)]
mod version_tests {
    use super::*;

    #[test]
    fn identical_versions_match() {
        assert!(versions_match("1.2.3", "1.2.3"));
    }

    #[test]
    fn different_versions_do_not_match() {
        assert!(!versions_match("1.2.3", "1.2.4"));
    }

    #[test]
    fn unparseable_versions_fall_back_to_string_equality() {
        assert!(versions_match("local", "local"));
        assert!(!versions_match("local", "1.0.0"));
    }
}
