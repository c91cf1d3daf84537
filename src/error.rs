//! Error kinds surfaced by the resolver.
//!
//! Every variant here corresponds to one of the failure kinds the resolver is
//! specified to raise; `Io` is the one addition needed because the
//! [`Filesystem`](crate::Filesystem) collaborator is itself allowed to fail.

use std::{fmt, path::PathBuf};
use thiserror::Error;

pub type Result<T, E = ResolverError> = std::result::Result<T, E>;

/// Distinguishes whether a missing npm-style dependency was requested by the
/// project itself or by one of its resolved packages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DependencyOrigin {
    Project,
    Package(String),
}

impl fmt::Display for DependencyOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Project => f.write_str("the project"),
            Self::Package(root_source_name) => write!(f, "package `{root_source_name}`"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ResolverError {
    #[error("invalid user remapping `{0}`, expected `[context:]prefix=target`")]
    InvalidUserRemapping(String),

    #[error("invalid npm target in remapping `{0}`, expected `npm/<name>@(<major.minor.patch>|local)/...`")]
    InvalidNpmTarget(String),

    #[error("package `{0}` is not installed")]
    PackageNotInstalled(String),

    #[error("remapping `{0}` targets the project's own manifest")]
    RemapIntoProject(String),

    #[error("remapping `{0}` targets a monorepo sibling package but does not declare version `local`")]
    MonorepoVersionMismatch(String),

    #[error(
        "remapping `{raw}` declares `{name}@{declared}` but the installed package is at version `{installed}`"
    )]
    PackageVersionMismatch { raw: String, name: String, declared: String, installed: String },

    #[error("`{0}` is not within the project root")]
    NotWithinProject(PathBuf),

    #[error("project file `{0}` does not exist")]
    ProjectFileMissing(String),

    #[error("incorrect casing for `{requested}`, the file system has `{correct}`")]
    IncorrectCasing { requested: String, correct: String },

    #[error("import `{0}` from `{1}` would resolve outside the project root")]
    ImportOutsideProject(String, String),

    #[error("import `{0}` from `{1}` would resolve outside its package root")]
    ImportOutsidePackage(String, String),

    #[error("remapping `{remapping}` did not resolve to a local path; use an `npm/` target instead")]
    RemapNotLocal { remapping: String },

    #[error("malformed npm import `{0}`")]
    MalformedNpmImport(String),

    #[error("dependency `{package}` is not reachable from {origin}")]
    DependencyMissing { package: String, origin: DependencyOrigin },

    #[error("file `{path}` does not exist in package `{package}`")]
    FileMissingInPackage { package: String, path: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
