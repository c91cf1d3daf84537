//! The resolved-file value type threaded through the whole crate.

use std::{path::Path, path::PathBuf, sync::Arc};

use crate::package::Package;

/// A Solidity source file the resolver has located, read, and validated,
/// tagged by whether it came from the project or an npm-style package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedFile {
    ProjectFile { source_name: String, absolute_path: PathBuf, content: Arc<str> },
    PackageFile { source_name: String, absolute_path: PathBuf, content: Arc<str>, package: Package },
}

impl ResolvedFile {
    pub fn source_name(&self) -> &str {
        match self {
            Self::ProjectFile { source_name, .. } | Self::PackageFile { source_name, .. } => source_name,
        }
    }

    pub fn absolute_path(&self) -> &Path {
        match self {
            Self::ProjectFile { absolute_path, .. } | Self::PackageFile { absolute_path, .. } => absolute_path,
        }
    }

    pub fn content(&self) -> &str {
        match self {
            Self::ProjectFile { content, .. } | Self::PackageFile { content, .. } => content,
        }
    }

    pub fn package(&self) -> Option<&Package> {
        match self {
            Self::PackageFile { package, .. } => Some(package),
            Self::ProjectFile { .. } => None,
        }
    }

    pub fn is_project_file(&self) -> bool {
        matches!(self, Self::ProjectFile { .. })
    }
}
