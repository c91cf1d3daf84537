//! A config struct for assembling a [`Resolver`](crate::resolver::Resolver)
//! from a larger project configuration, alongside `Resolver::create`'s plain
//! constructor, the same pairing the teacher offers via
//! `Project::builder()`/`ProjectBuilder` next to its direct constructors.

use std::path::PathBuf;

/// `Resolver::create`'s three construction inputs, bundled into one value so
/// a caller assembling a resolver from e.g. a `foundry.toml`-style file can
/// build it incrementally before handing it to
/// [`Resolver::create_from_config`](crate::resolver::Resolver::create_from_config).
#[derive(Debug, Clone, Default)]
pub struct ResolverConfig {
    pub project_root: PathBuf,
    pub remappings: Vec<String>,
    pub working_directory: Option<PathBuf>,
}

impl ResolverConfig {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self { project_root: project_root.into(), remappings: Vec::new(), working_directory: None }
    }

    pub fn remapping(mut self, remapping: impl Into<String>) -> Self {
        self.remappings.push(remapping.into());
        self
    }

    pub fn remappings(mut self, remappings: impl IntoIterator<Item = String>) -> Self {
        self.remappings.extend(remappings);
        self
    }

    pub fn working_directory(mut self, working_directory: impl Into<PathBuf>) -> Self {
        self.working_directory = Some(working_directory.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_accumulates_remappings() {
        let config = ResolverConfig::new("/project")
            .remapping("dep/=npm/dep@1.2.3/")
            .remapping("other/=npm/other@1.0.0/")
            .working_directory("/project");
        assert_eq!(config.project_root, PathBuf::from("/project"));
        assert_eq!(config.remappings, vec!["dep/=npm/dep@1.2.3/".to_string(), "other/=npm/other@1.0.0/".to_string()]);
        assert_eq!(config.working_directory, Some(PathBuf::from("/project")));
    }
}
