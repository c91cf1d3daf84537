//! Utilities for building throwaway project/`node_modules` trees for tests
//! and benchmarks, mirroring the teacher's own `project-util` feature and the
//! `TempProject` builder it provides (referenced from `src/lib.rs` but kept
//! out of the retrieval pack) — here scoped to exactly what the resolver's
//! own test scenarios need: a project root with a manifest, source files,
//! and installed/sibling packages.

use std::path::{Path, PathBuf};

use rand::Rng;

/// A project root plus whatever `node_modules`/monorepo-sibling layout a test
/// populates on top of it, backed by a [`tempfile::TempDir`] that is removed
/// when this value drops.
pub struct FakeProject {
    root: tempfile::TempDir,
}

impl FakeProject {
    /// Creates a fresh temporary directory containing a `package.json` named
    /// `name`, so it classifies as the project root for
    /// [`crate::package::classify`].
    pub fn new(name: &str) -> std::io::Result<Self> {
        let root = tempfile::tempdir()?;
        std::fs::write(root.path().join("package.json"), format!(r#"{{"name":"{name}","version":"0.0.0"}}"#))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Writes `content` at `relative` under the project root, creating parent
    /// directories as needed.
    pub fn add_source(&self, relative: &str, content: &str) -> std::io::Result<PathBuf> {
        let path = self.root.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, content)?;
        Ok(path)
    }

    /// Installs a fake package under `node_modules/<name>` with the given
    /// `version` and source files, as [`crate::package::classify`] would see
    /// an installed dependency.
    pub fn install_package(&self, name: &str, version: &str, files: &[(&str, &str)]) -> std::io::Result<PathBuf> {
        let pkg_dir = self.root.path().join("node_modules").join(name);
        std::fs::create_dir_all(&pkg_dir)?;
        std::fs::write(pkg_dir.join("package.json"), format!(r#"{{"name":"{name}","version":"{version}"}}"#))?;
        for (relative, content) in files {
            let path = pkg_dir.join(relative);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, content)?;
        }
        Ok(pkg_dir)
    }

    /// Copies an entire fixture directory (e.g. a checked-in sample project)
    /// into the project root, preserving its tree. Used for larger scenario
    /// fixtures where listing every file with [`Self::add_source`] would be
    /// unwieldy.
    pub fn copy_fixture(&self, fixture_dir: &Path) -> Result<(), fs_extra::error::Error> {
        let options = fs_extra::dir::CopyOptions::new().content_only(true).overwrite(true);
        fs_extra::dir::copy(fixture_dir, self.root.path(), &options)?;
        Ok(())
    }

    /// Creates a monorepo sibling directory next to the project root (not
    /// under `node_modules`), with its own `package.json` and source files,
    /// and (on unix) hoists it into `node_modules` via a symlink the way a
    /// pnpm/yarn workspace would — the only way [`crate::package::WalkingNodeResolver`]
    /// can discover it at all, since node-style resolution only ever looks
    /// inside `node_modules` directories.
    pub fn add_sibling(&self, name: &str, files: &[(&str, &str)]) -> std::io::Result<PathBuf> {
        let parent = self.root.path().parent().expect("tempdir has a parent").to_path_buf();
        let sibling_dir = parent.join(format!("{name}-{}", rand::thread_rng().gen::<u32>()));
        std::fs::create_dir_all(&sibling_dir)?;
        std::fs::write(sibling_dir.join("package.json"), format!(r#"{{"name":"{name}","version":"0.0.0"}}"#))?;
        for (relative, content) in files {
            let path = sibling_dir.join(relative);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, content)?;
        }

        #[cfg(unix)]
        {
            let node_modules = self.root.path().join("node_modules");
            std::fs::create_dir_all(&node_modules)?;
            std::os::unix::fs::symlink(&sibling_dir, node_modules.join(name))?;
        }

        Ok(sibling_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_project_with_installed_package() {
        let project = FakeProject::new("proj").unwrap();
        project.add_source("contracts/Token.sol", "contract Token {}").unwrap();
        project.install_package("dep", "1.2.3", &[("X.sol", "contract X {}")]).unwrap();

        assert!(project.root().join("package.json").is_file());
        assert!(project.root().join("contracts/Token.sol").is_file());
        assert!(project.root().join("node_modules/dep/package.json").is_file());
    }
}
