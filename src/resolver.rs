//! The resolution engine: ties the path, remapping, package, and cache
//! components together behind `resolve_project_file`/`resolve_import`.

use std::path::{Path, PathBuf};

use tracing::{instrument, trace};

use crate::{
    cache::ResolvedFileCache,
    dependency_map::{Dependency, DependencyMap, Origin},
    direct_import,
    error::{DependencyOrigin, ResolverError, Result},
    fs::{Filesystem, OsFilesystem},
    package::{classify, Classification, NodeResolver, Package, PackageManifest, WalkingNodeResolver},
    path_utils,
    remapping::{self, select, RemappingEntry, UserRemapping},
    resolved_file::ResolvedFile,
};

/// Magic import path always routed through npm, even when a local `hardhat/`
/// directory exists in the project or package root.
pub const HARDHAT_CONSOLE: &str = "hardhat/console.sol";

/// Resolves a project's Solidity import graph against its declared user
/// remappings and node-style package dependencies.
///
/// Generic over its two consumed collaborators so callers can substitute a
/// virtual file system or package locator (for editors, or for tests) without
/// paying for a boxed `dyn` future on every lookup.
pub struct Resolver<F: Filesystem = OsFilesystem, N: NodeResolver = WalkingNodeResolver> {
    fs: F,
    node_resolver: N,
    project_root: PathBuf,
    working_directory: Option<PathBuf>,
    user_remappings: Vec<UserRemapping>,
    cache: ResolvedFileCache,
    dependencies: DependencyMap,
}

impl Resolver<OsFilesystem, WalkingNodeResolver> {
    /// Builds a resolver backed by the real file system, validating
    /// `user_remapping_strings` against what is actually installed.
    #[instrument(skip(user_remapping_strings))]
    pub async fn create(
        project_root: impl Into<PathBuf> + std::fmt::Debug,
        user_remapping_strings: &[String],
        working_directory: Option<PathBuf>,
    ) -> Result<Self> {
        Self::create_with(OsFilesystem, WalkingNodeResolver, project_root, user_remapping_strings, working_directory)
            .await
    }

    /// Same as [`create`](Self::create), taking a [`ResolverConfig`] instead
    /// of three loose parameters.
    pub async fn create_from_config(config: crate::config::ResolverConfig) -> Result<Self> {
        Self::create(config.project_root, &config.remappings, config.working_directory).await
    }
}

impl<F: Filesystem, N: NodeResolver> Resolver<F, N> {
    /// Same as [`create`](Self::create), but with explicit collaborators.
    pub async fn create_with(
        fs: F,
        node_resolver: N,
        project_root: impl Into<PathBuf>,
        user_remapping_strings: &[String],
        working_directory: Option<PathBuf>,
    ) -> Result<Self> {
        let project_root = project_root.into();
        let working_directory = match working_directory {
            Some(wd) => Some(fs.real_path(&wd).await?),
            None => None,
        };

        let mut resolver = Self {
            fs,
            node_resolver,
            project_root,
            working_directory,
            user_remappings: Vec::new(),
            cache: ResolvedFileCache::default(),
            dependencies: DependencyMap::default(),
        };

        let mut user_remappings = Vec::with_capacity(user_remapping_strings.len());
        for raw in user_remapping_strings {
            let parsed = remapping::parse(raw)?;
            let target_package = if parsed.target.starts_with("npm/") {
                Some(resolver.resolve_remapping_target(&parsed).await?)
            } else {
                None
            };
            user_remappings.push(UserRemapping {
                raw_text: parsed.raw_text,
                context: parsed.context,
                prefix: parsed.prefix,
                target: parsed.target,
                target_package,
            });
        }
        resolver.user_remappings = user_remappings;

        Ok(resolver)
    }

    async fn resolve_remapping_target(&self, parsed: &remapping::ParsedRemapping) -> Result<Package> {
        let npm_target = remapping::parse_npm_target(&parsed.target)
            .ok_or_else(|| ResolverError::InvalidNpmTarget(parsed.raw_text.clone()))?;

        let manifest_path = self
            .node_resolver
            .resolve_manifest(&npm_target.name, &self.project_root)
            .await
            .ok_or_else(|| ResolverError::PackageNotInstalled(npm_target.name.clone()))?;

        let (classification, dependency) = self.build_dependency(&npm_target.name, &manifest_path).await?;
        match (classification, dependency) {
            (Classification::Project, _) => Err(ResolverError::RemapIntoProject(parsed.raw_text.clone())),
            (Classification::MonorepoSibling, Dependency::Package(pkg)) => {
                if npm_target.version != "local" {
                    Err(ResolverError::MonorepoVersionMismatch(parsed.raw_text.clone()))
                } else {
                    Ok(pkg)
                }
            }
            (Classification::Installed, Dependency::Package(pkg)) => {
                if !crate::package::versions_match(&npm_target.version, &pkg.version) {
                    Err(ResolverError::PackageVersionMismatch {
                        raw: parsed.raw_text.clone(),
                        name: npm_target.name.clone(),
                        declared: npm_target.version.clone(),
                        installed: pkg.version.clone(),
                    })
                } else {
                    Ok(pkg)
                }
            }
            (Classification::MonorepoSibling | Classification::Installed, Dependency::Project) => {
                unreachable!("build_dependency never pairs a non-project classification with Dependency::Project")
            }
        }
    }

    /// Classifies a located manifest and builds the [`Dependency`] it
    /// represents, reading `package.json` only when the package turns out to
    /// be a real installed dependency (a monorepo sibling's version is always
    /// the literal `local`, never read from its manifest).
    async fn build_dependency(&self, name: &str, manifest_path: &Path) -> Result<(Classification, Dependency)> {
        let manifest_dir = manifest_path.parent().expect("a package.json path has a parent directory").to_path_buf();
        let classification = classify(&manifest_dir, &self.project_root);
        let dependency = match classification {
            Classification::Project => Dependency::Project,
            Classification::MonorepoSibling => Dependency::Package(Package {
                name: name.to_string(),
                version: "local".to_string(),
                root_absolute_path: manifest_dir,
                root_source_name: format!("npm/{name}@local/"),
            }),
            Classification::Installed => {
                let manifest: PackageManifest = self.fs.read_json(manifest_path).await?;
                Dependency::Package(Package {
                    name: name.to_string(),
                    version: manifest.version.clone(),
                    root_absolute_path: manifest_dir,
                    root_source_name: format!("npm/{name}@{}/", manifest.version),
                })
            }
        };
        Ok((classification, dependency))
    }

    /// Resolves a project file by its absolute on-disk path, validating it is
    /// within the project root and has the file system's exact casing.
    #[instrument(skip(self))]
    pub async fn resolve_project_file(&mut self, absolute_path: &Path) -> Result<ResolvedFile> {
        let relative = absolute_path
            .strip_prefix(&self.project_root)
            .map_err(|_| ResolverError::NotWithinProject(absolute_path.to_path_buf()))?;
        let source_name = path_utils::to_forward_slash(relative);
        self.resolve_project_source(source_name).await
    }

    /// Resolves a single import string found in `from`'s content.
    pub async fn resolve_import(&mut self, from: &ResolvedFile, import_string: &str) -> Result<ResolvedFile> {
        let direct = self.compute_direct_import(from, import_string)?;
        trace!(from = from.source_name(), import_string, direct, "resolving import");

        match from {
            ResolvedFile::ProjectFile { source_name, .. } => {
                self.resolve_from_project(source_name, &direct).await
            }
            ResolvedFile::PackageFile { package, .. } => {
                let package = package.clone();
                self.resolve_from_package(package, &direct).await
            }
        }
    }

    /// Returns the user-declared remappings and the remappings implied by
    /// the dependency map accumulated so far, in the `{context, prefix,
    /// target}` shape a solc/Hardhat-style front end can pass straight
    /// through to the compiler.
    pub fn get_remappings(&self) -> Vec<RemappingEntry> {
        let mut entries: Vec<RemappingEntry> = self.user_remappings.iter().map(UserRemapping::to_entry).collect();

        if !self.dependencies.is_empty() {
            entries.push(RemappingEntry {
                context: "npm/".to_string(),
                prefix: "npm/".to_string(),
                target: "npm/".to_string(),
            });
        }

        for (origin, imported_package_name, dependency) in self.dependencies.iter() {
            let context = match origin {
                Origin::Project => String::new(),
                Origin::Package(root_source_name) => root_source_name.clone(),
            };
            let target = match dependency {
                Dependency::Project => String::new(),
                Dependency::Package(pkg) => pkg.root_source_name.clone(),
            };
            entries.push(RemappingEntry { context, prefix: format!("{imported_package_name}/"), target });
        }

        entries
    }

    pub fn working_directory(&self) -> Option<&Path> {
        self.working_directory.as_deref()
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    fn compute_direct_import(&self, from: &ResolvedFile, import_string: &str) -> Result<String> {
        if !import_string.starts_with("./") && !import_string.starts_with("../") {
            return Ok(import_string.to_string());
        }

        let dir = path_utils::dirname(from.source_name());
        let direct = path_utils::join_source(dir, import_string);

        match from {
            ResolvedFile::ProjectFile { source_name, .. } => {
                if direct == ".." || direct.starts_with("../") {
                    return Err(ResolverError::ImportOutsideProject(import_string.to_string(), source_name.clone()));
                }
            }
            ResolvedFile::PackageFile { package, source_name, .. } => {
                if !direct.starts_with(&package.root_source_name) {
                    return Err(ResolverError::ImportOutsidePackage(import_string.to_string(), source_name.clone()));
                }
            }
        }

        Ok(direct)
    }

    async fn is_local(&self, root_abs: &Path, direct: &str) -> bool {
        if direct == HARDHAT_CONSOLE {
            return false;
        }
        let Some((first_segment, _)) = direct.split_once('/') else {
            return true;
        };
        self.fs.exists(&root_abs.join(first_segment)).await
    }

    async fn resolve_from_project(&mut self, from_source_name: &str, direct: &str) -> Result<ResolvedFile> {
        if let Some(remapping) = select(&self.user_remappings, from_source_name, direct) {
            return self.resolve_via_remapping(remapping.clone(), direct).await;
        }

        if self.is_local(&self.project_root.clone(), direct).await {
            return self.resolve_project_source(direct.to_string()).await;
        }

        self.resolve_through_npm(Origin::Project, self.project_root.clone(), direct).await
    }

    /// User remappings only ever apply to a project-origin import; a package
    /// can never redirect its own imports through the project's remapping
    /// rules, so this path never consults `select`. Keeps the dependency map
    /// a function of the project's configuration alone.
    async fn resolve_from_package(&mut self, package: Package, direct: &str) -> Result<ResolvedFile> {
        if direct.starts_with(&package.root_source_name) {
            return self.resolve_package_source(package, direct.to_string()).await;
        }

        if self.is_local(&package.root_absolute_path.clone(), direct).await {
            let source_name = format!("{}{direct}", package.root_source_name);
            return self.resolve_package_source(package, source_name).await;
        }

        let base_dir = package.root_absolute_path.clone();
        self.resolve_through_npm(Origin::Package(package.root_source_name.clone()), base_dir, direct).await
    }

    async fn resolve_via_remapping(&mut self, remapping: UserRemapping, direct: &str) -> Result<ResolvedFile> {
        let remapped = format!("{}{}", remapping.target, &direct[remapping.prefix.len()..]);

        if let Some(target_package) = remapping.target_package {
            debug_assert!(
                remapped.starts_with(&target_package.root_source_name),
                "a remapping's target always begins with its own resolved package's root_source_name"
            );
            return self.resolve_package_source(target_package, remapped).await;
        }

        if self.is_local(&self.project_root.clone(), &remapped).await {
            return self.resolve_project_source(remapped).await;
        }

        Err(ResolverError::RemapNotLocal { remapping: remapping.raw_text })
    }

    async fn resolve_through_npm(&mut self, origin: Origin, base_dir: PathBuf, direct: &str) -> Result<ResolvedFile> {
        let (imported_package_name, path) =
            direct_import::parse_direct_import(direct).ok_or_else(|| ResolverError::MalformedNpmImport(direct.to_string()))?;

        if self.dependencies.get(&origin, &imported_package_name).is_none() {
            let manifest_path = self.node_resolver.resolve_manifest(&imported_package_name, &base_dir).await.ok_or_else(
                || ResolverError::DependencyMissing {
                    package: imported_package_name.clone(),
                    origin: match &origin {
                        Origin::Project => DependencyOrigin::Project,
                        Origin::Package(root) => DependencyOrigin::Package(root.clone()),
                    },
                },
            )?;
            let (_, dependency) = self.build_dependency(&imported_package_name, &manifest_path).await?;
            self.dependencies.record(origin.clone(), imported_package_name.clone(), dependency);
        }

        let dependency = self.dependencies.get(&origin, &imported_package_name).expect("just recorded above").clone();
        match dependency {
            Dependency::Project => self.resolve_project_source(path).await,
            Dependency::Package(package) => {
                let source_name = format!("{}{path}", package.root_source_name);
                self.resolve_package_source(package, source_name).await
            }
        }
    }

    async fn resolve_project_source(&mut self, source_name: String) -> Result<ResolvedFile> {
        if let Some(existing) = self.cache.get(&source_name) {
            return Ok(existing.clone());
        }
        let (absolute_path, content) = self
            .resolve_relative_in_root(&self.project_root.clone(), &source_name, |rel| ResolverError::ProjectFileMissing(rel))
            .await?;
        let file = ResolvedFile::ProjectFile { source_name, absolute_path, content };
        Ok(self.cache.insert(file).clone())
    }

    async fn resolve_package_source(&mut self, package: Package, source_name: String) -> Result<ResolvedFile> {
        if let Some(existing) = self.cache.get(&source_name) {
            return Ok(existing.clone());
        }
        let relative = source_name
            .strip_prefix(&package.root_source_name)
            .expect("source_name always begins with its package's root_source_name")
            .to_string();
        let package_name = package.name.clone();
        let (absolute_path, content) = self
            .resolve_relative_in_root(&package.root_absolute_path.clone(), &relative, move |rel| {
                ResolverError::FileMissingInPackage { package: package_name.clone(), path: rel }
            })
            .await?;
        let file = ResolvedFile::PackageFile { source_name, absolute_path, content, package };
        Ok(self.cache.insert(file).clone())
    }

    async fn resolve_relative_in_root(
        &self,
        root_abs: &Path,
        relative: &str,
        missing_err: impl FnOnce(String) -> ResolverError,
    ) -> Result<(PathBuf, std::sync::Arc<str>)> {
        match self.fs.true_case(root_abs, relative).await? {
            Some(correct) if correct == relative => {
                let absolute_path = root_abs.join(&correct);
                let content = self.fs.read_utf8(&absolute_path).await?;
                Ok((absolute_path, std::sync::Arc::from(content)))
            }
            Some(correct) => Err(ResolverError::IncorrectCasing { requested: relative.to_string(), correct }),
            None => Err(missing_err(relative.to_string())),
        }
    }
}
