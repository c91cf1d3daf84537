//! Node-style `(package_name, from_dir) -> package.json` resolution.
//!
//! The exact lookup algorithm is intentionally pluggable: the resolver only
//! depends on the [`NodeResolver`] trait, the same seam the teacher repo
//! draws around its own upward directory-scanning library lookup in
//! `foundry_compilers_core::utils::resolve_library`.

use std::path::{Path, PathBuf};

pub trait NodeResolver: Send + Sync {
    /// Looks up `package_name`'s manifest, searching `node_modules`
    /// directories from `from_abs_dir` upward through its ancestors, the way
    /// Node's own module resolution does.
    async fn resolve_manifest(&self, package_name: &str, from_abs_dir: &Path) -> Option<PathBuf>;
}

/// Walks `node_modules` directories upward from a starting directory,
/// following a single symlink hop on the package directory itself so that
/// monorepo siblings hoisted into `node_modules` (as pnpm/yarn workspaces do)
/// classify by their real location rather than the symlink's.
#[derive(Debug, Default, Clone, Copy)]
pub struct WalkingNodeResolver;

impl NodeResolver for WalkingNodeResolver {
    async fn resolve_manifest(&self, package_name: &str, from_abs_dir: &Path) -> Option<PathBuf> {
        let package_name = package_name.to_string();
        let from_abs_dir = from_abs_dir.to_path_buf();
        tokio::task::spawn_blocking(move || Self::resolve_manifest_blocking(&package_name, &from_abs_dir))
            .await
            .unwrap_or(None)
    }
}

impl WalkingNodeResolver {
    fn resolve_manifest_blocking(package_name: &str, from_abs_dir: &Path) -> Option<PathBuf> {
        let mut dir = Some(from_abs_dir);
        while let Some(d) = dir {
            let package_dir = d.join("node_modules").join(package_name);
            if package_dir.is_dir() {
                let package_dir = dunce::canonicalize(&package_dir).unwrap_or(package_dir);
                let manifest = package_dir.join("package.json");
                if manifest.is_file() {
                    return Some(manifest);
                }
            }
            dir = d.parent();
        }
        None
    }
}
