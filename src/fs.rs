//! The file-system collaborator the resolver is built against, plus a real
//! `tokio::fs`-backed implementation.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

/// Filesystem access as the resolver needs it. Kept narrow and async so a
/// caller embedding this crate in a language-server-style process can plug in
/// an in-memory or overlay file system for unsaved editor buffers.
pub trait Filesystem: Send + Sync {
    async fn exists(&self, path: &Path) -> bool;

    async fn read_utf8(&self, path: &Path) -> std::io::Result<String>;

    /// Resolves `relative` against `base_abs` using whatever casing the
    /// underlying storage actually has, returning the true-case relative
    /// path, or `None` if no such file exists regardless of casing.
    async fn true_case(&self, base_abs: &Path, relative: &str) -> std::io::Result<Option<String>>;

    /// Canonicalizes a path, resolving symlinks. Used only on the configured
    /// working directory, never on the project root or package roots
    /// themselves, so that dependency classification keeps operating on raw
    /// paths.
    async fn real_path(&self, path: &Path) -> std::io::Result<PathBuf>;

    async fn read_json<T: DeserializeOwned>(&self, path: &Path) -> std::io::Result<T> {
        let content = self.read_utf8(path).await?;
        serde_json::from_str(&content).map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err))
    }
}

/// The real file system, via `tokio::fs`. Directory scans and canonicalization
/// run on the blocking pool since neither `std::fs::read_dir` nor `dunce` are
/// async-aware, mirroring how the teacher repo keeps that work off the async
/// runtime in its own `RuntimeOrHandle` abstraction.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFilesystem;

impl Filesystem for OsFilesystem {
    async fn exists(&self, path: &Path) -> bool {
        tokio::fs::metadata(path).await.is_ok()
    }

    async fn read_utf8(&self, path: &Path) -> std::io::Result<String> {
        tokio::fs::read_to_string(path).await
    }

    async fn true_case(&self, base_abs: &Path, relative: &str) -> std::io::Result<Option<String>> {
        let base_abs = base_abs.to_path_buf();
        let relative = relative.to_string();
        tokio::task::spawn_blocking(move || Self::true_case_blocking(&base_abs, &relative))
            .await
            .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))?
    }

    async fn real_path(&self, path: &Path) -> std::io::Result<PathBuf> {
        let path = path.to_path_buf();
        tokio::task::spawn_blocking(move || dunce::canonicalize(&path))
            .await
            .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))?
    }
}

impl OsFilesystem {
    fn true_case_blocking(base_abs: &Path, relative: &str) -> std::io::Result<Option<String>> {
        let mut current = base_abs.to_path_buf();
        let mut resolved = Vec::new();

        for part in relative.split('/').filter(|p| !p.is_empty()) {
            let mut exact = None;
            let mut nearest: Option<String> = None;
            for entry in std::fs::read_dir(&current)? {
                let entry = entry?;
                let name = entry.file_name().to_string_lossy().into_owned();
                if name == part {
                    exact = Some(name);
                    break;
                }
                if nearest.is_none() && name.eq_ignore_ascii_case(part) {
                    nearest = Some(name);
                }
            }
            let Some(matched) = exact.or(nearest) else {
                return Ok(None);
            };
            current = current.join(&matched);
            resolved.push(matched);
        }

        Ok(Some(resolved.join("/")))
    }
}
