//! Content sources: where manifests and step files are fetched from.

use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;

/// Fetches tutorial files by path relative to the content root.
#[async_trait]
pub trait ContentSource: Send + Sync + std::fmt::Debug {
    /// Reads the file at `path` as text.
    async fn fetch(&self, path: &Path) -> io::Result<String>;
}

/// Rejects absolute paths and `..` so manifest keys cannot escape the root.
fn check_relative(path: &Path) -> io::Result<()> {
    let escapes = path
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if escapes {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("path escapes content root: {}", path.display()),
        ));
    }
    Ok(())
}

/// Reads files from a directory on disk.
#[derive(Debug, Clone)]
pub struct DirSource {
    /// Content root; tutorials are its sub-directories.
    pub base_dir: PathBuf,
}

impl DirSource {
    /// Creates a source rooted at `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Resolves a relative path against the content root.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.base_dir.join(path)
    }
}

#[async_trait]
impl ContentSource for DirSource {
    async fn fetch(&self, path: &Path) -> io::Result<String> {
        check_relative(path)?;
        tokio::fs::read_to_string(self.resolve(path)).await
    }
}

/// In-memory source for tests and embedders.
///
/// Records every fetch, and can delay or fail individual paths.
#[derive(Debug, Default)]
pub struct MemorySource {
    files: Mutex<HashMap<PathBuf, String>>,
    failing: Mutex<HashSet<PathBuf>>,
    latency: Mutex<HashMap<PathBuf, Duration>>,
    fetches: Mutex<Vec<PathBuf>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MemorySource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a file.
    pub fn add_file(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        lock(&self.files).insert(path.into(), content.into());
    }

    /// Removes a file.
    pub fn remove_file(&self, path: &Path) {
        lock(&self.files).remove(path);
    }

    /// Makes fetches of `path` fail with a permission error.
    pub fn fail_path(&self, path: impl Into<PathBuf>) {
        lock(&self.failing).insert(path.into());
    }

    /// Delays fetches of `path`.
    pub fn delay_path(&self, path: impl Into<PathBuf>, delay: Duration) {
        lock(&self.latency).insert(path.into(), delay);
    }

    /// Every path fetched so far, in request order.
    pub fn fetches(&self) -> Vec<PathBuf> {
        lock(&self.fetches).clone()
    }

    /// Number of times `path` was fetched.
    pub fn fetch_count(&self, path: &Path) -> usize {
        lock(&self.fetches).iter().filter(|p| *p == path).count()
    }

    /// Forgets recorded fetches.
    pub fn clear_fetches(&self) {
        lock(&self.fetches).clear();
    }
}

#[async_trait]
impl ContentSource for MemorySource {
    async fn fetch(&self, path: &Path) -> io::Result<String> {
        check_relative(path)?;
        lock(&self.fetches).push(path.to_path_buf());

        let delay = lock(&self.latency).get(path).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if lock(&self.failing).contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("fetch refused: {}", path.display()),
            ));
        }

        lock(&self.files)
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "File not found"))
    }
}
