// src/context/mod.rs

//! Build-context capability: what changed since the last successful run.
//!
//! The gate consumes this through the [`BuildContext`] trait so that tests
//! can script build state without touching a real filesystem. The
//! production implementation is [`SnapshotContext`], backed by a content
//! snapshot of the previous successful run:
//!
//! - [`hash`] hashes individual files.
//! - [`snapshot`] loads and saves the snapshot file.
//! - [`scan`] walks a source directory with the default exclusion rules.

pub mod hash;
pub mod scan;
pub mod snapshot;

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use tracing::{debug, warn};

use crate::errors::Result;

pub use scan::ScanProfile;
pub use snapshot::Snapshot;

/// Capability describing the state of the previous build.
///
/// Read-only from the gate's perspective; one instance per build
/// invocation.
pub trait BuildContext {
    /// Whether this build can be treated as incremental. A full (clean)
    /// build must always run every step.
    fn is_incremental(&self) -> bool;

    /// Whether `path` was added or modified since the last recorded run.
    fn has_delta(&self, path: &Path) -> bool;

    /// Changed files under `dir`, honouring the default inclusion rules.
    fn scan(&self, dir: &Path) -> Result<Vec<PathBuf>>;
}

/// `BuildContext` backed by the on-disk snapshot of the previous
/// successful run.
pub struct SnapshotContext {
    root: PathBuf,
    snapshot: Snapshot,
    had_snapshot: bool,
    full_build: bool,
    profile: ScanProfile,
}

impl SnapshotContext {
    /// Open the context for a working directory.
    ///
    /// `full_build` forces non-incremental behaviour even when a snapshot
    /// from a previous run exists.
    pub fn open(
        root: impl Into<PathBuf>,
        extra_excludes: &[String],
        full_build: bool,
    ) -> anyhow::Result<Self> {
        let root = root.into();
        let profile = ScanProfile::new(extra_excludes)?;
        let prior = snapshot::load(&root)?;
        let had_snapshot = prior.is_some();

        debug!(
            root = %root.display(),
            had_snapshot,
            full_build,
            "opened build context"
        );

        Ok(Self {
            root,
            snapshot: prior.unwrap_or_default(),
            had_snapshot,
            full_build,
            profile,
        })
    }

    /// The snapshot key for a path: relative to the working directory
    /// with forward slashes where possible, the absolute path otherwise.
    fn key_for(&self, path: &Path) -> String {
        match path.strip_prefix(&self.root) {
            Ok(rel) => rel.to_string_lossy().replace('\\', "/"),
            Err(_) => path.to_string_lossy().replace('\\', "/"),
        }
    }

    /// Rebuild the snapshot from the current contents of the given files
    /// and source directory, and persist it.
    ///
    /// Called after a successful run only; a failed or skipped run leaves
    /// the previous snapshot in place.
    pub fn refresh_snapshot(
        &self,
        files: &[PathBuf],
        srcdir: Option<&Path>,
    ) -> anyhow::Result<()> {
        let mut fresh = Snapshot::new();

        for file in files {
            if file.is_file() {
                let hash = hash::hash_file(file)?;
                fresh.insert(self.key_for(file), hash);
            }
        }

        if let Some(dir) = srcdir {
            if dir.is_dir() {
                for file in scan::collect_files(dir, &self.profile)? {
                    let hash = hash::hash_file(&file)?;
                    fresh.insert(self.key_for(&file), hash);
                }
            }
        }

        snapshot::save(&self.root, &fresh)
            .with_context(|| format!("saving snapshot under {:?}", self.root))?;

        debug!(entries = fresh.len(), "snapshot refreshed");
        Ok(())
    }
}

impl BuildContext for SnapshotContext {
    fn is_incremental(&self) -> bool {
        self.had_snapshot && !self.full_build
    }

    fn has_delta(&self, path: &Path) -> bool {
        // Deletions are not deltas; only added or modified files count.
        if !path.is_file() {
            return false;
        }

        match hash::hash_file(path) {
            Ok(hash) => {
                let key = self.key_for(path);
                self.snapshot.hash_for(&key) != Some(hash.as_str())
            }
            Err(err) => {
                // Unreadable files are treated as changed so a needed run
                // is never silently skipped.
                warn!(
                    path = %path.display(),
                    error = %err,
                    "could not hash file, treating as changed"
                );
                true
            }
        }
    }

    fn scan(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let candidates = scan::collect_files(dir, &self.profile)
            .with_context(|| format!("scanning source directory {:?}", dir))?;

        let changed: Vec<PathBuf> = candidates
            .into_iter()
            .filter(|path| self.has_delta(path))
            .collect();

        debug!(
            dir = %dir.display(),
            changed = changed.len(),
            "source directory scan complete"
        );
        Ok(changed)
    }
}
