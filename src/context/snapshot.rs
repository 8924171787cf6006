// src/context/snapshot.rs

//! Persistent record of file content hashes from the last successful run.
//!
//! The snapshot lives at `<working_directory>/.gruntgate/snapshot`, one
//! entry per line:
//!
//! ```text
//! <blake3-hex> <path>
//! ```
//!
//! The hash comes first so that paths containing whitespace stay intact.
//! Paths are stored relative to the working directory where possible, with
//! forward slashes on every platform.

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Relative path (from the working directory) to the snapshot file.
pub const SNAPSHOT_FILE_PATH: &str = ".gruntgate/snapshot";

fn snapshot_file_path(root: &Path) -> PathBuf {
    root.join(SNAPSHOT_FILE_PATH)
}

/// In-memory view of the previous run's file hashes, keyed by the
/// normalised path string.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    entries: HashMap<String, String>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hash_for(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: String, hash: String) {
        self.entries.insert(key, hash);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Load the snapshot from `<root>/.gruntgate/snapshot`.
///
/// Returns `Ok(None)` when no snapshot exists yet, i.e. there has been no
/// previous successful run.
pub fn load(root: &Path) -> Result<Option<Snapshot>> {
    let path = snapshot_file_path(root);

    if !path.exists() {
        return Ok(None);
    }

    let file = File::open(&path)
        .with_context(|| format!("opening snapshot file at {:?}", path))?;
    let reader = BufReader::new(file);

    let mut snapshot = Snapshot::new();

    for line_res in reader.lines() {
        let line = line_res?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Some((hash, key)) = trimmed.split_once(char::is_whitespace) {
            snapshot.insert(key.trim().to_string(), hash.to_string());
        }
    }

    Ok(Some(snapshot))
}

/// Persist the snapshot to `<root>/.gruntgate/snapshot`.
pub fn save(root: &Path, snapshot: &Snapshot) -> Result<()> {
    let path = snapshot_file_path(root);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating snapshot directory at {:?}", parent))?;
    }

    let file = File::create(&path)
        .with_context(|| format!("creating snapshot file at {:?}", path))?;
    let mut writer = BufWriter::new(file);

    for (key, hash) in snapshot.entries.iter() {
        writeln!(writer, "{} {}", hash, key)?;
    }

    writer.flush()?;
    Ok(())
}
