// src/context/hash.rs

use std::fs::File;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use blake3::Hasher;

/// Compute the content hash of a single file.
pub fn hash_file(path: &Path) -> Result<String> {
    let mut hasher = Hasher::new();
    let mut file = File::open(path)
        .with_context(|| format!("opening file for hashing: {:?}", path))?;
    io::copy(&mut file, &mut hasher)
        .with_context(|| format!("hashing contents of {:?}", path))?;
    Ok(hasher.finalize().to_hex().to_string())
}
