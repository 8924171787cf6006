// src/context/scan.rs

//! Source directory traversal and the default exclusion rules.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};

/// Paths never considered build inputs, regardless of configuration.
///
/// Version-control metadata, the snapshot state directory itself,
/// installed dependencies and common editor droppings.
const DEFAULT_EXCLUDES: &[&str] = &[
    "**/.git/**",
    "**/.svn/**",
    "**/.hg/**",
    "**/.gruntgate/**",
    "**/node_modules/**",
    "**/.DS_Store",
    "**/*.swp",
    "**/*~",
];

/// Compiled exclusion rules applied when scanning a source directory.
///
/// Relative paths (forward slashes) are matched against the exclude set;
/// everything that does not match is included. Patterns of the form
/// `.../**` additionally prune the named directory from the walk, since
/// `x/**` matches the contents of `x` but not `x` itself.
#[derive(Debug, Clone)]
pub struct ScanProfile {
    exclude_set: GlobSet,
    prune_set: GlobSet,
}

impl ScanProfile {
    /// Build a profile from the default exclusions plus any configured
    /// extra patterns.
    pub fn new(extra_excludes: &[String]) -> Result<Self> {
        let mut exclude = GlobSetBuilder::new();
        let mut prune = GlobSetBuilder::new();

        for pat in DEFAULT_EXCLUDES {
            exclude.add(Glob::new(pat).expect("default exclude pattern is valid"));
            if let Some(prefix) = pat.strip_suffix("/**") {
                prune.add(Glob::new(prefix).expect("default exclude pattern is valid"));
            }
        }
        for pat in extra_excludes {
            let glob = Glob::new(pat)
                .with_context(|| format!("invalid exclude pattern: {pat}"))?;
            exclude.add(glob);
            if let Some(prefix) = pat.strip_suffix("/**") {
                let glob = Glob::new(prefix)
                    .with_context(|| format!("invalid exclude pattern: {pat}"))?;
                prune.add(glob);
            }
        }

        Ok(Self {
            exclude_set: exclude.build()?,
            prune_set: prune.build()?,
        })
    }

    /// Returns true if a file at this path (relative to the scan root)
    /// counts as a build input.
    pub fn includes(&self, rel_path: &str) -> bool {
        !self.exclude_set.is_match(rel_path)
    }

    /// Returns true if a directory at this path should not be descended
    /// into at all.
    pub fn prunes(&self, rel_path: &str) -> bool {
        self.prune_set.is_match(rel_path)
    }
}

/// Collect all files under `root` that pass the profile's exclusion rules.
pub fn collect_files(root: &Path, profile: &ScanProfile) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut stack = vec![root.to_path_buf()];

    while let Some(dir) = stack.pop() {
        let entries = std::fs::read_dir(&dir)
            .with_context(|| format!("reading directory {:?}", dir))?;

        for entry in entries {
            let path = entry
                .with_context(|| format!("reading entry in {:?}", dir))?
                .path();
            let Ok(rel) = path.strip_prefix(root) else {
                continue;
            };
            let rel_str = rel.to_string_lossy().replace('\\', "/");

            if path.is_dir() {
                if !profile.prunes(&rel_str) {
                    stack.push(path);
                }
            } else if path.is_file() && profile.includes(&rel_str) {
                files.push(path);
            }
        }
    }

    Ok(files)
}
