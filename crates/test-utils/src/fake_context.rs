use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use anyhow::anyhow;
use gruntgate::context::BuildContext;
use gruntgate::errors::{GruntgateError, Result};

/// A scripted build context for gate tests.
///
/// Every answer is fixed up front: whether the build is incremental,
/// which paths report a delta, and what each directory scan returns.
#[derive(Debug, Default)]
pub struct FakeBuildContext {
    incremental: bool,
    deltas: HashSet<PathBuf>,
    scans: HashMap<PathBuf, Vec<PathBuf>>,
    scan_fails: bool,
}

impl FakeBuildContext {
    /// An incremental context with no deltas and empty scans.
    pub fn incremental() -> Self {
        Self {
            incremental: true,
            ..Self::default()
        }
    }

    /// A full-build context; the gate should never get past
    /// `is_incremental` with this one.
    pub fn full_build() -> Self {
        Self::default()
    }

    pub fn with_delta(mut self, path: impl Into<PathBuf>) -> Self {
        self.deltas.insert(path.into());
        self
    }

    pub fn with_scan(
        mut self,
        dir: impl Into<PathBuf>,
        files: Vec<PathBuf>,
    ) -> Self {
        self.scans.insert(dir.into(), files);
        self
    }

    /// Make every scan fail, to exercise the gate's degrade-to-execute
    /// path.
    pub fn with_failing_scan(mut self) -> Self {
        self.scan_fails = true;
        self
    }
}

impl BuildContext for FakeBuildContext {
    fn is_incremental(&self) -> bool {
        self.incremental
    }

    fn has_delta(&self, path: &Path) -> bool {
        self.deltas.contains(path)
    }

    fn scan(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        if self.scan_fails {
            return Err(GruntgateError::Other(anyhow!("scripted scan failure")));
        }
        Ok(self.scans.get(dir).cloned().unwrap_or_default())
    }
}
