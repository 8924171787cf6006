// src/refresh.rs

//! Post-run output refresh hook.
//!
//! After a successful run, an integrating build system or IDE may want to
//! be told that the output directory's contents changed so its caches can
//! be invalidated. The hook is fire-and-forget: no return contract.

use std::path::Path;

use tracing::info;

/// Notification hook for a freshly written output directory.
pub trait OutputRefresher {
    fn refresh(&self, dir: &Path);
}

/// Default refresher: announces the refreshed directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogRefresher;

impl OutputRefresher for LogRefresher {
    fn refresh(&self, dir: &Path) {
        info!(dir = %dir.display(), "output directory refreshed");
    }
}
