// src/gate.rs

//! The incremental execution gate.
//!
//! A one-shot, point-in-time decision: given the previous build state and
//! the configured trigger inputs, does the external task need to run this
//! build cycle at all? The gate is a stateless free function so it can be
//! tested without any runtime harness; all memory across invocations
//! lives in the [`BuildContext`](crate::context::BuildContext).

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::context::BuildContext;

/// Trigger file checked when no explicit trigger files are configured.
pub const DEFAULT_TRIGGER_FILE: &str = "Gruntfile.js";

/// Outcome of the gate decision. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Execute,
    Skip,
}

/// The files whose modification alone forces a run.
///
/// An empty `triggerfiles` list means "check the single default trigger
/// file in the working directory", never "no triggers at all". A
/// non-empty list fully replaces the default trigger file.
pub fn effective_triggerfiles(
    working_directory: &Path,
    triggerfiles: &[PathBuf],
) -> Vec<PathBuf> {
    if triggerfiles.is_empty() {
        vec![working_directory.join(DEFAULT_TRIGGER_FILE)]
    } else {
        triggerfiles.to_vec()
    }
}

/// Decide whether the external task must run this build cycle.
///
/// - With no build context, or on a full (non-incremental) build, the
///   task always runs.
/// - A changed trigger file forces a run.
/// - Without a source directory no skip-check is possible, so the task
///   runs (with a notice).
/// - Otherwise the verdict follows the source directory scan: any changed
///   file means run, none means skip.
///
/// A failed scan also yields [`Verdict::Execute`]; the gate never skips a
/// run it cannot prove redundant.
pub fn decide(
    context: Option<&dyn BuildContext>,
    working_directory: &Path,
    triggerfiles: &[PathBuf],
    srcdir: Option<&Path>,
) -> Verdict {
    let Some(ctx) = context else {
        debug!("no build context available, executing unconditionally");
        return Verdict::Execute;
    };

    if !ctx.is_incremental() {
        debug!("full build, executing unconditionally");
        return Verdict::Execute;
    }

    for trigger in effective_triggerfiles(working_directory, triggerfiles) {
        if ctx.has_delta(&trigger) {
            info!(trigger = %trigger.display(), "trigger file changed");
            return Verdict::Execute;
        }
    }

    let Some(srcdir) = srcdir else {
        info!("no source directory configured: not checking for modified files");
        return Verdict::Execute;
    };

    match ctx.scan(srcdir) {
        Ok(changed) if !changed.is_empty() => {
            info!(
                srcdir = %srcdir.display(),
                changed = changed.len(),
                "modified files in source directory"
            );
            Verdict::Execute
        }
        Ok(_) => Verdict::Skip,
        Err(err) => {
            warn!(
                srcdir = %srcdir.display(),
                error = %err,
                "source directory scan failed, executing"
            );
            Verdict::Execute
        }
    }
}
