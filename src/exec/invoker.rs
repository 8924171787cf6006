// src/exec/invoker.rs

//! Run the gated task exactly once and normalise the outcome.

use std::path::Path;

use tracing::info;

use crate::errors::TaskExecutionError;
use crate::exec::runner::TaskRunner;
use crate::refresh::OutputRefresher;

/// Execute the task with the given arguments.
///
/// Only called after an `Execute` verdict. Any runner failure surfaces as
/// exactly one [`TaskExecutionError`]. On success, if an output directory
/// is configured, the refresh hook is invoked synchronously afterwards;
/// the hook's own behaviour is outside this contract and deliberately not
/// guarded here. Not retried.
pub async fn invoke(
    runner: &dyn TaskRunner,
    arguments: &str,
    outputdir: Option<&Path>,
    refresher: &dyn OutputRefresher,
) -> Result<(), TaskExecutionError> {
    runner.execute(arguments).await?;

    if let Some(dir) = outputdir {
        info!(outputdir = %dir.display(), "refreshing output directory after task");
        refresher.refresh(dir);
    }

    Ok(())
}
