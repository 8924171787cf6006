// src/exec/runner.rs

//! The `TaskRunner` capability trait and its process-spawning
//! implementation.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::process::Stdio;

use tokio::process::Command;
use tracing::info;

use crate::errors::{InstallationError, TaskExecutionError};
use crate::exec::resolve::resolve_runner;

/// Trait abstracting how the external task is executed.
///
/// One method, one failure kind: implementations run the task with the
/// given raw argument string and report any underlying failure (nonzero
/// exit, launch I/O error) as a single [`TaskExecutionError`]. Tests can
/// substitute an implementation that never spawns a real process.
pub trait TaskRunner: Send + Sync {
    fn execute(
        &self,
        arguments: &str,
    ) -> Pin<Box<dyn Future<Output = Result<(), TaskExecutionError>> + Send + '_>>;
}

/// Production runner: spawns the resolved executable in the working
/// directory and waits for it to exit.
///
/// The child inherits stdout/stderr; the task's output belongs to the
/// user. The calling future suspends until the process exits; no timeout
/// is imposed here.
#[derive(Debug)]
pub struct ProcessTaskRunner {
    program: PathBuf,
    working_directory: PathBuf,
}

impl ProcessTaskRunner {
    /// Resolve `command` and prepare a runner for the given working
    /// directory. Fails with an [`InstallationError`] when the executable
    /// cannot be located.
    pub fn new(
        working_directory: impl Into<PathBuf>,
        command: &str,
    ) -> Result<Self, InstallationError> {
        let working_directory = working_directory.into();
        let program = resolve_runner(&working_directory, command)?;
        Ok(Self {
            program,
            working_directory,
        })
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl TaskRunner for ProcessTaskRunner {
    fn execute(
        &self,
        arguments: &str,
    ) -> Pin<Box<dyn Future<Output = Result<(), TaskExecutionError>> + Send + '_>> {
        let program = self.program.clone();
        let working_directory = self.working_directory.clone();
        let args: Vec<String> = arguments.split_whitespace().map(str::to_string).collect();

        Box::pin(async move {
            info!(
                program = %program.display(),
                args = ?args,
                cwd = %working_directory.display(),
                "starting task process"
            );

            let mut cmd = Command::new(&program);
            cmd.args(&args)
                .current_dir(&working_directory)
                .stdin(Stdio::null())
                .kill_on_drop(true);

            let mut child = cmd.spawn().map_err(|e| {
                TaskExecutionError::with_source(
                    format!("failed to launch task runner {:?}", program),
                    e,
                )
            })?;

            let status = child.wait().await.map_err(|e| {
                TaskExecutionError::with_source(
                    format!("failed waiting for task runner {:?}", program),
                    e,
                )
            })?;

            if status.success() {
                info!(program = %program.display(), "task process finished");
                Ok(())
            } else {
                let code = status.code().unwrap_or(-1);
                Err(TaskExecutionError::new(format!(
                    "task runner {:?} exited with status {code}",
                    program
                )))
            }
        })
    }
}
