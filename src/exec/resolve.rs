// src/exec/resolve.rs

//! Locating the task runner executable.
//!
//! This is location only: nothing is downloaded or installed. The lookup
//! order mirrors how front-end projects expect their tools to be found:
//!
//! 1. A command containing a path separator is resolved against the
//!    working directory as-is.
//! 2. `node_modules/.bin/<command>` under the working directory.
//! 3. The directories on `PATH`.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::InstallationError;

/// Find the executable for `command`, or fail with an installation error.
pub fn resolve_runner(
    working_directory: &Path,
    command: &str,
) -> Result<PathBuf, InstallationError> {
    if command.contains(std::path::MAIN_SEPARATOR) || command.contains('/') {
        let explicit = if Path::new(command).is_absolute() {
            PathBuf::from(command)
        } else {
            working_directory.join(command)
        };
        if explicit.is_file() {
            return Ok(explicit);
        }
        return Err(InstallationError::new(format!(
            "task runner not found at configured path {:?}",
            explicit
        )));
    }

    let local_bin = working_directory.join("node_modules/.bin");
    if let Some(found) = candidate_in(&local_bin, command) {
        debug!(program = %found.display(), "resolved task runner from node_modules/.bin");
        return Ok(found);
    }

    if let Some(path_var) = std::env::var_os("PATH") {
        for dir in std::env::split_paths(&path_var) {
            if let Some(found) = candidate_in(&dir, command) {
                debug!(program = %found.display(), "resolved task runner from PATH");
                return Ok(found);
            }
        }
    }

    Err(InstallationError::new(format!(
        "could not locate task runner '{command}' in {:?} or on PATH",
        local_bin
    )))
}

fn candidate_in(dir: &Path, command: &str) -> Option<PathBuf> {
    let plain = dir.join(command);
    if plain.is_file() {
        return Some(plain);
    }

    if cfg!(windows) {
        for ext in ["cmd", "exe", "bat"] {
            let with_ext = dir.join(format!("{command}.{ext}"));
            if with_ext.is_file() {
                return Some(with_ext);
            }
        }
    }

    None
}
