// src/config/validate.rs

use anyhow::{anyhow, Context, Result};
use globset::Glob;

use crate::config::model::ConfigFile;

/// Run basic semantic validation against a loaded configuration.
///
/// This checks:
/// - the runner command is non-empty
/// - the working directory is non-empty
/// - trigger file entries are non-empty
/// - extra exclude patterns are valid globs
///
/// It does **not** check that any of the configured paths exist; a
/// missing trigger file simply never reports a change, and a missing
/// source directory surfaces when it is scanned.
pub fn validate_config(cfg: &ConfigFile) -> Result<()> {
    validate_runner(cfg)?;
    validate_gate(cfg)?;
    Ok(())
}

fn validate_runner(cfg: &ConfigFile) -> Result<()> {
    if cfg.runner.command.trim().is_empty() {
        return Err(anyhow!("[runner].command must not be empty"));
    }
    if cfg.runner.working_directory.trim().is_empty() {
        return Err(anyhow!("[runner].working_directory must not be empty"));
    }
    Ok(())
}

fn validate_gate(cfg: &ConfigFile) -> Result<()> {
    for (i, f) in cfg.gate.triggerfiles.iter().enumerate() {
        if f.trim().is_empty() {
            return Err(anyhow!("[gate].triggerfiles[{i}] must not be empty"));
        }
    }

    if let Some(srcdir) = &cfg.gate.srcdir {
        if srcdir.trim().is_empty() {
            return Err(anyhow!("[gate].srcdir must not be empty when set"));
        }
    }

    if let Some(outputdir) = &cfg.gate.outputdir {
        if outputdir.trim().is_empty() {
            return Err(anyhow!("[gate].outputdir must not be empty when set"));
        }
    }

    for pat in cfg.gate.exclude.iter() {
        Glob::new(pat)
            .with_context(|| format!("invalid [gate].exclude pattern: {pat}"))?;
    }

    Ok(())
}
