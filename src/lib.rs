// src/lib.rs

pub mod cli;
pub mod config;
pub mod context;
pub mod errors;
pub mod exec;
pub mod gate;
pub mod logging;
pub mod refresh;

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::loader::load_and_validate;
use crate::config::model::ResolvedConfig;
use crate::context::SnapshotContext;
use crate::errors::Result;
use crate::exec::{invoke, ProcessTaskRunner};
use crate::gate::Verdict;
use crate::refresh::LogRefresher;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - the snapshot-backed build context
/// - the execution gate
/// - the task runner and the post-run refresh hook
pub async fn run(args: CliArgs) -> Result<()> {
    let config_path = PathBuf::from(&args.config);
    let cfg = load_and_validate(&config_path)?;

    let root = config_root_dir(&config_path);
    let resolved = cfg.resolve(&root);

    if args.dry_run {
        print_dry_run(&resolved);
        return Ok(());
    }

    let context = SnapshotContext::open(
        resolved.working_directory.clone(),
        &resolved.exclude,
        args.full,
    )?;

    let verdict = gate::decide(
        Some(&context),
        &resolved.working_directory,
        &resolved.triggerfiles,
        resolved.srcdir.as_deref(),
    );

    match verdict {
        Verdict::Skip => {
            // Skip is only ever reached with a source directory configured.
            let srcdir = resolved.srcdir.as_deref().unwrap_or(Path::new(""));
            info!(
                srcdir = %srcdir.display(),
                "skipping task: no modified files in source directory"
            );
            Ok(())
        }
        Verdict::Execute => {
            let runner =
                ProcessTaskRunner::new(resolved.working_directory.clone(), &resolved.command)?;
            let refresher = LogRefresher;

            invoke(
                &runner,
                &resolved.arguments,
                resolved.outputdir.as_deref(),
                &refresher,
            )
            .await?;

            // Record the new input state so the next incremental build can
            // skip. Failed runs never reach this point.
            let triggers = gate::effective_triggerfiles(
                &resolved.working_directory,
                &resolved.triggerfiles,
            );
            context.refresh_snapshot(&triggers, resolved.srcdir.as_deref())?;

            debug!("run complete");
            Ok(())
        }
    }
}

/// Figure out the directory configured paths are relative to.
///
/// - If the config path has a non-empty parent (e.g.
///   "frontend/Gruntgate.toml"), we use that directory.
/// - If it's just a bare filename like "Gruntgate.toml" (parent = ""),
///   we fall back to the current working directory "."
fn config_root_dir(config_path: &Path) -> PathBuf {
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

/// Simple dry-run output: print the resolved configuration.
fn print_dry_run(cfg: &ResolvedConfig) {
    println!("gruntgate dry-run");
    println!("  runner.command = {}", cfg.command);
    if !cfg.arguments.is_empty() {
        println!("  runner.arguments = {}", cfg.arguments);
    }
    println!(
        "  runner.working_directory = {}",
        cfg.working_directory.display()
    );

    if cfg.triggerfiles.is_empty() {
        println!(
            "  gate.triggerfiles = [] (default: {})",
            cfg.working_directory.join(gate::DEFAULT_TRIGGER_FILE).display()
        );
    } else {
        println!("  gate.triggerfiles:");
        for f in &cfg.triggerfiles {
            println!("    - {}", f.display());
        }
    }

    match &cfg.srcdir {
        Some(dir) => println!("  gate.srcdir = {}", dir.display()),
        None => println!("  gate.srcdir unset (no skip-check possible)"),
    }
    if let Some(dir) = &cfg.outputdir {
        println!("  gate.outputdir = {}", dir.display());
    }
    if !cfg.exclude.is_empty() {
        println!("  gate.exclude = {:?}", cfg.exclude);
    }

    debug!("dry-run complete (no execution)");
}
