// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `gruntgate`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "gruntgate",
    version,
    about = "Run a front-end build task only when its inputs changed.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// Default: `Gruntgate.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = "Gruntgate.toml")]
    pub config: String,

    /// Treat this as a full (clean) build: ignore the previous snapshot
    /// and always run the task.
    #[arg(long)]
    pub full: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `GRUNTGATE_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate, print the resolved configuration, but don't
    /// decide or execute anything.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
