// src/config/model.rs

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [runner]
/// command = "grunt"
/// arguments = "build --no-color"
/// working_directory = "frontend"
///
/// [gate]
/// triggerfiles = ["Gruntfile.js", "package.json"]
/// srcdir = "src"
/// outputdir = "dist"
/// exclude = ["**/*.tmp"]
/// ```
///
/// All sections are optional and have reasonable defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    /// How to invoke the external task, from `[runner]`.
    #[serde(default)]
    pub runner: RunnerSection,

    /// Change-detection inputs, from `[gate]`.
    #[serde(default)]
    pub gate: GateSection,
}

/// `[runner]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct RunnerSection {
    /// Name (or path) of the task runner executable.
    #[serde(default = "default_command")]
    pub command: String,

    /// Arguments passed verbatim to the task runner. May be empty, in
    /// which case the bare command is run.
    #[serde(default)]
    pub arguments: String,

    /// The base directory for running the task, relative to the config
    /// file. Usually the directory that contains `Gruntfile.js`.
    #[serde(default = "default_working_directory")]
    pub working_directory: String,
}

fn default_command() -> String {
    "grunt".to_string()
}

fn default_working_directory() -> String {
    ".".to_string()
}

impl Default for RunnerSection {
    fn default() -> Self {
        Self {
            command: default_command(),
            arguments: String::new(),
            working_directory: default_working_directory(),
        }
    }
}

/// `[gate]` section.
///
/// Controls which files are compared against the previous build snapshot
/// when deciding whether the task needs to run at all.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct GateSection {
    /// Files whose modification alone forces a run.
    ///
    /// When empty, a single default trigger file (`Gruntfile.js` in the
    /// working directory) is checked instead. When non-empty, these fully
    /// replace the default trigger file.
    #[serde(default)]
    pub triggerfiles: Vec<String>,

    /// The directory of front-end sources to scan for changes. If unset,
    /// no skip-check is possible and the task always runs.
    #[serde(default)]
    pub srcdir: Option<String>,

    /// The directory the task writes its output into. Only used for the
    /// post-success refresh notification; has no bearing on the gate.
    #[serde(default)]
    pub outputdir: Option<String>,

    /// Extra glob patterns excluded from the source scan, appended to the
    /// built-in exclusions.
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// Configuration with every path made absolute.
///
/// `working_directory` is resolved against the config file's directory;
/// trigger files, srcdir and outputdir are resolved against the working
/// directory (absolute entries are kept as-is).
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub command: String,
    pub arguments: String,
    pub working_directory: PathBuf,
    pub triggerfiles: Vec<PathBuf>,
    pub srcdir: Option<PathBuf>,
    pub outputdir: Option<PathBuf>,
    pub exclude: Vec<String>,
}

impl ConfigFile {
    /// Resolve all configured paths against `root`, the directory the
    /// config file was loaded from.
    pub fn resolve(&self, root: &Path) -> ResolvedConfig {
        let working_directory = join_abs(root, &self.runner.working_directory);

        let triggerfiles = self
            .gate
            .triggerfiles
            .iter()
            .map(|f| join_abs(&working_directory, f))
            .collect();

        ResolvedConfig {
            command: self.runner.command.clone(),
            arguments: self.runner.arguments.clone(),
            triggerfiles,
            srcdir: self
                .gate
                .srcdir
                .as_deref()
                .map(|d| join_abs(&working_directory, d)),
            outputdir: self
                .gate
                .outputdir
                .as_deref()
                .map(|d| join_abs(&working_directory, d)),
            exclude: self.gate.exclude.clone(),
            working_directory,
        }
    }
}

fn join_abs(base: &Path, p: &str) -> PathBuf {
    let path = Path::new(p);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
