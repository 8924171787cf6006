// src/config/mod.rs

//! Configuration loading and validation.
//!
//! - [`model`] holds the serde structs mapped from the TOML file.
//! - [`loader`] reads and parses the file.
//! - [`validate`] performs semantic checks after parsing.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path};
pub use model::{ConfigFile, GateSection, ResolvedConfig, RunnerSection};
