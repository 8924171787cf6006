// src/errors.rs

//! Crate-wide error aliases and the two domain failure kinds.

use thiserror::Error;

/// The task runner executable could not be located or prepared.
///
/// Raised at construction time, before anything has been executed.
/// Not retried.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct InstallationError {
    pub message: String,
    #[source]
    pub source: Option<std::io::Error>,
}

impl InstallationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(message: impl Into<String>, source: std::io::Error) -> Self {
        Self {
            message: message.into(),
            source: Some(source),
        }
    }
}

/// The external task failed: nonzero exit, or an I/O error launching or
/// waiting on the process.
///
/// Every underlying runner failure is wrapped into exactly this kind, so
/// callers can match on "did the task fail" without knowing the runner's
/// internals. Not retried.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct TaskExecutionError {
    pub message: String,
    #[source]
    pub source: Option<std::io::Error>,
}

impl TaskExecutionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(message: impl Into<String>, source: std::io::Error) -> Self {
        Self {
            message: message.into(),
            source: Some(source),
        }
    }
}

#[derive(Error, Debug)]
pub enum GruntgateError {
    #[error("Task runner unavailable: {0}")]
    Installation(#[from] InstallationError),

    #[error("Task failed: {0}")]
    TaskExecution(#[from] TaskExecutionError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, GruntgateError>;
