use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use gruntgate::errors::TaskExecutionError;
use gruntgate::exec::TaskRunner;
use gruntgate::refresh::OutputRefresher;

/// A fake task runner that:
/// - records the argument string of every invocation
/// - optionally fails with a scripted message instead of succeeding.
pub struct FakeTaskRunner {
    invocations: Arc<Mutex<Vec<String>>>,
    failure: Option<String>,
}

impl FakeTaskRunner {
    pub fn new() -> Self {
        Self {
            invocations: Arc::new(Mutex::new(Vec::new())),
            failure: None,
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            invocations: Arc::new(Mutex::new(Vec::new())),
            failure: Some(message.into()),
        }
    }

    pub fn invocations(&self) -> Vec<String> {
        self.invocations.lock().unwrap().clone()
    }
}

impl Default for FakeTaskRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskRunner for FakeTaskRunner {
    fn execute(
        &self,
        arguments: &str,
    ) -> Pin<Box<dyn Future<Output = Result<(), TaskExecutionError>> + Send + '_>> {
        let invocations = Arc::clone(&self.invocations);
        let failure = self.failure.clone();
        let arguments = arguments.to_string();

        Box::pin(async move {
            invocations.lock().unwrap().push(arguments);

            match failure {
                Some(message) => Err(TaskExecutionError::with_source(
                    "scripted task failure".to_string(),
                    std::io::Error::other(message),
                )),
                None => Ok(()),
            }
        })
    }
}

/// An output refresher that records every directory it was asked to
/// refresh.
#[derive(Debug, Clone, Default)]
pub struct RecordingRefresher {
    refreshed: Arc<Mutex<Vec<PathBuf>>>,
}

impl RecordingRefresher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn refreshed(&self) -> Vec<PathBuf> {
        self.refreshed.lock().unwrap().clone()
    }
}

impl OutputRefresher for RecordingRefresher {
    fn refresh(&self, dir: &Path) {
        self.refreshed.lock().unwrap().push(dir.to_path_buf());
    }
}
