// src/exec/mod.rs

//! Task invocation boundary.
//!
//! - [`resolve`] locates the configured runner executable, failing with
//!   an installation error when it cannot be found.
//! - [`runner`] defines the `TaskRunner` capability trait and the
//!   production `ProcessTaskRunner` that spawns a real child process.
//! - [`invoker`] runs the gated task exactly once and fires the output
//!   refresh hook after a successful run.

pub mod invoker;
pub mod resolve;
pub mod runner;

pub use invoker::invoke;
pub use resolve::resolve_runner;
pub use runner::{ProcessTaskRunner, TaskRunner};
