// tests/invoke_behaviour.rs

//! Task invocation boundary: run exactly once when gated `Execute`,
//! wrap every failure, refresh only after success.

use std::error::Error;
use std::path::{Path, PathBuf};

use gruntgate::exec::invoke;
use gruntgate::gate::{self, Verdict};
use gruntgate_test_utils::fake_context::FakeBuildContext;
use gruntgate_test_utils::fake_runner::{FakeTaskRunner, RecordingRefresher};
use gruntgate_test_utils::init_tracing;

type TestResult = Result<(), Box<dyn Error>>;

#[tokio::test]
async fn successful_run_records_arguments_and_refreshes_output() -> TestResult {
    init_tracing();

    let runner = FakeTaskRunner::new();
    let refresher = RecordingRefresher::new();
    let outputdir = PathBuf::from("/project/dist");

    invoke(&runner, "build --no-color", Some(&outputdir), &refresher).await?;

    assert_eq!(runner.invocations(), vec!["build --no-color".to_string()]);
    assert_eq!(refresher.refreshed(), vec![outputdir]);
    Ok(())
}

#[tokio::test]
async fn no_output_directory_means_no_refresh() -> TestResult {
    init_tracing();

    let runner = FakeTaskRunner::new();
    let refresher = RecordingRefresher::new();

    invoke(&runner, "", None, &refresher).await?;

    assert_eq!(runner.invocations().len(), 1);
    assert!(refresher.refreshed().is_empty());
    Ok(())
}

#[tokio::test]
async fn runner_failure_surfaces_as_single_typed_error() {
    init_tracing();

    let runner = FakeTaskRunner::failing("exit status 3");
    let refresher = RecordingRefresher::new();
    let outputdir = PathBuf::from("/project/dist");

    let err = invoke(&runner, "build", Some(&outputdir), &refresher)
        .await
        .expect_err("scripted failure must propagate");

    // The original cause stays attached to the one wrapped error kind.
    assert!(err.source.is_some());
    assert!(err.to_string().contains("scripted task failure"));

    // The task was attempted exactly once and the refresh hook never ran.
    assert_eq!(runner.invocations().len(), 1);
    assert!(refresher.refreshed().is_empty());
}

/// Mirror of the application wiring: the runner is consulted only after
/// an `Execute` verdict.
async fn gate_then_invoke(
    ctx: &FakeBuildContext,
    srcdir: Option<&Path>,
    runner: &FakeTaskRunner,
    refresher: &RecordingRefresher,
) -> Verdict {
    let wd = PathBuf::from("/project");
    let verdict = gate::decide(Some(ctx), &wd, &[], srcdir);
    if verdict == Verdict::Execute {
        invoke(runner, "", None, refresher)
            .await
            .expect("fake runner succeeds");
    }
    verdict
}

#[tokio::test]
async fn skip_verdict_never_invokes_the_runner() {
    init_tracing();

    let srcdir = PathBuf::from("/project/src");
    let ctx = FakeBuildContext::incremental().with_scan(srcdir.clone(), vec![]);
    let runner = FakeTaskRunner::new();
    let refresher = RecordingRefresher::new();

    let verdict = gate_then_invoke(&ctx, Some(&srcdir), &runner, &refresher).await;

    assert_eq!(verdict, Verdict::Skip);
    assert!(runner.invocations().is_empty());
    assert!(refresher.refreshed().is_empty());
}

#[tokio::test]
async fn execute_verdict_invokes_the_runner_once() {
    init_tracing();

    let srcdir = PathBuf::from("/project/src");
    let ctx = FakeBuildContext::incremental()
        .with_scan(srcdir.clone(), vec![srcdir.join("app.js")]);
    let runner = FakeTaskRunner::new();
    let refresher = RecordingRefresher::new();

    let verdict = gate_then_invoke(&ctx, Some(&srcdir), &runner, &refresher).await;

    assert_eq!(verdict, Verdict::Execute);
    assert_eq!(runner.invocations().len(), 1);
}
