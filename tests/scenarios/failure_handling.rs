//! Test: faults abort the chain and reach the caller unchanged

use crate::support::Recorder;
use pipethrough::{pipe, Next, Outcome, PipelineError, Step, StepRef, StepRegistry};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("quota exceeded for {0}")]
struct QuotaExceeded(String);

fn failing_step() -> Step<String> {
    Step::func(|value: String, _next: Next<String>| Outcome::fault(QuotaExceeded(value)))
}

#[test]
fn test_sync_fault_propagates_verbatim() {
    let recorder = Recorder::new();
    let err = pipe("tenant".to_string())
        .through(vec![recorder.append("-a"), failing_step(), recorder.append("-b")])
        .run()
        .wait()
        .unwrap_err();

    assert_eq!(
        err.downcast_ref::<QuotaExceeded>(),
        Some(&QuotaExceeded("tenant-a".to_string()))
    );
    assert_eq!(err.to_string(), "quota exceeded for tenant-a");
    assert_eq!(recorder.entries(), vec!["-a"]);
}

#[tokio::test]
async fn test_async_rejection_propagates_verbatim() {
    let recorder = Recorder::new();
    let err = pipe("tenant".to_string())
        .through(vec![
            recorder.append_async("-a"),
            Step::async_func(|value: String, _next: Next<String>| async move {
                tokio::task::yield_now().await;
                Err::<String, _>(anyhow::Error::new(QuotaExceeded(value)))
            }),
            recorder.append_async("-b"),
        ])
        .run_async()
        .await
        .unwrap_err();

    assert!(err.is::<QuotaExceeded>());
    assert_eq!(recorder.entries(), vec!["-a"]);
}

#[tokio::test]
async fn test_fault_passes_through_async_step_using_question_mark() {
    let err = pipe("tenant".to_string())
        .through(vec![
            Step::async_func(|value: String, next: Next<String>| async move {
                let downstream = next.call(value).await?;
                Ok::<_, anyhow::Error>(downstream + "-unreachable")
            }),
            failing_step(),
        ])
        .run_async()
        .await
        .unwrap_err();

    assert!(err.downcast_ref::<PipelineError>().is_none());
    assert_eq!(err.downcast::<QuotaExceeded>().unwrap(), QuotaExceeded("tenant".to_string()));
}

#[test]
fn test_unknown_named_step_is_configuration_error() {
    let recorder = Recorder::new();
    let err = pipe(String::new())
        .with_registry(Arc::new(StepRegistry::new()))
        .through(vec![recorder.append("a"), Step::named(StepRef::new("ghost"))])
        .run()
        .wait()
        .unwrap_err();

    match err.downcast_ref::<PipelineError>() {
        Some(PipelineError::NotInvocable { position, step, .. }) => {
            assert_eq!(*position, 1);
            assert_eq!(step, "ghost");
        }
        other => panic!("expected NotInvocable, got {:?}", other),
    }
    assert!(recorder.entries().is_empty());
}

#[tokio::test]
async fn test_blocking_wait_inside_runtime_is_refused() {
    let recorder = Recorder::new();
    let err = pipe(String::new())
        .through(vec![recorder.append_async("a")])
        .run_blocking()
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<PipelineError>(),
        Some(PipelineError::BlockingInRuntime)
    ));
}
