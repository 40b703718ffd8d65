//! Test: chains mixing synchronous and asynchronous steps

use crate::support::Recorder;
use pipethrough::steps::{Delay, Reverse, Wrap};
use pipethrough::{pipe, AsyncPipe, Next, Step};
use async_trait::async_trait;

#[tokio::test]
async fn test_async_double() {
    let result = pipe(5i64)
        .through(vec![Step::async_func(|n: i64, next: Next<i64>| async move {
            tokio::task::yield_now().await;
            next.call(n * 2).await
        })])
        .run()
        .await
        .unwrap();

    assert_eq!(result, 10);
}

#[tokio::test]
async fn test_mixed_chain_matches_sync_chain() {
    let sync_recorder = Recorder::new();
    let sync_result = pipe("start:".to_string())
        .through(vec![
            sync_recorder.append("a"),
            sync_recorder.append("b"),
            sync_recorder.append("c"),
            sync_recorder.append("d"),
        ])
        .run()
        .await
        .unwrap();

    let mixed_recorder = Recorder::new();
    let outcome = pipe("start:".to_string())
        .through(vec![
            mixed_recorder.append("a"),
            mixed_recorder.append_async("b"),
            mixed_recorder.append("c"),
            mixed_recorder.append_async("d"),
        ])
        .run();
    assert!(outcome.is_pending());
    let mixed_result = outcome.await.unwrap();

    assert_eq!(mixed_result, sync_result);
    assert_eq!(mixed_recorder.entries(), sync_recorder.entries());
}

#[tokio::test]
async fn test_async_pipes_example() {
    let result = pipe("cnysa".to_string())
        .through(vec![
            Step::async_handler(Delay::from_millis(5)),
            Step::handler(Wrap::new("__")),
            Step::async_handler(Delay::from_millis(5)),
            Step::handler(Reverse),
        ])
        .run_async()
        .await
        .unwrap();

    assert_eq!(result, "__async__");
}

#[test]
fn test_blocking_wait_resolves_async_chain() {
    let recorder = Recorder::new();
    let result = pipe(String::new())
        .through(vec![recorder.append_async("a"), recorder.append("b")])
        .run_blocking()
        .unwrap();

    assert_eq!(result, "ab");
}

struct Tally {
    step: i64,
}

#[async_trait]
impl AsyncPipe<i64> for Tally {
    async fn handle(&self, value: i64, next: Next<i64>) -> anyhow::Result<i64> {
        tokio::task::yield_now().await;
        let downstream = next.call(value + self.step).await?;
        Ok(downstream * 10)
    }
}

#[tokio::test]
async fn test_async_handler_post_processes_downstream_result() {
    let result = pipe(0i64)
        .through(vec![
            Step::async_handler(Tally { step: 1 }),
            Step::async_handler(Tally { step: 2 }),
        ])
        .run_async()
        .await
        .unwrap();

    // (0 + 1 + 2) * 10 * 10
    assert_eq!(result, 300);
}
