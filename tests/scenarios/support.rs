//! Shared helpers for scenario tests

use pipethrough::{Next, Outcome, Step};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Records which steps ran, in order
#[derive(Clone, Default)]
pub struct Recorder {
    log: Arc<Mutex<Vec<String>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, tag: &str) {
        self.log.lock().unwrap().push(tag.to_string());
    }

    /// Names of the steps that ran so far
    pub fn entries(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }

    /// Synchronous step appending `tag` to the value
    pub fn append(&self, tag: &'static str) -> Step<String> {
        let recorder = self.clone();
        Step::func(move |value: String, next: Next<String>| {
            recorder.record(tag);
            next.call(value + tag)
        })
    }

    /// Asynchronous step appending `tag` to the value after a short sleep
    pub fn append_async(&self, tag: &'static str) -> Step<String> {
        let recorder = self.clone();
        Step::async_func(move |value: String, next: Next<String>| {
            let recorder = recorder.clone();
            async move {
                tokio::time::sleep(Duration::from_millis(2)).await;
                recorder.record(tag);
                next.call(value + tag).await
            }
        })
    }

    /// Synchronous step that returns `value` without calling `next`
    pub fn stop_with(&self, tag: &'static str, value: &'static str) -> Step<String> {
        let recorder = self.clone();
        Step::func(move |_: String, _next: Next<String>| {
            recorder.record(tag);
            Outcome::ready(value.to_string())
        })
    }
}
