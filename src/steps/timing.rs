//! Pipes that suspend

use crate::core::AsyncPipe;
use crate::execution::Next;
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Waits before passing the value on unchanged
#[derive(Debug, Clone, Copy)]
pub struct Delay {
    duration: Duration,
}

impl Delay {
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }
}

#[async_trait]
impl<T: Send + 'static> AsyncPipe<T> for Delay {
    async fn handle(&self, value: T, next: Next<T>) -> anyhow::Result<T> {
        debug!("delaying for {:?}", self.duration);
        tokio::time::sleep(self.duration).await;
        next.call(value).await
    }
}
