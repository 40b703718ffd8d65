//! Step results that are either already computed or still in flight

use crate::core::PipelineError;
use futures::future::BoxFuture;
use futures::FutureExt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tracing::Instrument;

/// Fault raised by step logic. Handed back to the caller exactly as the step produced it.
pub type StepFault = anyhow::Error;

/// What a step, a continuation or a whole pipeline run hands back.
///
/// A synchronous chain produces a ready outcome that can be unwrapped without
/// any runtime. As soon as one step suspends, the outcome becomes pending and
/// must be awaited (or resolved with [`Outcome::wait`]).
///
/// `Outcome` implements [`Future`], so `.await` works in both cases.
pub struct Outcome<T> {
    state: State<T>,
}

enum State<T> {
    Ready(Option<anyhow::Result<T>>),
    Pending(BoxFuture<'static, anyhow::Result<T>>),
}

impl<T> Outcome<T> {
    /// An outcome holding a concrete value
    pub fn ready(value: T) -> Self {
        Self::from_result(Ok(value))
    }

    /// An outcome holding a fault
    pub fn fault(error: impl Into<StepFault>) -> Self {
        Self::from_result(Err(error.into()))
    }

    /// An outcome holding an already known result
    pub fn from_result(result: anyhow::Result<T>) -> Self {
        Self {
            state: State::Ready(Some(result)),
        }
    }

    /// Whether the result is available without awaiting
    pub fn is_ready(&self) -> bool {
        matches!(self.state, State::Ready(_))
    }

    /// Whether an asynchronous step is still in flight
    pub fn is_pending(&self) -> bool {
        matches!(self.state, State::Pending(_))
    }

    /// Take the result if it is ready, otherwise give the outcome back
    pub fn into_ready(self) -> Result<anyhow::Result<T>, Self> {
        match self.state {
            State::Ready(Some(result)) => Ok(result),
            State::Ready(None) => Ok(Err(PipelineError::AlreadyResolved.into())),
            state @ State::Pending(_) => Err(Self { state }),
        }
    }

    /// Resolve the outcome, blocking the current thread if a step is still in flight.
    ///
    /// Pending outcomes are driven on a fresh current-thread tokio runtime, so
    /// this must not be called from inside an async context. Await the outcome
    /// there instead.
    pub fn wait(self) -> anyhow::Result<T> {
        let future = match self.state {
            State::Ready(slot) => {
                return slot.unwrap_or_else(|| Err(PipelineError::AlreadyResolved.into()))
            }
            State::Pending(future) => future,
        };

        if tokio::runtime::Handle::try_current().is_ok() {
            return Err(PipelineError::BlockingInRuntime.into());
        }

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(PipelineError::Runtime)?;
        runtime.block_on(future)
    }
}

impl<T: Send + 'static> Outcome<T> {
    /// An outcome that resolves once `future` completes
    pub fn pending<F>(future: F) -> Self
    where
        F: Future<Output = anyhow::Result<T>> + Send + 'static,
    {
        Self {
            state: State::Pending(future.boxed()),
        }
    }

    /// Transform the eventual value, keeping the outcome ready if it already is
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        U: Send + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        match self.state {
            State::Ready(slot) => Outcome {
                state: State::Ready(slot.map(|result| result.map(f))),
            },
            State::Pending(future) => Outcome::pending(future.map(|result| result.map(f))),
        }
    }

    /// Run any still pending work inside `span`
    pub fn instrument(self, span: tracing::Span) -> Self {
        match self.state {
            State::Pending(future) => Self::pending(future.instrument(span)),
            state => Self { state },
        }
    }
}

impl<T> From<anyhow::Result<T>> for Outcome<T> {
    fn from(result: anyhow::Result<T>) -> Self {
        Self::from_result(result)
    }
}

impl<T> std::fmt::Debug for Outcome<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.state {
            State::Ready(Some(Ok(_))) => f.write_str("Outcome::Ready(Ok(..))"),
            State::Ready(Some(Err(e))) => write!(f, "Outcome::Ready(Err({}))", e),
            State::Ready(None) => f.write_str("Outcome::Resolved"),
            State::Pending(_) => f.write_str("Outcome::Pending"),
        }
    }
}

// The value is only ever moved out of the slot, never pinned.
impl<T> Unpin for Outcome<T> {}

impl<T> Future for Outcome<T> {
    type Output = anyhow::Result<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match &mut self.get_mut().state {
            State::Ready(slot) => Poll::Ready(
                slot.take()
                    .unwrap_or_else(|| Err(PipelineError::AlreadyResolved.into())),
            ),
            State::Pending(future) => future.as_mut().poll(cx),
        }
    }
}
