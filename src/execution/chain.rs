//! Composed continuation chain
//!
//! A chain is the ordered list of normalized handlers. Continuations are a
//! cursor into that list: calling [`Next::call`] invokes the handler at the
//! cursor and hands it a continuation positioned one further along. Once the
//! cursor runs past the last handler the value is returned as-is, which plays
//! the role of the terminal identity continuation.

use crate::execution::Outcome;
use std::sync::Arc;
use tracing::trace;

/// Canonical form every step is normalized into: `(value, next) -> outcome`
pub type Handler<T> = Arc<dyn Fn(T, Next<T>) -> Outcome<T> + Send + Sync>;

/// A prepared, not yet executed chain of handlers
pub struct Chain<T> {
    handlers: Arc<[Handler<T>]>,
}

impl<T> Chain<T> {
    pub(crate) fn new(handlers: Vec<Handler<T>>) -> Self {
        Self {
            handlers: handlers.into(),
        }
    }

    /// Number of user steps in the chain
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Number of effective links, including the terminal continuation
    pub fn links(&self) -> usize {
        self.handlers.len() + 1
    }

    /// Continuation that starts the chain from its first step
    pub fn entry(&self) -> Next<T> {
        Next {
            handlers: Arc::clone(&self.handlers),
            position: 0,
        }
    }

    /// Thread `value` through the whole chain
    pub fn call(&self, value: T) -> Outcome<T> {
        self.entry().call(value)
    }
}

impl<T> Clone for Chain<T> {
    fn clone(&self) -> Self {
        Self {
            handlers: Arc::clone(&self.handlers),
        }
    }
}

impl<T> std::fmt::Debug for Chain<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chain").field("steps", &self.len()).finish()
    }
}

/// The remainder of the pipeline from the current step onwards.
///
/// Consumed by [`Next::call`], so a step can continue the chain at most once.
/// Not calling it at all short-circuits the pipeline.
pub struct Next<T> {
    handlers: Arc<[Handler<T>]>,
    position: usize,
}

impl<T> Next<T> {
    /// Continue the pipeline with `value`
    pub fn call(self, value: T) -> Outcome<T> {
        match self.handlers.get(self.position) {
            Some(handler) => {
                trace!(position = self.position, "entering step");
                let rest = Next {
                    handlers: Arc::clone(&self.handlers),
                    position: self.position + 1,
                };
                handler(value, rest)
            }
            None => {
                trace!(position = self.position, "reached terminal continuation");
                Outcome::ready(value)
            }
        }
    }

    /// Index of the step this continuation will invoke
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of steps still ahead, not counting the terminal continuation
    pub fn remaining(&self) -> usize {
        self.handlers.len().saturating_sub(self.position)
    }
}

impl<T> std::fmt::Debug for Next<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Next")
            .field("position", &self.position)
            .field("remaining", &self.remaining())
            .finish()
    }
}
