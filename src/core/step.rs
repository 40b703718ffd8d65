//! Step domain model and normalization

use crate::core::{PipelineError, StepRegistry};
use crate::execution::{Handler, Next, Outcome};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::sync::Arc;
use tracing::debug;

/// A handler object whose work completes synchronously.
///
/// The returned outcome is usually whatever `next.call(..)` produced, so a
/// synchronous step placed before an asynchronous one simply passes the
/// pending outcome up the chain.
pub trait Pipe<T>: Send + Sync {
    fn handle(&self, value: T, next: Next<T>) -> Outcome<T>;
}

/// A handler object that suspends while doing its work
#[async_trait]
pub trait AsyncPipe<T>: Send + Sync {
    async fn handle(&self, value: T, next: Next<T>) -> anyhow::Result<T>;
}

/// One entry in a pipeline's step list
pub enum Step<T> {
    /// A function taking `(value, next)`
    Function(Handler<T>),

    /// An object exposing `handle(value, next)`
    Handler(HandlerStep<T>),

    /// A step referenced by name, constructed from a [`StepRegistry`] when the
    /// pipeline is prepared
    Named(StepRef),
}

/// Handler object, synchronous or asynchronous
pub enum HandlerStep<T> {
    Sync(Arc<dyn Pipe<T>>),
    Async(Arc<dyn AsyncPipe<T>>),
}

/// Named reference to a registered step, as written in pipeline configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRef {
    /// Registry name of the step
    #[serde(rename = "use")]
    pub name: String,

    /// Construction arguments passed to the step factory
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
}

impl StepRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }
}

impl std::fmt::Display for StepRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.args.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}({})", self.name, self.args.join(", "))
        }
    }
}

impl<T: Send + 'static> Step<T> {
    /// Step from a synchronous `(value, next)` function
    pub fn func<F>(f: F) -> Self
    where
        F: Fn(T, Next<T>) -> Outcome<T> + Send + Sync + 'static,
    {
        Step::Function(Arc::new(f))
    }

    /// Step from an asynchronous `(value, next)` function
    pub fn async_func<F, Fut>(f: F) -> Self
    where
        F: Fn(T, Next<T>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<T>> + Send + 'static,
    {
        Step::Function(Arc::new(move |value: T, next: Next<T>| {
            Outcome::pending(f(value, next))
        }))
    }

    /// Step from a synchronous handler object
    pub fn handler<P>(pipe: P) -> Self
    where
        P: Pipe<T> + 'static,
    {
        Step::Handler(HandlerStep::Sync(Arc::new(pipe)))
    }

    /// Step from an asynchronous handler object
    pub fn async_handler<P>(pipe: P) -> Self
    where
        P: AsyncPipe<T> + 'static,
    {
        Step::Handler(HandlerStep::Async(Arc::new(pipe)))
    }

    /// Step resolved by name when the pipeline is prepared
    pub fn named(reference: StepRef) -> Self {
        Step::Named(reference)
    }

    /// Short label for logs and errors
    pub fn describe(&self) -> String {
        match self {
            Step::Function(_) => "function".to_string(),
            Step::Handler(HandlerStep::Sync(_)) => "handler".to_string(),
            Step::Handler(HandlerStep::Async(_)) => "async handler".to_string(),
            Step::Named(reference) => reference.to_string(),
        }
    }

    /// Adapt this entry to the canonical `(value, next)` form without invoking it.
    ///
    /// Named entries are looked up in `registry`; an entry that cannot be
    /// resolved to a function or handler is rejected as not invocable.
    pub fn normalize(
        self,
        position: usize,
        registry: Option<&StepRegistry<T>>,
    ) -> Result<Handler<T>, PipelineError> {
        debug!(position, step = %self.describe(), "normalizing step");

        match self {
            Step::Function(handler) => Ok(handler),
            Step::Handler(HandlerStep::Sync(pipe)) => {
                let handler: Handler<T> =
                    Arc::new(move |value: T, next: Next<T>| pipe.handle(value, next));
                Ok(handler)
            }
            Step::Handler(HandlerStep::Async(pipe)) => {
                let handler: Handler<T> = Arc::new(move |value: T, next: Next<T>| {
                    let pipe = Arc::clone(&pipe);
                    Outcome::pending(async move { pipe.handle(value, next).await })
                });
                Ok(handler)
            }
            Step::Named(reference) => {
                let registry = registry.ok_or_else(|| PipelineError::NotInvocable {
                    position,
                    step: reference.to_string(),
                    reason: "no step registry attached to the pipeline".to_string(),
                })?;

                match registry.build(&reference, position)? {
                    Step::Named(inner) => Err(PipelineError::NotInvocable {
                        position,
                        step: reference.to_string(),
                        reason: format!("factory returned another named reference ({})", inner),
                    }),
                    step => step.normalize(position, None),
                }
            }
        }
    }
}

impl<T> Clone for Step<T> {
    fn clone(&self) -> Self {
        match self {
            Step::Function(handler) => Step::Function(Arc::clone(handler)),
            Step::Handler(HandlerStep::Sync(pipe)) => Step::Handler(HandlerStep::Sync(Arc::clone(pipe))),
            Step::Handler(HandlerStep::Async(pipe)) => Step::Handler(HandlerStep::Async(Arc::clone(pipe))),
            Step::Named(reference) => Step::Named(reference.clone()),
        }
    }
}

impl<T> std::fmt::Debug for Step<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Step::Function(_) => f.write_str("Step::Function"),
            Step::Handler(HandlerStep::Sync(_)) => f.write_str("Step::Handler(Sync)"),
            Step::Handler(HandlerStep::Async(_)) => f.write_str("Step::Handler(Async)"),
            Step::Named(reference) => write!(f, "Step::Named({})", reference),
        }
    }
}
