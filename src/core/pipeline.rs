//! Pipeline builder and runner

use crate::core::{PipelineError, Step, StepRegistry};
use crate::execution::{Chain, Outcome};
use std::sync::Arc;
use tracing::{debug, info_span, warn};
use uuid::Uuid;

/// Start a pipeline carrying `passable`
pub fn pipe<T>(passable: T) -> Pipeline<T> {
    Pipeline::new(passable)
}

/// A value and the ordered steps it will be threaded through.
///
/// Nothing executes until [`Pipeline::run`] is called; until then steps can be
/// appended in several `through` calls and the pipeline passed around freely.
pub struct Pipeline<T> {
    /// Display name used in logs
    name: Option<String>,

    /// The value handed to the first step
    passable: T,

    /// Steps in execution order
    steps: Vec<Step<T>>,

    /// Resolves named steps
    registry: Option<Arc<StepRegistry<T>>>,
}

impl<T> Pipeline<T> {
    pub fn new(passable: T) -> Self {
        Self {
            name: None,
            passable,
            steps: Vec::new(),
            registry: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attach the registry used to resolve [`Step::Named`] entries
    pub fn with_registry(mut self, registry: Arc<StepRegistry<T>>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Append steps to the pipeline
    pub fn through<I>(mut self, steps: I) -> Self
    where
        I: IntoIterator<Item = Step<T>>,
    {
        self.steps.extend(steps);
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn steps(&self) -> &[Step<T>] {
        &self.steps
    }

    pub fn passable(&self) -> &T {
        &self.passable
    }
}

impl<T: Send + 'static> Pipeline<T> {
    /// Normalize every step and compose them into a chain, without running anything
    pub fn prepare(&self) -> Result<Chain<T>, PipelineError> {
        let registry = self.registry.as_deref();
        let handlers = self
            .steps
            .iter()
            .cloned()
            .enumerate()
            .map(|(position, step)| step.normalize(position, registry))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Chain::new(handlers))
    }

    /// Thread the value through every step.
    ///
    /// Returns a ready outcome when every executed step completed synchronously
    /// and a pending one as soon as any step suspended. Either can be awaited;
    /// a ready one can also be unwrapped with [`Outcome::wait`] outside a runtime.
    pub fn run(self) -> Outcome<T> {
        let run_id = Uuid::new_v4();
        let span = info_span!(
            "pipeline",
            name = self.name.as_deref().unwrap_or("anonymous"),
            %run_id
        );
        let guard = span.enter();

        debug!(steps = self.steps.len(), "preparing pipeline");
        let chain = match self.prepare() {
            Ok(chain) => chain,
            Err(e) => {
                warn!("pipeline configuration rejected: {}", e);
                return Outcome::fault(e);
            }
        };

        let outcome = chain.call(self.passable);
        if outcome.is_pending() {
            debug!("pipeline suspended on an asynchronous step");
        }

        drop(guard);
        outcome.instrument(span)
    }

    /// Run and await the result, whatever mix of steps the pipeline holds
    pub async fn run_async(self) -> anyhow::Result<T> {
        self.run().await
    }

    /// Run and block until the result is available. Must not be called from async code.
    pub fn run_blocking(self) -> anyhow::Result<T> {
        self.run().wait()
    }
}

impl<T: Default> Default for Pipeline<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Pipeline<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("name", &self.name)
            .field("passable", &self.passable)
            .field("steps", &self.steps)
            .field("registry", &self.registry.is_some())
            .finish()
    }
}
