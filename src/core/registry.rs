//! Named step factories

use crate::core::{PipelineError, Step, StepRef};
use std::collections::HashMap;
use std::sync::Arc;

/// Builds a step from the arguments given in its reference
pub type StepFactory<T> = Arc<dyn Fn(&[String]) -> Result<Step<T>, PipelineError> + Send + Sync>;

/// Registry mapping step names to factories
pub struct StepRegistry<T> {
    factories: HashMap<String, StepFactory<T>>,
}

impl<T> StepRegistry<T> {
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register a factory under `name`, replacing any previous one
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F) -> &mut Self
    where
        F: Fn(&[String]) -> Result<Step<T>, PipelineError> + Send + Sync + 'static,
    {
        self.factories.insert(name.into(), Arc::new(factory));
        self
    }

    /// Check whether a step is registered
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Construct the step a reference points at
    pub fn build(&self, reference: &StepRef, position: usize) -> Result<Step<T>, PipelineError> {
        let factory = self
            .factories
            .get(&reference.name)
            .ok_or_else(|| PipelineError::NotInvocable {
                position,
                step: reference.to_string(),
                reason: "no step registered under this name".to_string(),
            })?;

        factory(&reference.args)
    }
}

impl<T> Default for StepRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for StepRegistry<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StepRegistry")
            .field("steps", &self.names())
            .finish()
    }
}

/// Fail unless exactly `expected` arguments were given
pub fn expect_args<'a>(
    name: &str,
    args: &'a [String],
    expected: usize,
) -> Result<&'a [String], PipelineError> {
    if args.len() == expected {
        Ok(args)
    } else {
        Err(PipelineError::invalid_arguments(
            name,
            format!("expected {} argument(s), got {}", expected, args.len()),
        ))
    }
}
