//! Declarative step chains loaded from YAML

use crate::core::{Pipeline, PipelineError, Step, StepRef, StepRegistry};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// Top-level pipeline configuration loaded from YAML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Pipeline name (optional)
    #[serde(default)]
    pub name: Option<String>,

    /// Free-form description (optional)
    #[serde(default)]
    pub description: Option<String>,

    /// Steps in execution order
    #[serde(default)]
    pub steps: Vec<StepRef>,
}

impl PipelineConfig {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read pipeline file {}", path.display()))?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: PipelineConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration is well formed on its own
    pub fn validate(&self) -> Result<()> {
        for (position, step) in self.steps.iter().enumerate() {
            if step.name.trim().is_empty() {
                anyhow::bail!("Step {} has an empty 'use' name", position);
            }
        }
        Ok(())
    }

    /// Check every step can be constructed from `registry`, without running anything
    pub fn validate_against<T: Send + 'static>(
        &self,
        registry: &StepRegistry<T>,
    ) -> std::result::Result<(), PipelineError> {
        for (position, reference) in self.steps.iter().enumerate() {
            Step::named(reference.clone()).normalize(position, Some(registry))?;
        }
        Ok(())
    }

    /// Steps as named entries, resolved when the pipeline is prepared
    pub fn to_steps<T: Send + 'static>(&self) -> Vec<Step<T>> {
        self.steps.iter().cloned().map(Step::named).collect()
    }

    /// Build a pipeline for `passable` that resolves its steps through `registry`
    pub fn to_pipeline<T: Send + 'static>(
        &self,
        passable: T,
        registry: Arc<StepRegistry<T>>,
    ) -> Pipeline<T> {
        let mut pipeline = Pipeline::new(passable).with_registry(registry);
        if let Some(name) = &self.name {
            pipeline = pipeline.with_name(name.clone());
        }
        pipeline.through(self.to_steps())
    }
}
