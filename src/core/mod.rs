//! Core domain models for pipelines
//!
//! This module defines steps, their normalization into handlers, the
//! pipeline builder and the declarative configuration layer.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod registry;
pub mod step;

pub use config::PipelineConfig;
pub use error::PipelineError;
pub use pipeline::*;
pub use registry::{StepFactory, StepRegistry};
pub use step::*;
