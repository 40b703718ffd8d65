//! Errors raised by the pipeline itself

use thiserror::Error;

/// Faults originating in the pipeline rather than in step logic.
///
/// Step faults are never wrapped in this type; they reach the caller as the
/// step raised them.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("step {position} ({step}) is not invocable: {reason}")]
    NotInvocable {
        position: usize,
        step: String,
        reason: String,
    },

    #[error("invalid arguments for step '{name}': {reason}")]
    InvalidArguments { name: String, reason: String },

    #[error("cannot block on a pending pipeline inside an async runtime; await it instead")]
    BlockingInRuntime,

    #[error("failed to start a runtime for blocking wait: {0}")]
    Runtime(#[source] std::io::Error),

    #[error("outcome was already resolved")]
    AlreadyResolved,
}

impl PipelineError {
    /// Whether this is a build-time fault in how the pipeline was assembled
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            PipelineError::NotInvocable { .. } | PipelineError::InvalidArguments { .. }
        )
    }

    pub(crate) fn invalid_arguments(name: &str, reason: impl Into<String>) -> Self {
        PipelineError::InvalidArguments {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}
