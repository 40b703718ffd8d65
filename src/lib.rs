//! pipethrough - thread a value through a chain of next-passing pipes
//!
//! ```
//! use pipethrough::{pipe, Next, Step};
//! use pipethrough::steps::{Reverse, Wrap};
//!
//! let result = pipe("NIAM".to_string())
//!     .through(vec![
//!         Step::handler(Reverse),
//!         Step::func(|s: String, next: Next<String>| next.call(s.to_lowercase())),
//!         Step::handler(Wrap::new("__")),
//!     ])
//!     .run()
//!     .wait()
//!     .unwrap();
//!
//! assert_eq!(result, "__main__");
//! ```

pub mod cli;
pub mod core;
pub mod execution;
pub mod steps;

// Re-export commonly used types
pub use crate::core::{pipe, AsyncPipe, Pipe, Pipeline, PipelineConfig, PipelineError, Step, StepRef, StepRegistry};
pub use crate::execution::{Chain, Next, Outcome, StepFault};
