//! Pipeline execution: continuation chain and step outcomes

pub mod chain;
pub mod outcome;

pub use chain::{Chain, Handler, Next};
pub use outcome::{Outcome, StepFault};
