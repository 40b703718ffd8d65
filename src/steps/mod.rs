//! Built-in steps and the registry that exposes them by name

pub mod text;
pub mod timing;

pub use text::{Lowercase, Produce, Replace, Reverse, Uppercase, Wrap};
pub use timing::Delay;

use crate::core::registry::expect_args;
use crate::core::{PipelineError, Step, StepRegistry};

/// Registry of the built-in string steps:
///
/// | name        | args                     |
/// |-------------|--------------------------|
/// | `reverse`   |                          |
/// | `lowercase` |                          |
/// | `uppercase` |                          |
/// | `wrap`      | wrapper                  |
/// | `replace`   | pattern, replacement     |
/// | `produce`   | value                    |
/// | `delay`     | milliseconds             |
pub fn text_registry() -> StepRegistry<String> {
    let mut registry: StepRegistry<String> = StepRegistry::new();
    registry
        .register("reverse", |args| {
            expect_args("reverse", args, 0)?;
            Ok(Step::handler(Reverse))
        })
        .register("lowercase", |args| {
            expect_args("lowercase", args, 0)?;
            Ok(Step::handler(Lowercase))
        })
        .register("uppercase", |args| {
            expect_args("uppercase", args, 0)?;
            Ok(Step::handler(Uppercase))
        })
        .register("wrap", |args| {
            let args = expect_args("wrap", args, 1)?;
            Ok(Step::handler(Wrap::new(args[0].as_str())))
        })
        .register("replace", |args| {
            let args = expect_args("replace", args, 2)?;
            Ok(Step::handler(Replace::new(&args[0], args[1].as_str())?))
        })
        .register("produce", |args| {
            let args = expect_args("produce", args, 1)?;
            Ok(Step::handler(Produce::new(args[0].as_str())))
        })
        .register("delay", |args| {
            let args = expect_args("delay", args, 1)?;
            let millis = args[0].parse::<u64>().map_err(|e| {
                PipelineError::invalid_arguments("delay", format!("'{}': {}", args[0], e))
            })?;
            Ok(Step::async_handler(Delay::from_millis(millis)))
        });
    registry
}
