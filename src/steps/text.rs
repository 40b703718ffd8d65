//! String transforming pipes

use crate::core::{Pipe, PipelineError};
use crate::execution::{Next, Outcome};
use regex::Regex;

/// Reverses the characters of the value
#[derive(Debug, Clone, Copy, Default)]
pub struct Reverse;

impl Pipe<String> for Reverse {
    fn handle(&self, value: String, next: Next<String>) -> Outcome<String> {
        next.call(value.chars().rev().collect())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Lowercase;

impl Pipe<String> for Lowercase {
    fn handle(&self, value: String, next: Next<String>) -> Outcome<String> {
        next.call(value.to_lowercase())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Uppercase;

impl Pipe<String> for Uppercase {
    fn handle(&self, value: String, next: Next<String>) -> Outcome<String> {
        next.call(value.to_uppercase())
    }
}

/// Puts the same string on both sides of the value
#[derive(Debug, Clone)]
pub struct Wrap {
    wrapper: String,
}

impl Wrap {
    pub fn new(wrapper: impl Into<String>) -> Self {
        Self {
            wrapper: wrapper.into(),
        }
    }
}

impl Pipe<String> for Wrap {
    fn handle(&self, value: String, next: Next<String>) -> Outcome<String> {
        next.call(format!("{}{}{}", self.wrapper, value, self.wrapper))
    }
}

/// Replaces every match of a regular expression
#[derive(Debug, Clone)]
pub struct Replace {
    pattern: Regex,
    replacement: String,
}

impl Replace {
    pub fn new(pattern: &str, replacement: impl Into<String>) -> Result<Self, PipelineError> {
        let pattern = Regex::new(pattern)
            .map_err(|e| PipelineError::invalid_arguments("replace", e.to_string()))?;
        Ok(Self {
            pattern,
            replacement: replacement.into(),
        })
    }
}

impl Pipe<String> for Replace {
    fn handle(&self, value: String, next: Next<String>) -> Outcome<String> {
        let replaced = self
            .pattern
            .replace_all(&value, self.replacement.as_str())
            .into_owned();
        next.call(replaced)
    }
}

/// Discards its input and continues with a fixed value
#[derive(Debug, Clone)]
pub struct Produce {
    value: String,
}

impl Produce {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl Pipe<String> for Produce {
    fn handle(&self, _value: String, next: Next<String>) -> Outcome<String> {
        next.call(self.value.clone())
    }
}
