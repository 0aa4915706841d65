//! Base calculator trait.
//!
//! Provides the abstract capability every calculator implementation
//! satisfies. The factory hands out calculators as boxed trait objects, so
//! callers program against this trait and never name a concrete type unless
//! they choose to downcast.

use std::any::Any;

use thiserror::Error;

/// Errors raised while evaluating a calculator expression.
#[derive(Debug, Error)]
pub enum CalculatorError {
    /// One or more negative numbers appeared in the input.
    #[error("negative numbers not allowed: {numbers}")]
    NegativesNotAllowed {
        /// Comma-separated list of every negative number found.
        numbers: String,
    },

    /// A token in the input did not parse as an integer.
    #[error("invalid number '{token}'")]
    InvalidNumber { token: String },
}

/// The calculator capability.
///
/// Implementations must be constructible with no arguments so they can be
/// registered with the factory as zero-argument constructors.
pub trait Calculator: Send + Sync + std::fmt::Debug {
    /// Evaluate a delimited-number expression and return its sum.
    ///
    /// # Errors
    /// Returns a [`CalculatorError`] if the input contains negative numbers
    /// or tokens that do not parse as integers.
    fn add(&self, input: &str) -> Result<i64, CalculatorError>;

    /// Human-readable name of this implementation, used in log output.
    fn name(&self) -> &str;

    /// Downcast hook for recovering the concrete type behind the trait
    /// object.
    fn as_any(&self) -> &dyn Any;
}
