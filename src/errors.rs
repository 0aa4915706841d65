//! Error types for the calculator factory.

use thiserror::Error;

/// Errors raised by [`CalculatorFactory::create_calculator`](crate::factory::CalculatorFactory::create_calculator).
///
/// Both variants are fatal to the call that produced them: there is no
/// fallback construction and no retry. Registration never fails, so it has
/// no error type.
#[derive(Debug, Error)]
pub enum FactoryError {
    /// The `CALCULATOR_CLASS` environment variable is unset or empty.
    #[error("CALCULATOR_CLASS environment variable is not set")]
    ConfigurationMissing,

    /// The configured name has no entry in the registry.
    #[error("Calculator type '{name}' is not registered")]
    UnknownType { name: String },
}
