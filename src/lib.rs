//! # string-calculator
//!
//! A string calculator with a registry-backed factory for selecting the
//! calculator implementation at runtime.
//!
//! The [`CalculatorFactory`] owns a mapping from type names to zero-argument
//! constructors and resolves the `CALCULATOR_CLASS` environment variable
//! against it on every call, so the calculator in use can be swapped without
//! modifying client code:
//!
//! ```no_run
//! use string_calculator::CalculatorFactory;
//!
//! std::env::set_var("CALCULATOR_CLASS", "StringCalculator");
//!
//! let factory = CalculatorFactory::new();
//! let calculator = factory.create_calculator()?;
//! assert_eq!(calculator.add("1,2,3")?, 6);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod calculators;
pub mod errors;
pub mod factory;

// Re-exports for convenience
pub use calculators::{Calculator, CalculatorError, StringCalculator};
pub use errors::FactoryError;
pub use factory::{CalculatorConstructor, CalculatorFactory, CALCULATOR_CLASS_ENV};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
