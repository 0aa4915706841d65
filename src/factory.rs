//! Calculator factory backed by a constructor registry.
//!
//! The factory is the central hub that:
//! 1. Maps calculator type names to zero-argument constructors
//! 2. Resolves the `CALCULATOR_CLASS` environment variable against the map
//! 3. Constructs the matched calculator on demand
//!
//! The environment variable is read at each [`CalculatorFactory::create_calculator`]
//! call, never cached, so the same process can observe different calculator
//! types across calls if the environment changes between them.

use std::collections::HashMap;
use std::env;

use crate::calculators::{Calculator, StringCalculator};
use crate::errors::FactoryError;

/// Environment variable that selects the calculator type to construct.
pub const CALCULATOR_CLASS_ENV: &str = "CALCULATOR_CLASS";

/// Zero-argument constructor producing a boxed calculator.
pub type CalculatorConstructor = Box<dyn Fn() -> Box<dyn Calculator> + Send + Sync>;

/// Registry-backed factory for calculator instances.
///
/// Holds constructors indexed by type name. New types can be registered at
/// runtime, so the calculator in use can be swapped without touching client
/// code. The registry is plain mutable state within one factory value;
/// threaded hosts that share a factory must synchronize around it
/// externally.
pub struct CalculatorFactory {
    /// Constructors indexed by type name
    registry: HashMap<String, CalculatorConstructor>,
}

impl CalculatorFactory {
    /// Create a factory with the built-in calculator registered.
    pub fn new() -> Self {
        let mut factory = Self {
            registry: HashMap::new(),
        };
        factory.register("StringCalculator", || Box::new(StringCalculator::new()));
        factory
    }

    /// Register a constructor for a calculator type.
    ///
    /// Registering a name that already exists replaces the previous
    /// constructor; later [`create_calculator`](Self::create_calculator)
    /// calls produce the new type only.
    pub fn register<F>(&mut self, name: impl Into<String>, constructor: F)
    where
        F: Fn() -> Box<dyn Calculator> + Send + Sync + 'static,
    {
        let name = name.into();
        log::debug!("Registering calculator type '{}'", name);
        self.registry.insert(name, Box::new(constructor));
    }

    /// Construct the calculator selected by the `CALCULATOR_CLASS`
    /// environment variable.
    ///
    /// The variable is read at call time. Validation completes before any
    /// constructor runs, so the call either fully succeeds or fails without
    /// side effects.
    ///
    /// # Errors
    /// - [`FactoryError::ConfigurationMissing`] if the variable is unset or
    ///   empty.
    /// - [`FactoryError::UnknownType`] if the value names no registered
    ///   type.
    pub fn create_calculator(&self) -> Result<Box<dyn Calculator>, FactoryError> {
        let class_name = match env::var(CALCULATOR_CLASS_ENV) {
            Ok(value) if !value.is_empty() => value,
            _ => return Err(FactoryError::ConfigurationMissing),
        };

        let constructor = self
            .registry
            .get(&class_name)
            .ok_or(FactoryError::UnknownType { name: class_name })?;

        let calculator = constructor();
        log::debug!("Created calculator instance: type={}", calculator.name());
        Ok(calculator)
    }

    /// Check whether a type name has a registered constructor.
    pub fn is_registered(&self, name: &str) -> bool {
        self.registry.contains_key(name)
    }

    /// List all registered type names.
    pub fn registered_names(&self) -> Vec<&str> {
        self.registry.keys().map(String::as_str).collect()
    }

    /// Get the number of registered calculator types.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }
}

impl Default for CalculatorFactory {
    fn default() -> Self {
        Self::new()
    }
}
