//! The built-in string calculator.
//!
//! Sums integers out of a delimited string:
//!
//! - An empty input sums to 0.
//! - Numbers are separated by commas or newlines.
//! - A leading `//<delimiter>\n` header selects a custom delimiter for the
//!   rest of the input.
//! - Negative numbers are rejected; the error lists every negative found.
//! - Numbers greater than 1000 are ignored.

use std::any::Any;

use super::base::{Calculator, CalculatorError};

/// Largest number that still contributes to the sum.
const UPPER_BOUND: i64 = 1000;

/// The standard calculator, registered with the factory out of the box
/// under the name `"StringCalculator"`.
#[derive(Debug, Default)]
pub struct StringCalculator;

impl StringCalculator {
    /// Create a new `StringCalculator`.
    pub fn new() -> Self {
        Self
    }
}

impl Calculator for StringCalculator {
    fn add(&self, input: &str) -> Result<i64, CalculatorError> {
        if input.is_empty() {
            return Ok(0);
        }

        // A "//<delimiter>\n" header swaps the default comma delimiter.
        let (delimiter, body) = match input.strip_prefix("//") {
            Some(rest) => match rest.split_once('\n') {
                Some((delimiter, body)) => (delimiter, body),
                None => {
                    return Err(CalculatorError::InvalidNumber {
                        token: rest.to_string(),
                    })
                }
            },
            None => (",", input),
        };

        if body.is_empty() {
            return Ok(0);
        }

        let mut sum = 0;
        let mut negatives = Vec::new();
        for token in body.split('\n').flat_map(|line| line.split(delimiter)) {
            let number: i64 =
                token
                    .trim()
                    .parse()
                    .map_err(|_| CalculatorError::InvalidNumber {
                        token: token.to_string(),
                    })?;
            if number < 0 {
                negatives.push(number);
            } else if number <= UPPER_BOUND {
                sum += number;
            }
        }

        if !negatives.is_empty() {
            let numbers = negatives
                .iter()
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            return Err(CalculatorError::NegativesNotAllowed { numbers });
        }

        Ok(sum)
    }

    fn name(&self) -> &str {
        "StringCalculator"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_sums_to_zero() {
        let calculator = StringCalculator::new();
        assert_eq!(calculator.add("").unwrap(), 0);
    }

    #[test]
    fn test_single_number() {
        let calculator = StringCalculator::new();
        assert_eq!(calculator.add("7").unwrap(), 7);
    }

    #[test]
    fn test_comma_separated_numbers() {
        let calculator = StringCalculator::new();
        assert_eq!(calculator.add("1,2,3").unwrap(), 6);
    }

    #[test]
    fn test_newlines_mix_with_commas() {
        let calculator = StringCalculator::new();
        assert_eq!(calculator.add("1\n2,3").unwrap(), 6);
    }

    #[test]
    fn test_custom_delimiter_header() {
        let calculator = StringCalculator::new();
        assert_eq!(calculator.add("//;\n1;2").unwrap(), 3);
    }

    #[test]
    fn test_custom_delimiter_with_empty_body() {
        let calculator = StringCalculator::new();
        assert_eq!(calculator.add("//;\n").unwrap(), 0);
    }

    #[test]
    fn test_negatives_are_rejected_and_all_listed() {
        let calculator = StringCalculator::new();
        let err = calculator.add("1,-2,3,-4").unwrap_err();
        assert_eq!(
            err.to_string(),
            "negative numbers not allowed: -2, -4"
        );
    }

    #[test]
    fn test_numbers_over_one_thousand_are_ignored() {
        let calculator = StringCalculator::new();
        assert_eq!(calculator.add("2,1001").unwrap(), 2);
        assert_eq!(calculator.add("2,1000").unwrap(), 1002);
    }

    #[test]
    fn test_non_numeric_token_is_an_error() {
        let calculator = StringCalculator::new();
        let err = calculator.add("1,abc").unwrap_err();
        assert!(matches!(err, CalculatorError::InvalidNumber { ref token } if token == "abc"));
    }

    #[test]
    fn test_header_without_newline_is_an_error() {
        let calculator = StringCalculator::new();
        let err = calculator.add("//;").unwrap_err();
        assert!(matches!(err, CalculatorError::InvalidNumber { .. }));
    }
}
