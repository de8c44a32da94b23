//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from the pricing kernel

use thiserror::Error;

/// Categorised pricing errors.
///
/// Exactly two failure modes exist: a caller-supplied parameter outside its
/// documented domain, and a defensive guard against non-finite arithmetic.
/// Callers can branch on the variant without inspecting message strings.
///
/// # Variants
/// - `InvalidInput`: A request field violates its domain constraint
/// - `NumericOverflow`: An intermediate or output value is NaN/∞
///
/// # Examples
/// ```
/// use bsop_core::PricingError;
///
/// let err = PricingError::InvalidInput {
///     field: "volatility",
///     value: -0.2,
///     constraint: "0 < sigma <= 5",
/// };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PricingError {
    /// A caller-supplied parameter violates a documented domain constraint.
    ///
    /// Always attributable to a specific field; never retried.
    #[error("invalid input: {field} = {value} (must satisfy {constraint})")]
    InvalidInput {
        /// Name of the offending request field.
        field: &'static str,
        /// The rejected value.
        value: f64,
        /// The violated bound, in mathematical notation.
        constraint: &'static str,
    },

    /// An internal arithmetic step produced a non-finite value.
    ///
    /// Defensive only: not expected under the stated input domain, but
    /// detected rather than propagated as NaN/∞. Treated as an internal
    /// fault, not a user error.
    #[error("numeric overflow: {quantity} is not finite")]
    NumericOverflow {
        /// Name of the quantity that became non-finite.
        quantity: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = PricingError::InvalidInput {
            field: "spot_price",
            value: -100.0,
            constraint: "S > 0",
        };
        assert_eq!(
            format!("{}", err),
            "invalid input: spot_price = -100 (must satisfy S > 0)"
        );
    }

    #[test]
    fn test_numeric_overflow_display() {
        let err = PricingError::NumericOverflow { quantity: "d1" };
        assert_eq!(format!("{}", err), "numeric overflow: d1 is not finite");
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = PricingError::NumericOverflow { quantity: "price" };
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = PricingError::InvalidInput {
            field: "volatility",
            value: 5.5,
            constraint: "0 < sigma <= 5",
        };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }

    #[test]
    fn test_variants_distinguishable() {
        let invalid = PricingError::InvalidInput {
            field: "strike_price",
            value: 0.0,
            constraint: "K > 0",
        };
        let overflow = PricingError::NumericOverflow { quantity: "vega" };
        assert_ne!(invalid, overflow);
        assert!(matches!(invalid, PricingError::InvalidInput { .. }));
        assert!(matches!(overflow, PricingError::NumericOverflow { .. }));
    }
}
