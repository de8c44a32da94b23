//! Pricing result type.
//!
//! Provides [`PricingResult`], the structured output of the pricing kernel.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Immutable output of a single pricing call.
///
/// Every field is a finite IEEE-754 double; the kernel applies no rounding
/// (presentation rounding belongs to the transport layer).
///
/// # Greeks
///
/// - `delta`: ∂V/∂S - Sensitivity to spot price
/// - `gamma`: ∂²V/∂S² - Convexity with respect to spot
/// - `theta`: ∂V/∂T - Time decay per unit time
/// - `vega`: ∂V/∂σ - Sensitivity to volatility
///
/// The intermediate distances `d1` and `d2` are retained for diagnostic
/// and reporting purposes.
///
/// # Examples
///
/// ```
/// use bsop_pricing::{price, OptionRequest, OptionType};
///
/// let request = OptionRequest::new(0.05, 100.0, 100.0, 1.0, 0.2, OptionType::Call)?;
/// let result = price(&request)?;
///
/// assert!(result.gamma >= 0.0);
/// assert!(result.vega >= 0.0);
/// # Ok::<(), bsop_pricing::PricingError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PricingResult {
    /// Theoretical option value (non-negative).
    pub price: f64,
    /// Delta: ∂V/∂S (sensitivity to spot price).
    pub delta: f64,
    /// Gamma: ∂²V/∂S² (convexity with respect to spot).
    pub gamma: f64,
    /// Theta: ∂V/∂T (time decay).
    pub theta: f64,
    /// Vega: ∂V/∂σ (sensitivity to volatility).
    pub vega: f64,
    /// The d1 standardised distance.
    pub d1: f64,
    /// The d2 standardised distance.
    pub d2: f64,
}
