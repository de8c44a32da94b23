//! Validated option request parameters.
//!
//! This module provides the immutable per-call input to the pricing kernel
//! with validation of every domain bound.

use bsop_core::PricingError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// European option exercise side.
///
/// Serialised as the one-letter codes `"c"` / `"p"` of the original wire
/// vocabulary when the `serde` feature is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OptionType {
    /// Right to buy the underlying at the strike.
    #[cfg_attr(feature = "serde", serde(rename = "c"))]
    Call,
    /// Right to sell the underlying at the strike.
    #[cfg_attr(feature = "serde", serde(rename = "p"))]
    Put,
}

impl OptionType {
    /// Returns true for [`OptionType::Call`].
    #[inline]
    pub fn is_call(self) -> bool {
        matches!(self, OptionType::Call)
    }
}

/// Immutable Black-Scholes request parameters.
///
/// Holds the five market/contract scalars plus the option type, with
/// validation ensuring each value lies inside its documented domain:
///
/// | Field              | Domain   |
/// |--------------------|----------|
/// | `risk_free_rate`   | [0, 1]   |
/// | `spot_price`       | (0, ∞)   |
/// | `strike_price`     | (0, ∞)   |
/// | `time_to_maturity` | (0, 30]  |
/// | `volatility`       | (0, 5]   |
///
/// These bounds guarantee that `sigma * sqrt(T)` is strictly positive and
/// finite, so the kernel's divisions and logarithm are well defined.
///
/// # Examples
/// ```
/// use bsop_pricing::{OptionRequest, OptionType};
///
/// let request = OptionRequest::new(0.05, 100.0, 100.0, 1.0, 0.2, OptionType::Call).unwrap();
/// assert_eq!(request.spot_price(), 100.0);
///
/// // Zero volatility is rejected
/// assert!(OptionRequest::new(0.05, 100.0, 100.0, 1.0, 0.0, OptionType::Call).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawOptionRequest"))]
pub struct OptionRequest {
    /// Fractional annual risk-free rate (r).
    #[cfg_attr(feature = "serde", serde(rename = "r"))]
    risk_free_rate: f64,
    /// Current underlying price (S).
    #[cfg_attr(feature = "serde", serde(rename = "S"))]
    spot_price: f64,
    /// Contract strike (K).
    #[cfg_attr(feature = "serde", serde(rename = "K"))]
    strike_price: f64,
    /// Years until expiry (T).
    #[cfg_attr(feature = "serde", serde(rename = "T"))]
    time_to_maturity: f64,
    /// Annualised volatility (sigma).
    #[cfg_attr(feature = "serde", serde(rename = "sigma"))]
    volatility: f64,
    /// Call or put.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    option_type: OptionType,
}

impl OptionRequest {
    /// Creates a new request with validation of every domain bound.
    ///
    /// # Arguments
    /// * `risk_free_rate` - Fractional annual rate, in [0, 1]
    /// * `spot_price` - Current underlying price, > 0
    /// * `strike_price` - Contract strike, > 0
    /// * `time_to_maturity` - Years until expiry, in (0, 30]
    /// * `volatility` - Annualised volatility, in (0, 5]
    /// * `option_type` - Call or put
    ///
    /// # Errors
    /// `PricingError::InvalidInput` naming the first field found outside
    /// its domain (non-finite values are rejected by the same checks).
    pub fn new(
        risk_free_rate: f64,
        spot_price: f64,
        strike_price: f64,
        time_to_maturity: f64,
        volatility: f64,
        option_type: OptionType,
    ) -> Result<Self, PricingError> {
        let request = Self {
            risk_free_rate,
            spot_price,
            strike_price,
            time_to_maturity,
            volatility,
            option_type,
        };
        request.validate()?;
        Ok(request)
    }

    /// Re-checks every domain bound.
    ///
    /// The kernel calls this before any arithmetic so it never trusts an
    /// upstream validator to have run. All checks reject NaN and ±∞.
    pub fn validate(&self) -> Result<(), PricingError> {
        if !(0.0..=1.0).contains(&self.risk_free_rate) {
            return Err(PricingError::InvalidInput {
                field: "risk_free_rate",
                value: self.risk_free_rate,
                constraint: "0 <= r <= 1",
            });
        }

        if !(self.spot_price.is_finite() && self.spot_price > 0.0) {
            return Err(PricingError::InvalidInput {
                field: "spot_price",
                value: self.spot_price,
                constraint: "S > 0",
            });
        }

        if !(self.strike_price.is_finite() && self.strike_price > 0.0) {
            return Err(PricingError::InvalidInput {
                field: "strike_price",
                value: self.strike_price,
                constraint: "K > 0",
            });
        }

        if !(self.time_to_maturity > 0.0 && self.time_to_maturity <= 30.0) {
            return Err(PricingError::InvalidInput {
                field: "time_to_maturity",
                value: self.time_to_maturity,
                constraint: "0 < T <= 30",
            });
        }

        if !(self.volatility > 0.0 && self.volatility <= 5.0) {
            return Err(PricingError::InvalidInput {
                field: "volatility",
                value: self.volatility,
                constraint: "0 < sigma <= 5",
            });
        }

        Ok(())
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn risk_free_rate(&self) -> f64 {
        self.risk_free_rate
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot_price(&self) -> f64 {
        self.spot_price
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike_price(&self) -> f64 {
        self.strike_price
    }

    /// Returns the time to maturity in years.
    #[inline]
    pub fn time_to_maturity(&self) -> f64 {
        self.time_to_maturity
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns the option type.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }
}

/// Unvalidated mirror of [`OptionRequest`] used as a deserialisation
/// staging struct, so that parsed input passes through the same bound
/// checks as programmatic construction.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawOptionRequest {
    #[serde(rename = "r")]
    risk_free_rate: f64,
    #[serde(rename = "S")]
    spot_price: f64,
    #[serde(rename = "K")]
    strike_price: f64,
    #[serde(rename = "T")]
    time_to_maturity: f64,
    #[serde(rename = "sigma")]
    volatility: f64,
    #[serde(rename = "type")]
    option_type: OptionType,
}

#[cfg(feature = "serde")]
impl TryFrom<RawOptionRequest> for OptionRequest {
    type Error = PricingError;

    fn try_from(raw: RawOptionRequest) -> Result<Self, Self::Error> {
        OptionRequest::new(
            raw.risk_free_rate,
            raw.spot_price,
            raw.strike_price,
            raw.time_to_maturity,
            raw.volatility,
            raw.option_type,
        )
    }
}
