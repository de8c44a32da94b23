//! Black-Scholes pricing kernel for European options.
//!
//! This module computes the closed-form price and first-order Greeks of a
//! European call or put under lognormal dynamics.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T

use bsop_core::distributions::{norm_cdf, norm_pdf};
use bsop_core::PricingError;

use crate::request::{OptionRequest, OptionType};
use crate::result::PricingResult;

/// Rejects a non-finite intermediate or output value.
#[inline]
fn guard_finite(quantity: &'static str, value: f64) -> Result<f64, PricingError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PricingError::NumericOverflow { quantity })
    }
}

/// Prices a European option and computes its first-order Greeks.
///
/// Deterministic and stateless: the only data-dependent branch is on the
/// option type, identical input always yields bit-for-bit identical output,
/// and the function is safe to call concurrently from any number of
/// callers.
///
/// The request bounds are re-validated before any arithmetic, so the kernel
/// is safe to call directly even without a validating transport layer in
/// front of it. Every intermediate (d₁, d₂) and every output field is
/// checked for finiteness.
///
/// # Arguments
/// * `request` - Validated market and contract parameters
///
/// # Returns
/// A fully populated [`PricingResult`] with price, delta, gamma, theta,
/// vega and the d₁/d₂ terms. No rounding is applied.
///
/// # Errors
/// - `PricingError::InvalidInput` if any field violates its domain
/// - `PricingError::NumericOverflow` if an intermediate or output is
///   non-finite despite valid inputs (defensive guard)
///
/// # Examples
/// ```
/// use bsop_pricing::{price, OptionRequest, OptionType};
///
/// let request = OptionRequest::new(0.05, 100.0, 100.0, 1.0, 0.2, OptionType::Call)?;
/// let result = price(&request)?;
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let put = price(&OptionRequest::new(0.05, 100.0, 100.0, 1.0, 0.2, OptionType::Put)?)?;
/// let forward = 100.0 - 100.0 * (-0.05_f64).exp();
/// assert!((result.price - put.price - forward).abs() < 1e-10);
/// # Ok::<(), bsop_pricing::PricingError>(())
/// ```
pub fn price(request: &OptionRequest) -> Result<PricingResult, PricingError> {
    request.validate()?;

    let s = request.spot_price();
    let k = request.strike_price();
    let r = request.risk_free_rate();
    let t = request.time_to_maturity();
    let sigma = request.volatility();

    // The validated domain keeps vol_sqrt_t strictly positive and finite,
    // so the divisions and the logarithm below are well defined.
    let sqrt_t = t.sqrt();
    let vol_sqrt_t = sigma * sqrt_t;

    // d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
    let d1 = guard_finite(
        "d1",
        ((s / k).ln() + (r + 0.5 * sigma * sigma) * t) / vol_sqrt_t,
    )?;
    // d₂ = d₁ - σ√T
    let d2 = guard_finite("d2", d1 - vol_sqrt_t)?;

    let discount = (-r * t).exp();
    let pdf_d1 = norm_pdf(d1);

    // Decay term shared by call and put theta: -(S·σ·φ(d₁))/(2√T)
    let decay = -(s * sigma * pdf_d1) / (2.0 * sqrt_t);

    let (price, delta, theta) = match request.option_type() {
        OptionType::Call => {
            let n_d1 = norm_cdf(d1);
            let n_d2 = norm_cdf(d2);
            (
                s * n_d1 - k * discount * n_d2,
                n_d1,
                decay - r * k * discount * n_d2,
            )
        }
        OptionType::Put => {
            let n_neg_d1 = norm_cdf(-d1);
            let n_neg_d2 = norm_cdf(-d2);
            (
                k * discount * n_neg_d2 - s * n_neg_d1,
                norm_cdf(d1) - 1.0,
                decay + r * k * discount * n_neg_d2,
            )
        }
    };

    // Gamma and vega are identical for calls and puts
    let gamma = pdf_d1 / (s * vol_sqrt_t);
    let vega = s * sqrt_t * pdf_d1;

    Ok(PricingResult {
        price: guard_finite("price", price)?,
        delta: guard_finite("delta", delta)?,
        gamma: guard_finite("gamma", gamma)?,
        theta: guard_finite("theta", theta)?,
        vega: guard_finite("vega", vega)?,
        d1,
        d2,
    })
}
