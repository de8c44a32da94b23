//! # BSOP Pricing (L2: The Kernel)
//!
//! Closed-form Black-Scholes pricing of European options with analytical
//! Greeks.
//!
//! This crate provides:
//! - Validated request parameters ([`OptionRequest`], [`OptionType`])
//! - The pricing kernel ([`price`]) returning price, delta, gamma, theta,
//!   vega and the intermediate d1/d2 terms
//! - A structured result type ([`PricingResult`])
//!
//! ## Design Principles
//!
//! - **Pure and stateless**: the kernel reads only its input and writes only
//!   its return value, so it is safe under unbounded parallel invocation
//! - **Defensive validation**: domain bounds are checked in the request
//!   constructor and re-checked by the kernel, which never divides by zero
//!   or takes the logarithm of a non-positive number silently
//! - **No partial results**: a call yields a fully populated
//!   [`PricingResult`] or exactly one [`PricingError`]
//!
//! ## Example
//!
//! ```
//! use bsop_pricing::{price, OptionRequest, OptionType};
//!
//! let request = OptionRequest::new(0.05, 100.0, 100.0, 1.0, 0.2, OptionType::Call)?;
//! let result = price(&request)?;
//!
//! assert!((result.price - 10.4506).abs() < 1e-3);
//! # Ok::<(), bsop_pricing::PricingError>(())
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod black_scholes;
pub mod request;
pub mod result;

pub use black_scholes::price;
pub use bsop_core::PricingError;
pub use request::{OptionRequest, OptionType};
pub use result::PricingResult;
