//! # BSOP Core (L1: Foundation)
//!
//! Shared foundations for the bsop-rust workspace.
//!
//! This crate provides:
//! - Standard normal distribution primitives (CDF, PDF)
//! - Structured error types for pricing operations
//!
//! ## Design Principles
//!
//! - **Double precision throughout**: the pricing contract is specified in
//!   IEEE-754 `f64`, so no generic scalar abstraction is carried
//! - **erfc-based CDF** for accuracy well below 1e-9 across the working range
//! - **Typed errors** so callers branch on error kind, not message strings

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod distributions;
pub mod error;

pub use distributions::{norm_cdf, norm_pdf};
pub use error::PricingError;
