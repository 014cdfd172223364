//! Core error types.
//!
//! This module provides:
//! - `error`: The structured `PricingError` raised by every validating entry point
//!
//! # Re-exports
//!
//! [`PricingError`] is re-exported at this module level.

pub mod error;

pub use error::PricingError;
