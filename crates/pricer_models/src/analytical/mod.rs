//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions for option pricing:
//! - Black-Scholes model for lognormal dynamics
//! - Analytical Greeks (Delta, Gamma, Vega, Theta, Rho)
//! - Standard normal CDF/PDF
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: Supports both `f64` and `Dual64` for AD
//! - **Total functions**: degenerate inputs resolve to finite boundary values
//! - **Configurable reporting**: Theta day count and Vega/Rho scaling via
//!   [`GreeksConvention`]

pub mod black_scholes;
pub mod distributions;
pub mod greeks;

// Re-export main types at module level
pub use black_scholes::{greeks, price, BlackScholes, PricingResult};
pub use distributions::{norm_cdf, norm_pdf};
pub use greeks::{Greeks, GreeksConvention, CALENDAR_DAYS_PER_YEAR, TRADING_DAYS_PER_YEAR};
