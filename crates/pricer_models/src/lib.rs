//! # Pricer Models (L2: Business Logic)
//!
//! European option definitions and the analytical Black-Scholes engine.
//!
//! This crate provides:
//! - Validated option inputs ([`instruments::OptionParameters`])
//! - Call/put payoffs and multi-leg strategy positions
//! - Closed-form prices and Greeks ([`analytical::price`],
//!   [`analytical::greeks`])
//!
//! ## Design Principles
//!
//! - **Validate at the boundary**: invalid inputs are rejected when
//!   parameters are built, so pricing itself cannot fail
//! - **Generic over `T: Float`** for dual-number sensitivity checks
//! - **Pure functions**: no shared state, no I/O
//!
//! ## Example
//!
//! ```
//! use pricer_models::analytical::{greeks, price, GreeksConvention};
//! use pricer_models::instruments::{OptionParameters, OptionType};
//!
//! let params = OptionParameters::new(100.0_f64, 100.0, 1.0, 0.05, 0.2, OptionType::Put).unwrap();
//! let result = price(&params);
//! let sensitivities = greeks(&params, &GreeksConvention::default());
//!
//! assert!((result.price - 5.5735).abs() < 1e-4);
//! assert!(sensitivities.delta < 0.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
