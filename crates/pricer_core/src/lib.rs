//! # pricer_core: Foundation for the option pricing workspace
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer shared by every other crate, providing:
//! - The single validation error type, `PricingError` (`types::error`)
//! - Evenly spaced sampling grids and range validation (`math::grid`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::grid::linspace;
//! use pricer_core::types::PricingError;
//!
//! let grid = linspace(80.0, 120.0, 5).unwrap();
//! assert_eq!(grid, vec![80.0, 90.0, 100.0, 110.0, 120.0]);
//!
//! let err = linspace(1.0, 1.0, 5).unwrap_err();
//! assert_eq!(err.field(), "range");
//! # let _: PricingError = err;
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `PricingError`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
