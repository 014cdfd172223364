//! Numerical helpers shared across the workspace.
//!
//! - [`grid`]: evenly spaced sample points over a closed interval

pub mod grid;
