//! Scenario analysis over Black-Scholes inputs.
//!
//! This module provides:
//! - One-dimensional sweeps of price or a Greek ([`sweep()`])
//! - Two-dimensional heatmaps ([`price_grid`])
//! - Preset spot shocks with P&L ([`spot_shocks`])
//!
//! Every function is a pure recomputation; nothing is cached.

mod grid;
mod presets;
mod sweep;

pub use grid::{
    price_grid, price_grid_with_convention, GridAxis, SensitivityGrid, DEFAULT_GRID_POINTS,
};
pub use presets::{spot_shocks, ShockResult, ShockScenario};
pub use sweep::{sweep, sweep_with_convention, Metric, SweepSeries};
