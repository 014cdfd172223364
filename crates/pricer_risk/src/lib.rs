//! # Pricer Risk (L4: Application)
//!
//! Sensitivity analysis and strategy payoffs built on the analytical
//! Black-Scholes engine.
//!
//! This crate provides:
//! - Sweeps of price or a Greek across one input ([`scenarios::sweep()`])
//! - Two-input heatmaps ([`scenarios::price_grid`])
//! - Spot shock scenarios with P&L ([`scenarios::spot_shocks`])
//! - Multi-leg expiry payoffs, summaries and presets ([`strategy`])
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            pricer_risk (L4)             │
//! ├─────────────────────────────────────────┤
//! │  scenarios/  - sweep, grid, shocks      │
//! │  strategy/   - payoff, summary, presets │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │           pricer_models (L2)            │
//! │  Black-Scholes prices and Greeks        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! Everything is a pure recomputation over validated inputs.
//!
//! ## Example
//!
//! ```
//! use pricer_models::instruments::{Direction, OptionField, OptionParameters, OptionType, StrategyLeg};
//! use pricer_risk::scenarios::{sweep, Metric};
//! use pricer_risk::strategy::strategy_payoff;
//!
//! let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
//! let delta = sweep(&params, OptionField::Spot, 50.0, 150.0, 101, Metric::Delta).unwrap();
//! assert!(delta.values.windows(2).all(|w| w[1] > w[0]));
//!
//! let legs = [StrategyLeg::option(OptionType::Call, 100.0, 5.0, Direction::Long, 1.0).unwrap()];
//! let curve = strategy_payoff(&legs, 80.0, 120.0, 41).unwrap();
//! assert_eq!(curve.points[0].payoff, -5.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod scenarios;
pub mod strategy;

// Re-export commonly used types
pub use scenarios::{Metric, SensitivityGrid, ShockScenario, SweepSeries};
pub use strategy::{StrategyPayoffCurve, StrategyPreset, StrategySummary};
