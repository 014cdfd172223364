//! Multi-leg strategy analysis at expiry.
//!
//! - [`strategy_payoff`]: aggregate payoff sampled over a price range
//! - [`StrategySummary`]: exact net premium, extremes and breakevens
//! - [`StrategyPreset`]: common strategies priced at current market

mod payoff;
mod presets;
mod summary;

pub use payoff::{strategy_payoff, total_payoff, PayoffPoint, StrategyPayoffCurve};
pub use presets::StrategyPreset;
pub use summary::StrategySummary;
