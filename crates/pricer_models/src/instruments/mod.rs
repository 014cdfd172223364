//! Instrument definitions.
//!
//! - [`OptionParameters`]: validated Black-Scholes inputs for one option
//! - [`OptionType`]: call or put, with its exercise payoff
//! - [`StrategyLeg`]: one position of a multi-leg strategy held to expiry
//!
//! # Examples
//!
//! ```
//! use pricer_models::instruments::{OptionParameters, OptionType, StrategyLeg, Direction};
//!
//! let params = OptionParameters::new(100.0_f64, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
//! assert!(!params.is_in_the_money());
//!
//! let leg = StrategyLeg::option(OptionType::Put, 95.0, 2.0, Direction::Long, 1.0).unwrap();
//! assert_eq!(leg.payoff(90.0), 3.0);
//! ```

mod params;
mod payoff;
mod strategy;

pub use params::{OptionField, OptionParameters, DAYS_PER_YEAR};
pub use payoff::OptionType;
pub use strategy::{Direction, LegInstrument, StrategyLeg};
