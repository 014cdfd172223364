//! Expiry payoff curves for multi-leg strategies.

use pricer_core::math::grid::linspace;
use pricer_core::types::PricingError;
use pricer_models::instruments::StrategyLeg;

/// Aggregate payoff at one terminal price.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PayoffPoint {
    /// Terminal underlying price
    pub price: f64,
    /// Sum of leg payoffs net of premium
    pub payoff: f64,
}

/// Strategy payoff sampled over a range of terminal prices, in increasing
/// price order.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrategyPayoffCurve {
    /// Sampled points
    pub points: Vec<PayoffPoint>,
}

impl StrategyPayoffCurve {
    /// Number of samples.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the curve holds no samples.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Sampled terminal prices.
    pub fn prices(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.price).collect()
    }

    /// Payoff at each sampled price.
    pub fn payoffs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.payoff).collect()
    }
}

/// Aggregate payoff of `legs` at terminal price `price`.
pub fn total_payoff(legs: &[StrategyLeg], price: f64) -> f64 {
    legs.iter().map(|leg| leg.payoff(price)).sum()
}

/// Samples the expiry payoff of a strategy over `[price_low, price_high]`.
///
/// # Errors
/// `PricingError::InvalidInput` on
/// - `legs` when no legs are given
/// - `range` when `price_low >= price_high`, a bound is non-finite, or
///   `price_low` is negative
/// - `points` when `n < 2`
///
/// # Examples
/// ```
/// use pricer_models::instruments::{Direction, OptionType, StrategyLeg};
/// use pricer_risk::strategy::strategy_payoff;
///
/// // Long straddle at 100
/// let legs = [
///     StrategyLeg::option(OptionType::Call, 100.0, 4.0, Direction::Long, 1.0).unwrap(),
///     StrategyLeg::option(OptionType::Put, 100.0, 3.0, Direction::Long, 1.0).unwrap(),
/// ];
/// let curve = strategy_payoff(&legs, 80.0, 120.0, 5).unwrap();
/// assert_eq!(curve.payoffs(), vec![13.0, 3.0, -7.0, 3.0, 13.0]);
/// ```
pub fn strategy_payoff(
    legs: &[StrategyLeg],
    price_low: f64,
    price_high: f64,
    n: usize,
) -> Result<StrategyPayoffCurve, PricingError> {
    if legs.is_empty() {
        return Err(PricingError::invalid_input(
            "legs",
            "at least one strategy leg is required",
        ));
    }
    let prices = linspace(price_low, price_high, n)?;
    if price_low < 0.0 {
        return Err(PricingError::invalid_input(
            "range",
            format!("underlying prices must be non-negative (got {})", price_low),
        ));
    }

    let points = prices
        .into_iter()
        .map(|price| PayoffPoint {
            price,
            payoff: total_payoff(legs, price),
        })
        .collect();

    Ok(StrategyPayoffCurve { points })
}
