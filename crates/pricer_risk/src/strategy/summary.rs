//! Exact risk profile of a strategy at expiry.
//!
//! Every leg payoff is linear between strikes, so the aggregate payoff is
//! piecewise linear on `[0, ∞)` with kinks only at strikes. Its extremes
//! lie at `0`, at a strike, or at infinity, and its zeros can be solved
//! segment by segment. No sampling is involved.

use pricer_core::types::PricingError;
use pricer_models::instruments::StrategyLeg;

use super::payoff::total_payoff;

/// Headline figures for a strategy held to expiry.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct StrategySummary {
    /// Premium paid (positive) or received (negative) to open all legs
    pub net_premium: f64,
    /// Largest payoff, `None` when unbounded above
    pub max_gain: Option<f64>,
    /// Largest loss as a positive amount, `None` when unbounded
    pub max_loss: Option<f64>,
    /// Terminal prices where the payoff is zero, ascending
    pub breakevens: Vec<f64>,
}

impl StrategySummary {
    /// Computes the summary of `legs`.
    ///
    /// # Errors
    /// `InvalidInput` on `legs` when no legs are given.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::instruments::{Direction, OptionType, StrategyLeg};
    /// use pricer_risk::strategy::StrategySummary;
    ///
    /// let legs = [StrategyLeg::option(OptionType::Call, 100.0, 5.0, Direction::Long, 1.0).unwrap()];
    /// let summary = StrategySummary::from_legs(&legs).unwrap();
    /// assert_eq!(summary.max_gain, None);
    /// assert_eq!(summary.max_loss, Some(5.0));
    /// assert_eq!(summary.breakevens, vec![105.0]);
    /// ```
    pub fn from_legs(legs: &[StrategyLeg]) -> Result<Self, PricingError> {
        if legs.is_empty() {
            return Err(PricingError::invalid_input(
                "legs",
                "at least one strategy leg is required",
            ));
        }

        let mut nodes: Vec<f64> = std::iter::once(0.0)
            .chain(legs.iter().filter_map(StrategyLeg::kink))
            .collect();
        nodes.sort_by(f64::total_cmp);
        nodes.dedup();

        let values: Vec<f64> = nodes.iter().map(|&s| total_payoff(legs, s)).collect();
        let upside_slope: f64 = legs.iter().map(StrategyLeg::upside_slope).sum();

        let highest = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let lowest = values.iter().copied().fold(f64::INFINITY, f64::min);

        Ok(Self {
            net_premium: legs.iter().map(StrategyLeg::net_premium).sum(),
            max_gain: (upside_slope <= 0.0).then_some(highest),
            max_loss: (upside_slope >= 0.0).then_some(-lowest),
            breakevens: breakevens(&nodes, &values, upside_slope),
        })
    }
}

fn breakevens(nodes: &[f64], values: &[f64], upside_slope: f64) -> Vec<f64> {
    let mut roots = Vec::new();

    for (node, value) in nodes.iter().zip(values) {
        if *value == 0.0 {
            roots.push(*node);
        }
    }
    for (x, v) in nodes.windows(2).zip(values.windows(2)) {
        if v[0] * v[1] < 0.0 {
            roots.push(x[0] + (x[1] - x[0]) * v[0] / (v[0] - v[1]));
        }
    }
    if let (Some(&last_node), Some(&last_value)) = (nodes.last(), values.last()) {
        if last_value * upside_slope < 0.0 {
            roots.push(last_node - last_value / upside_slope);
        }
    }

    roots.sort_by(f64::total_cmp);
    roots.dedup();
    roots
}
