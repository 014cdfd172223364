//! Preset spot shock scenarios.
//!
//! Re-prices an option under relative moves of the underlying with every
//! other input held fixed, and reports the P&L against the current price.

use pricer_core::types::PricingError;
use pricer_models::analytical;
use pricer_models::instruments::{OptionField, OptionParameters};

/// A named relative spot move.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShockScenario {
    /// Display name
    pub name: String,
    /// Relative move, e.g. `-0.05` for a 5% fall
    pub shift: f64,
}

impl ShockScenario {
    /// Creates a scenario.
    pub fn new(name: impl Into<String>, shift: f64) -> Self {
        Self {
            name: name.into(),
            shift,
        }
    }

    /// Scenario named after its shift, e.g. `Spot +2.5%`.
    pub fn from_shift(shift: f64) -> Self {
        let pct = shift * 100.0;
        let name = if pct == 0.0 {
            "Current".to_string()
        } else {
            format!("Spot {:+}%", (pct * 100.0).round() / 100.0)
        };
        Self::new(name, shift)
    }

    /// Falls of 10% and 5%, no change, rises of 5% and 10%.
    pub fn standard() -> Vec<Self> {
        vec![
            Self::new("Down 10%", -0.10),
            Self::new("Down 5%", -0.05),
            Self::new("Current", 0.0),
            Self::new("Up 5%", 0.05),
            Self::new("Up 10%", 0.10),
        ]
    }
}

/// Outcome of one shock.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ShockResult {
    /// Scenario name
    pub name: String,
    /// Relative spot move
    pub shift: f64,
    /// Shocked spot
    pub spot: f64,
    /// Option price at the shocked spot
    pub price: f64,
    /// `price - base price`
    pub pnl: f64,
    /// P&L as a percentage of the base price, 0 when the base price is 0
    pub pnl_pct: f64,
}

/// Re-prices the option under each scenario.
///
/// # Errors
/// `InvalidInput` on `shocks[i].shift` for a non-finite shift, or
/// `shocks[i].spot` when the shocked spot is not positive (a move of -100%
/// or worse).
///
/// # Examples
/// ```
/// use pricer_models::instruments::{OptionParameters, OptionType};
/// use pricer_risk::scenarios::{spot_shocks, ShockScenario};
///
/// let params = OptionParameters::new(100.0, 100.0, 0.25, 0.05, 0.2, OptionType::Call).unwrap();
/// let results = spot_shocks(&params, &ShockScenario::standard()).unwrap();
/// assert_eq!(results.len(), 5);
/// assert_eq!(results[2].pnl, 0.0);
/// assert!(results[4].pnl > 0.0);
/// ```
pub fn spot_shocks(
    params: &OptionParameters<f64>,
    scenarios: &[ShockScenario],
) -> Result<Vec<ShockResult>, PricingError> {
    let base_price = analytical::price(params).price;

    scenarios
        .iter()
        .enumerate()
        .map(|(i, scenario)| {
            let prefix = format!("shocks[{}]", i);
            if !scenario.shift.is_finite() {
                return Err(PricingError::invalid_input(
                    "shift",
                    format!("shift must be finite (got {})", scenario.shift),
                )
                .within(&prefix));
            }

            let spot = params.spot() * (1.0 + scenario.shift);
            let shocked = params
                .with(OptionField::Spot, spot)
                .map_err(|e| e.within(&prefix))?;
            let price = analytical::price(&shocked).price;
            let pnl = price - base_price;
            let pnl_pct = if base_price > 0.0 {
                pnl / base_price * 100.0
            } else {
                0.0
            };

            Ok(ShockResult {
                name: scenario.name.clone(),
                shift: scenario.shift,
                spot,
                price,
                pnl,
                pnl_pct,
            })
        })
        .collect()
}
