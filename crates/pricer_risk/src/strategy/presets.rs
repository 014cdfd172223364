//! Common option strategies built at current market prices.

use pricer_core::types::PricingError;
use pricer_models::analytical;
use pricer_models::instruments::{
    Direction, OptionField, OptionParameters, OptionType, StrategyLeg,
};

/// A named multi-leg strategy.
///
/// Strikes default to the strike of the parameters passed to
/// [`StrategyPreset::build`]; spreads and strangles carry their own.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")
)]
pub enum StrategyPreset {
    /// Buy a call
    LongCall,
    /// Buy a put
    LongPut,
    /// Hold the underlying and sell a call
    CoveredCall,
    /// Hold the underlying and buy a put
    ProtectivePut,
    /// Buy a call and a put at the same strike
    LongStraddle,
    /// Buy an out-of-the-money put and call
    LongStrangle {
        /// Put strike
        put_strike: f64,
        /// Call strike, above the put strike
        call_strike: f64,
    },
    /// Buy a call at `lower`, sell a call at `upper`
    BullCallSpread {
        /// Long call strike
        lower: f64,
        /// Short call strike
        upper: f64,
    },
    /// Buy a put at `upper`, sell a put at `lower`
    BearPutSpread {
        /// Short put strike
        lower: f64,
        /// Long put strike
        upper: f64,
    },
}

impl StrategyPreset {
    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::LongCall => "Long Call",
            Self::LongPut => "Long Put",
            Self::CoveredCall => "Covered Call",
            Self::ProtectivePut => "Protective Put",
            Self::LongStraddle => "Long Straddle",
            Self::LongStrangle { .. } => "Long Strangle",
            Self::BullCallSpread { .. } => "Bull Call Spread",
            Self::BearPutSpread { .. } => "Bear Put Spread",
        }
    }

    /// One-line description of the market view.
    pub fn description(&self) -> &'static str {
        match self {
            Self::LongCall => "Bullish: profits from a significant rise",
            Self::LongPut => "Bearish: profits from a significant fall",
            Self::CoveredCall => "Income: sells upside on a held position",
            Self::ProtectivePut => "Hedge: insures a held position against a fall",
            Self::LongStraddle => "Volatility: profits from a large move either way",
            Self::LongStrangle { .. } => "Volatility: cheaper straddle with wider breakevens",
            Self::BullCallSpread { .. } => "Moderately bullish with capped gain and loss",
            Self::BearPutSpread { .. } => "Moderately bearish with capped gain and loss",
        }
    }

    /// Builds the legs, pricing each option with Black-Scholes using every
    /// input of `params` except its option type. Quantities are one unit.
    ///
    /// # Errors
    /// `InvalidInput` on a preset strike (`put_strike`, `upper`, …) that is
    /// not positive or out of order.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::instruments::{OptionParameters, OptionType};
    /// use pricer_risk::strategy::StrategyPreset;
    ///
    /// let params = OptionParameters::new(100.0, 100.0, 0.25, 0.05, 0.2, OptionType::Call).unwrap();
    /// let legs = StrategyPreset::LongStraddle.build(&params).unwrap();
    /// assert_eq!(legs.len(), 2);
    /// assert!(legs.iter().all(|leg| leg.premium() > 0.0));
    /// ```
    pub fn build(&self, params: &OptionParameters<f64>) -> Result<Vec<StrategyLeg>, PricingError> {
        let strike = params.strike();
        let long = Direction::Long;
        let short = Direction::Short;

        match *self {
            Self::LongCall => Ok(vec![priced(params, OptionType::Call, strike, "strike", long)?]),
            Self::LongPut => Ok(vec![priced(params, OptionType::Put, strike, "strike", long)?]),
            Self::CoveredCall => Ok(vec![
                StrategyLeg::underlying(params.spot(), long, 1.0)?,
                priced(params, OptionType::Call, strike, "strike", short)?,
            ]),
            Self::ProtectivePut => Ok(vec![
                StrategyLeg::underlying(params.spot(), long, 1.0)?,
                priced(params, OptionType::Put, strike, "strike", long)?,
            ]),
            Self::LongStraddle => Ok(vec![
                priced(params, OptionType::Call, strike, "strike", long)?,
                priced(params, OptionType::Put, strike, "strike", long)?,
            ]),
            Self::LongStrangle {
                put_strike,
                call_strike,
            } => {
                ordered(put_strike, call_strike, "call_strike")?;
                Ok(vec![
                    priced(params, OptionType::Put, put_strike, "put_strike", long)?,
                    priced(params, OptionType::Call, call_strike, "call_strike", long)?,
                ])
            }
            Self::BullCallSpread { lower, upper } => {
                ordered(lower, upper, "upper")?;
                Ok(vec![
                    priced(params, OptionType::Call, lower, "lower", long)?,
                    priced(params, OptionType::Call, upper, "upper", short)?,
                ])
            }
            Self::BearPutSpread { lower, upper } => {
                ordered(lower, upper, "upper")?;
                Ok(vec![
                    priced(params, OptionType::Put, upper, "upper", long)?,
                    priced(params, OptionType::Put, lower, "lower", short)?,
                ])
            }
        }
    }
}

/// One unit of an option at `strike`, priced under `params`.
fn priced(
    params: &OptionParameters<f64>,
    option_type: OptionType,
    strike: f64,
    strike_field: &str,
    direction: Direction,
) -> Result<StrategyLeg, PricingError> {
    let leg_params = params
        .with(OptionField::Strike, strike)
        .map_err(|e| {
            let reason = e.reason().replacen("strike", strike_field, 1);
            PricingError::invalid_input(strike_field, reason)
        })?
        .with_option_type(option_type);
    let premium = analytical::price(&leg_params).price;
    StrategyLeg::option(option_type, strike, premium, direction, 1.0)
}

fn ordered(lower: f64, upper: f64, upper_field: &str) -> Result<(), PricingError> {
    if lower < upper {
        Ok(())
    } else {
        Err(PricingError::invalid_input(
            upper_field,
            format!("{} must be above {} (got {})", upper_field, lower, upper),
        ))
    }
}
