//! Strategy legs for multi-position payoff analysis.
//!
//! A leg is one position held to expiry: a call, a put or the underlying
//! itself, bought or sold in some quantity at some premium. Leg payoffs are
//! piecewise linear in the terminal price with at most one kink (the strike),
//! which is what lets strategy summaries be computed exactly.

use std::fmt;
use std::str::FromStr;

use pricer_core::types::PricingError;

use super::payoff::OptionType;

/// Position direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// Long position (premium paid)
    Long,
    /// Short position (premium received)
    Short,
}

impl Direction {
    /// Returns true if this is a long position.
    #[inline]
    pub fn is_long(&self) -> bool {
        matches!(self, Direction::Long)
    }

    /// Returns true if this is a short position.
    #[inline]
    pub fn is_short(&self) -> bool {
        matches!(self, Direction::Short)
    }

    /// +1 for long, -1 for short.
    #[inline]
    pub fn sign(&self) -> f64 {
        match self {
            Direction::Long => 1.0,
            Direction::Short => -1.0,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Long => f.write_str("long"),
            Direction::Short => f.write_str("short"),
        }
    }
}

impl FromStr for Direction {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "long" | "buy" => Ok(Direction::Long),
            "short" | "sell" => Ok(Direction::Short),
            other => Err(PricingError::invalid_input(
                "direction",
                format!("direction must be 'long' or 'short' (got '{}')", other),
            )),
        }
    }
}

/// What a leg holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LegInstrument {
    /// European call
    Call,
    /// European put
    Put,
    /// The underlying asset, worth S at expiry
    Underlying,
}

impl LegInstrument {
    /// Option type of an option leg, `None` for the underlying.
    pub fn option_type(&self) -> Option<OptionType> {
        match self {
            LegInstrument::Call => Some(OptionType::Call),
            LegInstrument::Put => Some(OptionType::Put),
            LegInstrument::Underlying => None,
        }
    }
}

impl From<OptionType> for LegInstrument {
    fn from(option_type: OptionType) -> Self {
        match option_type {
            OptionType::Call => LegInstrument::Call,
            OptionType::Put => LegInstrument::Put,
        }
    }
}

/// One position within a strategy.
///
/// Payoff at terminal price `S_T`:
/// `sign · quantity · (value(S_T) - premium)`, where `value` is the option
/// payoff (or `S_T` for the underlying) and `premium` is the price paid per
/// unit. A long leg therefore pays its premium and a short leg receives it.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{Direction, OptionType, StrategyLeg};
///
/// let call = StrategyLeg::option(OptionType::Call, 100.0, 5.0, Direction::Long, 1.0).unwrap();
/// assert_eq!(call.payoff(120.0), 15.0);
/// assert_eq!(call.payoff(80.0), -5.0);
///
/// let short = StrategyLeg::option(OptionType::Call, 100.0, 5.0, Direction::Short, 2.0).unwrap();
/// assert_eq!(short.payoff(80.0), 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct StrategyLeg {
    instrument: LegInstrument,
    strike: Option<f64>,
    premium: f64,
    direction: Direction,
    quantity: f64,
}

impl StrategyLeg {
    /// Creates a validated leg.
    ///
    /// `strike` is required for option legs and ignored for the underlying.
    /// For an underlying leg `premium` is the entry price.
    ///
    /// # Errors
    /// `PricingError::InvalidInput` when the strike is missing or not
    /// positive, the premium is negative, the quantity is not positive, or
    /// any value is non-finite.
    pub fn new(
        instrument: LegInstrument,
        strike: Option<f64>,
        premium: f64,
        direction: Direction,
        quantity: f64,
    ) -> Result<Self, PricingError> {
        let strike = match instrument {
            LegInstrument::Underlying => None,
            LegInstrument::Call | LegInstrument::Put => match strike {
                Some(k) if k.is_finite() && k > 0.0 => Some(k),
                Some(k) => {
                    return Err(PricingError::invalid_input(
                        "strike",
                        format!("strike must be positive and finite (got {})", k),
                    ))
                }
                None => {
                    return Err(PricingError::invalid_input(
                        "strike",
                        "strike is required for option legs",
                    ))
                }
            },
        };

        if !premium.is_finite() || premium < 0.0 {
            return Err(PricingError::invalid_input(
                "premium",
                format!("premium must be non-negative and finite (got {})", premium),
            ));
        }
        if !quantity.is_finite() || quantity <= 0.0 {
            return Err(PricingError::invalid_input(
                "quantity",
                format!("quantity must be positive and finite (got {})", quantity),
            ));
        }

        Ok(Self {
            instrument,
            strike,
            premium,
            direction,
            quantity,
        })
    }

    /// Creates an option leg.
    pub fn option(
        option_type: OptionType,
        strike: f64,
        premium: f64,
        direction: Direction,
        quantity: f64,
    ) -> Result<Self, PricingError> {
        Self::new(option_type.into(), Some(strike), premium, direction, quantity)
    }

    /// Creates a position in the underlying entered at `entry_price`.
    pub fn underlying(
        entry_price: f64,
        direction: Direction,
        quantity: f64,
    ) -> Result<Self, PricingError> {
        Self::new(LegInstrument::Underlying, None, entry_price, direction, quantity)
    }

    /// Returns what the leg holds.
    #[inline]
    pub fn instrument(&self) -> LegInstrument {
        self.instrument
    }

    /// Returns the strike, `None` for the underlying.
    #[inline]
    pub fn strike(&self) -> Option<f64> {
        self.strike
    }

    /// Returns the premium (entry price for the underlying).
    #[inline]
    pub fn premium(&self) -> f64 {
        self.premium
    }

    /// Returns the direction.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the quantity.
    #[inline]
    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    /// Value of one unit at expiry for terminal price `spot`.
    pub fn expiry_value(&self, spot: f64) -> f64 {
        match (self.instrument.option_type(), self.strike) {
            (Some(option_type), Some(strike)) => option_type.intrinsic(spot, strike),
            _ => spot,
        }
    }

    /// Signed profit or loss of the whole leg at terminal price `spot`.
    pub fn payoff(&self, spot: f64) -> f64 {
        self.direction.sign() * self.quantity * (self.expiry_value(spot) - self.premium)
    }

    /// Premium paid (positive) or received (negative) to open the leg.
    pub fn net_premium(&self) -> f64 {
        self.direction.sign() * self.quantity * self.premium
    }

    /// Slope of the payoff for prices above every kink.
    pub fn upside_slope(&self) -> f64 {
        match self.instrument {
            LegInstrument::Call | LegInstrument::Underlying => {
                self.direction.sign() * self.quantity
            }
            LegInstrument::Put => 0.0,
        }
    }

    /// Price at which the payoff changes slope, if any.
    pub fn kink(&self) -> Option<f64> {
        self.strike
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_direction_sign() {
        assert_eq!(Direction::Long.sign(), 1.0);
        assert_eq!(Direction::Short.sign(), -1.0);
        assert!(Direction::Long.is_long());
        assert!(Direction::Short.is_short());
        assert_eq!("sell".parse::<Direction>().unwrap(), Direction::Short);
        assert_eq!("flat".parse::<Direction>().unwrap_err().field(), "direction");
    }

    #[test]
    fn test_long_call_payoff() {
        let leg = StrategyLeg::option(OptionType::Call, 100.0, 5.0, Direction::Long, 1.0).unwrap();
        assert_eq!(leg.payoff(80.0), -5.0);
        assert_eq!(leg.payoff(100.0), -5.0);
        assert_eq!(leg.payoff(105.0), 0.0);
        assert_eq!(leg.payoff(120.0), 15.0);
    }

    #[test]
    fn test_short_put_payoff() {
        let leg = StrategyLeg::option(OptionType::Put, 100.0, 4.0, Direction::Short, 3.0).unwrap();
        assert_eq!(leg.payoff(120.0), 12.0);
        assert_eq!(leg.payoff(90.0), -18.0);
    }

    #[test]
    fn test_underlying_leg() {
        let leg = StrategyLeg::underlying(100.0, Direction::Long, 2.0).unwrap();
        assert_eq!(leg.strike(), None);
        assert_eq!(leg.kink(), None);
        assert_eq!(leg.expiry_value(90.0), 90.0);
        assert_eq!(leg.payoff(110.0), 20.0);
        assert_eq!(leg.upside_slope(), 2.0);
    }

    #[test]
    fn test_net_premium_and_slope() {
        let long = StrategyLeg::option(OptionType::Call, 100.0, 2.5, Direction::Long, 2.0).unwrap();
        let short = StrategyLeg::option(OptionType::Put, 90.0, 1.5, Direction::Short, 1.0).unwrap();
        assert_relative_eq!(long.net_premium(), 5.0);
        assert_relative_eq!(short.net_premium(), -1.5);
        assert_eq!(long.upside_slope(), 2.0);
        assert_eq!(short.upside_slope(), 0.0);
    }

    #[test]
    fn test_strike_ignored_for_underlying() {
        let leg = StrategyLeg::new(
            LegInstrument::Underlying,
            Some(-1.0),
            50.0,
            Direction::Short,
            1.0,
        )
        .unwrap();
        assert_eq!(leg.strike(), None);
    }

    // ==========================================================
    // Validation
    // ==========================================================

    #[test]
    fn test_missing_strike_rejected() {
        let err = StrategyLeg::new(LegInstrument::Call, None, 1.0, Direction::Long, 1.0)
            .unwrap_err();
        assert_eq!(err.field(), "strike");
    }

    #[test]
    fn test_invalid_strike_rejected() {
        for strike in [0.0, -10.0, f64::NAN] {
            let err = StrategyLeg::option(OptionType::Put, strike, 1.0, Direction::Long, 1.0)
                .unwrap_err();
            assert_eq!(err.field(), "strike");
        }
    }

    #[test]
    fn test_negative_premium_rejected() {
        let err = StrategyLeg::option(OptionType::Call, 100.0, -1.0, Direction::Long, 1.0)
            .unwrap_err();
        assert_eq!(err.field(), "premium");
    }

    #[test]
    fn test_non_positive_quantity_rejected() {
        for quantity in [0.0, -1.0, f64::INFINITY] {
            let err =
                StrategyLeg::option(OptionType::Call, 100.0, 1.0, Direction::Long, quantity)
                    .unwrap_err();
            assert_eq!(err.field(), "quantity");
        }
    }
}
