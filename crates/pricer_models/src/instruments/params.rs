//! Black-Scholes option parameters.
//!
//! [`OptionParameters`] is the validated boundary between raw user input and
//! the pricing engine. Its fields are private and every constructor checks
//! them, so the pricing functions never see a negative volatility or a zero
//! spot.

use std::fmt;
use std::str::FromStr;

use num_traits::Float;
use pricer_core::types::PricingError;

use super::payoff::OptionType;

/// Calendar days per year used for the days-to-expiry snapshot.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// One of the five scalar Black-Scholes inputs.
///
/// Used to address a single input when sweeping or shocking it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionField {
    /// Underlying price S
    Spot,
    /// Strike price K
    Strike,
    /// Time to expiration T in years
    Expiry,
    /// Risk-free rate r
    Rate,
    /// Volatility σ
    Volatility,
}

impl OptionField {
    /// All fields, in input order.
    pub const ALL: [OptionField; 5] = [
        OptionField::Spot,
        OptionField::Strike,
        OptionField::Expiry,
        OptionField::Rate,
        OptionField::Volatility,
    ];

    /// Field name as reported in validation errors.
    pub fn name(&self) -> &'static str {
        match self {
            OptionField::Spot => "spot",
            OptionField::Strike => "strike",
            OptionField::Expiry => "expiry",
            OptionField::Rate => "rate",
            OptionField::Volatility => "volatility",
        }
    }
}

impl fmt::Display for OptionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OptionField {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "S" => return Ok(OptionField::Spot),
            "K" => return Ok(OptionField::Strike),
            "T" => return Ok(OptionField::Expiry),
            "r" => return Ok(OptionField::Rate),
            "σ" => return Ok(OptionField::Volatility),
            _ => {}
        }
        match s.trim().to_lowercase().as_str() {
            "spot" => Ok(OptionField::Spot),
            "strike" => Ok(OptionField::Strike),
            "expiry" => Ok(OptionField::Expiry),
            "rate" => Ok(OptionField::Rate),
            "volatility" | "sigma" | "vol" => Ok(OptionField::Volatility),
            other => Err(PricingError::invalid_input(
                "field",
                format!(
                    "field must be one of spot, strike, expiry, rate, volatility (got '{}')",
                    other
                ),
            )),
        }
    }
}

/// Validated inputs for a single Black-Scholes computation.
///
/// # Invariants
/// - spot S > 0, strike K > 0
/// - expiry T ≥ 0 (years), volatility σ ≥ 0
/// - rate r may be negative
/// - every value is finite
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `Dual64`)
///
/// # Examples
/// ```
/// use pricer_models::instruments::{OptionParameters, OptionType};
///
/// let params = OptionParameters::new(100.0_f64, 105.0, 0.25, 0.05, 0.2, OptionType::Call).unwrap();
/// assert_eq!(params.strike(), 105.0);
///
/// let err = OptionParameters::new(100.0_f64, 105.0, 0.25, 0.05, -0.1, OptionType::Call).unwrap_err();
/// assert_eq!(err.field(), "volatility");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionParameters<T: Float> {
    spot: T,
    strike: T,
    expiry: T,
    rate: T,
    volatility: T,
    option_type: OptionType,
}

fn as_f64<T: Float>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

fn require_finite<T: Float>(field: OptionField, value: T) -> Result<(), PricingError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PricingError::invalid_input(
            field.name(),
            format!("{} must be finite (got {})", field, as_f64(value)),
        ))
    }
}

fn validate<T: Float>(field: OptionField, value: T) -> Result<(), PricingError> {
    require_finite(field, value)?;

    let zero = T::zero();
    match field {
        OptionField::Spot | OptionField::Strike if value <= zero => {
            Err(PricingError::invalid_input(
                field.name(),
                format!("{} must be positive (got {})", field, as_f64(value)),
            ))
        }
        OptionField::Expiry | OptionField::Volatility if value < zero => {
            Err(PricingError::invalid_input(
                field.name(),
                format!("{} must be non-negative (got {})", field, as_f64(value)),
            ))
        }
        _ => Ok(()),
    }
}

impl<T: Float> OptionParameters<T> {
    /// Creates validated option parameters.
    ///
    /// # Errors
    /// `PricingError::InvalidInput` naming the first offending field when
    /// S ≤ 0, K ≤ 0, T < 0, σ < 0, or any value is NaN or infinite.
    pub fn new(
        spot: T,
        strike: T,
        expiry: T,
        rate: T,
        volatility: T,
        option_type: OptionType,
    ) -> Result<Self, PricingError> {
        validate(OptionField::Spot, spot)?;
        validate(OptionField::Strike, strike)?;
        validate(OptionField::Expiry, expiry)?;
        validate(OptionField::Rate, rate)?;
        validate(OptionField::Volatility, volatility)?;

        Ok(Self {
            spot,
            strike,
            expiry,
            rate,
            volatility,
            option_type,
        })
    }

    /// Returns the underlying price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Returns the time to expiration in years.
    #[inline]
    pub fn expiry(&self) -> T {
        self.expiry
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Returns the option type.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Returns the value of a single input.
    pub fn get(&self, field: OptionField) -> T {
        match field {
            OptionField::Spot => self.spot,
            OptionField::Strike => self.strike,
            OptionField::Expiry => self.expiry,
            OptionField::Rate => self.rate,
            OptionField::Volatility => self.volatility,
        }
    }

    /// Returns a copy with one input replaced, re-validating that input.
    ///
    /// # Errors
    /// `PricingError::InvalidInput` on `field` if the new value breaks its
    /// invariant.
    pub fn with(&self, field: OptionField, value: T) -> Result<Self, PricingError> {
        validate(field, value)?;

        let mut next = *self;
        match field {
            OptionField::Spot => next.spot = value,
            OptionField::Strike => next.strike = value,
            OptionField::Expiry => next.expiry = value,
            OptionField::Rate => next.rate = value,
            OptionField::Volatility => next.volatility = value,
        }
        Ok(next)
    }

    /// Returns a copy with a different option type.
    pub fn with_option_type(&self, option_type: OptionType) -> Self {
        Self {
            option_type,
            ..*self
        }
    }

    /// Payoff if exercised at the current spot.
    #[inline]
    pub fn intrinsic_value(&self) -> T {
        self.option_type.intrinsic(self.spot, self.strike)
    }

    /// Moneyness in percent, (S / K - 1) · 100.
    pub fn moneyness_pct(&self) -> T {
        (self.spot / self.strike - T::one()) * T::from(100.0).unwrap()
    }

    /// Time to expiration in calendar days.
    pub fn days_to_expiry(&self) -> T {
        self.expiry * T::from(DAYS_PER_YEAR).unwrap()
    }

    /// Whether exercising now would pay out (S > K for a call, S < K for a put).
    pub fn is_in_the_money(&self) -> bool {
        match self.option_type {
            OptionType::Call => self.spot > self.strike,
            OptionType::Put => self.spot < self.strike,
        }
    }
}
