//! Greeks result type and reporting conventions.

use num_traits::Float;
use pricer_core::types::PricingError;

/// Calendar-day count used by default for Theta.
pub const CALENDAR_DAYS_PER_YEAR: f64 = 365.0;

/// Trading-day count, an alternative Theta convention.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Option sensitivities in reporting units.
///
/// - `delta`: ∂V/∂S
/// - `gamma`: ∂²V/∂S²
/// - `theta`: -∂V/∂T per day
/// - `vega`: ∂V/∂σ per volatility point
/// - `rho`: ∂V/∂r per rate point
///
/// The day count and point scaling come from [`GreeksConvention`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks<T: Float> {
    /// First derivative with respect to spot
    pub delta: T,
    /// Second derivative with respect to spot
    pub gamma: T,
    /// Time decay per day
    pub theta: T,
    /// Volatility sensitivity per point
    pub vega: T,
    /// Rate sensitivity per point
    pub rho: T,
}

/// Scaling applied to raw Greeks before reporting.
///
/// Theta is divided by `theta_days_per_year`, Vega by `vega_scale` and Rho by
/// `rho_scale`. The default (365, 100, 100) quotes Theta per calendar day and
/// Vega/Rho per one percentage point.
///
/// # Examples
/// ```
/// use pricer_models::analytical::GreeksConvention;
///
/// let convention = GreeksConvention::default();
/// assert_eq!(convention.theta_days_per_year, 365.0);
///
/// let trading = GreeksConvention::trading_days();
/// assert_eq!(trading.theta_days_per_year, 252.0);
///
/// assert!(GreeksConvention::new(365.0, 0.0, 100.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GreeksConvention {
    /// Days per year for Theta
    pub theta_days_per_year: f64,
    /// Divisor for Vega
    pub vega_scale: f64,
    /// Divisor for Rho
    pub rho_scale: f64,
}

impl Default for GreeksConvention {
    fn default() -> Self {
        Self {
            theta_days_per_year: CALENDAR_DAYS_PER_YEAR,
            vega_scale: 100.0,
            rho_scale: 100.0,
        }
    }
}

impl GreeksConvention {
    /// Creates a validated convention.
    ///
    /// # Errors
    /// `PricingError::InvalidInput` if any value is not finite and positive.
    pub fn new(
        theta_days_per_year: f64,
        vega_scale: f64,
        rho_scale: f64,
    ) -> Result<Self, PricingError> {
        let convention = Self {
            theta_days_per_year,
            vega_scale,
            rho_scale,
        };
        convention.validate()?;
        Ok(convention)
    }

    /// Default scaling with Theta quoted per trading day.
    pub fn trading_days() -> Self {
        Self {
            theta_days_per_year: TRADING_DAYS_PER_YEAR,
            ..Self::default()
        }
    }

    /// Annualised, unscaled Greeks (Theta per year, Vega and Rho per unit).
    pub fn raw() -> Self {
        Self {
            theta_days_per_year: 1.0,
            vega_scale: 1.0,
            rho_scale: 1.0,
        }
    }

    /// Checks that every divisor is finite and positive.
    pub fn validate(&self) -> Result<(), PricingError> {
        for (field, value) in [
            ("theta_days_per_year", self.theta_days_per_year),
            ("vega_scale", self.vega_scale),
            ("rho_scale", self.rho_scale),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(PricingError::invalid_input(
                    field,
                    format!("{} must be positive and finite (got {})", field, value),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_convention() {
        let convention = GreeksConvention::default();
        assert_eq!(convention.theta_days_per_year, 365.0);
        assert_eq!(convention.vega_scale, 100.0);
        assert_eq!(convention.rho_scale, 100.0);
        assert!(convention.validate().is_ok());
    }

    #[test]
    fn test_raw_convention_is_identity() {
        let raw = GreeksConvention::raw();
        assert_eq!(raw.theta_days_per_year, 1.0);
        assert_eq!(raw.vega_scale, 1.0);
        assert_eq!(raw.rho_scale, 1.0);
    }

    #[test]
    fn test_invalid_convention() {
        let err = GreeksConvention::new(0.0, 100.0, 100.0).unwrap_err();
        assert_eq!(err.field(), "theta_days_per_year");

        let err = GreeksConvention::new(365.0, f64::NAN, 100.0).unwrap_err();
        assert_eq!(err.field(), "vega_scale");

        let err = GreeksConvention::new(365.0, 100.0, -1.0).unwrap_err();
        assert_eq!(err.field(), "rho_scale");
    }
}
