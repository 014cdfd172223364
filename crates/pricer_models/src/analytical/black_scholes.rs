//! Black-Scholes pricing model for European options.
//!
//! This module provides the Black-Scholes model for pricing European
//! call and put options with analytical Greeks calculations.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! ## Degenerate Inputs
//!
//! When σ√T = 0 (zero expiry or zero volatility) d₁ and d₂ are undefined.
//! The model then prices at intrinsic value, C = max(S - K, 0) and
//! P = max(K - S, 0), and the Greeks take fixed boundary values: Delta is
//! the intrinsic step (½ exactly at the strike), while Gamma, Vega, Theta
//! and Rho are zero. Inputs where S·σ·√T underflows are treated the same
//! way so Gamma never overflows.

use num_traits::Float;

use super::distributions::{norm_cdf, norm_pdf};
use super::greeks::{Greeks, GreeksConvention};
use crate::instruments::{OptionParameters, OptionType};

/// Price decomposition of a single option.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PricingResult<T: Float> {
    /// Fair value
    pub price: T,
    /// Payoff if exercised at the current spot
    pub intrinsic_value: T,
    /// `price - intrinsic_value`; may be negative for deep in-the-money
    /// European puts
    pub time_value: T,
}

/// Black-Scholes model for European option pricing.
///
/// Provides closed-form pricing and Greeks calculations for European
/// options under lognormal dynamics. Built from already-validated
/// [`OptionParameters`], so every method is total.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `Dual64`)
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
/// use pricer_models::instruments::{OptionParameters, OptionType};
///
/// let params = OptionParameters::new(100.0_f64, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
/// let bs = BlackScholes::from_params(&params);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = bs.call_price() - bs.put_price() - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BlackScholes<T: Float> {
    /// Spot price (S)
    spot: T,
    /// Strike price (K)
    strike: T,
    /// Time to expiry in years (T)
    expiry: T,
    /// Risk-free interest rate (r)
    rate: T,
    /// Volatility (σ)
    volatility: T,
}

impl<T: Float> BlackScholes<T> {
    /// Creates the model for the given option inputs.
    pub fn from_params(params: &OptionParameters<T>) -> Self {
        Self {
            spot: params.spot(),
            strike: params.strike(),
            expiry: params.expiry(),
            rate: params.rate(),
            volatility: params.volatility(),
        }
    }

    /// Discount factor e^(-rT).
    #[inline]
    pub fn discount_factor(&self) -> T {
        (-self.rate * self.expiry).exp()
    }

    /// Total standard deviation σ√T.
    #[inline]
    pub fn vol_sqrt_t(&self) -> T {
        self.volatility * self.expiry.sqrt()
    }

    /// Whether d₁ and d₂ are undefined: σ√T is zero, or S·σ·√T is below
    /// the smallest normal float.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.spot * self.vol_sqrt_t() >= T::min_positive_value())
    }

    /// Computes the d1 term of the Black-Scholes formula.
    ///
    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
    ///
    /// Returns `None` when σ√T = 0.
    pub fn d1(&self) -> Option<T> {
        if self.is_degenerate() {
            return None;
        }
        let half = T::from(0.5).unwrap();
        let log_moneyness = (self.spot / self.strike).ln();
        let drift = (self.rate + half * self.volatility * self.volatility) * self.expiry;

        Some((log_moneyness + drift) / self.vol_sqrt_t())
    }

    /// Computes the d2 term, d₂ = d₁ - σ√T. Returns `None` when σ√T = 0.
    pub fn d2(&self) -> Option<T> {
        self.d1().map(|d1| d1 - self.vol_sqrt_t())
    }

    /// Call delta at the degenerate boundary: 1 in the money, 0 out of
    /// the money, ½ at the strike.
    fn intrinsic_delta(&self) -> T {
        if self.spot > self.strike {
            T::one()
        } else if self.spot < self.strike {
            T::zero()
        } else {
            T::from(0.5).unwrap()
        }
    }

    /// European call price. Intrinsic value when degenerate.
    pub fn call_price(&self) -> T {
        let discounted_strike = self.strike * self.discount_factor();
        match (self.d1(), self.d2()) {
            (Some(d1), Some(d2)) => {
                (self.spot * norm_cdf(d1) - discounted_strike * norm_cdf(d2)).max(T::zero())
            }
            _ => OptionType::Call.intrinsic(self.spot, self.strike),
        }
    }

    /// European put price. Intrinsic value when degenerate.
    pub fn put_price(&self) -> T {
        let discounted_strike = self.strike * self.discount_factor();
        match (self.d1(), self.d2()) {
            (Some(d1), Some(d2)) => {
                (discounted_strike * norm_cdf(-d2) - self.spot * norm_cdf(-d1)).max(T::zero())
            }
            _ => OptionType::Put.intrinsic(self.spot, self.strike),
        }
    }

    /// Price of the given option type.
    #[inline]
    pub fn price(&self, option_type: OptionType) -> T {
        match option_type {
            OptionType::Call => self.call_price(),
            OptionType::Put => self.put_price(),
        }
    }

    /// Delta ∂V/∂S: N(d₁) for calls, N(d₁) - 1 for puts.
    pub fn delta(&self, option_type: OptionType) -> T {
        let call_delta = match self.d1() {
            Some(d1) => norm_cdf(d1),
            None => self.intrinsic_delta(),
        };
        match option_type {
            OptionType::Call => call_delta,
            OptionType::Put => call_delta - T::one(),
        }
    }

    /// Gamma ∂²V/∂S² = φ(d₁) / (S·σ·√T), identical for calls and puts.
    pub fn gamma(&self) -> T {
        match self.d1() {
            Some(d1) => norm_pdf(d1) / (self.spot * self.vol_sqrt_t()),
            None => T::zero(),
        }
    }

    /// Vega ∂V/∂σ = S·φ(d₁)·√T per unit volatility.
    pub fn vega(&self) -> T {
        match self.d1() {
            Some(d1) => self.spot * norm_pdf(d1) * self.expiry.sqrt(),
            None => T::zero(),
        }
    }

    /// Theta -∂V/∂T per year. Zero when degenerate.
    pub fn theta(&self, option_type: OptionType) -> T {
        let (d1, d2) = match (self.d1(), self.d2()) {
            (Some(d1), Some(d2)) => (d1, d2),
            _ => return T::zero(),
        };
        let two = T::from(2.0).unwrap();
        let carry = self.rate * self.strike * self.discount_factor();
        let decay = -self.spot * norm_pdf(d1) * self.volatility / (two * self.expiry.sqrt());

        match option_type {
            OptionType::Call => decay - carry * norm_cdf(d2),
            OptionType::Put => decay + carry * norm_cdf(-d2),
        }
    }

    /// Rho ∂V/∂r per unit rate. Zero when degenerate.
    pub fn rho(&self, option_type: OptionType) -> T {
        let d2 = match self.d2() {
            Some(d2) => d2,
            None => return T::zero(),
        };
        let exposure = self.strike * self.expiry * self.discount_factor();

        match option_type {
            OptionType::Call => exposure * norm_cdf(d2),
            OptionType::Put => -exposure * norm_cdf(-d2),
        }
    }

    /// All five Greeks, scaled by `convention`.
    pub fn greeks(&self, option_type: OptionType, convention: &GreeksConvention) -> Greeks<T> {
        let days = T::from(convention.theta_days_per_year).unwrap();
        let vega_scale = T::from(convention.vega_scale).unwrap();
        let rho_scale = T::from(convention.rho_scale).unwrap();

        Greeks {
            delta: self.delta(option_type),
            gamma: self.gamma(),
            theta: self.theta(option_type) / days,
            vega: self.vega() / vega_scale,
            rho: self.rho(option_type) / rho_scale,
        }
    }
}

/// Prices a European option.
///
/// # Examples
/// ```
/// use pricer_models::analytical::price;
/// use pricer_models::instruments::{OptionParameters, OptionType};
///
/// let params = OptionParameters::new(100.0_f64, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
/// let result = price(&params);
/// assert!((result.price - 10.4506).abs() < 1e-4);
/// assert_eq!(result.intrinsic_value, 0.0);
/// ```
pub fn price<T: Float>(params: &OptionParameters<T>) -> PricingResult<T> {
    let price = BlackScholes::from_params(params).price(params.option_type());
    let intrinsic_value = params.intrinsic_value();

    PricingResult {
        price,
        intrinsic_value,
        time_value: price - intrinsic_value,
    }
}

/// Computes the Greeks of a European option.
///
/// # Examples
/// ```
/// use pricer_models::analytical::{greeks, GreeksConvention};
/// use pricer_models::instruments::{OptionParameters, OptionType};
///
/// let params = OptionParameters::new(100.0_f64, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
/// let g = greeks(&params, &GreeksConvention::default());
/// assert!((g.delta - 0.6368).abs() < 1e-4);
/// assert!((g.theta + 0.0176).abs() < 1e-4);
/// ```
pub fn greeks<T: Float>(params: &OptionParameters<T>, convention: &GreeksConvention) -> Greeks<T> {
    BlackScholes::from_params(params).greeks(params.option_type(), convention)
}
