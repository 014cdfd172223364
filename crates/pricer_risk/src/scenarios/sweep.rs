//! One-dimensional sensitivity sweeps.
//!
//! A sweep varies one Black-Scholes input over an evenly spaced grid while
//! holding the others fixed, and traces either the price or one Greek.

use std::fmt;
use std::str::FromStr;

use pricer_core::math::grid::linspace;
use pricer_core::types::PricingError;
use pricer_models::analytical::{self, BlackScholes, GreeksConvention};
use pricer_models::instruments::{OptionField, OptionParameters};

/// Output traced by a sweep or grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Metric {
    /// Option fair value
    Price,
    /// ∂V/∂S
    Delta,
    /// ∂²V/∂S²
    Gamma,
    /// Time decay per day
    Theta,
    /// Volatility sensitivity per point
    Vega,
    /// Rate sensitivity per point
    Rho,
}

impl Metric {
    /// All metrics.
    pub const ALL: [Metric; 6] = [
        Metric::Price,
        Metric::Delta,
        Metric::Gamma,
        Metric::Theta,
        Metric::Vega,
        Metric::Rho,
    ];

    /// Lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Metric::Price => "price",
            Metric::Delta => "delta",
            Metric::Gamma => "gamma",
            Metric::Theta => "theta",
            Metric::Vega => "vega",
            Metric::Rho => "rho",
        }
    }

    /// Evaluates this metric for one set of parameters.
    ///
    /// Only the requested quantity is computed.
    pub fn evaluate(&self, params: &OptionParameters<f64>, convention: &GreeksConvention) -> f64 {
        let bs = BlackScholes::from_params(params);
        let option_type = params.option_type();
        match self {
            Metric::Price => analytical::price(params).price,
            Metric::Delta => bs.delta(option_type),
            Metric::Gamma => bs.gamma(),
            Metric::Theta => bs.theta(option_type) / convention.theta_days_per_year,
            Metric::Vega => bs.vega() / convention.vega_scale,
            Metric::Rho => bs.rho(option_type) / convention.rho_scale,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        Metric::ALL
            .into_iter()
            .find(|metric| metric.name() == name)
            .ok_or_else(|| {
                PricingError::invalid_input(
                    "metric",
                    format!(
                        "metric must be one of price, delta, gamma, theta, vega, rho (got '{}')",
                        name
                    ),
                )
            })
    }
}

/// Values of one metric across a swept input.
///
/// `inputs` and `values` are parallel and ordered by increasing input.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SweepSeries {
    /// The varied input
    pub field: OptionField,
    /// The traced output
    pub metric: Metric,
    /// Sampled input values
    pub inputs: Vec<f64>,
    /// Metric value at each sampled input
    pub values: Vec<f64>,
}

impl SweepSeries {
    /// Number of samples.
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    /// Returns true if the series holds no samples.
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Iterates over `(input, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.inputs.iter().copied().zip(self.values.iter().copied())
    }
}

/// Sweeps `field` over `n` evenly spaced values in `[low, high]` and traces
/// `metric` with the default Greeks convention.
///
/// # Errors
/// `PricingError::InvalidInput` on
/// - `range` when `low >= high` or a bound is non-finite
/// - `points` when `n < 2`
/// - the swept field when a sample breaks its invariant (e.g. a negative
///   volatility)
///
/// # Examples
/// ```
/// use pricer_models::instruments::{OptionField, OptionParameters, OptionType};
/// use pricer_risk::scenarios::{sweep, Metric};
///
/// let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
/// let series = sweep(&params, OptionField::Spot, 50.0, 150.0, 101, Metric::Delta).unwrap();
/// assert_eq!(series.len(), 101);
/// assert!(series.values[100] > series.values[0]);
/// ```
pub fn sweep(
    params: &OptionParameters<f64>,
    field: OptionField,
    low: f64,
    high: f64,
    n: usize,
    metric: Metric,
) -> Result<SweepSeries, PricingError> {
    sweep_with_convention(params, field, low, high, n, metric, &GreeksConvention::default())
}

/// [`sweep`] with explicit Greeks scaling.
pub fn sweep_with_convention(
    params: &OptionParameters<f64>,
    field: OptionField,
    low: f64,
    high: f64,
    n: usize,
    metric: Metric,
    convention: &GreeksConvention,
) -> Result<SweepSeries, PricingError> {
    let inputs = linspace(low, high, n)?;
    let values = inputs
        .iter()
        .map(|&x| params.with(field, x).map(|p| metric.evaluate(&p, convention)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SweepSeries {
        field,
        metric,
        inputs,
        values,
    })
}
