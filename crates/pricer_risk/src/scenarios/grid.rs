//! Two-dimensional sensitivity grids (heatmaps).

use pricer_core::math::grid::linspace;
use pricer_core::types::PricingError;
use pricer_models::analytical::GreeksConvention;
use pricer_models::instruments::{OptionField, OptionParameters};

use super::sweep::Metric;

/// Heatmap points per axis for [`SensitivityGrid::spot_vol_default`].
pub const DEFAULT_GRID_POINTS: usize = 10;

/// One axis of a grid: an input swept over `[low, high]` at `points` samples.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GridAxis {
    /// The varied input
    pub field: OptionField,
    /// Lower bound
    pub low: f64,
    /// Upper bound
    pub high: f64,
    /// Number of samples
    pub points: usize,
}

impl GridAxis {
    /// Creates an axis.
    pub fn new(field: OptionField, low: f64, high: f64, points: usize) -> Self {
        Self {
            field,
            low,
            high,
            points,
        }
    }

    /// Axis spanning `value · (1 ± width)`.
    pub fn relative(field: OptionField, value: f64, width: f64, points: usize) -> Self {
        Self::new(field, value * (1.0 - width), value * (1.0 + width), points)
    }
}

/// Metric values over a two-input grid.
///
/// `values[j][i]` is the metric at `y[j]`, `x[i]`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SensitivityGrid {
    /// Column input
    pub x_field: OptionField,
    /// Row input
    pub y_field: OptionField,
    /// Traced output
    pub metric: Metric,
    /// Column values
    pub x: Vec<f64>,
    /// Row values
    pub y: Vec<f64>,
    /// Row-major metric values
    pub values: Vec<Vec<f64>>,
}

impl SensitivityGrid {
    /// Price heatmap over spot ±20% (rows) and volatility ±50% (columns).
    ///
    /// # Errors
    /// `InvalidInput` on `x.range` when the volatility is zero (the
    /// volatility axis would be empty).
    ///
    /// # Examples
    /// ```
    /// use pricer_models::instruments::{OptionParameters, OptionType};
    /// use pricer_risk::scenarios::SensitivityGrid;
    ///
    /// let params = OptionParameters::new(100.0, 100.0, 0.25, 0.05, 0.2, OptionType::Call).unwrap();
    /// let grid = SensitivityGrid::spot_vol_default(&params).unwrap();
    /// assert_eq!(grid.y[0], 80.0);
    /// assert!((grid.x[9] - 0.3).abs() < 1e-12);
    /// ```
    pub fn spot_vol_default(params: &OptionParameters<f64>) -> Result<Self, PricingError> {
        let x_axis = GridAxis::relative(
            OptionField::Volatility,
            params.volatility(),
            0.5,
            DEFAULT_GRID_POINTS,
        );
        let y_axis = GridAxis::relative(OptionField::Spot, params.spot(), 0.2, DEFAULT_GRID_POINTS);
        price_grid(params, &x_axis, &y_axis, Metric::Price)
    }

    /// Value at row `j`, column `i`.
    pub fn get(&self, j: usize, i: usize) -> Option<f64> {
        self.values.get(j).and_then(|row| row.get(i)).copied()
    }
}

/// Evaluates `metric` over the product of two axes with the default Greeks
/// convention.
///
/// # Errors
/// `InvalidInput` on `fields` when both axes vary the same input. Axis
/// failures use the sweep field names prefixed with the axis, e.g.
/// `x.range` or `y.volatility`.
pub fn price_grid(
    params: &OptionParameters<f64>,
    x_axis: &GridAxis,
    y_axis: &GridAxis,
    metric: Metric,
) -> Result<SensitivityGrid, PricingError> {
    price_grid_with_convention(params, x_axis, y_axis, metric, &GreeksConvention::default())
}

/// [`price_grid`] with explicit Greeks scaling.
pub fn price_grid_with_convention(
    params: &OptionParameters<f64>,
    x_axis: &GridAxis,
    y_axis: &GridAxis,
    metric: Metric,
    convention: &GreeksConvention,
) -> Result<SensitivityGrid, PricingError> {
    if x_axis.field == y_axis.field {
        return Err(PricingError::invalid_input(
            "fields",
            format!("grid axes must vary different inputs (both are {})", x_axis.field),
        ));
    }

    let x = linspace(x_axis.low, x_axis.high, x_axis.points).map_err(|e| e.within("x"))?;
    let y = linspace(y_axis.low, y_axis.high, y_axis.points).map_err(|e| e.within("y"))?;

    let mut values = Vec::with_capacity(y.len());
    for &y_value in &y {
        let row_params = params
            .with(y_axis.field, y_value)
            .map_err(|e| e.within("y"))?;
        let row = x
            .iter()
            .map(|&x_value| {
                row_params
                    .with(x_axis.field, x_value)
                    .map(|p| metric.evaluate(&p, convention))
                    .map_err(|e| e.within("x"))
            })
            .collect::<Result<Vec<_>, _>>()?;
        values.push(row);
    }

    Ok(SensitivityGrid {
        x_field: x_axis.field,
        y_field: y_axis.field,
        metric,
        x,
        y,
        values,
    })
}
