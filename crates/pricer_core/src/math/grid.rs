//! Evenly spaced sampling grids.
//!
//! Sweeps, heatmaps and payoff curves all sample a closed interval
//! `[low, high]` at `n` evenly spaced points. The first point is exactly
//! `low` and the last exactly `high`.

use crate::types::PricingError;

/// Minimum number of sample points for any grid.
pub const MIN_POINTS: usize = 2;

/// Validates a sampling range and point count.
///
/// # Errors
/// - `InvalidInput` on field `range` if either bound is non-finite or
///   `low >= high`
/// - `InvalidInput` on field `points` if `n < 2`
pub fn validate_range(low: f64, high: f64, n: usize) -> Result<(), PricingError> {
    if !low.is_finite() || !high.is_finite() {
        return Err(PricingError::invalid_input(
            "range",
            format!("range bounds must be finite (got [{}, {}])", low, high),
        ));
    }
    if low >= high {
        return Err(PricingError::invalid_input(
            "range",
            format!("lower bound must be below upper bound (got [{}, {}])", low, high),
        ));
    }
    if n < MIN_POINTS {
        return Err(PricingError::invalid_input(
            "points",
            format!("at least {} points are required (got {})", MIN_POINTS, n),
        ));
    }
    Ok(())
}

/// Returns `n` evenly spaced points over `[low, high]`.
///
/// # Errors
/// See [`validate_range`].
///
/// # Examples
/// ```
/// use pricer_core::math::grid::linspace;
///
/// let xs = linspace(0.1, 0.5, 5).unwrap();
/// assert_eq!(xs.len(), 5);
/// assert_eq!(xs[0], 0.1);
/// assert_eq!(xs[4], 0.5);
/// ```
pub fn linspace(low: f64, high: f64, n: usize) -> Result<Vec<f64>, PricingError> {
    validate_range(low, high, n)?;

    let last = n - 1;
    let step = (high - low) / last as f64;
    let mut points: Vec<f64> = (0..last).map(|i| low + step * i as f64).collect();
    points.push(high);
    Ok(points)
}
