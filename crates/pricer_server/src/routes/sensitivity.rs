//! Sensitivity endpoints
//!
//! - `POST /api/v1/sensitivity/sweep`: one input varied, one metric traced
//! - `POST /api/v1/sensitivity/grid`: two inputs varied, defaulting to the
//!   spot/volatility heatmap
//! - `POST /api/v1/sensitivity/shocks`: re-pricing under relative spot moves

use axum::{
    extract::{Json, State},
    routing::post,
    Router,
};
use pricer_core::types::PricingError;
use pricer_models::analytical;
use pricer_models::instruments::{OptionField, OptionParameters};
use pricer_risk::scenarios::{
    price_grid_with_convention, spot_shocks, sweep_with_convention, GridAxis, Metric,
    SensitivityGrid, ShockResult, ShockScenario, SweepSeries, DEFAULT_GRID_POINTS,
};
use serde::{Deserialize, Serialize};

use super::{AppState, OptionInputs};
use crate::error::ApiError;

/// Relative half-widths of the default heatmap axes
const DEFAULT_VOL_WIDTH: f64 = 0.5;
const DEFAULT_SPOT_WIDTH: f64 = 0.2;

/// Body of a sweep request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepRequest {
    /// Base option inputs
    pub option: OptionInputs,
    /// Input to vary
    pub field: OptionField,
    /// Lower bound of the swept input
    pub low: f64,
    /// Upper bound of the swept input
    pub high: f64,
    /// Number of samples
    pub points: usize,
    /// Output to trace
    pub metric: Metric,
}

/// Body of a grid request
///
/// Omitting both axes yields volatility ±50% on x and spot ±20% on y at
/// ten points each.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridRequest {
    /// Base option inputs
    pub option: OptionInputs,
    /// Column axis
    #[serde(default)]
    pub x: Option<GridAxis>,
    /// Row axis
    #[serde(default)]
    pub y: Option<GridAxis>,
    /// Output to trace, price by default
    #[serde(default = "default_metric")]
    pub metric: Metric,
}

fn default_metric() -> Metric {
    Metric::Price
}

/// Body of a spot shock request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShocksRequest {
    /// Base option inputs
    pub option: OptionInputs,
    /// Relative spot moves (`-0.1` is a 10% fall); the standard ±5%/±10%
    /// set when omitted
    #[serde(default)]
    pub shocks: Option<Vec<f64>>,
}

/// Shock results with the unshocked price they are measured against
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShocksResponse {
    /// Price at the current spot
    pub base_price: f64,
    /// One entry per requested shock, in request order
    pub shocks: Vec<ShockResult>,
}

/// Build the sensitivity routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/sensitivity/sweep", post(sweep_handler))
        .route("/api/v1/sensitivity/grid", post(grid_handler))
        .route("/api/v1/sensitivity/shocks", post(shocks_handler))
}

/// POST /api/v1/sensitivity/sweep
async fn sweep_handler(
    State(state): State<AppState>,
    Json(request): Json<SweepRequest>,
) -> Result<Json<SweepSeries>, ApiError> {
    let params = request.option.to_params()?;
    state.check_points(request.points)?;
    tracing::debug!(
        field = %request.field,
        metric = %request.metric,
        low = request.low,
        high = request.high,
        points = request.points,
        "Sweeping"
    );

    let series = sweep_with_convention(
        &params,
        request.field,
        request.low,
        request.high,
        request.points,
        request.metric,
        state.convention(),
    )?;
    Ok(Json(series))
}

/// POST /api/v1/sensitivity/grid
async fn grid_handler(
    State(state): State<AppState>,
    Json(request): Json<GridRequest>,
) -> Result<Json<SensitivityGrid>, ApiError> {
    let params = request.option.to_params()?;
    let (x_axis, y_axis) = grid_axes(&params, request.x, request.y)?;
    state.check_points(x_axis.points.saturating_mul(y_axis.points))?;
    tracing::debug!(
        x_field = %x_axis.field,
        y_field = %y_axis.field,
        metric = %request.metric,
        "Building sensitivity grid"
    );

    let grid =
        price_grid_with_convention(&params, &x_axis, &y_axis, request.metric, state.convention())?;
    Ok(Json(grid))
}

fn grid_axes(
    params: &OptionParameters<f64>,
    x: Option<GridAxis>,
    y: Option<GridAxis>,
) -> Result<(GridAxis, GridAxis), PricingError> {
    match (x, y) {
        (Some(x), Some(y)) => Ok((x, y)),
        (None, None) => Ok((
            GridAxis::relative(
                OptionField::Volatility,
                params.volatility(),
                DEFAULT_VOL_WIDTH,
                DEFAULT_GRID_POINTS,
            ),
            GridAxis::relative(
                OptionField::Spot,
                params.spot(),
                DEFAULT_SPOT_WIDTH,
                DEFAULT_GRID_POINTS,
            ),
        )),
        (Some(_), None) => Err(PricingError::invalid_input(
            "y",
            "y axis is required when x is given",
        )),
        (None, Some(_)) => Err(PricingError::invalid_input(
            "x",
            "x axis is required when y is given",
        )),
    }
}

/// POST /api/v1/sensitivity/shocks
async fn shocks_handler(
    Json(request): Json<ShocksRequest>,
) -> Result<Json<ShocksResponse>, ApiError> {
    let params = request.option.to_params()?;
    let scenarios = match request.shocks {
        Some(shifts) => shifts.into_iter().map(ShockScenario::from_shift).collect(),
        None => ShockScenario::standard(),
    };
    tracing::debug!(count = scenarios.len(), "Applying spot shocks");

    let shocks = spot_shocks(&params, &scenarios)?;
    Ok(Json(ShocksResponse {
        base_price: analytical::price(&params).price,
        shocks,
    }))
}
