//! Multi-leg strategy endpoints

use axum::{
    extract::{Json, State},
    routing::post,
    Router,
};
use pricer_core::types::PricingError;
use pricer_models::instruments::{Direction, LegInstrument, StrategyLeg};
use pricer_risk::strategy::{
    strategy_payoff, StrategyPayoffCurve, StrategyPreset, StrategySummary,
};
use serde::{Deserialize, Serialize};

use super::{AppState, OptionInputs};
use crate::error::ApiError;

/// Default preset price range as fractions of the spot
const PRESET_RANGE_LOW: f64 = 0.7;
const PRESET_RANGE_HIGH: f64 = 1.3;
const PRESET_POINTS: usize = 101;

/// One leg as sent by a client
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegRequest {
    /// `call`, `put` or `underlying`
    pub instrument: LegInstrument,
    /// Strike, required for options
    #[serde(default)]
    pub strike: Option<f64>,
    /// Option premium per unit, or entry price for the underlying
    pub premium: f64,
    /// `long` or `short`
    pub direction: Direction,
    /// Number of units, one by default
    #[serde(default = "default_quantity")]
    pub quantity: f64,
}

fn default_quantity() -> f64 {
    1.0
}

impl LegRequest {
    fn to_leg(&self) -> Result<StrategyLeg, PricingError> {
        StrategyLeg::new(
            self.instrument,
            self.strike,
            self.premium,
            self.direction,
            self.quantity,
        )
    }
}

/// Body of a payoff request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoffRequest {
    /// Strategy legs
    pub legs: Vec<LegRequest>,
    /// Lowest terminal price
    pub low: f64,
    /// Highest terminal price
    pub high: f64,
    /// Number of samples
    pub points: usize,
}

/// Sampled payoff with its exact summary
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoffResponse {
    /// Payoff at each sampled terminal price
    pub curve: StrategyPayoffCurve,
    /// Net premium, extremes and breakevens
    pub summary: StrategySummary,
}

/// Body of a preset request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetRequest {
    /// Market inputs; the option type is ignored
    pub option: OptionInputs,
    /// Strategy to build
    pub preset: StrategyPreset,
    /// Lowest terminal price, 70% of spot by default
    #[serde(default)]
    pub low: Option<f64>,
    /// Highest terminal price, 130% of spot by default
    #[serde(default)]
    pub high: Option<f64>,
    /// Number of samples, 101 by default
    #[serde(default)]
    pub points: Option<usize>,
}

/// A preset strategy priced at market
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetResponse {
    /// Strategy name
    pub name: &'static str,
    /// Market view the strategy expresses
    pub description: &'static str,
    /// Legs with Black-Scholes premiums
    pub legs: Vec<StrategyLeg>,
    /// Payoff at each sampled terminal price
    pub curve: StrategyPayoffCurve,
    /// Net premium, extremes and breakevens
    pub summary: StrategySummary,
}

/// Build the strategy routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/strategy/payoff", post(payoff_handler))
        .route("/api/v1/strategy/preset", post(preset_handler))
}

/// POST /api/v1/strategy/payoff
async fn payoff_handler(
    State(state): State<AppState>,
    Json(request): Json<PayoffRequest>,
) -> Result<Json<PayoffResponse>, ApiError> {
    let legs = request
        .legs
        .iter()
        .enumerate()
        .map(|(i, leg)| leg.to_leg().map_err(|e| e.within(&format!("legs[{}]", i))))
        .collect::<Result<Vec<_>, _>>()?;
    state.check_points(request.points)?;
    tracing::debug!(legs = legs.len(), points = request.points, "Computing strategy payoff");

    let curve = strategy_payoff(&legs, request.low, request.high, request.points)?;
    let summary = StrategySummary::from_legs(&legs)?;
    Ok(Json(PayoffResponse { curve, summary }))
}

/// POST /api/v1/strategy/preset
async fn preset_handler(
    State(state): State<AppState>,
    Json(request): Json<PresetRequest>,
) -> Result<Json<PresetResponse>, ApiError> {
    let params = request.option.to_params()?;
    let low = request.low.unwrap_or(params.spot() * PRESET_RANGE_LOW);
    let high = request.high.unwrap_or(params.spot() * PRESET_RANGE_HIGH);
    let points = request.points.unwrap_or(PRESET_POINTS);
    state.check_points(points)?;
    tracing::debug!(preset = request.preset.name(), low, high, points, "Building preset");

    let legs = request.preset.build(&params)?;
    let curve = strategy_payoff(&legs, low, high, points)?;
    let summary = StrategySummary::from_legs(&legs)?;

    Ok(Json(PresetResponse {
        name: request.preset.name(),
        description: request.preset.description(),
        legs,
        curve,
        summary,
    }))
}
