//! Greeks calculation endpoint
//!
//! Theta, Vega and Rho are scaled with the server's configured
//! `GreeksConvention`; the defaults quote Theta per calendar day and Vega
//! and Rho per percentage point.

use axum::{
    extract::{Json, State},
    routing::post,
    Router,
};
use pricer_models::analytical::{self, Greeks};
use pricer_models::instruments::OptionType;
use serde::{Deserialize, Serialize};

use super::{AppState, OptionInputs};
use crate::error::ApiError;

/// Greeks of a single option
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GreeksResponse {
    /// Option type the Greeks refer to
    pub option_type: OptionType,
    /// Delta, Gamma, Theta, Vega, Rho
    #[serde(flatten)]
    pub greeks: Greeks<f64>,
}

/// Build the greeks routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/v1/greeks", post(greeks_handler))
}

/// POST /api/v1/greeks
async fn greeks_handler(
    State(state): State<AppState>,
    Json(inputs): Json<OptionInputs>,
) -> Result<Json<GreeksResponse>, ApiError> {
    let params = inputs.to_params()?;
    tracing::debug!(?inputs, "Computing greeks");

    Ok(Json(GreeksResponse {
        option_type: params.option_type(),
        greeks: analytical::greeks(&params, state.convention()),
    }))
}
