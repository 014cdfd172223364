//! Option pricing endpoint

use axum::{extract::Json, routing::post, Router};
use pricer_models::analytical::{self, PricingResult};
use pricer_models::instruments::OptionType;
use serde::{Deserialize, Serialize};

use super::{AppState, OptionInputs};
use crate::error::ApiError;

/// Price decomposition plus a snapshot of the contract's moneyness
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceResponse {
    /// Priced option type
    pub option_type: OptionType,
    /// Price, intrinsic value and time value
    #[serde(flatten)]
    pub result: PricingResult<f64>,
    /// `(S / K - 1) · 100`
    pub moneyness_pct: f64,
    /// Expiry in calendar days
    pub days_to_expiry: f64,
    /// Whether exercising now would pay off
    pub in_the_money: bool,
}

/// Build the pricing routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/v1/price", post(price_handler))
}

/// POST /api/v1/price
async fn price_handler(Json(inputs): Json<OptionInputs>) -> Result<Json<PriceResponse>, ApiError> {
    let params = inputs.to_params()?;
    tracing::debug!(?inputs, "Pricing option");

    Ok(Json(PriceResponse {
        option_type: params.option_type(),
        result: analytical::price(&params),
        moneyness_pct: params.moneyness_pct(),
        days_to_expiry: params.days_to_expiry(),
        in_the_money: params.is_in_the_money(),
    }))
}

#[cfg(test)]
mod tests {
    use crate::routes::test_support::{post_json, reference_inputs, test_router};
    use approx::assert_relative_eq;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_reference_call_price() {
        let (status, body) = post_json(test_router(), "/api/v1/price", reference_inputs("call")).await;

        assert_eq!(status, StatusCode::OK);
        assert_relative_eq!(body["price"].as_f64().unwrap(), 10.450583572185565, max_relative = 1e-6);
        assert_eq!(body["intrinsicValue"].as_f64().unwrap(), 0.0);
        assert_relative_eq!(body["timeValue"].as_f64().unwrap(), 10.450583572185565, max_relative = 1e-6);
        assert_eq!(body["optionType"], "call");
        assert_eq!(body["daysToExpiry"].as_f64().unwrap(), 365.0);
        assert_eq!(body["inTheMoney"], false);
    }

    #[tokio::test]
    async fn test_reference_put_price() {
        let (status, body) = post_json(test_router(), "/api/v1/price", reference_inputs("put")).await;

        assert_eq!(status, StatusCode::OK);
        assert_relative_eq!(body["price"].as_f64().unwrap(), 5.573526022256971, max_relative = 1e-6);
    }

    #[tokio::test]
    async fn test_expired_option_prices_at_intrinsic() {
        let mut inputs = reference_inputs("call");
        inputs["spot"] = serde_json::json!(110.0);
        inputs["expiry"] = serde_json::json!(0.0);

        let (status, body) = post_json(test_router(), "/api/v1/price", inputs).await;
        assert_eq!(status, StatusCode::OK);
        assert_relative_eq!(body["price"].as_f64().unwrap(), 10.0, epsilon = 1e-12);
        assert_relative_eq!(body["moneynessPct"].as_f64().unwrap(), 10.0, epsilon = 1e-9);
        assert_eq!(body["inTheMoney"], true);
    }

    #[tokio::test]
    async fn test_negative_volatility_is_422() {
        let mut inputs = reference_inputs("call");
        inputs["volatility"] = serde_json::json!(-0.1);

        let (status, body) = post_json(test_router(), "/api/v1/price", inputs).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "invalid_input");
        assert_eq!(body["field"], "volatility");
    }

    #[tokio::test]
    async fn test_zero_spot_is_422() {
        let mut inputs = reference_inputs("put");
        inputs["spot"] = serde_json::json!(0.0);

        let (status, body) = post_json(test_router(), "/api/v1/price", inputs).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["field"], "spot");
    }
}
