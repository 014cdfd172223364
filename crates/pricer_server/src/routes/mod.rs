//! Route modules for the pricer server
//!
//! This module contains endpoint group-specific routers:
//! - pricing: Option price with a moneyness snapshot
//! - greeks: Scaled first- and second-order sensitivities
//! - sensitivity: Sweeps, heatmap grids and spot shocks
//! - strategy: Multi-leg payoff curves, summaries and presets
//! - health: Health check and readiness endpoints

pub mod greeks;
pub mod health;
pub mod pricing;
pub mod sensitivity;
pub mod strategy;

use axum::Router;
use pricer_core::types::PricingError;
use pricer_models::analytical::GreeksConvention;
use pricer_models::instruments::{OptionParameters, OptionType};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::ApiError;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime calculation
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Create a new AppState
    pub fn new(config: Arc<ServerConfig>) -> Self {
        Self {
            config,
            start_time: std::time::Instant::now(),
        }
    }

    /// Greeks scaling configured for this server
    pub fn convention(&self) -> &GreeksConvention {
        &self.config.greeks
    }

    /// Rejects sample counts above `max_points`.
    pub fn check_points(&self, points: usize) -> Result<(), ApiError> {
        if points > self.config.max_points {
            return Err(ApiError::too_many_points(points, self.config.max_points));
        }
        Ok(())
    }
}

/// Raw option inputs as sent by a client.
///
/// Converted to validated [`OptionParameters`] before any computation, so a
/// bad value surfaces as a 422 naming the field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionInputs {
    /// Current underlying price
    pub spot: f64,
    /// Strike price
    pub strike: f64,
    /// Time to expiry in years
    pub expiry: f64,
    /// Continuously compounded risk-free rate
    pub rate: f64,
    /// Annualised volatility
    pub volatility: f64,
    /// `call` or `put`
    pub option_type: OptionType,
}

impl OptionInputs {
    /// Validates the inputs.
    pub fn to_params(&self) -> Result<OptionParameters<f64>, PricingError> {
        OptionParameters::new(
            self.spot,
            self.strike,
            self.expiry,
            self.rate,
            self.volatility,
            self.option_type,
        )
    }
}

/// Build the main application router by merging all route modules
pub fn build_router(config: Arc<ServerConfig>) -> Router {
    let state = AppState::new(config);

    Router::new()
        .merge(health::routes())
        .merge(pricing::routes())
        .merge(greeks::routes())
        .merge(sensitivity::routes())
        .merge(strategy::routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, Response, StatusCode};
    use tower::ServiceExt;

    pub fn reference_inputs(option_type: &str) -> serde_json::Value {
        serde_json::json!({
            "spot": 100.0,
            "strike": 100.0,
            "expiry": 1.0,
            "rate": 0.05,
            "volatility": 0.2,
            "optionType": option_type,
        })
    }

    pub fn test_router() -> Router {
        build_router(Arc::new(ServerConfig::default()))
    }

    pub async fn post_json(
        router: Router,
        uri: &str,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        let response: Response<Body> = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
        };
        (status, json)
    }
}
