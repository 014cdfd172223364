//! REST API server for the Black-Scholes option pricer
//!
//! This crate exposes pricing, Greeks, sensitivity sweeps, heatmap grids,
//! spot shocks and multi-leg strategy analysis over HTTP for a
//! presentation layer. All computation is delegated to the engine crates;
//! handlers only validate, call and serialise.

pub mod config;
pub mod error;
pub mod routes;
pub mod server;

// Re-export pricer dependencies for integration
pub use pricer_core;
pub use pricer_models;
pub use pricer_risk;

/// Server version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
