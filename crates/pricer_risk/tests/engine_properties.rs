//! End-to-end properties of the pricing, sweep and strategy engine.

use approx::assert_relative_eq;
use pricer_models::analytical::{greeks, price, GreeksConvention};
use pricer_models::instruments::{
    Direction, OptionField, OptionParameters, OptionType, StrategyLeg,
};
use pricer_risk::scenarios::{spot_shocks, sweep, Metric, SensitivityGrid, ShockScenario};
use pricer_risk::strategy::{strategy_payoff, StrategyPreset, StrategySummary};

fn params(option_type: OptionType) -> OptionParameters<f64> {
    OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, option_type).unwrap()
}

// ================================================================
// Delta sweeps
// ================================================================

#[test]
fn test_call_delta_sweep_increases_towards_one() {
    let series = sweep(&params(OptionType::Call), OptionField::Spot, 50.0, 150.0, 101, Metric::Delta)
        .unwrap();
    assert_eq!(series.len(), 101);
    assert_eq!(series.inputs[0], 50.0);
    assert_eq!(series.inputs[100], 150.0);
    for pair in series.values.windows(2) {
        assert!(pair[1] > pair[0], "call delta not increasing: {:?}", pair);
    }
    assert!(series.values[0] < 0.01);
    assert!(series.values[100] > 0.97);
}

#[test]
fn test_put_delta_sweep_rises_from_minus_one() {
    let series = sweep(&params(OptionType::Put), OptionField::Spot, 50.0, 150.0, 101, Metric::Delta)
        .unwrap();
    // Near -1 deep in the money, rising towards 0 as the spot grows
    for pair in series.values.windows(2) {
        assert!(pair[1] > pair[0]);
    }
    assert!(series.values[0] < -0.99);
    assert!(series.values[0] > -1.0 - 1e-12);
}

#[test]
fn test_delta_spread_along_sweep() {
    let call = sweep(&params(OptionType::Call), OptionField::Spot, 50.0, 150.0, 101, Metric::Delta)
        .unwrap();
    let put = sweep(&params(OptionType::Put), OptionField::Spot, 50.0, 150.0, 101, Metric::Delta)
        .unwrap();
    for (c, p) in call.values.iter().zip(&put.values) {
        assert_relative_eq!(c - p, 1.0, epsilon = 1e-12);
    }
}

#[test]
fn test_parity_along_volatility_sweep() {
    let call = sweep(&params(OptionType::Call), OptionField::Volatility, 0.02, 1.0, 50, Metric::Price)
        .unwrap();
    let put = sweep(&params(OptionType::Put), OptionField::Volatility, 0.02, 1.0, 50, Metric::Price)
        .unwrap();
    let forward = 100.0 - 100.0 * (-0.05_f64).exp();
    for (c, p) in call.values.iter().zip(&put.values) {
        assert_relative_eq!(c - p, forward, max_relative = 1e-6);
    }
}

#[test]
fn test_volatility_sweep_starts_at_intrinsic() {
    let itm = params(OptionType::Call).with(OptionField::Spot, 110.0).unwrap();
    let series = sweep(&itm, OptionField::Volatility, 0.0, 0.4, 5, Metric::Price).unwrap();
    assert_eq!(series.values[0], 10.0);
    assert!(series.values[1] > 10.0);

    let put = itm.with_option_type(OptionType::Put);
    let series = sweep(&put, OptionField::Volatility, 0.0, 0.4, 5, Metric::Price).unwrap();
    assert_eq!(series.values[0], 0.0);
}

// ================================================================
// Strategy payoff
// ================================================================

#[test]
fn test_single_long_call_payoff_matches_formula() {
    let legs = [StrategyLeg::option(OptionType::Call, 100.0, 5.0, Direction::Long, 1.0).unwrap()];
    let curve = strategy_payoff(&legs, 80.0, 120.0, 81).unwrap();
    for point in &curve.points {
        let expected = (point.price - 100.0_f64).max(0.0) - 5.0;
        assert_relative_eq!(point.payoff, expected, epsilon = 1e-12);
    }
}

#[test]
fn test_preset_curve_agrees_with_summary() {
    let legs = StrategyPreset::LongStraddle.build(&params(OptionType::Call)).unwrap();
    let summary = StrategySummary::from_legs(&legs).unwrap();
    let curve = strategy_payoff(&legs, 1.0, 200.0, 2000).unwrap();

    let lowest = curve.payoffs().into_iter().fold(f64::INFINITY, f64::min);
    assert!(lowest >= -summary.max_loss.unwrap() - 1e-12);
    assert_relative_eq!(summary.max_loss.unwrap(), summary.net_premium, epsilon = 1e-12);
    assert_eq!(summary.breakevens.len(), 2);
}

// ================================================================
// Invalid volatility on every entry point
// ================================================================

#[test]
fn test_negative_volatility_rejected_everywhere() {
    let construct = OptionParameters::new(100.0, 100.0, 1.0, 0.05, -0.1, OptionType::Call);
    assert_eq!(construct.unwrap_err().field(), "volatility");

    let base = params(OptionType::Call);
    assert_eq!(
        base.with(OptionField::Volatility, -0.1).unwrap_err().field(),
        "volatility"
    );

    let swept = sweep(&base, OptionField::Volatility, -0.1, 0.3, 5, Metric::Price);
    assert_eq!(swept.unwrap_err().field(), "volatility");

    let shocked = spot_shocks(&base, &[ShockScenario::new("Crash", -1.5)]);
    assert_eq!(shocked.unwrap_err().field(), "shocks[0].spot");
}

#[test]
fn test_engine_defaults_are_finite() {
    let base = params(OptionType::Put);
    let result = price(&base);
    let g = greeks(&base, &GreeksConvention::default());
    assert!(result.price.is_finite());
    assert!([g.delta, g.gamma, g.theta, g.vega, g.rho].iter().all(|v| v.is_finite()));

    let grid = SensitivityGrid::spot_vol_default(&base).unwrap();
    assert!(grid.values.iter().flatten().all(|v| v.is_finite() && *v >= 0.0));
}
