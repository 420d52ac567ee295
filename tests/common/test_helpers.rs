//! Helper functions for integration tests

#![allow(dead_code)]

use logistic_rs::models::LogisticGrowth;
use logistic_rs::physics::{PhysicalModel, PhysicalState};
use logistic_rs::solver::{Scenario, TrajectoryPoint};

/// Install `env_logger` once; later calls are no-ops
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Assert that two physical states are close (within tolerance)
pub fn assert_states_close(
    state1: &PhysicalState,
    state2: &PhysicalState,
    tolerance: f64,
    message: &str,
) {
    assert_eq!(state1.dim(), state2.dim(), "{}: Dimension mismatch", message);

    for (i, (&v1, &v2)) in state1.as_vector().iter().zip(state2.as_vector().iter()).enumerate() {
        let diff = (v1 - v2).abs();
        assert!(
            diff < tolerance,
            "{}: Element {} differs by {} (tolerance {})",
            message, i, diff, tolerance
        );
    }
}

/// Maximum absolute difference between two aligned series
pub fn max_abs_error(series: &[TrajectoryPoint], reference: &[TrajectoryPoint]) -> f64 {
    assert_eq!(series.len(), reference.len(), "series are not aligned");

    series
        .iter()
        .zip(reference)
        .map(|(a, b)| {
            assert_eq!(a.t, b.t, "time grids differ");
            (a.y - b.y).abs()
        })
        .fold(0.0, f64::max)
}

/// Scenario for a single logistic population
pub fn logistic_scenario(rate: f64, capacity: f64, y0: f64) -> Scenario {
    let model = LogisticGrowth::new(rate, capacity).expect("valid logistic parameters");
    Scenario::new(Box::new(model), PhysicalState::scalar(y0))
}

/// Scenario with a uniform initial state
pub fn create_simple_scenario(model: Box<dyn PhysicalModel>, value: f64) -> Scenario {
    let initial = PhysicalState::from_slice(&vec![value; model.points()]);
    Scenario::new(model, initial)
}

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}
