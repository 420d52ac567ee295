//! Numerical solvers
//!
//! This module provides the [`Solver`] trait and its fixed-step explicit
//! implementations. A solver applies a numerical method to the equations
//! provided by a physical model within a specific scenario.
//!
//! # The Architecture (WHAT vs HOW)
//!
//! 1. **Scenario** (`Scenario`) - WHAT to solve
//!    - Physical model (right-hand side)
//!    - Initial state
//!
//! 2. **Configuration** (`SolverConfiguration`) - HOW FAR and HOW FINE
//!    - Final time tf and step size h
//!    - Turned into the shared [`TimeGrid`]
//!
//! 3. **Solver** (`Solver` trait) - The numerical method
//!    - Applies the numerical scheme on the grid
//!    - Returns the trajectory
//!    - Independent of physics
//!
//! This separation allows:
//! - Same solver for different physics
//! - Different solvers for same scenario
//! - Sample-by-sample method comparison
//!
//! # Available Solvers
//!
//! | Method | Order | Evals/Step | Global error |
//! |--------|-------|------------|--------------|
//! | [`EulerSolver`] | 1 | 1 | O(h) |
//! | [`HeunSolver`]  | 2 | 2 | O(h²) |
//! | [`RK4Solver`]   | 4 | 4 | O(h⁴) |
//! | [`AnalyticalSolver`] | exact | 0 | rounding only |
//!
//! # Quick Start Example
//!
//! ```rust
//! use logistic_rs::solver::{integrate, Method};
//!
//! // r = 0.05, K = 1, y0 = 0.5, tf = 100, h = 5
//! let points = integrate(Method::RungeKutta4, 0.05, 1.0, 0.5, 100.0, 5.0).unwrap();
//!
//! assert_eq!(points.len(), 21);
//! assert_eq!(points[0].t, 0.0);
//! assert_eq!(points[0].y, 0.5);
//! assert!((points[20].y - 0.99331).abs() < 1e-4);
//! ```
//!
//! # Error Handling
//!
//! All solver methods return `Result<T, SolverError>`. Common errors:
//! - Invalid configuration (non-positive final time or step size)
//! - Invalid scenario (non-finite initial value, wrong dimension)
//! - Numerical blow-up (NaN or Inf in the state)

// =================================================================================================
// Module Declarations
// =================================================================================================
mod grid;
mod methods;
mod scenario;
mod traits;

// =================================================================================================
// Parallel Execution Threshold
// =================================================================================================
//
// Deciding *when* to hand work off to Rayon is a numerical-execution concern.
// The comparison layer reads it to choose between sequential and parallel
// evaluation of independent initial conditions.
//
// Stored in an AtomicUsize so tests and benchmarks can change it at runtime.
// Relaxed ordering is sufficient: the value is a performance hint, not a
// synchronisation point.
// =================================================================================================

use std::sync::atomic::{AtomicUsize, Ordering};

/// Default number of initial conditions above which the comparison switches
/// to parallel evaluation.
const DEFAULT_PARALLEL_THRESHOLD: usize = 8;

static PARALLEL_THRESHOLD: AtomicUsize = AtomicUsize::new(DEFAULT_PARALLEL_THRESHOLD);

/// Return the current parallel-execution threshold.
///
/// The comparison evaluates initial conditions sequentially when there are
/// at most this many, and on the rayon pool when there are more (only when
/// the crate is compiled with the `parallel` feature).
///
/// # Example
///
/// ```rust
/// use logistic_rs::solver::parallel_threshold;
///
/// assert!(parallel_threshold() > 0);
/// ```
pub fn parallel_threshold() -> usize {
    PARALLEL_THRESHOLD.load(Ordering::Relaxed)
}

/// Set the parallel-execution threshold to a new value.
///
/// # Panics
///
/// Panics when `threshold == 0`.
///
/// # Example
///
/// ```rust
/// use logistic_rs::solver::{parallel_threshold, set_parallel_threshold};
///
/// let previous = parallel_threshold();
/// set_parallel_threshold(64);
/// assert_eq!(parallel_threshold(), 64);
///
/// // Restore so other tests are not affected.
/// set_parallel_threshold(previous);
/// ```
pub fn set_parallel_threshold(threshold: usize) {
    assert!(threshold > 0, "parallel threshold must be at least 1");
    PARALLEL_THRESHOLD.store(threshold, Ordering::Relaxed);
}

#[cfg(test)]
static THRESHOLD_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// RAII guard that saves the current threshold on construction and restores
/// it on drop.
///
/// Guards are serialized through a lock so concurrently running tests never
/// observe each other's threshold.
#[cfg(test)]
pub(crate) struct ThresholdGuard {
    previous: usize,
    _lock: std::sync::MutexGuard<'static, ()>,
}

#[cfg(test)]
impl ThresholdGuard {
    /// Set the threshold to `new_value` and return a guard that will
    /// restore the previous value on drop.
    pub(crate) fn save(new_value: usize) -> Self {
        let lock = THRESHOLD_LOCK
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let previous = parallel_threshold();
        set_parallel_threshold(new_value);
        Self {
            previous,
            _lock: lock,
        }
    }
}

#[cfg(test)]
impl Drop for ThresholdGuard {
    fn drop(&mut self) {
        PARALLEL_THRESHOLD.store(self.previous, Ordering::Relaxed);
    }
}

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use grid::{round_time, TimeGrid, MAX_STEPS, TIME_DECIMALS};
pub use methods::{
    integrate, AnalyticalSolver, EulerSolver, HeunSolver, Method, RK4Solver,
};
pub use scenario::Scenario;
pub use traits::{SimulationResult, Solver, SolverConfiguration, TrajectoryPoint};

// =================================================================================================
// Helper Functions
// =================================================================================================

use crate::error::SolverError;
use crate::physics::{PhysicalModel, PhysicalState};

/// Validate physical state for numerical issues
///
/// NaN arises from 0/0 or Inf − Inf, Inf from overflow; either means the
/// trajectory is no longer meaningful.
pub(crate) fn validate_state(state: &PhysicalState, step: usize) -> Result<(), SolverError> {
    if state.is_finite() {
        Ok(())
    } else {
        Err(SolverError::NonFiniteState { step })
    }
}

/// Evaluate the right-hand side and check its dimension
pub(crate) fn evaluate(
    model: &dyn PhysicalModel,
    t: f64,
    state: &PhysicalState,
) -> Result<PhysicalState, SolverError> {
    let slope = model.compute_physics(t, state);
    if slope.dim() != state.dim() {
        return Err(SolverError::DimensionMismatch {
            expected: state.dim(),
            actual: slope.dim(),
        });
    }
    Ok(slope)
}

/// Drive a one-step scheme over the configured grid
///
/// `advance(model, t_n, h, y_n)` returns `y_{n+1}`. Time is taken from the
/// grid index, so every method sees exactly the same `t_n`.
pub(crate) fn march<F>(
    scenario: &Scenario,
    config: &SolverConfiguration,
    solver: &str,
    stages: usize,
    advance: F,
) -> Result<SimulationResult, SolverError>
where
    F: Fn(&dyn PhysicalModel, f64, f64, &PhysicalState) -> Result<PhysicalState, SolverError>,
{
    // ====== Step 1: Validation ======

    let grid = config.grid()?;
    scenario.validate()?;

    // ====== Step 2: Setup ======

    let h = grid.step_size();
    let steps = grid.steps();
    let model = scenario.model.as_ref();

    log::debug!(
        "{solver}: integrating `{}` over {steps} steps of h = {h}",
        scenario.get_model_name()
    );

    let mut state = scenario.initial_state.clone();

    let mut time_points = Vec::with_capacity(grid.len());
    let mut trajectory = Vec::with_capacity(grid.len());

    time_points.push(grid.time(0));
    trajectory.push(state.clone());

    // ====== Step 3: Time Integration ======

    for step in 0..steps {
        let t = grid.raw_time(step);

        state = advance(model, t, h, &state)?;
        validate_state(&state, step + 1)?;

        time_points.push(grid.time(step + 1));
        trajectory.push(state.clone());
    }

    // ====== Step 4: Build Result ======

    let mut result = SimulationResult::new(time_points, trajectory, state);

    result.add_metadata("solver", solver);
    result.add_metadata("time steps", &steps.to_string());
    result.add_metadata("dt", &h.to_string());
    result.add_metadata("total time", &config.total_time.to_string());
    result.add_metadata("function evaluations", &(stages * steps).to_string());

    Ok(result)
}

// =================================================================================================
// Tests
// =================================================================================================
