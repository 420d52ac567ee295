//! Runge-Kutta 4 (RK4) numerical solver
//!
//! # Mathematical Background
//!
//! The classical fourth-order Runge-Kutta method uses a weighted average of
//! four slope estimates:
//!
//! ```text
//! k₁ = f(tₙ, yₙ)
//! k₂ = f(tₙ + h/2, yₙ + h/2 · k₁)
//! k₃ = f(tₙ + h/2, yₙ + h/2 · k₂)
//! k₄ = f(tₙ + h, yₙ + h · k₃)
//!
//! yₙ₊₁ = yₙ + h/6 · (k₁ + 2k₂ + 2k₃ + k₄)
//! ```
//!
//! # Characteristics
//!
//! - **Order**: Fourth-order accurate (global error ~ O(h⁴))
//! - **Stability**: Larger stability region than Euler or Heun
//! - **Complexity**: 4 function evaluations per step
//! - **Memory**: O(1) - stores only k₁, k₂, k₃, k₄ intermediates
//!
//! # Comparison with Lower-Order Methods
//!
//! | Method | Order | Evals/Step | Error |
//! |--------|-------|------------|-------|
//! | Euler  | 1     | 1          | O(h)  |
//! | Heun   | 2     | 2          | O(h²) |
//! | RK4    | 4     | 4          | O(h⁴) |
//!
//! For the logistic reference problem (r = 0.05, K = 1, y₀ = 0.5, h = 5) RK4
//! stays within 1e-5 of the closed form over t ∈ [0, 100], while Euler is off
//! by about 1e-2.

use crate::error::SolverError;
use crate::physics::{PhysicalModel, PhysicalState};
use crate::solver::{evaluate, march, Scenario, SimulationResult, Solver, SolverConfiguration};

// =================================================================================================
// RK4 Solver
// =================================================================================================

/// Classical fourth-order Runge-Kutta solver
///
/// # Error Analysis
///
/// - **Local truncation error**: O(h⁵) per step
/// - **Global error**: O(h⁴) after tf/h steps
///
/// **Practical implication**: halving h reduces the error by a factor of 16.
///
/// # Example
///
/// ```rust
/// use logistic_rs::models::LogisticGrowth;
/// use logistic_rs::physics::PhysicalState;
/// use logistic_rs::solver::{RK4Solver, Scenario, Solver, SolverConfiguration};
///
/// let model = LogisticGrowth::new(0.05, 1.0).unwrap();
/// let exact = model.exact(100.0, 0.5);
/// let scenario = Scenario::new(Box::new(model), PhysicalState::scalar(0.5));
///
/// let config = SolverConfiguration::time_evolution(100.0, 5.0);
/// let result = RK4Solver::new().solve(&scenario, &config).unwrap();
///
/// assert!((result.final_state[0] - exact).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RK4Solver;

impl RK4Solver {
    /// Create a new RK4 solver
    ///
    /// # Example
    ///
    /// ```rust
    /// use logistic_rs::solver::{RK4Solver, Solver};
    ///
    /// let solver = RK4Solver::new();
    /// assert_eq!(solver.name(), "Runge Kutta (RK4)");
    /// ```
    pub fn new() -> Self {
        Self
    }

    /// One RK4 step
    pub fn step(
        model: &dyn PhysicalModel,
        t: f64,
        h: f64,
        state: &PhysicalState,
    ) -> Result<PhysicalState, SolverError> {
        let half = h / 2.0;

        // Stage 1: slope at beginning of interval
        let k1 = evaluate(model, t, state)?;

        // Stage 2: slope at midpoint using Euler prediction with k₁
        let k2 = evaluate(model, t + half, &(state.clone() + k1.clone() * half))?;

        // Stage 3: slope at midpoint using Euler prediction with k₂
        let k3 = evaluate(model, t + half, &(state.clone() + k2.clone() * half))?;

        // Stage 4: slope at end using Euler prediction with k₃
        let k4 = evaluate(model, t + h, &(state.clone() + k3.clone() * h))?;

        // Simpson weights: endpoints 1/6, midpoints 2/6
        let weighted_slope = k1 + k2 * 2.0 + k3 * 2.0 + k4;

        Ok(state.clone() + weighted_slope * (h / 6.0))
    }
}

impl Solver for RK4Solver {
    fn solve(
        &self,
        scenario: &Scenario,
        config: &SolverConfiguration,
    ) -> Result<SimulationResult, SolverError> {
        march(scenario, config, self.name(), self.stages(), Self::step)
    }

    fn name(&self) -> &'static str {
        "Runge Kutta (RK4)"
    }

    fn stages(&self) -> usize {
        4
    }
}

// =================================================================================================
// Tests
// =================================================================================================
