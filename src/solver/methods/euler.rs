//! Forward Euler numerical solver
//!
//! # Mathematical Background
//!
//! The Forward Euler method is the simplest explicit time-stepping scheme
//! for solving ordinary differential equations (ODEs):
//!
//! ```text
//! dy/dt = f(t, y)
//! ```
//!
//! The scheme approximates the solution at time t_{n+1} = t_n + h using:
//!
//! ```text
//! y_{n+1} = y_n + h * f(t_n, y_n)
//! ```
//!
//! # Characteristics
//!
//! - **Order**: First-order accurate (global error ~ O(h))
//! - **Stability**: Conditionally stable (requires small time steps)
//! - **Complexity**: 1 function evaluation per step
//! - **Memory**: O(1) - only stores current state
//!
//! # When to Use
//!
//! - Baseline for method comparison
//! - Quick exploratory simulations
//! - Non-stiff problems with relaxed accuracy requirements
//!
//! # Example
//!
//! ```rust
//! use logistic_rs::models::LogisticGrowth;
//! use logistic_rs::physics::PhysicalState;
//! use logistic_rs::solver::{EulerSolver, Scenario, Solver, SolverConfiguration};
//!
//! let model = LogisticGrowth::new(0.05, 1.0).unwrap();
//! let scenario = Scenario::new(Box::new(model), PhysicalState::scalar(0.5));
//! let config = SolverConfiguration::time_evolution(100.0, 5.0);
//!
//! let result = EulerSolver::new().solve(&scenario, &config).unwrap();
//! assert_eq!(result.len(), 21);
//! ```

use crate::error::SolverError;
use crate::physics::{PhysicalModel, PhysicalState};
use crate::solver::{evaluate, march, Scenario, SimulationResult, Solver, SolverConfiguration};

// =================================================================================================
// Forward Euler Solver
// =================================================================================================

/// Forward Euler time-stepping solver
///
/// # Error Analysis
///
/// - **Local truncation error**: O(h²) per step
/// - **Global error**: O(h) after tf/h steps
/// - **Convergence**: halving h halves the error
#[derive(Debug, Clone, Copy, Default)]
pub struct EulerSolver;

impl EulerSolver {
    /// Create a new Forward Euler solver
    ///
    /// # Example
    ///
    /// ```rust
    /// use logistic_rs::solver::{EulerSolver, Solver};
    ///
    /// let solver = EulerSolver::new();
    /// assert_eq!(solver.name(), "Forward Euler");
    /// ```
    pub fn new() -> Self {
        Self
    }

    /// One Euler step: y_{n+1} = y_n + h·f(t_n, y_n)
    pub fn step(
        model: &dyn PhysicalModel,
        t: f64,
        h: f64,
        state: &PhysicalState,
    ) -> Result<PhysicalState, SolverError> {
        let slope = evaluate(model, t, state)?;
        Ok(state.clone() + slope * h)
    }
}

impl Solver for EulerSolver {
    fn solve(
        &self,
        scenario: &Scenario,
        config: &SolverConfiguration,
    ) -> Result<SimulationResult, SolverError> {
        march(scenario, config, self.name(), self.stages(), Self::step)
    }

    fn name(&self) -> &'static str {
        "Forward Euler"
    }

    fn stages(&self) -> usize {
        1
    }
}

// =================================================================================================
// Tests
// =================================================================================================
