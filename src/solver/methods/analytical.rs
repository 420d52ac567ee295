//! Closed-form "solver"
//!
//! Evaluates [`PhysicalModel::analytical_solution`] on the same grid the
//! numerical solvers use, so exact and approximate trajectories can be
//! compared sample by sample.

use crate::error::SolverError;
use crate::solver::{validate_state, Scenario, SimulationResult, Solver, SolverConfiguration};

/// Samples a model's closed-form solution on the time grid
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticalSolver;

impl AnalyticalSolver {
    /// Create a new analytical solver
    ///
    /// # Example
    ///
    /// ```rust
    /// use logistic_rs::solver::{AnalyticalSolver, Solver};
    ///
    /// let solver = AnalyticalSolver::new();
    /// assert_eq!(solver.name(), "Analytical");
    /// assert_eq!(solver.stages(), 0);
    /// ```
    pub fn new() -> Self {
        Self
    }
}

impl Solver for AnalyticalSolver {
    fn solve(
        &self,
        scenario: &Scenario,
        config: &SolverConfiguration,
    ) -> Result<SimulationResult, SolverError> {
        let grid = config.grid()?;
        scenario.validate()?;

        let model = scenario.model.as_ref();
        let initial = &scenario.initial_state;

        let mut time_points = Vec::with_capacity(grid.len());
        let mut trajectory = Vec::with_capacity(grid.len());

        for index in 0..grid.len() {
            let state = model
                .analytical_solution(grid.raw_time(index), initial)
                .ok_or_else(|| SolverError::MissingAnalyticalSolution {
                    model: model.name().to_string(),
                })?;

            if state.dim() != initial.dim() {
                return Err(SolverError::DimensionMismatch {
                    expected: initial.dim(),
                    actual: state.dim(),
                });
            }
            validate_state(&state, index)?;

            time_points.push(grid.time(index));
            trajectory.push(state);
        }

        // The grid always holds t = 0, so the trajectory is never empty.
        let final_state = trajectory.last().cloned().unwrap_or_else(|| initial.clone());

        let mut result = SimulationResult::new(time_points, trajectory, final_state);
        result.add_metadata("solver", self.name());
        result.add_metadata("time steps", &grid.steps().to_string());
        result.add_metadata("dt", &grid.step_size().to_string());
        result.add_metadata("total time", &config.total_time.to_string());

        Ok(result)
    }

    fn name(&self) -> &'static str {
        "Analytical"
    }

    fn stages(&self) -> usize {
        0
    }
}
