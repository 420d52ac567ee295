//! Simulation scenario definition
//!
//! A scenario combines a physical model with its initial state.
use crate::error::SolverError;
use crate::physics::{PhysicalModel, PhysicalState};

/// Simulation scenario
///
/// Defines a specific case to simulate:
/// - Physical model (equations)
/// - Initial state at t = 0
///
/// # Design
///
/// The same scenario can be solved with different numerical methods.
/// This is the "WHAT to solve" (not "HOW to solve").
///
/// # Examples
///
/// ```rust
/// use logistic_rs::models::LogisticGrowth;
/// use logistic_rs::physics::PhysicalState;
/// use logistic_rs::solver::{EulerSolver, RK4Solver, Scenario, Solver, SolverConfiguration};
///
/// let model = LogisticGrowth::new(0.05, 1.0).unwrap();
/// let scenario = Scenario::new(Box::new(model), PhysicalState::scalar(0.5));
/// let config = SolverConfiguration::time_evolution(100.0, 5.0);
///
/// let coarse = EulerSolver::new().solve(&scenario, &config).unwrap();
/// let fine = RK4Solver::new().solve(&scenario, &config).unwrap();
/// assert_eq!(coarse.len(), fine.len());
/// ```
pub struct Scenario {
    /// Physical model (equations)
    pub model: Box<dyn PhysicalModel>,

    /// State at t = 0
    pub initial_state: PhysicalState,
}

impl Scenario {
    /// Create a scenario
    pub fn new(model: Box<dyn PhysicalModel>, initial_state: PhysicalState) -> Self {
        Self { model, initial_state }
    }

    /// Verify that the initial state is usable with the model
    pub fn validate(&self) -> Result<(), SolverError> {
        if self.initial_state.dim() != self.model.points() {
            return Err(SolverError::DimensionMismatch {
                expected: self.model.points(),
                actual: self.initial_state.dim(),
            });
        }
        for &value in self.initial_state.as_vector().iter() {
            crate::error::require_finite("initial_state", value)?;
        }
        Ok(())
    }

    /// Get model name
    pub fn get_model_name(&self) -> &str {
        self.model.name()
    }

    /// Number of state components
    pub fn ndim(&self) -> usize {
        self.initial_state.dim()
    }
}

impl std::fmt::Debug for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scenario")
            .field("name", &self.get_model_name())
            .field("dimension", &self.ndim())
            .field("initial state", &self.initial_state)
            .finish()
    }
}

// ================================================================================================
// Tests
// ================================================================================================
