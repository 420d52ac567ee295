//! Numerical solver traits and types
//!
//! # Design Philosophy
//!
//! - `SolverConfiguration` says HOW FAR and HOW FINE to integrate
//! - `Scenario` says WHAT to integrate (model + initial state)
//! - `Solver` is the method, independent of both
//! - `SimulationResult` is the trajectory plus metadata for diagnostics

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::SolverError;
use crate::physics::PhysicalState;
use crate::solver::{Scenario, TimeGrid};

// =================================================================================================
// Solver configuration
// =================================================================================================

/// Configuration for a fixed-step time integration
///
/// # Examples
///
/// ```rust
/// use logistic_rs::solver::SolverConfiguration;
///
/// let config = SolverConfiguration::time_evolution(100.0, 5.0);
/// assert_eq!(config.grid().unwrap().steps(), 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SolverConfiguration {
    /// Final time tf
    pub total_time: f64,

    /// Step size h
    pub step_size: f64,
}

impl SolverConfiguration {
    /// Create a time evolution configuration
    pub fn time_evolution(total_time: f64, step_size: f64) -> Self {
        Self { total_time, step_size }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), SolverError> {
        self.grid().map(|_| ())
    }

    /// Time grid shared by every method run under this configuration
    pub fn grid(&self) -> Result<TimeGrid, SolverError> {
        TimeGrid::new(self.total_time, self.step_size)
    }
}

// =================================================================================================
// Trajectory point
// =================================================================================================

/// One sample `(t, y)` of a scalar trajectory
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    pub t: f64,
    pub y: f64,
}

impl TrajectoryPoint {
    pub fn new(t: f64, y: f64) -> Self {
        Self { t, y }
    }
}

// =================================================================================================
// Simulation result
// =================================================================================================

/// Output of a solver run
///
/// `time_points[i]` and `trajectory[i]` describe the same grid sample; both
/// have `steps + 1` entries and the first entry is the initial condition.
#[derive(Clone, Debug)]
pub struct SimulationResult {
    /// Grid times (rounded, see [`TimeGrid::time`])
    pub time_points: Vec<f64>,

    /// State at each grid time
    pub trajectory: Vec<PhysicalState>,

    /// Last state of the trajectory
    pub final_state: PhysicalState,

    /// Free-form diagnostics (solver name, step count, ...)
    pub metadata: HashMap<String, String>,
}

impl SimulationResult {
    /// Create a result with empty metadata
    pub fn new(
        time_points: Vec<f64>,
        trajectory: Vec<PhysicalState>,
        final_state: PhysicalState,
    ) -> Self {
        Self {
            time_points,
            trajectory,
            final_state,
            metadata: HashMap::new(),
        }
    }

    /// Number of stored samples
    pub fn len(&self) -> usize {
        self.trajectory.len()
    }

    /// `true` when no sample is stored
    pub fn is_empty(&self) -> bool {
        self.trajectory.is_empty()
    }

    /// Add a metadata entry
    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }

    /// Get a metadata entry
    pub fn get_metadata(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }

    /// `(t, y[component])` pairs for one state component
    pub fn component(&self, component: usize) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.time_points
            .iter()
            .zip(&self.trajectory)
            .map(move |(&t, state)| (t, state[component]))
    }

    /// One state component as a sequence of trajectory points
    pub fn points(&self, component: usize) -> Vec<TrajectoryPoint> {
        self.component(component)
            .map(|(t, y)| TrajectoryPoint::new(t, y))
            .collect()
    }
}

// =================================================================================================
// Solver trait
// =================================================================================================

/// A numerical method
///
/// Implementations are stateless: the same value can solve any number of
/// scenarios, from any number of threads.
pub trait Solver: Send + Sync {
    /// Integrate `scenario` over the grid described by `config`
    fn solve(
        &self,
        scenario: &Scenario,
        config: &SolverConfiguration,
    ) -> Result<SimulationResult, SolverError>;

    /// Display name of the method
    fn name(&self) -> &'static str;

    /// Right-hand side evaluations per step (0 for closed forms)
    fn stages(&self) -> usize;
}
