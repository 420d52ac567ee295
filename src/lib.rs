//! logistic-rs: Explicit Integrators on the Logistic Equation
//!
//! Solves the logistic growth equation
//!
//! ```text
//! dy/dt = r·y·(1 − y/K)
//! ```
//!
//! with Forward Euler, Heun (improved Euler) and classical Runge-Kutta 4,
//! and compares every trajectory against the closed-form solution on a
//! shared time grid.
//!
//! # Architecture
//!
//! logistic-rs is built on two core principles:
//!
//! 1. **Separation of Physics and Numerics**
//!    - Physical models define equations (what to solve)
//!    - Numerical solvers provide methods (how to solve)
//!
//! 2. **One grid for every method**
//!    - n = floor(tf / h) steps, t_i = i·h
//!    - exact and approximate values line up index by index
//!
//! # Quick Start
//!
//! ```rust
//! use logistic_rs::prelude::*;
//!
//! # fn main() -> Result<(), SolverError> {
//! // 1. Parameters: r = 0.05, K = 1, tf = 100, h = 5
//! let parameters = ParameterSet::default();
//!
//! // 2. Starting populations
//! let conditions = [InitialCondition::new(0.1), InitialCondition::new(0.5)];
//!
//! // 3. Run all four methods
//! let report = compare(&parameters, &conditions)?;
//!
//! // 4. Inspect
//! let euler_vs_rk4 = report.errors.ratio_to_rk4(Method::Euler);
//! println!("Euler error is {euler_vs_rk4} times the RK4 error");
//! assert_eq!(report.records.len(), 21);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`physics`]: right-hand side trait and state container
//! - [`models`]: the logistic equation and its closed form
//! - [`solver`]: integrators, time grid, scalar `integrate`
//! - [`comparison`]: trajectory comparison and convergence study
//! - [`config`]: YAML comparison configuration
//! - [`error`]: error types

// Core modules
pub mod error;
pub mod physics;

pub mod models;
pub mod solver;

pub mod comparison;
pub mod config;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //!
    //! use logistic_rs::prelude::*;
    //! ```
    pub use crate::comparison::{
        compare, ComparisonReport, ErrorRatio, ErrorSummary, InitialCondition, ParameterSet,
    };
    pub use crate::config::ComparisonConfig;
    pub use crate::error::{ConfigError, SolverError};
    pub use crate::models::LogisticGrowth;
    pub use crate::physics::{PhysicalModel, PhysicalState};
    pub use crate::solver::{
        integrate, EulerSolver, HeunSolver, Method, RK4Solver, Scenario, SimulationResult,
        Solver, SolverConfiguration, TrajectoryPoint,
    };
}
