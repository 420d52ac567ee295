//! Physical models
//!
//! All models implement the [`PhysicalModel`](crate::physics::PhysicalModel) trait.
//! The solver calls `compute_physics` at each stage of each time step. Models
//! are responsible for the right-hand side, the solver for the time integration.
//!
//! # Available Models
//!
//! ## [`LogisticGrowth`]
//!
//! Bounded population growth dy/dt = r·y·(1 − y/K) with a closed-form
//! solution, used as the reference problem for every method comparison.

pub mod logistic;

pub use logistic::{exact_solution, logistic_rate, LogisticGrowth};
