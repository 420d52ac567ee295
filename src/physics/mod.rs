//! Physical models
//!
//! This module provides the trait every right-hand side implements and the
//! state container the solvers advance.
//!
//! # Architecture
//!
//! Physical models are **separate from numerical solvers**:
//! - The model provides the **equations** (physics)
//! - The solver provides the **method** to solve them (numerics)
//!
//! This separation allows:
//! - Same model with different solvers (Euler, Heun, Runge-Kutta)
//! - Same solver with different models
//!
//! # Implementing a New Physical Model
//!
//! ```rust
//! use logistic_rs::physics::{PhysicalModel, PhysicalState};
//!
//! /// dy/dt = -k·y
//! struct Decay {
//!     k: f64,
//! }
//!
//! impl PhysicalModel for Decay {
//!     fn points(&self) -> usize {
//!         1
//!     }
//!
//!     fn compute_physics(&self, _t: f64, state: &PhysicalState) -> PhysicalState {
//!         state.map(|y| -self.k * y)
//!     }
//!
//!     fn analytical_solution(&self, t: f64, initial: &PhysicalState) -> Option<PhysicalState> {
//!         Some(initial.map(|y0| y0 * (-self.k * t).exp()))
//!     }
//!
//!     fn name(&self) -> &str {
//!         "Decay"
//!     }
//! }
//!
//! let model = Decay { k: 0.5 };
//! let slope = model.compute_physics(0.0, &PhysicalState::scalar(2.0));
//! assert_eq!(slope[0], -1.0);
//! ```
//!
//! # Available Models
//!
//! - **Logistic growth**: dy/dt = r·y·(1 − y/K), see [`crate::models::logistic`]

pub mod traits;

pub use traits::{PhysicalModel, PhysicalState};
