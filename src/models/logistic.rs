//! Logistic growth model
//!
//! ```text
//! dy/dt = r·y·(1 − y/K)
//! ```
//!
//! - `r`: intrinsic growth rate
//! - `K`: carrying capacity (stable equilibrium)
//!
//! The equation has the closed-form solution
//!
//! ```text
//! y(t) = K·y₀ / (y₀ + (K − y₀)·e^(−r·t))
//! ```
//!
//! which makes it a convenient benchmark for explicit integrators: the exact
//! value is available at every grid point.
//!
//! # Fixed points
//!
//! `y₀ = 0` and `y₀ = K` are equilibria. The closed form stays well defined
//! there: with `y₀ = K` the denominator reduces to `K`, and with `y₀ = 0` it
//! reduces to `K·e^(−r·t)`, which is never zero for finite `r·t`.
//!
//! # Example
//!
//! ```rust
//! use logistic_rs::models::logistic::{exact_solution, logistic_rate};
//!
//! // Half the carrying capacity grows at the maximal rate r·K/4
//! assert_eq!(logistic_rate(0.0, 0.5, 0.05, 1.0), 0.0125);
//!
//! let y = exact_solution(100.0, 0.05, 1.0, 0.5);
//! assert!((y - 0.9933).abs() < 1e-4);
//! ```

use crate::error::{require_positive, SolverError};
use crate::physics::{PhysicalModel, PhysicalState};

/// Right-hand side of the logistic equation
///
/// `t` is unused (the equation is autonomous).
pub fn logistic_rate(_t: f64, y: f64, r: f64, k: f64) -> f64 {
    r * y * (1.0 - y / k)
}

/// Closed-form solution of the logistic equation at time `t`
///
/// Returns exactly `y0` at `t = 0` up to rounding.
pub fn exact_solution(t: f64, r: f64, k: f64, y0: f64) -> f64 {
    k * y0 / (y0 + (k - y0) * (-r * t).exp())
}

/// Logistic growth as a [`PhysicalModel`]
///
/// Each state component is an independent population evolving under the
/// same `r` and `K`, so one model serves any number of initial conditions.
#[derive(Clone, Debug, PartialEq)]
pub struct LogisticGrowth {
    /// Intrinsic growth rate r
    rate: f64,
    /// Carrying capacity K
    capacity: f64,
    /// Number of independent populations
    points: usize,
}

impl LogisticGrowth {
    /// Create a one-population model
    ///
    /// # Errors
    ///
    /// `InvalidParameter` when `rate` or `capacity` is not finite and positive.
    pub fn new(rate: f64, capacity: f64) -> Result<Self, SolverError> {
        Ok(Self {
            rate: require_positive("rate", rate)?,
            capacity: require_positive("capacity", capacity)?,
            points: 1,
        })
    }

    /// Same model for `points` independent populations
    pub fn with_points(mut self, points: usize) -> Self {
        self.points = points;
        self
    }

    /// Intrinsic growth rate r
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Carrying capacity K
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// dy/dt for a single population
    pub fn rhs(&self, t: f64, y: f64) -> f64 {
        logistic_rate(t, y, self.rate, self.capacity)
    }

    /// Closed-form y(t) for a single population
    pub fn exact(&self, t: f64, y0: f64) -> f64 {
        exact_solution(t, self.rate, self.capacity, y0)
    }
}

impl PhysicalModel for LogisticGrowth {
    fn points(&self) -> usize {
        self.points
    }

    fn compute_physics(&self, t: f64, state: &PhysicalState) -> PhysicalState {
        state.map(|y| self.rhs(t, y))
    }

    fn analytical_solution(&self, t: f64, initial: &PhysicalState) -> Option<PhysicalState> {
        Some(initial.map(|y0| self.exact(t, y0)))
    }

    fn name(&self) -> &str {
        "Logistic Growth"
    }

    fn description(&self) -> Option<&str> {
        Some("dy/dt = r·y·(1 − y/K)")
    }
}
