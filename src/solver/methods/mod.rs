//! Numerical methods for solving differential equations
//!
//! This module contains concrete implementations of the [`Solver`] trait and
//! the [`Method`] selector used by the comparison layer.
//!
//! # Available Methods
//!
//! - **[`EulerSolver`]**: Forward Euler, first order, 1 evaluation per step
//! - **[`HeunSolver`]**: Improved Euler, second order, 2 evaluations per step
//! - **[`RK4Solver`]**: Classical Runge-Kutta, fourth order, 4 evaluations per step
//! - **[`AnalyticalSolver`]**: the model's closed form sampled on the grid
//!
//! Each solver is stateless and can be reused for any number of scenarios.

mod analytical;
mod euler;
mod heun;
mod rk4;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SolverError;
use crate::models::LogisticGrowth;
use crate::physics::PhysicalState;
use crate::solver::{Scenario, Solver, SolverConfiguration, TrajectoryPoint};

pub use analytical::AnalyticalSolver;
pub use euler::EulerSolver;
pub use heun::HeunSolver;
pub use rk4::RK4Solver;

static ANALYTICAL: AnalyticalSolver = AnalyticalSolver;
static EULER: EulerSolver = EulerSolver;
static HEUN: HeunSolver = HeunSolver;
static RK4: RK4Solver = RK4Solver;

// =================================================================================================
// Method selector
// =================================================================================================

/// The four trajectories computed for every initial condition
///
/// The serialized keys (`analytic`, `euler`, `eulerApr`, `rk4`) are the
/// field names the rendering layer consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Method {
    #[serde(rename = "analytic")]
    Analytic,
    #[serde(rename = "euler")]
    Euler,
    #[serde(rename = "eulerApr")]
    Heun,
    #[serde(rename = "rk4")]
    RungeKutta4,
}

impl Method {
    /// Every method, closed form first
    pub const ALL: [Method; 4] = [
        Method::Analytic,
        Method::Euler,
        Method::Heun,
        Method::RungeKutta4,
    ];

    /// The approximate methods, in increasing order of accuracy
    pub const NUMERICAL: [Method; 3] = [Method::Euler, Method::Heun, Method::RungeKutta4];

    /// Series key
    pub fn key(self) -> &'static str {
        match self {
            Method::Analytic => "analytic",
            Method::Euler => "euler",
            Method::Heun => "eulerApr",
            Method::RungeKutta4 => "rk4",
        }
    }

    /// Global order of accuracy (`None` for the closed form)
    pub fn order(self) -> Option<u32> {
        match self {
            Method::Analytic => None,
            Method::Euler => Some(1),
            Method::Heun => Some(2),
            Method::RungeKutta4 => Some(4),
        }
    }

    /// `false` only for [`Method::Analytic`]
    pub fn is_numerical(self) -> bool {
        self != Method::Analytic
    }

    /// Solver implementing this method
    pub fn solver(self) -> &'static dyn Solver {
        match self {
            Method::Analytic => &ANALYTICAL,
            Method::Euler => &EULER,
            Method::Heun => &HEUN,
            Method::RungeKutta4 => &RK4,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Method {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .into_iter()
            .find(|method| method.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| SolverError::UnknownMethod(s.to_string()))
    }
}

// =================================================================================================
// Scalar logistic integration
// =================================================================================================

/// Integrate the logistic equation with one method
///
/// Returns `floor(tf / h) + 1` points on the shared grid, the first being
/// `(0, y0)`.
///
/// # Errors
///
/// `InvalidParameter` for non-finite inputs, `r ≤ 0`, `K ≤ 0`, `tf ≤ 0` or
/// `h ≤ 0`; `NonFiniteState` if the trajectory diverges.
///
/// # Example
///
/// ```rust
/// use logistic_rs::solver::{integrate, Method};
///
/// let euler = integrate(Method::Euler, 0.05, 1.0, 0.5, 10.0, 5.0).unwrap();
/// assert_eq!(euler.len(), 3);
/// // y1 = 0.5 + 5 · 0.05 · 0.5 · 0.5
/// assert!((euler[1].y - 0.5625).abs() < 1e-12);
/// ```
pub fn integrate(
    method: Method,
    r: f64,
    k: f64,
    y0: f64,
    tf: f64,
    h: f64,
) -> Result<Vec<TrajectoryPoint>, SolverError> {
    let model = LogisticGrowth::new(r, k)?;
    let scenario = Scenario::new(Box::new(model), PhysicalState::scalar(y0));
    let config = SolverConfiguration::time_evolution(tf, h);

    let result = method.solver().solve(&scenario, &config)?;
    Ok(result.points(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_keys() {
        let keys: Vec<_> = Method::ALL.iter().map(|m| m.key()).collect();
        assert_eq!(keys, vec!["analytic", "euler", "eulerApr", "rk4"]);
    }

    #[test]
    fn test_method_parse_round_trip() {
        for method in Method::ALL {
            assert_eq!(method.to_string().parse::<Method>(), Ok(method));
        }
        assert_eq!("RK4".parse::<Method>(), Ok(Method::RungeKutta4));
        assert_eq!(
            "midpoint".parse::<Method>(),
            Err(SolverError::UnknownMethod("midpoint".to_string()))
        );
    }

    #[test]
    fn test_method_orders() {
        assert_eq!(Method::Analytic.order(), None);
        assert_eq!(
            Method::NUMERICAL.map(|m| m.order()),
            [Some(1), Some(2), Some(4)]
        );
        assert!(!Method::Analytic.is_numerical());
        assert!(Method::NUMERICAL.iter().all(|m| m.is_numerical()));
    }

    #[test]
    fn test_method_solver_lookup() {
        assert_eq!(Method::Euler.solver().name(), "Forward Euler");
        assert_eq!(Method::Heun.solver().name(), "Improved Euler (Heun)");
        assert_eq!(Method::RungeKutta4.solver().name(), "Runge Kutta (RK4)");
        assert_eq!(Method::Analytic.solver().name(), "Analytical");
    }

    #[test]
    fn test_integrate_length_and_first_point() {
        for method in Method::ALL {
            let points = integrate(method, 0.05, 1.0, 0.2, 100.0, 3.0).unwrap();

            assert_eq!(points.len(), 34, "{method}");
            assert_eq!(points[0], TrajectoryPoint::new(0.0, 0.2), "{method}");
        }
    }

    #[test]
    fn test_integrate_rejects_invalid_input() {
        assert!(integrate(Method::Euler, 0.05, 1.0, 0.5, 100.0, 0.0).is_err());
        assert!(integrate(Method::Euler, 0.05, 1.0, 0.5, -1.0, 1.0).is_err());
        assert!(integrate(Method::Heun, 0.05, 0.0, 0.5, 100.0, 1.0).is_err());
        assert!(integrate(Method::RungeKutta4, f64::NAN, 1.0, 0.5, 100.0, 1.0).is_err());
        assert!(integrate(Method::Analytic, 0.05, 1.0, f64::INFINITY, 100.0, 1.0).is_err());
    }

    #[test]
    fn test_integrate_grids_are_identical() {
        let grids: Vec<Vec<f64>> = Method::ALL
            .iter()
            .map(|&m| {
                integrate(m, 0.7, 2.0, 0.1, 13.0, 0.7)
                    .unwrap()
                    .iter()
                    .map(|p| p.t)
                    .collect()
            })
            .collect();

        assert!(grids.windows(2).all(|pair| pair[0] == pair[1]));
        assert_eq!(grids[0].len(), 19);
    }
}
