//! Observed order of accuracy
//!
//! A method of order p has a global error roughly proportional to hᵖ, so
//! halving the step divides the error by 2ᵖ and
//!
//! ```text
//! p ≈ log₂(E(h) / E(h/2))
//! ```
//!
//! [`observed_orders`] measures this on the logistic problem.

use serde::{Deserialize, Serialize};

use crate::error::{require_finite, SolverError};
use crate::solver::{integrate, Method};

use super::ParameterSet;

/// Errors and observed orders along a sequence of halved step sizes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvergenceStudy {
    pub method: Method,

    /// h, h/2, h/4, …
    pub step_sizes: Vec<f64>,

    /// Maximum absolute error against the closed form at each step size
    pub errors: Vec<f64>,

    /// `log2(errors[i] / errors[i + 1])`, `None` when either error is zero
    pub orders: Vec<Option<f64>>,
}

impl ConvergenceStudy {
    /// Order measured on the finest pair of step sizes
    pub fn finest_order(&self) -> Option<f64> {
        self.orders.last().copied().flatten()
    }
}

/// Run `method` at `refinements + 1` step sizes, halving from `parameters.step_size`
///
/// # Example
///
/// ```rust
/// use logistic_rs::comparison::{observed_orders, ParameterSet};
/// use logistic_rs::solver::Method;
///
/// let study = observed_orders(Method::Heun, &ParameterSet::default(), 0.5, 3).unwrap();
///
/// assert_eq!(study.step_sizes, vec![5.0, 2.5, 1.25, 0.625]);
/// let order = study.finest_order().unwrap();
/// assert!((order - 2.0).abs() < 0.1);
/// ```
pub fn observed_orders(
    method: Method,
    parameters: &ParameterSet,
    y0: f64,
    refinements: usize,
) -> Result<ConvergenceStudy, SolverError> {
    parameters.validate()?;
    require_finite("y0", y0)?;

    let step_sizes: Vec<f64> = (0..=refinements)
        .scan(parameters.step_size, |h, _| {
            let current = *h;
            *h /= 2.0;
            Some(current)
        })
        .collect();

    let errors = step_sizes
        .iter()
        .map(|&h| max_error(method, &parameters.with_step_size(h), y0))
        .collect::<Result<Vec<f64>, _>>()?;

    let orders = errors
        .windows(2)
        .map(|pair| {
            if pair[0] == 0.0 || pair[1] == 0.0 {
                None
            } else {
                Some((pair[0] / pair[1]).log2())
            }
        })
        .collect();

    log::debug!("convergence of {method}: errors {errors:?}");

    Ok(ConvergenceStudy {
        method,
        step_sizes,
        errors,
        orders,
    })
}

fn max_error(method: Method, parameters: &ParameterSet, y0: f64) -> Result<f64, SolverError> {
    let run = |method: Method| {
        integrate(
            method,
            parameters.rate,
            parameters.capacity,
            y0,
            parameters.final_time,
            parameters.step_size,
        )
    };

    let exact = run(Method::Analytic)?;
    let approx = run(method)?;

    Ok(approx
        .iter()
        .zip(&exact)
        .map(|(a, e)| (a.y - e.y).abs())
        .fold(0.0, f64::max))
}
