//! Shared time grid
//!
//! Every solver, and the analytical evaluator, samples the same grid
//! `t_i = i·h` for `i` in `0..=n` with `n = floor(tf / h)`. Times are computed
//! from the index, never accumulated, so sample `i` of one method is paired
//! with sample `i` of another without interpolation.
//!
//! Stored times are rounded to [`TIME_DECIMALS`] decimal digits so that
//! printed grids read `0.3` rather than `0.30000000000000004`. The state
//! values are never rounded.

use serde::{Deserialize, Serialize};

use crate::error::{require_positive, SolverError};

/// Decimal digits kept in stored time values
pub const TIME_DECIMALS: i32 = 6;

/// Uniform time grid on `[0, floor(tf/h)·h]`
///
/// # Example
///
/// ```rust
/// use logistic_rs::solver::TimeGrid;
///
/// let grid = TimeGrid::new(1.0, 0.3).unwrap();
/// assert_eq!(grid.steps(), 3);
/// assert_eq!(grid.len(), 4);
/// assert_eq!(grid.time(3), 0.9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeGrid {
    step_size: f64,
    steps: usize,
}

/// Largest step count a grid may have
///
/// Every solve allocates one state per grid point up front, so the bound
/// keeps an oversized `tf / h` a parameter error instead of an allocation
/// failure.
pub const MAX_STEPS: usize = 10_000_000;

impl TimeGrid {
    /// Build the grid for final time `total_time` and step `step_size`
    ///
    /// # Errors
    ///
    /// `InvalidParameter` when either value is not finite and positive, or
    /// when `total_time / step_size` exceeds [`MAX_STEPS`].
    pub fn new(total_time: f64, step_size: f64) -> Result<Self, SolverError> {
        let total_time = require_positive("total_time", total_time)?;
        let step_size = require_positive("step_size", step_size)?;

        let steps = (total_time / step_size).floor();
        if !steps.is_finite() || steps > MAX_STEPS as f64 {
            return Err(SolverError::invalid(
                "step_size",
                step_size,
                "too many steps for the requested final time",
            ));
        }

        Ok(Self {
            step_size,
            steps: steps as usize,
        })
    }

    /// Step size h
    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    /// Number of steps n
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Number of samples, n + 1
    pub fn len(&self) -> usize {
        self.steps + 1
    }

    /// Always `false`: the grid holds at least t = 0
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Unrounded time of sample `index`, used inside the stepping schemes
    pub fn raw_time(&self, index: usize) -> f64 {
        index as f64 * self.step_size
    }

    /// Stored time of sample `index`
    pub fn time(&self, index: usize) -> f64 {
        round_time(self.raw_time(index))
    }

    /// Last grid time (may be below the requested final time)
    pub fn final_time(&self) -> f64 {
        self.time(self.steps)
    }

    /// All stored times in order
    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len()).map(move |i| self.time(i))
    }
}

/// Round a time value to [`TIME_DECIMALS`] digits
pub fn round_time(t: f64) -> f64 {
    let scale = 10f64.powi(TIME_DECIMALS);
    (t * scale).round() / scale
}
