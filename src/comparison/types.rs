//! Value types exchanged with the rendering layer

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{require_finite, require_positive, SolverError};
use crate::models::LogisticGrowth;
use crate::solver::{Method, SolverConfiguration, TimeGrid, TrajectoryPoint};

// =================================================================================================
// Inputs
// =================================================================================================

/// Equation and grid parameters
///
/// Serialized with the short names `r`, `K`, `tf`, `h`.
///
/// # Example
///
/// ```rust
/// use logistic_rs::comparison::ParameterSet;
///
/// let parameters = ParameterSet::default();
/// assert_eq!(parameters.grid().unwrap().steps(), 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    /// Intrinsic growth rate r
    #[serde(rename = "r")]
    pub rate: f64,

    /// Carrying capacity K
    #[serde(rename = "K")]
    pub capacity: f64,

    /// Final time tf
    #[serde(rename = "tf")]
    pub final_time: f64,

    /// Step size h
    #[serde(rename = "h")]
    pub step_size: f64,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            rate: 0.05,
            capacity: 1.0,
            final_time: 100.0,
            step_size: 5.0,
        }
    }
}

impl ParameterSet {
    pub fn new(rate: f64, capacity: f64, final_time: f64, step_size: f64) -> Self {
        Self {
            rate,
            capacity,
            final_time,
            step_size,
        }
    }

    /// Copy with a different step size
    pub fn with_step_size(self, step_size: f64) -> Self {
        Self { step_size, ..self }
    }

    /// Check every field against the admissible domain
    pub fn validate(&self) -> Result<(), SolverError> {
        require_positive("r", self.rate)?;
        require_positive("K", self.capacity)?;
        self.grid().map(|_| ())
    }

    /// Shared time grid
    pub fn grid(&self) -> Result<TimeGrid, SolverError> {
        TimeGrid::new(self.final_time, self.step_size)
    }

    /// Solver configuration for this grid
    pub fn configuration(&self) -> SolverConfiguration {
        SolverConfiguration::time_evolution(self.final_time, self.step_size)
    }

    /// Logistic model for this `r` and `K`
    pub fn model(&self) -> Result<LogisticGrowth, SolverError> {
        LogisticGrowth::new(self.rate, self.capacity)
    }
}

fn default_active() -> bool {
    true
}

/// One starting population, possibly switched off
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InitialCondition {
    /// y(0)
    #[serde(rename = "y0")]
    pub value: f64,

    /// Only active conditions are integrated
    #[serde(default = "default_active")]
    pub active: bool,
}

impl InitialCondition {
    /// Active condition
    pub fn new(value: f64) -> Self {
        Self { value, active: true }
    }

    /// Condition kept in the list but excluded from computation
    pub fn inactive(value: f64) -> Self {
        Self { value, active: false }
    }

    pub(crate) fn validate(&self) -> Result<f64, SolverError> {
        require_finite("y0", self.value)
    }
}

// =================================================================================================
// Outputs
// =================================================================================================

/// The four trajectories of one initial condition on the shared grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectorySet {
    /// Position among the active conditions
    pub index: usize,

    /// y(0)
    pub initial_value: f64,

    pub analytic: Vec<TrajectoryPoint>,
    pub euler: Vec<TrajectoryPoint>,
    #[serde(rename = "eulerApr")]
    pub heun: Vec<TrajectoryPoint>,
    pub rk4: Vec<TrajectoryPoint>,
}

impl TrajectorySet {
    /// Trajectory computed by `method`
    pub fn series(&self, method: Method) -> &[TrajectoryPoint] {
        match method {
            Method::Analytic => &self.analytic,
            Method::Euler => &self.euler,
            Method::Heun => &self.heun,
            Method::RungeKutta4 => &self.rk4,
        }
    }

    /// Number of grid samples
    pub fn len(&self) -> usize {
        self.analytic.len()
    }

    pub fn is_empty(&self) -> bool {
        self.analytic.is_empty()
    }

    /// max_i |y_method(t_i) − y_exact(t_i)|, zero for the closed form itself
    pub fn max_error(&self, method: Method) -> f64 {
        self.series(method)
            .iter()
            .zip(&self.analytic)
            .map(|(numeric, exact)| (numeric.y - exact.y).abs())
            .fold(0.0, f64::max)
    }
}

/// Key of one series inside a [`TimeRecord`]: `"{method}_{index}"`
pub fn series_key(method: Method, index: usize) -> String {
    format!("{}_{}", method.key(), index)
}

/// Every series' value at one grid time, flattened for tabular rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeRecord {
    pub t: f64,

    /// Keyed by [`series_key`]
    pub values: BTreeMap<String, f64>,
}

impl TimeRecord {
    /// Value of `method` for the active condition at `index`
    pub fn get(&self, method: Method, index: usize) -> Option<f64> {
        self.values.get(&series_key(method, index)).copied()
    }
}

/// Quotient of two maximum errors
///
/// The denominator can legitimately be zero (a fixed point, or no active
/// condition at all), in which case the quotient is reported as undefined
/// rather than as an infinite float.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ErrorRatio {
    Defined(f64),
    Undefined,
}

impl ErrorRatio {
    pub fn value(self) -> Option<f64> {
        match self {
            ErrorRatio::Defined(value) => Some(value),
            ErrorRatio::Undefined => None,
        }
    }

    pub fn is_defined(self) -> bool {
        matches!(self, ErrorRatio::Defined(_))
    }
}

impl fmt::Display for ErrorRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorRatio::Defined(value) => write!(f, "{value:.3}"),
            ErrorRatio::Undefined => f.write_str("undefined"),
        }
    }
}

/// Maximum absolute error of each numerical method against the closed form
///
/// Maxima run over every active condition and every grid index; with no
/// active condition all three are zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorSummary {
    pub euler: f64,
    #[serde(rename = "eulerApr")]
    pub heun: f64,
    pub rk4: f64,
}

impl ErrorSummary {
    /// Aggregate over a trajectory collection
    pub fn from_trajectories(trajectories: &[TrajectorySet]) -> Self {
        trajectories.iter().fold(Self::default(), |summary, set| Self {
            euler: summary.euler.max(set.max_error(Method::Euler)),
            heun: summary.heun.max(set.max_error(Method::Heun)),
            rk4: summary.rk4.max(set.max_error(Method::RungeKutta4)),
        })
    }

    /// Maximum error of `method` (zero for the closed form)
    pub fn max_error(&self, method: Method) -> f64 {
        match method {
            Method::Analytic => 0.0,
            Method::Euler => self.euler,
            Method::Heun => self.heun,
            Method::RungeKutta4 => self.rk4,
        }
    }

    /// `max_error(method) / max_error(RK4)`
    ///
    /// # Example
    ///
    /// ```rust
    /// use logistic_rs::comparison::{ErrorRatio, ErrorSummary};
    /// use logistic_rs::solver::Method;
    ///
    /// let summary = ErrorSummary { euler: 1e-2, heun: 1e-3, rk4: 0.0 };
    /// assert_eq!(summary.ratio_to_rk4(Method::Euler), ErrorRatio::Undefined);
    /// ```
    pub fn ratio_to_rk4(&self, method: Method) -> ErrorRatio {
        if self.rk4 == 0.0 {
            ErrorRatio::Undefined
        } else {
            ErrorRatio::Defined(self.max_error(method) / self.rk4)
        }
    }
}

/// Everything one comparison run produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// Parameters the report was computed from
    pub parameters: ParameterSet,

    /// One set per active initial condition, in input order
    pub trajectories: Vec<TrajectorySet>,

    /// One record per grid time, with no values when no condition is active
    pub records: Vec<TimeRecord>,

    pub errors: ErrorSummary,
}

impl ComparisonReport {
    /// `true` when no initial condition was active
    pub fn is_empty(&self) -> bool {
        self.trajectories.is_empty()
    }

    /// Trajectory sets accepted by `predicate`, for rendering
    pub fn visible<'a, P>(&'a self, predicate: P) -> impl Iterator<Item = &'a TrajectorySet> + 'a
    where
        P: Fn(&TrajectorySet) -> bool + 'a,
    {
        self.trajectories.iter().filter(move |set| predicate(*set))
    }

    /// One series, if the condition index exists
    pub fn series(&self, method: Method, index: usize) -> Option<&[TrajectoryPoint]> {
        self.trajectories
            .iter()
            .find(|set| set.index == index)
            .map(|set| set.series(method))
    }
}

/// Which methods the rendering layer shows
///
/// Purely presentational: it never changes what is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesVisibility {
    pub analytic: bool,
    pub euler: bool,
    #[serde(rename = "eulerApr")]
    pub heun: bool,
    pub rk4: bool,
}

impl Default for SeriesVisibility {
    fn default() -> Self {
        Self {
            analytic: true,
            euler: true,
            heun: true,
            rk4: true,
        }
    }
}

impl SeriesVisibility {
    pub fn is_visible(&self, method: Method) -> bool {
        match method {
            Method::Analytic => self.analytic,
            Method::Euler => self.euler,
            Method::Heun => self.heun,
            Method::RungeKutta4 => self.rk4,
        }
    }

    pub fn set(&mut self, method: Method, visible: bool) {
        match method {
            Method::Analytic => self.analytic = visible,
            Method::Euler => self.euler = visible,
            Method::Heun => self.heun = visible,
            Method::RungeKutta4 => self.rk4 = visible,
        }
    }

    /// Visible methods in [`Method::ALL`] order
    pub fn methods(&self) -> Vec<Method> {
        Method::ALL
            .into_iter()
            .filter(|&method| self.is_visible(method))
            .collect()
    }

    /// Copy of `record` restricted to the visible series
    pub fn filter_record(&self, record: &TimeRecord) -> TimeRecord {
        let prefixes: Vec<String> = self
            .methods()
            .into_iter()
            .map(|method| format!("{}_", method.key()))
            .collect();

        let values = record
            .values
            .iter()
            .filter(|(key, _)| prefixes.iter().any(|prefix| key.starts_with(prefix.as_str())))
            .map(|(key, &value)| (key.clone(), value))
            .collect();

        TimeRecord { t: record.t, values }
    }
}
