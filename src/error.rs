//! Error types
//!
//! The numerical core has a single failure mode worth naming: the caller
//! handed it something outside the admissible domain. Everything else
//! (NaN blow-up, a missing closed form, a model returning the wrong
//! dimension) is reported with enough context to locate the step.

use thiserror::Error;

/// Errors raised by solvers and by the comparison layer
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// A numeric input is outside the admissible domain
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// The integrated state contains NaN or Inf
    #[error("non-finite state at step {step}; the trajectory diverged (try a smaller step size)")]
    NonFiniteState { step: usize },

    /// The analytical solver was asked to solve a model without a closed form
    #[error("model `{model}` has no analytical solution")]
    MissingAnalyticalSolution { model: String },

    /// A model returned a right-hand side of the wrong dimension
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// A method name that is not one of the series keys
    #[error("unknown method `{0}`")]
    UnknownMethod(String),
}

/// Errors raised while loading a comparison configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot parse configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid configuration: {0}")]
    Invalid(#[from] SolverError),
}

impl SolverError {
    /// Shorthand used by the validation helpers
    pub(crate) fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter { name, value, reason }
    }
}

/// Require `value` to be finite and strictly positive
pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<f64, SolverError> {
    if !value.is_finite() {
        return Err(SolverError::invalid(name, value, "must be finite"));
    }
    if value <= 0.0 {
        return Err(SolverError::invalid(name, value, "must be positive"));
    }
    Ok(value)
}

/// Require `value` to be finite
pub(crate) fn require_finite(name: &'static str, value: f64) -> Result<f64, SolverError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SolverError::invalid(name, value, "must be finite"))
    }
}
