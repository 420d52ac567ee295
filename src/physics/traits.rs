//! Physical models traits and types
//!
//! This module defines the core API for physical models:
//! - `PhysicalModel`: trait for all physical models
//! - `PhysicalState`: state vector the solvers advance in time

use nalgebra::DVector;

// =================================================================================================
// Physical State
// =================================================================================================

/// Physical state of the system
///
/// One component per independent unknown. For the logistic equation a
/// state has a single component (the population `y`), but solvers never
/// assume that: any dimension works as long as the model returns a
/// right-hand side of the same dimension.
///
/// # Example
/// ```
/// use logistic_rs::physics::PhysicalState;
///
/// let state = PhysicalState::scalar(0.5);
/// let doubled = state.clone() + state * 1.0;
/// assert_eq!(doubled[0], 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicalState {
    values: DVector<f64>,
}

impl PhysicalState {
    /// Create a state from a vector
    pub fn new(values: DVector<f64>) -> Self {
        Self { values }
    }

    /// Create a one-component state
    pub fn scalar(value: f64) -> Self {
        Self::new(DVector::from_element(1, value))
    }

    /// Create a state from a slice of values
    pub fn from_slice(values: &[f64]) -> Self {
        Self::new(DVector::from_row_slice(values))
    }

    /// Number of components
    pub fn dim(&self) -> usize {
        self.values.len()
    }

    /// Borrow the underlying vector
    pub fn as_vector(&self) -> &DVector<f64> {
        &self.values
    }

    /// Mutable access to the underlying vector
    pub fn as_vector_mut(&mut self) -> &mut DVector<f64> {
        &mut self.values
    }

    /// First component (the whole state for scalar problems)
    pub fn first(&self) -> Option<f64> {
        self.values.iter().next().copied()
    }

    /// `true` when no component is NaN or infinite
    pub fn is_finite(&self) -> bool {
        self.values.iter().all(|x| x.is_finite())
    }

    /// Apply `f` to every component
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        Self::new(self.values.map(f))
    }
}

impl std::ops::Index<usize> for PhysicalState {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.values[index]
    }
}

// Operator overloading for numerical operations

impl std::ops::Add for PhysicalState {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        assert_eq!(self.dim(), rhs.dim(), "State dimensions must match");
        self.values += rhs.values;
        self
    }
}

impl std::ops::Mul<f64> for PhysicalState {
    type Output = Self;

    fn mul(mut self, scalar: f64) -> Self::Output {
        self.values *= scalar;
        self
    }
}

// ==================================================================================================
// Physical Model Trait
// =================================================================================================

/// Trait for physical models
///
/// # Responsibility
/// Computes the right-hand side f(t, y) of dy/dt = f(t, y).
/// Does NOT integrate it (that's the Solver's job).
///
/// The model provides the "physics" (equations), the Solver provides
/// the "numerics" (method to solve them).
pub trait PhysicalModel: Send + Sync {
    /// Number of state components
    ///
    /// Used by the solver to check the dimension of the right-hand side
    fn points(&self) -> usize;

    /// Computes the right-hand side at a given time and state
    ///
    /// # Arguments
    /// * `t` - Current time. Autonomous models ignore it; it is passed at
    ///   every stage so non-autonomous models integrate correctly.
    /// * `state` - Current physical state of the system
    ///
    /// # Returns
    /// dy/dt evaluated at `(t, state)`, with the same dimension as `state`
    fn compute_physics(&self, t: f64, state: &PhysicalState) -> PhysicalState;

    /// Closed-form solution at time `t` starting from `initial` at t = 0
    ///
    /// Models without one keep the default, and the analytical solver
    /// rejects them.
    fn analytical_solution(&self, _t: f64, _initial: &PhysicalState) -> Option<PhysicalState> {
        None
    }

    /// Name of the model (used to display and logging)
    fn name(&self) -> &str;

    /// Description of the model (option)
    fn description(&self) -> Option<&str> {
        None
    }
}
