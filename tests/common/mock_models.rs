//! Mock physical models for testing
//!
//! These models have known analytical solutions, making them
//! ideal for validating numerical solver accuracy.

#![allow(dead_code)]

use logistic_rs::physics::{PhysicalModel, PhysicalState};

// =================================================================================================
// Exponential Decay: dy/dt = -k*y
// =================================================================================================

/// Exponential decay model: dy/dt = -k*y
///
/// Analytical solution: y(t) = y₀ * exp(-k*t)
pub struct ExponentialDecay {
    pub points: usize,
    pub decay_rate: f64,
}

impl ExponentialDecay {
    pub fn new(points: usize, decay_rate: f64) -> Self {
        Self { points, decay_rate }
    }

    /// Exact value at time t
    pub fn exact(&self, t: f64, y0: f64) -> f64 {
        y0 * (-self.decay_rate * t).exp()
    }
}

impl PhysicalModel for ExponentialDecay {
    fn points(&self) -> usize {
        self.points
    }

    fn compute_physics(&self, _t: f64, state: &PhysicalState) -> PhysicalState {
        state.map(|y| -self.decay_rate * y)
    }

    fn analytical_solution(&self, t: f64, initial: &PhysicalState) -> Option<PhysicalState> {
        Some(initial.map(|y0| self.exact(t, y0)))
    }

    fn name(&self) -> &str {
        "Exponential Decay"
    }
}

// =================================================================================================
// Constant Growth: dy/dt = c
// =================================================================================================

/// Constant growth model: dy/dt = c
///
/// Analytical solution: y(t) = y₀ + c*t
///
/// Every explicit scheme is exact for this problem.
pub struct ConstantGrowth {
    pub points: usize,
    pub growth_rate: f64,
}

impl ConstantGrowth {
    pub fn new(points: usize, growth_rate: f64) -> Self {
        Self { points, growth_rate }
    }
}

impl PhysicalModel for ConstantGrowth {
    fn points(&self) -> usize {
        self.points
    }

    fn compute_physics(&self, _t: f64, state: &PhysicalState) -> PhysicalState {
        state.map(|_| self.growth_rate)
    }

    fn analytical_solution(&self, t: f64, initial: &PhysicalState) -> Option<PhysicalState> {
        Some(initial.map(|y0| y0 + self.growth_rate * t))
    }

    fn name(&self) -> &str {
        "Constant Growth"
    }
}

// =================================================================================================
// Oscillating Source: dy/dt = cos(ω·t)
// =================================================================================================

/// Non-autonomous model: dy/dt = cos(ω·t)
///
/// Analytical solution: y(t) = y₀ + sin(ω·t)/ω
///
/// The right-hand side depends only on t, so a solver that feeds the
/// wrong stage times is caught immediately.
pub struct OscillatingSource {
    pub omega: f64,
}

impl OscillatingSource {
    pub fn new(omega: f64) -> Self {
        Self { omega }
    }
}

impl PhysicalModel for OscillatingSource {
    fn points(&self) -> usize {
        1
    }

    fn compute_physics(&self, t: f64, _state: &PhysicalState) -> PhysicalState {
        PhysicalState::scalar((self.omega * t).cos())
    }

    fn analytical_solution(&self, t: f64, initial: &PhysicalState) -> Option<PhysicalState> {
        Some(initial.map(|y0| y0 + (self.omega * t).sin() / self.omega))
    }

    fn name(&self) -> &str {
        "Oscillating Source"
    }
}
