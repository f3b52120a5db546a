//! Numerical parameters for a run
//!
//! `Parameters` holds the fixed-step settings the run loop consumes:
//! step size and total step count. Interaction-law constants live with
//! the law itself, not here.

#[derive(Debug, Clone)]
pub struct Parameters {
    pub dt: f64,        // step size, in the scenario's time unit
    pub numstep: usize, // number of steps = number of trajectory samples
}
