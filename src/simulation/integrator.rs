//! Fixed-step time integrators
//!
//! Provides the two per-step update rules — first-order symplectic Euler
//! and second-order velocity Verlet — plus the scheme selector parsed
//! from configuration. Both steps mutate the system in place and return
//! the force/potential evaluation at the new positions so the run loop
//! can record energy and carry forces into the next Verlet step.

use std::str::FromStr;

use super::forces::{compute_forces_and_potential, compute_separations, InteractionLaw};
use super::states::{NVec3, System};
use crate::error::SimError;

/// Which stepping scheme the run loop uses.
///
/// Selected by the scenario's `integrator:` string; anything other than
/// `"euler"` or `"verlet"` is rejected before any stepping begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegratorKind {
    /// Symplectic Euler: first-order, energy drifts monotonically over
    /// long runs (expected, not a bug)
    Euler,
    /// Velocity Verlet: second-order and symplectic, bounded energy
    /// oscillation — the preferred scheme for long-horizon orbital runs
    Verlet,
}

impl FromStr for IntegratorKind {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "euler" => Ok(IntegratorKind::Euler),
            "verlet" => Ok(IntegratorKind::Verlet),
            other => Err(SimError::UnknownIntegrationMode(other.to_string())),
        }
    }
}

/// Advance the system by one symplectic-Euler step.
///
/// Order matters: all positions move with the CURRENT velocities, forces
/// are recomputed at the new positions, then all velocities update from
/// the NEW forces. Returns the new forces and potential.
pub fn euler_step(
    sys: &mut System,
    law: &dyn InteractionLaw,
    dt: f64,
) -> Result<(Vec<NVec3>, f64), SimError> {
    // Drift: x_n+1 = x_n + dt v_n
    for b in sys.bodies.iter_mut() {
        b.update_position_first_order(dt);
    }

    // Forces at the new positions
    let separations = compute_separations(sys);
    let (forces, potential) = compute_forces_and_potential(sys, &separations, law)?;

    // Kick: v_n+1 = v_n + dt F_n+1 / m
    for (b, f) in sys.bodies.iter_mut().zip(forces.iter()) {
        b.update_velocity(dt, f);
    }

    sys.t += dt;
    Ok((forces, potential))
}

/// Advance the system by one velocity-Verlet step.
///
/// `forces_old` is the evaluation at the CURRENT positions — either the
/// initial force computation or the previous step's return value. The
/// velocity update averages old and new forces; the returned new forces
/// must be carried into the next call.
pub fn verlet_step(
    sys: &mut System,
    law: &dyn InteractionLaw,
    dt: f64,
    forces_old: &[NVec3],
) -> Result<(Vec<NVec3>, f64), SimError> {
    // x_n+1 = x_n + dt v_n + dt^2/(2m) F_n
    for (b, f) in sys.bodies.iter_mut().zip(forces_old.iter()) {
        b.update_position_second_order(dt, f);
    }

    // F_n+1 from x_n+1
    let separations = compute_separations(sys);
    let (forces_new, potential) = compute_forces_and_potential(sys, &separations, law)?;

    // v_n+1 = v_n + dt (F_n + F_n+1) / (2m)
    for (b, (fo, fn_)) in sys
        .bodies
        .iter_mut()
        .zip(forces_old.iter().zip(forces_new.iter()))
    {
        let avg = 0.5 * (fo + fn_);
        b.update_velocity(dt, &avg);
    }

    sys.t += dt;
    Ok((forces_new, potential))
}
