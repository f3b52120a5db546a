//! Run loop driving the per-step integrators
//!
//! Owns the "previous force" carry-over that velocity Verlet needs and
//! records one trajectory sample per step. Loop termination is a fixed
//! iteration count — no convergence criterion, no early exit; a fatal
//! precondition violation (e.g. coincident bodies) aborts the run with
//! no partial trajectory returned.

use log::debug;

use super::forces::{compute_forces_and_potential, compute_separations, InteractionLaw};
use super::integrator::{euler_step, verlet_step, IntegratorKind};
use super::params::Parameters;
use super::states::System;
use super::trajectory::Trajectory;
use crate::error::SimError;

/// Advance `sys` by `params.numstep` fixed steps of `params.dt` under
/// `law`, sampling elapsed time, every body's position and the total
/// energy (kinetic + potential, after the velocity update) each step.
pub fn run(
    sys: &mut System,
    law: &dyn InteractionLaw,
    params: &Parameters,
    kind: IntegratorKind,
) -> Result<Trajectory, SimError> {
    let n = sys.bodies.len();
    let mut trajectory = Trajectory::with_capacity(n, params.numstep);

    // Initial evaluation: Verlet's first step advances positions with
    // the force at t = 0
    let separations = compute_separations(sys);
    let (mut forces, mut potential) = compute_forces_and_potential(sys, &separations, law)?;
    debug!(
        "initial state: {} bodies, E = {:.6e}",
        n,
        sys.kinetic_energy() + potential
    );

    for step in 0..params.numstep {
        match kind {
            IntegratorKind::Euler => {
                (forces, potential) = euler_step(sys, law, params.dt)?;
            }
            IntegratorKind::Verlet => {
                (forces, potential) = verlet_step(sys, law, params.dt, &forces)?;
            }
        }

        let energy = sys.kinetic_energy() + potential;
        trajectory.record(sys.t, sys, energy);

        if (step + 1) % 1000 == 0 {
            debug!("step {}/{}: E = {:.6e}", step + 1, params.numstep, energy);
        }
    }

    Ok(trajectory)
}
