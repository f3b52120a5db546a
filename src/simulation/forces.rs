//! Pairwise interaction laws and the force engine
//!
//! Defines the [`InteractionLaw`] trait with two implementations:
//! inverse-square Newtonian gravity (any number of bodies) and the Morse
//! potential (strictly two-body), plus the separation-matrix and
//! force/potential accumulation routines driving both.

use crate::error::SimError;
use crate::simulation::states::{Body, NVec3, System};

/// Trait for pairwise central force laws.
///
/// `sep` is the separation vector `a.x - b.x`; `force` returns the force
/// ON `a` DUE TO `b`. Implementations must treat zero separation as a
/// fatal precondition violation rather than letting inf/NaN leak into
/// the trajectory.
pub trait InteractionLaw {
    fn force(&self, a: &Body, b: &Body, sep: &NVec3) -> Result<NVec3, SimError>;
    fn potential(&self, a: &Body, b: &Body, sep: &NVec3) -> Result<f64, SimError>;
}

/// Inverse-square Newtonian gravity.
///
/// `g` is the gravitational constant in whatever unit system the
/// scenario uses (e.g. AU / Earth-mass / day for solar-system runs).
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
}

impl InteractionLaw for NewtonianGravity {
    fn force(&self, a: &Body, b: &Body, sep: &NVec3) -> Result<NVec3, SimError> {
        // Squared separation distance |sep|^2
        let r2 = sep.norm_squared();
        if r2 == 0.0 {
            return Err(SimError::CoincidentBodies {
                first: a.label.clone(),
                second: b.label.clone(),
            });
        }

        // 1 / |sep|
        let inv_r = r2.sqrt().recip();

        // 1 / |sep|^3, the distance factor in
        //   F = -g m_a m_b sep / |sep|^3
        let inv_r3 = inv_r * inv_r * inv_r;

        // coef = -g m_a m_b / |sep|^3; the minus sign makes the force
        // on `a` point toward `b` (sep points from b to a). The mass
        // product is grouped so both pair orders round identically and
        // the reaction force stays an exact negation.
        let coef = -self.g * (a.m * b.m) * inv_r3;

        Ok(coef * sep)
    }

    fn potential(&self, a: &Body, b: &Body, sep: &NVec3) -> Result<f64, SimError> {
        let r = sep.norm();
        if r == 0.0 {
            return Err(SimError::CoincidentBodies {
                first: a.label.clone(),
                second: b.label.clone(),
            });
        }
        Ok(-self.g * (a.m * b.m) / r)
    }
}

/// Morse potential for a two-atom oscillator.
///
/// U(r) = d_e ((1 - exp(-alpha (r - r_e)))^2 - 1); the force on `a` is
/// -dU/dr along the unit separation vector. Masses do not enter the law.
/// Strictly pairwise — scenario construction rejects ensembles with more
/// than two bodies.
pub struct MorsePotential {
    pub r_e: f64,   // equilibrium separation
    pub d_e: f64,   // well depth
    pub alpha: f64, // stiffness
}

impl InteractionLaw for MorsePotential {
    fn force(&self, a: &Body, b: &Body, sep: &NVec3) -> Result<NVec3, SimError> {
        let r = sep.norm();
        if r == 0.0 {
            return Err(SimError::CoincidentBodies {
                first: a.label.clone(),
                second: b.label.clone(),
            });
        }

        let e = (-self.alpha * (r - self.r_e)).exp();

        // F_a = -2 alpha d_e (1 - e) e * sep/r
        // For r > r_e the factor (1 - e) is positive and the force pulls
        // `a` back toward `b`; the partner's force is the exact negation
        // because both orders see the same r and a bit-negated sep.
        let coef = -2.0 * self.alpha * self.d_e * (1.0 - e) * e / r;

        Ok(coef * sep)
    }

    fn potential(&self, a: &Body, b: &Body, sep: &NVec3) -> Result<f64, SimError> {
        let r = sep.norm();
        if r == 0.0 {
            return Err(SimError::CoincidentBodies {
                first: a.label.clone(),
                second: b.label.clone(),
            });
        }
        let e = (-self.alpha * (r - self.r_e)).exp();
        Ok(self.d_e * ((1.0 - e) * (1.0 - e) - 1.0))
    }
}

/// Full separation matrix, `sep[i][j] = x_i - x_j`.
///
/// Only the `i > j` half is computed by subtraction; the mirror half is
/// set by negation. This halves the arithmetic and, more importantly,
/// guarantees bit-exact antisymmetry — computing both orders
/// independently can disagree in the last bit and silently break
/// momentum conservation. The diagonal stays zero.
pub fn compute_separations(sys: &System) -> Vec<Vec<NVec3>> {
    let n = sys.bodies.len();
    let mut sep = vec![vec![NVec3::zeros(); n]; n];
    for i in 0..n {
        for j in 0..i {
            let s = sys.bodies[i].x - sys.bodies[j].x;
            sep[i][j] = s;
            sep[j][i] = -s;
        }
    }
    sep
}

/// Net force on every body and the total potential energy of the
/// ensemble under `law`.
///
/// Visits every ordered pair (i, j), i != j; each unordered pair is
/// therefore counted twice, and the potential sum is halved to correct
/// the double count. O(n^2) — the dominant cost per step; n stays in the
/// tens here, so no spatial acceleration structure.
pub fn compute_forces_and_potential(
    sys: &System,
    separations: &[Vec<NVec3>],
    law: &dyn InteractionLaw,
) -> Result<(Vec<NVec3>, f64), SimError> {
    let n = sys.bodies.len();
    let mut forces = vec![NVec3::zeros(); n];
    let mut potential = 0.0;

    for i in 0..n {
        let bi = &sys.bodies[i];
        for j in 0..n {
            if i == j {
                continue;
            }
            let bj = &sys.bodies[j];
            forces[i] += law.force(bi, bj, &separations[i][j])?;
            potential += law.potential(bi, bj, &separations[i][j])?;
        }
    }

    Ok((forces, potential / 2.0))
}
