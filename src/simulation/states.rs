//! Core state types for the simulation.
//!
//! Defines the body/ensemble structs:
//! - `Body`   — immutable identity (label, mass) + mutable kinematics
//! - `System` — ordered collection of bodies plus the current time `t`
//!
//! `System` also owns the label→index map used to identify species
//! ("Sun", "Moon", ...) without relying on list order.

use std::collections::HashMap;
use std::fmt;

use nalgebra::Vector3;

use crate::error::SimError;

pub type NVec3 = Vector3<f64>;

/// Number of decimal places used by the record / trajectory-line formats
const COORD_DECIMALS: usize = 8;

#[derive(Debug, Clone)]
pub struct Body {
    pub label: String, // species identifier, treated as unique by lookups
    pub m: f64,        // mass, fixed at construction, always > 0
    pub x: NVec3,      // position
    pub v: NVec3,      // velocity
}

impl Body {
    /// Construct a body, rejecting non-positive mass up front so the
    /// update rules never divide by zero mid-run.
    pub fn new(label: impl Into<String>, m: f64, x: NVec3, v: NVec3) -> Result<Self, SimError> {
        let label = label.into();
        if m <= 0.0 {
            return Err(SimError::InvalidMass { label, mass: m });
        }
        Ok(Self { label, m, x, v })
    }

    /// Kinetic energy, 0.5 m |v|^2
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.m * self.v.norm_squared()
    }

    /// Linear momentum, m v
    pub fn momentum(&self) -> NVec3 {
        self.m * self.v
    }

    /// First-order position update: x += dt v
    /// No force input; only the explicit Euler scheme uses this.
    pub fn update_position_first_order(&mut self, dt: f64) {
        self.x += dt * self.v;
    }

    /// Second-order position update: x += dt v + dt^2/(2m) F
    ///
    /// The dt^2 coefficient is 1/(2m), NOT 1/(2m^2): F/m is already the
    /// acceleration, so the mass appears exactly once. Verlet is only
    /// second-order accurate with this coefficient.
    pub fn update_position_second_order(&mut self, dt: f64, force: &NVec3) {
        self.x += dt * self.v + (dt * dt / (2.0 * self.m)) * force;
    }

    /// Velocity update: v += dt F / m
    pub fn update_velocity(&mut self, dt: f64, force: &NVec3) {
        self.v += (dt / self.m) * force;
    }

    /// Interpret an already-split record `label mass x y z vx vy vz`.
    /// File reading and tokenization are the caller's concern.
    pub fn from_tokens(tokens: &[&str]) -> Result<Self, SimError> {
        if tokens.len() != 8 {
            return Err(SimError::MalformedRecord(format!(
                "expected 8 tokens (label mass x y z vx vy vz), got {}",
                tokens.len()
            )));
        }
        let mut nums = [0.0f64; 7];
        for (slot, tok) in nums.iter_mut().zip(&tokens[1..]) {
            *slot = tok
                .parse()
                .map_err(|_| SimError::MalformedRecord(format!("'{tok}' is not a number")))?;
        }
        Body::new(
            tokens[0],
            nums[0],
            NVec3::new(nums[1], nums[2], nums[3]),
            NVec3::new(nums[4], nums[5], nums[6]),
        )
    }

    /// Serialize to the record form accepted by [`Body::from_tokens`].
    pub fn to_record(&self) -> String {
        format!(
            "{} {:.p$} {:.p$} {:.p$} {:.p$} {:.p$} {:.p$} {:.p$}",
            self.label,
            self.m,
            self.x[0],
            self.x[1],
            self.x[2],
            self.v[0],
            self.v[1],
            self.v[2],
            p = COORD_DECIMALS,
        )
    }
}

/// Trajectory line form, `label x y z` — the per-step serialization
/// contract used by the XYZ writer.
impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:.p$} {:.p$} {:.p$}",
            self.label,
            self.x[0],
            self.x[1],
            self.x[2],
            p = COORD_DECIMALS,
        )
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>,         // collection of bodies, exclusively owned
    pub t: f64,                    // time
    index: HashMap<String, usize>, // label -> first index with that label
}

impl System {
    /// Build an ensemble at t = 0. Rejects an empty body list; each
    /// body's mass was already validated by [`Body::new`]. Duplicate
    /// labels keep their first index.
    pub fn new(bodies: Vec<Body>) -> Result<Self, SimError> {
        if bodies.is_empty() {
            return Err(SimError::EmptyEnsemble);
        }
        let mut index = HashMap::with_capacity(bodies.len());
        for (i, b) in bodies.iter().enumerate() {
            index.entry(b.label.clone()).or_insert(i);
        }
        Ok(Self { bodies, t: 0.0, index })
    }

    /// Index of the body with this label, if present.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    /// Index of the body with this label, failing fast otherwise.
    pub fn require(&self, label: &str) -> Result<usize, SimError> {
        self.index_of(label)
            .ok_or_else(|| SimError::MissingBody(label.to_string()))
    }

    /// Total kinetic energy of the ensemble.
    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }

    /// Total linear momentum of the ensemble.
    pub fn total_momentum(&self) -> NVec3 {
        self.bodies
            .iter()
            .fold(NVec3::zeros(), |acc, b| acc + b.momentum())
    }
}
