//! Error types for the simulation core.
//!
//! Precondition violations (bad mass, coincident bodies, unknown scheme)
//! are fatal and surface immediately with enough context to diagnose;
//! an undetectable period is NOT an error, see
//! [`PeriodEstimate`](crate::simulation::observables::PeriodEstimate).

use thiserror::Error;

/// Unified error type for scenario construction and simulation runs.
#[derive(Error, Debug)]
pub enum SimError {
    /// A body was constructed with zero or negative mass
    #[error("body '{label}' has non-positive mass {mass}")]
    InvalidMass { label: String, mass: f64 },

    /// Two bodies occupy the same point; the force law is undefined there
    #[error("bodies '{first}' and '{second}' are coincident (zero separation)")]
    CoincidentBodies { first: String, second: String },

    /// The scheme selector matched neither "euler" nor "verlet"
    #[error("unknown integration mode '{0}' (expected \"euler\" or \"verlet\")")]
    UnknownIntegrationMode(String),

    /// The Morse law is strictly pairwise and needs exactly two bodies
    #[error("morse interaction requires exactly 2 bodies, scenario has {0}")]
    MorseBodyCount(usize),

    /// An analysis section named a body that is not in the ensemble
    #[error("no body labelled '{0}' in the ensemble")]
    MissingBody(String),

    /// A body record or coordinate vector could not be interpreted
    #[error("malformed body record: {0}")]
    MalformedRecord(String),

    /// A scenario with no bodies cannot be simulated
    #[error("ensemble contains no bodies")]
    EmptyEnsemble,
}
