//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]      – scheme selector for the time integrator
//! - [`ParametersConfig`]  – step size and step count
//! - [`InteractionConfig`] – which force law to use and its constants
//! - [`BodyConfig`]        – initial state for each body
//! - [`AnalysisConfig`]    – which observables to extract after the run
//! - [`ScenarioConfig`]    – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example solar-system scenario matching these types:
//!
//! ```yaml
//! engine:
//!   integrator: "verlet"     # or "euler"
//!
//! parameters:
//!   dt: 1.0                  # step size (here: days)
//!   numstep: 3650            # total steps / trajectory samples
//!
//! interaction:
//!   law: gravity
//!   g: 8.887724591822896e-10 # AU^3 / (Earth-mass day^2)
//!
//! bodies:
//!   - label: sun
//!     m: 332946.0
//!     x: [ 0.0, 0.0, 0.0 ]
//!     v: [ 0.0, 0.0, 0.0 ]
//!   - label: earth
//!     m: 1.0
//!     x: [ 0.9833, 0.0, 0.0 ]
//!     v: [ 0.0, 0.017484654492, 0.0 ]
//!
//! analysis:
//!   mode: orbital
//!   reference: sun
//!   satellites:
//!     - body: moon
//!       partner: earth
//! ```
//!
//! A two-atom oscillator instead selects `law: morse` with `r_e`, `d_e`,
//! `alpha` and `mode: vibrational`.
//!
//! The scenario builder maps this configuration into the runtime types;
//! all validation (positive masses, known integrator string, Morse body
//! count, analysis labels) happens there, not here.

use serde::Deserialize;

/// Scheme selector for the time integrator.
///
/// Kept as a raw string so an unrecognized name surfaces as the core's
/// `UnknownIntegrationMode` error during scenario construction rather
/// than as a serde decode error.
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub integrator: String, // "euler" or "verlet"
}

/// Fixed-step run parameters.
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub dt: f64,        // step size, any positive real
    pub numstep: usize, // total number of steps
}

/// Which pairwise law the force engine evaluates, with its constants.
#[derive(Deserialize, Debug, Clone)]
#[serde(tag = "law", rename_all = "lowercase")]
pub enum InteractionConfig {
    /// Inverse-square gravity; `g` in units consistent with the
    /// scenario's position/mass/time units
    Gravity { g: f64 },
    /// Morse potential, strictly two-body
    Morse { r_e: f64, d_e: f64, alpha: f64 },
}

/// Configuration for a single body's initial state.
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub label: String, // species identifier, treated as unique
    pub m: f64,        // mass
    pub x: Vec<f64>,   // initial position, 3 components
    pub v: Vec<f64>,   // initial velocity, 3 components
}

/// One satellite pairing: `body` orbits `partner`, so its apsides and
/// period are measured against the partner, not the shared reference.
#[derive(Deserialize, Debug, Clone)]
pub struct SatelliteConfig {
    pub body: String,
    pub partner: String,
}

/// Which observables to extract once the run completes.
#[derive(Deserialize, Debug, Clone)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum AnalysisConfig {
    Orbital {
        reference: String, // e.g. "sun"
        #[serde(default)]
        satellites: Vec<SatelliteConfig>,
    },
    Vibrational,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,           // integrator selection
    pub parameters: ParametersConfig,   // step size and count
    pub interaction: InteractionConfig, // force law and constants
    pub bodies: Vec<BodyConfig>,        // initial state of the ensemble
    pub analysis: AnalysisConfig,       // observables to extract
}
