//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime
//! bundle consumed by the run loop:
//! - numerical parameters (`Parameters`)
//! - the integrator scheme (`IntegratorKind`)
//! - system state (`System` with bodies at t = 0)
//! - the active interaction law (boxed `InteractionLaw`)
//! - the analysis to run afterwards (`Analysis`)
//!
//! All fail-fast validation happens here, before any stepping: positive
//! masses, a known integrator string, the Morse two-body restriction,
//! and the presence of every label the analysis section names.

use crate::configuration::config::{
    AnalysisConfig, BodyConfig, InteractionConfig, ScenarioConfig,
};
use crate::error::SimError;
use crate::simulation::forces::{InteractionLaw, MorsePotential, NewtonianGravity};
use crate::simulation::integrator::IntegratorKind;
use crate::simulation::observables::{Analysis, SatellitePair};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec3, System};

/// A fully-initialized runtime scenario: everything the driver needs to
/// run the integration loop and extract observables afterwards.
pub struct Scenario {
    pub parameters: Parameters,
    pub integrator: IntegratorKind,
    pub system: System,
    pub law: Box<dyn InteractionLaw + Send + Sync>,
    pub analysis: Analysis,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimError> {
        // Bodies: map `BodyConfig` -> runtime `Body`; Body::new rejects
        // non-positive masses
        let bodies = cfg
            .bodies
            .iter()
            .map(|bc: &BodyConfig| {
                Body::new(
                    bc.label.clone(),
                    bc.m,
                    vec3(&bc.x, &bc.label)?,
                    vec3(&bc.v, &bc.label)?,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        // Initial system state: bodies at t = 0, label map built once
        let system = System::new(bodies)?;

        let parameters = Parameters {
            dt: cfg.parameters.dt,
            numstep: cfg.parameters.numstep,
        };

        // Unrecognized scheme names are rejected here, before any stepping
        let integrator: IntegratorKind = cfg.engine.integrator.parse()?;

        // Force law from configuration; Morse is strictly pairwise
        let law: Box<dyn InteractionLaw + Send + Sync> = match cfg.interaction {
            InteractionConfig::Gravity { g } => Box::new(NewtonianGravity { g }),
            InteractionConfig::Morse { r_e, d_e, alpha } => {
                if system.bodies.len() != 2 {
                    return Err(SimError::MorseBodyCount(system.bodies.len()));
                }
                Box::new(MorsePotential { r_e, d_e, alpha })
            }
        };

        // Analysis: resolve every named label now so a typo fails the
        // scenario instead of the report
        let analysis = match cfg.analysis {
            AnalysisConfig::Orbital {
                reference,
                satellites,
            } => {
                system.require(&reference)?;
                for sat in &satellites {
                    system.require(&sat.body)?;
                    system.require(&sat.partner)?;
                }
                Analysis::Orbital {
                    reference,
                    satellites: satellites
                        .into_iter()
                        .map(|s| SatellitePair {
                            body: s.body,
                            partner: s.partner,
                        })
                        .collect(),
                }
            }
            AnalysisConfig::Vibrational => {
                if system.bodies.len() != 2 {
                    return Err(SimError::MorseBodyCount(system.bodies.len()));
                }
                Analysis::Vibrational
            }
        };

        Ok(Self {
            parameters,
            integrator,
            system,
            law,
            analysis,
        })
    }
}

/// Three config components -> NVec3, rejecting wrong arity.
fn vec3(components: &[f64], label: &str) -> Result<NVec3, SimError> {
    match components {
        [x, y, z] => Ok(NVec3::new(*x, *y, *z)),
        other => Err(SimError::MalformedRecord(format!(
            "body '{label}' needs 3 vector components, got {}",
            other.len()
        ))),
    }
}
