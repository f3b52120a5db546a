pub mod simulation;
pub mod configuration;
pub mod benchmark;
pub mod error;

pub use simulation::states::{Body, System, NVec3};
pub use simulation::params::Parameters;
pub use simulation::forces::{
    compute_forces_and_potential, compute_separations, InteractionLaw, MorsePotential,
    NewtonianGravity,
};
pub use simulation::integrator::{euler_step, verlet_step, IntegratorKind};
pub use simulation::engine::run;
pub use simulation::trajectory::Trajectory;
pub use simulation::observables::{
    energy_deviation_ratio, extract, find_peaks, period_from_signal, Analysis, Apsis, ApsisPair,
    BodyReport, OrbitalReport, PeriodEstimate, Report, SatellitePair, VibrationalReport,
};
pub use simulation::scenario::Scenario;

pub use configuration::config::{
    AnalysisConfig, BodyConfig, EngineConfig, InteractionConfig, ParametersConfig,
    SatelliteConfig, ScenarioConfig,
};

pub use error::SimError;

pub use benchmark::benchmark::{bench_forces, bench_verlet};
