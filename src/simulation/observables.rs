//! Observable extraction over a completed trajectory
//!
//! Pure read-only post-processing: apsides (min/max separation against a
//! reference body), orbital/vibrational periods via local-maximum
//! detection on a 1-D signal, the energy-deviation ratio used to judge
//! integrator accuracy, and the spectroscopic wavenumber for the
//! two-body oscillator case. All functions may be invoked repeatedly and
//! in any order.

use std::fmt;

use super::states::System;
use super::trajectory::Trajectory;
use crate::error::SimError;

/// Speed of light in cm/s, for wavenumber conversion.
pub const C_CM_PER_S: f64 = 2.99792458e10;

/// One internal time unit of the amu / angstrom / eV system in seconds —
/// sqrt(amu * A^2 / eV). Converts an oscillation period measured in
/// simulation time units into seconds.
pub const TIME_UNIT_SECONDS: f64 = 1.018050571e-14;

/// Coordinate axis used as the period-detection signal for orbits.
const PERIOD_AXIS: usize = 0;

/// Outcome of period detection.
///
/// A run too short to contain two peaks yields `InsufficientData` —
/// a typed "unavailable" distinct from any numeric value, so downstream
/// code cannot accidentally do arithmetic on a sentinel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PeriodEstimate {
    Detected(f64),
    InsufficientData,
}

impl PeriodEstimate {
    pub fn value(&self) -> Option<f64> {
        match self {
            PeriodEstimate::Detected(p) => Some(*p),
            PeriodEstimate::InsufficientData => None,
        }
    }
}

impl fmt::Display for PeriodEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodEstimate::Detected(p) => write!(f, "{p:.8}"),
            PeriodEstimate::InsufficientData => write!(f, "undetectable (fewer than two peaks)"),
        }
    }
}

/// Indices of the interior local maxima of `signal`.
///
/// `k` is a peak iff `signal[k] > signal[k-1] && signal[k] >= signal[k+1]`;
/// a flat plateau therefore reports its first index, which keeps the
/// tie-break deterministic. Endpoints are never peaks.
pub fn find_peaks(signal: &[f64]) -> Vec<usize> {
    let mut peaks = Vec::new();
    for k in 1..signal.len().saturating_sub(1) {
        if signal[k] > signal[k - 1] && signal[k] >= signal[k + 1] {
            peaks.push(k);
        }
    }
    peaks
}

/// Period as the time difference between the first two detected peaks.
pub fn period_from_signal(times: &[f64], signal: &[f64]) -> PeriodEstimate {
    let peaks = find_peaks(signal);
    if peaks.len() < 2 {
        return PeriodEstimate::InsufficientData;
    }
    PeriodEstimate::Detected(times[peaks[1]] - times[peaks[0]])
}

/// Nearest/farthest approach over a distance series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApsisPair {
    pub nearest: f64,  // perihelion / perigee
    pub farthest: f64, // aphelion / apogee
}

impl ApsisPair {
    /// Min/max of a (non-empty) per-step distance series.
    pub fn from_distances(distances: &[f64]) -> Self {
        let mut nearest = f64::INFINITY;
        let mut farthest = f64::NEG_INFINITY;
        for &d in distances {
            nearest = nearest.min(d);
            farthest = farthest.max(d);
        }
        Self { nearest, farthest }
    }

    /// Arithmetic mean of the two apsides.
    pub fn semi_major_axis(&self) -> f64 {
        0.5 * (self.nearest + self.farthest)
    }
}

/// |max - min| / E_0 over a run — the scalar diagnostic for integrator
/// accuracy. The absolute value keeps "smaller is better" meaningful for
/// bound systems, whose total energy (hence E_0) is negative.
pub fn energy_deviation_ratio(energies: &[f64]) -> f64 {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &e in energies {
        lo = lo.min(e);
        hi = hi.max(e);
    }
    ((hi - lo) / energies[0]).abs()
}

/// Which reference a body's apsis pair was measured against.
///
/// A satellite of a moving body (e.g. the Moon) has no meaningful
/// single-reference apsis; it reports `AboutPartner` instead of a
/// heliocentric value.
#[derive(Debug, Clone, PartialEq)]
pub enum Apsis {
    AboutReference(ApsisPair),
    AboutPartner { partner: String, pair: ApsisPair },
}

impl Apsis {
    pub fn pair(&self) -> &ApsisPair {
        match self {
            Apsis::AboutReference(pair) => pair,
            Apsis::AboutPartner { pair, .. } => pair,
        }
    }
}

/// Apsides and period for one body.
#[derive(Debug, Clone)]
pub struct BodyReport {
    pub label: String,
    pub apsis: Apsis,
    pub period: PeriodEstimate,
}

impl BodyReport {
    /// Mean of the apsis pair; every report entry carries a valid pair.
    pub fn semi_major_axis(&self) -> f64 {
        self.apsis.pair().semi_major_axis()
    }
}

impl fmt::Display for BodyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.apsis {
            Apsis::AboutReference(pair) => write!(
                f,
                "{}: perihelion = {:.8}, aphelion = {:.8}, semi-major axis = {:.8}, period = {}",
                self.label,
                pair.nearest,
                pair.farthest,
                pair.semi_major_axis(),
                self.period,
            ),
            Apsis::AboutPartner { partner, pair } => write!(
                f,
                "{} (about {}): perigee = {:.8}, apogee = {:.8}, semi-major axis = {:.8}, period = {}",
                self.label,
                partner,
                pair.nearest,
                pair.farthest,
                pair.semi_major_axis(),
                self.period,
            ),
        }
    }
}

/// Satellite pairing for the orbital analysis: `body` orbits `partner`,
/// so its apsides and period are measured against the partner rather
/// than the shared reference.
#[derive(Debug, Clone)]
pub struct SatellitePair {
    pub body: String,
    pub partner: String,
}

/// Which observables a scenario asks for once the run completes.
#[derive(Debug, Clone)]
pub enum Analysis {
    /// Apsides/periods for every body against a designated reference
    /// (satellites against their partners instead)
    Orbital {
        reference: String,
        satellites: Vec<SatellitePair>,
    },
    /// Two-body oscillator: period, frequency and wavenumber from the
    /// separation signal
    Vibrational,
}

/// Full observable report for an orbital run.
#[derive(Debug, Clone)]
pub struct OrbitalReport {
    pub bodies: Vec<BodyReport>,
    pub energy_deviation: f64,
}

impl fmt::Display for OrbitalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for body in &self.bodies {
            writeln!(f, "{body}")?;
        }
        write!(f, "energy deviation ratio = {:.6e}", self.energy_deviation)
    }
}

/// Full observable report for a two-body oscillator run.
#[derive(Debug, Clone)]
pub struct VibrationalReport {
    pub separation: ApsisPair,
    pub period: PeriodEstimate,
    pub energy_deviation: f64,
}

impl VibrationalReport {
    /// Oscillation frequency in inverse simulation-time units.
    pub fn frequency(&self) -> Option<f64> {
        self.period.value().map(|p| 1.0 / p)
    }

    /// Spectroscopic wavenumber in cm^-1, assuming the amu/angstrom/eV
    /// unit system.
    pub fn wavenumber_cm(&self) -> Option<f64> {
        self.period
            .value()
            .map(|p| 1.0 / (p * TIME_UNIT_SECONDS * C_CM_PER_S))
    }
}

impl fmt::Display for VibrationalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "separation: min = {:.8}, max = {:.8}",
            self.separation.nearest, self.separation.farthest
        )?;
        writeln!(f, "period = {}", self.period)?;
        match (self.frequency(), self.wavenumber_cm()) {
            (Some(freq), Some(wn)) => {
                writeln!(f, "frequency = {freq:.8}")?;
                writeln!(f, "wavenumber = {wn:.4} cm^-1")?;
            }
            _ => writeln!(f, "frequency/wavenumber unavailable")?,
        }
        write!(f, "energy deviation ratio = {:.6e}", self.energy_deviation)
    }
}

/// A completed run's report, either flavor.
#[derive(Debug, Clone)]
pub enum Report {
    Orbital(OrbitalReport),
    Vibrational(VibrationalReport),
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Orbital(r) => write!(f, "{r}"),
            Report::Vibrational(r) => write!(f, "{r}"),
        }
    }
}

/// Extract the observables `analysis` asks for from a completed
/// trajectory. All label lookups go through the ensemble's map and fail
/// with `MissingBody` if absent (scenario construction already validated
/// them, so a failure here means the caller bypassed it).
pub fn extract(
    sys: &System,
    trajectory: &Trajectory,
    analysis: &Analysis,
) -> Result<Report, SimError> {
    match analysis {
        Analysis::Orbital {
            reference,
            satellites,
        } => orbital(sys, trajectory, reference, satellites).map(Report::Orbital),
        Analysis::Vibrational => vibrational(sys, trajectory).map(Report::Vibrational),
    }
}

fn orbital(
    sys: &System,
    trajectory: &Trajectory,
    reference: &str,
    satellites: &[SatellitePair],
) -> Result<OrbitalReport, SimError> {
    let ref_idx = sys.require(reference)?;

    let mut bodies = Vec::new();
    for (i, body) in sys.bodies.iter().enumerate() {
        if i == ref_idx {
            continue;
        }

        let report = match satellites.iter().find(|s| s.body == body.label) {
            // Satellite: apsides and period against the partner, using
            // the coordinate DIFFERENCE as the period signal because the
            // partner itself moves
            Some(sat) => {
                let partner_idx = sys.require(&sat.partner)?;
                let distances = trajectory.distance_between(i, partner_idx);
                let signal = trajectory.axis_difference(i, partner_idx, PERIOD_AXIS);
                BodyReport {
                    label: body.label.clone(),
                    apsis: Apsis::AboutPartner {
                        partner: sat.partner.clone(),
                        pair: ApsisPair::from_distances(&distances),
                    },
                    period: period_from_signal(&trajectory.times, &signal),
                }
            }
            // Plain orbiter: apsides against the reference, period from
            // its own coordinate signal
            None => {
                let distances = trajectory.distance_between(i, ref_idx);
                let signal = trajectory.axis_signal(i, PERIOD_AXIS);
                BodyReport {
                    label: body.label.clone(),
                    apsis: Apsis::AboutReference(ApsisPair::from_distances(&distances)),
                    period: period_from_signal(&trajectory.times, &signal),
                }
            }
        };
        bodies.push(report);
    }

    Ok(OrbitalReport {
        bodies,
        energy_deviation: energy_deviation_ratio(&trajectory.energies),
    })
}

fn vibrational(sys: &System, trajectory: &Trajectory) -> Result<VibrationalReport, SimError> {
    if sys.bodies.len() != 2 {
        return Err(SimError::MorseBodyCount(sys.bodies.len()));
    }

    let distances = trajectory.distance_between(0, 1);
    Ok(VibrationalReport {
        separation: ApsisPair::from_distances(&distances),
        period: period_from_signal(&trajectory.times, &distances),
        energy_deviation: energy_deviation_ratio(&trajectory.energies),
    })
}
