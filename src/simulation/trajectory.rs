//! Trajectory storage and sample extraction
//!
//! Three parallel arrays indexed by step — `times`, `energies`, and
//! per-body `positions` — populated monotonically by the run loop and
//! read-only afterwards. Also provides the 1-D signals the observable
//! extractor works on and the per-step XYZ serialization.

use std::io::{self, Write};

use super::states::{NVec3, System};

#[derive(Debug, Clone)]
pub struct Trajectory {
    pub times: Vec<f64>,           // elapsed time per step
    pub positions: Vec<Vec<NVec3>>, // positions[body][step]
    pub energies: Vec<f64>,        // total system energy per step
}

impl Trajectory {
    pub fn with_capacity(nbodies: usize, numstep: usize) -> Self {
        Self {
            times: Vec::with_capacity(numstep),
            positions: vec![Vec::with_capacity(numstep); nbodies],
            energies: Vec::with_capacity(numstep),
        }
    }

    /// Append one sample: the current time, every body's position, and
    /// the total energy.
    pub fn record(&mut self, t: f64, sys: &System, energy: f64) {
        self.times.push(t);
        for (series, b) in self.positions.iter_mut().zip(sys.bodies.iter()) {
            series.push(b.x);
        }
        self.energies.push(energy);
    }

    pub fn num_steps(&self) -> usize {
        self.times.len()
    }

    pub fn num_bodies(&self) -> usize {
        self.positions.len()
    }

    /// Euclidean distance between bodies `i` and `j` at every step.
    pub fn distance_between(&self, i: usize, j: usize) -> Vec<f64> {
        self.positions[i]
            .iter()
            .zip(self.positions[j].iter())
            .map(|(a, b)| (a - b).norm())
            .collect()
    }

    /// One coordinate axis of body `i` at every step — the raw signal
    /// for period detection on a body orbiting a fixed reference.
    pub fn axis_signal(&self, i: usize, axis: usize) -> Vec<f64> {
        self.positions[i].iter().map(|p| p[axis]).collect()
    }

    /// Coordinate-axis difference between bodies `i` and `j` at every
    /// step — the period-detection signal for a body orbiting a moving
    /// reference (e.g. the Moon about the Earth).
    pub fn axis_difference(&self, i: usize, j: usize, axis: usize) -> Vec<f64> {
        self.positions[i]
            .iter()
            .zip(self.positions[j].iter())
            .map(|(a, b)| a[axis] - b[axis])
            .collect()
    }

    /// Write the whole trajectory in XYZ form: per step, the body count,
    /// a `Point = <step>` line (1-based step index), then one
    /// `label x y z` line per body in the `Body` display format.
    pub fn write_xyz<W: Write>(&self, sys: &System, out: &mut W) -> io::Result<()> {
        let n = self.num_bodies();
        for step in 0..self.num_steps() {
            writeln!(out, "{n}")?;
            writeln!(out, "Point = {}", step + 1)?;
            for (body, series) in sys.bodies.iter().zip(self.positions.iter()) {
                let p = series[step];
                writeln!(
                    out,
                    "{} {:.8} {:.8} {:.8}",
                    body.label, p[0], p[1], p[2]
                )?;
            }
        }
        Ok(())
    }
}
