use std::time::Instant;

use crate::simulation::engine::run;
use crate::simulation::forces::{
    compute_forces_and_potential, compute_separations, NewtonianGravity,
};
use crate::simulation::integrator::IntegratorKind;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec3, System};

/// Build a deterministic ensemble of size `n` — no rand needed, sin/cos
/// of the index spreads the bodies out and keeps every run identical.
fn make_system(n: usize) -> System {
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        let x = NVec3::new(
            (i_f * 0.37).sin() * 5.0,
            (i_f * 0.13).cos() * 5.0,
            (i_f * 0.07).sin() * 5.0,
        );

        // Construction cannot fail: mass is fixed positive
        bodies.push(Body::new(format!("b{i}"), 1.0, x, NVec3::zeros()).unwrap());
    }

    System::new(bodies).unwrap()
}

/// Time a single force-engine evaluation (separations + forces +
/// potential) for a range of ensemble sizes.
pub fn bench_forces() {
    let ns = [8, 16, 32, 64, 128, 256];
    let gravity = NewtonianGravity { g: 0.1 };

    println!("N,force_eval_ms");
    for n in ns {
        let sys = make_system(n);

        // Warm up
        let separations = compute_separations(&sys);
        let _ = compute_forces_and_potential(&sys, &separations, &gravity).unwrap();

        let t0 = Instant::now();
        let separations = compute_separations(&sys);
        let _ = compute_forces_and_potential(&sys, &separations, &gravity).unwrap();
        let elapsed = t0.elapsed().as_secs_f64() * 1000.0;

        println!("{n},{elapsed:.6}");
    }
}

/// Time per-step cost of the Verlet run loop for a range of ensemble
/// sizes. Paste the output directly into a spreadsheet to graph.
pub fn bench_verlet() {
    let ns = [8, 16, 32, 64, 128, 256];
    let steps = 100;
    let gravity = NewtonianGravity { g: 0.1 };

    println!("N,verlet_step_ms");
    for n in ns {
        let mut sys = make_system(n);
        let params = Parameters {
            dt: 0.001,
            numstep: steps,
        };

        let t0 = Instant::now();
        let _ = run(&mut sys, &gravity, &params, IntegratorKind::Verlet).unwrap();
        let per_step = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{n},{per_step:.6}");
    }
}
