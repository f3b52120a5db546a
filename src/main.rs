use orbsim::{extract, run, Scenario, ScenarioConfig};
use orbsim::{bench_forces, bench_verlet};

use anyhow::Result;
use clap::Parser;
use log::info;

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "solar_system.yaml")]
    file_name: String,

    /// Where the XYZ trajectory is written
    #[arg(short, long, default_value = "trajectory.xyz")]
    output: PathBuf,

    /// Run the force/integrator benchmarks instead of a scenario
    #[arg(long)]
    bench: bool,

    #[arg(short, long)]
    verbose: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    if args.bench {
        bench_forces();
        bench_verlet();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build_scenario(scenario_cfg)?;

    info!(
        "running {} bodies, {} steps of dt = {}",
        scenario.system.bodies.len(),
        scenario.parameters.numstep,
        scenario.parameters.dt
    );

    let trajectory = run(
        &mut scenario.system,
        scenario.law.as_ref(),
        &scenario.parameters,
        scenario.integrator,
    )?;

    let out = File::create(&args.output)?;
    let mut writer = BufWriter::new(out);
    trajectory.write_xyz(&scenario.system, &mut writer)?;
    info!("trajectory written to {}", args.output.display());

    let report = extract(&scenario.system, &trajectory, &scenario.analysis)?;
    println!("{report}");

    Ok(())
}
