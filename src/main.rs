use rocketsim::{step_size_sweep, sweep_csv, RunOutcome, Scenario, ScenarioConfig};
use clap::Parser;
use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file, looked up under `scenarios/` unless it is an existing path
    #[arg(short, long, default_value = "earth_orbit.yaml")]
    file: String,

    /// Run a step-size sweep instead of a single run and print CSV
    #[arg(long)]
    sweep: bool,

    /// Step sizes for the sweep (s)
    #[arg(long, value_delimiter = ',', default_values_t = vec![1.0, 5.0, 10.0, 50.0, 100.0])]
    steps: Vec<f64>,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let direct = PathBuf::from(file_name);
    let config_path = if direct.is_file() {
        direct
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
    };
    let file = File::open(&config_path)
        .with_context(|| format!("opening scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("parsing scenario {}", config_path.display()))?;
    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let scenario_cfg = load_scenario_from_yaml(&args.file)?;
    let scenario = Scenario::build_scenario(&scenario_cfg).context("invalid scenario")?;

    if args.sweep {
        let rows = step_size_sweep(&scenario, &args.steps).context("invalid sweep step")?;
        print!("{}", sweep_csv(&rows));
        return Ok(());
    }

    let mut run = scenario.start().context("invalid initial state")?;
    info!("initial: {}", run.summary());

    match run.run() {
        RunOutcome::Completed => info!(steps = run.steps(), "target time reached"),
        RunOutcome::Crashed { body_name, final_state } => {
            info!(t = final_state.t, "rocket has crashed into the {body_name}")
        }
    }

    let log = run.log();
    info!("final: {}", run.summary());
    if let Some(e) = log.energy_at(log.len() - 1) {
        info!(
            kinetic = e.kinetic,
            potential = e.potential,
            total = e.total,
            drift = log.relative_energy_drift().unwrap_or(0.0),
            "final energies"
        );
    }

    Ok(())
}
