use starsim::{load_scenario, ScenarioConfig, Scene};
use starsim::{bench_step, run_2d};

use anyhow::{Context, Result};
use clap::Parser;

use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file, looked up in `scenarios/` when not found as given
    #[arg(short, default_value = "default.yaml")]
    file_name: String,

    /// Time `Scene::step` for growing body counts instead of opening the viewer
    #[arg(long)]
    bench: bool,
}

fn scenario_path(file_name: &str) -> PathBuf {
    let given = PathBuf::from(file_name);
    if given.exists() {
        return given;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        bench_step()?;
        return Ok(());
    }

    let config_path = scenario_path(&args.file_name);
    let scenario_cfg: ScenarioConfig = load_scenario(&config_path)?;

    let scene = Scene::from_config(scenario_cfg)
        .with_context(|| format!("invalid scenario {}", config_path.display()))?;
    run_2d(scene, Some(config_path));

    Ok(())
}
