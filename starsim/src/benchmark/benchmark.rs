use std::time::Instant;

use crate::configuration::config::{GravityModel, ParametersConfig};
use crate::error::Result;
use crate::simulation::scenario::Scene;

const BENCH_WIDTH: f64 = 1200.0;
const BENCH_HEIGHT: f64 = 720.0;
const BENCH_DT: f64 = 1.0 / 60.0;

/// Helper to build a seeded, populated scene of size `n`
fn make_scene(n: usize, gravity: GravityModel) -> Result<Scene> {
    let cfg = ParametersConfig {
        particle_count: n as i64,
        seed: Some(42),
        gravity,
        ..ParametersConfig::default()
    };
    let mut scene = Scene::configure(&cfg)?;
    scene.reset(BENCH_WIDTH, BENCH_HEIGHT)?;
    Ok(scene)
}

/// Time `Scene::step` for a range of n with both gravity models
/// Paste output directly into a spreadsheet to graph the n^2 curve
pub fn bench_step() -> Result<()> {
    println!("N,softened_ms,visible_only_ms");

    for n in (250..=4000).step_by(250) {
        // Small n: average over a few steps to smooth noise
        let steps = if n <= 1000 { 10 } else { 2 };

        let mut row = Vec::with_capacity(2);
        for gravity in [GravityModel::Softened, GravityModel::VisibleOnly] {
            let mut scene = make_scene(n, gravity)?;

            // Warm-up one step
            scene.step(BENCH_DT)?;

            let t0 = Instant::now();
            for _ in 0..steps {
                scene.step(BENCH_DT)?;
            }
            let elapsed = t0.elapsed().as_secs_f64() * 1000.0; // ms total
            row.push(elapsed / steps as f64);
        }

        println!("{},{:.6},{:.6}", n, row[0], row[1]);
    }

    Ok(())
}
