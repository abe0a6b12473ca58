//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`ViewportConfig`]   – size of the drawing area the bodies live in
//! - [`ParametersConfig`] – physical constants and population bounds
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! viewport:
//!   width: 1200.0
//!   height: 720.0
//!
//! parameters:
//!   G: 10.0                 # gravitational constant
//!   eps: 0.1                # softening length
//!   max_mass: 1.0           # masses are drawn from [1, max_mass]
//!   max_speed: 10.0         # speed components are drawn from [0, max_speed)
//!   particle_count: 1000
//!   radius: 3.0             # optional, draw radius of every body
//!   seed: 42                # optional, omit for a different scene each run
//!   gravity: "softened"     # optional, or "visible_only"
//! ```
//!
//! Nothing here is validated; `Parameters::from_config` does that when a
//! scene is configured.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Which pairwise gravity formulation a scene uses.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GravityModel {
    /// Acceleration form with a (r^2 + eps^2)^(3/2) denominator. Every pair interacts.
    #[serde(rename = "softened")]
    #[default]
    Softened,

    /// Inverse-square force with eps as a distance floor. Pairs with a body
    /// outside the viewport are skipped.
    #[serde(rename = "visible_only")]
    VisibleOnly,
}

/// Size of the area bodies are spawned into and drawn on.
#[derive(Deserialize, Debug, Clone, Copy)]
pub struct ViewportConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 720.0,
        }
    }
}

/// Physical and population parameters, as typed by the user.
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    #[serde(rename = "G")]
    pub g: f64,               // gravitational constant
    pub eps: f64,             // softening length
    pub max_mass: f64,        // upper bound of the mass draw
    pub max_speed: f64,       // upper bound of each velocity component draw
    pub particle_count: i64,  // signed so a bad count is reported instead of failing to parse
    #[serde(default = "default_radius")]
    pub radius: f64,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub gravity: GravityModel,
}

fn default_radius() -> f64 {
    3.0
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            g: 10.0,
            eps: 0.1,
            max_mass: 1.0,
            max_speed: 10.0,
            particle_count: 1000,
            radius: default_radius(),
            seed: None,
            gravity: GravityModel::default(),
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub viewport: ViewportConfig,
    pub parameters: ParametersConfig,
}

/// Read a scenario from a YAML file.
pub fn load_scenario(path: &Path) -> Result<ScenarioConfig> {
    let file = File::open(path).with_context(|| format!("failed to open scenario {}", path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse scenario {}", path.display()))?;
    Ok(scenario_cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_scenario_with_defaults() {
        let yaml = "
parameters:
  G: 1.0
  eps: 0.5
  max_mass: 4.0
  max_speed: 2.0
  particle_count: 10
";
        let cfg: ScenarioConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.parameters.g, 1.0);
        assert_eq!(cfg.parameters.particle_count, 10);
        assert_eq!(cfg.parameters.radius, 3.0);
        assert_eq!(cfg.parameters.seed, None);
        assert_eq!(cfg.parameters.gravity, GravityModel::Softened);
        assert_eq!(cfg.viewport.width, 1200.0);
    }

    #[test]
    fn parses_gravity_model_and_negative_count() {
        let yaml = "
viewport: { width: 300.0, height: 200.0 }
parameters:
  G: 10.0
  eps: 0.1
  max_mass: 1.0
  max_speed: 10.0
  particle_count: -1
  seed: 7
  gravity: visible_only
";
        let cfg: ScenarioConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.parameters.gravity, GravityModel::VisibleOnly);
        assert_eq!(cfg.parameters.particle_count, -1);
        assert_eq!(cfg.parameters.seed, Some(7));
        assert_eq!(cfg.viewport.height, 200.0);
    }
}
