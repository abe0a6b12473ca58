//! Validated runtime parameters for one scene
//!
//! `Parameters` holds:
//! - gravitational constant and softening (`g`, `eps`),
//! - population bounds (`max_mass`, `max_speed`, `particle_count`, `radius`),
//! - the gravity formulation and the optional random seed
//!
//! Values only reach this type through [`Parameters::from_config`], so the
//! integrator never re-checks them.

use crate::configuration::config::{GravityModel, ParametersConfig};
use crate::error::{Result, SimError};

/// Smallest mass a generated body can have.
pub const MIN_MASS: f64 = 1.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub g: f64, // gravitational constant
    pub eps: f64, // softening length
    pub max_mass: f64, // masses drawn from [MIN_MASS, max_mass]
    pub max_speed: f64, // speed components drawn from [0, max_speed)
    pub particle_count: usize,
    pub radius: f64, // draw radius of generated bodies
    pub seed: Option<u64>,
    pub gravity: GravityModel,
}

impl Parameters {
    pub fn from_config(cfg: &ParametersConfig) -> Result<Self> {
        let invalid = |msg: String| Err(SimError::InvalidConfiguration(msg));

        if cfg.particle_count < 0 {
            return invalid(format!("particle_count must be >= 0, got {}", cfg.particle_count));
        }
        if !cfg.g.is_finite() {
            return invalid(format!("G must be finite, got {}", cfg.g));
        }
        if !(cfg.eps.is_finite() && cfg.eps >= 0.0) {
            return invalid(format!("eps must be >= 0, got {}", cfg.eps));
        }
        if !(cfg.max_mass.is_finite() && cfg.max_mass > 0.0) {
            return invalid(format!("max_mass must be positive, got {}", cfg.max_mass));
        }
        // masses start at MIN_MASS, so a smaller bound leaves nothing to draw
        if cfg.max_mass < MIN_MASS {
            return invalid(format!("max_mass must be >= {MIN_MASS}, got {}", cfg.max_mass));
        }
        if !(cfg.max_speed.is_finite() && cfg.max_speed > 0.0) {
            return invalid(format!("max_speed must be positive, got {}", cfg.max_speed));
        }
        if !(cfg.radius.is_finite() && cfg.radius >= 0.0) {
            return invalid(format!("radius must be >= 0, got {}", cfg.radius));
        }

        Ok(Self {
            g: cfg.g,
            eps: cfg.eps,
            max_mass: cfg.max_mass,
            max_speed: cfg.max_speed,
            particle_count: cfg.particle_count as usize,
            radius: cfg.radius,
            seed: cfg.seed,
            gravity: cfg.gravity,
        })
    }
}
