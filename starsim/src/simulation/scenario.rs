//! The scene: one configured simulation and its bodies
//!
//! [`Scene`] is what the viewer talks to:
//! - `configure` / `reconfigure` validate parameters up front
//! - `reset` repopulates the bodies around the viewport centre
//! - `step` advances everything by one frame
//! - `bodies` hands back what is needed to draw
//!
//! The viewer inserts it into Bevy as a `Resource` and steps it once per
//! frame from a single system.

use bevy::prelude::Resource;
use rand::rngs::StdRng;
use rand::{rng, Rng, SeedableRng};
use tracing::info;

use crate::configuration::config::{ParametersConfig, ScenarioConfig};
use crate::error::{Result, SimError};
use crate::simulation::forces::{gravity_for, Acceleration};
use crate::simulation::integrator::euler_integrator;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, BodyView, NVec2, Viewport};
use crate::simulation::store::BodyStore;

#[derive(Resource)]
pub struct Scene {
    parameters: Parameters,
    viewport: Viewport,
    store: BodyStore,
    forces: Box<dyn Acceleration + Send + Sync>,
    accels: Vec<NVec2>, // per-body scratch, only touched inside `step`
    rng: StdRng,
    t: f64, // simulated time since the last reset
}

impl Scene {
    /// Validate `cfg` and build an empty scene. Call [`Scene::reset`] to populate it.
    pub fn configure(cfg: &ParametersConfig) -> Result<Self> {
        let parameters = Parameters::from_config(cfg)?;
        let forces = gravity_for(parameters.gravity, parameters.g, parameters.eps);
        let rng = seeded_rng(parameters.seed);

        info!(
            g = parameters.g,
            eps = parameters.eps,
            particles = parameters.particle_count,
            gravity = ?parameters.gravity,
            "scene configured"
        );

        Ok(Self {
            parameters,
            viewport: Viewport::default(),
            store: BodyStore::new(),
            forces,
            accels: Vec::new(),
            rng,
            t: 0.0,
        })
    }

    /// Configure and populate a scene straight from a loaded scenario file.
    pub fn from_config(cfg: ScenarioConfig) -> Result<Self> {
        let mut scene = Self::configure(&cfg.parameters)?;
        scene.reset(cfg.viewport.width, cfg.viewport.height)?;
        Ok(scene)
    }

    /// Swap in new parameters. Bodies are left alone until the next `reset`.
    ///
    /// On error the scene keeps its previous parameters.
    pub fn reconfigure(&mut self, cfg: &ParametersConfig) -> Result<()> {
        let parameters = Parameters::from_config(cfg)?;
        self.forces = gravity_for(parameters.gravity, parameters.g, parameters.eps);
        self.rng = seeded_rng(parameters.seed);
        self.parameters = parameters;
        info!(particles = self.parameters.particle_count, "scene reconfigured");
        Ok(())
    }

    /// Throw away all bodies and draw `particle_count` new ones around the
    /// centre of a `width` x `height` viewport.
    pub fn reset(&mut self, width: f64, height: f64) -> Result<()> {
        let viewport = Viewport::new(width, height)?;
        self.store.reset(&self.parameters, &viewport, &mut self.rng)?;
        self.viewport = viewport;
        self.accels = vec![NVec2::zeros(); self.store.len()];
        self.t = 0.0;
        info!(bodies = self.store.len(), width, height, "scene reset");
        Ok(())
    }

    /// Change the viewport without touching the bodies.
    pub fn set_viewport(&mut self, width: f64, height: f64) -> Result<()> {
        self.viewport = Viewport::new(width, height)?;
        Ok(())
    }

    /// Add a hand-placed body to the current scene.
    pub fn push_body(&mut self, body: Body) {
        self.store.push(body);
        self.accels.push(NVec2::zeros());
    }

    /// Advance the scene by `dt` seconds.
    ///
    /// `dt = 0` still recomputes the accelerations but moves nothing.
    pub fn step(&mut self, dt: f64) -> Result<()> {
        if !(dt.is_finite() && dt >= 0.0) {
            return Err(SimError::InvalidArgument(format!(
                "dt must be finite and >= 0, got {dt}"
            )));
        }

        // Zero buffer
        for a in self.accels.iter_mut() {
            *a = NVec2::zeros();
        }

        self.forces.acceleration(self.store.as_slice(), &self.viewport, &mut self.accels);
        euler_integrator(self.store.iter_mut(), &self.accels, dt);

        self.t += dt;
        Ok(())
    }

    /// Snapshot of every body for drawing, in store order.
    pub fn bodies(&self) -> Vec<BodyView> {
        self.store.iter().map(|b| b.view(&self.viewport)).collect()
    }

    /// Only the bodies whose bounding circle is inside the viewport.
    pub fn visible_bodies(&self) -> impl Iterator<Item = BodyView> + '_ {
        self.store
            .iter()
            .filter(|b| !b.is_outside(&self.viewport))
            .map(|b| b.view(&self.viewport))
    }

    /// Accelerations computed by the most recent `step`, in store order.
    pub fn accelerations(&self) -> &[NVec2] {
        &self.accels
    }

    pub fn store(&self) -> &BodyStore {
        &self.store
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn time(&self) -> f64 {
        self.t
    }
}

// fixed seed for reproducible runs, otherwise a fresh one from the thread rng
fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::seed_from_u64(rng().random()),
    }
}
