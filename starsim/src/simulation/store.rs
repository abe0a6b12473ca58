//! Body Store: the ordered set of bodies of one scene.
//!
//! Bodies are only ever replaced in bulk by [`BodyStore::reset`]; nothing is
//! removed mid-run, so the length is fixed for the life of a scene.

use rand::Rng;
use tracing::debug;

use crate::error::Result;
use crate::simulation::params::{Parameters, MIN_MASS};
use crate::simulation::states::{Body, NVec2, Tint, Viewport};

/// Half-width of the square around the viewport centre bodies spawn in.
/// Keeps them from sitting exactly on top of each other.
pub const SPAWN_JITTER: f64 = 9.0;

/// Chance a generated body is drawn white rather than yellow.
const WHITE_PROBABILITY: f64 = 0.7;

#[derive(Debug, Clone, Default)]
pub struct BodyStore {
    bodies: Vec<Body>,
}

impl BodyStore {
    pub fn new() -> Self {
        Self { bodies: Vec::new() }
    }

    /// Replace every body with `params.particle_count` freshly drawn ones.
    ///
    /// The new population is built off to the side and swapped in at the
    /// end, so on error the previous bodies are still there.
    pub fn reset<R: Rng>(&mut self, params: &Parameters, viewport: &Viewport, rng: &mut R) -> Result<()> {
        let center = viewport.center();
        let mut bodies = Vec::with_capacity(params.particle_count);

        for _ in 0..params.particle_count {
            let x = center
                + NVec2::new(
                    rng.random_range(-SPAWN_JITTER..=SPAWN_JITTER),
                    rng.random_range(-SPAWN_JITTER..=SPAWN_JITTER),
                );
            let v = NVec2::new(random_component(rng, params.max_speed), random_component(rng, params.max_speed));
            let m = rng.random_range(MIN_MASS..=params.max_mass);
            let tint = if rng.random_bool(WHITE_PROBABILITY) { Tint::White } else { Tint::Yellow };

            bodies.push(Body::new(x, v, m, params.radius, tint)?);
        }

        debug!(count = bodies.len(), width = viewport.width, height = viewport.height, "repopulated body store");
        self.bodies = bodies;
        Ok(())
    }

    /// Add a hand-built body (scripted scenes, tests).
    pub fn push(&mut self, body: Body) {
        self.bodies.push(body);
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn as_slice(&self) -> &[Body] {
        &self.bodies
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Body> {
        self.bodies.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Body> {
        self.bodies.iter_mut()
    }
}

// magnitude in [0, max), sign flipped with probability 1/2
fn random_component<R: Rng>(rng: &mut R, max: f64) -> f64 {
    let speed = rng.random_range(0.0..max);
    if rng.random_bool(0.5) { speed } else { -speed }
}

impl<'a> IntoIterator for &'a BodyStore {
    type Item = &'a Body;
    type IntoIter = std::slice::Iter<'a, Body>;

    fn into_iter(self) -> Self::IntoIter {
        self.bodies.iter()
    }
}
