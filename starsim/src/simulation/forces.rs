//! Pairwise gravity for the n-body kernel
//!
//! Two formulations are provided; a scene uses exactly one of them:
//! - [`SoftenedGravity`]: acceleration form, every pair interacts
//! - [`VisibleGravity`]: inverse-square force form, pairs with a body
//!   outside the viewport are skipped

use crate::configuration::config::GravityModel;
use crate::simulation::states::{Body, NVec2, Viewport};

/// Source of per-body acceleration.
///
/// `out` has one slot per body and is zeroed by the caller before the call;
/// implementations write the finished acceleration of body `i` into `out[i]`.
pub trait Acceleration {
    fn acceleration(&self, bodies: &[Body], viewport: &Viewport, out: &mut [NVec2]);
}

/// Build the acceleration term for `model`.
pub fn gravity_for(model: GravityModel, g: f64, eps: f64) -> Box<dyn Acceleration + Send + Sync> {
    match model {
        GravityModel::Softened => Box::new(SoftenedGravity { g, eps2: eps * eps }),
        GravityModel::VisibleOnly => Box::new(VisibleGravity { g, eps }),
    }
}

/// Newtonian gravity with Plummer softening
/// a_i = G * sum_j m_j * d / (|d|^2 + eps^2)^(3/2), with d = x_j - x_i
pub struct SoftenedGravity {
    pub g: f64, // gravitational constant
    pub eps2: f64, // softening length squared
}

impl Acceleration for SoftenedGravity {
    fn acceleration(&self, bodies: &[Body], _viewport: &Viewport, out: &mut [NVec2]) {
        let n = bodies.len();
        if n < 2 { // nothing to pull on
            return;
        }

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            let bi = &bodies[i];
            let xi = bi.x;
            let mi = bi.mass();

            for j in (i + 1)..n {
                let bj = &bodies[j];

                // d points from i to j: i is pulled along +d, j along -d
                let d = bj.x - xi;
                let r2 = d.dot(&d);

                // 1 / (r^2 + eps^2)^(3/2)
                let inv_r = (r2 + self.eps2).sqrt().recip();
                let inv_r3 = inv_r * inv_r * inv_r;

                // G is left out here and applied once below
                out[i] += (bj.mass() * inv_r3) * d;
                out[j] -= (mi * inv_r3) * d;
            }
        }

        for a in out.iter_mut() {
            *a *= self.g;
        }
    }
}

/// Inverse-square gravity that ignores bodies outside the viewport
/// F = G * m_i * m_j / max(r^2, eps), applied along d / max(r, eps)
///
/// Here eps is a floor on the distance terms rather than a softening length.
/// The force is stored as acceleration (divided by the receiving mass) so it
/// plugs into the same integrator as [`SoftenedGravity`].
pub struct VisibleGravity {
    pub g: f64, // gravitational constant
    pub eps: f64, // distance floor
}

impl Acceleration for VisibleGravity {
    fn acceleration(&self, bodies: &[Body], viewport: &Viewport, out: &mut [NVec2]) {
        let n = bodies.len();
        if n < 2 {
            return;
        }

        for i in 0..n {
            let bi = &bodies[i];
            if bi.is_outside(viewport) {
                continue;
            }

            for j in (i + 1)..n {
                let bj = &bodies[j];
                if bj.is_outside(viewport) {
                    continue;
                }

                let d = bj.x - bi.x;
                let r2 = d.dot(&d);
                let r = r2.sqrt().max(self.eps);

                let f = self.g * bi.mass() * bj.mass() / r2.max(self.eps);
                let force = (f / r) * d;

                out[i] += force / bi.mass();
                out[j] -= force / bj.mass();
            }
        }
    }
}
