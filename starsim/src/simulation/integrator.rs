//! Fixed-step explicit Euler integrator
//!
//! First order, not symplectic: energy drifts over long runs. Frames are
//! short and the viewer only needs plausible motion, so that is accepted.

use super::states::{Body, NVec2};

/// Advance every body by `dt` using the accelerations in `accels`
/// v_n+1 = v_n + dt * a_n
/// x_n+1 = x_n + dt * v_n+1
pub fn euler_integrator<'a, I>(bodies: I, accels: &[NVec2], dt: f64)
where
    I: IntoIterator<Item = &'a mut Body>,
{
    for (b, a) in bodies.into_iter().zip(accels.iter()) {
        b.v += dt * *a;
        b.x += dt * b.v;
    }
}
