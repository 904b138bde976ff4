//! Fixed-step time integrator for the particle system
//!
//! Semi-implicit Euler (velocity first, then position from the new velocity)
//! followed by an inelastic wall bounce and an unconditional clamp

use log::warn;

use super::forces::ForceSet;
use super::states::{Bounds, Particle, ParticleSystem};

/// Fraction of the normal velocity kept after hitting a wall
pub const BOUNCE_DAMPING: f64 = 0.8;

/// Advance the system by one step of length `dt`.
/// Forces are evaluated once on the pre-step state; positions end inside
/// `sys.bounds` for every particle.
pub fn semi_implicit_euler(sys: &mut ParticleSystem, forces: &ForceSet, dt: f64) {
    if !(dt.is_finite() && dt > 0.0) {
        warn!("ignoring step with invalid dt = {dt}");
        return;
    }
    if sys.is_empty() {
        return;
    }

    // f_n from x_n for every particle before anything moves
    let f = forces.forces(sys.particles());
    let bounds = sys.bounds;

    for (p, f) in sys.particles_mut().iter_mut().zip(f.iter()) {
        // v_n+1 = v_n + (f_n / m) dt
        let a = *f / p.mass();
        p.velocity += a * dt;
        // x_n+1 = x_n + v_n+1 dt
        p.position += p.velocity * dt;

        bounce(p, &bounds);
    }

    sys.t += dt;
}

/// Reflect and damp the velocity on each axis that left the box, then clamp.
/// Checked against the post-integration position, before clamping.
pub fn bounce(p: &mut Particle, bounds: &Bounds) {
    let (x, y) = (p.position.x, p.position.y);

    if x < 0.0 || x > bounds.width {
        p.velocity.x *= -BOUNCE_DAMPING;
    }
    if y < 0.0 || y > bounds.height {
        p.velocity.y *= -BOUNCE_DAMPING;
    }

    p.position = bounds.clamp(p.position);
}

impl ParticleSystem {
    /// One simulation tick; see [`semi_implicit_euler`]
    pub fn step(&mut self, forces: &ForceSet, dt: f64) {
        semi_implicit_euler(self, forces, dt);
    }
}
