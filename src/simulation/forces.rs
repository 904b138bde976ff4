//! Force contributors for the particle engine
//!
//! Defines the [`ForceLaw`] trait, a [`ForceSet`] that sums several laws,
//! and the softened Coulomb interaction used by every scenario

use crate::simulation::states::{NVec2, Particle};

/// The interactions acting on the particles during a tick.
/// The integrator only sees the net force, so swapping the all-pairs
/// Coulomb term for an indexed one does not change `ParticleSystem::step`.
pub struct ForceSet {
    terms: Vec<Box<dyn ForceLaw + Send + Sync>>,
}

impl ForceSet {
    /// No interactions: particles coast in straight lines
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Builder-style registration, e.g. `ForceSet::new().with(SoftenedCoulomb { .. })`
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: ForceLaw + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Net force on each particle, written into `out` (same order and length
    /// as `particles`). Stale contents of `out` are discarded.
    pub fn accumulate_forces(&self, particles: &[Particle], out: &mut [NVec2]) {
        for f in out.iter_mut() {
            *f = NVec2::zeros();
        }
        for term in &self.terms {
            term.accumulate(particles, out);
        }
    }

    /// Allocating form of [`ForceSet::accumulate_forces`]
    pub fn forces(&self, particles: &[Particle]) -> Vec<NVec2> {
        let mut out = vec![NVec2::zeros(); particles.len()];
        self.accumulate_forces(particles, &mut out);
        out
    }
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::new()
    }
}

/// One interaction between particles. Implementations must add onto
/// `out` rather than overwrite it, since several laws share the buffer.
pub trait ForceLaw {
    fn accumulate(&self, particles: &[Particle], out: &mut [NVec2]);
}

/// Inverse-square electrostatic interaction with a distance floor
///
/// f_ij = k * q_i * q_j / max(|s|, min_dist)^3 * (-s),  s = x_j - x_i
pub struct SoftenedCoulomb {
    pub k: f64,        // force scale
    pub min_dist: f64, // distance floor
}

impl SoftenedCoulomb {
    /// Force on a particle at `xi` with charge `qi` due to one at `xj` with `qj`
    pub fn pair_force(&self, xi: NVec2, qi: f64, xj: NVec2, qj: f64) -> NVec2 {
        let s = xj - xi;
        let dist = s.norm().max(self.min_dist);
        -s * (self.k * qi * qj / (dist * dist * dist))
    }
}

impl ForceLaw for SoftenedCoulomb {
    fn accumulate(&self, particles: &[Particle], out: &mut [NVec2]) {
        let n = particles.len();

        // Each unordered pair once; i gets +f and j gets -f so the
        // pair sum obeys Newton's third law exactly
        for i in 0..n {
            let pi = &particles[i];
            for j in (i + 1)..n {
                let pj = &particles[j];
                let f = self.pair_force(pi.position, pi.charge(), pj.position, pj.charge());
                out[i] += f;
                out[j] -= f;
            }
        }
    }
}
