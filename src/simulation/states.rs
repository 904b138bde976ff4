//! Core state types for the charged-particle simulation.
//!
//! - `NVec2`          2D vector (nalgebra) used for positions, velocities, fields
//! - `Particle`       point charge with derived radius
//! - `Bounds`         the rectangular world `[0, width] x [0, height]`
//! - `ParticleSystem` fixed, ordered collection of particles plus simulation time

use nalgebra::Vector2;
use rand::Rng;

use super::error::SimError;

pub type NVec2 = Vector2<f64>;

/// Visual/collision radius per unit sqrt(mass)
pub const RADIUS_SCALE: f64 = 20.0;

/// Unit direction of `v`, or `None` when `v` is zero or not finite.
/// Every place that needs a direction goes through this instead of `normalize()`.
pub fn direction(v: NVec2) -> Option<NVec2> {
    let len = v.norm();
    if len > 0.0 && len.is_finite() {
        Some(v / len)
    } else {
        None
    }
}

#[derive(Debug, Clone)]
pub struct Particle {
    pub position: NVec2, // world coordinates
    pub velocity: NVec2, // world units per second
    mass: f64,           // > 0, fixed at construction
    charge: f64,         // any sign
    radius: f64,         // sqrt(mass) * RADIUS_SCALE
}

impl Particle {
    /// Build a particle, rejecting non-positive mass and non-finite inputs
    pub fn new(position: NVec2, velocity: NVec2, mass: f64, charge: f64) -> Result<Self, SimError> {
        if !mass.is_finite() || mass <= 0.0 {
            return Err(SimError::NonPositiveMass(mass));
        }
        if !charge.is_finite() {
            return Err(SimError::NonFinite("charge"));
        }
        if !position.iter().all(|c| c.is_finite()) {
            return Err(SimError::NonFinite("position"));
        }
        if !velocity.iter().all(|c| c.is_finite()) {
            return Err(SimError::NonFinite("velocity"));
        }

        Ok(Self {
            position,
            velocity,
            mass,
            charge,
            radius: mass.sqrt() * RADIUS_SCALE,
        })
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn charge(&self) -> f64 {
        self.charge
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// True when `point` is strictly inside the particle's disc
    pub fn covers(&self, point: NVec2) -> bool {
        (self.position - point).norm() < self.radius
    }
}

/// Rectangular simulation area with the origin in a corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> NVec2 {
        NVec2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn contains(&self, p: NVec2) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }

    /// Nearest point inside the box; never panics, even for a degenerate box
    pub fn clamp(&self, p: NVec2) -> NVec2 {
        NVec2::new(p.x.max(0.0).min(self.width), p.y.max(0.0).min(self.height))
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}

/// Ranges used when a reset scatters the particles
#[derive(Debug, Clone, Copy)]
pub struct ResetRanges {
    pub spread: f64, // max offset from the world centre on each axis
    pub speed: f64,  // max absolute velocity component
}

impl Default for ResetRanges {
    fn default() -> Self {
        Self {
            spread: 200.0,
            speed: 75.0,
        }
    }
}

/// The fixed set of particles. Count, order, mass and charge never change
/// after construction; only position and velocity evolve.
#[derive(Debug, Clone)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
    pub bounds: Bounds,
    pub t: f64, // simulated time in seconds
}

impl ParticleSystem {
    pub fn new(particles: Vec<Particle>, bounds: Bounds) -> Self {
        Self {
            particles,
            bounds,
            t: 0.0,
        }
    }

    /// Read-only ordered view used by renderers and field queries
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub(crate) fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Scatter every particle around the world centre with a random velocity.
    /// Identity, order, mass and charge are kept.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R, ranges: ResetRanges) {
        let center = self.bounds.center();
        let bounds = self.bounds;

        for p in self.particles.iter_mut() {
            let offset = NVec2::new(
                rng.gen_range(-1.0..=1.0) * ranges.spread,
                rng.gen_range(-1.0..=1.0) * ranges.spread,
            );
            // stay inside the world even when it is smaller than the spread
            p.position = bounds.clamp(center + offset);
            p.velocity = NVec2::new(
                rng.gen_range(-1.0..=1.0) * ranges.speed,
                rng.gen_range(-1.0..=1.0) * ranges.speed,
            );
        }
        self.t = 0.0;
    }

    /// Sum of 1/2 m v^2 over all particles
    pub fn kinetic_energy(&self) -> f64 {
        self.particles
            .iter()
            .map(|p| 0.5 * p.mass * p.velocity.norm_squared())
            .sum()
    }

    pub fn total_charge(&self) -> f64 {
        self.particles.iter().map(|p| p.charge).sum()
    }
}
