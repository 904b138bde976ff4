//! Field-line (streamline) tracing for the line view
//!
//! Lines start just outside every positive charge and follow the field
//! direction with a fixed step length until they run into a particle,
//! hit a null point, or exhaust `max_steps`.

use super::field::point_field;
use super::params::DEFAULT_MIN_DIST;
use super::states::{direction, NVec2, Particle};

pub const DEFAULT_LINE_STEP: f64 = 8.0;
pub const DEFAULT_MAX_STEPS: usize = 150;
/// Largest accepted `max_steps` from a scenario file
pub const MAX_LINE_STEPS: usize = 100_000;
/// Gap between a particle's surface and the first point of its lines
pub const SURFACE_OFFSET: f64 = 0.1;

const SEED_COMPONENTS: [f64; 5] = [-1.0, -0.5, 0.0, 0.5, 1.0];

/// Ordered points of one traced line; never empty
pub type Polyline = Vec<NVec2>;

#[derive(Debug, Clone, Copy)]
pub struct FieldLineTracer {
    pub step: f64,           // arc length per step
    pub max_steps: usize,    // segment cap per line
    pub min_dist: f64,       // softening floor, same as the force law
    pub surface_offset: f64, // seed distance beyond the radius
}

impl Default for FieldLineTracer {
    fn default() -> Self {
        Self {
            step: DEFAULT_LINE_STEP,
            max_steps: DEFAULT_MAX_STEPS,
            min_dist: DEFAULT_MIN_DIST,
            surface_offset: SURFACE_OFFSET,
        }
    }
}

/// Distinct unit directions from the non-zero pairs of `SEED_COMPONENTS`.
/// (1, 1) and (0.5, 0.5) collapse to one direction, leaving 16.
pub fn seed_directions() -> Vec<NVec2> {
    let mut out: Vec<NVec2> = Vec::with_capacity(16);
    for &x in &SEED_COMPONENTS {
        for &y in &SEED_COMPONENTS {
            let Some(d) = direction(NVec2::new(x, y)) else {
                continue;
            };
            if out.iter().all(|o| (o - d).norm() > 1e-9) {
                out.push(d);
            }
        }
    }
    out
}

impl FieldLineTracer {
    /// Trace one line starting at `start`
    pub fn trace(&self, particles: &[Particle], start: NVec2) -> Polyline {
        let mut line = Vec::with_capacity(self.max_steps.min(MAX_LINE_STEPS) + 1);
        let mut p = start;
        line.push(p);

        for _ in 0..self.max_steps {
            let mut field = NVec2::zeros();
            let mut absorbed = false;
            for other in particles {
                if other.covers(p) {
                    absorbed = true;
                }
                field += point_field(other.position, other.charge(), p, self.min_dist);
            }

            // null point, nowhere to go
            let Some(dir) = direction(field) else {
                break;
            };

            p += dir * self.step;
            line.push(p);

            // the segment into the particle is kept, then the line ends
            if absorbed {
                break;
            }
        }

        line
    }

    /// Starting points on the surface of `source`
    pub fn seeds(&self, source: &Particle) -> Vec<NVec2> {
        let r = source.radius() + self.surface_offset;
        seed_directions()
            .into_iter()
            .map(|d| source.position + d * r)
            .collect()
    }

    /// Trace every line from every positively charged particle
    pub fn trace_all(&self, particles: &[Particle]) -> Vec<Polyline> {
        particles
            .iter()
            .filter(|p| p.charge() > 0.0)
            .flat_map(|src| self.seeds(src))
            .map(|seed| self.trace(particles, seed))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixteen_distinct_unit_seeds() {
        let dirs = seed_directions();
        assert_eq!(dirs.len(), 16);
        for d in &dirs {
            assert!((d.norm() - 1.0).abs() < 1e-12);
        }
        assert!(dirs.iter().any(|d| (d - NVec2::new(1.0, 0.0)).norm() < 1e-12));
    }

    #[test]
    fn seeds_sit_just_outside_the_surface() {
        let src = Particle::new(NVec2::new(100.0, 100.0), NVec2::zeros(), 1.0, 1.0).unwrap();
        let tracer = FieldLineTracer::default();
        for s in tracer.seeds(&src) {
            let d = (s - src.position).norm();
            assert!((d - (src.radius() + SURFACE_OFFSET)).abs() < 1e-9);
            assert!(!src.covers(s));
        }
    }
}
