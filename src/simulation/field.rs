//! Electric field sampling for the vector-grid view
//!
//! The field at a point is the force law with a unit test charge and no
//! force scale: E(p) = sum q / max(|s|, min_dist)^3 * (-s), s = x - p

use super::states::{Bounds, NVec2, Particle};

/// Default spacing of the arrow grid, world units
pub const DEFAULT_GRID_SPACING: f64 = 80.0;
/// Default arrow length scale
pub const DEFAULT_FIELD_SCALE: f64 = 30000.0;

/// Contribution of a single charge at `source` to the field at `point`
pub fn point_field(source: NVec2, charge: f64, point: NVec2, min_dist: f64) -> NVec2 {
    let s = source - point;
    let dist = s.norm().max(min_dist);
    -s * (charge / (dist * dist * dist))
}

/// Pure query over a particle snapshot
#[derive(Debug, Clone, Copy)]
pub struct FieldSampler {
    pub min_dist: f64,
}

impl FieldSampler {
    pub fn new(min_dist: f64) -> Self {
        Self { min_dist }
    }

    /// Field vector at `point`, or `None` when `point` lies inside a particle.
    /// A `Some(zero)` result is possible and should be skipped by callers too.
    pub fn sample(&self, particles: &[Particle], point: NVec2) -> Option<NVec2> {
        let mut field = NVec2::zeros();
        for p in particles {
            if p.covers(point) {
                return None;
            }
            field += point_field(p.position, p.charge(), point, self.min_dist);
        }
        Some(field)
    }

    /// Arrow segments `(start, end)` for every drawable grid point,
    /// `end = start + field * field_scale`
    pub fn arrows(
        &self,
        particles: &[Particle],
        bounds: &Bounds,
        spacing: f64,
        field_scale: f64,
    ) -> Vec<(NVec2, NVec2)> {
        grid_points(bounds, spacing)
            .into_iter()
            .filter_map(|p| {
                let f = self.sample(particles, p)?;
                if f == NVec2::zeros() {
                    return None;
                }
                Some((p, p + f * field_scale))
            })
            .collect()
    }
}

impl Default for FieldSampler {
    fn default() -> Self {
        Self::new(super::params::DEFAULT_MIN_DIST)
    }
}

/// Regular sample grid: `spacing, 2*spacing, ...` on each axis while the
/// coordinate stays below `extent - spacing / 2`
pub fn grid_points(bounds: &Bounds, spacing: f64) -> Vec<NVec2> {
    if !(spacing.is_finite() && spacing > 0.0) {
        return Vec::new();
    }

    let xs = axis_coords(bounds.width, spacing);
    let ys = axis_coords(bounds.height, spacing);

    let mut out = Vec::with_capacity(xs.len() * ys.len());
    for &x in &xs {
        for &y in &ys {
            out.push(NVec2::new(x, y));
        }
    }
    out
}

fn axis_coords(extent: f64, spacing: f64) -> Vec<f64> {
    let limit = extent - spacing / 2.0;
    (1u32..)
        .map(|i| f64::from(i) * spacing)
        .take_while(|c| *c < limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_grid_shape() {
        let pts = grid_points(&Bounds::new(1280.0, 720.0), 80.0);
        // x: 80..=1200 (15 values), y: 80..=640 (8 values)
        assert_eq!(pts.len(), 15 * 8);
        assert_eq!(pts[0], NVec2::new(80.0, 80.0));
        assert_eq!(*pts.last().unwrap(), NVec2::new(1200.0, 640.0));
    }

    #[test]
    fn degenerate_spacing_gives_empty_grid() {
        assert!(grid_points(&Bounds::default(), 0.0).is_empty());
        assert!(grid_points(&Bounds::default(), -3.0).is_empty());
    }

    #[test]
    fn positive_charge_field_points_away() {
        let f = point_field(NVec2::new(0.0, 0.0), 1.0, NVec2::new(10.0, 0.0), 5.0);
        assert!(f.x > 0.0);
        assert!(f.y.abs() < 1e-15);
        assert!((f.x - 1.0 / 100.0).abs() < 1e-12);
    }
}
