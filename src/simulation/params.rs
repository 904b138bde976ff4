//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - fixed tick length `dt`,
//! - force scale `k` and softening distance `min_dist`,
//! - rng seed and reset ranges
//!
//! `ViewSettings` carries the field-visualization tuning

use super::field::{DEFAULT_FIELD_SCALE, DEFAULT_GRID_SPACING};
use super::field_lines::{FieldLineTracer, DEFAULT_LINE_STEP, DEFAULT_MAX_STEPS};
use super::states::ResetRanges;

pub const DEFAULT_DT: f64 = 1.0 / 60.0;
pub const DEFAULT_K: f64 = 5000.0;
pub const DEFAULT_MIN_DIST: f64 = 5.0;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub dt: f64,             // fixed step size (seconds)
    pub k: f64,              // simulation-scale force constant, not a physical unit
    pub min_dist: f64,       // softening floor on pair distance
    pub seed: u64,           // rng seed used by resets
    pub reset: ResetRanges,  // spread/speed used by resets
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            dt: DEFAULT_DT,
            k: DEFAULT_K,
            min_dist: DEFAULT_MIN_DIST,
            seed: 42,
            reset: ResetRanges::default(),
        }
    }
}

/// Presentation-side tuning consumed by the renderer, never by the physics
#[derive(Debug, Clone)]
pub struct ViewSettings {
    pub show_vectors: bool,  // true -> arrow grid, false -> field lines
    pub grid_spacing: f64,   // arrow grid spacing
    pub field_scale: f64,    // arrow length per unit field
    pub line_step: f64,      // field-line step length
    pub line_max_steps: usize,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            show_vectors: true,
            grid_spacing: DEFAULT_GRID_SPACING,
            field_scale: DEFAULT_FIELD_SCALE,
            line_step: DEFAULT_LINE_STEP,
            line_max_steps: DEFAULT_MAX_STEPS,
        }
    }
}

impl ViewSettings {
    pub fn tracer(&self, params: &Parameters) -> FieldLineTracer {
        FieldLineTracer {
            step: self.line_step,
            max_steps: self.line_max_steps,
            min_dist: params.min_dist,
            ..FieldLineTracer::default()
        }
    }
}
