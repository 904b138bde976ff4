//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`WorldConfig`]      – size of the simulation rectangle
//! - [`ParametersConfig`] – time step, force scale, softening, rng seed, reset ranges
//! - [`ViewConfig`]       – initial view mode and field-visualization tuning
//! - [`ParticleConfig`]   – initial state for each particle
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! Every section except `particles` may be omitted and falls back to the
//! reference values.
//!
//! # YAML format
//!
//! ```yaml
//! world:
//!   width: 1280.0
//!   height: 720.0
//!
//! parameters:
//!   dt: 0.0166666667        # fixed tick, seconds
//!   k: 5000.0               # force scale
//!   min_dist: 5.0           # softening floor
//!   seed: 42                # reset rng seed
//!   reset_spread: 200.0     # reset offset from centre, per axis
//!   reset_speed: 75.0       # reset velocity bound, per component
//!
//! view:
//!   show_vectors: true      # true -> arrow grid, false -> field lines
//!   grid_spacing: 80.0
//!   field_scale: 30000.0
//!   line_step: 8.0
//!   line_max_steps: 150
//!
//! particles:                # x is relative to the world centre
//!   - { x: [100.0, -200.0], v: [20.0, 60.0], m: 0.2, q: -1.0 }
//!   - { x: [150.0,   40.0], v: [40.0,  0.0], m: 2.0, q:  1.0 }
//! ```

use serde::Deserialize;

use crate::simulation::field::{DEFAULT_FIELD_SCALE, DEFAULT_GRID_SPACING};
use crate::simulation::field_lines::{DEFAULT_LINE_STEP, DEFAULT_MAX_STEPS};
use crate::simulation::params::{DEFAULT_DT, DEFAULT_K, DEFAULT_MIN_DIST};

/// Size of the simulation rectangle `[0, width] x [0, height]`
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct WorldConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

/// Global numerical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub dt: f64,           // time step size
    pub k: f64,            // force scale
    pub min_dist: f64,     // softening floor
    pub seed: u64,         // deterministic seed for resets
    pub reset_spread: f64, // max reset offset from centre
    pub reset_speed: f64,  // max reset velocity component
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            dt: DEFAULT_DT,
            k: DEFAULT_K,
            min_dist: DEFAULT_MIN_DIST,
            seed: 42,
            reset_spread: 200.0,
            reset_speed: 75.0,
        }
    }
}

/// Field visualization tuning
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ViewConfig {
    pub show_vectors: bool,    // initial view mode
    pub grid_spacing: f64,     // arrow grid spacing
    pub field_scale: f64,      // arrow length per unit field
    pub line_step: f64,        // field-line step length
    pub line_max_steps: usize, // field-line segment cap
}

impl Default for ViewConfig {
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

/// Initial state of a single particle
#[derive(Deserialize, Debug, Clone)]
pub struct ParticleConfig {
    pub x: Vec<f64>, // position relative to the world centre
    #[serde(default)]
    pub v: Vec<f64>, // initial velocity, zero when omitted
    pub m: f64,      // mass, must be > 0
    pub q: f64,      // charge
}

/// Top-level scenario configuration loaded from YAML
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub world: WorldConfig,
    #[serde(default)]
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub view: ViewConfig,
    pub particles: Vec<ParticleConfig>,
}

impl ScenarioConfig {
    /// Parse a scenario from YAML text
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }

    /// Three electrons, a proton and an alpha particle
    pub fn reference() -> Self {
        let particle = |x: [f64; 2], v: [f64; 2], m: f64, q: f64| ParticleConfig {
            x: x.to_vec(),
            v: v.to_vec(),
            m,
            q,
        };
        const ME: f64 = 0.2; // electron
        const MP: f64 = 2.0; // proton
        const E: f64 = 1.0;

        Self {
            world: WorldConfig::default(),
            parameters: ParametersConfig::default(),
            view: ViewConfig::default(),
            particles: vec![
                particle([100.0, -200.0], [20.0, 60.0], ME, -E),
                particle([-200.0, -150.0], [-40.0, 60.0], ME, -E),
                particle([300.0, 200.0], [0.0, -120.0], ME, -E),
                particle([150.0, 40.0], [40.0, 0.0], MP, E),
                particle([-120.0, -80.0], [-30.0, 0.0], 4.0 * MP, 2.0 * E),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_sections_use_defaults() {
        let cfg = ScenarioConfig::from_yaml("particles:\n  - { x: [0.0, 0.0], m: 1.0, q: 1.0 }\n")
            .unwrap();
        assert_eq!(cfg.world.width, 1280.0);
        assert_eq!(cfg.parameters.k, 5000.0);
        assert_eq!(cfg.view.line_max_steps, 150);
        assert!(cfg.particles[0].v.is_empty());
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let yaml = "parameters:\n  k: 10.0\nparticles: []\n";
        let cfg = ScenarioConfig::from_yaml(yaml).unwrap();
        assert_eq!(cfg.parameters.k, 10.0);
        assert_eq!(cfg.parameters.min_dist, 5.0);
        assert_eq!(cfg.parameters.seed, 42);
    }

    #[test]
    fn particles_are_required() {
        assert!(ScenarioConfig::from_yaml("world: { width: 10.0, height: 10.0 }\n").is_err());
    }

    #[test]
    fn reference_has_five_particles() {
        let cfg = ScenarioConfig::reference();
        assert_eq!(cfg.particles.len(), 5);
        let total: f64 = cfg.particles.iter().map(|p| p.q).sum();
        assert!((total - 0.0).abs() < 1e-12);
    }
}
