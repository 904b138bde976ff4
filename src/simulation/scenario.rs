//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - numerical parameters (`Parameters`) and view tuning (`ViewSettings`)
//! - system state (`ParticleSystem` at t = 0)
//! - active force set (`ForceSet`)
//! - the seeded rng used by resets
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! fixed-rate tick system and the field renderers

use bevy::prelude::Resource;
use log::info;
use rand::{rngs::SmallRng, SeedableRng};

use crate::configuration::config::{ParticleConfig, ScenarioConfig};
use crate::simulation::error::SimError;
use crate::simulation::field::FieldSampler;
use crate::simulation::field_lines::{Polyline, MAX_LINE_STEPS};
use crate::simulation::forces::{ForceSet, SoftenedCoulomb};
use crate::simulation::params::{Parameters, ViewSettings};
use crate::simulation::states::{Bounds, NVec2, Particle, ParticleSystem, ResetRanges};

/// Bevy resource representing a fully-initialized scenario
///
/// The tick driver is the only writer; renderers read `system` between ticks
#[derive(Resource)]
pub struct Scenario {
    pub parameters: Parameters,
    pub view: ViewSettings,
    pub system: ParticleSystem,
    pub forces: ForceSet,
    rng: SmallRng,
}

fn vec2(field: &'static str, v: &[f64]) -> Result<NVec2, SimError> {
    match v {
        [x, y] => Ok(NVec2::new(*x, *y)),
        [] if field == "v" => Ok(NVec2::zeros()),
        _ => Err(SimError::BadVectorLength { field, len: v.len() }),
    }
}

fn check(ok: bool, what: &'static str) -> Result<(), SimError> {
    if ok {
        Ok(())
    } else {
        Err(SimError::InvalidParameter(what))
    }
}

fn positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

fn non_negative(v: f64) -> bool {
    v.is_finite() && v >= 0.0
}

/// Reject values that would panic, produce NaN positions or never terminate
fn validate(cfg: &ScenarioConfig) -> Result<(), SimError> {
    let (w, p, v) = (&cfg.world, &cfg.parameters, &cfg.view);

    check(positive(w.width), "world.width must be finite and > 0")?;
    check(positive(w.height), "world.height must be finite and > 0")?;
    check(positive(p.dt), "parameters.dt must be finite and > 0")?;
    check(p.k.is_finite(), "parameters.k must be finite")?;
    check(positive(p.min_dist), "parameters.min_dist must be finite and > 0")?;
    check(non_negative(p.reset_spread), "parameters.reset_spread must be finite and >= 0")?;
    check(non_negative(p.reset_speed), "parameters.reset_speed must be finite and >= 0")?;
    check(positive(v.grid_spacing), "view.grid_spacing must be finite and > 0")?;
    check(v.field_scale.is_finite(), "view.field_scale must be finite")?;
    check(positive(v.line_step), "view.line_step must be finite and > 0")?;
    check(
        v.line_max_steps <= MAX_LINE_STEPS,
        "view.line_max_steps must be at most 100000",
    )?;
    Ok(())
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimError> {
        validate(&cfg)?;

        let bounds = Bounds::new(cfg.world.width, cfg.world.height);
        let center = bounds.center();

        // Particles: map `ParticleConfig` -> runtime `Particle`, positions are centre-relative
        let particles = cfg
            .particles
            .iter()
            .map(|pc: &ParticleConfig| -> Result<Particle, SimError> {
                let x = vec2("x", &pc.x)?;
                let v = vec2("v", &pc.v)?;
                let mut p = Particle::new(center + x, v, pc.m, pc.q)?;
                p.position = bounds.clamp(p.position);
                Ok(p)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let system = ParticleSystem::new(particles, bounds);

        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            dt: p_cfg.dt,
            k: p_cfg.k,
            min_dist: p_cfg.min_dist,
            seed: p_cfg.seed,
            reset: ResetRanges {
                spread: p_cfg.reset_spread,
                speed: p_cfg.reset_speed,
            },
        };

        let v_cfg = cfg.view;
        let view = ViewSettings {
            show_vectors: v_cfg.show_vectors,
            grid_spacing: v_cfg.grid_spacing,
            field_scale: v_cfg.field_scale,
            line_step: v_cfg.line_step,
            line_max_steps: v_cfg.line_max_steps,
        };

        // Forces: a single softened Coulomb term
        let forces = ForceSet::new().with(SoftenedCoulomb {
            k: parameters.k,
            min_dist: parameters.min_dist,
        });

        info!(
            "built scenario: {} particles in {}x{}, k = {}, dt = {:.5}",
            system.len(),
            bounds.width,
            bounds.height,
            parameters.k,
            parameters.dt
        );

        Ok(Self {
            rng: SmallRng::seed_from_u64(parameters.seed),
            parameters,
            view,
            system,
            forces,
        })
    }

    /// The five-particle reference setup
    pub fn reference() -> Result<Self, SimError> {
        Self::build_scenario(ScenarioConfig::reference())
    }

    /// Advance one fixed step of `parameters.dt`
    pub fn tick(&mut self) {
        self.system.step(&self.forces, self.parameters.dt);
    }

    /// Scatter particles with the scenario's own rng
    pub fn reset(&mut self) {
        self.system.reset(&mut self.rng, self.parameters.reset);
        info!("reset {} particles", self.system.len());
    }

    /// Arrow segments for the vector-grid view
    pub fn field_arrows(&self) -> Vec<(NVec2, NVec2)> {
        FieldSampler::new(self.parameters.min_dist).arrows(
            self.system.particles(),
            &self.system.bounds,
            self.view.grid_spacing,
            self.view.field_scale,
        )
    }

    /// Polylines for the field-line view
    pub fn field_lines(&self) -> Vec<Polyline> {
        self.view
            .tracer(&self.parameters)
            .trace_all(self.system.particles())
    }
}
