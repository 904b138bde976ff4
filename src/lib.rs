pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::error::SimError;
pub use simulation::states::{direction, Bounds, NVec2, Particle, ParticleSystem, ResetRanges};
pub use simulation::forces::{ForceLaw, ForceSet, SoftenedCoulomb};
pub use simulation::integrator::{semi_implicit_euler, BOUNCE_DAMPING};
pub use simulation::field::{grid_points, FieldSampler};
pub use simulation::field_lines::{seed_directions, FieldLineTracer, Polyline};
pub use simulation::params::{Parameters, ViewSettings};
pub use simulation::scenario::Scenario;

pub use configuration::config::{ParametersConfig, ParticleConfig, ScenarioConfig, ViewConfig, WorldConfig};

pub use visualization::{palette::charge_color, sim_vis2d::run_2d};

pub use benchmark::benchmark::bench_frame;
