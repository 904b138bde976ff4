use std::time::Instant;

use crate::simulation::field::FieldSampler;
use crate::simulation::field_lines::FieldLineTracer;
use crate::simulation::forces::{ForceSet, SoftenedCoulomb};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Bounds, NVec2, Particle, ParticleSystem};

/// Helper to build a deterministic system of size `n` with alternating charges
fn make_system(n: usize, bounds: Bounds) -> ParticleSystem {
    let c = bounds.center();
    let mut particles = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let x = c + NVec2::new((i_f * 0.37).sin() * 300.0, (i_f * 0.13).cos() * 200.0);
        let q = if i % 2 == 0 { 1.0 } else { -1.0 };
        if let Ok(p) = Particle::new(x, NVec2::zeros(), 0.2, q) {
            particles.push(p);
        }
    }

    ParticleSystem::new(particles, bounds)
}

/// Time one tick and one frame of each field view for growing particle counts
/// Output is CSV so it can be pasted straight into a spreadsheet
pub fn bench_frame() {
    let params = Parameters::default();
    let bounds = Bounds::default();
    let forces = ForceSet::new().with(SoftenedCoulomb {
        k: params.k,
        min_dist: params.min_dist,
    });
    let sampler = FieldSampler::new(params.min_dist);
    let tracer = FieldLineTracer::default();

    println!("N,tick_ms,grid_ms,lines_ms");

    for n in [5, 10, 20, 40, 80, 160] {
        let steps = 20;
        let mut sys = make_system(n, bounds);

        // Warm up
        sys.step(&forces, params.dt);

        let t0 = Instant::now();
        for _ in 0..steps {
            sys.step(&forces, params.dt);
        }
        let tick_ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        let t1 = Instant::now();
        let arrows = sampler.arrows(sys.particles(), &bounds, 80.0, 30000.0);
        let grid_ms = t1.elapsed().as_secs_f64() * 1000.0;

        let t2 = Instant::now();
        let lines = tracer.trace_all(sys.particles());
        let lines_ms = t2.elapsed().as_secs_f64() * 1000.0;

        log::debug!("N = {n}: {} arrows, {} lines", arrows.len(), lines.len());
        println!("{},{:.6},{:.6},{:.6}", n, tick_ms, grid_ms, lines_ms);
    }
}
