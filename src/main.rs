use coulomb_sim::{bench_frame, run_2d, Scenario, ScenarioConfig};

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

/// Charged particles and their electric field
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Scenario YAML; the built-in reference scenario when omitted
    #[arg(short, long)]
    file: Option<PathBuf>,
    /// Run without a window
    #[arg(long, default_value_t = false)]
    headless: bool,
    /// Ticks to run in headless mode
    #[arg(long, default_value_t = 600)]
    steps: u64,
    /// Print frame timings for growing particle counts and exit
    #[arg(long, default_value_t = false)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario(path: Option<&PathBuf>) -> Result<ScenarioConfig> {
    let Some(path) = path else {
        return Ok(ScenarioConfig::reference());
    };
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let reader = BufReader::new(file);
    let cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(cfg)
}

fn run_headless(mut scenario: Scenario, steps: u64) {
    let per_second = (1.0 / scenario.parameters.dt).round().max(1.0) as u64;

    for i in 1..=steps {
        scenario.tick();
        if i % per_second == 0 {
            debug!(
                "t = {:.2} s, kinetic energy = {:.3}",
                scenario.system.t,
                scenario.system.kinetic_energy()
            );
        }
    }

    info!(
        "finished {} ticks: t = {:.2} s, kinetic energy = {:.3}, total charge = {}",
        steps,
        scenario.system.t,
        scenario.system.kinetic_energy(),
        scenario.system.total_charge()
    );
    for (i, p) in scenario.system.particles().iter().enumerate() {
        info!(
            "particle {i}: q = {:+}, x = ({:.1}, {:.1}), v = ({:.1}, {:.1})",
            p.charge(),
            p.position.x,
            p.position.y,
            p.velocity.x,
            p.velocity.y
        );
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if args.bench {
        bench_frame();
        return Ok(());
    }

    let cfg = load_scenario(args.file.as_ref())?;
    let scenario = Scenario::build_scenario(cfg).context("invalid scenario")?;

    if args.headless {
        run_headless(scenario, args.steps);
    } else {
        run_2d(scenario);
    }

    Ok(())
}
