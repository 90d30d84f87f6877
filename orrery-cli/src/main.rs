use clap::{Parser, Subcommand};
use orrery_core::energy::{angular_momentum, total_energy};
use orrery_core::{parse_scenario, solar_system, BodySpec, Simulation, AU};
use std::fs;
use std::path::{Path, PathBuf};

mod app;

#[derive(Parser)]
#[command(name = "orrery")]
#[command(about = "An interactive N-body gravitational simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive viewer
    View {
        /// Scenario file to load and watch; the builtin solar system if omitted
        scenario: Option<PathBuf>,
    },
    /// Step a scenario headlessly and print the final state
    Run {
        /// Scenario file; the builtin solar system if omitted
        scenario: Option<PathBuf>,
        /// Number of one-day steps to simulate
        #[arg(long, default_value_t = 365)]
        steps: u64,
    },
    /// Parse and validate a scenario file
    Check {
        /// Scenario file
        scenario: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::View { scenario } => view(scenario),
        Commands::Run { scenario, steps } => run(scenario, steps),
        Commands::Check { scenario } => check(&scenario),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Load a scenario file, or fall back to the builtin solar system.
fn load_specs(scenario: Option<&Path>) -> Result<Vec<BodySpec>, Box<dyn std::error::Error>> {
    match scenario {
        Some(path) => {
            let source =
                fs::read_to_string(path).map_err(|e| format!("{}: {}", path.display(), e))?;
            let specs =
                parse_scenario(&source).map_err(|e| format!("{}: {}", path.display(), e))?;
            Ok(specs)
        }
        None => Ok(solar_system()),
    }
}

fn view(scenario: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let specs = load_specs(scenario.as_deref())?;
    // Fail on a bad catalog here rather than inside the window loop.
    let sim = Simulation::new(&specs)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_title("orrery"),
        ..Default::default()
    };
    eframe::run_native(
        "orrery",
        options,
        Box::new(move |cc| Ok(Box::new(app::ViewerApp::new(specs, sim, scenario, cc)))),
    )?;
    Ok(())
}

fn run(scenario: Option<PathBuf>, steps: u64) -> Result<(), Box<dyn std::error::Error>> {
    let specs = load_specs(scenario.as_deref())?;
    let mut sim = Simulation::new(&specs)?;

    let energy_before = total_energy(sim.bodies());
    let momentum_before = angular_momentum(sim.bodies());

    for _ in 0..steps {
        sim.step_once();
    }

    println!(
        "{} bodies after {} steps ({} simulated days)",
        sim.body_count(),
        sim.steps(),
        sim.elapsed_days()
    );
    for body in sim.bodies() {
        let pos = body.position() / AU;
        let vel = body.velocity() / 1000.0;
        println!(
            "  {:<10} pos ({:>10.4}, {:>10.4}) au   vel ({:>8.2}, {:>8.2}) km/s",
            body.name(),
            pos.x,
            pos.y,
            vel.x,
            vel.y
        );
    }

    let energy_after = total_energy(sim.bodies());
    let momentum_after = angular_momentum(sim.bodies());
    println!(
        "energy drift {:.3e} rel, angular momentum drift {:.3e} rel",
        rel_drift(energy_before, energy_after),
        rel_drift(momentum_before, momentum_after)
    );

    Ok(())
}

fn check(scenario: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let specs = load_specs(Some(scenario))?;
    Simulation::new(&specs)?;
    println!("scenario OK: {} bodies", specs.len());
    Ok(())
}

fn rel_drift(before: f64, after: f64) -> f64 {
    if before == 0.0 {
        after.abs()
    } else {
        ((after - before) / before).abs()
    }
}
