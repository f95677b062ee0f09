use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use contagion::{
    engine::Engine,
    scenario::{Scenario, ScenarioLoader},
    telemetry,
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Headless proximity-transmission outbreak runner")]
struct Cli {
    /// Path to a scenario YAML file (built-in defaults when omitted)
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Override the scenario's random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Override the tick cap
    #[arg(long)]
    max_ticks: Option<u64>,

    /// Print every tick summary as a JSON line
    #[arg(long)]
    json: bool,

    /// Log filter directive, e.g. `debug` or `contagion=trace`
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let scenario = match &cli.scenario {
        Some(path) => ScenarioLoader::new(".").load(path)?,
        None => Scenario::default(),
    }
    .with_overrides(cli.seed, cli.max_ticks, cli.log_level.clone());
    telemetry::init_logging(&scenario.logging)?;

    let ticks = scenario.max_ticks;
    let mut engine = Engine::from_scenario(&scenario)
        .with_context(|| format!("Failed to build population for '{}'", scenario.name))?;

    if cli.json {
        let mut write_error: Option<serde_json::Error> = None;
        let outcome = engine.run_with_hook(ticks, |summary| {
            if write_error.is_some() {
                return;
            }
            match serde_json::to_string(summary) {
                Ok(line) => println!("{line}"),
                Err(err) => write_error = Some(err),
            }
        });
        if let Some(err) = write_error {
            return Err(err).context("Failed to encode tick summary");
        }
        println!("{}", serde_json::to_string(&outcome)?);
    } else {
        let outcome = engine.run(ticks);
        println!(
            "Scenario '{}' (seed {}) {} after {} ticks: {} immune, {} never infected, {} still infected, peak {} infected.",
            scenario.name,
            engine.seed(),
            if outcome.completed { "ended" } else { "stopped" },
            outcome.ticks,
            outcome.final_census.immune,
            outcome.final_census.susceptible,
            outcome.final_census.infected,
            outcome.peak_infected
        );
    }
    Ok(())
}
