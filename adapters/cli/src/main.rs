#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that runs a Mars Rover simulation.

mod scenario_transfer;

use std::{fs, io::Write, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use mars_rover_core::Position;
use mars_rover_system_analytics::Analytics;
use mars_rover_system_bootstrap::Scenario;
use mars_rover_system_dispatch::{self as dispatch, Invoker};
use mars_rover_world::query;

/// Command-line options for a single simulation run.
#[derive(Debug, Parser)]
#[command(
    name = "mars-rover",
    about = "Drives a rover across a bounded grid with obstacles."
)]
struct CliArgs {
    /// Instruction symbols: M moves, L and R turn. Other symbols are ignored.
    ///
    /// Defaults to the demonstration route when no scenario is supplied.
    instructions: Option<String>,

    /// JSON file describing the scenario.
    #[arg(long, value_name = "PATH", conflicts_with = "scenario")]
    scenario_file: Option<PathBuf>,

    /// Single-line scenario string produced by `--export`.
    #[arg(long, value_name = "STRING")]
    scenario: Option<String>,

    /// Grid width in cells.
    #[arg(long)]
    width: Option<u32>,

    /// Grid height in cells.
    #[arg(long)]
    height: Option<u32>,

    /// Starting column of the rover.
    #[arg(long, allow_hyphen_values = true)]
    x: Option<i32>,

    /// Starting row of the rover.
    #[arg(long, allow_hyphen_values = true)]
    y: Option<i32>,

    /// Starting facing: N, S, E or W.
    #[arg(long)]
    facing: Option<char>,

    /// Obstacle coordinate as `X,Y`. Repeat to add more; replaces scenario obstacles.
    #[arg(long = "obstacle", value_name = "X,Y", value_parser = parse_position, allow_hyphen_values = true)]
    obstacles: Vec<Position>,

    /// Prints the scenario string once the resolved scenario is validated.
    #[arg(long)]
    export: bool,

    /// Prints the execution history after the status line.
    #[arg(long)]
    history: bool,

    /// Prints move, blocked and turn counters after the status line.
    #[arg(long)]
    stats: bool,
}

/// Entry point for the Mars Rover command-line interface.
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let args = CliArgs::parse();
    let scenario = resolve_scenario(&args)?;

    let mut world = scenario
        .build()
        .context("could not construct the simulation")?;

    if args.export {
        println!("{}", scenario_transfer::encode(&scenario)?);
    }

    let mut invoker = Invoker::new();
    let mut analytics = Analytics::new();
    let mut events = Vec::new();

    dispatch::run(&mut world, &mut invoker, instructions(&args), &mut events);
    analytics.handle(&events);

    println!("{}", query::status_report(&world));

    if args.history {
        for (index, entry) in invoker.history().iter().enumerate() {
            println!(
                "{:>3} {} {:?}",
                index + 1,
                entry.command.kind().symbol(),
                entry.outcome
            );
        }
    }

    if args.stats {
        let stats = analytics.report();
        println!(
            "moves={} blocked={} turns={}",
            stats.moves, stats.blocked, stats.turns
        );
    }

    Ok(())
}

const DEMO_INSTRUCTIONS: &str = "MMRMLM";

fn instructions(args: &CliArgs) -> &str {
    match (&args.instructions, &args.scenario_file, &args.scenario) {
        (Some(instructions), _, _) => instructions,
        (None, None, None) => DEMO_INSTRUCTIONS,
        (None, _, _) => "",
    }
}

fn resolve_scenario(args: &CliArgs) -> Result<Scenario> {
    let scenario = match (&args.scenario_file, &args.scenario) {
        (Some(path), _) => {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("could not read scenario file {}", path.display()))?;
            let scenario: Scenario = serde_json::from_str(&contents)
                .with_context(|| format!("could not parse scenario file {}", path.display()))?;
            log::info!("Loaded scenario from {}", path.display());
            scenario
        }
        (None, Some(encoded)) => {
            scenario_transfer::decode(encoded).context("could not decode scenario string")?
        }
        (None, None) => Scenario::demo(),
    };

    Ok(apply_overrides(scenario, args))
}

fn apply_overrides(mut scenario: Scenario, args: &CliArgs) -> Scenario {
    if let Some(width) = args.width {
        scenario.width = width;
    }
    if let Some(height) = args.height {
        scenario.height = height;
    }
    if let Some(x) = args.x {
        scenario.start_x = x;
    }
    if let Some(y) = args.y {
        scenario.start_y = y;
    }
    if let Some(facing) = args.facing {
        scenario.facing = facing;
    }
    if !args.obstacles.is_empty() {
        scenario.obstacles = args.obstacles.clone();
    }
    scenario
}

fn parse_position(value: &str) -> Result<Position, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{value}'"))?;
    let x = x
        .trim()
        .parse::<i32>()
        .map_err(|error| format!("invalid column '{x}': {error}"))?;
    let y = y
        .trim()
        .parse::<i32>()
        .map_err(|error| format!("invalid row '{y}': {error}"))?;
    Ok(Position::new(x, y))
}
