//! Uniform-cost search demo.
//!
//! Run: cargo run --bin ucsgrid-demo
//!      cargo run --bin ucsgrid-demo -- --maze maze.json --goal 4,4 --json

mod scenario;

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use ucsgrid_core::Cell;
use ucsgrid_paths::{SearchOutcome, search};

use crate::scenario::Scenario;

#[derive(Parser)]
#[command(
    name = "ucsgrid-demo",
    version,
    about = "Find a shortest path through a grid maze with uniform-cost search"
)]
struct Cli {
    /// JSON scenario file: {"grid": [[0,1,...],...], "start": [r,c], "goal": [r,c]}.
    /// Defaults to the built-in 3x3 maze.
    #[arg(long)]
    maze: Option<PathBuf>,
    /// Override the start cell, as `row,col`.
    #[arg(long, value_parser = parse_cell)]
    start: Option<Cell>,
    /// Override the goal cell, as `row,col`.
    #[arg(long, value_parser = parse_cell)]
    goal: Option<Cell>,
    /// Print the outcome as JSON.
    #[arg(long)]
    json: bool,
}

fn parse_cell(s: &str) -> Result<Cell, String> {
    let (r, c) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `row,col`, got `{s}`"))?;
    let row = r.trim().parse().map_err(|e| format!("bad row `{r}`: {e}"))?;
    let col = c.trim().parse().map_err(|e| format!("bad column `{c}`: {e}"))?;
    Ok(Cell::new(row, col))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut scenario = match &cli.maze {
        Some(path) => Scenario::load(path)?,
        None => Scenario::builtin()?,
    };
    if let Some(start) = cli.start {
        scenario.start = start;
    }
    if let Some(goal) = cli.goal {
        scenario.goal = goal;
    }

    let t0 = Instant::now();
    let outcome = search(&scenario.grid, scenario.start, scenario.goal)?;
    let elapsed_ms = t0.elapsed().as_secs_f64() * 1000.0;
    log::info!("search finished in {elapsed_ms:.4} ms");

    if cli.json {
        let report = serde_json::json!({
            "rows": scenario.grid.rows(),
            "cols": scenario.grid.cols(),
            "start": scenario.start,
            "goal": scenario.goal,
            "outcome": outcome,
            "elapsed_ms": elapsed_ms,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("--- Uniform-Cost Search ---");
    println!("Maze: {}x{}", scenario.grid.rows(), scenario.grid.cols());
    println!("Start: {} | Goal: {}", scenario.start, scenario.goal);
    println!();
    println!("{}", scenario.render(outcome.path()));
    println!();

    match &outcome {
        SearchOutcome::Found {
            path,
            cost,
            expanded,
        } => {
            let cells: Vec<String> = path.iter().map(Cell::to_string).collect();
            println!("Optimal path: {}", cells.join(" -> "));
            println!("Total cost (steps): {cost}");
            println!("Nodes expanded: {expanded}");
            println!("Elapsed: {elapsed_ms:.4} ms");
        }
        SearchOutcome::NotFound { expanded } => {
            println!("No solution found.");
            println!("Nodes expanded: {expanded}");
        }
    }
    Ok(())
}
