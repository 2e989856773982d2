//! Command-line front end for the HVAC acoustic simulation engine.
//!
//! Reads a JSON-described path (or paths) from disk, runs them through the engine, and prints
//! the result as JSON or a short human summary.

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use hvac_engine::path::PathElement;
use hvac_engine::{calculate_path_noise, combine_receiver, PathReceiverParams};

#[derive(Parser)]
#[command(name = "hvac-cli", about = "Run HVAC path noise and receiver aggregation calculations")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute a single path's noise propagation and print the result.
    Path {
        /// JSON file containing an ordered array of path elements.
        #[arg(long)]
        elements: PathBuf,
        /// Identifier to stamp on the result.
        #[arg(long, default_value = "path")]
        id: String,
        /// Print the full PathResult as JSON instead of a summary.
        #[arg(long)]
        json: bool,
    },
    /// Aggregate multiple previously computed path results against a target NC.
    Combine {
        /// JSON file containing an array of PathResult objects.
        #[arg(long)]
        results: PathBuf,
        /// JSON file containing an array of per-path receiver parameters.
        #[arg(long)]
        params: PathBuf,
        #[arg(long)]
        target_nc: u32,
        #[arg(long)]
        room_volume_ft3: f64,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Path { elements, id, json } => run_path(&elements, &id, json),
        Command::Combine {
            results,
            params,
            target_nc,
            room_volume_ft3,
        } => run_combine(&results, &params, target_nc, room_volume_ft3),
    }
}

fn run_path(elements_path: &PathBuf, id: &str, json: bool) -> anyhow::Result<()> {
    let raw = fs::read_to_string(elements_path)?;
    let elements: Vec<PathElement> = serde_json::from_str(&raw)?;
    log::info!("running path '{id}' with {} elements", elements.len());

    let result = calculate_path_noise(id, &elements, None);
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("path {}: valid={}", result.path_id, result.valid);
        println!("  source dBA: {:.1}", result.source_dba);
        println!("  terminal dBA: {:.1}", result.terminal_dba);
        println!("  total attenuation dBA: {:.1}", result.total_attenuation_dba);
        println!("  NC rating: {}", result.nc_rating);
        if !result.warnings.is_empty() {
            println!("  warnings:");
            for w in &result.warnings {
                println!("    - {w}");
            }
        }
    }
    Ok(())
}

fn run_combine(
    results_path: &PathBuf,
    params_path: &PathBuf,
    target_nc: u32,
    room_volume_ft3: f64,
) -> anyhow::Result<()> {
    let results_raw = fs::read_to_string(results_path)?;
    let params_raw = fs::read_to_string(params_path)?;
    let path_results = serde_json::from_str(&results_raw)?;
    let per_path_params: Vec<PathReceiverParams> = serde_json::from_str(&params_raw)?;

    let (combined, errors) = combine_receiver(&path_results, &per_path_params, target_nc, room_volume_ft3);
    for err in &errors {
        log::error!("aggregation error: {err}");
    }
    println!("{}", serde_json::to_string_pretty(&combined)?);
    Ok(())
}
