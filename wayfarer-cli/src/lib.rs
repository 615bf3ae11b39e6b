//! Command-line interface for the Wayfarer itinerary planner.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod logging;
mod plan;

pub use error::CliError;

use plan::{PlanArgs, run_plan};

const ARG_GRAPH: &str = "graph";
const ARG_TIME: &str = "time";
const ARG_BUDGET: &str = "budget";
const ARG_POI_COUNT: &str = "poi-count";
const ARG_MODE: &str = "mode";
const ARG_SEED: &str = "seed";
const ARG_MAX_ATTEMPTS: &str = "max-attempts";
const ARG_STRICT: &str = "strict";
const ARG_LOG_LEVEL: &str = "log-level";
const ENV_GRAPH: &str = "WAYFARER_CMDS_PLAN_GRAPH";

/// Run the Wayfarer CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Plan(args) => run_plan(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "wayfarer",
    about = "Plan closed multi-stop itineraries over road graphs",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Select POIs, order the stops and route every leg.
    Plan(PlanArgs),
}

#[cfg(test)]
mod tests;
