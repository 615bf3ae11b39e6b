//! Plan command implementation for the Wayfarer CLI.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use wayfarer_core::{
    GraphDocument, GraphMode, Itinerary, MemoryGraph, PlanRequest, Planner, SyntheticPoiSource,
};
use wayfarer_planner::{ItineraryPlanner, PlannerConfig};

use crate::fs::{file_is_file, open_utf8_file};
use crate::{
    ARG_BUDGET, ARG_GRAPH, ARG_LOG_LEVEL, ARG_MAX_ATTEMPTS, ARG_MODE, ARG_POI_COUNT, ARG_SEED,
    ARG_STRICT, ARG_TIME, CliError, ENV_GRAPH, logging,
};

const DEFAULT_TIME_BUDGET: u32 = 300;
const DEFAULT_MONEY_BUDGET: u32 = 100;
const DEFAULT_POI_COUNT: usize = 100;
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Graph mode as accepted on the command line and in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum ModeArg {
    /// Every edge, walkable both ways.
    Pedestrian,
    /// Drivable edges only, honouring one-way flags.
    #[default]
    Vehicle,
}

impl From<ModeArg> for GraphMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Pedestrian => Self::Pedestrian,
            ModeArg::Vehicle => Self::Vehicle,
        }
    }
}

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Plan a closed multi-stop itinerary over a road graph stored \
                 as JSON. Points of interest are drawn from a seeded \
                 synthetic source; the chosen tour and every routed leg are \
                 written to stdout as JSON.",
    about = "Plan an itinerary over a graph file"
)]
#[ortho_config(prefix = "WAYFARER")]
pub(crate) struct PlanArgs {
    /// Path to a JSON graph document.
    #[arg(long = ARG_GRAPH, value_name = "path")]
    #[serde(default)]
    pub(crate) graph: Option<Utf8PathBuf>,
    /// Time budget in minutes.
    #[arg(long = ARG_TIME, value_name = "minutes")]
    #[serde(default)]
    pub(crate) time: Option<u32>,
    /// Money budget.
    #[arg(long = ARG_BUDGET, value_name = "amount")]
    #[serde(default)]
    pub(crate) budget: Option<u32>,
    /// Number of synthetic POI candidates to draw.
    #[arg(long = ARG_POI_COUNT, value_name = "count")]
    #[serde(default)]
    pub(crate) poi_count: Option<usize>,
    /// Which edges of the graph are usable.
    #[arg(long = ARG_MODE, value_enum)]
    #[serde(default)]
    pub(crate) mode: Option<ModeArg>,
    /// Seed for POI generation and stop sampling.
    #[arg(long = ARG_SEED, value_name = "seed")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
    /// Upper bound on stop-sampling attempts.
    #[arg(long = ARG_MAX_ATTEMPTS, value_name = "count")]
    #[serde(default)]
    pub(crate) max_attempts: Option<usize>,
    /// Fail when any leg has no route.
    #[arg(long = ARG_STRICT, num_args = 0..=1, default_missing_value = "true")]
    #[serde(default)]
    pub(crate) strict: Option<bool>,
    /// Log level written to stderr (off, error, warn, info, debug, trace).
    #[arg(long = ARG_LOG_LEVEL, value_name = "level")]
    #[serde(default)]
    pub(crate) log_level: Option<String>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlanConfig {
    /// Path to the JSON graph document.
    pub(crate) graph: Utf8PathBuf,
    pub(crate) mode: GraphMode,
    pub(crate) poi_count: usize,
    pub(crate) request: PlanRequest,
    pub(crate) planner: PlannerConfig,
    pub(crate) log_level: LevelFilter,
}

impl PlanConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.graph, ARG_GRAPH)
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let graph = args.graph.ok_or(CliError::MissingArgument {
            field: ARG_GRAPH,
            env: ENV_GRAPH,
        })?;
        let log_level = match args.log_level {
            Some(value) => logging::parse_level(&value)?,
            None => DEFAULT_LOG_LEVEL,
        };
        let defaults = PlannerConfig::default();

        Ok(Self {
            graph,
            mode: args.mode.unwrap_or_default().into(),
            poi_count: args.poi_count.unwrap_or(DEFAULT_POI_COUNT),
            request: PlanRequest {
                time_budget: args.time.unwrap_or(DEFAULT_TIME_BUDGET),
                money_budget: args.budget.unwrap_or(DEFAULT_MONEY_BUDGET),
                seed: args.seed.unwrap_or_default(),
            },
            planner: PlannerConfig {
                max_sampling_attempts: args
                    .max_attempts
                    .unwrap_or(defaults.max_sampling_attempts),
                strict_routes: args.strict.unwrap_or(defaults.strict_routes),
            },
            log_level,
        })
    }
}

pub(super) fn run_plan(args: PlanArgs) -> Result<(), CliError> {
    let config = resolve_plan_config(args)?;
    logging::init(config.log_level)?;
    let mut stdout = std::io::stdout().lock();
    run_plan_with(&config, &mut stdout)
}

pub(super) fn run_plan_with(config: &PlanConfig, writer: &mut dyn Write) -> Result<(), CliError> {
    let itinerary = execute_plan(config)?;
    write_itinerary(writer, &itinerary)
}

fn resolve_plan_config(args: PlanArgs) -> Result<PlanConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

pub(super) fn execute_plan(config: &PlanConfig) -> Result<Itinerary, CliError> {
    let graph = load_graph(&config.graph, config.mode)?;
    log::info!(
        "Loaded {} nodes from {} in {:?} mode",
        graph.len(),
        config.graph,
        config.mode
    );
    let source = SyntheticPoiSource::new(config.poi_count, config.request.seed);
    let planner = ItineraryPlanner::with_config(graph, source, config.planner);
    planner
        .plan(&config.request)
        .map_err(|source| CliError::Plan { source })
}

/// Loads a JSON-encoded [`GraphDocument`] from disk and builds the graph.
pub(super) fn load_graph(path: &Utf8Path, mode: GraphMode) -> Result<MemoryGraph, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenGraph {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    let document: GraphDocument =
        serde_json::from_reader(reader).map_err(|source| CliError::ParseGraph {
            path: path.to_path_buf(),
            source,
        })?;
    MemoryGraph::from_document(&document, mode).map_err(|source| CliError::InvalidGraph {
        path: path.to_path_buf(),
        source,
    })
}

fn write_itinerary(writer: &mut dyn Write, itinerary: &Itinerary) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(itinerary).map_err(CliError::SerialiseItinerary)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PlanConfig, CliError> {
    let merged = PlanArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PlanConfig::try_from(merged)
}
