//! Error types emitted by the Wayfarer CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;
use wayfarer_core::{GraphError, PlanError};

/// Errors emitted by the Wayfarer CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// The log level is not one of `off`, `error`, `warn`, `info`, `debug`
    /// or `trace`.
    #[error("unknown log level {value:?}")]
    InvalidLogLevel { value: String },
    /// A logger was already installed for this process.
    #[error("failed to initialise logging: {0}")]
    Logging(#[from] log::SetLoggerError),
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Opening the graph file failed.
    #[error("failed to open graph at {path:?}: {source}")]
    OpenGraph {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The graph JSON could not be decoded.
    #[error("failed to parse graph JSON at {path:?}: {source}")]
    ParseGraph {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The graph document is structurally invalid.
    #[error("graph in {path:?} is invalid: {source}")]
    InvalidGraph {
        path: Utf8PathBuf,
        #[source]
        source: GraphError,
    },
    /// The planner rejected the request or could not build a tour.
    #[error("planning failed: {source}")]
    Plan {
        #[source]
        source: PlanError,
    },
    /// Serialising the itinerary failed.
    #[error("failed to serialise itinerary: {0}")]
    SerialiseItinerary(#[source] serde_json::Error),
    /// Writing the itinerary failed.
    #[error("failed to write itinerary: {0}")]
    WriteOutput(#[source] std::io::Error),
}
