//! Terminal logging for the CLI.
//!
//! Log records go to stderr so stdout carries only the itinerary JSON.

use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use crate::CliError;

/// Parse a level name such as `info` or `debug`, case-insensitively.
pub(crate) fn parse_level(value: &str) -> Result<LevelFilter, CliError> {
    value
        .parse()
        .map_err(|_| CliError::InvalidLogLevel {
            value: value.to_owned(),
        })
}

/// Install the stderr logger at `level`.
pub(crate) fn init(level: LevelFilter) -> Result<(), CliError> {
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;
    Ok(())
}
