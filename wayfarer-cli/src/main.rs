//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use wayfarer_cli::CliError;

fn main() {
    match wayfarer_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("wayfarer: {err}");
            std::process::exit(1);
        }
    }
}
