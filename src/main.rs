mod cli;
mod config;
mod logging;

use crate::cli::{Parsed, ParseError};
use std::env;
use std::process::ExitCode;

const USAGE_ERROR: u8 = 2;

fn main() -> ExitCode {
    logging::initialize();

    // Non-UTF-8 tokens become U+FFFD, which no option spelling contains.
    let mut args = env::args_os().map(|arg| arg.to_string_lossy().into_owned());
    let program = args.next().unwrap_or_else(|| "mdmtsp".to_string());

    // 1. PARSE THE COMMAND LINE
    let config = match cli::parse(args) {
        Ok(Parsed::Run(config)) => config,
        Ok(Parsed::Help) => {
            print!("{}", cli::render_help(&program));
            return ExitCode::SUCCESS;
        }
        Err(e) => return report(&program, &e),
    };

    tracing::info!(
        depots = config.depots(),
        salesmen = config.salesmen(),
        verbose = config.verbose(),
        "configuration ready"
    );

    // 2. HAND OFF TO THE SOLVER
    // One JSON object on stdout, read by the routing engine.
    match serde_json::to_string(&config) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to serialize configuration");
            ExitCode::FAILURE
        }
    }
}

fn report(program: &str, error: &ParseError) -> ExitCode {
    tracing::debug!(?error, "rejected command line");
    eprintln!("error: {error}");
    eprintln!("Try '{program} -h' for more information.");
    ExitCode::from(USAGE_ERROR)
}
