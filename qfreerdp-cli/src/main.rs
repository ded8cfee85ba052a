//! `qfreerdp` - command-line launcher for FreeRDP 2.x
//!
//! Keeps connection preferences between runs, turns them into an `xfreerdp`
//! command line, and starts the client detached.

mod cli;
mod commands;
mod error;
mod overrides;
mod util;

use clap::Parser;
use cli::Cli;
use qfreerdp_core::tracing::{TracingConfig, TracingLevel, TracingOutput, init_tracing};

fn main() {
    let cli = Cli::parse();

    let level = if cli.quiet {
        TracingLevel::Error
    } else {
        TracingLevel::from_verbosity(cli.verbose)
    };
    let mut tracing_config = TracingConfig::new().with_level(level).with_env_filter();
    if let Some(path) = &cli.log_file {
        tracing_config = tracing_config.with_output(TracingOutput::File { path: path.clone() });
    }
    if let Err(e) = init_tracing(&tracing_config) {
        eprintln!("Warning: {e}");
    }

    let result = commands::dispatch(&cli);

    if let Err(e) = result {
        if !cli.quiet {
            eprintln!("Error: {e}");
        }
        std::process::exit(e.exit_code());
    }
}
