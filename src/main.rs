//! # Chorus Main Entry Point
//!
//! Parse the command line, dispatch to the matching command, print the
//! result to standard output.

use anyhow::Result;
use chorus::cmd_args::CommandLineArgs;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Log level comes from RUST_LOG; diagnostics go to stderr so stdout
    // stays clean for command output
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = CommandLineArgs::parse();
    chorus::run(&args)
}
