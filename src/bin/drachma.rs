//! Drachma CLI binary.

use clap::Parser;
use drachma::cli::{args::DrachmaArgs, commands::execute_command};
use std::process;

fn main() {
    // Parse command line arguments using clap
    let args = DrachmaArgs::parse();

    // Map CLI verbosity onto the log filter
    let level = match args.verbosity() {
        0 => log::LevelFilter::Error,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();

    // Execute the command
    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
