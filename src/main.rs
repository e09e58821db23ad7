//! logoprep CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, run the logo
//! processing flow, and exit with appropriate status. Every failure funnels
//! into a single printed line and exit code 1.
//! For programmatic use, prefer the library API (`logoprep::api`).

use clap::Parser;

mod cli;

fn main() {
    let args = cli::CliArgs::parse();
    if let Err(e) = cli::run(args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
