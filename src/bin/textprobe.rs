//! Encoding prober for UTF-16 text files.
//!
//! Prints the decoded contents of a file, trying byte-order-mark-sensitive
//! UTF-16 first and explicit little-endian UTF-16 second. Decoded text goes
//! to stdout even when it looks garbled; each failed attempt produces one
//! labeled line on stderr. The exit status is 0 either way.

use clap::Parser;
use std::path::PathBuf;

use logoprep::text::{ProbeOutcome, probe_file};

#[derive(Parser)]
#[command(name = "textprobe", version, about = "UTF-16 text file prober")]
struct ProbeArgs {
    /// Text file to probe
    #[arg(short, long)]
    input: PathBuf,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    log: bool,
}

fn main() {
    let args = ProbeArgs::parse();

    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    match probe_file(&args.input) {
        ProbeOutcome::Decoded { text, failures, .. } => {
            for failure in &failures {
                eprintln!("Error reading {}: {}", failure.mode, failure.error);
            }
            println!("{text}");
        }
        ProbeOutcome::Failed(failures) => {
            for failure in &failures {
                eprintln!("Error reading {}: {}", failure.mode, failure.error);
            }
        }
    }
}
