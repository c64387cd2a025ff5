use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::error;

use textpipe::constants::STATS_RESULTS_FILE;
use textpipe::logging::init_logging;
use textpipe::pipeline::run_statistics;

#[derive(Parser)]
#[command(name = "compute-stats")]
#[command(about = "Descriptive statistics over newline-separated numbers")]
#[command(version = "0.1.0")]
struct Cli {
    /// Input text files, one number per line
    files: Vec<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    if cli.files.is_empty() {
        eprintln!("Usage: compute-stats <file1> [<file2> ...]");
        std::process::exit(1);
    }

    match run_statistics(&cli.files, Path::new(STATS_RESULTS_FILE)) {
        Ok(outcome) => {
            println!(
                "📊 Processed {} file(s); results appended to {}",
                outcome.files_processed, STATS_RESULTS_FILE
            );
        }
        Err(e) => {
            error!("statistics run failed: {e}");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
