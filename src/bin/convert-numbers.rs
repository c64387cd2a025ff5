use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::error;

use textpipe::constants::CONVERSION_RESULTS_FILE;
use textpipe::logging::init_logging;
use textpipe::pipeline::run_conversion;

#[derive(Parser)]
#[command(name = "convert-numbers")]
#[command(about = "Converts newline-separated integers to binary and hexadecimal")]
#[command(version = "0.1.0")]
struct Cli {
    /// Input text files, one integer per line
    files: Vec<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    if cli.files.is_empty() {
        eprintln!("Usage: convert-numbers <file1> [<file2> ...]");
        std::process::exit(1);
    }

    match run_conversion(&cli.files, Path::new(CONVERSION_RESULTS_FILE)) {
        Ok(outcome) => {
            println!(
                "🔢 Processed {} file(s); results written to {}",
                outcome.files_processed, CONVERSION_RESULTS_FILE
            );
        }
        Err(e) => {
            error!("conversion run failed: {e}");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
