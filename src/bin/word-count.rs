use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::error;

use textpipe::constants::WORD_COUNT_RESULTS_PREFIX;
use textpipe::logging::init_logging;
use textpipe::pipeline::run_word_count;

#[derive(Parser)]
#[command(name = "word-count")]
#[command(about = "Counts word frequencies in text files, one report per input")]
#[command(version = "0.1.0")]
struct Cli {
    /// Input text files
    files: Vec<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    if cli.files.is_empty() {
        eprintln!("Usage: word-count <file1> [<file2> ...]");
        std::process::exit(1);
    }

    match run_word_count(&cli.files, Path::new("."), WORD_COUNT_RESULTS_PREFIX) {
        Ok(outcome) => {
            println!("📝 Processed {} file(s)", outcome.files_processed);
        }
        Err(e) => {
            error!("word count run failed: {e}");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
