mod convert;
mod stats;
mod wordcount;

pub use convert::run_conversion;
pub use stats::run_statistics;
pub use wordcount::run_word_count;

use std::path::PathBuf;

/// Result of one complete pipeline run across all input files.
#[derive(Debug)]
pub struct RunOutcome {
    pub files_processed: usize,
    pub valid_records: usize,
    pub invalid_records: usize,
    pub output_files: Vec<PathBuf>,
}

impl RunOutcome {
    fn new() -> Self {
        Self {
            files_processed: 0,
            valid_records: 0,
            invalid_records: 0,
            output_files: Vec::new(),
        }
    }
}
