use crate::convert::convert_numbers;
use crate::error::Result;
use crate::ingest::{ingest_file, IntParser};
use crate::pipeline::RunOutcome;
use crate::report::{render_conversion_report, OpenMode, ReportSink};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, instrument, warn};

/// Runs the conversion pipeline over `files` in argument order, writing all
/// reports into the shared `output_path`. The destination is rewritten by
/// each run, unlike the statistics file which accumulates across runs.
#[instrument(skip(files))]
pub fn run_conversion(files: &[PathBuf], output_path: &Path) -> Result<RunOutcome> {
    let started = Instant::now();
    let mut outcome = RunOutcome::new();
    let mut sink = ReportSink::new(output_path, OpenMode::Truncate);

    for path in files {
        let ingested = ingest_file(&IntParser, path)?;
        let conversions = convert_numbers(&ingested.valid);
        let elapsed = started.elapsed();

        let source = path.display().to_string();
        // Console mirror leaves the elapsed-time line out
        print!(
            "{}",
            render_conversion_report(&source, &conversions, &ingested.invalid, None)
        );
        if !ingested.invalid.is_empty() {
            warn!(count = ingested.invalid.len(), file = %path.display(), "invalid entries ignored");
            println!("Warning: some invalid entries were ignored.");
        }

        let report =
            render_conversion_report(&source, &conversions, &ingested.invalid, Some(elapsed));
        sink.write_report(&report)?;

        outcome.files_processed += 1;
        outcome.valid_records += ingested.valid.len();
        outcome.invalid_records += ingested.invalid.len();
    }
    outcome.output_files.push(sink.path().to_path_buf());

    info!(
        files = outcome.files_processed,
        valid = outcome.valid_records,
        invalid = outcome.invalid_records,
        output = %output_path.display(),
        "conversion run finished"
    );
    Ok(outcome)
}
