use crate::error::Result;
use crate::ingest::{ingest_file, FloatParser};
use crate::pipeline::RunOutcome;
use crate::report::{render_stats_report, OpenMode, ReportSink};
use crate::stats::compute_statistics;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, instrument, warn};

/// Runs the statistics pipeline over `files` in argument order, appending
/// every report to the shared `output_path`. Each report's elapsed time is
/// cumulative since the run began, not that file's own duration.
#[instrument(skip(files))]
pub fn run_statistics(files: &[PathBuf], output_path: &Path) -> Result<RunOutcome> {
    let started = Instant::now();
    let mut outcome = RunOutcome::new();
    let mut sink = ReportSink::new(output_path, OpenMode::Append);

    for path in files {
        let ingested = ingest_file(&FloatParser, path)?;

        // Unparseable lines are dropped after a console notice; only the
        // conversion pipeline retains its invalid entries
        for line in &ingested.invalid {
            warn!(line = line.as_str(), "invalid numeric line dropped");
            println!("Invalid data ignored: {line}");
        }

        let summary = compute_statistics(&ingested.valid);
        let elapsed = started.elapsed();
        let report =
            render_stats_report(&path.display().to_string(), summary.as_ref(), Some(elapsed));

        print!("{report}");
        sink.write_report(&report)?;

        outcome.files_processed += 1;
        outcome.valid_records += ingested.valid.len();
        outcome.invalid_records += ingested.invalid.len();
    }
    outcome.output_files.push(sink.path().to_path_buf());

    info!(
        files = outcome.files_processed,
        valid = outcome.valid_records,
        dropped = outcome.invalid_records,
        output = %output_path.display(),
        "statistics run finished"
    );
    Ok(outcome)
}
