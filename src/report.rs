use crate::convert::Conversion;
use crate::error::Result;
use crate::stats::StatsSummary;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// How a shared destination file is opened for a run.
#[derive(Debug, Clone, Copy)]
pub enum OpenMode {
    /// Results accumulate across runs (statistics)
    Append,
    /// Each run rewrites the file (conversion)
    Truncate,
}

/// Shared report destination for one run. The file is only created once the
/// first report is written, so a run that fails up front leaves the
/// destination untouched.
#[derive(Debug)]
pub struct ReportSink {
    path: PathBuf,
    mode: OpenMode,
    file: Option<File>,
}

impl ReportSink {
    pub fn new(path: &Path, mode: OpenMode) -> Self {
        Self {
            path: path.to_path_buf(),
            mode,
            file: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write_report(&mut self, report: &str) -> Result<()> {
        if self.file.is_none() {
            let file = match self.mode {
                OpenMode::Append => OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&self.path)?,
                OpenMode::Truncate => File::create(&self.path)?,
            };
            self.file = Some(file);
        }
        if let Some(file) = self.file.as_mut() {
            file.write_all(report.as_bytes())?;
        }
        Ok(())
    }
}

/// Renders one statistics report block. `elapsed` is the time since the run
/// started, not this file's duration; `None` omits the line for console
/// mirrors that leave timing out.
pub fn render_stats_report(
    source: &str,
    summary: Option<&StatsSummary>,
    elapsed: Option<Duration>,
) -> String {
    let Some(summary) = summary else {
        return format!("No valid numbers found in {source}.\n\n");
    };

    let mut out = format!(
        "Results for {source}:\n\
         COUNT: {}\n\
         Mean: {}\n\
         Median: {}\n\
         Mode: {}\n\
         Variance: {}\n\
         Standard Deviation: {}\n",
        summary.count, summary.mean, summary.median, summary.mode, summary.variance, summary.std_dev
    );
    if let Some(elapsed) = elapsed {
        out.push_str(&format!(
            "Execution Time: {:.4} seconds\n",
            elapsed.as_secs_f64()
        ));
    }
    out.push('\n');
    out
}

/// Renders one conversion report block: the tab-separated table, the invalid
/// entries ignored (when any), and the cumulative elapsed time.
pub fn render_conversion_report(
    source: &str,
    conversions: &[Conversion],
    invalid: &[String],
    elapsed: Option<Duration>,
) -> String {
    let mut out = format!("\nResults for {source}:\nITEM\tDECIMAL\tBIN\tHEX\n");
    for c in conversions {
        out.push_str(&format!("{}\t{}\t{}\t{}\n", c.index, c.decimal, c.binary, c.hex));
    }
    if !invalid.is_empty() {
        out.push_str("\nInvalid entries ignored:\n");
        for entry in invalid {
            out.push_str(entry);
            out.push('\n');
        }
    }
    if let Some(elapsed) = elapsed {
        out.push_str(&format!(
            "\nExecution Time: {:.4} seconds\n",
            elapsed.as_secs_f64()
        ));
    }
    out.push('\n');
    out
}

/// Renders one word count report: aligned word/frequency columns in the
/// order given, plus the cumulative elapsed time.
pub fn render_word_count_report(
    source: &str,
    entries: &[(String, usize)],
    elapsed: Option<Duration>,
) -> String {
    let mut out = format!(
        "Results for {source}:\n\n{:<20}Frequency\n-----------------------------\n",
        "Word"
    );
    for (word, count) in entries {
        out.push_str(&format!("{word:<20}{count}\n"));
    }
    if let Some(elapsed) = elapsed {
        out.push_str(&format!(
            "\nExecution Time: {:.4} seconds\n",
            elapsed.as_secs_f64()
        ));
    }
    out
}
