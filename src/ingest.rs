use crate::error::{PipelineError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info};

/// Outcome of tolerantly ingesting one input file: every line lands in
/// exactly one of the two ordered sequences.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingested<T> {
    pub valid: Vec<T>,
    pub invalid: Vec<String>,
}

/// Parse seam shared by the line-oriented pipelines.
pub trait LineParser {
    type Record;

    /// Pipeline identifier used in log events
    fn pipeline_name(&self) -> &'static str;

    /// Attempt to parse one trimmed line; `None` marks the line invalid
    fn parse_line(&self, line: &str) -> Option<Self::Record>;
}

/// Parses lines as floating-point numbers (signs, decimals, exponents).
pub struct FloatParser;

impl LineParser for FloatParser {
    type Record = f64;

    fn pipeline_name(&self) -> &'static str {
        "statistics"
    }

    fn parse_line(&self, line: &str) -> Option<f64> {
        line.parse().ok()
    }
}

/// Parses lines as base-10 signed integers.
pub struct IntParser;

impl LineParser for IntParser {
    type Record = i64;

    fn pipeline_name(&self) -> &'static str {
        "conversion"
    }

    fn parse_line(&self, line: &str) -> Option<i64> {
        line.parse().ok()
    }
}

/// Reads `path` line by line and partitions the lines into parsed records
/// and invalid entries. Parsing is line-local: a malformed line never stops
/// processing of the lines after it. A missing file is the only fatal case.
pub fn ingest_file<P: LineParser>(parser: &P, path: &Path) -> Result<Ingested<P::Record>> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => PipelineError::FileNotFound(path.to_path_buf()),
        _ => PipelineError::Io(e),
    })?;

    let mut valid = Vec::new();
    let mut invalid = Vec::new();

    for line in content.lines() {
        let line = line.trim();
        match parser.parse_line(line) {
            Some(record) => valid.push(record),
            None => {
                debug!(pipeline = parser.pipeline_name(), line, "line failed to parse");
                invalid.push(line.to_string());
            }
        }
    }

    info!(
        pipeline = parser.pipeline_name(),
        file = %path.display(),
        valid = valid.len(),
        invalid = invalid.len(),
        "ingested input file"
    );

    Ok(Ingested { valid, invalid })
}
