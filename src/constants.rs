/// Default output destinations for the three pipelines.
/// Runs take their destination as a parameter; these are only the
/// defaults the binaries pass in.

/// Shared statistics results file, appended across runs
pub const STATS_RESULTS_FILE: &str = "StatisticsResults.txt";

/// Shared conversion results file, rewritten each run
pub const CONVERSION_RESULTS_FILE: &str = "ConversionResults.txt";

/// Prefix combined with the input file name for per-file word count results
pub const WORD_COUNT_RESULTS_PREFIX: &str = "WordCountResults_";
