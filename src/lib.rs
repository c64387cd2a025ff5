pub mod constants;
pub mod convert;
pub mod error;
pub mod ingest;
pub mod logging;
pub mod pipeline;
pub mod report;
pub mod stats;
pub mod wordcount;
