//! # Lokibench
//!
//! Measurement queries and result reporters for Loki benchmark suites.
//!
//! - [`metrics`]: pure builders labeling Prometheus queries
//! - [`reporters`]: suite reporters exporting measurement series
//! - [`report`]: Markdown reports comparing several runs

pub use lokibench_metrics as metrics;
pub use lokibench_report as report;
pub use lokibench_reporters as reporters;

pub use lokibench_metrics::{Annotation, Measurement, PromDuration, catalog, constants};
pub use lokibench_reporters::{
    CsvReporter, JsonReporter, Reporter, ReporterConfig, Reporters, SpecSummary, SuiteSummary,
};
