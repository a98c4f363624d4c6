//! # Lokibench Reporters
//!
//! Suite reporters that persist benchmark measurements once specs complete.
//!
//! ## Components
//!
//! - **Reporter**: lifecycle hooks called by the benchmark suite runner
//! - **CsvReporter**: one headerless `(timestamp, value)` CSV per measurement
//! - **JsonReporter**: a `measurements.json` experiment file per suite
//! - **ReporterConfig**: file and environment driven reporter selection
//!
//! Reporters are best effort. A file that cannot be written is logged and
//! skipped; nothing is returned to the suite runner.
//!
//! ## Usage
//!
//! ```rust
//! use lokibench_metrics::{constants, request_rate, PromDuration};
//! use lokibench_reporters::{CsvReporter, Reporter, SpecSummary};
//!
//! let measurement = request_rate(
//!     "push",
//!     "distributor",
//!     constants::HTTP_PUSH_ROUTE,
//!     constants::STATUS_2XX,
//!     PromDuration::from_minutes(5),
//!     constants::DISTRIBUTOR_ANNOTATION,
//! );
//!
//! let mut spec = SpecSummary::new(["ingestion path"]);
//! spec.record(&measurement, 120.0);
//! spec.record(&measurement, 118.5);
//!
//! let dir = std::env::temp_dir();
//! let mut reporter = CsvReporter::new(&dir);
//! reporter.spec_did_complete(&spec);
//! ```

/// Reporter selection and output directory configuration
pub mod config;
/// CSV export of measurement series
pub mod csv_reporter;
/// Experiment file layout shared with the report generator
pub mod experiment;
/// Experiment JSON reporter
pub mod json_reporter;
/// Suite lifecycle trait and fan-out
pub mod reporter;
/// Filesystem-safe measurement names
pub mod sanitize;
/// Suite, setup and spec summaries
pub mod summary;

pub use config::{REPORT_DIR_ENV, ReporterConfig};
pub use csv_reporter::{CsvReporter, ExportStats};
pub use experiment::{ExperimentRecord, MeasurementRecord, read_experiments};
pub use json_reporter::{JsonReporter, MEASUREMENTS_FILE};
pub use reporter::{Reporter, Reporters};
pub use sanitize::base_name;
pub use summary::{MeasurementSeries, SetupSummary, SpecState, SpecSummary, SuiteSummary};

use thiserror::Error;

/// Errors raised while loading reporter inputs
#[derive(Error, Debug)]
pub enum ReporterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    ConfigError(String),
}
