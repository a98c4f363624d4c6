//! # CSV Measurement Export
//!
//! Writes every measurement series of a completed spec to its own file,
//! `<report_dir>/<sanitized name>.csv`, with one headerless
//! `(timestamp, value)` row per sample.
//!
//! Timestamps are synthetic: the first row gets the current unix time in
//! seconds and each following row in the same file adds one. They only give
//! rows a distinct ordered key and say nothing about when a sample was taken.

use crate::reporter::Reporter;
use crate::sanitize::base_name;
use crate::summary::{MeasurementSeries, SpecSummary};
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

/// Counters describing one export pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportStats {
    pub files_written: usize,
    pub files_skipped: usize,
    pub rows_written: usize,
    pub rows_skipped: usize,
}

/// Reporter writing one CSV file per measurement
#[derive(Debug, Clone)]
pub struct CsvReporter {
    report_dir: PathBuf,
    clock: fn() -> i64,
}

fn unix_now() -> i64 {
    chrono::Utc::now().timestamp()
}

impl CsvReporter {
    /// Create a reporter writing into `report_dir`.
    ///
    /// The directory is not created; if it is missing nothing is written.
    pub fn new(report_dir: impl AsRef<Path>) -> Self {
        Self {
            report_dir: report_dir.as_ref().to_path_buf(),
            clock: unix_now,
        }
    }

    /// Replace the source of the first row's timestamp
    pub fn with_clock(mut self, clock: fn() -> i64) -> Self {
        self.clock = clock;
        self
    }

    pub fn report_dir(&self) -> &Path {
        &self.report_dir
    }

    /// Path the series called `name` is written to
    pub fn file_path(&self, name: &str) -> PathBuf {
        self.report_dir.join(format!("{}.csv", base_name(name)))
    }

    /// Export every series, skipping files and rows that fail.
    pub fn write_measurements(
        &self,
        measurements: &BTreeMap<String, MeasurementSeries>,
    ) -> ExportStats {
        let mut stats = ExportStats::default();

        for (name, series) in measurements {
            self.write_series(name, series, &mut stats);
        }

        stats
    }

    fn write_series(&self, name: &str, series: &MeasurementSeries, stats: &mut ExportStats) {
        let path = self.file_path(name);

        let writer = match csv::Writer::from_path(&path) {
            Ok(writer) => writer,
            Err(e) => {
                tracing::warn!(
                    measurement = %name,
                    path = %path.display(),
                    error = %e,
                    "Skipping measurement, cannot create CSV file"
                );
                stats.files_skipped += 1;
                return;
            }
        };

        self.write_rows(name, &path, writer, series, stats);
    }

    /// Rows only count as written once the buffered writer flushed them.
    fn write_rows<W: io::Write>(
        &self,
        name: &str,
        path: &Path,
        mut writer: csv::Writer<W>,
        series: &MeasurementSeries,
        stats: &mut ExportStats,
    ) {
        let mut ts = (self.clock)();
        let mut rows = 0;
        for value in &series.results {
            let record = [ts.to_string(), format!("{value:.6}")];
            ts += 1;

            match writer.write_record(&record) {
                Ok(()) => rows += 1,
                Err(e) => {
                    tracing::warn!(
                        measurement = %name,
                        error = %e,
                        "Skipping CSV row"
                    );
                    stats.rows_skipped += 1;
                }
            }
        }

        if let Err(e) = writer.flush() {
            tracing::warn!(
                measurement = %name,
                path = %path.display(),
                error = %e,
                "Skipping measurement, cannot flush CSV file"
            );
            stats.files_skipped += 1;
            stats.rows_skipped += rows;
            return;
        }

        tracing::debug!(
            measurement = %name,
            path = %path.display(),
            rows,
            "Wrote measurement CSV"
        );
        stats.files_written += 1;
        stats.rows_written += rows;
    }
}

impl Reporter for CsvReporter {
    fn spec_did_complete(&mut self, spec: &SpecSummary) {
        let stats = self.write_measurements(&spec.measurements);
        tracing::info!(
            spec = %spec.text(),
            files = stats.files_written,
            skipped = stats.files_skipped,
            "Exported spec measurements to CSV"
        );
    }
}
