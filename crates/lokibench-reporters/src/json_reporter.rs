//! Experiment JSON reporter.
//!
//! Collects the series of every completed spec and writes them as a single
//! experiment to `<report_dir>/measurements.json` when the suite ends.

use crate::experiment::{ExperimentRecord, MeasurementRecord};
use crate::reporter::Reporter;
use crate::summary::{SpecSummary, SuiteSummary};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// File name read back by the report generator
pub const MEASUREMENTS_FILE: &str = "measurements.json";

#[derive(Debug, Clone)]
pub struct JsonReporter {
    report_dir: PathBuf,
    measurements: Vec<MeasurementRecord>,
}

impl JsonReporter {
    pub fn new(report_dir: impl AsRef<Path>) -> Self {
        Self {
            report_dir: report_dir.as_ref().to_path_buf(),
            measurements: Vec::new(),
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.report_dir.join(MEASUREMENTS_FILE)
    }

    /// Measurements collected so far
    pub fn measurements(&self) -> &[MeasurementRecord] {
        &self.measurements
    }

    fn write(&self, experiment: &[ExperimentRecord]) -> Result<(), crate::ReporterError> {
        let file = File::create(self.output_path())?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, experiment)?;
        writer.flush()?;
        Ok(())
    }
}

impl Reporter for JsonReporter {
    fn suite_will_begin(&mut self, _summary: &SuiteSummary) {
        self.measurements.clear();
    }

    fn spec_did_complete(&mut self, spec: &SpecSummary) {
        self.measurements
            .extend(spec.measurements.values().map(MeasurementRecord::from));
    }

    fn suite_did_end(&mut self, summary: &SuiteSummary) {
        let experiment = [ExperimentRecord {
            name: summary.description.clone(),
            measurements: self.measurements.clone(),
        }];

        match self.write(&experiment) {
            Ok(()) => tracing::info!(
                path = %self.output_path().display(),
                measurements = self.measurements.len(),
                "Wrote experiment file"
            ),
            Err(e) => tracing::warn!(
                path = %self.output_path().display(),
                error = %e,
                "Skipping experiment file"
            ),
        }
    }
}
