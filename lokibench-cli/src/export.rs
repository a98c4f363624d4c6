//! CSV export of experiment files

use crate::CliError;
use lokibench_reporters::{
    CsvReporter, MeasurementSeries, Reporter, ReporterConfig, SpecSummary, SuiteSummary,
    read_experiments,
};
use std::fs;
use std::path::{Path, PathBuf};

/// Replay every experiment in `input` through a [`CsvReporter`].
///
/// The report directory comes from `report_dir`, else from the configuration
/// file and environment. It is created if missing. Returns the number of
/// measurements handed to the reporter.
pub fn run_export_csv(
    input: &Path,
    report_dir: Option<PathBuf>,
    config_path: &Path,
) -> Result<usize, CliError> {
    let mut config = ReporterConfig::load_or_default(config_path).with_env_overrides();
    if let Some(dir) = report_dir {
        config.report_dir = dir;
    }
    fs::create_dir_all(&config.report_dir)?;

    let experiments = read_experiments(input)?;
    let mut reporter = CsvReporter::new(&config.report_dir);
    let mut exported = 0;

    for experiment in experiments {
        let suite = SuiteSummary {
            description: experiment.name.clone(),
            total_specs: 1,
            ..SuiteSummary::default()
        };

        let mut spec = SpecSummary::new([experiment.name]);
        for record in experiment.measurements {
            spec.insert_series(MeasurementSeries::from(record));
        }
        exported += spec.measurements.len();

        reporter.suite_will_begin(&suite);
        reporter.spec_will_run(&spec);
        reporter.spec_did_complete(&spec);
        reporter.suite_did_end(&suite);
    }

    tracing::info!(
        input = %input.display(),
        report_dir = %config.report_dir.display(),
        measurements = exported,
        "CSV export finished"
    );

    Ok(exported)
}
