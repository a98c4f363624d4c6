//! # Lokibench Report
//!
//! Turns the `measurements.json` files of several benchmark runs into one
//! Markdown README comparing them measurement by measurement.
//!
//! Each run directory holds the experiment file written by
//! `lokibench_reporters::JsonReporter` and a `benchmark.yaml` describing the
//! scenario. The README is written to the common parent of all run
//! directories.

/// Grouping runs by measurement and per-series statistics
pub mod aggregate;
/// Handlebars README rendering
pub mod render;
/// Loading one run directory
pub mod run;

pub use aggregate::{MeasurementGroup, RunSeries, SeriesStats, group_by_measurement, sample_minutes};
pub use render::{DEFAULT_TEMPLATE, ReadmeRenderer};
pub use run::{BENCHMARK_FILE, RunResults, UNKNOWN_BENCHMARK};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the generated report
pub const README_FILE: &str = "README.md";

/// Errors that can occur while generating a report
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Benchmark description error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Template error: {0}")]
    Template(#[from] handlebars::TemplateError),
    #[error("Rendering error: {0}")]
    Render(#[from] handlebars::RenderError),
    #[error("No experiments in {}", .0.display())]
    EmptyExperiment(PathBuf),
    #[error("No run directories given")]
    NoRuns,
    #[error("Reporter error: {0}")]
    Reporter(#[from] lokibench_reporters::ReporterError),
}

/// Deepest directory containing every path in `dirs`.
///
/// Comparison is component-wise, so `runs/a` and `runs/ab` share `runs`.
pub fn common_parent(dirs: &[PathBuf]) -> Option<PathBuf> {
    let (first, rest) = dirs.split_first()?;
    let mut common: Vec<_> = first.components().collect();

    for dir in rest {
        let shared = common
            .iter()
            .zip(dir.components())
            .take_while(|(a, b)| **a == *b)
            .count();
        common.truncate(shared);
    }

    Some(common.iter().collect())
}

/// Load every run, render the README and write it to the runs' common parent.
///
/// `template` replaces [`DEFAULT_TEMPLATE`] when given. Returns the path of
/// the written README.
pub fn generate(dirs: &[PathBuf], template: Option<&str>) -> Result<PathBuf, ReportError> {
    if dirs.is_empty() {
        return Err(ReportError::NoRuns);
    }

    let runs = dirs
        .iter()
        .map(RunResults::load)
        .collect::<Result<Vec<_>, _>>()?;
    let groups = group_by_measurement(&runs);

    let renderer = match template {
        Some(template) => ReadmeRenderer::with_template(template)?,
        None => ReadmeRenderer::new()?,
    };
    let readme = renderer.render(runs.len(), &groups)?;

    let parent = common_parent(dirs).unwrap_or_default();
    let readme_path = output_path(&parent);
    fs::write(&readme_path, readme)?;

    tracing::info!(
        path = %readme_path.display(),
        runs = runs.len(),
        measurements = groups.len(),
        "Generated benchmark report"
    );

    Ok(readme_path)
}

fn output_path(parent: &Path) -> PathBuf {
    if parent.as_os_str().is_empty() {
        PathBuf::from(README_FILE)
    } else {
        parent.join(README_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_parent_is_component_wise() {
        let dirs = vec![
            PathBuf::from("/reports/run-a"),
            PathBuf::from("/reports/run-ab"),
            PathBuf::from("/reports/nested/run-c"),
        ];
        assert_eq!(common_parent(&dirs), Some(PathBuf::from("/reports")));
    }

    #[test]
    fn common_parent_of_single_dir_is_itself() {
        let dirs = vec![PathBuf::from("/reports/run-a")];
        assert_eq!(common_parent(&dirs), Some(PathBuf::from("/reports/run-a")));
    }

    #[test]
    fn no_dirs_is_an_error() {
        assert!(matches!(generate(&[], None), Err(ReportError::NoRuns)));
    }
}
