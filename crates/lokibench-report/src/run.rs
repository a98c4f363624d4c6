//! A single benchmark run directory.

use crate::ReportError;
use lokibench_reporters::{MEASUREMENTS_FILE, MeasurementRecord, read_experiments};
use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Scenario description file inside a run directory
pub const BENCHMARK_FILE: &str = "benchmark.yaml";
/// Description used when the scenario file does not name one
pub const UNKNOWN_BENCHMARK: &str = "Unknown Benchmark";

/// Measurements and scenario description of one run
#[derive(Debug, Clone)]
pub struct RunResults {
    pub dir: PathBuf,
    pub description: String,
    pub measurements: Vec<MeasurementRecord>,
}

impl RunResults {
    /// Read `measurements.json` and `benchmark.yaml` from `dir`.
    ///
    /// Only the first experiment of the measurements file is used.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, ReportError> {
        let dir = dir.as_ref();
        let measurements_path = dir.join(MEASUREMENTS_FILE);

        let experiment = read_experiments(&measurements_path)?
            .into_iter()
            .next()
            .ok_or_else(|| ReportError::EmptyExperiment(measurements_path.clone()))?;

        let description = load_description(&dir.join(BENCHMARK_FILE))?;

        tracing::debug!(
            dir = %dir.display(),
            description = %description,
            measurements = experiment.measurements.len(),
            "Loaded benchmark run"
        );

        Ok(Self {
            dir: dir.to_path_buf(),
            description,
            measurements: experiment.measurements,
        })
    }
}

/// `scenarios.ingestionPath.description`, or [`UNKNOWN_BENCHMARK`].
///
/// A missing file is treated like a missing key; a malformed one is an error.
fn load_description(path: &Path) -> Result<String, ReportError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "No benchmark description file");
            return Ok(UNKNOWN_BENCHMARK.to_string());
        }
        Err(e) => return Err(e.into()),
    };

    let doc: Value = serde_yaml::from_str(&content)?;
    Ok(doc
        .get("scenarios")
        .and_then(|s| s.get("ingestionPath"))
        .and_then(|p| p.get("description"))
        .and_then(Value::as_str)
        .unwrap_or(UNKNOWN_BENCHMARK)
        .to_string())
}
