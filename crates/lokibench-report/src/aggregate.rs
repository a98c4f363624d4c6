//! Cross-run grouping.

use crate::run::RunResults;
use serde::Serialize;

/// Minutes between consecutive samples of a benchmark run
pub const SAMPLE_INTERVAL_MINUTES: u64 = 3;

/// Summary of one series
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesStats {
    pub samples: usize,
    pub min: f64,
    pub mean: f64,
    pub max: f64,
}

impl SeriesStats {
    /// `None` for an empty series
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = values.iter().sum::<f64>() / values.len() as f64;

        Some(Self {
            samples: values.len(),
            min,
            mean,
            max,
        })
    }
}

/// Elapsed minutes for each of `len` samples: 3, 6, 9, ...
pub fn sample_minutes(len: usize) -> Vec<u64> {
    (1..=len as u64).map(|i| i * SAMPLE_INTERVAL_MINUTES).collect()
}

/// One run's values for a measurement
#[derive(Debug, Clone, PartialEq)]
pub struct RunSeries {
    pub description: String,
    pub values: Vec<f64>,
    pub stats: Option<SeriesStats>,
}

/// All runs that recorded the same measurement name
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementGroup {
    pub name: String,
    pub units: String,
    pub runs: Vec<RunSeries>,
}

/// Group measurements by name, in order of first appearance.
///
/// The units of the first run recording a measurement label the group.
pub fn group_by_measurement(runs: &[RunResults]) -> Vec<MeasurementGroup> {
    let mut groups: Vec<MeasurementGroup> = Vec::new();

    for run in runs {
        for measurement in &run.measurements {
            let series = RunSeries {
                description: run.description.clone(),
                values: measurement.values.clone(),
                stats: SeriesStats::from_values(&measurement.values),
            };

            match groups.iter_mut().find(|g| g.name == measurement.name) {
                Some(group) => group.runs.push(series),
                None => groups.push(MeasurementGroup {
                    name: measurement.name.clone(),
                    units: measurement.units.clone(),
                    runs: vec![series],
                }),
            }
        }
    }

    groups
}
