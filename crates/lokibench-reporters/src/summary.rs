//! Summaries handed to reporters by the suite runner.

use lokibench_metrics::{Annotation, Measurement};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// Ordered samples collected for one measurement during a run.
///
/// `annotations[i]` labels `results[i]`; series built by [`SpecSummary::record`]
/// keep both the same length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementSeries {
    pub name: String,
    pub units: String,
    pub annotations: Vec<Annotation>,
    pub results: Vec<f64>,
}

impl MeasurementSeries {
    /// Empty series labeled like `measurement`
    pub fn for_measurement(measurement: &Measurement) -> Self {
        Self {
            name: measurement.name.clone(),
            units: measurement.unit.clone(),
            annotations: Vec::new(),
            results: Vec::new(),
        }
    }

    /// Append one labeled sample
    pub fn push(&mut self, value: f64, annotation: Annotation) {
        self.results.push(value);
        self.annotations.push(annotation);
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Outcome of a single spec
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpecState {
    #[default]
    Pending,
    Passed,
    Failed,
    Skipped,
}

/// A spec and the measurements recorded while it ran
#[derive(Debug, Clone, Default)]
pub struct SpecSummary {
    pub component_texts: Vec<String>,
    pub state: SpecState,
    pub run_time: Duration,
    pub measurements: BTreeMap<String, MeasurementSeries>,
}

impl SpecSummary {
    pub fn new<I, S>(component_texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            component_texts: component_texts.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Full spec text, components joined by spaces
    pub fn text(&self) -> String {
        self.component_texts.join(" ")
    }

    /// Append a sample under the measurement's name, labeled with the
    /// measurement's annotation.
    pub fn record(&mut self, measurement: &Measurement, value: f64) {
        self.measurements
            .entry(measurement.name.clone())
            .or_insert_with(|| MeasurementSeries::for_measurement(measurement))
            .push(value, measurement.annotation.clone());
    }

    /// Insert a complete series, replacing any series with the same name.
    pub fn insert_series(&mut self, series: MeasurementSeries) {
        self.measurements.insert(series.name.clone(), series);
    }
}

/// Result of a before/after suite hook
#[derive(Debug, Clone, Default)]
pub struct SetupSummary {
    pub passed: bool,
    pub run_time: Duration,
}

/// Whole-suite summary delivered at the start and end of a run
#[derive(Debug, Clone, Default)]
pub struct SuiteSummary {
    pub description: String,
    pub total_specs: usize,
    pub passed_specs: usize,
    pub failed_specs: usize,
    pub run_time: Duration,
}

impl SuiteSummary {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Self::default()
        }
    }

    pub fn succeeded(&self) -> bool {
        self.failed_specs == 0
    }
}
