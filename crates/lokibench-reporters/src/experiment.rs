//! Experiment file layout.
//!
//! `measurements.json` holds a list of experiments, each with the series
//! recorded during one suite run. Field names are PascalCase so files
//! written by other benchmark harnesses load as well; unknown fields are
//! ignored.
//!
//! JSON has no NaN or infinity, and Prometheus answers NaN for a quantile
//! over a window without traffic. Non-finite values are therefore written
//! as the strings `"NaN"`, `"+Inf"` and `"-Inf"`. A `null` value reads
//! back as NaN.

use crate::ReporterError;
use crate::summary::MeasurementSeries;
use lokibench_metrics::Annotation;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExperimentRecord {
    pub name: String,
    #[serde(default)]
    pub measurements: Vec<MeasurementRecord>,
}

/// One measurement; `annotations` holds one label per value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MeasurementRecord {
    pub name: String,
    #[serde(default)]
    pub units: String,
    #[serde(default)]
    pub annotations: Vec<String>,
    #[serde(default, with = "sample_values")]
    pub values: Vec<f64>,
}

mod sample_values {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    #[serde(untagged)]
    enum Sample {
        Number(f64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(values: &[f64], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(values.iter().map(|&value| match value {
            v if v.is_finite() => Sample::Number(v),
            v if v.is_nan() => Sample::Text("NaN".to_string()),
            v if v > 0.0 => Sample::Text("+Inf".to_string()),
            _ => Sample::Text("-Inf".to_string()),
        }))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<f64>, D::Error> {
        Vec::<Option<Sample>>::deserialize(deserializer)?
            .into_iter()
            .map(|sample| match sample {
                None => Ok(f64::NAN),
                Some(Sample::Number(v)) => Ok(v),
                Some(Sample::Text(text)) => match text.as_str() {
                    "NaN" => Ok(f64::NAN),
                    "+Inf" | "Inf" => Ok(f64::INFINITY),
                    "-Inf" => Ok(f64::NEG_INFINITY),
                    other => other
                        .parse()
                        .map_err(|_| D::Error::custom(format!("invalid sample value: {other}"))),
                },
            })
            .collect()
    }
}

impl From<&MeasurementSeries> for MeasurementRecord {
    fn from(series: &MeasurementSeries) -> Self {
        Self {
            name: series.name.clone(),
            units: series.units.clone(),
            annotations: series.annotations.iter().map(ToString::to_string).collect(),
            values: series.results.clone(),
        }
    }
}

impl From<MeasurementRecord> for MeasurementSeries {
    fn from(record: MeasurementRecord) -> Self {
        Self {
            name: record.name,
            units: record.units,
            annotations: record.annotations.into_iter().map(Annotation::new).collect(),
            results: record.values,
        }
    }
}

/// Load every experiment stored in `path`.
pub fn read_experiments(path: impl AsRef<Path>) -> Result<Vec<ExperimentRecord>, ReporterError> {
    let content = fs::read_to_string(path.as_ref())?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_harness_output_with_extra_fields() {
        let json = r#"[{
            "Name": "Ingestion path",
            "Measurements": [{
                "Type": "Value",
                "ExperimentName": "Ingestion path",
                "Name": "Distributor HTTP push request rate",
                "Style": "",
                "Units": "Requests per Second",
                "PrecisionBundle": {"Duration": 1000000, "ValueFormat": "%f"},
                "Annotations": ["distributor", "distributor"],
                "Values": [10.5, 11.0]
            }]
        }]"#;

        let experiments: Vec<ExperimentRecord> = serde_json::from_str(json).unwrap();

        assert_eq!(experiments.len(), 1);
        let m = &experiments[0].measurements[0];
        assert_eq!(m.units, "Requests per Second");
        assert_eq!(m.values, vec![10.5, 11.0]);

        let series = MeasurementSeries::from(m.clone());
        assert_eq!(series.annotations, vec![Annotation::new("distributor"); 2]);
        assert_eq!(series.results.len(), 2);
    }

    #[test]
    fn each_value_keeps_its_own_annotation() {
        let series = MeasurementSeries {
            name: "heap".to_string(),
            units: "Gigabytes".to_string(),
            annotations: vec![
                Annotation::new("ingester"),
                Annotation::new("querier"),
                Annotation::new("querier"),
            ],
            results: vec![0.5, 0.6, 0.7],
        };

        let record = MeasurementRecord::from(&series);
        assert_eq!(record.annotations, ["ingester", "querier", "querier"]);
        assert_eq!(record.values, series.results);

        assert_eq!(MeasurementSeries::from(record), series);
    }

    #[test]
    fn non_finite_values_survive_the_file() {
        let record = MeasurementRecord {
            name: "Querier request duration P99".to_string(),
            units: "Milliseconds".to_string(),
            annotations: Vec::new(),
            values: vec![1.5, f64::NAN, f64::INFINITY, f64::NEG_INFINITY],
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains(r#""Values":[1.5,"NaN","+Inf","-Inf"]"#));

        let back: MeasurementRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.values[0], 1.5);
        assert!(back.values[1].is_nan());
        assert_eq!(back.values[2], f64::INFINITY);
        assert_eq!(back.values[3], f64::NEG_INFINITY);
    }

    #[test]
    fn null_values_read_as_nan() {
        let json = r#"{"Name": "p99", "Values": [2.0, null]}"#;

        let record: MeasurementRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.values[0], 2.0);
        assert!(record.values[1].is_nan());
    }
}
