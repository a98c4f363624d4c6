//! # Report Generation Tests
//!
//! End-to-end checks: run directories produced by the JSON reporter are
//! merged into one README at their common parent.

use lokibench_metrics::constants::DISTRIBUTOR_ANNOTATION;
use lokibench_report::{README_FILE, ReportError, generate};
use lokibench_reporters::{JsonReporter, MeasurementSeries, Reporter, SpecSummary, SuiteSummary};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_experiment(dir: &Path, description: &str, series: &[(&str, &[f64])]) {
    fs::create_dir_all(dir).unwrap();

    let mut spec = SpecSummary::new(["ingestion"]);
    for (name, values) in series {
        spec.insert_series(MeasurementSeries {
            name: name.to_string(),
            units: "Requests per Second".to_string(),
            annotations: vec![DISTRIBUTOR_ANNOTATION; values.len()],
            results: values.to_vec(),
        });
    }

    let mut reporter = JsonReporter::new(dir);
    let suite = SuiteSummary::new(description);
    reporter.suite_will_begin(&suite);
    reporter.spec_did_complete(&spec);
    reporter.suite_did_end(&suite);
}

fn write_run(dir: &Path, description: &str, series: &[(&str, &[f64])]) {
    write_experiment(dir, description, series);
    fs::write(
        dir.join("benchmark.yaml"),
        format!("scenarios:\n  ingestionPath:\n    description: {description}\n"),
    )
    .unwrap();
}

#[test]
fn readme_lands_in_common_parent() {
    let root = TempDir::new().expect("Failed to create temp directory");
    let boltdb = root.path().join("runs").join("boltdb");
    let tsdb = root.path().join("runs").join("tsdb");

    write_run(&boltdb, "boltdb-shipper", &[("push rate", &[10.0, 12.0])]);
    write_run(
        &tsdb,
        "tsdb-shipper",
        &[("push rate", &[11.0, 13.0, 15.0]), ("query rate", &[2.0])],
    );

    let readme_path = generate(&[boltdb, tsdb], None).expect("report should render");

    assert_eq!(readme_path, root.path().join("runs").join(README_FILE));
    let readme = fs::read_to_string(&readme_path).unwrap();
    assert!(readme.contains("Runs compared: 2"));
    assert!(readme.contains("## push rate"));
    assert!(readme.contains("## query rate"));
    assert!(readme.contains("| boltdb-shipper | 2 | 10.00 | 11.00 | 12.00 |"));
    assert!(readme.contains("| tsdb-shipper | 3 | 11.00 | 13.00 | 15.00 |"));
    assert!(readme.find("## push rate") < readme.find("## query rate"));
}

#[test]
fn custom_template_is_used() {
    let root = TempDir::new().expect("Failed to create temp directory");
    let run = root.path().join("only");
    write_run(&run, "single", &[("heap", &[0.5])]);

    let readme_path = generate(
        std::slice::from_ref(&run),
        Some("{{#each measurements}}{{name}}={{#each runs}}{{mean}}{{/each}}\n{{/each}}"),
    )
    .unwrap();

    assert_eq!(readme_path, run.join(README_FILE));
    assert_eq!(fs::read_to_string(readme_path).unwrap(), "heap=0.50\n");
}

#[test]
fn missing_run_directory_fails() {
    let root = TempDir::new().expect("Failed to create temp directory");
    let missing: PathBuf = root.path().join("nope");

    let err = generate(&[missing], None).unwrap_err();
    assert!(matches!(err, ReportError::Reporter(_)));
    assert!(!root.path().join(README_FILE).exists());
}

#[test]
fn runs_sharing_a_description_are_counted_separately() {
    let root = TempDir::new().expect("Failed to create temp directory");
    let first = root.path().join("first");
    let second = root.path().join("second");
    write_experiment(&first, "suite", &[("push rate", &[1.0])]);
    write_experiment(&second, "suite", &[("push rate", &[2.0])]);

    let readme = fs::read_to_string(generate(&[first, second], None).unwrap()).unwrap();

    assert!(readme.contains("Runs compared: 2"));
    assert!(readme.contains("| Unknown Benchmark | 1 | 1.00 | 1.00 | 1.00 |"));
    assert!(readme.contains("| Unknown Benchmark | 1 | 2.00 | 2.00 | 2.00 |"));
}

#[test]
fn idle_samples_render_as_nan() {
    let root = TempDir::new().expect("Failed to create temp directory");
    let run = root.path().join("idle");
    write_run(&run, "boltdb-shipper", &[("query p99", &[4.0, f64::NAN])]);

    let readme_path = generate(std::slice::from_ref(&run), None).expect("report should render");

    let readme = fs::read_to_string(readme_path).unwrap();
    assert!(readme.contains("## query p99"));
    assert!(readme.contains("| boltdb-shipper | 4.00 | NaN |"));
}
