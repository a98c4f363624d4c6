//! # Suite Pipeline Tests
//!
//! Walks the whole flow a benchmark suite goes through: label queries with
//! the builders, record samples per spec, export through the configured
//! reporters and render a comparison report from two runs.

use lokibench_workspace::report::{README_FILE, generate};
use lokibench_workspace::reporters::{MEASUREMENTS_FILE, SetupSummary, read_experiments};
use lokibench_workspace::{
    PromDuration, Reporter, ReporterConfig, SpecSummary, SuiteSummary, catalog, constants,
};
use rstest::rstest;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const WINDOW: PromDuration = PromDuration::from_minutes(3);

fn run_suite(report_dir: &Path, description: &str, scale: f64) {
    let config = ReporterConfig {
        report_dir: report_dir.to_path_buf(),
        ..ReporterConfig::default()
    };
    let mut reporters = config.build();

    let mut suite = SuiteSummary::new(description);
    reporters.suite_will_begin(&suite);
    reporters.before_suite_did_run(&SetupSummary {
        passed: true,
        ..SetupSummary::default()
    });

    let mut spec = SpecSummary::new(["ingestion path", "distributor"]);
    reporters.spec_will_run(&spec);
    for sample in 1..=3 {
        for measurement in catalog::write_path(WINDOW).iter().take(2) {
            spec.record(measurement, scale * sample as f64);
        }
    }
    reporters.spec_did_complete(&spec);

    suite.total_specs = 1;
    suite.passed_specs = 1;
    reporters.after_suite_did_run(&SetupSummary::default());
    reporters.suite_did_end(&suite);

    fs::write(
        report_dir.join("benchmark.yaml"),
        format!("scenarios:\n  ingestionPath:\n    description: {description}\n"),
    )
    .unwrap();
}

#[test]
fn configured_reporters_write_csv_and_experiment() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    run_suite(dir.path(), "boltdb-shipper", 10.0);

    let rate = fs::read_to_string(
        dir.path()
            .join("Distributor-HTTP-push-request-rate.csv"),
    )
    .unwrap();
    let rows: Vec<_> = rate.lines().collect();
    assert_eq!(rows.len(), 3);
    assert!(rows[2].ends_with(",30.000000"));

    let avg = dir
        .path()
        .join("Distributor-HTTP-push-request-duration-avg.csv");
    assert!(avg.exists());

    let experiments = read_experiments(dir.path().join(MEASUREMENTS_FILE)).unwrap();
    assert_eq!(experiments[0].name, "boltdb-shipper");
    assert_eq!(experiments[0].measurements.len(), 2);
    assert_eq!(
        experiments[0].measurements[0].annotations,
        vec![constants::DISTRIBUTOR_ANNOTATION.to_string(); 3]
    );
}

#[test]
fn two_runs_render_one_report() {
    let root = TempDir::new().expect("Failed to create temp directory");
    let a = root.path().join("a");
    let b = root.path().join("b");
    fs::create_dir_all(&a).unwrap();
    fs::create_dir_all(&b).unwrap();

    run_suite(&a, "boltdb-shipper", 10.0);
    run_suite(&b, "tsdb-shipper", 20.0);

    let readme = generate(&[a, b], None).unwrap();
    assert_eq!(readme, root.path().join(README_FILE));

    let text = fs::read_to_string(readme).unwrap();
    assert!(text.contains("| boltdb-shipper | 3 | 10.00 | 20.00 | 30.00 |"));
    assert!(text.contains("| tsdb-shipper | 3 | 20.00 | 40.00 | 60.00 |"));
}

#[rstest]
#[case(true, 99, "0.99")]
#[case(false, 50, "0.5")]
fn builders_feed_reporters_unchanged(
    #[case] write: bool,
    #[case] percentile: u8,
    #[case] fraction: &str,
) {
    let index = lokibench_workspace::metrics::request_index_request_rate(
        "Index", "ingester", write, constants::STATUS_2XX, WINDOW,
    );
    let latency = lokibench_workspace::metrics::request_duration_quantile(
        "Querier",
        "querier",
        constants::HTTP_GET_METHOD,
        constants::HTTP_QUERY_RANGE_ROUTE,
        constants::STATUS_2XX,
        percentile,
        WINDOW,
        constants::QUERIER_ANNOTATION,
    );

    let mut spec = SpecSummary::new(["query path"]);
    spec.record(&index, 1.0);
    spec.record(&latency, 2.0);

    let series = &spec.measurements[&latency.name];
    assert_eq!(series.units, constants::MILLISECONDS_UNIT);
    assert!(latency.query.contains(&format!("histogram_quantile({fraction}, ")));
    assert_eq!(
        spec.measurements[&index.name].annotations,
        [constants::INGESTER_ANNOTATION]
    );
}
