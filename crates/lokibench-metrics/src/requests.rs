//! Request rate and latency measurements over `loki_request_duration_seconds`.

use crate::constants::{
    INDEX_CHUNK_OPERATION, INGESTER_ANNOTATION, MILLISECONDS_UNIT, MIN_REQUEST_COUNT,
    REQUESTS_PER_SECOND_UNIT, SECONDS_TO_MILLISECONDS_MULTIPLIER,
};
use crate::duration::PromDuration;
use crate::measurement::{Annotation, Measurement};
use crate::template::QueryTemplate;

const REQUEST_RATE: QueryTemplate = QueryTemplate::new(
    r#"sum(rate(loki_request_duration_seconds_count{job=~".*${job}.*", route=~"${route}", status_code=~"${code}"}[${window}]))"#,
);

const DURATION_SUM_RATE: QueryTemplate = QueryTemplate::new(
    r#"sum(rate(loki_request_duration_seconds_sum{job=~".*${job}.*", method="${method}", route=~"${route}", status_code=~"${code}"}[${window}]))"#,
);

const DURATION_COUNT_RATE: QueryTemplate = QueryTemplate::new(
    r#"clamp_min(sum(rate(loki_request_duration_seconds_count{job=~".*${job}.*", method="${method}", route=~"${route}", status_code=~"${code}"}[${window}])),${floor})"#,
);

const DURATION_AVERAGE: QueryTemplate =
    QueryTemplate::new("(${numerator} / ${denominator}) * ${multiplier}");

const DURATION_QUANTILE: QueryTemplate = QueryTemplate::new(
    r#"histogram_quantile(${quantile}, sum by (job, le) (rate(loki_request_duration_seconds_bucket{job=~".*${job}.*", method="${method}", route=~"${route}", status_code=~"${code}"}[${window}]))) * ${multiplier}"#,
);

const INDEX_REQUEST_RATE: QueryTemplate = QueryTemplate::new(
    r#"sum(rate(loki_index_request_duration_seconds_count{job=~".*${job}.*", operation${operator}"${operation}", status_code=~"${code}"}[${window}]))"#,
);

/// Rate of requests matching `route` and `code` on jobs matching `job`.
pub fn request_rate(
    name: &str,
    job: &str,
    route: &str,
    code: &str,
    window: PromDuration,
    annotation: Annotation,
) -> Measurement {
    Measurement {
        name: format!("{name} request rate"),
        query: REQUEST_RATE.render(&[
            ("job", &job),
            ("route", &route),
            ("code", &code),
            ("window", &window),
        ]),
        unit: REQUESTS_PER_SECOND_UNIT.to_string(),
        annotation,
    }
}

/// Average request latency in milliseconds.
///
/// The request count is floored at `0.01` so an idle window yields
/// `sum / 0.01` instead of a division by zero.
pub fn request_duration_average(
    name: &str,
    job: &str,
    method: &str,
    route: &str,
    code: &str,
    window: PromDuration,
    annotation: Annotation,
) -> Measurement {
    let vars: [(&str, &dyn std::fmt::Display); 6] = [
        ("job", &job),
        ("method", &method),
        ("route", &route),
        ("code", &code),
        ("window", &window),
        ("floor", &MIN_REQUEST_COUNT),
    ];
    let numerator = DURATION_SUM_RATE.render(&vars);
    let denominator = DURATION_COUNT_RATE.render(&vars);

    Measurement {
        name: format!("{name} request duration avg"),
        query: DURATION_AVERAGE.render(&[
            ("numerator", &numerator),
            ("denominator", &denominator),
            ("multiplier", &SECONDS_TO_MILLISECONDS_MULTIPLIER),
        ]),
        unit: MILLISECONDS_UNIT.to_string(),
        annotation,
    }
}

/// Latency percentile in milliseconds from the request duration histogram.
///
/// `percentile` is an integer in `0..=100` and is embedded as a fraction
/// (`99` becomes `0.99`). Larger values are clamped to `100`.
pub fn request_duration_quantile(
    name: &str,
    job: &str,
    method: &str,
    route: &str,
    code: &str,
    percentile: u8,
    window: PromDuration,
    annotation: Annotation,
) -> Measurement {
    let percentile = percentile.min(100);

    Measurement {
        name: format!("{name} request duration P{percentile}"),
        query: DURATION_QUANTILE.render(&[
            ("quantile", &quantile_fraction(percentile)),
            ("job", &job),
            ("method", &method),
            ("route", &route),
            ("code", &code),
            ("window", &window),
            ("multiplier", &SECONDS_TO_MILLISECONDS_MULTIPLIER),
        ]),
        unit: MILLISECONDS_UNIT.to_string(),
        annotation,
    }
}

/// Rate of index requests, split on whether the operation writes chunks.
///
/// Always annotated as an ingester measurement.
pub fn request_index_request_rate(
    name: &str,
    job: &str,
    write_operation: bool,
    code: &str,
    window: PromDuration,
) -> Measurement {
    let operator = if write_operation { "=" } else { "!=" };

    Measurement {
        name: format!("{name} request rate"),
        query: INDEX_REQUEST_RATE.render(&[
            ("job", &job),
            ("operator", &operator),
            ("operation", &INDEX_CHUNK_OPERATION),
            ("code", &code),
            ("window", &window),
        ]),
        unit: REQUESTS_PER_SECOND_UNIT.to_string(),
        annotation: INGESTER_ANNOTATION,
    }
}

/// Render an integer percentile as the quantile PromQL expects.
fn quantile_fraction(percentile: u8) -> String {
    match percentile {
        0 => "0".to_string(),
        100.. => "1".to_string(),
        p => {
            let digits = format!("{p:02}");
            format!("0.{}", digits.trim_end_matches('0'))
        }
    }
}
