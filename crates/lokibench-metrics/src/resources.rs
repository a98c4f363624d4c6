//! Container and volume resource measurements.

use crate::constants::{
    BYTES_TO_GIGABYTES_MULTIPLIER, CORES_TO_MILLICORES, GIGABYTES_UNIT, MILLICORES_UNIT,
};
use crate::duration::PromDuration;
use crate::measurement::{Annotation, Measurement};
use crate::template::QueryTemplate;

const CONTAINER_CPU: QueryTemplate = QueryTemplate::new(
    r#"sum(avg_over_time(pod:container_cpu_usage:sum{pod=~".*${job}.*"}[${window}])) * ${multiplier}"#,
);

const CONTAINER_WORKING_SET: QueryTemplate = QueryTemplate::new(
    r#"sum(avg_over_time(container_memory_working_set_bytes{pod=~".*${job}.*", container=""}[${window}]) / ${divisor})"#,
);

const GO_HEAP_INUSE: QueryTemplate =
    QueryTemplate::new(r#"sum(go_memstats_heap_inuse_bytes{pod=~".*${job}.*"}) / ${divisor}"#);

const PV_USED_BYTES: QueryTemplate = QueryTemplate::new(
    r#"sum(avg_over_time(kubelet_volume_stats_used_bytes{persistentvolumeclaim=~".*${job}.*"}[${window}]) / ${divisor})"#,
);

/// Summed CPU usage of pods matching `job`, in millicores.
pub fn container_cpu(job: &str, window: PromDuration, annotation: Annotation) -> Measurement {
    Measurement {
        name: "Sum of Container CPU Usage".to_string(),
        query: CONTAINER_CPU.render(&[
            ("job", &job),
            ("window", &window),
            ("multiplier", &CORES_TO_MILLICORES),
        ]),
        unit: MILLICORES_UNIT.to_string(),
        annotation,
    }
}

/// Summed working set memory of pods matching `job`, in gigabytes.
pub fn container_memory_working_set_bytes(
    job: &str,
    window: PromDuration,
    annotation: Annotation,
) -> Measurement {
    Measurement {
        name: "Sum of Container WorkingSet Memory".to_string(),
        query: CONTAINER_WORKING_SET.render(&[
            ("job", &job),
            ("window", &window),
            ("divisor", &BYTES_TO_GIGABYTES_MULTIPLIER),
        ]),
        unit: GIGABYTES_UNIT.to_string(),
        annotation,
    }
}

/// Go heap in use by pods matching `job`, in gigabytes.
///
/// This is an instant query; `window` is accepted for a uniform signature
/// and ignored.
pub fn container_go_memstats_heap_inuse(
    job: &str,
    _window: PromDuration,
    annotation: Annotation,
) -> Measurement {
    Measurement {
        name: "Sum of Container Go Memstats Heap Inuse".to_string(),
        query: GO_HEAP_INUSE.render(&[("job", &job), ("divisor", &BYTES_TO_GIGABYTES_MULTIPLIER)]),
        unit: GIGABYTES_UNIT.to_string(),
        annotation,
    }
}

/// Used bytes of persistent volume claims matching `job`, in gigabytes.
pub fn persistent_volume_used_bytes(
    job: &str,
    window: PromDuration,
    annotation: Annotation,
) -> Measurement {
    Measurement {
        name: "Sum of Persistent Volume Used Bytes".to_string(),
        query: PV_USED_BYTES.render(&[
            ("job", &job),
            ("window", &window),
            ("divisor", &BYTES_TO_GIGABYTES_MULTIPLIER),
        ]),
        unit: GIGABYTES_UNIT.to_string(),
        annotation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::INGESTER_ANNOTATION;

    const WINDOW: PromDuration = PromDuration::from_minutes(3);

    #[test]
    fn cpu_is_scaled_to_millicores() {
        let m = container_cpu("ingester", WINDOW, INGESTER_ANNOTATION);
        assert_eq!(m.name, "Sum of Container CPU Usage");
        assert_eq!(m.unit, MILLICORES_UNIT);
        assert_eq!(
            m.query,
            r#"sum(avg_over_time(pod:container_cpu_usage:sum{pod=~".*ingester.*"}[3m])) * 1000"#
        );
    }

    #[test]
    fn working_set_is_scaled_to_gigabytes() {
        let m = container_memory_working_set_bytes("ingester", WINDOW, INGESTER_ANNOTATION);
        assert_eq!(m.unit, GIGABYTES_UNIT);
        assert_eq!(
            m.query,
            r#"sum(avg_over_time(container_memory_working_set_bytes{pod=~".*ingester.*", container=""}[3m]) / 1000000000)"#
        );
    }

    #[test]
    fn heap_inuse_ignores_window() {
        let short = container_go_memstats_heap_inuse("querier", WINDOW, INGESTER_ANNOTATION);
        let long = container_go_memstats_heap_inuse(
            "querier",
            PromDuration::from_minutes(60),
            INGESTER_ANNOTATION,
        );
        assert_eq!(short, long);
        assert_eq!(
            short.query,
            r#"sum(go_memstats_heap_inuse_bytes{pod=~".*querier.*"}) / 1000000000"#
        );
    }

    #[test]
    fn persistent_volume_uses_claim_selector() {
        let m = persistent_volume_used_bytes("ingester", WINDOW, INGESTER_ANNOTATION);
        assert_eq!(m.name, "Sum of Persistent Volume Used Bytes");
        assert!(m.query.contains(r#"persistentvolumeclaim=~".*ingester.*""#));
        assert!(m.query.contains("[3m]"));
        assert_eq!(m.unit, GIGABYTES_UNIT);
    }
}
