//! Measurement sets used by the benchmark scenarios.
//!
//! Each component on a path gets a request family: rate, average latency and
//! the P50/P99 latency percentiles.

use crate::constants::*;
use crate::duration::PromDuration;
use crate::measurement::{Annotation, Measurement};
use crate::requests::{
    request_duration_average, request_duration_quantile, request_index_request_rate, request_rate,
};
use crate::resources::{
    container_cpu, container_go_memstats_heap_inuse, container_memory_working_set_bytes,
    persistent_volume_used_bytes,
};

/// Percentiles reported for every request family
pub const REPORTED_PERCENTILES: [u8; 2] = [50, 99];

/// Components with a resource footprint worth reporting: (job, annotation)
pub const COMPONENTS: [(&str, Annotation); 6] = [
    ("distributor", DISTRIBUTOR_ANNOTATION),
    ("ingester", INGESTER_ANNOTATION),
    ("querier", QUERIER_ANNOTATION),
    ("query-frontend", QUERY_FRONTEND_ANNOTATION),
    ("compactor", COMPACTOR_ANNOTATION),
    ("index-gateway", INDEX_GATEWAY_ANNOTATION),
];

fn request_family(
    name: &str,
    job: &str,
    method: &str,
    route: &str,
    window: PromDuration,
    annotation: Annotation,
) -> Vec<Measurement> {
    let mut family = vec![
        request_rate(name, job, route, STATUS_2XX, window, annotation.clone()),
        request_duration_average(
            name,
            job,
            method,
            route,
            STATUS_2XX,
            window,
            annotation.clone(),
        ),
    ];
    family.extend(REPORTED_PERCENTILES.iter().map(|&p| {
        request_duration_quantile(name, job, method, route, STATUS_2XX, p, window, annotation.clone())
    }));
    family
}

/// Push path: distributor HTTP ingestion and ingester gRPC pushes.
pub fn write_path(window: PromDuration) -> Vec<Measurement> {
    let mut set = request_family(
        "Distributor HTTP push",
        "distributor",
        HTTP_POST_METHOD,
        HTTP_PUSH_ROUTE,
        window,
        DISTRIBUTOR_ANNOTATION,
    );
    set.extend(request_family(
        "Ingester gRPC push",
        "ingester",
        GRPC_METHOD,
        GRPC_PUSH_ROUTE,
        window,
        INGESTER_ANNOTATION,
    ));
    set
}

/// Query path: frontend and querier HTTP reads, ingester gRPC reads.
pub fn read_path(window: PromDuration) -> Vec<Measurement> {
    let mut set = request_family(
        "Query frontend HTTP read path",
        "query-frontend",
        HTTP_GET_METHOD,
        HTTP_READ_PATH_ROUTES,
        window,
        QUERY_FRONTEND_ANNOTATION,
    );
    set.extend(request_family(
        "Querier HTTP read path",
        "querier",
        HTTP_GET_METHOD,
        HTTP_READ_PATH_ROUTES,
        window,
        QUERIER_ANNOTATION,
    ));
    set.extend(request_family(
        "Ingester gRPC read path",
        "ingester",
        GRPC_METHOD,
        GRPC_READ_PATH_ROUTES,
        window,
        INGESTER_ANNOTATION,
    ));
    set
}

/// Successful index reads and writes on the ingesters.
pub fn index(window: PromDuration) -> Vec<Measurement> {
    vec![
        request_index_request_rate(INDEX_WRITE_NAME, "ingester", WRITE_OPERATION, STATUS_2XX, window),
        request_index_request_rate(INDEX_READ_NAME, "ingester", READ_OPERATION, STATUS_2XX, window),
    ]
}

/// CPU, memory, heap and volume usage for one component.
pub fn resources(job: &str, window: PromDuration, annotation: Annotation) -> Vec<Measurement> {
    vec![
        container_cpu(job, window, annotation.clone()),
        container_memory_working_set_bytes(job, window, annotation.clone()),
        container_go_memstats_heap_inuse(job, window, annotation.clone()),
        persistent_volume_used_bytes(job, window, annotation),
    ]
}

/// Everything above, with resources for each of [`COMPONENTS`].
pub fn all(window: PromDuration) -> Vec<Measurement> {
    let mut set = write_path(window);
    set.extend(read_path(window));
    set.extend(index(window));
    for (job, annotation) in COMPONENTS {
        set.extend(resources(job, window, annotation));
    }
    set
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: PromDuration = PromDuration::from_minutes(5);

    #[test]
    fn write_path_has_two_families() {
        let set = write_path(WINDOW);
        assert_eq!(set.len(), 8);
        assert_eq!(set[0].name, "Distributor HTTP push request rate");
        assert_eq!(set[3].name, "Distributor HTTP push request duration P99");
        assert!(set[4..].iter().all(|m| m.annotation == INGESTER_ANNOTATION));
    }

    #[test]
    fn read_path_targets_read_routes() {
        let set = read_path(WINDOW);
        assert_eq!(set.len(), 12);
        assert!(set.iter().all(|m| {
            m.query.contains(HTTP_READ_PATH_ROUTES) || m.query.contains(GRPC_READ_PATH_ROUTES)
        }));
    }

    #[test]
    fn index_set_covers_both_operations() {
        let set = index(WINDOW);
        assert_eq!(set[0].name, "Index successful writes request rate");
        assert!(set[0].query.contains(r#"operation="index_chunk""#));
        assert_eq!(set[1].name, "Index successful reads request rate");
        assert!(set[1].query.contains(r#"operation!="index_chunk""#));
    }

    #[test]
    fn all_has_unique_names_per_annotation() {
        let set = all(WINDOW);
        let mut keys: Vec<_> = set
            .iter()
            .map(|m| (m.annotation.as_str().to_string(), m.name.clone()))
            .collect();
        let total = keys.len();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), total);
        assert_eq!(total, 8 + 12 + 2 + COMPONENTS.len() * 4);
    }
}
