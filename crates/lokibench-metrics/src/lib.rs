//! # Lokibench Metrics
//!
//! Builders that label Prometheus queries for Loki benchmark runs.
//!
//! Every builder is a pure function returning an immutable [`Measurement`]:
//! a human-readable name, the PromQL text, the unit the result is expressed
//! in and an [`Annotation`] used to group results downstream. Nothing here
//! executes a query; caller-supplied label values are embedded verbatim.
//!
//! ## Usage
//!
//! ```rust
//! use lokibench_metrics::{constants, request_rate, PromDuration};
//!
//! let m = request_rate(
//!     "distributor push",
//!     "distributor",
//!     constants::HTTP_PUSH_ROUTE,
//!     constants::STATUS_2XX,
//!     PromDuration::from_minutes(5),
//!     constants::DISTRIBUTOR_ANNOTATION,
//! );
//!
//! assert_eq!(m.name, "distributor push request rate");
//! assert!(m.query.contains("[5m]"));
//! ```

/// Scenario catalogs composing the builders
pub mod catalog;
/// Routes, units, multipliers and annotations
pub mod constants;
/// Prometheus duration formatting and parsing
pub mod duration;
/// Measurement and annotation records
pub mod measurement;
/// Request rate and latency builders
pub mod requests;
/// Container and volume resource builders
pub mod resources;
/// Query template rendering
pub mod template;

pub use duration::{DurationParseError, PromDuration};
pub use measurement::{Annotation, Measurement};
pub use requests::{
    request_duration_average, request_duration_quantile, request_index_request_rate, request_rate,
};
pub use resources::{
    container_cpu, container_go_memstats_heap_inuse, container_memory_working_set_bytes,
    persistent_volume_used_bytes,
};
pub use template::QueryTemplate;
