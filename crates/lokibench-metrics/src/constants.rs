//! Process-wide read-only values shared by the builders and catalogs.

use crate::measurement::Annotation;

pub const HTTP_GET_METHOD: &str = "GET";
pub const HTTP_POST_METHOD: &str = "POST";

pub const HTTP_PUSH_ROUTE: &str = "loki_api_v1_push";
pub const HTTP_QUERY_RANGE_ROUTE: &str = "loki_api_v1_query_range";
pub const HTTP_READ_PATH_ROUTES: &str = "loki_api_v1_series|api_prom_series|api_prom_query|api_prom_label|api_prom_label_name_values|loki_api_v1_query|loki_api_v1_query_range|loki_api_v1_labels|loki_api_v1_label_name_values";

pub const GRPC_METHOD: &str = "gRPC";

pub const GRPC_PUSH_ROUTE: &str = "/logproto.Pusher/Push";
pub const GRPC_QUERY_SAMPLE_ROUTE: &str = "/logproto.Querier/QuerySample";
pub const GRPC_READ_PATH_ROUTES: &str = "/logproto.Querier/Query|/logproto.Querier/QuerySample|/logproto.Querier/Label|/logproto.Querier/Series|/logproto.Querier/GetChunkIDs";

pub const INDEX_READ_NAME: &str = "Index successful reads";
pub const INDEX_WRITE_NAME: &str = "Index successful writes";

/// Flag values for [`crate::request_index_request_rate`]
pub const WRITE_OPERATION: bool = true;
pub const READ_OPERATION: bool = false;

/// Index operation compared against by the index request rate query
pub const INDEX_CHUNK_OPERATION: &str = "index_chunk";

/// Status code regexes
pub const STATUS_2XX: &str = "2.*";
pub const STATUS_ANY: &str = ".*";

pub const REQUESTS_PER_SECOND_UNIT: &str = "Requests per Second";
pub const MILLISECONDS_UNIT: &str = "Milliseconds";
pub const MILLICORES_UNIT: &str = "Millicores";
pub const GIGABYTES_UNIT: &str = "Gigabytes";

pub const SECONDS_TO_MILLISECONDS_MULTIPLIER: u64 = 1_000;
pub const CORES_TO_MILLICORES: u64 = 1_000;
pub const BYTES_TO_GIGABYTES_MULTIPLIER: u64 = 1_000_000_000;

/// Floor for the request count denominator of latency averages
pub const MIN_REQUEST_COUNT: &str = "0.01";

pub const DISTRIBUTOR_ANNOTATION: Annotation = Annotation::from_static("distributor");
pub const INGESTER_ANNOTATION: Annotation = Annotation::from_static("ingester");
pub const QUERIER_ANNOTATION: Annotation = Annotation::from_static("querier");
pub const QUERY_FRONTEND_ANNOTATION: Annotation = Annotation::from_static("query-frontend");
pub const COMPACTOR_ANNOTATION: Annotation = Annotation::from_static("compactor");
pub const INDEX_GATEWAY_ANNOTATION: Annotation = Annotation::from_static("index-gateway");
