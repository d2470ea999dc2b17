//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Default log filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Default maximum request body size in bytes (10 MB)
pub const DEFAULT_MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

// =============================================================================
// QUEUE DEFAULTS
// =============================================================================

/// Default Redis list that receives job summaries
pub const DEFAULT_SUMMARY_QUEUE_NAME: &str = "sort_summaries";

// =============================================================================
// SORT JOB DEFAULTS
// =============================================================================

/// Description used when the payload omits one
pub const DEFAULT_JOB_DESCRIPTION: &str = "Not Initialized";

/// Advisory line count used when the payload omits one
pub const DEFAULT_JOB_COUNT: i64 = 1;

/// Job type used when the payload omits one
pub const DEFAULT_JOB_TYPE: &str = "Constant";

/// Line id used when a line omits one
pub const DEFAULT_LINE_ID: &str = "0";

/// Maximum number of lines accepted in a single job
pub const MAX_LINES_PER_JOB: u64 = 1_000;

/// Maximum number of values accepted in a single line
pub const MAX_LINE_LENGTH: usize = 100_000;

// =============================================================================
// SORT ALGORITHMS
// =============================================================================

/// Algorithm identifiers accepted in `sortAlgorithm`
pub mod algorithms {
    pub const BUBBLE: &str = "bubble";
    pub const INSERTION: &str = "insertion";
    pub const QUICK: &str = "quick";
    pub const RADIX: &str = "radix";

    /// All supported algorithm identifiers
    pub const ALL: &[&str] = &[BUBBLE, INSERTION, QUICK, RADIX];
}

// =============================================================================
// METRICS
// =============================================================================

/// Metric names exported on `/metrics`
pub mod metric_names {
    pub const SORT_ELAPSED_SECONDS: &str = "sort_elapsed_seconds";
    pub const SORT_ITEMS_TOTAL: &str = "sort_items_total";
    pub const SORT_LINE_SIZE: &str = "sort_line_size";
    pub const SORT_JOBS_TOTAL: &str = "sort_jobs_total";
    pub const SORT_JOBS_FAILED_TOTAL: &str = "sort_jobs_failed_total";
    pub const SORT_LINE_ERRORS_TOTAL: &str = "sort_line_errors_total";
}

/// Histogram buckets for per-line sort time, in seconds
pub const ELAPSED_BUCKETS_SECONDS: &[f64] = &[
    0.000_001, 0.000_01, 0.000_1, 0.001, 0.01, 0.1, 0.5, 1.0, 5.0, 30.0,
];

/// Histogram buckets for values per line
pub const LINE_SIZE_BUCKETS: &[f64] = &[
    0.0, 10.0, 100.0, 1_000.0, 10_000.0, 100_000.0,
];

/// Longest `description` kept as a metric label, in characters
pub const MAX_DESCRIPTION_LABEL_CHARS: usize = 64;

/// Distinct `description` label values kept before folding into the overflow label
pub const MAX_DESCRIPTION_LABELS: usize = 100;

/// Label used for descriptions past [`MAX_DESCRIPTION_LABELS`]
pub const OVERFLOW_DESCRIPTION_LABEL: &str = "other";

// =============================================================================
// API VERSIONING
// =============================================================================

/// API base path
pub const API_BASE_PATH: &str = "/api/v1";
