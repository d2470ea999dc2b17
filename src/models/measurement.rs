//! Job execution results

use std::time::Duration;

use serde::Serialize;

use super::SortAlgorithm;

/// Timing of one sorted line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    /// Position of the line in the job
    pub line_index: usize,
    pub line_id: String,
    /// Number of values sorted
    pub line_size: usize,
    /// Monotonic time spent inside the algorithm call only
    pub elapsed: Duration,
    /// Description of the job the line belongs to
    pub description: String,
    /// Sorted output of the algorithm
    pub sorted: Vec<f64>,
}

impl Measurement {
    pub fn elapsed_ns(&self) -> u128 {
        self.elapsed.as_nanos()
    }
}

/// A line the algorithm rejected
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineError {
    pub line_index: usize,
    pub line_id: String,
    pub message: String,
}

/// Outcome of running one job
///
/// `measurements` and `errors` are both ordered by line index. A line appears
/// in exactly one of them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobResult {
    pub description: String,
    pub algorithm: SortAlgorithm,
    pub measurements: Vec<Measurement>,
    pub errors: Vec<LineError>,
}

impl JobResult {
    pub fn new(description: impl Into<String>, algorithm: SortAlgorithm) -> Self {
        Self {
            description: description.into(),
            algorithm,
            measurements: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Sum of the per-line algorithm times
    pub fn total_elapsed(&self) -> Duration {
        self.measurements.iter().map(|m| m.elapsed).sum()
    }

    /// Number of lines the job covered
    pub fn line_count(&self) -> usize {
        self.measurements.len() + self.errors.len()
    }

    /// Whether some, but not all, lines failed
    pub fn is_partial(&self) -> bool {
        !self.errors.is_empty() && !self.measurements.is_empty()
    }
}
