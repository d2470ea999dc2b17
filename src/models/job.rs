//! Sort job models

use serde::Serialize;

/// A named numeric sequence; the unit of work in a job
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    pub id: String,
    pub data: Vec<f64>,
}

impl Line {
    pub fn new(id: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            id: id.into(),
            data,
        }
    }

    /// Number of values in the line
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// A request to sort every line with one algorithm
///
/// `sort_algorithm` is kept as the raw requested name. It is only resolved
/// when the job runs, so an unknown name is a run-time failure rather than
/// a construction failure. `count` is advisory and never checked against
/// `lines.len()`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SortJob {
    pub description: String,
    pub count: i64,
    #[serde(rename = "type")]
    pub job_type: String,
    pub sort_algorithm: String,
    pub lines: Vec<Line>,
}

impl SortJob {
    pub fn new(
        description: impl Into<String>,
        sort_algorithm: impl Into<String>,
        lines: Vec<Line>,
    ) -> Self {
        Self {
            description: description.into(),
            count: lines.len() as i64,
            job_type: crate::constants::DEFAULT_JOB_TYPE.to_string(),
            sort_algorithm: sort_algorithm.into(),
            lines,
        }
    }

    /// Total number of values across all lines
    pub fn total_items(&self) -> usize {
        self.lines.iter().map(Line::len).sum()
    }
}
