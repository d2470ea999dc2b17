//! Sort request DTOs

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::{
    constants::{
        DEFAULT_JOB_COUNT, DEFAULT_JOB_DESCRIPTION, DEFAULT_JOB_TYPE, DEFAULT_LINE_ID,
        MAX_LINE_LENGTH, MAX_LINES_PER_JOB, algorithms,
    },
    models::{Line, SortJob},
};

/// Sort job request
///
/// Omitted fields fall back to the same defaults as an empty job, except
/// `lines`, which is required.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SortJobRequest {
    #[serde(default = "default_description")]
    pub description: String,

    /// Advisory only
    #[serde(default = "default_count")]
    pub count: i64,

    #[serde(rename = "type", default = "default_job_type")]
    pub job_type: String,

    /// Requested algorithm; validated when the job runs
    #[serde(alias = "sort", default = "default_sort_algorithm")]
    pub sort_algorithm: String,

    #[validate(
        length(max = MAX_LINES_PER_JOB),
        custom(function = "validate_line_lengths")
    )]
    pub lines: Vec<LineRequest>,
}

/// One line of a sort job request
#[derive(Debug, Serialize, Deserialize)]
pub struct LineRequest {
    #[serde(default = "default_line_id")]
    pub id: String,
    pub data: Vec<f64>,
}

fn default_description() -> String {
    DEFAULT_JOB_DESCRIPTION.to_string()
}

fn default_count() -> i64 {
    DEFAULT_JOB_COUNT
}

fn default_job_type() -> String {
    DEFAULT_JOB_TYPE.to_string()
}

fn default_sort_algorithm() -> String {
    algorithms::BUBBLE.to_string()
}

fn default_line_id() -> String {
    DEFAULT_LINE_ID.to_string()
}

fn validate_line_lengths(lines: &[LineRequest]) -> Result<(), ValidationError> {
    match lines.iter().find(|line| line.data.len() > MAX_LINE_LENGTH) {
        Some(line) => {
            let mut err = ValidationError::new("line_too_long");
            err.message = Some(
                format!(
                    "Line '{}' has {} values, at most {} are allowed",
                    line.id,
                    line.data.len(),
                    MAX_LINE_LENGTH
                )
                .into(),
            );
            Err(err)
        }
        None => Ok(()),
    }
}

impl From<LineRequest> for Line {
    fn from(line: LineRequest) -> Self {
        Line::new(line.id, line.data)
    }
}

impl From<SortJobRequest> for SortJob {
    fn from(request: SortJobRequest) -> Self {
        SortJob {
            description: request.description,
            count: request.count,
            job_type: request.job_type,
            sort_algorithm: request.sort_algorithm,
            lines: request.lines.into_iter().map(Line::from).collect(),
        }
    }
}
