//! Job summary message published after each job

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::JobResult;

/// Summary of a completed job, as published to the summary queue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSummary {
    pub job_id: Uuid,
    pub description: String,
    pub sort_algorithm: String,
    /// Wall time of the whole job run, in nanoseconds
    pub elapsed_ns: u64,
    /// Same as `elapsed_ns`, converted to milliseconds
    pub elapsed_ms: f64,
    pub lines: usize,
    pub failed_lines: usize,
    pub completed_at: DateTime<Utc>,
}

impl JobSummary {
    /// Build a summary from a job result and the job's total wall time
    pub fn from_result(job_id: Uuid, result: &JobResult, elapsed: Duration) -> Self {
        Self {
            job_id,
            description: result.description.clone(),
            sort_algorithm: result.algorithm.to_string(),
            elapsed_ns: u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX),
            elapsed_ms: elapsed.as_secs_f64() * 1000.0,
            lines: result.line_count(),
            failed_lines: result.errors.len(),
            completed_at: Utc::now(),
        }
    }
}

/// Short text form: `<description> s:<sort> t:<elapsed_ms>`
impl fmt::Display for JobSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} s:{} t:{:.3}",
            self.description, self.sort_algorithm, self.elapsed_ms
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SortAlgorithm;

    #[test]
    fn test_summary_converts_units_explicitly() {
        let result = JobResult::new("Same length integer List", SortAlgorithm::Bubble);
        let summary =
            JobSummary::from_result(Uuid::new_v4(), &result, Duration::from_micros(2_500));

        assert_eq!(summary.elapsed_ns, 2_500_000);
        assert!((summary.elapsed_ms - 2.5).abs() < 1e-9);
        assert_eq!(summary.sort_algorithm, "bubble");
        assert_eq!(summary.to_string(), "Same length integer List s:bubble t:2.500");
    }

    #[test]
    fn test_summary_serializes_camel_case() {
        let result = JobResult::new("t", SortAlgorithm::Quick);
        let summary = JobSummary::from_result(Uuid::nil(), &result, Duration::ZERO);
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["sortAlgorithm"], "quick");
        assert_eq!(json["failedLines"], 0);
        assert!(json.get("completedAt").is_some());
    }
}
