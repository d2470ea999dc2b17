//! Job runner
//!
//! Resolves the job's algorithm once, then drives every line through the
//! [`TimedDriver`] in order.

use tracing::{debug, warn};

use crate::{
    error::{SortError, SortResult},
    models::{JobResult, LineError, SortJob},
};

use super::{driver::TimedDriver, selector};

/// Execute every line of `job` with the requested algorithm.
///
/// An unknown algorithm name fails the whole job before any line runs.
/// A line the algorithm rejects is recorded in [`JobResult::errors`] and the
/// remaining lines still run.
pub fn execute(job: &SortJob) -> SortResult<JobResult> {
    let algorithm = selector::resolve(&job.sort_algorithm)?;
    let sorter = algorithm.sorter();
    let driver = TimedDriver::new(&job.description);

    let mut result = JobResult::new(job.description.clone(), algorithm);

    for (index, line) in job.lines.iter().enumerate() {
        match driver.run(sorter, line, index) {
            Ok(measurement) => {
                debug!(
                    line_index = index,
                    line_id = %line.id,
                    line_size = measurement.line_size,
                    elapsed_ns = %measurement.elapsed_ns(),
                    "Line sorted"
                );
                result.measurements.push(measurement);
            }
            Err(err @ SortError::AlgorithmExecution { .. }) => {
                warn!(line_index = index, line_id = %line.id, error = %err, "Line failed");
                result.errors.push(LineError {
                    line_index: index,
                    line_id: line.id.clone(),
                    message: err.to_string(),
                });
            }
            Err(err) => return Err(err),
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Line, SortAlgorithm};

    #[test]
    fn test_end_to_end_bubble_job() {
        let job = SortJob::new("t", "bubble", vec![Line::new("a", vec![5.0, 3.0, 1.0, 4.0, 2.0])]);

        let result = execute(&job).unwrap();

        assert_eq!(result.algorithm, SortAlgorithm::Bubble);
        assert_eq!(result.measurements.len(), 1);
        assert!(result.errors.is_empty());
        assert_eq!(result.measurements[0].sorted, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(result.measurements[0].line_size, 5);
        assert_eq!(result.measurements[0].description, "t");
    }

    #[test]
    fn test_line_failure_does_not_stop_job() {
        let job = SortJob::new(
            "mixed",
            "radix",
            vec![
                Line::new("line1", vec![3.0, 1.0, 2.0]),
                Line::new("line2", vec![-1.0, 2.0, 3.0]),
                Line::new("line3", vec![30.0, 10.0, 20.0]),
            ],
        );

        let result = execute(&job).unwrap();

        assert_eq!(result.measurements.len(), 2);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].line_index, 1);
        assert_eq!(result.errors[0].line_id, "line2");
        assert_eq!(result.measurements[0].line_index, 0);
        assert_eq!(result.measurements[1].line_index, 2);
        assert_eq!(result.measurements[1].sorted, vec![10.0, 20.0, 30.0]);
    }

    #[test]
    fn test_unknown_algorithm_fails_whole_job() {
        let job = SortJob::new("t", "bogus", vec![Line::new("a", vec![2.0, 1.0])]);

        let err = execute(&job).unwrap_err();
        assert_eq!(err, SortError::UnsupportedAlgorithm("bogus".to_string()));
    }

    #[test]
    fn test_count_is_advisory() {
        let mut job = SortJob::new("t", "insertion", vec![Line::new("a", vec![2.0, 1.0])]);
        job.count = 17;

        let result = execute(&job).unwrap();
        assert_eq!(result.measurements.len(), 1);
    }

    #[test]
    fn test_empty_lines() {
        let job = SortJob::new(
            "t",
            "quick",
            vec![Line::new("empty", vec![]), Line::new("one", vec![4.0])],
        );

        let result = execute(&job).unwrap();
        assert!(result.measurements[0].sorted.is_empty());
        assert_eq!(result.measurements[1].sorted, vec![4.0]);

        let no_lines = SortJob::new("t", "quick", vec![]);
        let result = execute(&no_lines).unwrap();
        assert_eq!(result.line_count(), 0);
    }
}
