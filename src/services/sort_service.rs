//! Sort service - Runs sort jobs and reports their outcome

use std::time::Instant;

use tracing::{Instrument, Span, info, info_span, warn};
use uuid::Uuid;

use crate::{
    benchmark::{self, JobMetrics},
    error::AppResult,
    models::{JobResult, JobSummary, SortJob},
    utils::format_elapsed,
};

use super::publisher::SummaryPublisher;

/// Sort service for executing jobs and reporting results
pub struct SortService;

impl SortService {
    /// Run `job`, record its metrics and publish its summary.
    ///
    /// The job runs on the blocking pool so sorting never stalls the async
    /// executor. A failed summary publish is logged and does not fail the
    /// job.
    pub async fn run_job(
        metrics: &JobMetrics,
        publisher: &dyn SummaryPublisher,
        job: SortJob,
    ) -> AppResult<JobResult> {
        let job_id = Uuid::new_v4();
        let span = info_span!(
            "sort_job",
            job_id = %job_id,
            description = %job.description,
            sort_algorithm = %job.sort_algorithm,
        );

        Self::execute_job(job_id, metrics, publisher, job)
            .instrument(span)
            .await
    }

    async fn execute_job(
        job_id: Uuid,
        metrics: &JobMetrics,
        publisher: &dyn SummaryPublisher,
        job: SortJob,
    ) -> AppResult<JobResult> {
        info!(lines = job.lines.len(), items = job.total_items(), "Running sort job");

        let start = Instant::now();
        let span = Span::current();
        let outcome =
            tokio::task::spawn_blocking(move || span.in_scope(|| benchmark::execute(&job)))
                .await
                .map_err(|e| anyhow::anyhow!("sort task failed: {}", e))?;
        let elapsed = start.elapsed();

        let result = match outcome {
            Ok(result) => result,
            Err(err) => {
                metrics.record_job_failure();
                warn!(error = %err, "Sort job rejected");
                return Err(err.into());
            }
        };

        metrics.record_result(&result);

        let summary = JobSummary::from_result(job_id, &result, elapsed);
        if let Err(e) = publisher.publish(&summary).await {
            warn!(error = %e, "Failed to publish job summary");
        }

        info!(
            measured = result.measurements.len(),
            failed = result.errors.len(),
            sort_time = %format_elapsed(result.total_elapsed()),
            job_time = %format_elapsed(elapsed),
            "Sort job completed"
        );

        Ok(result)
    }
}
