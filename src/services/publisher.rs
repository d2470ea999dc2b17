//! Job summary publishing
//!
//! After a job finishes, one [`JobSummary`] is handed to a
//! [`SummaryPublisher`]. The Redis publisher pushes it onto a list that
//! downstream consumers pop from; the log publisher is used when no queue is
//! configured.

use async_trait::async_trait;
use redis::AsyncCommands;
use redis::aio::ConnectionManager;
use tracing::info;

use crate::{
    error::{AppError, AppResult},
    models::JobSummary,
};

/// Destination for job summaries
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SummaryPublisher: Send + Sync {
    async fn publish(&self, summary: &JobSummary) -> AppResult<()>;
}

/// Pushes JSON summaries onto a Redis list
pub struct RedisPublisher {
    redis: ConnectionManager,
    queue: String,
}

impl RedisPublisher {
    /// Connect to Redis at `url` and publish onto the `queue` list
    pub async fn connect(url: &str, queue: impl Into<String>) -> AppResult<Self> {
        let client = redis::Client::open(url)?;
        let redis = ConnectionManager::new(client).await?;

        Ok(Self {
            redis,
            queue: queue.into(),
        })
    }
}

#[async_trait]
impl SummaryPublisher for RedisPublisher {
    async fn publish(&self, summary: &JobSummary) -> AppResult<()> {
        let payload =
            serde_json::to_string(summary).map_err(|e| AppError::Publish(e.to_string()))?;

        let mut redis = self.redis.clone();
        redis.lpush::<_, _, ()>(&self.queue, payload).await?;

        Ok(())
    }
}

/// Writes summaries to the log
#[derive(Debug, Default)]
pub struct LogPublisher;

#[async_trait]
impl SummaryPublisher for LogPublisher {
    async fn publish(&self, summary: &JobSummary) -> AppResult<()> {
        info!(
            job_id = %summary.job_id,
            description = %summary.description,
            sort_algorithm = %summary.sort_algorithm,
            elapsed_ms = summary.elapsed_ms,
            lines = summary.lines,
            failed_lines = summary.failed_lines,
            "{}",
            summary
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use uuid::Uuid;

    use super::*;
    use crate::models::{JobResult, SortAlgorithm};

    #[test]
    fn test_log_publisher_never_fails() {
        let result = JobResult::new("t", SortAlgorithm::Insertion);
        let summary = JobSummary::from_result(Uuid::new_v4(), &result, Duration::from_millis(3));

        assert!(tokio_test::block_on(LogPublisher.publish(&summary)).is_ok());
    }
}
