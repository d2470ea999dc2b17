//! Prometheus metrics for sort jobs
//!
//! Each [`JobMetrics`] owns its own registry. The application creates one at
//! startup and hands it to the request path through `AppState`.
//!
//! Label values are bounded: line sizes are observed rather than used as
//! labels, and job descriptions are truncated and capped in number.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, Opts, Registry, TextEncoder,
};

use crate::{
    constants::{
        ELAPSED_BUCKETS_SECONDS, LINE_SIZE_BUCKETS, MAX_DESCRIPTION_LABEL_CHARS,
        MAX_DESCRIPTION_LABELS, OVERFLOW_DESCRIPTION_LABEL, metric_names,
    },
    models::JobResult,
};

/// Metrics sink for finished sort jobs
#[derive(Clone)]
pub struct JobMetrics {
    registry: Registry,
    /// `<description>.<sort>.elapsed-time`, labelled instead of concatenated
    elapsed: HistogramVec,
    /// Values sorted, per line position
    items: IntCounterVec,
    line_size: HistogramVec,
    jobs: IntCounterVec,
    jobs_failed: IntCounter,
    line_errors: IntCounterVec,
    descriptions: Arc<Mutex<HashSet<String>>>,
}

impl JobMetrics {
    /// Create the metrics and register them in a fresh registry
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let elapsed = HistogramVec::new(
            HistogramOpts::new(
                metric_names::SORT_ELAPSED_SECONDS,
                "Time spent inside the sort algorithm per line",
            )
            .buckets(ELAPSED_BUCKETS_SECONDS.to_vec()),
            &["description", "algorithm"],
        )?;
        let items = IntCounterVec::new(
            Opts::new(metric_names::SORT_ITEMS_TOTAL, "Values sorted per line position"),
            &["line_index"],
        )?;
        let line_size = HistogramVec::new(
            HistogramOpts::new(metric_names::SORT_LINE_SIZE, "Values per sorted line")
                .buckets(LINE_SIZE_BUCKETS.to_vec()),
            &["algorithm"],
        )?;
        let jobs = IntCounterVec::new(
            Opts::new(metric_names::SORT_JOBS_TOTAL, "Sort jobs completed"),
            &["algorithm"],
        )?;
        let jobs_failed = IntCounter::new(
            metric_names::SORT_JOBS_FAILED_TOTAL,
            "Sort jobs rejected before any line ran",
        )?;
        let line_errors = IntCounterVec::new(
            Opts::new(metric_names::SORT_LINE_ERRORS_TOTAL, "Lines the algorithm rejected"),
            &["algorithm"],
        )?;

        registry.register(Box::new(elapsed.clone()))?;
        registry.register(Box::new(items.clone()))?;
        registry.register(Box::new(line_size.clone()))?;
        registry.register(Box::new(jobs.clone()))?;
        registry.register(Box::new(jobs_failed.clone()))?;
        registry.register(Box::new(line_errors.clone()))?;

        Ok(Self {
            registry,
            elapsed,
            items,
            line_size,
            jobs,
            jobs_failed,
            line_errors,
            descriptions: Arc::new(Mutex::new(HashSet::new())),
        })
    }

    /// Record every measurement and line error of a finished job
    pub fn record_result(&self, result: &JobResult) {
        let algorithm = result.algorithm.as_str();
        let description = self.description_label(&result.description);

        for measurement in &result.measurements {
            self.elapsed
                .with_label_values(&[description.as_str(), algorithm])
                .observe(measurement.elapsed.as_secs_f64());

            let line_index = measurement.line_index.to_string();
            self.items
                .with_label_values(&[line_index.as_str()])
                .inc_by(measurement.line_size as u64);
            self.line_size
                .with_label_values(&[algorithm])
                .observe(measurement.line_size as f64);
        }

        if !result.errors.is_empty() {
            self.line_errors
                .with_label_values(&[algorithm])
                .inc_by(result.errors.len() as u64);
        }

        self.jobs.with_label_values(&[algorithm]).inc();
    }

    /// Record a job that failed before producing a result
    pub fn record_job_failure(&self) {
        self.jobs_failed.inc();
    }

    /// Render all metrics in the Prometheus text format
    pub fn encode(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }

    /// Truncate `description` and fold it into the overflow label once the
    /// set of known descriptions is full.
    fn description_label(&self, description: &str) -> String {
        let label: String = description.chars().take(MAX_DESCRIPTION_LABEL_CHARS).collect();

        let mut known = self
            .descriptions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if known.contains(&label) {
            return label;
        }
        if known.len() >= MAX_DESCRIPTION_LABELS {
            return OVERFLOW_DESCRIPTION_LABEL.to_string();
        }

        known.insert(label.clone());
        label
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::models::{LineError, Measurement, SortAlgorithm};

    fn measurement(line_index: usize, line_size: usize, description: &str) -> Measurement {
        Measurement {
            line_index,
            line_id: format!("line{}", line_index),
            line_size,
            elapsed: Duration::from_micros(250),
            description: description.to_string(),
            sorted: vec![0.0; line_size],
        }
    }

    fn result_with_one_line() -> JobResult {
        let mut result = JobResult::new("t", SortAlgorithm::Quick);
        result.measurements.push(measurement(0, 5, "t"));
        result.errors.push(LineError {
            line_index: 1,
            line_id: "b".to_string(),
            message: "boom".to_string(),
        });
        result
    }

    fn series_count(text: &str, prefix: &str) -> usize {
        text.lines().filter(|line| line.starts_with(prefix)).count()
    }

    #[test]
    fn test_records_elapsed_in_seconds() {
        let metrics = JobMetrics::new().unwrap();
        metrics.record_result(&result_with_one_line());

        let histogram = metrics.elapsed.with_label_values(&["t", "quick"]);
        assert_eq!(histogram.get_sample_count(), 1);
        assert!((histogram.get_sample_sum() - 0.000_25).abs() < 1e-12);
    }

    #[test]
    fn test_records_counts() {
        let metrics = JobMetrics::new().unwrap();
        metrics.record_result(&result_with_one_line());
        metrics.record_job_failure();

        assert_eq!(metrics.items.with_label_values(&["0"]).get(), 5);
        assert_eq!(metrics.line_size.with_label_values(&["quick"]).get_sample_sum(), 5.0);
        assert_eq!(metrics.jobs.with_label_values(&["quick"]).get(), 1);
        assert_eq!(metrics.line_errors.with_label_values(&["quick"]).get(), 1);
        assert_eq!(metrics.jobs_failed.get(), 1);
    }

    #[test]
    fn test_distinct_line_sizes_share_series() {
        let metrics = JobMetrics::new().unwrap();
        for size in 0..200 {
            let mut result = JobResult::new("t", SortAlgorithm::Bubble);
            result.measurements.push(measurement(0, size, "t"));
            metrics.record_result(&result);
        }

        let text = metrics.encode().unwrap();
        assert_eq!(series_count(&text, "sort_items_total{"), 1);
        assert_eq!(series_count(&text, "sort_line_size_count{"), 1);
        assert_eq!(metrics.line_size.with_label_values(&["bubble"]).get_sample_count(), 200);
    }

    #[test]
    fn test_description_labels_are_bounded() {
        let metrics = JobMetrics::new().unwrap();
        for n in 0..MAX_DESCRIPTION_LABELS + 50 {
            let description = format!("job {}", n);
            let mut result = JobResult::new(description.as_str(), SortAlgorithm::Quick);
            result.measurements.push(measurement(0, 1, &description));
            metrics.record_result(&result);
        }

        let text = metrics.encode().unwrap();
        assert_eq!(
            series_count(&text, "sort_elapsed_seconds_count{"),
            MAX_DESCRIPTION_LABELS + 1
        );
        let overflow = metrics
            .elapsed
            .with_label_values(&[OVERFLOW_DESCRIPTION_LABEL, "quick"]);
        assert_eq!(overflow.get_sample_count(), 50);

        // Known descriptions keep their own label once the set is full
        assert_eq!(metrics.description_label("job 0"), "job 0");
    }

    #[test]
    fn test_long_description_is_truncated() {
        let metrics = JobMetrics::new().unwrap();
        let long = "x".repeat(MAX_DESCRIPTION_LABEL_CHARS * 3);

        let label = metrics.description_label(&long);
        assert_eq!(label.chars().count(), MAX_DESCRIPTION_LABEL_CHARS);
        assert_eq!(metrics.description_label(&long), label);
    }

    #[test]
    fn test_registries_are_independent() {
        let first = JobMetrics::new().unwrap();
        let second = JobMetrics::new().unwrap();
        first.record_job_failure();

        assert_eq!(second.jobs_failed.get(), 0);
        assert!(first.encode().unwrap().contains("sort_jobs_failed_total 1"));
        assert!(second.encode().unwrap().contains("sort_jobs_failed_total 0"));
    }
}
