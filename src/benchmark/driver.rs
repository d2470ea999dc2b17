//! Timed driver
//!
//! Runs one algorithm against one line and measures only the algorithm call
//! with a monotonic clock.

use std::time::Instant;

use crate::{
    error::SortResult,
    models::{Line, Measurement},
};

use super::algorithms::AlgorithmFn;

/// Times algorithm calls for the lines of one job
pub struct TimedDriver<'a> {
    description: &'a str,
}

impl<'a> TimedDriver<'a> {
    /// Create a driver whose measurements carry the job `description`
    pub fn new(description: &'a str) -> Self {
        Self { description }
    }

    /// Sort `line` with `algorithm` and time the call.
    ///
    /// An algorithm error is propagated as-is; no measurement is produced
    /// for a failed call.
    pub fn run(&self, algorithm: AlgorithmFn, line: &Line, index: usize) -> SortResult<Measurement> {
        let start = Instant::now();
        let outcome = algorithm(&line.data);
        let elapsed = start.elapsed();

        let sorted = outcome?;

        Ok(Measurement {
            line_index: index,
            line_id: line.id.clone(),
            line_size: line.len(),
            elapsed,
            description: self.description.to_string(),
            sorted,
        })
    }
}
