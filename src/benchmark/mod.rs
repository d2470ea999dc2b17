//! Instrumented sorting engine
//!
//! The engine is the only part of the service with algorithmic logic:
//!
//! 1. **Algorithms** (`algorithms/`): four pure sorting functions that never
//!    mutate their input.
//! 2. **Selector** (`selector.rs`): maps a requested name onto the closed
//!    [`SortAlgorithm`](crate::models::SortAlgorithm) set.
//! 3. **Timed driver** (`driver.rs`): times a single algorithm call on one line.
//! 4. **Job runner** (`runner.rs`): drives every line of a job and collects
//!    measurements and per-line failures.
//! 5. **Metrics** (`metrics.rs`): Prometheus sink for finished job results.
//!
//! Everything here is synchronous and CPU-bound. Lines within a job are
//! processed strictly in order so that timings are not skewed by contention.

pub mod algorithms;
pub mod driver;
pub mod metrics;
pub mod runner;
pub mod selector;

pub use algorithms::AlgorithmFn;
pub use driver::TimedDriver;
pub use metrics::JobMetrics;
pub use runner::execute;
pub use selector::{resolve, select};
