//! Sorting algorithm implementations
//!
//! Every algorithm takes a borrowed slice and returns a freshly allocated,
//! ascending `Vec`. The caller's data is never touched.

pub mod bubble;
pub mod insertion;
pub mod quick;
pub mod radix;

use crate::error::SortResult;

/// Signature shared by all sorting algorithms
pub type AlgorithmFn = fn(&[f64]) -> SortResult<Vec<f64>>;
