//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod algorithm;
pub mod job;
pub mod measurement;
pub mod summary;

pub use algorithm::*;
pub use job::*;
pub use measurement::*;
pub use summary::*;
