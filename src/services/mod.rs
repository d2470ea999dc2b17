//! Business logic services

pub mod publisher;
pub mod sort_service;

pub use publisher::{LogPublisher, RedisPublisher, SummaryPublisher};
pub use sort_service::SortService;
