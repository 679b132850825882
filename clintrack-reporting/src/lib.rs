//! Reporting core: time bucketing, metric aggregation and role-based
//! dashboard assembly over an injected [`clintrack_db::EntityStore`].

pub mod activity;
pub mod bucketing;
pub mod config;
pub mod dashboard;
pub mod engine;
pub mod metrics;

pub use activity::ActivityTracker;
pub use bucketing::{Bucket, BucketSeries, Granularity};
pub use config::DashboardConfig;
pub use dashboard::DashboardAssembler;
pub use engine::AggregationEngine;

#[cfg(test)]
pub mod test_utils;
